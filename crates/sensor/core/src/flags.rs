//! Boolean flags toggled by sensors.
//!
//! Two scopes exist: self-switches keyed by `(map, event, letter)` and global
//! switches keyed by an integer id. Storage belongs to the host; the sensor
//! only reads and writes through [`FlagStore`].

use std::fmt;

use crate::state::{EventId, MapId};

/// Letter of an event-local self-switch.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SelfSwitch {
    A,
    B,
    C,
    D,
}

/// Full key of a self-switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfSwitchKey {
    pub map: MapId,
    pub event: EventId,
    pub letter: SelfSwitch,
}

impl SelfSwitchKey {
    pub const fn new(map: MapId, event: EventId, letter: SelfSwitch) -> Self {
        Self { map, event, letter }
    }
}

impl fmt::Display for SelfSwitchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.map, self.event, self.letter)
    }
}

/// Identifier of a global switch. Id 0 is reserved as "no switch".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchId(pub u32);

impl SwitchId {
    /// Maps the editor's "0 = none" convention onto `Option`.
    pub const fn from_editor(id: u32) -> Option<Self> {
        if id == 0 { None } else { Some(Self(id)) }
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "switch{}", self.0)
    }
}

/// Host-owned flag storage.
///
/// Unset flags read as `false`.
pub trait FlagStore {
    fn local(&self, key: SelfSwitchKey) -> bool;
    fn set_local(&mut self, key: SelfSwitchKey, value: bool);
    fn global(&self, id: SwitchId) -> bool;
    fn set_global(&mut self, id: SwitchId, value: bool);

    /// Negates a self-switch and returns the new value.
    fn toggle_local(&mut self, key: SelfSwitchKey) -> bool {
        let value = !self.local(key);
        self.set_local(key, value);
        value
    }

    /// Negates a global switch and returns the new value.
    fn toggle_global(&mut self, id: SwitchId) -> bool {
        let value = !self.global(id);
        self.set_global(id, value);
        value
    }
}

/// Which flags a sensor flips when it triggers. Both halves are optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleTarget {
    pub self_switch: Option<SelfSwitch>,
    pub switch: Option<SwitchId>,
}

impl ToggleTarget {
    pub const fn new(self_switch: Option<SelfSwitch>, switch: Option<SwitchId>) -> Self {
        Self {
            self_switch,
            switch,
        }
    }

    pub const fn is_noop(&self) -> bool {
        self.self_switch.is_none() && self.switch.is_none()
    }

    /// Negates every configured flag.
    ///
    /// This is an unconditional flip, not a latch: applying it twice restores
    /// the original values.
    pub fn apply<S>(&self, map: MapId, event: EventId, flags: &mut S) -> ToggleReport
    where
        S: FlagStore + ?Sized,
    {
        let self_switch = self.self_switch.map(|letter| {
            let key = SelfSwitchKey::new(map, event, letter);
            (key, flags.toggle_local(key))
        });
        let switch = self.switch.map(|id| (id, flags.toggle_global(id)));

        ToggleReport {
            self_switch,
            switch,
        }
    }
}

/// New flag values written by one toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleReport {
    pub self_switch: Option<(SelfSwitchKey, bool)>,
    pub switch: Option<(SwitchId, bool)>,
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Minimal store used by unit tests across the crate.
    #[derive(Default)]
    pub(crate) struct TestFlags {
        pub(crate) local: HashMap<SelfSwitchKey, bool>,
        pub(crate) global: HashMap<SwitchId, bool>,
    }

    impl FlagStore for TestFlags {
        fn local(&self, key: SelfSwitchKey) -> bool {
            self.local.get(&key).copied().unwrap_or(false)
        }

        fn set_local(&mut self, key: SelfSwitchKey, value: bool) {
            self.local.insert(key, value);
        }

        fn global(&self, id: SwitchId) -> bool {
            self.global.get(&id).copied().unwrap_or(false)
        }

        fn set_global(&mut self, id: SwitchId, value: bool) {
            self.global.insert(id, value);
        }
    }

    #[test]
    fn switch_zero_means_none() {
        assert_eq!(SwitchId::from_editor(0), None);
        assert_eq!(SwitchId::from_editor(12), Some(SwitchId(12)));
    }

    #[test]
    fn self_switch_letter_parses() {
        assert_eq!("a".parse::<SelfSwitch>(), Ok(SelfSwitch::A));
        assert_eq!("D".parse::<SelfSwitch>(), Ok(SelfSwitch::D));
        assert!("E".parse::<SelfSwitch>().is_err());
    }

    #[test]
    fn apply_flips_both_scopes() {
        let mut flags = TestFlags::default();
        let target = ToggleTarget::new(Some(SelfSwitch::A), Some(SwitchId(3)));

        let report = target.apply(MapId(1), EventId(7), &mut flags);

        let key = SelfSwitchKey::new(MapId(1), EventId(7), SelfSwitch::A);
        assert_eq!(report.self_switch, Some((key, true)));
        assert_eq!(report.switch, Some((SwitchId(3), true)));
        assert!(flags.local(key));
        assert!(flags.global(SwitchId(3)));
    }

    #[test]
    fn applying_twice_restores_original_values() {
        let mut flags = TestFlags::default();
        let target = ToggleTarget::new(Some(SelfSwitch::B), None);

        target.apply(MapId(1), EventId(2), &mut flags);
        let report = target.apply(MapId(1), EventId(2), &mut flags);

        let key = SelfSwitchKey::new(MapId(1), EventId(2), SelfSwitch::B);
        assert_eq!(report.self_switch, Some((key, false)));
        assert!(!flags.local(key));
    }

    #[test]
    fn noop_target_touches_nothing() {
        let mut flags = TestFlags::default();
        let target = ToggleTarget::default();
        assert!(target.is_noop());

        let report = target.apply(MapId(1), EventId(2), &mut flags);

        assert_eq!(report, ToggleReport::default());
        assert!(flags.local.is_empty());
        assert!(flags.global.is_empty());
    }
}
