//! In-memory [`FlagStore`] for tests and local runs.

use std::collections::{BTreeMap, HashMap};

use sensor_core::{FlagStore, SelfSwitchKey, SwitchId};

/// Self-switches keyed by (map, event, letter) and global switches by id.
///
/// Unset flags read as `false`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlagStore {
    local: HashMap<SelfSwitchKey, bool>,
    global: BTreeMap<SwitchId, bool>,
}

impl InMemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global switches that are currently on, in id order.
    pub fn switches_on(&self) -> impl Iterator<Item = SwitchId> + '_ {
        self.global
            .iter()
            .filter(|&(_, on)| *on)
            .map(|(id, _)| *id)
    }

    pub fn clear(&mut self) {
        self.local.clear();
        self.global.clear();
    }
}

impl FlagStore for InMemoryFlagStore {
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

#[cfg(test)]
mod tests {
    use sensor_core::{EventId, MapId, SelfSwitch};

    use super::*;

    #[test]
    fn unset_flags_read_false() {
        let store = InMemoryFlagStore::new();
        let key = SelfSwitchKey::new(MapId(1), EventId(1), SelfSwitch::A);

        assert!(!store.local(key));
        assert!(!store.global(SwitchId(3)));
    }

    #[test]
    fn toggles_flip_and_report_new_value() {
        let mut store = InMemoryFlagStore::new();

        assert!(store.toggle_global(SwitchId(2)));
        assert!(store.toggle_global(SwitchId(5)));
        assert!(!store.toggle_global(SwitchId(2)));

        assert_eq!(store.switches_on().collect::<Vec<_>>(), vec![SwitchId(5)]);
    }

    #[test]
    fn self_switches_are_scoped_by_map_and_event() {
        let mut store = InMemoryFlagStore::new();
        let key = SelfSwitchKey::new(MapId(1), EventId(4), SelfSwitch::B);
        store.set_local(key, true);

        assert!(store.local(key));
        assert!(!store.local(SelfSwitchKey::new(MapId(2), EventId(4), SelfSwitch::B)));
        assert!(!store.local(SelfSwitchKey::new(MapId(1), EventId(5), SelfSwitch::B)));

        store.clear();
        assert!(!store.local(key));
    }
}
