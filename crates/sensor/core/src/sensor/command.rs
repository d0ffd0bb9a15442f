//! Sensor commands as configured on map events.
//!
//! A command pairs a [`DetectionMode`] with its range rule and the flags to
//! toggle. [`SensorCommand::from_args`] accepts the string-keyed arguments an
//! editor stores; malformed range arguments leave the command loaded but
//! make it fail closed.

use crate::flags::{SelfSwitch, SwitchId, ToggleTarget};
use crate::state::Position;

use super::error::CommandError;
use super::geometry::{ComparisonOperator, is_in_range};
use super::mode::DetectionMode;
use super::stealth::STEALTH_REACH;

pub const ARG_OPERATOR: &str = "Operator";
pub const ARG_DISTANCE: &str = "Distance";
pub const ARG_SELF_SWITCH: &str = "Self-Switch";
pub const ARG_SWITCH: &str = "Switch";

/// Operator and threshold compared against the observer/target distance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRule {
    pub operator: ComparisonOperator,
    pub threshold: f64,
}

impl RangeRule {
    pub const DEFAULT_OPERATOR: ComparisonOperator = ComparisonOperator::LessOrEqual;
    pub const DEFAULT_THRESHOLD: f64 = 3.0;

    /// Fixed reach of stealth interactions.
    pub const ADJACENT: Self = Self::new(ComparisonOperator::LessOrEqual, STEALTH_REACH);

    pub const fn new(operator: ComparisonOperator, threshold: f64) -> Self {
        Self {
            operator,
            threshold,
        }
    }

    /// Parses editor strings. Thresholds must be finite decimals.
    pub fn parse(operator: &str, threshold: &str) -> Result<Self, CommandError> {
        Ok(Self::new(parse_operator(operator)?, parse_threshold(threshold)?))
    }

    pub fn matches(&self, observer: Position, target: Position) -> bool {
        is_in_range(observer, target, self.operator, self.threshold)
    }
}

impl Default for RangeRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OPERATOR, Self::DEFAULT_THRESHOLD)
    }
}

/// One configured sensor.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorCommand {
    pub mode: DetectionMode,
    /// `Err` keeps the parse failure around; such a command never triggers.
    pub range: Result<RangeRule, CommandError>,
    pub toggle: ToggleTarget,
}

impl SensorCommand {
    /// Range-based command for any non-stealth mode.
    pub fn proximity(mode: DetectionMode, range: RangeRule, toggle: ToggleTarget) -> Self {
        Self {
            mode,
            range: Ok(range),
            toggle,
        }
    }

    pub fn stealth_kill(toggle: ToggleTarget) -> Self {
        Self {
            mode: DetectionMode::StealthKill,
            range: Ok(RangeRule::ADJACENT),
            toggle,
        }
    }

    /// Builds a command from its editor name and string arguments.
    ///
    /// Argument keys match case-insensitively. Missing arguments take the
    /// editor defaults: `less than or equal to`, `3`, self-switch `A` (`B` for
    /// `EnableStealthKill`) and switch `0`.
    ///
    /// # Errors
    ///
    /// Unknown command names and bad flag identifiers are rejected. Bad
    /// operators or thresholds are not: they are stored in [`Self::range`].
    pub fn from_args<'a, I>(command: &str, args: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mode = command
            .trim()
            .parse::<DetectionMode>()
            .map_err(|_| CommandError::UnknownCommand(command.to_string()))?;
        let args: Vec<(&str, &str)> = args.into_iter().collect();
        let arg = |key: &str| {
            args.iter()
                .find(|(name, _)| name.trim().eq_ignore_ascii_case(key))
                .map(|(_, value)| *value)
        };

        let default_letter = if mode.is_stealth() {
            SelfSwitch::B
        } else {
            SelfSwitch::A
        };
        let self_switch = match arg(ARG_SELF_SWITCH) {
            Some(value) => parse_self_switch(value)?,
            None => Some(default_letter),
        };
        let switch = match arg(ARG_SWITCH) {
            Some(value) => parse_switch(value)?,
            None => None,
        };
        let toggle = ToggleTarget::new(self_switch, switch);

        if mode.is_stealth() {
            return Ok(Self::stealth_kill(toggle));
        }

        let range = arg(ARG_OPERATOR)
            .map_or(Ok(RangeRule::DEFAULT_OPERATOR), parse_operator)
            .and_then(|operator| {
                let threshold = arg(ARG_DISTANCE)
                    .map_or(Ok(RangeRule::DEFAULT_THRESHOLD), parse_threshold)?;
                Ok(RangeRule::new(operator, threshold))
            });

        Ok(Self {
            mode,
            range,
            toggle,
        })
    }

    pub fn is_inert(&self) -> bool {
        self.range.is_err()
    }
}

fn parse_operator(value: &str) -> Result<ComparisonOperator, CommandError> {
    value
        .trim()
        .parse::<ComparisonOperator>()
        .map_err(|_| CommandError::InvalidOperator(value.to_string()))
}

fn parse_threshold(value: &str) -> Result<f64, CommandError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|threshold| threshold.is_finite())
        .ok_or_else(|| CommandError::InvalidThreshold(value.to_string()))
}

fn parse_self_switch(value: &str) -> Result<Option<SelfSwitch>, CommandError> {
    let value = value.trim();
    if value == "0" || value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<SelfSwitch>()
        .map(Some)
        .map_err(|_| CommandError::InvalidSelfSwitch(value.to_string()))
}

fn parse_switch(value: &str) -> Result<Option<SwitchId>, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(SwitchId::from_editor)
        .map_err(|_| CommandError::InvalidSwitch(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: [(&str, &str); 0] = [];

    #[test]
    fn defaults_fill_missing_arguments() {
        let command = SensorCommand::from_args("Basic", NO_ARGS).unwrap();
        assert_eq!(command.mode, DetectionMode::AllDirections);
        assert_eq!(command.range, Ok(RangeRule::new(ComparisonOperator::LessOrEqual, 3.0)));
        assert_eq!(command.toggle, ToggleTarget::new(Some(SelfSwitch::A), None));
    }

    #[test]
    fn editor_arguments_are_parsed() {
        let command = SensorCommand::from_args(
            "FacingLine",
            [
                ("Operator", "less than"),
                ("Distance", "4.5"),
                ("Self-Switch", "C"),
                ("Switch", "12"),
            ],
        )
        .unwrap();

        assert_eq!(command.mode, DetectionMode::FacingInLine);
        assert_eq!(command.range, Ok(RangeRule::new(ComparisonOperator::LessThan, 4.5)));
        assert_eq!(
            command.toggle,
            ToggleTarget::new(Some(SelfSwitch::C), Some(SwitchId(12)))
        );
    }

    #[test]
    fn zero_disables_both_flags() {
        let command =
            SensorCommand::from_args("Facing", [("Self-Switch", "0"), ("Switch", "0")]).unwrap();
        assert!(command.toggle.is_noop());
    }

    #[test]
    fn bad_operator_fails_closed_instead_of_rejecting() {
        let command = SensorCommand::from_args("Orthogonal", [("Operator", "roughly")]).unwrap();
        assert!(command.is_inert());
        assert_eq!(
            command.range,
            Err(CommandError::InvalidOperator("roughly".to_string()))
        );
        assert!(command.range.unwrap_err().is_fail_closed());
    }

    #[test]
    fn non_numeric_threshold_fails_closed() {
        for threshold in ["three", "", "NaN", "inf"] {
            let command = SensorCommand::from_args("Basic", [("Distance", threshold)]).unwrap();
            assert!(command.is_inert(), "threshold {threshold:?} should be inert");
        }
    }

    #[test]
    fn stealth_kill_ignores_range_and_defaults_to_b() {
        let command = SensorCommand::from_args(
            "EnableStealthKill",
            [("Operator", "bogus"), ("Switch", "4")],
        )
        .unwrap();
        assert_eq!(command.mode, DetectionMode::StealthKill);
        assert_eq!(command.range, Ok(RangeRule::ADJACENT));
        assert_eq!(
            command.toggle,
            ToggleTarget::new(Some(SelfSwitch::B), Some(SwitchId(4)))
        );
    }

    #[test]
    fn unknown_command_and_bad_flags_are_rejected() {
        assert_eq!(
            SensorCommand::from_args("Sniff", NO_ARGS),
            Err(CommandError::UnknownCommand("Sniff".to_string()))
        );
        assert_eq!(
            SensorCommand::from_args("Basic", [("Self-Switch", "Z")]),
            Err(CommandError::InvalidSelfSwitch("Z".to_string()))
        );
        assert_eq!(
            SensorCommand::from_args("Basic", [("Switch", "-1")]),
            Err(CommandError::InvalidSwitch("-1".to_string()))
        );
    }

    #[test]
    fn argument_keys_match_case_insensitively() {
        let command =
            SensorCommand::from_args("basic", [("operator", ">"), ("DISTANCE", "2")]).unwrap();
        assert_eq!(command.range, Ok(RangeRule::new(ComparisonOperator::GreaterThan, 2.0)));
    }
}
