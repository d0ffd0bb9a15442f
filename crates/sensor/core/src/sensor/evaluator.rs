//! Mode composition and the toggle effect.
//!
//! [`ProximityEvaluator::detect`] is a pure decision over two agent snapshots.
//! [`ProximityEvaluator::evaluate`] takes the snapshots from an [`Env`], runs
//! the decision and, only on success, flips the command's flags.

use crate::config::{ObstacleMask, SensorConfig};
use crate::env::{AgentOracle, CellInfo, Env, InputOracle, MapOracle, OracleError};
use crate::flags::{FlagStore, ToggleReport};
use crate::state::{Agent, AgentRole, EventId, MapId, Position};

use super::command::SensorCommand;
use super::error::EvaluationError;
use super::geometry::{ComparisonOperator, is_facing_toward, is_in_range, is_orthogonal};
use super::mode::DetectionMode;
use super::sight::SightLine;
use super::stealth::{STEALTH_REACH, can_stealth_interact};

/// Why a command did not trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum MissReason {
    /// The command's operator or threshold failed to parse.
    InvalidRange,
    OutOfRange,
    NotFacing,
    NotAligned,
    ActionNotHeld,
    /// An obstacle sits on the traced line at the given cell.
    Obstructed(Position),
}

/// Outcome of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detection {
    Triggered(ToggleReport),
    Missed(MissReason),
}

impl Detection {
    pub const fn is_triggered(&self) -> bool {
        matches!(self, Detection::Triggered(_))
    }
}

/// Everything one evaluation reads, captured up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encounter {
    pub map: MapId,
    pub event: EventId,
    pub observer: Agent,
    pub target: Agent,
    /// Only consulted by stealth commands.
    pub action_held: bool,
}

/// Evaluates sensor commands against agent snapshots.
#[derive(Clone, Debug, Default)]
pub struct ProximityEvaluator {
    config: SensorConfig,
}

impl ProximityEvaluator {
    pub fn new(config: SensorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn obstacles(&self) -> &ObstacleMask {
        &self.config.obstacles
    }

    /// Decides whether `command` fires for this encounter.
    ///
    /// Mode predicates are checked first; line of sight is the final gate for
    /// every mode, stealth included.
    pub fn detect<F>(
        &self,
        command: &SensorCommand,
        encounter: &Encounter,
        lookup: F,
    ) -> Result<(), MissReason>
    where
        F: FnMut(Position) -> Option<CellInfo>,
    {
        let observer = encounter.observer.position;
        let target = encounter.target.position;

        if command.mode.is_stealth() {
            if !can_stealth_interact(target, encounter.target.direction, observer) {
                let in_reach =
                    is_in_range(observer, target, ComparisonOperator::LessOrEqual, STEALTH_REACH);
                return Err(if in_reach {
                    MissReason::NotFacing
                } else {
                    MissReason::OutOfRange
                });
            }
            if !encounter.action_held {
                return Err(MissReason::ActionNotHeld);
            }
        } else {
            let range = command
                .range
                .as_ref()
                .map_err(|_| MissReason::InvalidRange)?;
            if !range.matches(observer, target) {
                return Err(MissReason::OutOfRange);
            }
            if command.mode.requires_facing()
                && !is_facing_toward(encounter.observer.direction, observer, target)
            {
                return Err(MissReason::NotFacing);
            }
            if command.mode.requires_alignment() && !is_orthogonal(observer, target) {
                return Err(MissReason::NotAligned);
            }
        }

        match SightLine::new(observer, target).first_obstruction(self.obstacles(), lookup) {
            Some(cell) => Err(MissReason::Obstructed(cell)),
            None => Ok(()),
        }
    }

    /// Runs [`Self::detect`] and applies the toggle when it succeeds.
    ///
    /// The toggle is an unconditional flip: re-running this every frame while
    /// the condition holds makes the flags oscillate.
    pub fn evaluate_encounter<F, S>(
        &self,
        command: &SensorCommand,
        encounter: &Encounter,
        lookup: F,
        flags: &mut S,
    ) -> Detection
    where
        F: FnMut(Position) -> Option<CellInfo>,
        S: FlagStore + ?Sized,
    {
        match self.detect(command, encounter, lookup) {
            Ok(()) => Detection::Triggered(command.toggle.apply(
                encounter.map,
                encounter.event,
                flags,
            )),
            Err(reason) => Detection::Missed(reason),
        }
    }

    /// Evaluates `command` on behalf of `event` using live collaborator data.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::MissingAgent`] when the event or the player
    /// has no snapshot this frame, and [`EvaluationError::Oracle`] when a
    /// required oracle is not wired in. No flag is touched in either case.
    pub fn evaluate<M, A, I, S>(
        &self,
        event: EventId,
        command: &SensorCommand,
        env: &Env<'_, M, A, I>,
        flags: &mut S,
    ) -> Result<Detection, EvaluationError>
    where
        M: MapOracle + ?Sized,
        A: AgentOracle + ?Sized,
        I: InputOracle + ?Sized,
        S: FlagStore + ?Sized,
    {
        let map = env.map()?;
        let encounter = Self::encounter(event, command.mode, env)?;

        Ok(self.evaluate_encounter(command, &encounter, |cell| map.cell(cell), flags))
    }

    fn encounter<M, A, I>(
        event: EventId,
        mode: DetectionMode,
        env: &Env<'_, M, A, I>,
    ) -> Result<Encounter, EvaluationError>
    where
        M: MapOracle + ?Sized,
        A: AgentOracle + ?Sized,
        I: InputOracle + ?Sized,
    {
        let agents = env.agents()?;
        let observer = agents
            .event(event)
            .ok_or_else(|| EvaluationError::MissingAgent {
                role: AgentRole::Observer,
                source: OracleError::EventNotFound(event),
            })?;
        let target = agents.player().ok_or(EvaluationError::MissingAgent {
            role: AgentRole::Target,
            source: OracleError::PlayerUnavailable,
        })?;
        let action_held = if mode.is_stealth() {
            env.input()?.is_action_held()
        } else {
            false
        };

        Ok(Encounter {
            map: agents.map_id(),
            event,
            observer,
            target,
            action_held,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::env::MapDimensions;
    use crate::flags::tests::TestFlags;
    use crate::flags::{SelfSwitch, SelfSwitchKey, SwitchId, ToggleTarget};
    use crate::sensor::RangeRule;
    use crate::state::Direction;

    struct TestMap {
        cells: HashMap<Position, CellInfo>,
    }

    impl MapOracle for TestMap {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(20, 20)
        }

        fn cell(&self, position: Position) -> Option<CellInfo> {
            if !self.contains(position) {
                return None;
            }
            Some(self.cells.get(&position).copied().unwrap_or_default())
        }
    }

    struct TestAgents {
        event: Option<Agent>,
        player: Option<Agent>,
    }

    impl AgentOracle for TestAgents {
        fn map_id(&self) -> MapId {
            MapId(1)
        }

        fn event(&self, id: EventId) -> Option<Agent> {
            (id == EventId(1)).then_some(self.event).flatten()
        }

        fn player(&self) -> Option<Agent> {
            self.player
        }
    }

    struct TestInput(bool);

    impl InputOracle for TestInput {
        fn is_action_held(&self) -> bool {
            self.0
        }
    }

    fn open_map() -> TestMap {
        TestMap {
            cells: HashMap::new(),
        }
    }

    fn encounter(observer: Agent, target: Agent) -> Encounter {
        Encounter {
            map: MapId(1),
            event: EventId(1),
            observer,
            target,
            action_held: false,
        }
    }

    fn command(mode: DetectionMode, threshold: f64) -> SensorCommand {
        SensorCommand::proximity(
            mode,
            RangeRule::new(ComparisonOperator::LessOrEqual, threshold),
            ToggleTarget::new(Some(SelfSwitch::A), None),
        )
    }

    fn self_switch_a() -> SelfSwitchKey {
        SelfSwitchKey::new(MapId(1), EventId(1), SelfSwitch::A)
    }

    #[test]
    fn facing_in_line_needs_alignment_even_when_facing() {
        let evaluator = ProximityEvaluator::default();
        // Facing down at a target below and to the side
        let scene = encounter(
            Agent::observer(Position::new(5, 5), Direction::Down),
            Agent::target(Position::new(6, 7), Direction::Up),
        );

        assert_eq!(
            evaluator.detect(&command(DetectionMode::Facing, 5.0), &scene, |_| None),
            Ok(())
        );
        assert_eq!(
            evaluator.detect(&command(DetectionMode::FacingInLine, 5.0), &scene, |_| None),
            Err(MissReason::NotAligned)
        );
    }

    #[test]
    fn facing_in_line_is_blocked_by_obstacles() {
        let evaluator = ProximityEvaluator::default();
        let scene = encounter(
            Agent::observer(Position::new(5, 5), Direction::Down),
            Agent::target(Position::new(5, 8), Direction::Up),
        );
        let wall = Position::new(5, 6);

        let result = evaluator.detect(
            &command(DetectionMode::FacingInLine, 5.0),
            &scene,
            |cell| (cell == wall).then_some(CellInfo::new(1, 0)),
        );

        assert_eq!(result, Err(MissReason::Obstructed(wall)));
    }

    #[test]
    fn sight_gates_all_directions_too() {
        let evaluator = ProximityEvaluator::default();
        let scene = encounter(
            Agent::observer(Position::new(0, 0), Direction::Up),
            Agent::target(Position::new(4, 0), Direction::Up),
        );

        let result = evaluator.detect(
            &command(DetectionMode::AllDirections, 10.0),
            &scene,
            |cell| (cell == Position::new(2, 0)).then_some(CellInfo::new(0, 1)),
        );

        assert_eq!(result, Err(MissReason::Obstructed(Position::new(2, 0))));
    }

    #[test]
    fn orthogonal_rejects_diagonals() {
        let evaluator = ProximityEvaluator::default();
        let scene = encounter(
            Agent::observer(Position::new(2, 2), Direction::Down),
            Agent::target(Position::new(3, 3), Direction::Down),
        );
        assert_eq!(
            evaluator.detect(&command(DetectionMode::Orthogonal, 5.0), &scene, |_| None),
            Err(MissReason::NotAligned)
        );
    }

    #[test]
    fn inert_command_never_triggers() {
        let evaluator = ProximityEvaluator::default();
        let inert = SensorCommand::from_args("Basic", [("Operator", "nearby")]).unwrap();
        let scene = encounter(
            Agent::observer(Position::ORIGIN, Direction::Down),
            Agent::target(Position::ORIGIN, Direction::Down),
        );
        let mut flags = TestFlags::default();

        let detection = evaluator.evaluate_encounter(&inert, &scene, |_| None, &mut flags);

        assert_eq!(detection, Detection::Missed(MissReason::InvalidRange));
        assert!(flags.local.is_empty());
    }

    #[test]
    fn repeated_trigger_oscillates() {
        let evaluator = ProximityEvaluator::default();
        let scene = encounter(
            Agent::observer(Position::new(1, 1), Direction::Down),
            Agent::target(Position::new(1, 2), Direction::Up),
        );
        let command = command(DetectionMode::AllDirections, 3.0);
        let mut flags = TestFlags::default();

        let first = evaluator.evaluate_encounter(&command, &scene, |_| None, &mut flags);
        assert!(first.is_triggered());
        assert!(flags.local(self_switch_a()));

        let second = evaluator.evaluate_encounter(&command, &scene, |_| None, &mut flags);
        assert!(second.is_triggered());
        assert!(!flags.local(self_switch_a()));
    }

    #[test]
    fn stealth_requires_facing_reach_and_action() {
        let evaluator = ProximityEvaluator::default();
        let command = SensorCommand::stealth_kill(ToggleTarget::new(None, Some(SwitchId(9))));
        let observer = Agent::observer(Position::new(4, 4), Direction::Down);

        let mut scene = encounter(observer, Agent::target(Position::new(4, 3), Direction::Down));
        assert_eq!(
            evaluator.detect(&command, &scene, |_| None),
            Err(MissReason::ActionNotHeld)
        );

        scene.action_held = true;
        assert_eq!(evaluator.detect(&command, &scene, |_| None), Ok(()));

        scene.target = Agent::target(Position::new(4, 3), Direction::Up);
        assert_eq!(
            evaluator.detect(&command, &scene, |_| None),
            Err(MissReason::NotFacing)
        );

        scene.target = Agent::target(Position::new(4, 1), Direction::Down);
        assert_eq!(
            evaluator.detect(&command, &scene, |_| None),
            Err(MissReason::OutOfRange)
        );
    }

    #[test]
    fn evaluate_reads_env_and_flips_flags() {
        let evaluator = ProximityEvaluator::default();
        let map = open_map();
        let agents = TestAgents {
            event: Some(Agent::observer(Position::new(10, 10), Direction::Down)),
            player: Some(Agent::target(Position::new(10, 12), Direction::Up)),
        };
        let input = TestInput(false);
        let env = Env::with_all(&map, &agents, &input);
        let mut flags = TestFlags::default();

        let detection = evaluator
            .evaluate(
                EventId(1),
                &command(DetectionMode::AllDirections, 3.0),
                &env,
                &mut flags,
            )
            .unwrap();

        assert!(detection.is_triggered());
        assert!(flags.local(self_switch_a()));
    }

    #[test]
    fn missing_player_skips_evaluation() {
        let evaluator = ProximityEvaluator::default();
        let map = open_map();
        let agents = TestAgents {
            event: Some(Agent::observer(Position::new(1, 1), Direction::Down)),
            player: None,
        };
        let input = TestInput(false);
        let env = Env::with_all(&map, &agents, &input);
        let mut flags = TestFlags::default();

        let result = evaluator.evaluate(
            EventId(1),
            &command(DetectionMode::AllDirections, 3.0),
            &env,
            &mut flags,
        );

        assert_eq!(
            result,
            Err(EvaluationError::MissingAgent {
                role: AgentRole::Target,
                source: OracleError::PlayerUnavailable,
            })
        );
        assert!(flags.local.is_empty());
    }

    #[test]
    fn unknown_event_skips_evaluation() {
        let evaluator = ProximityEvaluator::default();
        let map = open_map();
        let agents = TestAgents {
            event: None,
            player: Some(Agent::target(Position::ORIGIN, Direction::Down)),
        };
        let input = TestInput(false);
        let env = Env::with_all(&map, &agents, &input);
        let mut flags = TestFlags::default();

        let result = evaluator.evaluate(
            EventId(1),
            &command(DetectionMode::AllDirections, 3.0),
            &env,
            &mut flags,
        );

        assert!(matches!(
            result,
            Err(EvaluationError::MissingAgent {
                role: AgentRole::Observer,
                ..
            })
        ));
    }

    #[test]
    fn stealth_reads_the_input_oracle() {
        let evaluator = ProximityEvaluator::default();
        let map = open_map();
        let agents = TestAgents {
            event: Some(Agent::observer(Position::new(4, 4), Direction::Down)),
            player: Some(Agent::target(Position::new(3, 4), Direction::Right)),
        };
        let input = TestInput(true);
        let env = Env::with_all(&map, &agents, &input);
        let mut flags = TestFlags::default();
        let command = SensorCommand::stealth_kill(ToggleTarget::new(None, Some(SwitchId(9))));

        let detection = evaluator
            .evaluate(EventId(1), &command, &env, &mut flags)
            .unwrap();

        assert!(detection.is_triggered());
        assert!(flags.global(SwitchId(9)));
    }

    #[test]
    fn missing_map_oracle_is_reported() {
        let evaluator = ProximityEvaluator::default();
        let agents = TestAgents {
            event: None,
            player: None,
        };
        let env: Env<'_, TestMap, TestAgents, TestInput> = Env::new(None, Some(&agents), None);
        let mut flags = TestFlags::default();

        let result = evaluator.evaluate(
            EventId(1),
            &command(DetectionMode::AllDirections, 3.0),
            &env,
            &mut flags,
        );

        assert_eq!(
            result,
            Err(EvaluationError::Oracle(OracleError::MapNotAvailable))
        );
    }

    #[test]
    fn empty_env_fails_before_reading_agents() {
        let evaluator = ProximityEvaluator::default();
        let env: Env<'_, TestMap, TestAgents, TestInput> = Env::empty();
        let mut flags = TestFlags::default();

        let result = evaluator.evaluate(
            EventId(1),
            &command(DetectionMode::Facing, 3.0),
            &env,
            &mut flags,
        );

        assert_eq!(
            result,
            Err(EvaluationError::Oracle(OracleError::MapNotAvailable))
        );
        assert!(flags.local.is_empty());
    }
}
