//! Replays scenario steps against a queue and an in-memory world.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};
use whiteboard::{
    Action, ActionExecutor, ActionKind, Cursor, Env, ExecutionStatus, MemoryWorld, SideActions,
    SideId, TeamOracle, UnitOracle, UnitView, WhiteboardConfig,
};

use crate::scenario::{Scenario, ScenarioError, Step};

/// Weapon count given to recruited and recalled units.
const PLACED_UNIT_WEAPONS: u8 = 1;

/// Executes planned actions directly on a [`MemoryWorld`].
///
/// An action the world cannot carry out right now reports
/// [`ExecutionStatus::InProgress`] and stays queued.
pub struct SimulatedExecutor<'w> {
    world: &'w mut MemoryWorld,
    side: SideId,
    recall_cost: u32,
}

impl<'w> SimulatedExecutor<'w> {
    pub fn new(world: &'w mut MemoryWorld, side: SideId, recall_cost: u32) -> Self {
        Self {
            world,
            side,
            recall_cost,
        }
    }
}

impl ActionExecutor for SimulatedExecutor<'_> {
    fn execute(&mut self, action: &mut Action) -> ExecutionStatus {
        let done = match action.kind() {
            ActionKind::Move(mv) => self.world.move_unit(mv.unit, mv.route.destination()),
            ActionKind::Attack(attack) => match self.world.unit_at(attack.target) {
                Some(defender) => {
                    let moved = attack.route.is_empty()
                        || self.world.move_unit(attack.unit, attack.striking_hex());
                    // Every simulated attack is lethal.
                    moved && self.world.remove_unit(defender.id).is_some()
                }
                None => false,
            },
            ActionKind::Recruit(recruit) => {
                let cost = self.world.recruit_cost(self.side, &recruit.unit_type);
                match cost {
                    Some(cost) if self.world.spend_gold(self.side, cost) => {
                        let id = self.world.next_unit_id();
                        self.world.units.push(UnitView::new(
                            id,
                            self.side,
                            recruit.hex,
                            PLACED_UNIT_WEAPONS,
                        ));
                        true
                    }
                    _ => false,
                }
            }
            ActionKind::Recall(recall) => {
                self.world.in_recall_list(self.side, recall.unit)
                    && self.world.spend_gold(self.side, self.recall_cost)
                    && self.world.recall_unit(
                        self.side,
                        recall.unit,
                        recall.hex,
                        PLACED_UNIT_WEAPONS,
                    )
            }
        };

        if done {
            ExecutionStatus::Finished
        } else {
            warn!(action = %action, "simulated execution did not complete");
            ExecutionStatus::InProgress
        }
    }
}

/// A scenario in progress: the world, the side's queue and the output sink.
pub struct Replay<W> {
    world: MemoryWorld,
    queue: SideActions,
    out: W,
}

impl<W: Write> Replay<W> {
    pub fn new(world: MemoryWorld, side: SideId, config: WhiteboardConfig, out: W) -> Self {
        let mut queue = SideActions::with_config(config);
        queue.set_team_index(side);
        Self {
            world,
            queue,
            out,
        }
    }

    pub fn queue(&self) -> &SideActions {
        &self.queue
    }

    pub fn world(&self) -> &MemoryWorld {
        &self.world
    }

    pub fn run(scenario: Scenario, config: WhiteboardConfig, out: W) -> Result<Self> {
        let mut replay = Self::new(scenario.world, scenario.side, config, out);
        for (index, step) in scenario.steps.into_iter().enumerate() {
            replay.step(index, step)?;
        }
        Ok(replay)
    }

    pub fn step(&mut self, index: usize, step: Step) -> Result<()> {
        let side = self.queue.team_index();
        match step {
            Step::Move { unit, route } => {
                self.queue.queue_move(unit, route);
            }
            Step::Attack {
                unit,
                target,
                weapon,
                route,
            } => {
                self.queue.queue_attack(unit, target, weapon, route);
            }
            Step::Recruit { unit_type, hex } => {
                self.queue.queue_recruit(unit_type, hex);
            }
            Step::Recall { unit, hex } => {
                self.queue.queue_recall(unit, hex);
            }
            Step::BumpEarlier { index: at } => {
                let cursor = self.cursor(index, at)?;
                self.queue.bump_earlier(cursor);
            }
            Step::BumpLater { index: at } => {
                let cursor = self.cursor(index, at)?;
                self.queue.bump_later(cursor);
            }
            Step::Remove { index: at, validate } => {
                let cursor = self.cursor(index, at)?;
                let env = Env::from_world(&self.world);
                self.queue
                    .remove_action(cursor, validate.then_some(&env));
            }
            Step::ExecuteNext => {
                let recall_cost = self.queue.config().recall_cost;
                let mut executor = SimulatedExecutor::new(&mut self.world, side, recall_cost);
                self.queue.execute_next(&mut executor);
            }
            Step::Execute { index: at } => {
                let cursor = self.cursor(index, at)?;
                let recall_cost = self.queue.config().recall_cost;
                let mut executor = SimulatedExecutor::new(&mut self.world, side, recall_cost);
                self.queue.execute(cursor, &mut executor);
            }
            Step::Validate => {
                let report = self.queue.validate_actions(&Env::from_world(&self.world));
                for gone in &report.removed {
                    info!(step = index, action = %gone.action, "dropped: {}", gone.reason);
                }
            }
            Step::Kill { unit } => {
                if self.world.remove_unit(unit).is_none() {
                    warn!(step = index, %unit, "kill step names a unit not on the map");
                }
            }
            Step::Dump => {
                write!(self.out, "{}", self.queue)?;
            }
        }

        self.sync_gold_ledger()
    }

    pub fn finish(self) -> W {
        self.out
    }

    fn cursor(&self, step: usize, index: usize) -> Result<Cursor, ScenarioError> {
        let cursor = Cursor::new(index);
        if self.queue.is_valid_cursor(cursor) {
            Ok(cursor)
        } else {
            Err(ScenarioError::IndexOutOfRange {
                step,
                index,
                len: self.queue.len(),
            })
        }
    }

    /// Keeps the ledger equal to the gold the queued recruits and recalls need.
    fn sync_gold_ledger(&mut self) -> Result<()> {
        let side = self.queue.team_index();
        let recall_cost = self.queue.config().recall_cost;
        let planned: u32 = self
            .queue
            .iter()
            .map(|action| match action.kind() {
                ActionKind::Recruit(recruit) => self
                    .world
                    .recruit_cost(side, &recruit.unit_type)
                    .unwrap_or(0),
                ActionKind::Recall(_) => recall_cost,
                ActionKind::Move(_) | ActionKind::Attack(_) => 0,
            })
            .sum();

        let delta = i64::from(planned) - i64::from(self.queue.gold_spent());
        let delta = i32::try_from(delta).context("planned gold change out of ledger range")?;
        if delta != 0 {
            self.queue.change_gold_spent_by(delta);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whiteboard::{Hex, Route, TeamSpec, TerrainKind, UnitId};

    const US: SideId = SideId(1);
    const THEM: SideId = SideId(2);

    fn world() -> MemoryWorld {
        MemoryWorld::new(8, 8)
            .with_tile(Hex::new(5, 5), TerrainKind::Keep)
            .with_tile(Hex::new(5, 6), TerrainKind::Castle)
            .with_unit(UnitView::new(UnitId(1), US, Hex::new(2, 4), 1))
            .with_unit(UnitView::new(UnitId(2), US, Hex::new(2, 6), 1))
            .with_unit(UnitView::new(UnitId(9), THEM, Hex::new(2, 3), 1))
            .with_team(
                TeamSpec::new(US, 60)
                    .with_recruit("Spearman", 14)
                    .with_recall(UnitId(5)),
            )
            .with_team(TeamSpec::new(THEM, 0))
    }

    fn route(steps: &[(i32, i32)]) -> Route {
        Route::new(steps.iter().map(|&(x, y)| Hex::new(x, y)).collect()).unwrap()
    }

    fn replay(steps: Vec<Step>) -> Replay<Vec<u8>> {
        let scenario = Scenario {
            side: US,
            world: world(),
            steps,
        };
        Replay::run(scenario, WhiteboardConfig::default(), Vec::new()).unwrap()
    }

    fn plan() -> Vec<Step> {
        vec![
            Step::Move {
                unit: UnitId(1),
                route: route(&[(2, 4), (1, 4)]),
            },
            Step::Recruit {
                unit_type: "Spearman".into(),
                hex: Hex::new(5, 6),
            },
            Step::Attack {
                unit: UnitId(2),
                target: Hex::new(2, 3),
                weapon: 0,
                route: route(&[(2, 6), (2, 5), (2, 4)]),
            },
        ]
    }

    #[test]
    fn dump_prints_queue() {
        let mut steps = plan();
        steps.push(Step::Dump);
        let output = String::from_utf8(replay(steps).finish()).unwrap();

        assert!(output.starts_with("planned actions of side 1 (3 queued, 14 gold spent)"));
        assert!(output.contains("[1] #1 recruit Spearman at (5,6)"));
    }

    #[test]
    fn remove_with_validation_cascades() {
        let mut steps = plan();
        steps.push(Step::Remove {
            index: 0,
            validate: true,
        });
        let replay = replay(steps);

        assert_eq!(replay.queue().len(), 1);
        assert_eq!(replay.queue().gold_spent(), 14);
    }

    #[test]
    fn executing_whole_plan_updates_world() {
        let mut steps = plan();
        steps.extend([Step::ExecuteNext, Step::ExecuteNext, Step::ExecuteNext]);
        let replay = replay(steps);

        assert!(replay.queue().is_empty());
        assert_eq!(replay.queue().gold_spent(), 0);
        assert_eq!(replay.world().unit(UnitId(1)).map(|u| u.hex), Some(Hex::new(1, 4)));
        assert_eq!(replay.world().unit(UnitId(2)).map(|u| u.hex), Some(Hex::new(2, 4)));
        assert!(replay.world().unit(UnitId(9)).is_none());
        assert_eq!(replay.world().gold(US), 46);
        assert!(replay.world().unit_at(Hex::new(5, 6)).is_some());
    }

    #[test]
    fn killed_unit_plans_vanish_on_validate() {
        let mut steps = plan();
        steps.extend([Step::Kill { unit: UnitId(2) }, Step::Validate]);
        let replay = replay(steps);

        assert_eq!(replay.queue().len(), 2);
        assert!(!replay.queue().unit_has_actions(UnitId(2)));
    }

    #[test]
    fn attack_without_defender_leaves_attacker_in_place() {
        let mut steps = plan();
        steps.extend([
            Step::Kill { unit: UnitId(9) },
            Step::ExecuteNext,
            Step::ExecuteNext,
            Step::ExecuteNext,
        ]);
        let replay = replay(steps);

        assert_eq!(replay.queue().len(), 1);
        assert!(replay.queue().unit_has_actions(UnitId(2)));
        assert_eq!(replay.world().unit(UnitId(2)).map(|u| u.hex), Some(Hex::new(2, 6)));
    }

    #[test]
    fn recall_reserves_configured_cost() {
        let steps = vec![Step::Recall {
            unit: UnitId(5),
            hex: Hex::new(5, 5),
        }];
        let scenario = Scenario {
            side: US,
            world: world(),
            steps,
        };
        let config = WhiteboardConfig::default().with_recall_cost(25);
        let replay = Replay::run(scenario, config, Vec::new()).unwrap();

        assert_eq!(replay.queue().gold_spent(), 25);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let scenario = Scenario {
            side: US,
            world: world(),
            steps: vec![Step::Execute { index: 0 }],
        };
        let err = Replay::run(scenario, WhiteboardConfig::default(), Vec::new())
            .err()
            .unwrap();

        assert!(matches!(
            err.downcast_ref::<ScenarioError>(),
            Some(ScenarioError::IndexOutOfRange { index: 0, len: 0, .. })
        ));
    }
}
