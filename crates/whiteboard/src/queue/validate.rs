//! Queue-wide consistency pass.
//!
//! Walks the queue front to back over a [`PlannedWorld`]: each action is
//! checked against the world as the actions before it leave it, applied if
//! valid and dropped otherwise. Dependencies only point backwards in the
//! queue, so a single pass is already a fixed point and removals cascade
//! without another iteration.

use tracing::{debug, info, trace};

use super::SideActions;
use crate::action::{Action, InvalidAction, PlannedWorld};
use crate::env::Env;
use crate::error::PlanError;

/// An action dropped by validation and the reason it no longer holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invalidated {
    pub action: Action,
    pub reason: InvalidAction,
}

/// Outcome of [`SideActions::validate_actions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Dropped actions, in their former queue order.
    pub removed: Vec<Invalidated>,
    /// Gold the surviving recruits and recalls reserve.
    pub reserved_gold: u32,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

impl SideActions {
    /// Removes every action the current game state no longer supports.
    ///
    /// Call after external changes (a unit died, another system moved a unit,
    /// a planning session ended) and after batches of destructive edits.
    ///
    /// # Panics
    ///
    /// Panics if the team index has not been set.
    pub fn validate_actions(&mut self, env: &Env<'_>) -> ValidationReport {
        let side = self.team_index();
        let mut world = PlannedWorld::new(*env, side, self.config.recall_cost);
        let mut report = ValidationReport::default();

        let mut index = 0;
        while index < self.actions.len() {
            let action = &self.actions[index];
            match action.validate(side, &world) {
                Ok(()) => {
                    trace!(action = %action, "planned action still valid");
                    action.apply(&mut world);
                    index += 1;
                }
                Err(reason) => {
                    let action = self.actions.remove(index);
                    debug!(
                        action = %action,
                        code = reason.error_code(),
                        severity = reason.severity().as_str(),
                        "dropping invalid planned action: {reason}"
                    );
                    report.removed.push(Invalidated { action, reason });
                }
            }
        }

        report.reserved_gold = world.reserved_gold();
        if !report.is_clean() {
            info!(
                %side,
                removed = report.removed_count(),
                remaining = self.actions.len(),
                "validation dropped planned actions"
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use crate::action::InvalidAction;
    use crate::env::{Env, MemoryWorld, TeamSpec, TerrainKind, UnitView};
    use crate::queue::{Cursor, SideActions};
    use crate::state::{Hex, Route, SideId, UnitId};

    const US: SideId = SideId(1);
    const THEM: SideId = SideId(2);

    // u1 at (2,4) moving to (1,4); u2 at (2,6) attacking u9 at (2,3) from (2,4).
    fn world() -> MemoryWorld {
        MemoryWorld::new(8, 8)
            .with_tile(Hex::new(5, 5), TerrainKind::Keep)
            .with_tile(Hex::new(5, 6), TerrainKind::Castle)
            .with_unit(UnitView::new(UnitId(1), US, Hex::new(2, 4), 1))
            .with_unit(UnitView::new(UnitId(2), US, Hex::new(2, 6), 1))
            .with_unit(UnitView::new(UnitId(9), THEM, Hex::new(2, 3), 1))
            .with_team(
                TeamSpec::new(US, 30)
                    .with_recruit("Spearman", 14)
                    .with_recall(UnitId(5)),
            )
            .with_team(TeamSpec::new(THEM, 0))
    }

    fn route(steps: &[(i32, i32)]) -> Route {
        Route::new(steps.iter().map(|&(x, y)| Hex::new(x, y)).collect()).unwrap()
    }

    fn plan() -> SideActions {
        let mut queue = SideActions::new();
        queue.set_team_index(US);
        queue.queue_move(UnitId(1), route(&[(2, 4), (1, 4)]));
        queue.queue_recruit("Spearman", Hex::new(5, 6));
        queue.queue_attack(UnitId(2), Hex::new(2, 3), 0, route(&[(2, 6), (2, 5), (2, 4)]));
        queue
    }

    #[test]
    fn consistent_plan_survives_untouched() {
        let world = world();
        let mut queue = plan();

        let report = queue.validate_actions(&Env::from_world(&world));

        assert!(report.is_clean());
        assert_eq!(report.reserved_gold, 14);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn validation_is_idempotent() {
        let mut world = world();
        world.remove_unit(UnitId(9));
        let mut queue = plan();

        let first = queue.validate_actions(&Env::from_world(&world));
        let after_first: Vec<_> = queue.iter().map(|action| action.id()).collect();
        let second = queue.validate_actions(&Env::from_world(&world));

        assert_eq!(first.removed_count(), 1);
        assert!(second.is_clean());
        assert_eq!(
            queue.iter().map(|action| action.id()).collect::<Vec<_>>(),
            after_first
        );
    }

    #[test]
    fn removing_a_move_cascades_to_dependent_attack() {
        let world = world();
        let env = Env::from_world(&world);
        let mut queue = plan();

        let next = queue.remove_action(Cursor::new(0), Some(&env));

        assert_eq!(queue.len(), 1);
        assert_eq!(next, Cursor::new(0));
        assert_eq!(queue.actions()[0].name(), "recruit");
        assert_eq!(queue.count_actions_of(UnitId(1)), 0);
        assert_eq!(queue.count_actions_of(UnitId(2)), 0);
    }

    #[test]
    fn removal_without_env_keeps_dependents() {
        let mut queue = plan();
        queue.remove_action(Cursor::new(0), None);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn dead_unit_loses_its_actions() {
        let mut world = world();
        world.remove_unit(UnitId(1));
        let mut queue = plan();

        let report = queue.validate_actions(&Env::from_world(&world));

        assert_eq!(report.removed_count(), 1);
        assert_eq!(
            report.removed[0].reason,
            InvalidAction::UnitMissing { unit: UnitId(1) }
        );
        assert!(!queue.unit_has_actions(UnitId(1)));
        // Without the move, (2,4) stays empty: the attack still holds.
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn placements_off_castle_are_dropped() {
        let world = world();
        let mut queue = plan();
        queue.queue_recruit("Spearman", Hex::new(4, 5));
        queue.queue_recall(UnitId(5), Hex::new(4, 6));

        let report = queue.validate_actions(&Env::from_world(&world));

        let reasons: Vec<_> = report.removed.iter().map(|gone| gone.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                InvalidAction::NotCastle { hex: Hex::new(4, 5) },
                InvalidAction::NotCastle { hex: Hex::new(4, 6) },
            ]
        );
        assert_eq!(report.reserved_gold, 14);
    }

    #[test]
    fn recall_beyond_remaining_gold_is_dropped() {
        let world = world();
        let mut queue = SideActions::new();
        queue.set_team_index(US);
        queue.queue_recruit("Spearman", Hex::new(5, 6));
        queue.queue_recall(UnitId(5), Hex::new(5, 5));

        let report = queue.validate_actions(&Env::from_world(&world));

        assert_eq!(
            report.removed[0].reason,
            InvalidAction::InsufficientGold {
                needed: 20,
                available: 16
            }
        );
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn unit_recalled_twice_keeps_only_first_recall() {
        let mut world = world();
        if let Some(team) = world.team_mut(US) {
            team.gold = 100;
        }
        let mut queue = SideActions::new();
        queue.set_team_index(US);
        let first = queue.queue_recall(UnitId(5), Hex::new(5, 5));
        let first_id = queue.get(first).map(|action| action.id());
        queue.queue_recall(UnitId(5), Hex::new(5, 6));

        let report = queue.validate_actions(&Env::from_world(&world));

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.actions().first().map(|action| action.id()), first_id);
        assert_eq!(
            report.removed[0].reason,
            InvalidAction::AlreadyRecalled { unit: UnitId(5) }
        );
        assert_eq!(report.reserved_gold, 20);
    }

    #[test]
    fn empty_queue_validates_to_nothing() {
        let world = world();
        let mut queue = SideActions::new();
        queue.set_team_index(US);

        let report = queue.validate_actions(&Env::from_world(&world));

        assert!(report.is_clean());
        assert_eq!(report.reserved_gold, 0);
        assert!(queue.is_empty());
    }
}
