//! Per-side queue of planned actions.
//!
//! [`SideActions`] owns the ordered plan of one side: index 0 runs next.
//! Actions are addressed two ways:
//!
//! - by [`Cursor`], a position valid until the next structural mutation;
//! - by [`ActionId`], stable for the action's whole life in the queue. Overlay
//!   holders keep ids and resolve them with [`SideActions::find`].
//!
//! Structural edits never validate implicitly except [`SideActions::remove_action`]
//! when given an [`Env`]. Callers batching several edits run
//! [`SideActions::validate_actions`] once at the end.

mod cursor;
mod draw;
mod execute;
mod search;
mod validate;

pub use cursor::Cursor;
pub use validate::{Invalidated, ValidationReport};

use tracing::debug;

use crate::action::{Action, ActionKind, AttackAction, MoveAction, RecallAction, RecruitAction};
use crate::config::WhiteboardConfig;
use crate::env::Env;
use crate::state::{ActionId, Hex, Route, SideId, UnitId};

/// Ordered plan of one side.
#[derive(Clone, Debug, Default)]
pub struct SideActions {
    actions: Vec<Action>,
    team_index: Option<SideId>,
    /// Gold reserved by planned recruits and recalls not yet in the real treasury.
    gold_spent: u32,
    next_id: u64,
    config: WhiteboardConfig,
}

impl SideActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WhiteboardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    // ===== ownership =====

    /// Binds the queue to its side.
    ///
    /// Must be called exactly once, right after the owning side is registered.
    ///
    /// # Panics
    ///
    /// Panics if the team index was already set.
    pub fn set_team_index(&mut self, side: SideId) {
        if let Some(existing) = self.team_index {
            panic!("team index already set to {existing}, refusing {side}");
        }
        self.team_index = Some(side);
    }

    /// # Panics
    ///
    /// Panics if [`Self::set_team_index`] has not been called.
    pub fn team_index(&self) -> SideId {
        self.team_index
            .expect("team index read before set_team_index")
    }

    // ===== storage =====

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Front-to-back iterator; use `.rev()` for back-to-front traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Position of the next action to execute.
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    /// One-past-the-last position, returned whenever nothing is found.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.actions.len())
    }

    pub fn get(&self, position: Cursor) -> Option<&Action> {
        self.actions.get(position.index())
    }

    pub fn get_mut(&mut self, position: Cursor) -> Option<&mut Action> {
        self.actions.get_mut(position.index())
    }

    /// Resolves an action id held by an overlay or UI element.
    pub fn find(&self, id: ActionId) -> Option<&Action> {
        self.actions.iter().find(|action| action.id() == id)
    }

    /// Drops every planned action. The gold ledger is left to its owner.
    pub fn clear(&mut self) {
        debug!(count = self.actions.len(), "clearing planned actions");
        self.actions.clear();
    }

    /// Whether `position` designates an action (`begin() <= position < end()`).
    pub fn is_valid_cursor(&self, position: Cursor) -> bool {
        position >= self.begin() && position < self.end()
    }

    fn assert_valid_cursor(&self, position: Cursor, operation: &str) {
        assert!(
            self.is_valid_cursor(position),
            "{operation}: cursor {position} out of range for {} actions",
            self.actions.len()
        );
    }

    // ===== insertion =====

    /// Wraps `kind` into an action with a fresh id, without queueing it.
    ///
    /// The result can be placed anywhere with [`Self::insert_action`].
    pub fn new_action(&mut self, kind: impl Into<ActionKind>) -> Action {
        let id = ActionId(self.next_id);
        self.next_id += 1;
        Action::new(id, kind.into())
    }

    /// Splices an already-built action in front of `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > end()` or if the action is already queued.
    pub fn insert_action(&mut self, position: Cursor, action: Action) -> Cursor {
        assert!(
            position <= self.end(),
            "insert_action: cursor {position} past end {}",
            self.end()
        );
        assert!(
            self.find(action.id()).is_none(),
            "insert_action: action {} is already queued",
            action.id()
        );

        self.next_id = self.next_id.max(action.id().0 + 1);
        debug!(action = %action, position = position.index(), "inserting planned action");
        self.actions.insert(position.index(), action);
        position
    }

    /// Appends an action; returns its position, the new last one.
    pub fn queue_action(&mut self, action: Action) -> Cursor {
        self.insert_action(self.end(), action)
    }

    pub fn queue_move(&mut self, unit: UnitId, route: Route) -> Cursor {
        let action = self.new_action(MoveAction::new(unit, route));
        self.queue_action(action)
    }

    /// Queues an attack on `target_hex`, moving along `route` first.
    ///
    /// Pass [`Route::stationary`] to attack from the unit's current hex.
    pub fn queue_attack(
        &mut self,
        unit: UnitId,
        target_hex: Hex,
        weapon: u8,
        route: Route,
    ) -> Cursor {
        let action = self.new_action(AttackAction::new(unit, target_hex, weapon, route));
        self.queue_action(action)
    }

    pub fn queue_recruit(&mut self, unit_type: impl Into<String>, recruit_hex: Hex) -> Cursor {
        let action = self.new_action(RecruitAction::new(unit_type, recruit_hex));
        self.queue_action(action)
    }

    pub fn queue_recall(&mut self, unit: UnitId, recall_hex: Hex) -> Cursor {
        let action = self.new_action(RecallAction::new(unit, recall_hex));
        self.queue_action(action)
    }

    // ===== reordering =====

    /// Moves the action one slot toward the front; returns its new position.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not designate an action.
    pub fn bump_earlier(&mut self, position: Cursor) -> Cursor {
        self.assert_valid_cursor(position, "bump_earlier");
        let Some(earlier) = position.prev() else {
            return position;
        };
        self.actions.swap(earlier.index(), position.index());
        debug!(from = position.index(), to = earlier.index(), "bumped action earlier");
        earlier
    }

    /// Moves the action one slot toward the back; returns its new position.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not designate an action.
    pub fn bump_later(&mut self, position: Cursor) -> Cursor {
        self.assert_valid_cursor(position, "bump_later");
        let later = position.next();
        if later >= self.end() {
            return position;
        }
        self.actions.swap(position.index(), later.index());
        debug!(from = position.index(), to = later.index(), "bumped action later");
        later
    }

    // ===== removal =====

    /// Deletes the action at `position`.
    ///
    /// With `validate_with` set, the queue is re-validated afterwards, which may
    /// remove actions that depended on the deleted one. Returns the position of
    /// the first surviving action that followed the deleted one, or `end()`.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not designate an action.
    pub fn remove_action(&mut self, position: Cursor, validate_with: Option<&Env<'_>>) -> Cursor {
        self.assert_valid_cursor(position, "remove_action");
        let removed = self.actions.remove(position.index());
        debug!(action = %removed, "removed planned action");

        let Some(env) = validate_with else {
            return position;
        };

        let followers: Vec<ActionId> = self.actions[position.index()..]
            .iter()
            .map(Action::id)
            .collect();
        self.validate_actions(env);
        followers
            .into_iter()
            .map(|id| self.get_position_of(id))
            .find(|&cursor| cursor != self.end())
            .unwrap_or_else(|| self.end())
    }

    // ===== gold ledger =====

    pub fn gold_spent(&self) -> u32 {
        self.gold_spent
    }

    /// Adjusts the reserved-gold ledger.
    ///
    /// # Panics
    ///
    /// Panics if the ledger would become negative or overflow.
    pub fn change_gold_spent_by(&mut self, delta: i32) {
        let updated = i64::from(self.gold_spent) + i64::from(delta);
        assert!(
            updated >= 0,
            "gold spent would become negative ({} + {delta})",
            self.gold_spent
        );
        self.gold_spent = u32::try_from(updated).unwrap_or_else(|_| {
            panic!("gold spent overflows ({} + {delta})", self.gold_spent)
        });
    }
}

impl<'a> IntoIterator for &'a SideActions {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
