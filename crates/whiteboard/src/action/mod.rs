//! Planned actions.
//!
//! # Module Structure
//!
//! - `kinds`: one struct per action kind (move, attack, recruit, recall)
//! - `planned`: [`PlannedWorld`], the game state as it will look once every
//!   earlier queued action has run
//! - `error`: [`InvalidAction`], why a planned action can no longer run
//! - `overlay`: what queued actions paint on a hex
//!
//! The kind set is closed, so [`ActionKind`] is an enum and every dispatch is
//! an exhaustive match. Execution itself happens outside this crate through
//! [`ActionExecutor`].

mod error;
mod kinds;
mod overlay;
mod planned;

pub use error::InvalidAction;
pub use kinds::{AttackAction, MoveAction, RecallAction, RecruitAction};
pub use overlay::{HexPainter, Overlay, OverlayKind};
pub use planned::{Occupant, PlannedWorld};

use std::fmt;

use crate::state::{ActionId, Hex, SideId, UnitId};

/// Validation and projection contract shared by every action kind.
///
/// Mirrors a pre-validate/apply pipeline, except that `apply` only mutates the
/// projected [`PlannedWorld`], never the authoritative game state.
pub trait PlannedTransition {
    /// Unit this action is planned for, if it exists yet.
    fn unit(&self) -> Option<UnitId>;

    /// Checks the action against the world as earlier actions left it.
    fn validate(&self, side: SideId, world: &PlannedWorld<'_>) -> Result<(), InvalidAction>;

    /// Records the action's outcome in the projected world.
    fn apply(&self, world: &mut PlannedWorld<'_>);

    /// Overlay this action paints on `hex`, if any.
    fn overlay_at(&self, hex: Hex) -> Option<OverlayKind<'_>>;
}

/// Result of one execution step reported by the [`ActionExecutor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStatus {
    /// Not executed yet, or interrupted partway (e.g. an ambushed move).
    #[default]
    InProgress,
    /// Completed; the action leaves the queue.
    Finished,
}

impl ExecutionStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, ExecutionStatus::Finished)
    }
}

/// Performs planned actions against the authoritative game state.
///
/// Implementations may update kind-specific data, e.g. trim a move's route
/// with [`crate::state::Route::advance_to`] when it stops early.
pub trait ActionExecutor {
    fn execute(&mut self, action: &mut Action) -> ExecutionStatus;
}

impl<F> ActionExecutor for F
where
    F: FnMut(&mut Action) -> ExecutionStatus,
{
    fn execute(&mut self, action: &mut Action) -> ExecutionStatus {
        self(action)
    }
}

/// Kind-specific payload of a planned action.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ActionKind {
    Move(MoveAction),
    Attack(AttackAction),
    Recruit(RecruitAction),
    Recall(RecallAction),
}

impl ActionKind {
    fn transition(&self) -> &dyn PlannedTransition {
        match self {
            ActionKind::Move(action) => action,
            ActionKind::Attack(action) => action,
            ActionKind::Recruit(action) => action,
            ActionKind::Recall(action) => action,
        }
    }
}

impl From<MoveAction> for ActionKind {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<AttackAction> for ActionKind {
    fn from(action: AttackAction) -> Self {
        Self::Attack(action)
    }
}

impl From<RecruitAction> for ActionKind {
    fn from(action: RecruitAction) -> Self {
        Self::Recruit(action)
    }
}

impl From<RecallAction> for ActionKind {
    fn from(action: RecallAction) -> Self {
        Self::Recall(action)
    }
}

/// One staged game operation together with its identity and progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    id: ActionId,
    kind: ActionKind,
    status: ExecutionStatus,
}

impl Action {
    pub(crate) fn new(id: ActionId, kind: ActionKind) -> Self {
        Self {
            id,
            kind,
            status: ExecutionStatus::InProgress,
        }
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ActionKind {
        &mut self.kind
    }

    pub fn status(&self) -> ExecutionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub(crate) fn set_status(&mut self, status: ExecutionStatus) {
        self.status = status;
    }

    /// Returns the snake_case name of the action kind, for logs and dumps.
    pub fn name(&self) -> &'static str {
        (&self.kind).into()
    }

    /// Unit the action belongs to; recruits have none until executed.
    pub fn unit(&self) -> Option<UnitId> {
        self.kind.transition().unit()
    }

    pub fn belongs_to(&self, unit: UnitId) -> bool {
        self.unit() == Some(unit)
    }

    pub fn validate(&self, side: SideId, world: &PlannedWorld<'_>) -> Result<(), InvalidAction> {
        self.kind.transition().validate(side, world)
    }

    pub(crate) fn apply(&self, world: &mut PlannedWorld<'_>) {
        self.kind.transition().apply(world);
    }

    pub fn overlay_at(&self, hex: Hex) -> Option<OverlayKind<'_>> {
        self.kind.transition().overlay_at(hex)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.id)?;
        match &self.kind {
            ActionKind::Move(action) => write!(f, "move {} along {}", action.unit, action.route),
            ActionKind::Attack(action) => write!(
                f,
                "attack {} by {} with weapon {} from {}",
                action.target, action.unit, action.weapon, action.route
            ),
            ActionKind::Recruit(action) => {
                write!(f, "recruit {} at {}", action.unit_type, action.hex)
            }
            ActionKind::Recall(action) => write!(f, "recall {} at {}", action.unit, action.hex),
        }
    }
}
