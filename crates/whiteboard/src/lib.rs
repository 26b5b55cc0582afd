//! Per-side queue of planned actions for a turn-based hex strategy game.
//!
//! `whiteboard` lets a player stage moves, attacks, recruits and recalls
//! ahead of time, reorder them, and execute them later. The queue never owns
//! game state: it plans against read-only oracles bundled in [`env::Env`] and
//! drops whatever the live game no longer supports in
//! [`queue::SideActions::validate_actions`].
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod queue;
pub mod state;

pub use action::{
    Action, ActionExecutor, ActionKind, AttackAction, ExecutionStatus, HexPainter, InvalidAction,
    MoveAction, Occupant, Overlay, OverlayKind, PlannedTransition, PlannedWorld, RecallAction,
    RecruitAction,
};
pub use config::WhiteboardConfig;
pub use env::{
    Env, MapDimensions, MapOracle, MemoryWorld, RecruitOption, TeamOracle, TeamSpec, TerrainKind,
    TileSpec, UnitOracle, UnitView,
};
pub use error::{ErrorSeverity, PlanError};
pub use queue::{Cursor, Invalidated, SideActions, ValidationReport};
pub use state::{ActionId, EmptyRoute, Hex, Route, SideId, UnitId};
