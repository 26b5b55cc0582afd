//! Reasons a planned action can no longer be executed.

use crate::error::{ErrorSeverity, PlanError};
use crate::state::{Hex, SideId, UnitId};

/// Why validation dropped a planned action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidAction {
    /// The unit died or otherwise left the game.
    #[error("unit {unit} no longer exists")]
    UnitMissing { unit: UnitId },

    /// The unit changed hands or was never ours.
    #[error("unit {unit} belongs to {owner}, not {side}")]
    NotOwned {
        unit: UnitId,
        owner: SideId,
        side: SideId,
    },

    /// The unit is not where the route starts.
    #[error("unit {unit} is at {actual}, route starts at {expected}")]
    WrongSource {
        unit: UnitId,
        expected: Hex,
        actual: Hex,
    },

    #[error("move of unit {unit} goes nowhere")]
    NoMovement { unit: UnitId },

    #[error("hex {hex} is off the map")]
    OffMap { hex: Hex },

    #[error("hex {hex} is impassable")]
    Impassable { hex: Hex },

    #[error("route passes through enemy at {hex}")]
    BlockedByEnemy { hex: Hex },

    #[error("hex {hex} is occupied")]
    Occupied { hex: Hex },

    #[error("no unit to attack at {hex}")]
    NoTarget { hex: Hex },

    #[error("unit at {hex} is not an enemy")]
    NotEnemy { hex: Hex },

    #[error("target {target} is not adjacent to {from}")]
    NotAdjacent { from: Hex, target: Hex },

    #[error("weapon {weapon} out of range, unit has {available}")]
    InvalidWeapon { weapon: u8, available: u8 },

    #[error("{unit_type} cannot be recruited")]
    NotRecruitable { unit_type: String },

    #[error("unit {unit} is not in the recall list")]
    NotInRecallList { unit: UnitId },

    /// An earlier action in the same plan already recalls this unit.
    #[error("unit {unit} is already planned for recall")]
    AlreadyRecalled { unit: UnitId },

    #[error("hex {hex} is not a castle")]
    NotCastle { hex: Hex },

    #[error("needs {needed} gold, {available} available")]
    InsufficientGold { needed: u32, available: u32 },
}

impl PlanError for InvalidAction {
    fn severity(&self) -> ErrorSeverity {
        use InvalidAction::*;
        match self {
            UnitMissing { .. } | NotOwned { .. } | WrongSource { .. } => ErrorSeverity::Stale,
            BlockedByEnemy { .. } | Occupied { .. } | NoTarget { .. } => ErrorSeverity::Stale,
            NotInRecallList { .. } | InsufficientGold { .. } => ErrorSeverity::Stale,
            NoMovement { .. } | OffMap { .. } | Impassable { .. } => ErrorSeverity::Validation,
            NotEnemy { .. } | NotAdjacent { .. } | InvalidWeapon { .. } => {
                ErrorSeverity::Validation
            }
            NotRecruitable { .. } | NotCastle { .. } | AlreadyRecalled { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use InvalidAction::*;
        match self {
            UnitMissing { .. } => "PLAN_UNIT_MISSING",
            NotOwned { .. } => "PLAN_NOT_OWNED",
            WrongSource { .. } => "PLAN_WRONG_SOURCE",
            NoMovement { .. } => "PLAN_NO_MOVEMENT",
            OffMap { .. } => "PLAN_OFF_MAP",
            Impassable { .. } => "PLAN_IMPASSABLE",
            BlockedByEnemy { .. } => "PLAN_BLOCKED_BY_ENEMY",
            Occupied { .. } => "PLAN_OCCUPIED",
            NoTarget { .. } => "PLAN_NO_TARGET",
            NotEnemy { .. } => "PLAN_NOT_ENEMY",
            NotAdjacent { .. } => "PLAN_NOT_ADJACENT",
            InvalidWeapon { .. } => "PLAN_INVALID_WEAPON",
            NotRecruitable { .. } => "PLAN_NOT_RECRUITABLE",
            NotInRecallList { .. } => "PLAN_NOT_IN_RECALL_LIST",
            AlreadyRecalled { .. } => "PLAN_ALREADY_RECALLED",
            NotCastle { .. } => "PLAN_NOT_CASTLE",
            InsufficientGold { .. } => "PLAN_INSUFFICIENT_GOLD",
        }
    }
}
