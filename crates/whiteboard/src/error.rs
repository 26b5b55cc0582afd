//! Common error infrastructure for the whiteboard.
//!
//! Planned actions go stale as the game moves on underneath them. Those
//! conditions are ordinary data (see [`crate::action::InvalidAction`]) and are
//! resolved by the validation pass instead of being propagated to callers.
//! Broken caller preconditions (unset team index, negative gold ledger,
//! out-of-range cursors) are not represented here: they panic.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The game state drifted; dropping the affected plan is the recovery.
    ///
    /// Examples: unit died, destination became occupied
    Stale,

    /// The plan was never executable as staged.
    ///
    /// Examples: weapon index out of range, unit type not recruitable
    Validation,

    /// Collaborator data is inconsistent with itself.
    ///
    /// Examples: a unit reported at a hex outside the map
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stale => "stale",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all whiteboard errors.
///
/// - Planning error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait PlanError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Used in logs and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
