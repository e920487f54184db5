//! Error types for TeamForge

use thiserror::Error;

use crate::unit::UnitId;

/// Main error type for TeamForge operations.
///
/// Every variant is a caller configuration error raised before a search
/// starts. A search that finds no valid assignment is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamForgeError {
    /// A module references more units than a node can hold.
    #[error("Module '{module}' has {count} units, at most 4 are allowed")]
    TooManyUnits { module: String, count: usize },

    /// A module lists the same unit twice.
    #[error("Module '{module}' contains unit {unit} more than once")]
    DuplicateUnit { module: String, unit: UnitId },

    /// A module without any unit.
    #[error("Module '{module}' has no units")]
    EmptyModule { module: String },

    /// Registry lookup for an unregistered id.
    #[error("Unknown unit: {0}")]
    UnknownUnit(UnitId),

    /// Registry already holds a unit with this id.
    #[error("Unit {0} is already registered")]
    DuplicateRegistration(UnitId),
}

/// Result type alias for TeamForge operations
pub type Result<T> = std::result::Result<T, TeamForgeError>;
