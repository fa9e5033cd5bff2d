//! Error taxonomy for PomoDesk operations

use thiserror::Error;

/// Result type alias using PomodeskError
pub type Result<T> = std::result::Result<T, PomodeskError>;

/// Error taxonomy for PomoDesk operations
///
/// Only genuinely fatal or caller-actionable failures surface here. The
/// profile store's degraded paths (missing row on read or write) are not
/// errors at all: getters fall back to display defaults and setters become
/// no-ops, per the compatibility contract with the UI layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PomodeskError {
    // ===== Persistence Errors =====
    /// A SQLite operation failed
    #[error("database error in {op}: {reason}")]
    Persistence { op: String, reason: String },

    /// A schema migration could not be applied
    #[error("migration {migration_id} failed: {reason}")]
    MigrationFailed {
        migration_id: String,
        reason: String,
    },

    // ===== Filesystem Errors =====
    /// A filesystem operation failed
    #[error("I/O error in {op}: {reason}")]
    Io { op: String, reason: String },

    // ===== Project Errors =====
    /// Project not found in the repository
    #[error("project not found: {name}")]
    ProjectNotFound { name: String },

    /// Input validation failure
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
