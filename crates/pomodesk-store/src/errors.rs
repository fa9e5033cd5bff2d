//! Error construction helpers for pomodesk-store
//!
//! Thin constructors around pomodesk-core's error taxonomy

use pomodesk_core::PomodeskError;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> PomodeskError {
    PomodeskError::Persistence {
        op: op.to_string(),
        reason: err.to_string(),
    }
}

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> PomodeskError {
    PomodeskError::Io {
        op: op.to_string(),
        reason: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> PomodeskError {
    PomodeskError::MigrationFailed {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}
