//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::from_rusqlite;
use pomodesk_core::Result;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path, creating the file if absent
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| from_rusqlite("open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| from_rusqlite("open_in_memory", e))
}

/// Configure a connection with the settings every store expects
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(|e| from_rusqlite("configure", e))?;

    // journal_mode returns the resulting mode as a row, so it cannot go
    // through execute()
    conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
        .map_err(|e| from_rusqlite("configure", e))?;

    Ok(())
}
