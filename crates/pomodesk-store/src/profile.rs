//! Single-row profile store
//!
//! Owns the profile table, guarantees exactly one row exists, and emits a
//! zero-payload change signal after every successful write.

use crate::db;
use crate::errors::from_rusqlite;
use crate::migrations::apply_migrations;
use pomodesk_core::model::{Profile, DEFAULT_FULL_NAME, DEFAULT_HEADLINE};
use pomodesk_core::{ChangeSignal, Result};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

/// Durable single-row profile store with change notification.
///
/// Exactly one profile row exists once `open` returns; repeated opens of
/// the same location never create a second one. Field getters never fail:
/// a missing row (or an unexpected read failure) degrades to the field's
/// display default. Each setter persists inside its own short-lived
/// transaction and emits the change signal at most once; setting a field
/// to its current value is a no-op with no notification.
pub struct ProfileStore {
    conn: Connection,
    changed: ChangeSignal,
}

impl ProfileStore {
    /// Open (or create) the profile database at `db_path`.
    ///
    /// Configures the connection, applies schema migrations, and inserts
    /// the default profile row if the table is empty. Idempotent across
    /// repeated calls on the same location.
    ///
    /// # Errors
    ///
    /// Fails when the database cannot be opened or the schema cannot be
    /// created. This is fatal at startup: the application cannot proceed
    /// without its profile store.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Self::from_connection(db::open(db_path)?)
    }

    /// Open an in-memory profile store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        ensure_profile_row(&mut conn)?;

        Ok(Self {
            conn,
            changed: ChangeSignal::new(),
        })
    }

    /// Register a listener fired after every successful field mutation.
    ///
    /// The signal carries no payload; re-read all displayed properties on
    /// receipt.
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.changed.subscribe(listener);
    }

    /// The shared transactional storage handle.
    ///
    /// The project repository runs over this same connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Snapshot of the whole profile, as consumers re-read it on a
    /// change signal.
    ///
    /// `avatar_path` carries the display-ready reference from
    /// [`Self::avatar_path`], not the raw stored string.
    pub fn profile(&self) -> Profile {
        Profile {
            full_name: self.full_name(),
            headline: self.headline(),
            avatar_path: self.avatar_path(),
        }
    }

    /// Current display name, or "Guest User" when no row is found
    pub fn full_name(&self) -> String {
        self.read_field("full_name")
            .unwrap_or_else(|| DEFAULT_FULL_NAME.to_string())
    }

    /// Persist a new display name and notify, unless unchanged.
    ///
    /// Accepts any string, including the empty string.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` on a storage failure. A missing profile row
    /// is not an error: the call becomes a silent no-op.
    pub fn set_full_name(&mut self, value: &str) -> Result<()> {
        self.write_field("full_name", value)
    }

    /// Current headline, or "Staying Focused" when no row is found
    pub fn headline(&self) -> String {
        self.read_field("headline")
            .unwrap_or_else(|| DEFAULT_HEADLINE.to_string())
    }

    /// Persist a new headline and notify, unless unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` on a storage failure. A missing profile row
    /// is not an error: the call becomes a silent no-op.
    pub fn set_headline(&mut self, value: &str) -> Result<()> {
        self.write_field("headline", value)
    }

    /// Display-ready reference to the stored avatar.
    ///
    /// Returns a file:// URI only when a path is stored AND the file it
    /// names currently exists on disk; otherwise the empty string. The
    /// existence check runs on every read, never cached, so a deleted
    /// avatar file disappears from the UI on the next read.
    pub fn avatar_path(&self) -> String {
        let stored = self.read_field("avatar_path").unwrap_or_default();
        if stored.is_empty() || !Path::new(&stored).exists() {
            return String::new();
        }

        match url::Url::from_file_path(&stored) {
            Ok(uri) => uri.to_string(),
            // from_file_path rejects relative paths; fall back to the raw
            // path rather than hiding an avatar that does exist
            Err(()) => stored,
        }
    }

    /// Persist the avatar path unconditionally and notify.
    ///
    /// Used by the avatar manager after a successful import; the stored
    /// value is the managed copy's path, never the caller's source file.
    pub(crate) fn set_avatar_path(&mut self, value: &str) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("set_avatar_path", e))?;

        tx.execute("UPDATE profile SET avatar_path = ?1", [value])
            .map_err(|e| from_rusqlite("set_avatar_path", e))?;

        tx.commit().map_err(|e| from_rusqlite("set_avatar_path", e))?;

        self.changed.emit();
        Ok(())
    }

    /// Read one profile column, mapping both a missing row and an
    /// unexpected read failure to `None`
    fn read_field(&self, column: &'static str) -> Option<String> {
        let sql = format!("SELECT {} FROM profile LIMIT 1", column);
        match self.conn.query_row(&sql, [], |row| row.get(0)).optional() {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(column, error = %e, "profile read failed, using default");
                None
            }
        }
    }

    /// Write one profile column inside a short-lived transaction.
    ///
    /// No-op (no write, no notification) when the row is missing or the
    /// new value equals the current one.
    fn write_field(&mut self, column: &'static str, value: &str) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("write_field", e))?;

        let select = format!("SELECT {} FROM profile LIMIT 1", column);
        let current: Option<String> = tx
            .query_row(&select, [], |row| row.get(0))
            .optional()
            .map_err(|e| from_rusqlite("write_field", e))?;

        let current = match current {
            Some(current) => current,
            None => return Ok(()),
        };

        if current == value {
            return Ok(());
        }

        let update = format!("UPDATE profile SET {} = ?1", column);
        tx.execute(&update, [value])
            .map_err(|e| from_rusqlite("write_field", e))?;

        tx.commit().map_err(|e| from_rusqlite("write_field", e))?;

        self.changed.emit();
        Ok(())
    }
}

/// Insert the default profile row iff the table is empty.
///
/// Runs in its own transaction so two checks can never both insert.
fn ensure_profile_row(conn: &mut Connection) -> Result<()> {
    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("ensure_profile_row", e))?;

    let count: i64 = tx
        .query_row("SELECT COUNT(*) FROM profile", [], |row| row.get(0))
        .map_err(|e| from_rusqlite("ensure_profile_row", e))?;

    if count == 0 {
        tracing::info!("creating initial profile row");
        tx.execute("INSERT INTO profile DEFAULT VALUES", [])
            .map_err(|e| from_rusqlite("ensure_profile_row", e))?;
    }

    tx.commit()
        .map_err(|e| from_rusqlite("ensure_profile_row", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_fresh_store_serves_defaults() {
        let store = ProfileStore::open_in_memory().unwrap();
        assert_eq!(store.full_name(), "Guest User");
        assert_eq!(store.headline(), "Staying Focused");
        assert_eq!(store.avatar_path(), "");
        assert_eq!(store.profile(), Profile::default());
    }

    #[test]
    fn test_exactly_one_row_after_init() {
        let store = ProfileStore::open_in_memory().unwrap();
        let count: i64 = store
            .connection()
            .query_row("SELECT COUNT(*) FROM profile", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_setter_round_trip() {
        let mut store = ProfileStore::open_in_memory().unwrap();
        store.set_full_name("Alice").unwrap();
        assert_eq!(store.full_name(), "Alice");
    }

    #[test]
    fn test_equal_value_set_does_not_notify() {
        let mut store = ProfileStore::open_in_memory().unwrap();
        let fired = Rc::new(Cell::new(0));
        {
            let fired = Rc::clone(&fired);
            store.subscribe(move || fired.set(fired.get() + 1));
        }

        store.set_full_name("Alice").unwrap();
        store.set_full_name("Alice").unwrap();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_empty_string_is_accepted() {
        let mut store = ProfileStore::open_in_memory().unwrap();
        store.set_headline("").unwrap();
        assert_eq!(store.headline(), "");
    }

    #[test]
    fn test_missing_row_degrades_without_error() {
        let mut store = ProfileStore::open_in_memory().unwrap();
        store
            .connection()
            .execute("DELETE FROM profile", [])
            .unwrap();

        assert_eq!(store.full_name(), "Guest User");
        assert_eq!(store.headline(), "Staying Focused");

        let fired = Rc::new(Cell::new(0));
        {
            let fired = Rc::clone(&fired);
            store.subscribe(move || fired.set(fired.get() + 1));
        }
        store.set_full_name("Alice").unwrap();
        assert_eq!(fired.get(), 0, "missing row must not notify");
    }
}
