//! Project repository
//!
//! CRUD over the projects table, running on the profile store's shared
//! connection. Projects carry no change signal of their own: the list UI
//! re-renders from the values it just wrote.

use crate::errors::from_rusqlite;
use pomodesk_core::model::{Project, SessionSettings};
use pomodesk_core::{PomodeskError, Result};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for focus projects
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert or update a project, keyed by name.
    ///
    /// An existing project keeps its `created_at`; icon, durations and
    /// `updated_at` are replaced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name, `Persistence` on a
    /// storage failure.
    pub fn save(conn: &Connection, project: &Project) -> Result<()> {
        if project.name.is_empty() {
            return Err(PomodeskError::InvalidInput {
                reason: "project name must not be empty".to_string(),
            });
        }

        conn.execute(
            "INSERT INTO projects
                (name, icon, work_minutes, short_break_minutes, long_break_minutes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(name) DO UPDATE SET
                icon = excluded.icon,
                work_minutes = excluded.work_minutes,
                short_break_minutes = excluded.short_break_minutes,
                long_break_minutes = excluded.long_break_minutes,
                updated_at = excluded.updated_at",
            rusqlite::params![
                project.name,
                project.icon,
                project.settings.work_minutes,
                project.settings.short_break_minutes,
                project.settings.long_break_minutes,
                project.created_at.timestamp(),
                project.updated_at.timestamp(),
            ],
        )
        .map_err(|e| from_rusqlite("save_project", e))?;

        Ok(())
    }

    /// Fetch a project by name
    pub fn get(conn: &Connection, name: &str) -> Result<Option<Project>> {
        conn.query_row(
            "SELECT name, icon, work_minutes, short_break_minutes, long_break_minutes,
                    created_at, updated_at
             FROM projects WHERE name = ?1",
            [name],
            row_to_project,
        )
        .optional()
        .map_err(|e| from_rusqlite("get_project", e))
    }

    /// List all projects in deterministic order (creation time, then name)
    pub fn list(conn: &Connection) -> Result<Vec<Project>> {
        let mut stmt = conn
            .prepare(
                "SELECT name, icon, work_minutes, short_break_minutes, long_break_minutes,
                        created_at, updated_at
                 FROM projects ORDER BY created_at, name",
            )
            .map_err(|e| from_rusqlite("list_projects", e))?;

        let projects = stmt
            .query_map([], row_to_project)
            .map_err(|e| from_rusqlite("list_projects", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_projects", e))?;

        Ok(projects)
    }

    /// Delete a project by name.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` when no project with that name exists.
    pub fn delete(conn: &Connection, name: &str) -> Result<()> {
        let affected = conn
            .execute("DELETE FROM projects WHERE name = ?1", [name])
            .map_err(|e| from_rusqlite("delete_project", e))?;

        if affected == 0 {
            return Err(PomodeskError::ProjectNotFound {
                name: name.to_string(),
            });
        }

        Ok(())
    }
}

fn row_to_project(row: &rusqlite::Row<'_>) -> rusqlite::Result<Project> {
    let created_at: i64 = row.get(5)?;
    let updated_at: i64 = row.get(6)?;

    Ok(Project {
        name: row.get(0)?,
        icon: row.get(1)?,
        settings: SessionSettings {
            work_minutes: row.get(2)?,
            short_break_minutes: row.get(3)?,
            long_break_minutes: row.get(4)?,
        },
        created_at: chrono::DateTime::from_timestamp(created_at, 0)
            .unwrap_or_else(chrono::Utc::now),
        updated_at: chrono::DateTime::from_timestamp(updated_at, 0)
            .unwrap_or_else(chrono::Utc::now),
    })
}
