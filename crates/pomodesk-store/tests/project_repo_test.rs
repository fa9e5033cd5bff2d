// Integration tests for the project repository
// Runs over the profile store's shared connection, as the application does.

use chrono::{DateTime, Utc};
use pomodesk_core::model::{Project, SessionSettings};
use pomodesk_core::PomodeskError;
use pomodesk_store::{ProfileStore, ProjectRepo};

fn at(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_seconds, 0).unwrap()
}

#[test]
fn test_save_and_get_round_trip() {
    let store = ProfileStore::open_in_memory().unwrap();

    let project = Project::new("Thesis", "📚").with_settings(SessionSettings {
        work_minutes: 50,
        short_break_minutes: 10,
        long_break_minutes: 30,
    });
    ProjectRepo::save(store.connection(), &project).unwrap();

    let loaded = ProjectRepo::get(store.connection(), "Thesis")
        .unwrap()
        .expect("project should exist");
    assert_eq!(loaded.name, "Thesis");
    assert_eq!(loaded.icon, "📚");
    assert_eq!(loaded.settings.work_minutes, 50);
}

#[test]
fn test_get_missing_returns_none() {
    let store = ProfileStore::open_in_memory().unwrap();
    assert!(ProjectRepo::get(store.connection(), "nope")
        .unwrap()
        .is_none());
}

#[test]
fn test_upsert_keeps_created_at() {
    let store = ProfileStore::open_in_memory().unwrap();

    let mut project = Project::new("Thesis", "📚");
    project.created_at = at(1_000);
    project.updated_at = at(1_000);
    ProjectRepo::save(store.connection(), &project).unwrap();

    project.icon = "🧠".to_string();
    project.settings.work_minutes = 45;
    project.updated_at = at(2_000);
    ProjectRepo::save(store.connection(), &project).unwrap();

    let loaded = ProjectRepo::get(store.connection(), "Thesis")
        .unwrap()
        .unwrap();
    assert_eq!(loaded.icon, "🧠");
    assert_eq!(loaded.settings.work_minutes, 45);
    assert_eq!(loaded.created_at, at(1_000));
    assert_eq!(loaded.updated_at, at(2_000));
}

#[test]
fn test_list_orders_by_creation_then_name() {
    let store = ProfileStore::open_in_memory().unwrap();

    let mut older = Project::new("Writing", "📝");
    older.created_at = at(1_000);
    let mut newer = Project::new("Admin", "📅");
    newer.created_at = at(2_000);
    let mut tied = Project::new("Guitar", "🎸");
    tied.created_at = at(2_000);

    for project in [&newer, &older, &tied] {
        ProjectRepo::save(store.connection(), project).unwrap();
    }

    let names: Vec<String> = ProjectRepo::list(store.connection())
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Writing", "Admin", "Guitar"]);
}

#[test]
fn test_delete_then_miss() {
    let store = ProfileStore::open_in_memory().unwrap();

    ProjectRepo::save(store.connection(), &Project::new("Thesis", "📚")).unwrap();
    ProjectRepo::delete(store.connection(), "Thesis").unwrap();

    let err = ProjectRepo::delete(store.connection(), "Thesis").unwrap_err();
    assert_eq!(
        err,
        PomodeskError::ProjectNotFound {
            name: "Thesis".to_string()
        }
    );
}

#[test]
fn test_empty_name_rejected() {
    let store = ProfileStore::open_in_memory().unwrap();

    let err = ProjectRepo::save(store.connection(), &Project::new("", "📁")).unwrap_err();
    assert!(matches!(err, PomodeskError::InvalidInput { .. }));
}
