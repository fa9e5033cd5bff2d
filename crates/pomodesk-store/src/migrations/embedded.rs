//! Embedded SQL migrations
//!
//! Migration SQL is embedded at compile time using include_str!

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_profile",
            sql: include_str!("../../migrations/001_profile.sql"),
        },
        Migration {
            id: "002_projects",
            sql: include_str!("../../migrations/002_projects.sql"),
        },
    ]
}
