use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-project session durations, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Work session length
    pub work_minutes: u32,
    /// Short break length
    pub short_break_minutes: u32,
    /// Long break length
    pub long_break_minutes: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

/// Project - a named focus context with its own session durations
///
/// Projects are keyed by name. The icon is a short free-form string (an
/// emoji in the stock UI); it is display data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name
    pub name: String,

    /// Short display icon
    pub icon: String,

    /// Session durations for this project
    pub settings: SessionSettings,

    /// Timestamp when this project was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this project was last updated
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with default session settings and current
    /// timestamps
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            icon: icon.into(),
            settings: SessionSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the session durations and bump `updated_at`
    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self.updated_at = Utc::now();
        self
    }
}
