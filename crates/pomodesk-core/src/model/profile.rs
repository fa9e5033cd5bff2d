use serde::{Deserialize, Serialize};

/// Display default for a profile with no stored name
pub const DEFAULT_FULL_NAME: &str = "Guest User";

/// Display default for a profile with no stored headline
pub const DEFAULT_HEADLINE: &str = "Staying Focused";

/// Profile - the single persisted user identity record
///
/// Exactly one profile exists per database. The store creates it lazily on
/// first open and never creates a second one; it is never deleted. Fields
/// carry no content validation: any string, including the empty string, is
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the application header
    pub full_name: String,

    /// One-line status shown under the name
    pub headline: String,

    /// Filesystem path of the managed avatar copy, or empty when unset.
    /// The file it points to is owned by the managed asset directory,
    /// never by the caller's source file.
    pub avatar_path: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            full_name: DEFAULT_FULL_NAME.to_string(),
            headline: DEFAULT_HEADLINE.to_string(),
            avatar_path: String::new(),
        }
    }
}
