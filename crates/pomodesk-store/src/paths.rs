//! Filesystem layout conventions
//!
//! The database lives beside the application entry point; imported
//! avatars live under `<app_root>/data/avatars`.

use std::path::{Path, PathBuf};

/// Database file location for a given application root
pub fn database_path(app_root: &Path) -> PathBuf {
    app_root.join("pomodesk.db")
}

/// Managed avatar asset directory for a given application root
pub fn avatar_dir(app_root: &Path) -> PathBuf {
    app_root.join("data").join("avatars")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_rooted_at_app_root() {
        let root = Path::new("/opt/pomodesk");
        assert_eq!(
            database_path(root),
            PathBuf::from("/opt/pomodesk/pomodesk.db")
        );
        assert_eq!(
            avatar_dir(root),
            PathBuf::from("/opt/pomodesk/data/avatars")
        );
    }
}
