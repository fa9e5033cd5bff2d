//! Avatar import into the managed asset directory
//!
//! Copies a user-supplied image under a fixed filename stem and binds the
//! managed copy to the profile.

use crate::errors::io_error;
use crate::profile::ProfileStore;
use pomodesk_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed filename stem for the managed avatar copy.
///
/// Exactly one avatar file per extension is retained: a new upload with
/// the same extension overwrites in place, while a different extension
/// leaves the previous file on disk (orphaned, not deleted).
pub const AVATAR_STEM: &str = "user_avatar";

/// Imports external image files into managed storage and binds them to
/// the profile.
pub struct AvatarManager {
    assets_dir: PathBuf,
}

impl AvatarManager {
    /// Create a manager rooted at `assets_dir`, creating the directory
    /// (with parents) if absent.
    ///
    /// # Errors
    ///
    /// Fails when the asset directory cannot be created; like the store
    /// itself, this is fatal at startup.
    pub fn new(assets_dir: impl Into<PathBuf>) -> Result<Self> {
        let assets_dir = assets_dir.into();
        fs::create_dir_all(&assets_dir).map_err(|e| io_error("create_assets_dir", e))?;
        Ok(Self { assets_dir })
    }

    /// The managed asset directory
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Import `source` as the profile avatar.
    ///
    /// `source` is either a bare filesystem path or a file:// URI, as
    /// native file pickers produce. A missing source is a silent no-op.
    /// Any copy or persistence failure is logged with path context and
    /// swallowed, leaving the stored path unchanged — the caller only
    /// ever observes the avatar not changing.
    pub fn update_avatar(&self, store: &mut ProfileStore, source: &str) {
        let source_path = strip_file_scheme(source);

        if !Path::new(source_path).exists() {
            tracing::debug!(source = source_path, "avatar source missing, skipping");
            return;
        }

        match self.import(store, Path::new(source_path)) {
            Ok(dest) => {
                tracing::info!(dest = %dest.display(), "avatar updated");
            }
            Err(e) => {
                tracing::error!(source = source_path, error = %e, "failed to update avatar");
            }
        }
    }

    /// Copy the source into the asset directory, then persist the new
    /// path through the store (persist + notify)
    fn import(&self, store: &mut ProfileStore, source: &Path) -> Result<PathBuf> {
        let dest = self.destination_for(source);

        // fs::copy carries contents and permission bits, and overwrites
        // an existing file at the exact destination path
        fs::copy(source, &dest).map_err(|e| io_error("copy_avatar", e))?;

        store.set_avatar_path(&dest.to_string_lossy())?;

        Ok(dest)
    }

    /// Destination under the fixed stem: `user_avatar<ext>` with the
    /// extension taken verbatim from the source (case preserved, no
    /// normalization), bare `user_avatar` when the source has none
    fn destination_for(&self, source: &Path) -> PathBuf {
        match source.extension() {
            Some(ext) => self
                .assets_dir
                .join(format!("{}.{}", AVATAR_STEM, ext.to_string_lossy())),
            None => self.assets_dir.join(AVATAR_STEM),
        }
    }
}

/// Strip a leading file:// scheme; anything else is already a local path
fn strip_file_scheme(source: &str) -> &str {
    source.strip_prefix("file://").unwrap_or(source)
}
