//! Directory creation.
//!
//! Only a handful of resolved paths are allowed to touch the filesystem.
//! Each of them goes through [`ensure_directory`], so grepping for it lists
//! every accessor with a creation side effect.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Ensure `path` exists and is a directory, creating it and any missing parents.
///
/// Idempotent: an existing directory is success. A directory created
/// concurrently by another thread or process is also success. A path
/// occupied by a non-directory fails with [`PathError::NotADirectory`].
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.is_dir() {
        return Ok(());
    }

    if let Err(e) = fs::create_dir_all(path) {
        // Lost a race against another creator.
        if path.is_dir() {
            return Ok(());
        }
        if path.exists() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Err(PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        });
    }

    if !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}
