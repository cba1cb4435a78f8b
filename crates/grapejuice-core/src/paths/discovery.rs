//! Discovery of directories by content.
//!
//! A discovered directory is never created. It is the first entry of an
//! ordered candidate list that satisfies a predicate; there is no scoring
//! and no merging of multiple matches.

use std::fs;
use std::io;
use std::path::{self, Component, Path, PathBuf};

/// Return the first candidate satisfying `predicate`, in list order.
pub fn discover<P>(candidates: &[PathBuf], predicate: P) -> Option<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    candidates
        .iter()
        .find(|candidate| predicate(candidate))
        .cloned()
}

/// Predicate for asset roots: the candidate is an existing directory.
pub fn is_directory(candidate: &Path) -> bool {
    candidate.is_dir()
}

/// Predicate for locale roots: some `*/LC_MESSAGES/<catalog>` exists one
/// level below `candidate`. Hidden entries count too.
pub fn has_message_catalog(candidate: &Path, catalog: &str) -> bool {
    let Ok(entries) = fs::read_dir(candidate) else {
        return false;
    };

    entries
        .flatten()
        .any(|entry| entry.path().join("LC_MESSAGES").join(catalog).exists())
}

/// Absolute form of `path` with symlinks followed and `..` collapsed.
///
/// Each prefix that exists is canonicalized; components that do not exist
/// are kept as written, so the result need not exist.
pub fn resolve_lenient(path: &Path) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in path::absolute(path)?.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => {
                resolved.push(other);
                if let Ok(real) = fs::canonicalize(&resolved) {
                    resolved = real;
                }
            }
        }
    }
    Ok(resolved)
}
