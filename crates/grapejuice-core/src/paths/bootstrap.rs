//! One-time copy of a packaged template into a user-writable location.

use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

use tempfile::NamedTempFile;

/// Copy `template` to `dest` unless `dest` already exists.
///
/// The template is staged in a temporary file next to `dest` and moved into
/// place with a no-clobber rename, so a concurrent reader sees either no file
/// or the complete copy, and an existing `dest` is never replaced.
///
/// Returns `Ok(true)` if this call created `dest`, `Ok(false)` if it was
/// already present (including when another caller won the race).
pub fn bootstrap_copy(template: &Path, dest: &Path) -> io::Result<bool> {
    if dest.exists() {
        return Ok(false);
    }

    let parent = dest
        .parent()
        .ok_or_else(|| io::Error::new(ErrorKind::InvalidInput, "destination has no parent"))?;

    let mut source = File::open(template)?;
    let mut staged = NamedTempFile::new_in(parent)?;
    io::copy(&mut source, staged.as_file_mut())?;
    staged.as_file().sync_all()?;

    match staged.persist_noclobber(dest) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error),
    }
}
