//! Path-related error types.
//!
//! Every failure a resolver operation can raise is a variant of [`PathError`].
//! Callers that only care about the broad category use [`PathError::kind`].

use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorKind {
    /// A required environment value is missing or invalid.
    Configuration,
    /// A directory could not be created or is occupied by a non-directory.
    Filesystem,
    /// No asset-discovery candidate satisfied its predicate.
    Resolution,
    /// No locale candidate contained the compiled message catalogs.
    LocaleNotFound,
}

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// A required environment variable is not set (or is empty).
    #[error("Environment variable {variable} is not set")]
    MissingVariable { variable: &'static str },

    /// An environment variable is set but does not name a usable path.
    #[error("Environment variable {variable}={value:?} is not a usable path: {reason}")]
    InvalidVariable {
        variable: &'static str,
        value: String,
        reason: String,
    },

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// None of the asset directory candidates exist.
    #[error("Could not find assets directory, searched: {}", list_candidates(.candidates))]
    AssetsNotFound { candidates: Vec<PathBuf> },

    /// None of the locale candidates contain compiled message catalogs.
    #[error(
        "Could not find a locale directory containing {domain}.mo catalogs, searched: {}",
        list_candidates(.candidates)
    )]
    LocaleNotFound {
        domain: String,
        candidates: Vec<PathBuf>,
    },
}

impl PathError {
    /// Category of this error.
    pub const fn kind(&self) -> PathErrorKind {
        match self {
            Self::MissingVariable { .. } | Self::InvalidVariable { .. } => {
                PathErrorKind::Configuration
            }
            Self::NotADirectory(_) | Self::CreateFailed { .. } => PathErrorKind::Filesystem,
            Self::AssetsNotFound { .. } => PathErrorKind::Resolution,
            Self::LocaleNotFound { .. } => PathErrorKind::LocaleNotFound,
        }
    }

    /// Candidates that were searched, in order, for discovery failures.
    pub fn candidates(&self) -> Option<&[PathBuf]> {
        match self {
            Self::AssetsNotFound { candidates } | Self::LocaleNotFound { candidates, .. } => {
                Some(candidates.as_slice())
            }
            _ => None,
        }
    }
}

fn list_candidates(candidates: &[PathBuf]) -> String {
    let mut out = String::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", candidate.display());
    }
    if out.is_empty() {
        out.push_str("(no candidates)");
    }
    out
}
