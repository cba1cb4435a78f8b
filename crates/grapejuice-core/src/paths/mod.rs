//! Path resolution for Grapejuice directories and packaged assets.
//!
//! This module provides the canonical locations used by every Grapejuice
//! component:
//! - XDG base directories (config, cache, data) with home-relative fallbacks
//! - Application config, cache, data, log and wineprefix directories
//! - The user settings file, bootstrapped from a packaged template
//! - The packaged asset tree and compiled translation catalogs, found by
//!   scanning ordered candidate lists
//!
//! # Design
//!
//! - Every path operation is a method on [`Resolver`] returning
//!   `Result<PathBuf, PathError>`
//! - Every path operation is declared in one table (`operations.rs`), which
//!   also routes its result into a [`ResolutionRecord`]
//! - Only `dot_local`, `xdg_config_home`, `xdg_cache_home`, an overridden
//!   `xdg_data_home` and `cache_dir` create directories; discovered roots are
//!   never created

mod app;
mod assets;
mod base;
mod bootstrap;
mod discovery;
mod ensure;
mod env;
mod error;
mod layout;
mod operations;
mod record;
mod resolver;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::{PathError, PathErrorKind};

// Environment sources
pub use env::{
    EnvSource, HOME, MapEnv, ProcessEnv, XDG_CACHE_HOME, XDG_CONFIG_HOME, XDG_DATA_HOME,
};

// Names and search locations
pub use layout::{
    AppLayout, DEFAULT_APPLICATION, DEFAULT_LOCALE_OVERRIDE_VAR, DEFAULT_ORGANIZATION,
    DEFAULT_SETTINGS_TEMPLATE, DEFAULT_SYSTEM_LOCALE_DIRS,
};

// Building blocks
pub use bootstrap::bootstrap_copy;
pub use discovery::{discover, has_message_catalog, is_directory, resolve_lenient};
pub use ensure::ensure_directory;

// Resolver, operation table and introspection
pub use operations::{PATH_OPERATIONS, PathOperation};
pub use record::ResolutionRecord;
pub use resolver::{Outcome, ReportEntry, ResolutionReport, ResolveFn, Resolver};
