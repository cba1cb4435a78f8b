//! Environment access.
//!
//! Resolvers never call `std::env` directly; they read through an
//! [`EnvSource`] so embedders and tests can supply their own environment.

use std::collections::HashMap;
use std::env;
use std::fmt::Debug;

/// Home directory; required.
pub const HOME: &str = "HOME";
/// Overrides the configuration base (`~/.config`).
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
/// Overrides the cache base (`~/.cache`).
pub const XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";
/// Overrides the data base (`~/.local/share`).
pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";

/// A source of environment variables, consulted on every resolution.
pub trait EnvSource: Debug + Send + Sync {
    /// Raw value of `key`, or `None` when unset or not valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` with empty or whitespace-only values treated as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.trim().is_empty())
    }
}

/// Reads the live process environment at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// A fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// An empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Set `key` to `value` in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove `key`.
    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
