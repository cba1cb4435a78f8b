//! Resolution record.
//!
//! Maps each path operation name to the path it most recently produced.
//! Entries are overwritten on every call and never removed; the record is a
//! "last known value" table for diagnostics, not a history log.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static GLOBAL: OnceLock<Arc<ResolutionRecord>> = OnceLock::new();

/// Process-scoped mapping from operation name to last-resolved path.
#[derive(Debug, Default)]
pub struct ResolutionRecord {
    entries: Mutex<BTreeMap<&'static str, PathBuf>>,
    stores: AtomicU64,
}

impl ResolutionRecord {
    /// A fresh, empty record. Use this to isolate a resolver from the
    /// process-wide record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide record, created on first use and alive until exit.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Path most recently produced by `name`, or `None` if not yet resolved.
    pub fn get(&self, name: &str) -> Option<PathBuf> {
        self.entries().get(name).cloned()
    }

    /// Names resolved so far, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries().keys().copied().collect()
    }

    /// Number of distinct names resolved so far.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Total number of stores since creation, across all names.
    pub fn store_count(&self) -> u64 {
        self.stores.load(Ordering::Relaxed)
    }

    /// Copy of the current entries.
    pub fn snapshot(&self) -> BTreeMap<&'static str, PathBuf> {
        self.entries().clone()
    }

    /// Current entries as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    pub(crate) fn store(&self, name: &'static str, path: &Path) {
        tracing::trace!(operation = name, path = %path.display(), "path resolved");
        self.entries().insert(name, path.to_path_buf());
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    // A panic while holding the lock cannot leave the map half-written, so
    // a poisoned lock is still safe to use.
    fn entries(&self) -> MutexGuard<'_, BTreeMap<&'static str, PathBuf>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
