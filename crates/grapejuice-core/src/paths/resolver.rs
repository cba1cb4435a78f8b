//! The resolver and its introspection report.
//!
//! A [`Resolver`] bundles the three things every path operation depends on:
//! an environment source, the application layout, and the resolution record
//! its results are written to. All three are injected, so tests and
//! embedders can build isolated instances.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use super::env::{EnvSource, ProcessEnv};
use super::error::PathError;
use super::layout::AppLayout;
use super::operations::{PATH_OPERATIONS, PathOperation};
use super::record::ResolutionRecord;

/// Signature shared by every path operation.
pub type ResolveFn = fn(&Resolver) -> Result<PathBuf, PathError>;

/// Resolves application directories from the environment.
#[derive(Debug, Clone)]
pub struct Resolver {
    pub(super) env: Arc<dyn EnvSource>,
    pub(super) layout: AppLayout,
    record: Arc<ResolutionRecord>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Resolver over the live process environment, the default layout, and
    /// the process-wide record.
    pub fn new() -> Self {
        Self {
            env: Arc::new(ProcessEnv),
            layout: AppLayout::default(),
            record: ResolutionRecord::global(),
        }
    }

    /// Replace the environment source.
    #[must_use]
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: AppLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Write results to `record` instead of the process-wide one.
    #[must_use]
    pub fn with_record(mut self, record: Arc<ResolutionRecord>) -> Self {
        self.record = record;
        self
    }

    pub fn layout(&self) -> &AppLayout {
        &self.layout
    }

    /// The record this resolver writes to.
    pub fn record(&self) -> &Arc<ResolutionRecord> {
        &self.record
    }

    /// Every recorded path operation, in declaration order.
    pub fn operations() -> &'static [PathOperation] {
        PATH_OPERATIONS
    }

    /// Run every path operation once and collect the outcomes.
    ///
    /// Failures do not stop the walk; each is captured in its entry.
    pub fn resolve_all(&self) -> ResolutionReport {
        let entries = PATH_OPERATIONS
            .iter()
            .map(|op| ReportEntry {
                name: op.name,
                outcome: match (op.resolve)(self) {
                    Ok(path) => Outcome::Resolved(path),
                    Err(e) => Outcome::Failed(e.to_string()),
                },
            })
            .collect();

        ResolutionReport { entries }
    }

    /// Run `resolve` and store its result under `name`.
    ///
    /// Failures are returned untouched and nothing is recorded for them.
    pub(super) fn recorded(
        &self,
        name: &'static str,
        resolve: ResolveFn,
    ) -> Result<PathBuf, PathError> {
        let path = resolve(self)?;
        self.record.store(name, &path);
        Ok(path)
    }
}

/// Result of a single operation in a [`ResolutionReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Resolved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: &'static str,
    pub outcome: Outcome,
}

/// Every path operation's outcome, captured in a single pass.
///
/// Displays as one `name = value` line per operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub entries: Vec<ReportEntry>,
}

impl ResolutionReport {
    /// Outcome of `name`, if it is a known operation.
    pub fn get(&self, name: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.outcome)
    }

    /// Entries that failed to resolve.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, Outcome::Failed(_)))
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match &entry.outcome {
                Outcome::Resolved(path) => write!(f, "{} = {}", entry.name, path.display())?,
                Outcome::Failed(reason) => write!(f, "{} = <error: {reason}>", entry.name)?,
            }
        }
        Ok(())
    }
}
