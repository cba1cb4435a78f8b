//! Core library for Grapejuice.
//!
//! Currently hosts [`paths`], the resolver for every directory and packaged
//! file the application reads or writes.
#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    AppLayout, EnvSource, MapEnv, PathError, PathErrorKind, ProcessEnv, ResolutionRecord,
    ResolutionReport, Resolver,
};

// Dev-dependency used by the integration tests only.
#[cfg(test)]
use tracing_subscriber as _;
