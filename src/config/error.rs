//! Configuration errors.

use crate::solver::Strategy;
use thiserror::Error;

/// Errors that can occur when validating run configuration.
///
/// All of these are reported before any board is created.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid disk count {requested}: expected 1..={max}", max = super::MAX_DISKS)]
    InvalidDiskCount { requested: i64 },

    #[error("No strategy selected. Select at least one of recursive, iterative")]
    NoStrategySelected,

    #[error("Strategy '{0}' selected more than once")]
    DuplicateStrategy(Strategy),

    #[error("Unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}
