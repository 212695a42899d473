//! Builder API for creating run configuration.

use crate::config::error::ConfigError;
use crate::config::{DiskCount, ExecutionMode, RunConfig, DEFAULT_DISKS};
use crate::solver::Strategy;

/// Builder for creating a validated [`RunConfig`].
///
/// Mirrors the controls of a solving front end: a disk count entry, one
/// toggle per strategy, and how selected strategies are scheduled.
pub struct RunConfigBuilder {
    disks: i64,
    strategies: Vec<Strategy>,
    mode: ExecutionMode,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            disks: i64::from(DEFAULT_DISKS),
            strategies: Vec::new(),
            mode: ExecutionMode::default(),
        }
    }

    /// Set the number of disks
    pub fn disks(mut self, n: u32) -> Self {
        self.disks = i64::from(n);
        self
    }

    /// Set the number of disks from a signed value, e.g. raw user input
    pub fn disks_signed(mut self, n: i64) -> Self {
        self.disks = n;
        self
    }

    /// Select a strategy. Selecting the same strategy twice has no effect.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if !self.strategies.contains(&strategy) {
            self.strategies.push(strategy);
        }
        self
    }

    /// Select every available strategy
    pub fn all_strategies(self) -> Self {
        Strategy::ALL
            .into_iter()
            .fold(self, |builder, strategy| builder.strategy(strategy))
    }

    /// Set how multiple strategies are executed
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the configuration, validating the disk count first.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let config = RunConfig {
            disks: DiskCount::try_from(self.disks)?,
            strategies: self.strategies,
            mode: self.mode,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
