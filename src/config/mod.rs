//! Run configuration.
//!
//! A [`RunConfig`] describes what the caller wants solved: how many disks,
//! which strategies, and whether several strategies run side by side or
//! one after another. Configuration is validated up front so that invalid
//! input is reported before any board is touched.
//!
//! # Example
//!
//! ```rust
//! use hanoi::config::{ExecutionMode, RunConfigBuilder};
//! use hanoi::solver::Strategy;
//!
//! let config = RunConfigBuilder::new()
//!     .disks(4)
//!     .strategy(Strategy::Recursive)
//!     .strategy(Strategy::Iterative)
//!     .mode(ExecutionMode::Sequential)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.disks.get(), 4);
//! assert_eq!(config.strategies.len(), 2);
//! ```

pub mod builder;
pub mod error;

pub use builder::RunConfigBuilder;
pub use error::ConfigError;

use crate::solver::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest supported disk count. `2^63 - 1` moves still fit in a `u64`.
pub const MAX_DISKS: u32 = 63;

/// Disk count used when none is given.
pub const DEFAULT_DISKS: u32 = 3;

/// A validated number of disks, `1..=MAX_DISKS`.
///
/// # Example
///
/// ```rust
/// use hanoi::config::{ConfigError, DiskCount};
///
/// let n: DiskCount = " 5 ".parse().unwrap();
/// assert_eq!(n.get(), 5);
/// assert_eq!(n.total_moves(), 31);
///
/// assert_eq!(
///     "-2".parse::<DiskCount>(),
///     Err(ConfigError::InvalidDiskCount { requested: -2 })
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DiskCount(u32);

impl DiskCount {
    pub fn new(n: u32) -> Result<Self, ConfigError> {
        Self::try_from(i64::from(n))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Length of the optimal solution, `2^n - 1`.
    pub fn total_moves(&self) -> u64 {
        (1u64 << self.0) - 1
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        Self(DEFAULT_DISKS)
    }
}

impl TryFrom<i64> for DiskCount {
    type Error = ConfigError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        if requested < 1 || requested > i64::from(MAX_DISKS) {
            return Err(ConfigError::InvalidDiskCount { requested });
        }
        Ok(Self(requested as u32))
    }
}

impl From<DiskCount> for u32 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}

impl FromStr for DiskCount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let requested: i64 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::Malformed(format!("'{s}' is not a whole number")))?;
        Self::try_from(requested)
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a configuration with several strategies is executed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Each strategy runs on its own thread against its own board
    #[default]
    Isolated,
    /// Strategies run one at a time on the calling thread
    Sequential,
}

/// Validated description of what to solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub disks: DiskCount,
    pub strategies: Vec<Strategy>,
    pub mode: ExecutionMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            disks: DiskCount::default(),
            strategies: vec![Strategy::Recursive],
            mode: ExecutionMode::default(),
        }
    }
}

/// Wire form of [`RunConfig`]. The disk count stays signed until it is
/// checked, so out-of-range counts surface as `InvalidDiskCount`.
#[derive(Deserialize)]
#[serde(default)]
struct RawRunConfig {
    disks: i64,
    strategies: Vec<Strategy>,
    mode: ExecutionMode,
}

impl Default for RawRunConfig {
    fn default() -> Self {
        let defaults = RunConfig::default();
        Self {
            disks: i64::from(defaults.disks.get()),
            strategies: defaults.strategies,
            mode: defaults.mode,
        }
    }
}

impl RunConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults; repeated strategies are kept once.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawRunConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let config = RunConfig {
            disks: DiskCount::try_from(raw.disks)?,
            strategies: dedup(raw.strategies),
            mode: raw.mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can be run.
    ///
    /// At least one strategy must be selected, and none more than once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategySelected);
        }
        for (i, strategy) in self.strategies.iter().enumerate() {
            if self.strategies[..i].contains(strategy) {
                return Err(ConfigError::DuplicateStrategy(*strategy));
            }
        }
        Ok(())
    }
}

fn dedup(strategies: Vec<Strategy>) -> Vec<Strategy> {
    let mut unique = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        if !unique.contains(&strategy) {
            unique.push(strategy);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_count_rejects_zero_and_negative() {
        assert_eq!(
            DiskCount::new(0),
            Err(ConfigError::InvalidDiskCount { requested: 0 })
        );
        assert_eq!(
            DiskCount::try_from(-7),
            Err(ConfigError::InvalidDiskCount { requested: -7 })
        );
    }

    #[test]
    fn disk_count_rejects_values_above_max() {
        assert!(DiskCount::new(MAX_DISKS).is_ok());
        assert_eq!(
            DiskCount::new(MAX_DISKS + 1),
            Err(ConfigError::InvalidDiskCount {
                requested: i64::from(MAX_DISKS) + 1
            })
        );
    }

    #[test]
    fn disk_count_parse_rejects_text() {
        assert!(matches!(
            "three".parse::<DiskCount>(),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn total_moves_is_two_to_the_n_minus_one() {
        assert_eq!(DiskCount::new(1).unwrap().total_moves(), 1);
        assert_eq!(DiskCount::new(3).unwrap().total_moves(), 7);
        assert_eq!(DiskCount::new(10).unwrap().total_moves(), 1023);
        assert_eq!(
            DiskCount::new(MAX_DISKS).unwrap().total_moves(),
            (1u64 << 63) - 1
        );
    }

    #[test]
    fn default_config_solves_three_disks_recursively() {
        let config = RunConfig::default();
        assert_eq!(config.disks.get(), 3);
        assert_eq!(config.strategies, vec![Strategy::Recursive]);
        assert_eq!(config.mode, ExecutionMode::Isolated);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_fills_defaults_and_dedups() {
        let config = RunConfig::from_json(
            r#"{"disks": 5, "strategies": ["iterative", "recursive", "iterative"]}"#,
        )
        .unwrap();

        assert_eq!(config.disks.get(), 5);
        assert_eq!(
            config.strategies,
            vec![Strategy::Iterative, Strategy::Recursive]
        );
        assert_eq!(config.mode, ExecutionMode::Isolated);
    }

    #[test]
    fn from_json_rejects_invalid_disk_count() {
        assert_eq!(
            RunConfig::from_json(r#"{"disks": 0}"#),
            Err(ConfigError::InvalidDiskCount { requested: 0 })
        );
        assert_eq!(
            RunConfig::from_json(r#"{"disks": -3, "strategies": ["iterative"]}"#),
            Err(ConfigError::InvalidDiskCount { requested: -3 })
        );
        assert_eq!(
            RunConfig::from_json(r#"{"disks": 64}"#),
            Err(ConfigError::InvalidDiskCount { requested: 64 })
        );
    }

    #[test]
    fn from_json_reports_non_numeric_disks_as_malformed() {
        assert!(matches!(
            RunConfig::from_json(r#"{"disks": "three"}"#),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn validate_rejects_repeated_strategy() {
        let config = RunConfig {
            strategies: vec![Strategy::Iterative, Strategy::Iterative],
            ..RunConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateStrategy(Strategy::Iterative))
        );
    }

    #[test]
    fn from_json_rejects_empty_selection() {
        let result = RunConfig::from_json(r#"{"strategies": []}"#);
        assert_eq!(result, Err(ConfigError::NoStrategySelected));
    }

    #[test]
    fn from_json_parses_mode() {
        let config = RunConfig::from_json(r#"{"mode": "sequential"}"#).unwrap();
        assert_eq!(config.mode, ExecutionMode::Sequential);
    }
}
