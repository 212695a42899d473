//! Strategy selection.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm used to produce the move sequence.
///
/// Both strategies produce the same optimal sequence; they differ only in
/// how it is computed.
///
/// # Example
///
/// ```rust
/// use hanoi::solver::Strategy;
///
/// let strategy: Strategy = "Iterative".parse().unwrap();
/// assert_eq!(strategy, Strategy::Iterative);
/// assert_eq!(strategy.name(), "iterative");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Recursive,
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Recursive, Strategy::Iterative];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Iterative => "iterative",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Self::Recursive),
            "iterative" => Ok(Self::Iterative),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            " RECURSIVE ".parse::<Strategy>().unwrap(),
            Strategy::Recursive
        );
        assert_eq!(
            "iterative".parse::<Strategy>().unwrap(),
            Strategy::Iterative
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "bogus".parse::<Strategy>(),
            Err(ConfigError::UnknownStrategy("bogus".to_string()))
        );
    }

    #[test]
    fn strategy_serializes_lowercase() {
        let json = serde_json::to_string(&Strategy::Recursive).unwrap();
        assert_eq!(json, "\"recursive\"");
    }
}
