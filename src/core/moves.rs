//! Move records.

use super::peg::{Disk, Peg};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single disk relocation.
///
/// Moves are immutable values. A run emits them in strict chronological
/// order, one per board transition.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, Peg};
///
/// let mv = Move { disk: 1, from: Peg::A, to: Peg::C };
/// assert_eq!(mv.to_string(), "Move disk 1 from A to C");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    /// Size of the disk that moved
    pub disk: Disk,
    /// Peg the disk was taken from
    pub from: Peg,
    /// Peg the disk was placed on
    pub to: Peg,
}

impl Move {
    pub fn new(disk: Disk, from: Peg, to: Peg) -> Self {
        Self { disk, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move disk {} from {} to {}",
            self.disk, self.from, self.to
        )
    }
}
