//! Peg identifiers.
//!
//! The board always has exactly three pegs. In the default layout disks
//! start on `A`, `B` is the spare, and the puzzle is solved on `C`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of a disk. `1` is the smallest disk on the board.
pub type Disk = u32;

/// One of the three pegs of the board.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Peg;
///
/// assert_eq!(Peg::A.name(), "A");
/// assert_eq!(Peg::ALL, [Peg::A, Peg::B, Peg::C]);
/// assert_eq!(Peg::C.to_string(), "C");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs in board order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Peg holding every disk before the first move.
    pub const SOURCE: Peg = Peg::A;

    /// Spare peg.
    pub const AUXILIARY: Peg = Peg::B;

    /// Peg holding every disk once the puzzle is solved.
    pub const TARGET: Peg = Peg::C;

    /// Get the peg's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Position of the peg on the board, `0..3`.
    pub fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
