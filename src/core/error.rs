//! Board errors.

use super::peg::{Disk, Peg};
use thiserror::Error;

/// Errors raised by board operations and invariant checks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to take a disk from a peg that holds none
    #[error("Peg {peg} is empty")]
    EmptyPeg { peg: Peg },

    /// A disk rests on a smaller one
    #[error("Disk {above} rests on smaller disk {below} on peg {peg}")]
    InvariantViolated { peg: Peg, below: Disk, above: Disk },

    /// The disks on the board are not exactly 1..=n
    #[error("Board holds disks {found:?}, expected 1..={expected}")]
    DiskSetMismatch { expected: u32, found: Vec<Disk> },
}
