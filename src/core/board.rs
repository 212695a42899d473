//! Board state: three pegs holding stacks of disks.

use super::error::BoardError;
use super::moves::Move;
use super::peg::{Disk, Peg};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The puzzle board.
///
/// Each peg is a stack stored bottom-first, so the last element of a peg is
/// its top disk. Within a peg sizes strictly decrease from bottom to top,
/// and the union of all pegs is always exactly `1..=n`.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{PegState, Peg};
///
/// let mut board = PegState::new(2);
/// assert_eq!(board.disks(Peg::A), &[2, 1]);
///
/// let mv = board.move_disk(Peg::A, Peg::B).unwrap();
/// assert_eq!(mv.disk, 1);
/// assert_eq!(board.top(Peg::B), Some(1));
/// assert_eq!(board.top(Peg::A), Some(2));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PegState {
    pegs: [Vec<Disk>; 3],
    disk_count: u32,
}

impl PegState {
    /// Create a board with `n` disks stacked on the source peg, `n` at the
    /// bottom and `1` on top.
    pub fn new(n: u32) -> Self {
        Self {
            pegs: [(1..=n).rev().collect(), Vec::new(), Vec::new()],
            disk_count: n,
        }
    }

    /// Create a board with no disks.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Number of disks the board was created with.
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    /// Disks on `peg`, bottom first.
    pub fn disks(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Size of the topmost disk on `peg`, or `None` if the peg is empty.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    /// Check whether `peg` holds no disks.
    pub fn is_empty(&self, peg: Peg) -> bool {
        self.pegs[peg.index()].is_empty()
    }

    /// Remove and return the topmost disk of `peg`.
    pub fn pop(&mut self, peg: Peg) -> Result<Disk, BoardError> {
        self.pegs[peg.index()]
            .pop()
            .ok_or(BoardError::EmptyPeg { peg })
    }

    /// Place `disk` on top of `peg`.
    ///
    /// # Panics
    ///
    /// Panics if `disk` is not smaller than the current top of `peg`.
    /// Callers are responsible for only making legal placements.
    pub fn push(&mut self, peg: Peg, disk: Disk) {
        if let Some(top) = self.top(peg) {
            assert!(
                disk < top,
                "cannot place disk {disk} on smaller disk {top} (peg {peg})"
            );
        }
        self.pegs[peg.index()].push(disk);
    }

    /// Relocate the top disk of `from` onto `to`.
    pub fn move_disk(&mut self, from: Peg, to: Peg) -> Result<Move, BoardError> {
        let disk = self.pop(from)?;
        self.push(to, disk);
        Ok(Move::new(disk, from, to))
    }

    /// Check whether every disk sits on the target peg.
    pub fn is_solved(&self) -> bool {
        self.is_empty(Peg::SOURCE)
            && self.is_empty(Peg::AUXILIARY)
            && self.disks(Peg::TARGET).len() == self.disk_count as usize
    }

    /// Verify the board invariants.
    ///
    /// Returns the first peg found with a larger disk above a smaller one,
    /// or a mismatch if the board no longer holds exactly `1..=n`.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        for peg in Peg::ALL {
            for pair in self.disks(peg).windows(2) {
                if pair[0] <= pair[1] {
                    return Err(BoardError::InvariantViolated {
                        peg,
                        below: pair[0],
                        above: pair[1],
                    });
                }
            }
        }

        let mut found: Vec<Disk> = self.pegs.iter().flatten().copied().collect();
        found.sort_unstable();
        if !found.iter().copied().eq(1..=self.disk_count) {
            return Err(BoardError::DiskSetMismatch {
                expected: self.disk_count,
                found,
            });
        }

        Ok(())
    }
}

impl fmt::Display for PegState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in Peg::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={:?}", peg, self.disks(*peg))?;
        }
        Ok(())
    }
}
