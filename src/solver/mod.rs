//! Move generation.
//!
//! [`solve`] returns a lazy [`Solution`]: an iterator that owns a fresh
//! board, applies each move to it as the move is produced, and stops early
//! if its [`StopSignal`] is cancelled. Calling `solve` again always starts
//! over from the initial board.
//!
//! # Key Concepts
//!
//! - **Strategies**: recursive and iterative generation of the same sequence
//! - **Isolation**: every `Solution` has its own board; none are shared
//! - **Cancellation**: checked before each move, never rolls back
//!
//! # Example
//!
//! ```rust
//! use hanoi::core::{Move, Peg};
//! use hanoi::solver::{solve, Strategy};
//!
//! let moves: Vec<Move> = solve(Strategy::Iterative, 2).unwrap().collect();
//! assert_eq!(
//!     moves,
//!     vec![
//!         Move::new(1, Peg::A, Peg::B),
//!         Move::new(2, Peg::A, Peg::C),
//!         Move::new(1, Peg::B, Peg::C),
//!     ]
//! );
//! ```

mod iterative;
mod recursive;
mod stop;
mod strategy;

pub use stop::StopSignal;
pub use strategy::Strategy;

use crate::config::{ConfigError, DiskCount};
use crate::core::{Move, MoveObserver, Peg, PegState};
use iterative::IterativeMoves;
use recursive::RecursiveMoves;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Create the initial board for `n` disks.
///
/// Fails with [`ConfigError::InvalidDiskCount`] if `n` is out of range.
pub fn initialize(n: u32) -> Result<PegState, ConfigError> {
    let disks = DiskCount::new(n)?;
    Ok(PegState::new(disks.get()))
}

/// Prepare a lazy solution of `n` disks with `strategy`.
///
/// The disk count is validated before anything else happens.
pub fn solve(strategy: Strategy, n: u32) -> Result<Solution, ConfigError> {
    Ok(Solution::new(strategy, DiskCount::new(n)?))
}

#[derive(Clone, Debug)]
enum Generator {
    Recursive(RecursiveMoves),
    Iterative(IterativeMoves),
}

/// Lazily produced move sequence of one run.
///
/// Yields exactly `2^n - 1` moves unless stopped. Each yielded move has
/// already been applied to [`Solution::board`].
#[derive(Clone, Debug)]
pub struct Solution {
    strategy: Strategy,
    board: PegState,
    generator: Generator,
    stop: Option<StopSignal>,
    emitted: u64,
    total: u64,
    halted: bool,
}

impl Solution {
    pub fn new(strategy: Strategy, disks: DiskCount) -> Self {
        let n = disks.get();
        let (from, to, via) = (Peg::SOURCE, Peg::TARGET, Peg::AUXILIARY);
        let generator = match strategy {
            Strategy::Recursive => Generator::Recursive(RecursiveMoves::new(n, from, to, via)),
            Strategy::Iterative => Generator::Iterative(IterativeMoves::new(n, from, to, via)),
        };
        debug!(%strategy, disks = n, "prepared solution");

        Self {
            strategy,
            board: PegState::new(n),
            generator,
            stop: None,
            emitted: 0,
            total: disks.total_moves(),
            halted: false,
        }
    }

    /// Attach a stop signal checked before every move.
    pub fn with_stop(mut self, stop: StopSignal) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Board with every move produced so far applied.
    pub fn board(&self) -> &PegState {
        &self.board
    }

    pub fn into_board(self) -> PegState {
        self.board
    }

    /// Number of moves produced so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Number of moves in the complete solution.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check whether the sequence ended because the stop signal was set.
    pub fn was_stopped(&self) -> bool {
        self.halted
    }

    /// Produce every remaining move, reporting each to `observer` after it
    /// has been applied. Returns the number of moves reported.
    pub fn drive<O: MoveObserver + ?Sized>(&mut self, observer: &mut O) -> u64 {
        let mut reported = 0;
        while let Some(mv) = self.next() {
            observer.on_move(&mv, &self.board);
            reported += 1;
        }
        reported
    }

    fn stop_requested(&self) -> bool {
        self.stop.as_ref().is_some_and(StopSignal::is_cancelled)
    }
}

impl Iterator for Solution {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.halted || self.emitted == self.total {
            return None;
        }
        if self.stop_requested() {
            debug!(strategy = %self.strategy, after = self.emitted, "stop requested");
            self.halted = true;
            return None;
        }

        let result = match &mut self.generator {
            Generator::Recursive(moves) => moves.next_move(&mut self.board),
            Generator::Iterative(moves) => moves.next_move(&mut self.board),
        }?;

        match result {
            Ok(mv) => {
                self.emitted += 1;
                trace!(strategy = %self.strategy, seq = self.emitted, %mv, "applied move");
                Some(mv)
            }
            // Both generators only ever take from a non-empty peg.
            Err(err) => panic!("{} solver broke the board: {err}", self.strategy),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.halted {
            0
        } else {
            self.total - self.emitted
        };
        let upper = usize::try_from(remaining).ok();
        if self.stop.is_some() {
            (0, upper)
        } else {
            (upper.unwrap_or(usize::MAX), upper)
        }
    }
}

impl FusedIterator for Solution {}
