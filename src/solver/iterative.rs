//! Iterative strategy.
//!
//! Moves cycle through three peg pairs. Within a pair the direction is
//! forced: a disk always goes onto an empty peg or onto a larger disk. For
//! an odd number of disks the cycle is (source, target), (source, spare),
//! (spare, target); for an even number target and spare trade places,
//! which keeps the sequence identical to the recursive one.

use crate::core::{BoardError, Move, Peg, PegState};

#[derive(Clone, Debug)]
pub(crate) struct IterativeMoves {
    next: u64,
    total: u64,
    /// Peg pairs indexed by `move number % 3`.
    cycle: [(Peg, Peg); 3],
}

impl IterativeMoves {
    pub(crate) fn new(n: u32, source: Peg, target: Peg, spare: Peg) -> Self {
        let (target, spare) = if n % 2 == 0 {
            (spare, target)
        } else {
            (target, spare)
        };
        Self {
            next: 1,
            total: (1u64 << n) - 1,
            cycle: [(spare, target), (source, target), (source, spare)],
        }
    }

    /// Apply move number `next` to `board`, or `None` after the last one.
    pub(crate) fn next_move(&mut self, board: &mut PegState) -> Option<Result<Move, BoardError>> {
        if self.next > self.total {
            return None;
        }
        let (p, q) = self.cycle[(self.next % 3) as usize];
        self.next += 1;

        let (from, to) = direction(board, p, q);
        Some(board.move_disk(from, to))
    }
}

/// Pick donor and receiver for a move between `p` and `q`.
fn direction(board: &PegState, p: Peg, q: Peg) -> (Peg, Peg) {
    match (board.top(p), board.top(q)) {
        (None, _) => (q, p),
        (Some(_), None) => (p, q),
        (Some(top_p), Some(top_q)) if top_p < top_q => (p, q),
        _ => (q, p),
    }
}
