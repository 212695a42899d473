//! Recursive strategy.
//!
//! To move `n` disks from `from` to `to` using `via`: move `n - 1` disks
//! to `via`, move disk `n` to `to`, then move the `n - 1` disks from `via`
//! onto it. The recursion is unrolled onto an explicit frame stack so that
//! moves can be produced one at a time, and so that depth is bounded by the
//! heap instead of the thread stack.

use crate::core::{BoardError, Disk, Move, Peg, PegState};

#[derive(Clone, Copy, Debug)]
enum Frame {
    Solve {
        n: u32,
        from: Peg,
        to: Peg,
        via: Peg,
    },
    Place { disk: Disk, from: Peg, to: Peg },
}

/// Pending work of one recursive solve.
#[derive(Clone, Debug)]
pub(crate) struct RecursiveMoves {
    frames: Vec<Frame>,
}

impl RecursiveMoves {
    pub(crate) fn new(n: u32, from: Peg, to: Peg, via: Peg) -> Self {
        let mut frames = Vec::with_capacity(2 * n as usize + 1);
        frames.push(Frame::Solve { n, from, to, via });
        Self { frames }
    }

    /// Apply the next move to `board`, or `None` once every frame is done.
    pub(crate) fn next_move(&mut self, board: &mut PegState) -> Option<Result<Move, BoardError>> {
        while let Some(frame) = self.frames.pop() {
            match frame {
                Frame::Solve { n: 0, .. } => {}
                Frame::Solve { n, from, to, via } => {
                    // Pushed in reverse so the first sub-solve runs first.
                    self.frames.push(Frame::Solve {
                        n: n - 1,
                        from: via,
                        to,
                        via: from,
                    });
                    self.frames.push(Frame::Place { disk: n, from, to });
                    self.frames.push(Frame::Solve {
                        n: n - 1,
                        from,
                        to: via,
                        via: to,
                    });
                }
                Frame::Place { disk, from, to } => {
                    let result = board.move_disk(from, to);
                    if let Ok(mv) = &result {
                        debug_assert_eq!(mv.disk, disk, "recursive frame moved the wrong disk");
                    }
                    return Some(result);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: u32) -> (Vec<Move>, PegState) {
        let mut board = PegState::new(n);
        let mut moves = RecursiveMoves::new(n, Peg::A, Peg::C, Peg::B);
        let mut out = Vec::new();
        while let Some(result) = moves.next_move(&mut board) {
            out.push(result.unwrap());
        }
        (out, board)
    }

    #[test]
    fn zero_disks_produce_no_moves() {
        let (moves, _) = run(0);
        assert!(moves.is_empty());
    }

    #[test]
    fn two_disks_follow_canonical_order() {
        let (moves, board) = run(2);
        assert_eq!(
            moves,
            vec![
                Move::new(1, Peg::A, Peg::B),
                Move::new(2, Peg::A, Peg::C),
                Move::new(1, Peg::B, Peg::C),
            ]
        );
        assert_eq!(board.disks(Peg::C), &[2, 1]);
    }

    #[test]
    fn frame_stack_stays_linear_in_disks() {
        let n = 12;
        let mut board = PegState::new(n);
        let mut moves = RecursiveMoves::new(n, Peg::A, Peg::C, Peg::B);
        let mut deepest = 0;
        while let Some(result) = moves.next_move(&mut board) {
            result.unwrap();
            deepest = deepest.max(moves.frames.len());
        }
        assert!(deepest <= 2 * n as usize + 1);
        assert!(board.is_solved());
    }
}
