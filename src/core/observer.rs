//! Hooks for reporting moves to a display layer.
//!
//! Observers are told about a move after it has been applied to the board,
//! so the board they receive already reflects it.

use super::board::PegState;
use super::history::MoveLog;
use super::moves::Move;

/// Receiver of applied moves.
///
/// Implemented for `FnMut(&Move, &PegState)` closures, for [`MoveLog`]
/// and for `()` when nothing needs to watch.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, MoveObserver, Peg, PegState};
///
/// let mut seen = Vec::new();
/// let mut observer = |mv: &Move, _board: &PegState| seen.push(*mv);
///
/// let mut board = PegState::new(1);
/// let mv = board.move_disk(Peg::A, Peg::C).unwrap();
/// observer.on_move(&mv, &board);
///
/// assert_eq!(seen, vec![mv]);
/// ```
pub trait MoveObserver {
    fn on_move(&mut self, mv: &Move, board: &PegState);
}

impl<F> MoveObserver for F
where
    F: FnMut(&Move, &PegState),
{
    fn on_move(&mut self, mv: &Move, board: &PegState) {
        self(mv, board)
    }
}

impl MoveObserver for MoveLog {
    fn on_move(&mut self, mv: &Move, _board: &PegState) {
        self.record(*mv);
    }
}

impl MoveObserver for () {
    fn on_move(&mut self, _mv: &Move, _board: &PegState) {}
}
