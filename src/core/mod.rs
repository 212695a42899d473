//! Core puzzle types.
//!
//! This module contains the board model shared by every solver:
//! - Peg identifiers and disk sizes
//! - The `PegState` board with its stacking invariants
//! - Move records and the per-run move log
//! - The `MoveObserver` hook used to report moves to a display layer
//!
//! Nothing here knows about strategies, threads or timing.

mod board;
mod error;
mod history;
mod moves;
mod observer;
mod peg;

pub use board::PegState;
pub use error::BoardError;
pub use history::{LoggedMove, MoveLog};
pub use moves::Move;
pub use observer::MoveObserver;
pub use peg::{Disk, Peg};
