//! Hanoi: a Tower of Hanoi solving core
//!
//! The crate models the three-peg board, produces the optimal move sequence
//! with either of two equivalent strategies, and runs those strategies in
//! isolation so their timings and move logs can be compared. Rendering is
//! left to the caller, who watches moves through a [`MoveObserver`].
//!
//! # Core Concepts
//!
//! - **Board**: [`PegState`] keeps every peg sorted, largest disk at the bottom
//! - **Solutions**: [`solve`] lazily yields moves, applying each to its own board
//! - **Runs**: [`run::execute`] times one strategy and reports every move
//! - **Cancellation**: a [`StopSignal`] is checked before each move
//!
//! # Example
//!
//! ```rust
//! use hanoi::{solve, Peg, Strategy};
//!
//! let mut recursive = solve(Strategy::Recursive, 3).unwrap();
//! let iterative = solve(Strategy::Iterative, 3).unwrap();
//!
//! assert!(recursive.by_ref().eq(iterative));
//! assert_eq!(recursive.board().disks(Peg::C), &[3, 2, 1]);
//! ```

pub mod config;
pub mod core;
pub mod run;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{BoardError, Move, MoveLog, MoveObserver, Peg, PegState};
pub use config::{ConfigError, RunConfig, RunConfigBuilder};
pub use run::{RunContext, RunReport};
pub use solver::{initialize, solve, Solution, StopSignal, Strategy};
