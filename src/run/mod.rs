//! Timed, observed runs of a single strategy.
//!
//! A run owns its board and move log and is driven to completion (or to
//! cancellation) on the calling thread. Everything a run may share with
//! others lives in its [`RunContext`], which holds nothing but the stop
//! signal.
//!
//! # Example
//!
//! ```rust
//! use hanoi::core::MoveLog;
//! use hanoi::run::{execute, RunContext, RunOutcome};
//! use hanoi::solver::Strategy;
//!
//! let ctx = RunContext::new();
//! let mut log = MoveLog::new();
//!
//! let report = execute(Strategy::Recursive, 3, &ctx, &mut log).unwrap();
//!
//! assert_eq!(report.outcome, RunOutcome::Solved);
//! assert_eq!(report.moves, 7);
//! assert_eq!(log.len(), 7);
//! ```

mod compare;
mod runtimes;

pub use compare::{compare, compare_with, Comparison};
pub use runtimes::{RuntimeEntry, RuntimeLog};

use crate::config::{ConfigError, DiskCount};
use crate::core::{Move, MoveLog, MoveObserver, PegState};
use crate::solver::{Solution, StopSignal, Strategy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Per-run context owned by the caller.
///
/// Contexts replace process-wide flags: a run only ever sees the context it
/// was given. Clone the stop signal into several contexts to cancel them
/// together.
#[derive(Clone, Debug, Default)]
pub struct RunContext {
    stop: StopSignal,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop(stop: StopSignal) -> Self {
        Self { stop }
    }

    pub fn stop_signal(&self) -> &StopSignal {
        &self.stop
    }

    /// Ask every run using this context to stop before its next move.
    pub fn cancel(&self) {
        self.stop.cancel();
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunOutcome {
    /// Every disk reached the target peg
    Solved,
    /// The stop signal was set after `after` moves
    Cancelled { after: u64 },
}

/// Summary of one finished run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run identifier
    pub id: Uuid,
    pub strategy: Strategy,
    pub disks: u32,
    /// Moves applied before the run ended
    pub moves: u64,
    pub outcome: RunOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub final_board: PegState,
}

impl RunReport {
    /// Wall-clock time between start and finish.
    pub fn elapsed(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_solved(&self) -> bool {
        self.outcome == RunOutcome::Solved
    }

    /// `Runtime: 0.01 seconds`
    pub fn runtime_label(&self) -> String {
        format!("Runtime: {:.2} seconds", self.elapsed().as_secs_f64())
    }

    /// `Total Movements: 7`
    pub fn movements_label(&self) -> String {
        format!("Total Movements: {}", self.moves)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A report together with the full move log of its run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub report: RunReport,
    pub log: MoveLog,
}

/// Run `strategy` on a fresh board of `n` disks, reporting every applied
/// move to `observer`.
///
/// The disk count is validated before the board is created.
pub fn execute<O>(
    strategy: Strategy,
    n: u32,
    ctx: &RunContext,
    observer: &mut O,
) -> Result<RunReport, ConfigError>
where
    O: MoveObserver + ?Sized,
{
    let disks = DiskCount::new(n)?;
    let id = Uuid::new_v4();
    let started_at = Utc::now();
    info!(%id, %strategy, disks = n, "run started");

    let mut solution = Solution::new(strategy, disks).with_stop(ctx.stop_signal().clone());
    let moves = solution.drive(observer);
    let finished_at = Utc::now();

    let outcome = if solution.was_stopped() {
        warn!(%id, %strategy, after = moves, "run cancelled");
        RunOutcome::Cancelled { after: moves }
    } else {
        RunOutcome::Solved
    };

    let report = RunReport {
        id,
        strategy,
        disks: n,
        moves,
        outcome,
        started_at,
        finished_at,
        final_board: solution.into_board(),
    };
    info!(%id, %strategy, moves, elapsed = ?report.elapsed(), "run finished");
    Ok(report)
}

/// Like [`execute`], additionally keeping a timestamped log of the run.
pub fn execute_logged<O>(
    strategy: Strategy,
    n: u32,
    ctx: &RunContext,
    observer: &mut O,
) -> Result<RunRecord, ConfigError>
where
    O: MoveObserver + ?Sized,
{
    let mut log = MoveLog::new();
    let report = execute(strategy, n, ctx, &mut |mv: &Move, board: &PegState| {
        log.record(*mv);
        observer.on_move(mv, board);
    })?;
    Ok(RunRecord { report, log })
}
