//! Runtime history across runs.

use super::{Comparison, RunOutcome, RunReport};
use crate::solver::Strategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One line of the runtime history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntry {
    /// 1-based run number, restarting after a reset
    pub run: usize,
    pub strategy: Strategy,
    pub disks: u32,
    pub elapsed: Duration,
    pub outcome: RunOutcome,
}

/// Runtimes of previous runs, oldest first.
///
/// # Example
///
/// ```rust
/// use hanoi::run::{execute, RunContext, RuntimeLog};
/// use hanoi::solver::Strategy;
///
/// let mut runtimes = RuntimeLog::new();
/// let report = execute(Strategy::Recursive, 3, &RunContext::new(), &mut ()).unwrap();
/// runtimes.record(&report);
///
/// assert_eq!(runtimes.len(), 1);
/// assert!(runtimes.lines().next().unwrap().starts_with("Run 1: "));
///
/// runtimes.reset();
/// assert!(runtimes.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeLog {
    entries: Vec<RuntimeEntry>,
}

impl RuntimeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &RunReport) {
        self.entries.push(RuntimeEntry {
            run: self.entries.len() + 1,
            strategy: report.strategy,
            disks: report.disks,
            elapsed: report.elapsed(),
            outcome: report.outcome,
        });
    }

    /// Record every run of a comparison in selection order.
    pub fn record_comparison(&mut self, comparison: &Comparison) {
        for report in comparison.reports() {
            self.record(report);
        }
    }

    pub fn entries(&self) -> &[RuntimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `Run 1: 0.00 seconds` per entry.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| {
            let seconds = entry.elapsed.as_secs_f64();
            format!("Run {}: {seconds:.2} seconds", entry.run)
        })
    }

    /// Total time across all recorded runs.
    pub fn total(&self) -> Duration {
        self.entries.iter().map(|entry| entry.elapsed).sum()
    }

    /// Forget every recorded runtime.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
