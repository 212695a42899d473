//! Side-by-side runs of several strategies.
//!
//! Each selected strategy gets its own board and move log. In
//! [`ExecutionMode::Isolated`] the runs happen on separate scoped threads;
//! in [`ExecutionMode::Sequential`] they happen one after another. Either
//! way no mutable puzzle state is shared, so the results can be compared
//! move for move afterwards.

use super::{execute_logged, RunContext, RunRecord, RunReport};
use crate::config::{ConfigError, ExecutionMode, RunConfig};
use crate::core::MoveObserver;
use crate::solver::Strategy;
use serde::{Deserialize, Serialize};
use std::thread;
use tracing::debug;

/// Results of every strategy selected in a [`RunConfig`], in selection order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub disks: u32,
    pub mode: ExecutionMode,
    pub records: Vec<RunRecord>,
}

impl Comparison {
    /// Record of the run that used `strategy`, if it was selected.
    pub fn get(&self, strategy: Strategy) -> Option<&RunRecord> {
        self.records
            .iter()
            .find(|record| record.report.strategy == strategy)
    }

    pub fn reports(&self) -> impl Iterator<Item = &RunReport> + '_ {
        self.records.iter().map(|record| &record.report)
    }

    /// Check whether every run produced the same move sequence.
    pub fn sequences_match(&self) -> bool {
        let mut records = self.records.iter();
        let Some(first) = records.next() else {
            return true;
        };
        records.all(|record| record.log.moves().eq(first.log.moves()))
    }

    /// Check whether every run reached the solved state.
    pub fn all_solved(&self) -> bool {
        self.reports().all(RunReport::is_solved)
    }

    /// Report of the quickest run.
    pub fn fastest(&self) -> Option<&RunReport> {
        self.reports().min_by_key(|report| report.elapsed())
    }
}

/// Run every strategy selected in `config` without observers.
pub fn compare(config: &RunConfig, ctx: &RunContext) -> Result<Comparison, ConfigError> {
    compare_with(config, ctx, |_| ())
}

/// Run every strategy selected in `config`, reporting each run's moves to
/// its own observer built by `make_observer`.
///
/// Observers are created on the thread that drives their run, so they need
/// not be `Send`.
pub fn compare_with<F, O>(
    config: &RunConfig,
    ctx: &RunContext,
    make_observer: F,
) -> Result<Comparison, ConfigError>
where
    F: Fn(Strategy) -> O + Sync,
    O: MoveObserver,
{
    config.validate()?;
    let n = config.disks.get();
    debug!(disks = n, mode = ?config.mode, strategies = ?config.strategies, "starting comparison");

    let records = match config.mode {
        ExecutionMode::Sequential => config
            .strategies
            .iter()
            .map(|&strategy| execute_logged(strategy, n, ctx, &mut make_observer(strategy)))
            .collect::<Result<Vec<_>, _>>()?,
        ExecutionMode::Isolated => {
            let make_observer = &make_observer;
            thread::scope(|scope| {
                let handles: Vec<_> = config
                    .strategies
                    .iter()
                    .map(|&strategy| {
                        scope.spawn(move || {
                            execute_logged(strategy, n, ctx, &mut make_observer(strategy))
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|handle| match handle.join() {
                        Ok(result) => result,
                        Err(panic) => std::panic::resume_unwind(panic),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })?
        }
    };

    Ok(Comparison {
        disks: n,
        mode: config.mode,
        records,
    })
}
