//! Concurrent runs never share a board.
//!
//! Running both strategies at once against one shared board gives
//! interleaved, unreproducible results. These tests pin down the isolated
//! behaviour instead: every run owns its state, so concurrent runs end up
//! exactly where a lone run would.

use hanoi::config::{ExecutionMode, RunConfigBuilder};
use hanoi::core::{Move, Peg, PegState};
use hanoi::run::{compare, execute_logged, RunContext, RunOutcome, RuntimeLog};
use hanoi::solver::{solve, StopSignal, Strategy};
use std::sync::mpsc;
use std::thread;

fn all_moves(strategy: Strategy, n: u32) -> Vec<Move> {
    solve(strategy, n).unwrap().collect()
}

#[test]
fn concurrent_solutions_match_a_lone_run() {
    let lone = all_moves(Strategy::Recursive, 10);

    let handles: Vec<_> = Strategy::ALL
        .into_iter()
        .chain([Strategy::Recursive])
        .map(|strategy| thread::spawn(move || all_moves(strategy, 10)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), lone);
    }
}

#[test]
fn isolated_comparison_solves_every_board() {
    let config = RunConfigBuilder::new()
        .disks(12)
        .all_strategies()
        .mode(ExecutionMode::Isolated)
        .build()
        .unwrap();

    let comparison = compare(&config, &RunContext::new()).unwrap();

    assert!(comparison.all_solved());
    assert!(comparison.sequences_match());
    for record in &comparison.records {
        assert_eq!(record.log.len(), 4095);
        assert_eq!(record.report.final_board.disks(Peg::C).len(), 12);
        assert!(record.report.final_board.check_invariants().is_ok());
    }

    let mut runtimes = RuntimeLog::new();
    runtimes.record_comparison(&comparison);
    assert_eq!(runtimes.len(), 2);
}

#[test]
fn cancelling_from_another_thread_stops_the_run() {
    let ctx = RunContext::new();
    let canceller = ctx.clone();
    let (started_tx, started_rx) = mpsc::channel();
    let (resume_tx, resume_rx) = mpsc::channel::<()>();

    let worker = thread::spawn(move || {
        let mut first = true;
        let mut pause_after_first = |_: &Move, _: &PegState| {
            if first {
                first = false;
                started_tx.send(()).unwrap();
                resume_rx.recv().unwrap();
            }
        };
        execute_logged(Strategy::Iterative, 16, &ctx, &mut pause_after_first).unwrap()
    });

    started_rx.recv().unwrap();
    canceller.cancel();
    resume_tx.send(()).unwrap();

    let record = worker.join().unwrap();
    assert_eq!(record.report.outcome, RunOutcome::Cancelled { after: 1 });
    assert_eq!(record.log.len(), 1);
}

#[test]
fn separate_contexts_cancel_independently() {
    let stopped = RunContext::with_stop(StopSignal::new());
    let running = RunContext::new();
    stopped.cancel();

    let a = execute_logged(Strategy::Recursive, 4, &stopped, &mut ()).unwrap();
    let b = execute_logged(Strategy::Recursive, 4, &running, &mut ()).unwrap();

    assert_eq!(a.report.outcome, RunOutcome::Cancelled { after: 0 });
    assert_eq!(b.report.outcome, RunOutcome::Solved);
}

#[tokio::test]
async fn blocking_tasks_run_isolated_solutions() {
    let recursive = tokio::task::spawn_blocking(|| {
        let mut solution = solve(Strategy::Recursive, 9).unwrap();
        let moves: Vec<Move> = solution.by_ref().collect();
        (moves, solution.into_board())
    });
    let iterative = tokio::task::spawn_blocking(|| {
        let mut solution = solve(Strategy::Iterative, 9).unwrap();
        let moves: Vec<Move> = solution.by_ref().collect();
        (moves, solution.into_board())
    });

    let (recursive, iterative) = tokio::join!(recursive, iterative);
    let (recursive_moves, recursive_board) = recursive.unwrap();
    let (iterative_moves, iterative_board) = iterative.unwrap();

    assert_eq!(recursive_moves.len(), 511);
    assert_eq!(recursive_moves, iterative_moves);
    assert!(recursive_board.is_solved());
    assert_eq!(recursive_board, iterative_board);
}
