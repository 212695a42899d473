//! Compare Strategies
//!
//! This example runs both strategies side by side and keeps a runtime
//! history across runs.
//!
//! Key concepts:
//! - Isolated runs, each on its own board
//! - One stop button shared by every run
//! - Move logs and runtime history
//!
//! Run with: cargo run --example compare_strategies

use hanoi::config::{ExecutionMode, RunConfigBuilder};
use hanoi::core::{Move, PegState};
use hanoi::run::{compare, compare_with, RunContext, RuntimeLog};
use hanoi::solver::StopSignal;

fn main() {
    println!("=== Compare Strategies ===\n");

    let config = RunConfigBuilder::new()
        .disks(3)
        .all_strategies()
        .mode(ExecutionMode::Isolated)
        .build()
        .unwrap();

    // One stop signal for every run started from this context
    let stop = StopSignal::new();
    let ctx = RunContext::with_stop(stop.clone());
    let mut runtimes = RuntimeLog::new();

    let comparison = compare(&config, &ctx).unwrap();
    for record in &comparison.records {
        println!("{} strategy:", record.report.strategy);
        for line in record.log.lines() {
            println!("  {line}");
        }
        println!("  {}", record.report.movements_label());
        println!("  {}\n", record.report.runtime_label());
    }
    println!("Same sequence: {}\n", comparison.sequences_match());
    runtimes.record_comparison(&comparison);

    // Press stop after the fifth move of whichever run gets there first
    let bigger = RunConfigBuilder::new()
        .disks(10)
        .all_strategies()
        .build()
        .unwrap();
    let stopped = compare_with(&bigger, &ctx, |_| {
        let stop = stop.clone();
        let mut seen = 0;
        move |_: &Move, _: &PegState| {
            seen += 1;
            if seen == 5 {
                stop.cancel();
            }
        }
    })
    .unwrap();
    for report in stopped.reports() {
        println!("{}: {:?}", report.strategy, report.outcome);
        println!("  {}", report.final_board);
    }
    runtimes.record_comparison(&stopped);

    println!("\nPrevious runtimes:");
    for line in runtimes.lines() {
        println!("  {line}");
    }

    runtimes.reset();
    println!("\nAfter reset: {} runtimes", runtimes.len());

    println!("\n=== Example Complete ===");
}
