//! # Bench Runtime
//!
//! Runs the ledger benchmark once and prints the report.
//!
//! ```text
//! bench-runtime --threads 10 --keyspace 1000000 --duration-secs 3
//! SB_WAIT=blocking bench-runtime --json
//! ```

use anyhow::{bail, Context, Result};
use bank_telemetry::{init_telemetry, TelemetryConfig};
use clap::Parser;
use tracing::{error, info};

use bench_runtime::{run, Args, BenchConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let _telemetry = init_telemetry(TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let config = BenchConfig::from_env().context("Invalid SB_* environment")?;
    let config = args.apply(config).context("Invalid command-line flag")?;

    info!("===========================================");
    info!("  Spinbank Bench Runtime v{}", bench_runtime::VERSION);
    info!("===========================================");

    let report = run(&config).context("Benchmark run failed")?;

    for worker in &report.workers {
        info!(
            thread_id = worker.thread_id,
            successes = worker.successes,
            aborts = worker.aborts,
            "Thread {}: {:.0} tx/s, {:.0} aborts/s",
            worker.thread_id,
            worker.throughput,
            worker.abort_rate
        );
    }

    if args.json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        println!("{report}");
    }

    if !report.conserved() {
        error!(
            expected = report.expected_total,
            actual = report.actual_total,
            "Conservation check failed"
        );
        bail!(
            "Conservation violated: expected total {}, found {}",
            report.expected_total,
            report.actual_total
        );
    }

    info!(total = report.actual_total, "Conservation check passed");
    Ok(())
}
