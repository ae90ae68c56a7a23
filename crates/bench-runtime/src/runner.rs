//! # Runner
//!
//! Builds the ledger, runs the workers on scoped OS threads, joins them and
//! checks conservation.
//!
//! ```text
//! validate -> build ledger -> spawn W workers -> join -> sum balances -> report
//! ```

use std::panic;
use std::thread;
use std::time::Instant;

use chrono::Utc;
use sb_02_spin_mutex::{Blocking, Exponential, SpinLoop, WaitKind, WaitStrategy};
use sb_03_account_ledger::{Ledger, LedgerApi, LedgerError};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{BenchConfig, ConfigError};
use crate::report::RunReport;
use crate::worker::{run_worker, WorkerStats};

/// Errors that stop a run before it produces a report.
#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid benchmark configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Ledger could not be built.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Worker thread could not be spawned.
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Run one benchmark with the wait strategy named in `config`.
///
/// A conservation failure is reported in [`RunReport::conserved`], not as
/// an error. A panicking worker propagates its panic.
pub fn run(config: &BenchConfig) -> Result<RunReport, RunError> {
    config.validate()?;
    match config.wait {
        WaitKind::Spin => run_with::<SpinLoop>(config),
        WaitKind::Exponential => run_with::<Exponential>(config),
        WaitKind::Blocking => run_with::<Blocking>(config),
    }
}

/// Run one benchmark with wait strategy `W`.
pub fn run_with<W: WaitStrategy>(config: &BenchConfig) -> Result<RunReport, RunError> {
    config.validate()?;
    let ledger = Ledger::<W>::with_config(&config.ledger_config())?;

    info!(
        threads = config.threads,
        keyspace = config.keyspace,
        initial_balance = config.initial_balance,
        duration_secs = config.duration.as_secs_f64(),
        mode = %config.mode,
        wait = %config.wait,
        "[bench] Starting run"
    );

    let started_at = Utc::now();
    let started = Instant::now();
    let stats = drive(&ledger, config, started + config.duration)?;
    let elapsed = started.elapsed();

    let expected = ledger.expected_total();
    let actual = ledger.sum_all_balances();
    if expected != actual {
        warn!(expected, actual, "[bench] Conservation check failed");
    }

    let report = RunReport::new(started_at, config.clone(), &stats, elapsed, expected, actual);
    info!(
        total_successes = report.total_successes,
        total_aborts = report.total_aborts,
        throughput = report.throughput,
        conserved = report.conserved(),
        "[bench] Run finished"
    );
    Ok(report)
}

/// Spawn `config.threads` workers against `ledger` and join them all.
pub fn drive<L: LedgerApi + ?Sized>(
    ledger: &L,
    config: &BenchConfig,
    deadline: Instant,
) -> Result<Vec<WorkerStats>, RunError> {
    thread::scope(|s| -> Result<Vec<WorkerStats>, RunError> {
        let mut handles = Vec::with_capacity(config.threads);
        for thread_id in 0..config.threads {
            let handle = thread::Builder::new()
                .name(format!("sb-worker-{thread_id}"))
                .spawn_scoped(s, move || run_worker(ledger, thread_id, config, deadline))?;
            handles.push(handle);
        }

        let mut stats = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.join() {
                Ok(result) => stats.push(result?),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        Ok(stats)
    })
}
