//! # Worker Loop
//!
//! Issues transfers until the deadline. The deadline is checked once per
//! iteration before the transfer, so an in-flight transfer always completes.
//! Every pair is validated as a [`TransferRequest`] against the ledger's
//! size, so a keyspace larger than the ledger is an error, not a panic.
//!
//! [`TransferRequest`]: sb_03_account_ledger::TransferRequest

use std::time::{Duration, Instant};

use sb_03_account_ledger::LedgerApi;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BenchConfig;
use crate::runner::RunError;
use crate::workload::PairGenerator;

/// What one worker did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkerStats {
    /// Worker index, `0..threads`.
    pub thread_id: usize,
    /// Transfers that moved funds.
    pub successes: u64,
    /// Transfers rejected by the funds check.
    pub aborts: u64,
    /// Time from first to last iteration.
    pub elapsed: Duration,
}

impl WorkerStats {
    /// Successful transfers per second.
    pub fn throughput(&self) -> f64 {
        per_second(self.successes, self.elapsed)
    }

    /// Rejected transfers per second.
    pub fn abort_rate(&self) -> f64 {
        per_second(self.aborts, self.elapsed)
    }
}

pub(crate) fn per_second(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / secs
    } else {
        0.0
    }
}

/// Run one worker against `ledger` until `deadline`.
pub fn run_worker<L: LedgerApi + ?Sized>(
    ledger: &L,
    thread_id: usize,
    config: &BenchConfig,
    deadline: Instant,
) -> Result<WorkerStats, RunError> {
    let _span = bank_telemetry::component_span!("worker", thread_id).entered();

    let mut pairs = PairGenerator::new(config.seed, thread_id, config.keyspace)?;
    let mut successes = 0u64;
    let mut aborts = 0u64;

    let started = Instant::now();
    while Instant::now() < deadline {
        let (p, q) = pairs.next_pair();
        if ledger.try_transfer(p, q, config.amount)? {
            successes += 1;
        } else {
            aborts += 1;
        }
    }

    let stats = WorkerStats {
        thread_id,
        successes,
        aborts,
        elapsed: started.elapsed(),
    };
    debug!(
        thread_id,
        successes,
        aborts,
        throughput = stats.throughput(),
        "[bench] Worker finished"
    );
    Ok(stats)
}
