//! # Run Report
//!
//! Per-worker and aggregate results of one run, serialisable to JSON.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BenchConfig;
use crate::worker::{per_second, WorkerStats};

/// One worker's line in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerReport {
    /// Worker index
    pub thread_id: usize,
    /// Successful transfers
    pub successes: u64,
    /// Rejected transfers
    pub aborts: u64,
    /// Seconds the worker ran
    pub elapsed_secs: f64,
    /// Successes per second
    pub throughput: f64,
    /// Aborts per second
    pub abort_rate: f64,
}

impl From<&WorkerStats> for WorkerReport {
    fn from(stats: &WorkerStats) -> Self {
        Self {
            thread_id: stats.thread_id,
            successes: stats.successes,
            aborts: stats.aborts,
            elapsed_secs: stats.elapsed.as_secs_f64(),
            throughput: stats.throughput(),
            abort_rate: stats.abort_rate(),
        }
    }
}

/// Result of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run identifier
    pub run_id: Uuid,
    /// Wall-clock start
    pub started_at: DateTime<Utc>,
    /// Configuration the run used
    pub config: BenchConfig,
    /// Per-worker results, ordered by thread id
    pub workers: Vec<WorkerReport>,
    /// Sum of successes across workers
    pub total_successes: u64,
    /// Sum of aborts across workers
    pub total_aborts: u64,
    /// Seconds from spawning the first worker to joining the last
    pub elapsed_secs: f64,
    /// Aggregate successes per second
    pub throughput: f64,
    /// `keyspace * initial_balance`
    pub expected_total: i64,
    /// Sum of balances after all workers joined
    pub actual_total: i64,
}

impl RunReport {
    /// Assemble a report from joined worker stats and the final ledger sum.
    pub fn new(
        started_at: DateTime<Utc>,
        config: BenchConfig,
        stats: &[WorkerStats],
        elapsed: std::time::Duration,
        expected_total: i64,
        actual_total: i64,
    ) -> Self {
        let mut workers: Vec<WorkerReport> = stats.iter().map(WorkerReport::from).collect();
        workers.sort_by_key(|w| w.thread_id);

        let total_successes = stats.iter().map(|s| s.successes).sum();
        let total_aborts = stats.iter().map(|s| s.aborts).sum();

        Self {
            run_id: Uuid::new_v4(),
            started_at,
            config,
            workers,
            total_successes,
            total_aborts,
            elapsed_secs: elapsed.as_secs_f64(),
            throughput: per_second(total_successes, elapsed),
            expected_total,
            actual_total,
        }
    }

    /// Whether the ledger total matched after the run.
    pub fn conserved(&self) -> bool {
        self.expected_total == self.actual_total
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "run {} | {} threads | {} accounts | {:?} | mode {} | wait {}",
            self.run_id,
            self.config.threads,
            self.config.keyspace,
            self.config.duration,
            self.config.mode,
            self.config.wait,
        )?;
        for w in &self.workers {
            writeln!(
                f,
                "  thread {:>3}: {:>12.0} tx/s  {:>10.0} aborts/s",
                w.thread_id, w.throughput, w.abort_rate
            )?;
        }
        writeln!(
            f,
            "  total: {} ok, {} aborted, {:.0} tx/s",
            self.total_successes, self.total_aborts, self.throughput
        )?;
        write!(
            f,
            "  checksum: expected {} found {} ({})",
            self.expected_total,
            self.actual_total,
            if self.conserved() { "ok" } else { "VIOLATED" }
        )
    }
}
