//! # Bench Runtime
//!
//! Workload driver for the account ledger.
//!
//! ## Run Sequence
//!
//! 1. Load configuration (defaults, `SB_*` environment, CLI flags)
//! 2. Validate it
//! 3. Build a ledger of `keyspace` accounts with the chosen wait strategy
//! 4. Spawn `threads` workers; each draws account pairs from its own seeded
//!    generator and transfers `amount` until the deadline
//! 5. Join, sum every balance, compare with `keyspace * initial_balance`
//! 6. Report per-worker and aggregate throughput
//!
//! ## Modular Structure
//!
//! - `config` - `BenchConfig`, environment loading, validation
//! - `cli` - command-line overrides
//! - `workload` - per-worker account pair generator
//! - `worker` - the timed transfer loop
//! - `runner` - thread orchestration and the conservation check
//! - `report` - `RunReport`, text and JSON output

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod report;
pub mod runner;
pub mod worker;
pub mod workload;

pub use cli::Args;
pub use config::{BenchConfig, ConfigError, MIN_KEYSPACE};
pub use report::{RunReport, WorkerReport};
pub use runner::{drive, run, run_with, RunError};
pub use worker::{run_worker, WorkerStats};
pub use workload::PairGenerator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
