//! # SB-03 Account Ledger
//!
//! Sharded, lock-per-account bank ledger.
//!
//! **Subsystem ID:** 03
//! **Depends on:** sb-01-linear-cells, sb-02-spin-mutex
//! **Architecture:** Hexagonal (domain + algorithms + ports)
//!
//! ## Purpose
//!
//! Hold `N` accounts, each behind its own [`Mutex`](sb_02_spin_mutex::Mutex),
//! and move funds between pairs of them concurrently while preserving
//!
//! ```text
//! sum(balance[i] for i in 0..N) == N * starting_balance
//! ```
//!
//! at every quiescent point.
//!
//! ## Transfer Protocol
//!
//! 1. `peek` both account cells in the ledger array
//! 2. acquire them in ascending account-id order (the global lock order)
//! 3. settle: checked mode may reject, unchecked mode always succeeds
//! 4. release source, then destination
//!
//! ## Module Structure
//!
//! ```text
//! sb-03-account-ledger/
//! ├── domain/          # AccountEntry, TransferMode, TransferRequest, errors, config, invariants
//! ├── algorithms/      # Settlement (pure balance arithmetic)
//! ├── ports/           # LedgerApi trait
//! ├── ledger.rs        # Ledger: construction, transfer, probe, conservation
//! └── api.rs           # Free-function boundary (build_ledger, transfer, ...)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod api;
pub mod domain;
pub mod ledger;
pub mod ports;

// Re-exports
pub use algorithms::{settle, Settlement};
pub use api::{build_ledger, probe_balance, sum_all_balances, transfer};
pub use domain::{
    expected_total, invariant_conservation, invariant_settlement_conserves, lock_order,
    AccountEntry, AccountId, LedgerConfig, LedgerError, TransferMode, TransferRequest,
    MIN_ACCOUNTS,
};
pub use ledger::{Ledger, PARALLEL_SUM_THRESHOLD};
pub use ports::LedgerApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
