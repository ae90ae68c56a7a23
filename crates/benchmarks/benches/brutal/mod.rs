//! # Brutal Modular Benchmarks
//!
//! Each crate gets its own module; every module exposes `register_benchmarks`.
//!
//! ## Structure
//!
//! - `sb_01_linear_cells` - take/give/peek on cells and sequences
//! - `sb_02_spin_mutex` - uncontended and contended acquire/release per wait strategy
//! - `sb_03_account_ledger` - transfer cost, contended transfer throughput, conservation sum

pub mod sb_01_linear_cells;
pub mod sb_02_spin_mutex;
