//! # Spinbank Test Suite
//!
//! Unified test crate for behaviour that spans crates.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Cross-crate flows
//! │   ├── scenarios.rs      # fixed transfer scenarios, checked mode
//! │   ├── concurrency.rs    # conservation, mutual exclusion, deadlock freedom
//! │   └── driver.rs         # bench-runtime end to end
//! │
//! └── properties/       # proptest models
//!     ├── linear_seq.rs     # LinearSeq against a Vec<Option<_>> model
//!     └── ledger.rs         # sequential ledger against a Vec<i64> model
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sb-tests
//!
//! # By category
//! cargo test -p sb-tests integration::
//! cargo test -p sb-tests properties::
//!
//! # The full-size deadlock run (10 threads, 1M accounts, 3 s)
//! cargo test -p sb-tests --release -- --ignored
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
pub mod properties;
