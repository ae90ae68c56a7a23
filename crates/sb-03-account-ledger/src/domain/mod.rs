//! # Domain Module
//!
//! Core domain types for the account ledger.

pub mod config;
pub mod entities;
pub mod errors;
pub mod invariants;

pub use config::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
