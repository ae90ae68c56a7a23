//! # Ports Module
//!
//! Inbound API of the ledger.

pub mod inbound;

pub use inbound::LedgerApi;
