//! # Algorithms Module
//!
//! Pure balance arithmetic, independent of locking.

pub mod settlement;

pub use settlement::{settle, Settlement};
