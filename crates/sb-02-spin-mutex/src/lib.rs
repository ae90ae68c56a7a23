//! # SB-02 Spin Mutex
//!
//! Spinlock-guarded ownership cell.
//!
//! **Subsystem ID:** 02
//! **Depends on:** sb-01-linear-cells
//!
//! ## Purpose
//!
//! Pair one atomic flag with one [`LinearCell`](sb_01_linear_cells::LinearCell)
//! so that "won the flag" and "owns the cell's contents" are the same thing:
//!
//! ```text
//! flag == false  <=>  slot is Occupied
//! ```
//!
//! [`Mutex::acquire`] hands the protected value out by move together with a
//! [`MutexHandle`]; [`Mutex::release`] consumes both. A released value can
//! no longer be touched, and release-without-acquire cannot be written.
//!
//! ## Wait Strategies
//!
//! | Strategy | On failed CAS |
//! |----------|---------------|
//! | [`SpinLoop`] | `spin_loop` hint (default, matches the benchmark) |
//! | [`Exponential`] | exponentially growing spin, then `yield_now` |
//! | [`Blocking`] | bounded spin, then park on an OS-level condvar |
//!
//! ## Features
//!
//! - `instrument`: per-mutex holder counting, see `Mutex::peak_holders`

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "instrument")]
mod instrument;
pub mod mutex;
pub mod wait;

pub use mutex::{Mutex, MutexHandle};
pub use wait::{
    Blocking, Exponential, ParseWaitKindError, SpinLoop, WaitKind, WaitStrategy,
    SPINS_BEFORE_PARK,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
