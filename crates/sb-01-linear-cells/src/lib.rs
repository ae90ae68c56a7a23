//! # SB-01 Linear Cells
//!
//! Ownership primitives the rest of the ledger is built on.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Leaf crate, no internal dependencies
//!
//! ## Purpose
//!
//! Model "exactly one owner at a time" for a value:
//! - [`LinearCell`]: a single slot that is either empty or occupied, with
//!   explicit move-in (`give`) and move-out (`take`)
//! - [`LinearSeq`]: a fixed-length array of independent slots supporting
//!   borrow (`peek`), move-out (`take`), move-in (`give`) and `swap`
//!
//! Misuse (double-take, double-give, out-of-range index, peek of an empty
//! slot) is a programming error and panics through [`contract_violation`].
//!
//! ## Module Structure
//!
//! ```text
//! sb-01-linear-cells/
//! ├── cell.rs   # LinearCell: one-slot ownership cell
//! └── seq.rs    # LinearSeq: ownership-tracked array
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod seq;

pub use cell::LinearCell;
pub use seq::LinearSeq;

use std::fmt::Display;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Abort the current thread with a contract-violation panic.
///
/// Used by every crate in the workspace for caller bugs that the type system
/// cannot rule out on its own. These are never recovered from.
#[cold]
#[track_caller]
pub fn contract_violation(detail: impl Display) -> ! {
    panic!("contract violation: {detail}")
}
