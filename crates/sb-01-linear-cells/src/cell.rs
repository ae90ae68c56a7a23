//! # Linear Cell
//!
//! A single slot holding at most one value.
//!
//! The cell has no concurrency control of its own. The `&self` operations
//! ([`LinearCell::take`], [`LinearCell::give`]) are `unsafe` and exist for
//! lock implementations that guarantee exclusive access at the instant they
//! run. Everything else goes through `&mut self` and is checked by the
//! borrow checker.

use std::cell::UnsafeCell;
use std::fmt;

use crate::contract_violation;

/// One-slot ownership cell: `Empty` or `Occupied(V)`.
pub struct LinearCell<V> {
    slot: UnsafeCell<Option<V>>,
}

// SAFETY: every `&self` access to `slot` is `unsafe` and requires the caller
// to guarantee exclusive access, so sharing the cell only ever moves `V`
// between threads.
unsafe impl<V: Send> Send for LinearCell<V> {}
unsafe impl<V: Send> Sync for LinearCell<V> {}

impl<V> LinearCell<V> {
    /// Create an occupied cell.
    pub const fn new(value: V) -> Self {
        Self {
            slot: UnsafeCell::new(Some(value)),
        }
    }

    /// Create an empty cell.
    pub const fn empty() -> Self {
        Self {
            slot: UnsafeCell::new(None),
        }
    }

    /// Move the value out, leaving the cell empty.
    ///
    /// Panics with "double-take" if the cell is already empty.
    ///
    /// # Safety
    ///
    /// No other thread may access this cell for the duration of the call.
    #[track_caller]
    pub unsafe fn take(&self) -> V {
        // SAFETY: exclusive access is guaranteed by the caller.
        let slot = unsafe { &mut *self.slot.get() };
        match slot.take() {
            Some(value) => value,
            None => contract_violation("double-take on an empty cell"),
        }
    }

    /// Move a value in.
    ///
    /// Panics with "double-give" if the cell is already occupied.
    ///
    /// # Safety
    ///
    /// No other thread may access this cell for the duration of the call.
    #[track_caller]
    pub unsafe fn give(&self, value: V) {
        // SAFETY: exclusive access is guaranteed by the caller.
        let slot = unsafe { &mut *self.slot.get() };
        if slot.is_some() {
            contract_violation("double-give on an occupied cell");
        }
        *slot = Some(value);
    }

    /// Safe `take` for a uniquely borrowed cell.
    #[track_caller]
    pub fn take_mut(&mut self) -> V {
        match self.slot.get_mut().take() {
            Some(value) => value,
            None => contract_violation("double-take on an empty cell"),
        }
    }

    /// Safe `give` for a uniquely borrowed cell.
    #[track_caller]
    pub fn give_mut(&mut self, value: V) {
        let slot = self.slot.get_mut();
        if slot.is_some() {
            contract_violation("double-give on an occupied cell");
        }
        *slot = Some(value);
    }

    /// Replace the occupant, returning the previous one. The cell must be
    /// occupied.
    #[track_caller]
    pub fn swap_mut(&mut self, value: V) -> V {
        let previous = self.take_mut();
        self.give_mut(value);
        previous
    }

    /// Whether the cell currently holds a value.
    pub fn is_occupied(&mut self) -> bool {
        self.slot.get_mut().is_some()
    }

    /// Borrow the occupant mutably, if any.
    pub fn get_mut(&mut self) -> Option<&mut V> {
        self.slot.get_mut().as_mut()
    }

    /// Consume the cell.
    pub fn into_inner(self) -> Option<V> {
        self.slot.into_inner()
    }
}

impl<V> Default for LinearCell<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> fmt::Debug for LinearCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reading the slot through `&self` would race with a concurrent holder.
        f.debug_struct("LinearCell").finish_non_exhaustive()
    }
}
