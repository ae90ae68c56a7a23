//! # Linear Sequence
//!
//! Fixed-length array of independent ownership slots ("lseq").
//!
//! Structural operations (`give`, `take`, `swap`) require `&mut self`, so a
//! sequence shared by reference is structurally frozen: elements can be
//! borrowed with [`LinearSeq::peek`] but never moved between slots or
//! threads.

use std::fmt;

use crate::contract_violation;

/// Ownership-tracked array.
///
/// Each slot is independently `Empty` or `Occupied(V)`. The length is fixed
/// at allocation.
pub struct LinearSeq<V> {
    slots: Box<[Option<V>]>,
}

impl<V> LinearSeq<V> {
    /// Allocate `length` empty slots.
    pub fn alloc(length: usize) -> Self {
        Self {
            slots: (0..length).map(|_| None).collect(),
        }
    }

    /// Allocate `length` slots, each occupied by `init(index)`.
    pub fn from_fn(length: usize, mut init: impl FnMut(usize) -> V) -> Self {
        Self {
            slots: (0..length).map(|i| Some(init(i))).collect(),
        }
    }

    /// Number of slots (occupied or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence has zero slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether slot `index` holds a value.
    #[track_caller]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.slot(index).is_some()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Borrow the occupant of slot `index` without changing occupancy.
    ///
    /// The reference stays valid for as long as the sequence is borrowed,
    /// which also prevents anyone from taking the slot in the meantime.
    #[track_caller]
    pub fn peek(&self, index: usize) -> &V {
        match self.slot(index) {
            Some(value) => value,
            None => contract_violation(format_args!("peek of empty slot {index}")),
        }
    }

    /// Mutable counterpart of [`LinearSeq::peek`].
    #[track_caller]
    pub fn peek_mut(&mut self, index: usize) -> &mut V {
        match self.slot_mut(index) {
            Some(value) => value,
            None => contract_violation(format_args!("peek of empty slot {index}")),
        }
    }

    /// Move `value` into empty slot `index`.
    #[track_caller]
    pub fn give(&mut self, index: usize, value: V) {
        let slot = self.slot_mut(index);
        if slot.is_some() {
            contract_violation(format_args!("double-give on occupied slot {index}"));
        }
        *slot = Some(value);
    }

    /// Move the occupant out of slot `index`, leaving it empty.
    #[track_caller]
    pub fn take(&mut self, index: usize) -> V {
        match self.slot_mut(index).take() {
            Some(value) => value,
            None => contract_violation(format_args!("double-take on empty slot {index}")),
        }
    }

    /// Replace the occupant of slot `index`, returning the previous one.
    #[track_caller]
    pub fn swap(&mut self, index: usize, value: V) -> V {
        let previous = self.take(index);
        self.give(index, value);
        previous
    }

    /// Iterate `(index, &value)` over occupied slots in index order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, &V)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|value| (i, value)))
    }

    /// Release the sequence. Every slot must already be empty, so no element
    /// is dropped behind the owner's back.
    #[track_caller]
    pub fn free(self) {
        if let Some(index) = self.slots.iter().position(Option::is_some) {
            contract_violation(format_args!("free of sequence with occupied slot {index}"));
        }
    }

    #[track_caller]
    fn slot(&self, index: usize) -> &Option<V> {
        let len = self.slots.len();
        match self.slots.get(index) {
            Some(slot) => slot,
            None => contract_violation(format_args!(
                "index {index} out of range for sequence of length {len}"
            )),
        }
    }

    #[track_caller]
    fn slot_mut(&mut self, index: usize) -> &mut Option<V> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => slot,
            None => contract_violation(format_args!(
                "index {index} out of range for sequence of length {len}"
            )),
        }
    }
}

impl<V> fmt::Debug for LinearSeq<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearSeq")
            .field("len", &self.len())
            .field("occupied", &self.occupied_count())
            .finish()
    }
}
