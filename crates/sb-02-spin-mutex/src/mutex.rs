//! # Spinlock-Guarded Cell
//!
//! `Mutex<V, W>` = one `AtomicBool` + one [`LinearCell<V>`] + a wait strategy.
//!
//! ## Invariant
//!
//! `flag == false` exactly when the cell is occupied. The thread that flips
//! the flag `false -> true` is the only one allowed to take the cell, and
//! nobody touches the cell again until that thread gives a value back and
//! clears the flag.
//!
//! ## Ownership Hand-off
//!
//! ```text
//! acquire():  CAS flag false->true  ->  take cell  ->  (V, MutexHandle)
//! release():  give cell(V)  ->  store flag false  ->  wake waiters
//! ```
//!
//! The [`MutexHandle`] is the proof of ownership. It cannot be cloned or
//! forged, so every release pairs with exactly one acquire.

use std::fmt;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use sb_01_linear_cells::{contract_violation, LinearCell};

#[cfg(feature = "instrument")]
use crate::instrument::HolderCounter;
use crate::wait::{SpinLoop, WaitStrategy};

/// Spinlock-guarded ownership cell.
pub struct Mutex<V, W: WaitStrategy = SpinLoop> {
    flag: AtomicBool,
    cell: LinearCell<V>,
    wait: W,
    #[cfg(feature = "instrument")]
    holders: HolderCounter,
}

/// Permission to release a [`Mutex`], returned by [`Mutex::acquire`].
///
/// Dropping a handle without passing it to [`Mutex::release`] leaves the
/// mutex locked for good.
#[must_use = "a MutexHandle must be passed back to Mutex::release"]
pub struct MutexHandle<'a, V, W: WaitStrategy = SpinLoop> {
    mutex: &'a Mutex<V, W>,
}

impl<V, W: WaitStrategy> Mutex<V, W> {
    /// Create an unlocked mutex holding `initial`.
    pub fn new(initial: V) -> Self {
        Self::with_strategy(initial, W::default())
    }

    /// Create an unlocked mutex with an explicit wait strategy instance.
    pub fn with_strategy(initial: V, wait: W) -> Self {
        Self {
            flag: AtomicBool::new(false),
            cell: LinearCell::new(initial),
            wait,
            #[cfg(feature = "instrument")]
            holders: HolderCounter::default(),
        }
    }

    /// Spin until the flag is won, then move the protected value out.
    ///
    /// There is no timeout and no fairness: under sustained contention a
    /// given thread may wait indefinitely while others make progress.
    pub fn acquire(&self) -> (V, MutexHandle<'_, V, W>) {
        let mut attempt: u32 = 0;
        while self
            .flag
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            self.wait.contended(attempt, &self.flag);
            attempt = attempt.saturating_add(1);
        }
        self.enter()
    }

    /// Single CAS attempt. `None` if the mutex is currently held.
    pub fn try_acquire(&self) -> Option<(V, MutexHandle<'_, V, W>)> {
        self.flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| self.enter())
    }

    /// Give `value` back and unlock.
    ///
    /// `handle` must come from an `acquire` on this same mutex.
    #[track_caller]
    pub fn release(&self, handle: MutexHandle<'_, V, W>, value: V) {
        if !ptr::eq(handle.mutex, self) {
            contract_violation("MutexHandle released on a different mutex");
        }
        #[cfg(feature = "instrument")]
        self.holders.exit();

        // SAFETY: `handle` proves this thread won the flag, so no other
        // thread touches the cell until the store below.
        unsafe { self.cell.give(value) };
        self.flag.store(false, Ordering::Release);
        self.wait.released();
    }

    /// Acquire, run `f` on the value, release.
    ///
    /// If `f` panics the mutex stays locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        let (mut value, handle) = self.acquire();
        let result = f(&mut value);
        self.release(handle, value);
        result
    }

    /// Whether some thread currently holds the mutex. Racy by nature; for
    /// diagnostics only.
    pub fn is_locked(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// The wait strategy instance.
    pub fn strategy(&self) -> &W {
        &self.wait
    }

    /// Borrow the value through a unique reference; no locking needed.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut V {
        match self.cell.get_mut() {
            Some(value) => value,
            None => contract_violation("mutex is held by a leaked MutexHandle"),
        }
    }

    /// Consume the mutex and return the value.
    #[track_caller]
    pub fn into_inner(self) -> V {
        self.cell
            .into_inner()
            .unwrap_or_else(|| contract_violation("mutex is held by a leaked MutexHandle"))
    }

    /// Highest number of simultaneous holders ever observed. Must be <= 1.
    #[cfg(feature = "instrument")]
    pub fn peak_holders(&self) -> u32 {
        self.holders.peak()
    }

    /// Holders right now. Must be 0 at a quiescent point.
    #[cfg(feature = "instrument")]
    pub fn current_holders(&self) -> u32 {
        self.holders.current()
    }

    fn enter(&self) -> (V, MutexHandle<'_, V, W>) {
        #[cfg(feature = "instrument")]
        self.holders.enter();

        // SAFETY: this thread just flipped the flag false -> true; until it
        // is cleared in `release` no other thread accesses the cell.
        let value = unsafe { self.cell.take() };
        (value, MutexHandle { mutex: self })
    }
}

impl<V: Default, W: WaitStrategy> Default for Mutex<V, W> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V, W: WaitStrategy> fmt::Debug for Mutex<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutex")
            .field("locked", &self.is_locked())
            .finish_non_exhaustive()
    }
}

impl<V, W: WaitStrategy> fmt::Debug for MutexHandle<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutexHandle")
            .field("mutex", &ptr::from_ref(self.mutex))
            .finish()
    }
}
