//! # Wait Strategies
//!
//! What a thread does between failed compare-and-swap attempts on a mutex
//! flag. A strategy only decides how to wait; the flag stays the single
//! source of truth for who owns the cell.

use std::fmt;
use std::hint::spin_loop;
use std::str::FromStr;
use std::sync::atomic::{fence, AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attempts the [`Blocking`] strategy spins for before parking.
pub const SPINS_BEFORE_PARK: u32 = 64;

/// Upper bound on a single park; the waiter re-checks the flag afterwards.
const PARK_TIMEOUT: Duration = Duration::from_millis(1);

/// `Exponential` stops doubling after 2^SPIN_LIMIT hints.
const SPIN_LIMIT: u32 = 6;

/// `Exponential` starts yielding the time slice from this attempt on.
const YIELD_LIMIT: u32 = 10;

/// Hook points a [`Mutex`](crate::Mutex) calls while contended and on release.
pub trait WaitStrategy: Default + Send + Sync {
    /// Called after the `attempt`-th failed CAS (0-based) on `flag`.
    fn contended(&self, attempt: u32, flag: &AtomicBool);

    /// Called after the flag has been cleared by a release.
    fn released(&self) {}
}

/// Busy-wait with a CPU spin hint. No backoff.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinLoop;

impl WaitStrategy for SpinLoop {
    #[inline]
    fn contended(&self, _attempt: u32, _flag: &AtomicBool) {
        spin_loop();
    }
}

/// Exponential backoff: spin `2^min(attempt, 6)` hints, and yield the
/// thread once contention has lasted 10 attempts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Exponential;

impl WaitStrategy for Exponential {
    #[inline]
    fn contended(&self, attempt: u32, _flag: &AtomicBool) {
        for _ in 0..(1u32 << attempt.min(SPIN_LIMIT)) {
            spin_loop();
        }
        if attempt >= YIELD_LIMIT {
            thread::yield_now();
        }
    }
}

/// Spin briefly, then park on an OS mutex/condvar pair until the flag is
/// seen clear.
#[derive(Debug, Default)]
pub struct Blocking {
    waiters: AtomicUsize,
    lock: parking_lot::Mutex<()>,
    wakeup: parking_lot::Condvar,
}

impl Blocking {
    /// Threads currently parked (or about to park) on this strategy.
    pub fn parked(&self) -> usize {
        self.waiters.load(Ordering::Relaxed)
    }
}

impl WaitStrategy for Blocking {
    fn contended(&self, attempt: u32, flag: &AtomicBool) {
        if attempt < SPINS_BEFORE_PARK {
            spin_loop();
            return;
        }

        // Register before checking the flag; `released` checks `waiters`
        // after clearing it. With both sides SeqCst one of them must see the
        // other, so no wakeup is lost.
        self.waiters.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.lock.lock();
        while flag.load(Ordering::SeqCst) {
            self.wakeup.wait_for(&mut guard, PARK_TIMEOUT);
        }
        drop(guard);
        self.waiters.fetch_sub(1, Ordering::SeqCst);
    }

    fn released(&self) {
        fence(Ordering::SeqCst);
        if self.waiters.load(Ordering::SeqCst) > 0 {
            let _guard = self.lock.lock();
            self.wakeup.notify_all();
        }
    }
}

/// Runtime selector for a wait strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitKind {
    /// [`SpinLoop`]
    #[default]
    Spin,
    /// [`Exponential`]
    Exponential,
    /// [`Blocking`]
    Blocking,
}

impl WaitKind {
    /// All selectable strategies.
    pub const ALL: [WaitKind; 3] = [WaitKind::Spin, WaitKind::Exponential, WaitKind::Blocking];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitKind::Spin => "spin",
            WaitKind::Exponential => "exponential",
            WaitKind::Blocking => "blocking",
        }
    }
}

impl fmt::Display for WaitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised wait strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown wait strategy: {0} (expected spin, exponential or blocking)")]
pub struct ParseWaitKindError(pub String);

impl FromStr for WaitKind {
    type Err = ParseWaitKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spin" | "none" => Ok(WaitKind::Spin),
            "exponential" | "backoff" => Ok(WaitKind::Exponential),
            "blocking" | "os" => Ok(WaitKind::Blocking),
            _ => Err(ParseWaitKindError(s.to_string())),
        }
    }
}
