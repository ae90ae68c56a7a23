//! # Pair Generation
//!
//! Each worker owns a seeded generator, so a run is reproducible for a
//! given `(seed, threads)` up to thread interleaving.
//!
//! ```text
//! p, q <- uniform [1, keyspace-2]
//! if p == q { q += 1 }
//! order so p < q           =>  1 <= p < q <= keyspace-1
//! ```
//!
//! Account 0 is never drawn.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sb_03_account_ledger::AccountId;

use crate::config::{ConfigError, MIN_KEYSPACE};

/// Per-worker source of account pairs.
#[derive(Debug, Clone)]
pub struct PairGenerator {
    rng: StdRng,
    ids: Uniform<AccountId>,
}

impl PairGenerator {
    /// Generator for worker `thread_id` over `keyspace` accounts.
    pub fn new(seed: u64, thread_id: usize, keyspace: u64) -> Result<Self, ConfigError> {
        if keyspace < MIN_KEYSPACE {
            return Err(ConfigError::KeyspaceTooSmall {
                got: keyspace,
                min: MIN_KEYSPACE,
            });
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed.wrapping_add(thread_id as u64)),
            ids: Uniform::new_inclusive(1, keyspace - 2),
        })
    }

    /// Next `(lower, higher)` pair of distinct ids.
    pub fn next_pair(&mut self) -> (AccountId, AccountId) {
        let p = self.ids.sample(&mut self.rng);
        let mut q = self.ids.sample(&mut self.rng);
        if p == q {
            q += 1;
        }
        if p < q {
            (p, q)
        } else {
            (q, p)
        }
    }
}

impl Iterator for PairGenerator {
    type Item = (AccountId, AccountId);

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_pair())
    }
}
