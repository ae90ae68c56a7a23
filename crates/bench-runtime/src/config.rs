//! # Benchmark Configuration
//!
//! Defaults reproduce the reference run: 10 threads, one million accounts
//! of 5001 each, three seconds of unit transfers.
//!
//! Values are layered: defaults, then `SB_*` environment variables, then
//! command-line flags (see [`crate::cli`]).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use sb_02_spin_mutex::WaitKind;
use sb_03_account_ledger::{LedgerConfig, TransferMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest accounts the pair generator can draw from: ids `1..=keyspace-2`
/// must be non-empty.
pub const MIN_KEYSPACE: u64 = 3;

/// Complete benchmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Worker threads.
    pub threads: usize,
    /// Number of accounts.
    pub keyspace: u64,
    /// Balance every account starts with.
    pub initial_balance: i64,
    /// Wall-clock length of the run.
    pub duration: Duration,
    /// Amount moved per transfer.
    pub amount: i64,
    /// Funds check applied by transfers.
    pub mode: TransferMode,
    /// What a contended acquire does while it waits.
    pub wait: WaitKind,
    /// Base seed; worker `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            threads: 10,
            keyspace: 1_000_000,
            initial_balance: 5001,
            duration: Duration::from_secs(3),
            amount: 1,
            mode: TransferMode::Unchecked,
            wait: WaitKind::Spin,
            seed: 0,
        }
    }
}

impl BenchConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SB_THREADS`: Worker threads (default: 10)
    /// - `SB_KEYSPACE`: Number of accounts (default: 1000000)
    /// - `SB_INITIAL_BALANCE`: Starting balance (default: 5001)
    /// - `SB_DURATION_SECS`: Run length in seconds, fractional allowed (default: 3)
    /// - `SB_AMOUNT`: Amount per transfer (default: 1)
    /// - `SB_MODE`: `checked` or `unchecked` (default: unchecked)
    /// - `SB_WAIT`: `spin`, `exponential` or `blocking` (default: spin)
    /// - `SB_SEED`: Base RNG seed (default: 0)
    ///
    /// Unset variables keep their default; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let duration = match lookup("SB_DURATION_SECS") {
            Some(raw) => parse_duration_secs("SB_DURATION_SECS", &raw)?,
            None => defaults.duration,
        };

        Ok(Self {
            threads: parse_var(&lookup, "SB_THREADS", defaults.threads)?,
            keyspace: parse_var(&lookup, "SB_KEYSPACE", defaults.keyspace)?,
            initial_balance: parse_var(&lookup, "SB_INITIAL_BALANCE", defaults.initial_balance)?,
            duration,
            amount: parse_var(&lookup, "SB_AMOUNT", defaults.amount)?,
            mode: parse_var(&lookup, "SB_MODE", defaults.mode)?,
            wait: parse_var(&lookup, "SB_WAIT", defaults.wait)?,
            seed: parse_var(&lookup, "SB_SEED", defaults.seed)?,
        })
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        if self.keyspace < MIN_KEYSPACE {
            return Err(ConfigError::KeyspaceTooSmall {
                got: self.keyspace,
                min: MIN_KEYSPACE,
            });
        }
        if self.amount < 0 {
            return Err(ConfigError::NegativeAmount(self.amount));
        }
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    /// The ledger this run operates on.
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig::new(self.keyspace, self.initial_balance).with_mode(self.mode)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Environment variable present but unparsable.
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidVar {
        /// Variable or flag name
        var: String,
        /// Raw value
        value: String,
        /// Parser message
        reason: String,
    },

    /// Zero worker threads.
    #[error("At least one worker thread is required")]
    NoThreads,

    /// Keyspace too small for the pair generator.
    #[error("Keyspace must be at least {min}, got {got}")]
    KeyspaceTooSmall {
        /// Requested keyspace
        got: u64,
        /// Minimum accepted
        min: u64,
    },

    /// Negative transfer amount.
    #[error("Transfer amount must be non-negative, got {0}")]
    NegativeAmount(i64),

    /// Zero-length run.
    #[error("Run duration must be positive")]
    ZeroDuration,
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            var: var.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Parse fractional seconds into a [`Duration`].
pub(crate) fn parse_duration_secs(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidVar {
        var: var.to_string(),
        value: raw.to_string(),
        reason,
    };
    let secs: f64 = raw.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    Duration::try_from_secs_f64(secs).map_err(|e| invalid(e.to_string()))
}
