//! Command-line flags. Every flag is optional and overrides the matching
//! `SB_*` environment variable.

use clap::Parser;
use sb_02_spin_mutex::WaitKind;
use sb_03_account_ledger::TransferMode;

use crate::config::{parse_duration_secs, BenchConfig, ConfigError};

/// Spinlock bank ledger benchmark
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bench-runtime")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Worker threads
    #[arg(long)]
    pub threads: Option<usize>,

    /// Number of accounts
    #[arg(long)]
    pub keyspace: Option<u64>,

    /// Balance every account starts with
    #[arg(long, allow_negative_numbers = true)]
    pub initial_balance: Option<i64>,

    /// Run length in seconds (fractional allowed)
    #[arg(long)]
    pub duration_secs: Option<String>,

    /// Amount moved per transfer
    #[arg(long)]
    pub amount: Option<i64>,

    /// Funds check: checked | unchecked
    #[arg(long)]
    pub mode: Option<TransferMode>,

    /// Contended-acquire behaviour: spin | exponential | blocking
    #[arg(long)]
    pub wait: Option<WaitKind>,

    /// Base RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, mut config: BenchConfig) -> Result<BenchConfig, ConfigError> {
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(keyspace) = self.keyspace {
            config.keyspace = keyspace;
        }
        if let Some(balance) = self.initial_balance {
            config.initial_balance = balance;
        }
        if let Some(raw) = &self.duration_secs {
            config.duration = parse_duration_secs("--duration-secs", raw)?;
        }
        if let Some(amount) = self.amount {
            config.amount = amount;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(wait) = self.wait {
            config.wait = wait;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}
