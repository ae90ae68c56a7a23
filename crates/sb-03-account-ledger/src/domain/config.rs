//! # Ledger Configuration

use serde::{Deserialize, Serialize};

use super::entities::TransferMode;
use super::errors::LedgerError;
use super::invariants::MIN_ACCOUNTS;

/// Ledger construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Number of accounts
    pub n_accounts: u64,
    /// Balance every account starts with
    pub starting_balance: i64,
    /// Funds check applied by transfers
    #[serde(default)]
    pub mode: TransferMode,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            n_accounts: 1_000_000,
            starting_balance: 5001,
            mode: TransferMode::Unchecked,
        }
    }
}

impl LedgerConfig {
    /// Create a config in the default (unchecked) mode.
    pub fn new(n_accounts: u64, starting_balance: i64) -> Self {
        Self {
            n_accounts,
            starting_balance,
            mode: TransferMode::default(),
        }
    }

    /// Builder: set the transfer mode.
    pub fn with_mode(mut self, mode: TransferMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.n_accounts < MIN_ACCOUNTS {
            return Err(LedgerError::TooFewAccounts {
                got: self.n_accounts,
                min: MIN_ACCOUNTS,
            });
        }
        if usize::try_from(self.n_accounts).is_err() {
            return Err(LedgerError::TooManyAccounts(self.n_accounts));
        }
        Ok(())
    }
}
