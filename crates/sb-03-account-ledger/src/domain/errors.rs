//! # Domain Errors
//!
//! Recoverable errors of the ledger: configuration and request validation,
//! and conservation check failures. Contract violations inside the transfer
//! protocol are panics, not variants here.

use thiserror::Error;

use super::entities::AccountId;

/// Ledger error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Not enough accounts for a transfer to be possible.
    #[error("Ledger needs at least {min} accounts, got {got}")]
    TooFewAccounts {
        /// Requested account count
        got: u64,
        /// Minimum accepted
        min: u64,
    },

    /// Account count does not fit in memory on this platform.
    #[error("Ledger of {0} accounts cannot be addressed on this platform")]
    TooManyAccounts(u64),

    /// Account id outside `0..n_accounts`.
    #[error("Unknown account {id} (ledger has {n_accounts} accounts)")]
    UnknownAccount {
        /// Offending id
        id: AccountId,
        /// Ledger size
        n_accounts: u64,
    },

    /// Source and destination are the same account.
    #[error("Transfer from account {0} to itself")]
    SameAccount(AccountId),

    /// Negative transfer amount.
    #[error("Transfer amount must be non-negative, got {0}")]
    NegativeAmount(i64),

    /// Unrecognised transfer mode name.
    #[error("Unknown transfer mode: {0} (expected checked or unchecked)")]
    UnknownMode(String),

    /// Total funds changed.
    #[error("Conservation violated: expected total {expected}, found {actual}")]
    ConservationViolated {
        /// `n_accounts * starting_balance`
        expected: i64,
        /// Observed sum of balances
        actual: i64,
    },
}
