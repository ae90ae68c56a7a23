//! # Domain Entities
//!
//! Account state and transfer requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::LedgerError;

/// Account identifier: index into the ledger, `0..n_accounts`.
pub type AccountId = u64;

/// One account's funds. Lives inside its account's mutex for the whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountEntry {
    /// Current balance. May go negative in unchecked mode.
    pub balance: i64,
}

impl AccountEntry {
    /// Create an entry with the given balance.
    pub const fn new(balance: i64) -> Self {
        Self { balance }
    }
}

/// Whether a transfer checks for sufficient funds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Every transfer succeeds; balances may go negative.
    #[default]
    Unchecked,
    /// Reject (and change nothing) when `source.balance < amount`.
    Checked,
}

impl TransferMode {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMode::Unchecked => "unchecked",
            TransferMode::Checked => "checked",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferMode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unchecked" => Ok(TransferMode::Unchecked),
            "checked" => Ok(TransferMode::Checked),
            _ => Err(LedgerError::UnknownMode(s.to_string())),
        }
    }
}

/// Two accounts in lock-acquisition order: ascending id.
pub fn lock_order(a: AccountId, b: AccountId) -> (AccountId, AccountId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A validated transfer: distinct in-range accounts, non-negative amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferRequest {
    source: AccountId,
    dest: AccountId,
    amount: i64,
}

impl TransferRequest {
    /// Validate a transfer against a ledger of `n_accounts` accounts.
    pub fn new(
        source: AccountId,
        dest: AccountId,
        amount: i64,
        n_accounts: u64,
    ) -> Result<Self, LedgerError> {
        for id in [source, dest] {
            if id >= n_accounts {
                return Err(LedgerError::UnknownAccount { id, n_accounts });
            }
        }
        if source == dest {
            return Err(LedgerError::SameAccount(source));
        }
        if amount < 0 {
            return Err(LedgerError::NegativeAmount(amount));
        }
        Ok(Self {
            source,
            dest,
            amount,
        })
    }

    /// Account debited.
    pub fn source(&self) -> AccountId {
        self.source
    }

    /// Account credited.
    pub fn dest(&self) -> AccountId {
        self.dest
    }

    /// Amount moved.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The two accounts in lock-acquisition order (ascending id).
    pub fn lock_order(&self) -> (AccountId, AccountId) {
        lock_order(self.source, self.dest)
    }
}
