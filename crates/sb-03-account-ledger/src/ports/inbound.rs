//! # Inbound Ports
//!
//! What a ledger offers to drivers and tests.

use crate::domain::{AccountId, LedgerError, TransferRequest};

/// Ledger API - inbound port.
///
/// Implemented by [`Ledger`](crate::Ledger) for every wait strategy, so a
/// driver can be written once and run against any of them.
pub trait LedgerApi: Send + Sync {
    /// Number of accounts.
    fn n_accounts(&self) -> u64;

    /// Move `amount` from `source` to `dest`. Returns whether funds moved.
    ///
    /// Panics on a contract violation (same account, unknown account,
    /// negative amount).
    fn transfer(&self, source: AccountId, dest: AccountId, amount: i64) -> bool;

    /// Read one balance under its lock.
    fn probe_balance(&self, id: AccountId) -> i64;

    /// Sum of all balances (wrapping).
    fn sum_all_balances(&self) -> i64;

    /// Compare the sum of balances against the expected total.
    fn check_conservation(&self) -> Result<(), LedgerError>;

    /// Validate first, then transfer. Errors instead of panicking.
    fn try_transfer(
        &self,
        source: AccountId,
        dest: AccountId,
        amount: i64,
    ) -> Result<bool, LedgerError> {
        let request = TransferRequest::new(source, dest, amount, self.n_accounts())?;
        Ok(self.transfer(request.source(), request.dest(), request.amount()))
    }
}
