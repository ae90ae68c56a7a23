//! # Domain Invariants
//!
//! Conservation of funds, at the ledger level and per settlement.

use super::entities::TransferMode;
use super::errors::LedgerError;

/// Fewest accounts a ledger may hold (a transfer needs two distinct ones).
pub const MIN_ACCOUNTS: u64 = 2;

/// Total funds a ledger of `n_accounts` starting at `starting_balance` holds.
///
/// Wraps on overflow, matching the balance arithmetic.
pub fn expected_total(n_accounts: u64, starting_balance: i64) -> i64 {
    (n_accounts as i64).wrapping_mul(starting_balance)
}

/// Invariant: sum of balances equals the expected total.
pub fn invariant_conservation(expected: i64, actual: i64) -> Result<(), LedgerError> {
    if expected == actual {
        Ok(())
    } else {
        Err(LedgerError::ConservationViolated { expected, actual })
    }
}

/// Invariant: a settlement moves funds between the two accounts without
/// creating or destroying any, and a rejected checked transfer changes nothing.
pub fn invariant_settlement_conserves(
    mode: TransferMode,
    before: (i64, i64),
    after: (i64, i64),
    success: bool,
) -> bool {
    let pair_sum = |(a, b): (i64, i64)| a.wrapping_add(b);
    if pair_sum(before) != pair_sum(after) {
        return false;
    }
    match (mode, success) {
        (TransferMode::Unchecked, false) => false,
        (_, false) => before == after,
        (_, true) => true,
    }
}
