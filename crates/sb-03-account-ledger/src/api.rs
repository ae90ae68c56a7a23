//! # Free-Function Boundary
//!
//! The four operations drivers call, as plain functions over a ledger.

use sb_02_spin_mutex::WaitStrategy;

use crate::domain::AccountId;
use crate::ledger::Ledger;

/// Build a default (spin-wait, unchecked) ledger.
#[track_caller]
pub fn build_ledger(n_accounts: u64, starting_balance: i64) -> Ledger {
    Ledger::build(n_accounts, starting_balance)
}

/// Move `amount` from `source` to `dest`; see [`Ledger::transfer`].
#[track_caller]
pub fn transfer<W: WaitStrategy>(
    ledger: &Ledger<W>,
    source: AccountId,
    dest: AccountId,
    amount: i64,
) -> bool {
    ledger.transfer(source, dest, amount)
}

/// Read one balance under its lock.
#[track_caller]
pub fn probe_balance<W: WaitStrategy>(ledger: &Ledger<W>, id: AccountId) -> i64 {
    ledger.probe_balance(id)
}

/// Sum every balance.
pub fn sum_all_balances<W: WaitStrategy>(ledger: &Ledger<W>) -> i64 {
    ledger.sum_all_balances()
}
