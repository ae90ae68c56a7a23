//! # Account Ledger
//!
//! `N` accounts, each an [`AccountEntry`] behind its own spinlock, stored in
//! a [`LinearSeq`] whose every slot stays occupied for the ledger's lifetime.
//!
//! The ledger is structurally immutable once built: workers share it by
//! `&Ledger` and only ever `peek` slots. All mutation goes through the
//! per-account mutexes.

use std::fmt;

use rayon::prelude::*;
use sb_01_linear_cells::{contract_violation, LinearSeq};
use sb_02_spin_mutex::{Mutex, SpinLoop, WaitStrategy};
use tracing::{debug, error};

use crate::algorithms::settle;
use crate::domain::{
    expected_total, invariant_conservation, lock_order, AccountEntry, AccountId, LedgerConfig,
    LedgerError, TransferMode,
};
use crate::ports::LedgerApi;

/// Above this many accounts [`Ledger::sum_all_balances`] probes in parallel.
pub const PARALLEL_SUM_THRESHOLD: usize = 16_384;

/// Sharded, lock-per-account ledger.
pub struct Ledger<W: WaitStrategy = SpinLoop> {
    accounts: LinearSeq<Mutex<AccountEntry, W>>,
    starting_balance: i64,
    mode: TransferMode,
}

impl<W: WaitStrategy> Ledger<W> {
    /// Build an unchecked-mode ledger of `n_accounts`, each holding
    /// `starting_balance`.
    #[track_caller]
    pub fn build(n_accounts: u64, starting_balance: i64) -> Self {
        Self::build_with_mode(n_accounts, starting_balance, TransferMode::default())
    }

    /// Build a ledger with an explicit transfer mode.
    #[track_caller]
    pub fn build_with_mode(n_accounts: u64, starting_balance: i64, mode: TransferMode) -> Self {
        let len = usize::try_from(n_accounts).unwrap_or_else(|_| {
            contract_violation(format_args!(
                "ledger of {n_accounts} accounts cannot be addressed"
            ))
        });

        let mut accounts = LinearSeq::alloc(len);
        for i in 0..len {
            accounts.give(i, Mutex::new(AccountEntry::new(starting_balance)));
        }

        debug!(
            n_accounts,
            starting_balance,
            mode = %mode,
            "[sb-03] Ledger built"
        );

        Self {
            accounts,
            starting_balance,
            mode,
        }
    }

    /// Validate `config` and build from it.
    pub fn with_config(config: &LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self::build_with_mode(
            config.n_accounts,
            config.starting_balance,
            config.mode,
        ))
    }

    /// Number of accounts.
    pub fn n_accounts(&self) -> u64 {
        self.accounts.len() as u64
    }

    /// Transfer mode fixed at construction.
    pub fn mode(&self) -> TransferMode {
        self.mode
    }

    /// Balance every account started with.
    pub fn starting_balance(&self) -> i64 {
        self.starting_balance
    }

    /// The mutex guarding account `id`.
    #[track_caller]
    pub fn account(&self, id: AccountId) -> &Mutex<AccountEntry, W> {
        if id >= self.n_accounts() {
            contract_violation(format_args!(
                "unknown account {id} (ledger has {} accounts)",
                self.n_accounts()
            ));
        }
        self.accounts.peek(id as usize)
    }

    /// Move `amount` from `source` to `dest`.
    ///
    /// Both accounts are acquired in ascending id order whichever way the
    /// caller passes them, so concurrent transfers cannot deadlock. In
    /// checked mode an insufficient source balance leaves both accounts
    /// untouched and returns `false`; in unchecked mode this always returns
    /// `true`.
    #[track_caller]
    pub fn transfer(&self, source: AccountId, dest: AccountId, amount: i64) -> bool {
        if source == dest {
            contract_violation(format_args!("transfer from account {source} to itself"));
        }
        if amount < 0 {
            contract_violation(format_args!("negative transfer amount {amount}"));
        }

        let source_lock = self.account(source);
        let dest_lock = self.account(dest);

        let source_first = lock_order(source, dest).0 == source;
        let ((source_entry, source_handle), (dest_entry, dest_handle)) = if source_first {
            let s = source_lock.acquire();
            let d = dest_lock.acquire();
            (s, d)
        } else {
            let d = dest_lock.acquire();
            let s = source_lock.acquire();
            (s, d)
        };

        let outcome = settle(self.mode, source_entry.balance, dest_entry.balance, amount);

        source_lock.release(source_handle, AccountEntry::new(outcome.source_balance));
        dest_lock.release(dest_handle, AccountEntry::new(outcome.dest_balance));
        outcome.success
    }

    /// Read one balance: acquire, copy, release unchanged.
    #[track_caller]
    pub fn probe_balance(&self, id: AccountId) -> i64 {
        let lock = self.account(id);
        let (entry, handle) = lock.acquire();
        let balance = entry.balance;
        lock.release(handle, entry);
        balance
    }

    /// Sum of every balance, probing each account under its lock.
    ///
    /// Not a snapshot: with transfers in flight the result is only
    /// meaningful at a quiescent point.
    pub fn sum_all_balances(&self) -> i64 {
        let n = self.accounts.len();
        if n < PARALLEL_SUM_THRESHOLD {
            return (0..n)
                .map(|i| self.probe_balance(i as AccountId))
                .fold(0, i64::wrapping_add);
        }
        (0..n)
            .into_par_iter()
            .map(|i| self.probe_balance(i as AccountId))
            .reduce(|| 0, i64::wrapping_add)
    }

    /// `n_accounts * starting_balance` (wrapping).
    pub fn expected_total(&self) -> i64 {
        expected_total(self.n_accounts(), self.starting_balance)
    }

    /// Check that no funds were created or destroyed.
    pub fn check_conservation(&self) -> Result<(), LedgerError> {
        let expected = self.expected_total();
        let actual = self.sum_all_balances();
        let result = invariant_conservation(expected, actual);
        if result.is_err() {
            error!(expected, actual, "[sb-03] Conservation violated");
        }
        result
    }

    /// Tear down, returning every balance in id order.
    ///
    /// Owning the ledger proves no transfer is in flight, so no locks are
    /// taken.
    pub fn into_balances(self) -> Vec<i64> {
        let mut accounts = self.accounts;
        let balances = (0..accounts.len())
            .map(|i| accounts.take(i).into_inner().balance)
            .collect();
        accounts.free();
        balances
    }
}

impl<W: WaitStrategy> LedgerApi for Ledger<W> {
    fn n_accounts(&self) -> u64 {
        Ledger::n_accounts(self)
    }

    fn transfer(&self, source: AccountId, dest: AccountId, amount: i64) -> bool {
        Ledger::transfer(self, source, dest, amount)
    }

    fn probe_balance(&self, id: AccountId) -> i64 {
        Ledger::probe_balance(self, id)
    }

    fn sum_all_balances(&self) -> i64 {
        Ledger::sum_all_balances(self)
    }

    fn check_conservation(&self) -> Result<(), LedgerError> {
        Ledger::check_conservation(self)
    }
}

impl<W: WaitStrategy> fmt::Debug for Ledger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("n_accounts", &self.n_accounts())
            .field("starting_balance", &self.starting_balance)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
