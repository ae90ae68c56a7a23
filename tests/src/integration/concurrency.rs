//! # Concurrency Properties
//!
//! Multi-threaded checks of the ledger, built with holder instrumentation.
//!
//! ## Properties Tested
//!
//! 1. **Conservation**: total funds unchanged after concurrent transfers
//! 2. **Mutual exclusion**: no account ever has two holders
//! 3. **No lost updates**: a known transfer pattern ends at the exact balances
//! 4. **Checked mode**: balances never go negative
//! 5. **Deadlock freedom**: opposite-direction transfers on one pair complete

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use parking_lot::Mutex as PlMutex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use sb_02_spin_mutex::{Blocking, Exponential, Mutex, SpinLoop, WaitStrategy};
    use sb_03_account_ledger::{Ledger, LedgerConfig, TransferMode};

    const THREADS: u64 = 8;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Every thread issues `per_thread` random transfers of random amounts.
    fn random_transfers<W: WaitStrategy>(ledger: &Ledger<W>, per_thread: usize, max_amount: i64) {
        let n = ledger.n_accounts();
        thread::scope(|s| {
            for t in 0..THREADS {
                s.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(t);
                    for _ in 0..per_thread {
                        let a = rng.gen_range(0..n);
                        let b = rng.gen_range(0..n);
                        if a != b {
                            ledger.transfer(a, b, rng.gen_range(0..=max_amount));
                        }
                    }
                });
            }
        });
    }

    fn assert_exclusive<W: WaitStrategy>(ledger: &Ledger<W>) {
        for id in 0..ledger.n_accounts() {
            let account = ledger.account(id);
            assert!(account.peak_holders() <= 1, "account {id} had two holders");
            assert_eq!(account.current_holders(), 0, "account {id} still held");
            assert!(!account.is_locked());
        }
    }

    // =============================================================================
    // CONSERVATION AND MUTUAL EXCLUSION
    // =============================================================================

    fn conservation<W: WaitStrategy>() {
        for mode in [TransferMode::Unchecked, TransferMode::Checked] {
            let ledger: Ledger<W> = Ledger::with_config(&LedgerConfig::new(16, 1_000).with_mode(mode))
                .unwrap();
            random_transfers(&ledger, 5_000, 50);
            assert!(ledger.check_conservation().is_ok(), "mode = {mode}");
            assert_exclusive(&ledger);
        }
    }

    #[test]
    fn test_conservation_spin() {
        conservation::<SpinLoop>();
    }

    #[test]
    fn test_conservation_exponential() {
        conservation::<Exponential>();
    }

    #[test]
    fn test_conservation_blocking() {
        conservation::<Blocking>();
    }

    #[test]
    fn test_single_mutex_peak_holders() {
        let mutex: Mutex<u64> = Mutex::new(0);
        let observed = PlMutex::new(Vec::new());
        thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    for _ in 0..2_000 {
                        let (v, handle) = mutex.acquire();
                        let holders = mutex.current_holders();
                        mutex.release(handle, v + 1);
                        observed.lock().push(holders);
                    }
                });
            }
        });
        assert!(observed.lock().iter().all(|&h| h == 1));
        assert_eq!(mutex.peak_holders(), 1);
        assert_eq!(mutex.into_inner(), THREADS * 2_000);
    }

    // =============================================================================
    // NO LOST UPDATES
    // =============================================================================

    #[test]
    fn test_fan_in_exact_balances() {
        // Thread t repeatedly moves 1 from account t+1 into account 0.
        const ROUNDS: i64 = 10_000;
        let ledger: Ledger = Ledger::build(THREADS + 1, ROUNDS);
        thread::scope(|s| {
            for t in 0..THREADS {
                let ledger = &ledger;
                s.spawn(move || {
                    for _ in 0..ROUNDS {
                        assert!(ledger.transfer(t + 1, 0, 1));
                    }
                });
            }
        });

        let balances = ledger.into_balances();
        assert_eq!(balances[0], ROUNDS + THREADS as i64 * ROUNDS);
        assert!(balances[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_checked_never_negative() {
        let ledger: Ledger =
            Ledger::with_config(&LedgerConfig::new(8, 20).with_mode(TransferMode::Checked)).unwrap();
        random_transfers(&ledger, 5_000, 15);
        assert!(ledger.check_conservation().is_ok());
        assert!(ledger.into_balances().iter().all(|&b| b >= 0));
    }

    // =============================================================================
    // DEADLOCK FREEDOM
    // =============================================================================

    #[test]
    fn test_opposite_directions_complete() {
        let ledger: Arc<Ledger> = Arc::new(Ledger::build(2, 0));
        let (done_tx, done_rx) = mpsc::channel();

        for t in 0..THREADS {
            let ledger = Arc::clone(&ledger);
            let done_tx = done_tx.clone();
            thread::spawn(move || {
                let (from, to) = if t % 2 == 0 { (0, 1) } else { (1, 0) };
                for _ in 0..20_000 {
                    ledger.transfer(from, to, 1);
                }
                let _ = done_tx.send(t);
            });
        }
        drop(done_tx);

        for _ in 0..THREADS {
            done_rx
                .recv_timeout(Duration::from_secs(60))
                .expect("transfer threads deadlocked");
        }
        assert_eq!(ledger.sum_all_balances(), 0);
        assert_eq!(ledger.probe_balance(0), 0);
    }
}
