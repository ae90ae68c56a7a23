//! # Transfer Scenarios
//!
//! Fixed, single-threaded flows through the public ledger boundary.
//!
//! ## Flows Tested
//!
//! 1. **Plain transfer**: 2 accounts of 100, move 30
//! 2. **Overdraft, unchecked**: 2 accounts of 5, move 100
//! 3. **Overdraft, checked**: same, rejected with nothing changed
//! 4. **Direction independence**: descending ids take the same lock order

#[cfg(test)]
mod tests {
    use sb_02_spin_mutex::{Blocking, Exponential, SpinLoop, WaitStrategy};
    use sb_03_account_ledger::{
        build_ledger, probe_balance, sum_all_balances, transfer, Ledger, LedgerApi, LedgerConfig,
        LedgerError, TransferMode,
    };

    // =============================================================================
    // FIXED SCENARIOS
    // =============================================================================

    #[test]
    fn test_plain_transfer() {
        let ledger = build_ledger(2, 100);
        assert!(transfer(&ledger, 0, 1, 30));

        assert_eq!(probe_balance(&ledger, 0), 70);
        assert_eq!(probe_balance(&ledger, 1), 130);
        assert_eq!(sum_all_balances(&ledger), 200);
    }

    #[test]
    fn test_unchecked_overdraft() {
        let ledger = build_ledger(2, 5);
        assert!(transfer(&ledger, 0, 1, 100));

        assert_eq!(probe_balance(&ledger, 0), -95);
        assert_eq!(probe_balance(&ledger, 1), 105);
        // Funds are conserved even though one account went negative.
        assert_eq!(sum_all_balances(&ledger), 10);
        assert!(ledger.check_conservation().is_ok());
    }

    #[test]
    fn test_checked_overdraft_rejected() {
        let config = LedgerConfig::new(2, 5).with_mode(TransferMode::Checked);
        let ledger: Ledger = Ledger::with_config(&config).unwrap();

        assert!(!transfer(&ledger, 0, 1, 100));
        assert_eq!(probe_balance(&ledger, 0), 5);
        assert_eq!(probe_balance(&ledger, 1), 5);

        // A transfer within the balance still goes through.
        assert!(transfer(&ledger, 0, 1, 5));
        assert_eq!(probe_balance(&ledger, 0), 0);
        assert_eq!(probe_balance(&ledger, 1), 10);
    }

    #[test]
    fn test_probe_leaves_balance_unchanged() {
        let ledger = build_ledger(3, 17);
        for _ in 0..10 {
            assert_eq!(probe_balance(&ledger, 2), 17);
        }
        assert!(!ledger.account(2).is_locked());
    }

    fn both_directions<W: WaitStrategy>() {
        let ledger: Ledger<W> = Ledger::build(3, 50);
        assert!(ledger.transfer(0, 2, 10));
        assert!(ledger.transfer(2, 0, 4));
        assert_eq!(ledger.into_balances(), vec![44, 50, 56]);
    }

    #[test]
    fn test_both_directions_every_strategy() {
        both_directions::<SpinLoop>();
        both_directions::<Exponential>();
        both_directions::<Blocking>();
    }

    // =============================================================================
    // BOUNDARY VALIDATION
    // =============================================================================

    #[test]
    fn test_try_transfer_validates_before_locking() {
        let ledger = build_ledger(4, 10);
        let api: &dyn LedgerApi = &ledger;

        assert_eq!(api.try_transfer(1, 1, 3), Err(LedgerError::SameAccount(1)));
        assert_eq!(api.try_transfer(0, 1, -3), Err(LedgerError::NegativeAmount(-3)));
        assert_eq!(api.try_transfer(0, 1, 3), Ok(true));
        assert_eq!(api.sum_all_balances(), 40);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn test_same_account_is_contract_violation() {
        let ledger = build_ledger(2, 1);
        transfer(&ledger, 0, 0, 1);
    }

    #[test]
    fn test_single_account_config_rejected() {
        let err = Ledger::<SpinLoop>::with_config(&LedgerConfig::new(1, 10)).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }
}
