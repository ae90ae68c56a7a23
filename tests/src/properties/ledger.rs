//! # Ledger Model
//!
//! Single-threaded ledger against a `Vec<i64>` model with the same
//! settlement rule.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sb_03_account_ledger::{
        settle, Ledger, LedgerConfig, TransferMode, TransferRequest,
    };

    const ACCOUNTS: u64 = 6;

    fn request_strategy() -> impl Strategy<Value = TransferRequest> {
        (0..ACCOUNTS, 1..ACCOUNTS, 0i64..500).prop_map(|(source, offset, amount)| {
            let dest = (source + offset) % ACCOUNTS;
            TransferRequest::new(source, dest, amount, ACCOUNTS).expect("distinct, in range")
        })
    }

    proptest! {
        #[test]
        fn prop_ledger_matches_model(
            checked in any::<bool>(),
            start in -100i64..1_000,
            requests in proptest::collection::vec(request_strategy(), 0..64),
        ) {
            let mode = if checked { TransferMode::Checked } else { TransferMode::Unchecked };
            let ledger: Ledger =
                Ledger::with_config(&LedgerConfig::new(ACCOUNTS, start).with_mode(mode)).unwrap();
            let mut model = vec![start; ACCOUNTS as usize];

            for req in &requests {
                let (s, d) = (req.source() as usize, req.dest() as usize);
                let expected = settle(mode, model[s], model[d], req.amount());
                model[s] = expected.source_balance;
                model[d] = expected.dest_balance;

                let moved = ledger.transfer(req.source(), req.dest(), req.amount());
                prop_assert_eq!(moved, expected.success);
                prop_assert_eq!(ledger.sum_all_balances(), ledger.expected_total());
            }

            prop_assert_eq!(ledger.into_balances(), model);
        }
    }
}
