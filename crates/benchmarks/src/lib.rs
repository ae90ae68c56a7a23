//! Benchmark utilities for the spinbank crates

pub mod utils {
    use bench_runtime::PairGenerator;
    use sb_03_account_ledger::AccountId;

    /// `count` account pairs drawn the way benchmark workers draw them.
    pub fn generate_pairs(seed: u64, keyspace: u64, count: usize) -> Vec<(AccountId, AccountId)> {
        match PairGenerator::new(seed, 0, keyspace) {
            Ok(gen) => gen.take(count).collect(),
            Err(_) => Vec::new(),
        }
    }

}
