//! # LinearSeq Linearity
//!
//! Move-only tokens shuffled between slots are never duplicated or lost.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sb_01_linear_cells::{LinearCell, LinearSeq};

    /// Not `Clone`: the only way to relocate a token is to move it.
    #[derive(Debug, PartialEq, Eq)]
    struct Token(u32);

    const SLOTS: usize = 8;

    proptest! {
        #[test]
        fn prop_moves_preserve_token_set(moves in proptest::collection::vec((0..SLOTS, 0..SLOTS), 0..128)) {
            let mut seq = LinearSeq::from_fn(SLOTS, |i| Token(i as u32));
            let mut hand = LinearCell::empty();

            for (from, to) in moves {
                // Pick up from `from`, put down at `to` if it is free, else swap.
                if !seq.is_occupied(from) {
                    continue;
                }
                hand.give_mut(seq.take(from));
                let token = hand.take_mut();
                if seq.is_occupied(to) {
                    let displaced = seq.swap(to, token);
                    seq.give(from, displaced);
                } else {
                    seq.give(to, token);
                }
                prop_assert_eq!(seq.occupied_count(), SLOTS);
            }

            let mut ids: Vec<u32> = seq.iter_occupied().map(|(_, t)| t.0).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..SLOTS as u32).collect::<Vec<_>>());
            prop_assert!(hand.get_mut().is_none());

            for i in 0..SLOTS {
                seq.take(i);
            }
            seq.free();
        }
    }
}
