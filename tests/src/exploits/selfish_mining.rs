//! # Selfish Mining (Eyal & Sirer, 2013)
//!
//! ## Attack
//!
//! A withholding miner keeps a block private and releases it the moment an
//! honest block of equal work appears at the same height. Under a
//! "first seen" rule a well-connected attacker wins most of these races;
//! under "always take the external block" it wins all of them.
//!
//! ## Defense
//!
//! On exactly equal work and equal height:
//! - a node never leaves a block it prefers (its own),
//! - every other node flips a fair coin,
//! so the attacker's share of the race is capped at one half.

#[cfg(test)]
mod tests {
    use crate::fixtures::{child, genesis, store, zone_chain, zone_td};
    use hc_fork_choice::{
        ForkChoice, ForkChoiceApi, PreservePredicate, SeededRandomSource,
    };
    use shared_types::BlockHeader;
    use std::sync::Arc;

    const HONEST: u8 = 0x11;
    const ATTACKER: u8 = 0xEE;

    fn mined_by(coinbase: u8) -> PreservePredicate {
        Arc::new(move |h: &BlockHeader| h.coinbase == [coinbase; 20])
    }

    /// Honest head and withheld attacker block, both at height 1 with equal work.
    fn race() -> (BlockHeader, BlockHeader) {
        let g = genesis();
        (child(&g, HONEST), child(&g, ATTACKER))
    }

    #[test]
    fn test_honest_miner_keeps_own_block() {
        let (honest, withheld) = race();
        let chain = zone_chain();
        store(&chain, &honest, 100);
        chain.set_calc_td(withheld.hash(), Ok(zone_td(100)));

        let fc = ForkChoice::new(chain, Some(mined_by(HONEST))).unwrap();
        for _ in 0..200 {
            assert_eq!(fc.reorg_needed(Some(&honest), Some(&withheld)), Ok(false));
        }
    }

    #[test]
    fn test_attacker_wins_at_most_half_of_observers() {
        let (honest, withheld) = race();
        let nodes = 2_000u64;

        let switched = (0..nodes)
            .filter(|seed| {
                let chain = zone_chain();
                store(&chain, &honest, 100);
                chain.set_calc_td(withheld.hash(), Ok(zone_td(100)));
                // Observers mined neither block.
                let fc = ForkChoice::with_random_source(
                    chain,
                    Some(mined_by(0x00)),
                    Box::new(SeededRandomSource::from_seed(*seed)),
                );
                fc.reorg_needed(Some(&honest), Some(&withheld)) == Ok(true)
            })
            .count();

        let share = switched as f64 / nodes as f64;
        assert!((0.44..0.56).contains(&share), "attacker share {share}");
    }

    #[test]
    fn test_padding_with_empty_blocks_gains_nothing() {
        // The attacker reaches the same work with more, easier blocks.
        let (honest, _) = race();
        let g = genesis();
        let a1 = child(&g, ATTACKER);
        let a2 = child(&a1, ATTACKER);

        let chain = zone_chain();
        store(&chain, &honest, 100);
        chain.set_calc_td(a2.hash(), Ok(zone_td(100)));

        let fc = ForkChoice::new(chain, None).unwrap();
        for _ in 0..100 {
            assert_eq!(fc.reorg_needed(Some(&honest), Some(&a2)), Ok(false));
        }
    }
}
