//! # Import Pipeline Flow
//!
//! Drives the fork chooser the way a block importer does: ancestry check
//! first, then the reorg decision against the moving canonical head. The
//! importer owns the head; the fork chooser only answers questions.

#[cfg(test)]
mod tests {
    use crate::fixtures::{child, genesis, store, zone_chain, zone_td};
    use hc_fork_choice::{
        ChainReaderError, FixedRandomSource, ForkChoice, ForkChoiceApi, ForkChoiceError,
        InMemoryChainReader,
    };
    use shared_types::{BlockHeader, HierarchyLevel};
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Minimal importer: owns the canonical head, asks fork choice what to do.
    struct Importer {
        chain: Arc<InMemoryChainReader>,
        fork_choice: ForkChoice<InMemoryChainReader>,
        head: BlockHeader,
        reorgs: usize,
    }

    impl Importer {
        fn new(chain: Arc<InMemoryChainReader>, genesis: BlockHeader) -> Self {
            store(&chain, &genesis, 0);
            let fork_choice = ForkChoice::with_random_source(
                chain.clone(),
                None,
                Box::new(FixedRandomSource::tails()),
            );
            Self {
                chain,
                fork_choice,
                head: genesis,
                reorgs: 0,
            }
        }

        /// Import a header with the given zone work. Returns whether it became head.
        fn import(&mut self, header: &BlockHeader, work: u64) -> Result<bool, ForkChoiceError> {
            self.chain
                .set_difficulty_order(header.hash(), Ok(HierarchyLevel::Zone));
            self.fork_choice.untwist_and_trim(header)?;

            self.chain.set_calc_td(header.hash(), Ok(zone_td(work)));
            let reorg = self
                .fork_choice
                .reorg_needed(Some(&self.head), Some(header))?;

            store(&self.chain, header, work);
            if reorg {
                if header.parent_hash_at(HierarchyLevel::Zone) != self.head.hash() {
                    self.reorgs += 1;
                }
                self.head = header.clone();
            }
            Ok(reorg)
        }
    }

    #[test]
    fn test_linear_chain_extends_head() {
        let mut importer = Importer::new(zone_chain(), genesis());
        let mut parent = importer.head.clone();

        for i in 1..=20u64 {
            let header = child(&parent, 1);
            assert_eq!(importer.import(&header, i * 100), Ok(true));
            parent = header;
        }

        assert_eq!(importer.head.number_at(HierarchyLevel::Zone), 20);
        assert_eq!(importer.reorgs, 0);
    }

    #[test]
    fn test_heavier_fork_takes_over() {
        let mut importer = Importer::new(zone_chain(), genesis());
        let g = importer.head.clone();

        let a1 = child(&g, 1);
        let a2 = child(&a1, 1);
        assert_eq!(importer.import(&a1, 100), Ok(true));
        assert_eq!(importer.import(&a2, 200), Ok(true));

        // Side fork, lighter at first.
        let b1 = child(&g, 2);
        assert_eq!(importer.import(&b1, 90), Ok(false));
        let b2 = child(&b1, 2);
        assert_eq!(importer.import(&b2, 180), Ok(false));

        // Overtakes on the third block.
        let b3 = child(&b2, 2);
        assert_eq!(importer.import(&b3, 270), Ok(true));
        assert_eq!(importer.head, b3);
        assert_eq!(importer.reorgs, 1);
    }

    #[test]
    fn test_unsynced_ancestry_does_not_block_import() {
        let chain = zone_chain();
        let mut importer = Importer::new(chain.clone(), genesis());
        let h1 = child(&importer.head, 1);
        chain.set_coincidence(
            h1.hash(),
            Err(ChainReaderError::SliceNotSynced {
                level: HierarchyLevel::Region,
            }),
        );

        assert_eq!(importer.import(&h1, 100), Ok(true));
        assert_eq!(importer.head, h1);
    }

    #[test]
    fn test_twisted_ancestry_rejects_header() {
        let chain = zone_chain();
        let mut importer = Importer::new(chain.clone(), genesis());
        let h1 = child(&importer.head, 1);
        let violation = ChainReaderError::TerminusMismatch {
            level: HierarchyLevel::Prime,
        };
        chain.set_coincidence(h1.hash(), Err(violation.clone()));

        assert_eq!(
            importer.import(&h1, 100),
            Err(ForkChoiceError::ChainReader(violation))
        );
        assert_eq!(importer.head.number_at(HierarchyLevel::Zone), 0);
    }

    #[test]
    fn test_equal_work_sibling_at_lower_height_wins() {
        let mut importer = Importer::new(zone_chain(), genesis());
        let g = importer.head.clone();
        let a1 = child(&g, 1);
        let a2 = child(&a1, 1);
        importer.import(&a1, 100).unwrap();
        importer.import(&a2, 200).unwrap();

        // Same total work reached in fewer blocks.
        let b1 = child(&g, 2);
        assert_eq!(importer.import(&b1, 200), Ok(true));
        assert_eq!(importer.head, b1);
    }
}
