//! In-memory chain reader.
//!
//! Reference collaborator for tests and simulations. Total difficulties,
//! difficulty orders and coincidence outcomes are scripted by the caller;
//! the hierarchical compare is the real coarsest-level-first ordering.

use crate::config::ChainConfig;
use crate::domain::{ChainReaderError, CoincidenceTermini};
use crate::ports::ChainReader;
use parking_lot::RwLock;
use shared_types::{Block, BlockHeader, DifficultyTuple, Hash, HierarchyLevel};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Default)]
struct MemoryChainState {
    blocks: HashMap<Hash, Block>,
    stored_td: HashMap<(Hash, u64), DifficultyTuple>,
    calc_td: HashMap<Hash, Result<DifficultyTuple, ChainReaderError>>,
    difficulty_orders: HashMap<Hash, Result<HierarchyLevel, ChainReaderError>>,
    coincidence: HashMap<Hash, Result<CoincidenceTermini, ChainReaderError>>,
    dom_reorg: HashMap<Hash, Result<bool, ChainReaderError>>,
}

/// Chain reader backed by hash maps.
pub struct InMemoryChainReader {
    config: ChainConfig,
    state: RwLock<MemoryChainState>,
}

impl InMemoryChainReader {
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            state: RwLock::new(MemoryChainState::default()),
        }
    }

    /// Store a block together with its total difficulty.
    pub fn insert_block(&self, block: Block, td: DifficultyTuple) {
        let hash = block.hash();
        let number = block.header.number_at(self.config.context);
        let mut state = self.state.write();
        state.stored_td.insert((hash, number), td);
        state.blocks.insert(hash, block);
    }

    /// Script the result of `calc_td` for a header.
    pub fn set_calc_td(&self, hash: Hash, result: Result<DifficultyTuple, ChainReaderError>) {
        self.state.write().calc_td.insert(hash, result);
    }

    /// Script the result of `get_difficulty_order` for a header.
    pub fn set_difficulty_order(
        &self,
        hash: Hash,
        result: Result<HierarchyLevel, ChainReaderError>,
    ) {
        self.state.write().difficulty_orders.insert(hash, result);
    }

    /// Script the result of `pccrc` for a header.
    pub fn set_coincidence(
        &self,
        hash: Hash,
        result: Result<CoincidenceTermini, ChainReaderError>,
    ) {
        self.state.write().coincidence.insert(hash, result);
    }

    /// Script the result of `dom_reorg_needed` for a header.
    pub fn set_dom_reorg(&self, hash: Hash, result: Result<bool, ChainReaderError>) {
        self.state.write().dom_reorg.insert(hash, result);
    }
}

impl ChainReader for InMemoryChainReader {
    fn config(&self) -> &ChainConfig {
        &self.config
    }

    fn get_td(&self, hash: &Hash, number: u64) -> Option<DifficultyTuple> {
        self.state.read().stored_td.get(&(*hash, number)).cloned()
    }

    fn calc_td(&self, header: &BlockHeader) -> Result<DifficultyTuple, ChainReaderError> {
        let hash = header.hash();
        let state = self.state.read();
        if let Some(result) = state.calc_td.get(&hash) {
            return result.clone();
        }
        // Stored blocks already know their difficulty.
        if let Some(td) = state
            .stored_td
            .get(&(hash, header.number_at(self.config.context)))
        {
            return Ok(td.clone());
        }
        Err(ChainReaderError::MissingAncestor(
            header.parent_hash_at(self.config.context),
        ))
    }

    fn get_block_by_hash(&self, hash: &Hash) -> Option<Block> {
        self.state.read().blocks.get(hash).cloned()
    }

    fn hlcr(&self, local: &DifficultyTuple, external: &DifficultyTuple) -> bool {
        for level in HierarchyLevel::ALL {
            match external.get(level).cmp(local.get(level)) {
                Ordering::Greater => return true,
                Ordering::Less => return false,
                Ordering::Equal => continue,
            }
        }
        false
    }

    fn dom_reorg_needed(&self, header: &BlockHeader) -> Result<bool, ChainReaderError> {
        self.state
            .read()
            .dom_reorg
            .get(&header.hash())
            .cloned()
            .unwrap_or(Ok(true))
    }

    fn pccrc(
        &self,
        header: &BlockHeader,
        _order: HierarchyLevel,
    ) -> Result<CoincidenceTermini, ChainReaderError> {
        self.state
            .read()
            .coincidence
            .get(&header.hash())
            .cloned()
            .unwrap_or_else(|| Ok(CoincidenceTermini::new(header.parent_hash)))
    }

    fn get_difficulty_order(
        &self,
        header: &BlockHeader,
    ) -> Result<HierarchyLevel, ChainReaderError> {
        let hash = header.hash();
        self.state
            .read()
            .difficulty_orders
            .get(&hash)
            .cloned()
            .unwrap_or(Err(ChainReaderError::UnknownDifficultyOrder(hash)))
    }
}
