//! Driven ports (Outbound dependencies)

use crate::config::ChainConfig;
use crate::domain::{ChainReaderError, CoincidenceTermini};
use shared_types::{Block, BlockHeader, DifficultyTuple, Hash, HierarchyLevel};

/// Read access to the local chain during header processing.
///
/// Implemented by the full header chain and by light chains. Fork choice
/// treats every method as opaque and never mutates chain state through it.
pub trait ChainReader: Send + Sync {
    /// Chain configuration, including the node's native context.
    fn config(&self) -> &ChainConfig;

    /// Stored total difficulty of a local block.
    fn get_td(&self, hash: &Hash, number: u64) -> Option<DifficultyTuple>;

    /// Total difficulty of a header not yet in the store.
    ///
    /// Fails when ancestry needed for the calculation is missing.
    fn calc_td(&self, header: &BlockHeader) -> Result<DifficultyTuple, ChainReaderError>;

    /// Block by hash.
    fn get_block_by_hash(&self, hash: &Hash) -> Option<Block>;

    /// Hierarchical comparison. True when `external` carries more work
    /// than `local`.
    fn hlcr(&self, local: &DifficultyTuple, external: &DifficultyTuple) -> bool;

    /// Whether the dominant chain also needs a reorg to `header`.
    fn dom_reorg_needed(&self, header: &BlockHeader) -> Result<bool, ChainReaderError>;

    /// Previous coincident reference check.
    ///
    /// Confirms the header's ancestry, projected up to coarser levels,
    /// meets the locally canonical chain. Failures carry a
    /// `CoincidenceFailure` classification via `ChainReaderError::kind`.
    fn pccrc(
        &self,
        header: &BlockHeader,
        order: HierarchyLevel,
    ) -> Result<CoincidenceTermini, ChainReaderError>;

    /// Coarsest level whose difficulty this header satisfies.
    fn get_difficulty_order(&self, header: &BlockHeader) -> Result<HierarchyLevel, ChainReaderError>;
}

/// Random source for the tie-breaker.
///
/// Implementations serialise their own state, so one source may be shared
/// by concurrent callers.
pub trait RandomSource: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Fair coin: true with probability one half.
    fn coin_flip(&self) -> bool {
        self.next_f64() < 0.5
    }
}

/// Hook run after a reorg decision has been reached.
///
/// Only consulted when the decision is to reorg and the node runs below
/// prime. The returned value replaces the decision.
pub trait ReorgPostCheck: Send + Sync {
    fn check(&self, chain: &dyn ChainReader, candidate: &BlockHeader)
        -> Result<bool, ChainReaderError>;
}
