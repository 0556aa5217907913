//! Dominant-chain reorg re-check
//!
//! Defers a sub-prime reorg decision to whether the dominant chain would
//! also reorganise to the candidate. Not installed unless asked for.

use crate::domain::ChainReaderError;
use crate::ports::{ChainReader, ReorgPostCheck};
use shared_types::BlockHeader;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct DominantReorgCheck;

impl ReorgPostCheck for DominantReorgCheck {
    fn check(
        &self,
        chain: &dyn ChainReader,
        candidate: &BlockHeader,
    ) -> Result<bool, ChainReaderError> {
        let dom_reorg = chain.dom_reorg_needed(candidate)?;
        debug!(dom_reorg, "Dominant chain re-check");
        Ok(dom_reorg)
    }
}
