//! Driving ports (Inbound API)

use crate::domain::ForkChoiceResult;
use shared_types::BlockHeader;

/// Fork choice API consumed by the block import pipeline.
pub trait ForkChoiceApi: Send + Sync {
    /// Whether the canonical chain should reorganise from `current` to
    /// `candidate`.
    ///
    /// `None` on either side fails with `InvalidInput`.
    fn reorg_needed(
        &self,
        current: Option<&BlockHeader>,
        candidate: Option<&BlockHeader>,
    ) -> ForkChoiceResult<bool>;

    /// Check a freshly received header's hierarchical ancestry.
    ///
    /// Returns `Ok(())` when the ancestry is consistent or when the check
    /// could only fail for expected desync reasons.
    fn untwist_and_trim(&self, header: &BlockHeader) -> ForkChoiceResult<()>;

    /// Alias of `untwist_and_trim`.
    fn validate_hierarchical_ancestry(&self, header: &BlockHeader) -> ForkChoiceResult<()> {
        self.untwist_and_trim(header)
    }
}
