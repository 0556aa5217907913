//! Error types for the fork-choice core
//!
//! Two layers: `ChainReaderError` is what collaborators return, and
//! `ForkChoiceError` is what the core returns. Collaborator errors pass
//! through untouched so callers can still tell rejection from retry.

use shared_types::{Hash, HierarchyLevel};

/// Classification of a failed coincident reference check.
///
/// Only the first two are absorbed by `untwist_and_trim`; everything else
/// rejects the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoincidenceFailure {
    /// An ancestor level has not caught up locally yet.
    SliceNotSynced,
    /// The header's coarse ancestry does not (yet) match the canonical dominant chain.
    NotCanonicalDominant,
    /// Any genuine failure.
    Other,
}

/// Errors returned by a `ChainReader` implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainReaderError {
    #[error("Slice is not synced at {level} level")]
    SliceNotSynced { level: HierarchyLevel },

    #[error("Chain is not being built on the canonical dominant chain")]
    NotCanonicalDominant,

    #[error("Missing ancestor: {0:?}")]
    MissingAncestor(Hash),

    #[error("Cannot determine difficulty order of header {0:?}")]
    UnknownDifficultyOrder(Hash),

    #[error("Coincident reference mismatch at {level} level")]
    TerminusMismatch { level: HierarchyLevel },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ChainReaderError {
    /// Coincidence-check classification of this error.
    pub fn kind(&self) -> CoincidenceFailure {
        match self {
            ChainReaderError::SliceNotSynced { .. } => CoincidenceFailure::SliceNotSynced,
            ChainReaderError::NotCanonicalDominant => CoincidenceFailure::NotCanonicalDominant,
            _ => CoincidenceFailure::Other,
        }
    }
}

/// Fork choice error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForkChoiceError {
    /// A header argument was absent. Caller bug, never retried.
    #[error("Reorg decision requested on a null header")]
    InvalidInput,

    /// The current head's total difficulty is not stored yet.
    #[error("Missing total difficulty for block {hash:?} at number {number}")]
    MissingData { hash: Hash, number: u64 },

    /// Collaborator failure, passed through verbatim.
    #[error(transparent)]
    ChainReader(#[from] ChainReaderError),

    /// The OS entropy source could not seed the tie-breaker.
    #[error("Failed to initialize random seed: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ForkChoiceError {
    /// Whether the caller should try again after further sync.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ForkChoiceError::MissingData { .. }
                | ForkChoiceError::ChainReader(ChainReaderError::MissingAncestor(_))
                | ForkChoiceError::ChainReader(ChainReaderError::Storage(_))
        )
    }
}

/// Result type for fork choice operations
pub type ForkChoiceResult<T> = Result<T, ForkChoiceError>;
