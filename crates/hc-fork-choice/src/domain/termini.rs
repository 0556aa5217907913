//! Coincident reference termini
//!
//! The pass record of a previous-coincident-reference check: for each level,
//! the hash at which the header's ancestry meets the locally canonical chain.
//! Produced fresh by the chain reader on every check and never retained.

use shared_types::{Hash, HIERARCHY_DEPTH};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoincidenceTermini {
    /// Terminus hash per level, coarsest first.
    pub termini: [Hash; HIERARCHY_DEPTH],
}

impl CoincidenceTermini {
    pub fn new(termini: [Hash; HIERARCHY_DEPTH]) -> Self {
        Self { termini }
    }
}
