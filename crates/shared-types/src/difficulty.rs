//! # Difficulty Tuples
//!
//! Cumulative chain work, one unbounded integer per hierarchy level.
//!
//! Ordering two tuples is a hierarchical question answered by the chain
//! reader. This type only answers "are these exactly the same work?".

use crate::entities::{HierarchyLevel, HIERARCHY_DEPTH};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Total difficulty at each level, coarsest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DifficultyTuple([BigUint; HIERARCHY_DEPTH]);

impl DifficultyTuple {
    pub fn new(prime: BigUint, region: BigUint, zone: BigUint) -> Self {
        Self([prime, region, zone])
    }

    /// Convenience constructor for small values.
    pub fn from_u64(prime: u64, region: u64, zone: u64) -> Self {
        Self::new(prime.into(), region.into(), zone.into())
    }

    /// Work at a single level.
    pub fn get(&self, level: HierarchyLevel) -> &BigUint {
        &self.0[level.index()]
    }

    /// True when every level carries exactly the same work.
    pub fn is_tied_with(&self, other: &DifficultyTuple) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }
}
