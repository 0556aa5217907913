//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Hierarchy**: `HierarchyLevel`, `HIERARCHY_DEPTH`
//! - **Chain**: `BlockHeader`, `Block`

use crate::errors::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CLUSTER A: THE HIERARCHY
// =============================================================================

/// A 32-byte Keccak-256 hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Number of nested chain levels.
pub const HIERARCHY_DEPTH: usize = 3;

/// One of the nested chain scopes, coarsest first.
///
/// The discriminant doubles as the index into per-level arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HierarchyLevel {
    /// The dominant chain.
    Prime = 0,
    /// Middle level.
    Region = 1,
    /// Finest level.
    Zone = 2,
}

impl HierarchyLevel {
    /// All levels, coarsest to finest.
    pub const ALL: [HierarchyLevel; HIERARCHY_DEPTH] = [
        HierarchyLevel::Prime,
        HierarchyLevel::Region,
        HierarchyLevel::Zone,
    ];

    /// Position of this level in per-level arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Level for an array index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True for the coarsest (dominant) level.
    pub fn is_dominant(self) -> bool {
        self == HierarchyLevel::Prime
    }
}

impl FromStr for HierarchyLevel {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prime" | "0" => Ok(HierarchyLevel::Prime),
            "region" | "1" => Ok(HierarchyLevel::Region),
            "zone" | "2" => Ok(HierarchyLevel::Zone),
            _ => Err(TypeError::InvalidLevelName(s.to_string())),
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HierarchyLevel::Prime => "prime",
            HierarchyLevel::Region => "region",
            HierarchyLevel::Zone => "zone",
        };
        f.write_str(name)
    }
}

// =============================================================================
// CLUSTER B: THE CHAIN
// =============================================================================

/// Block header as seen by fork choice.
///
/// Difficulty is deliberately absent: cumulative work is resolved through
/// the chain reader, never read off the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Parent hash at each level, coarsest first.
    pub parent_hash: [Hash; HIERARCHY_DEPTH],
    /// Block number at each level, coarsest first.
    pub number: [u64; HIERARCHY_DEPTH],
    /// Unix timestamp when the block was mined.
    pub timestamp: u64,
    /// Beneficiary of the block reward.
    pub coinbase: Address,
    /// Arbitrary miner data.
    pub extra_data: Vec<u8>,
}

impl BlockHeader {
    /// Compute the Keccak-256 hash of this header.
    pub fn hash(&self) -> Hash {
        use sha3::{Digest, Keccak256};
        let mut hasher = Keccak256::new();
        for parent in &self.parent_hash {
            hasher.update(parent);
        }
        for number in &self.number {
            hasher.update(number.to_le_bytes());
        }
        hasher.update(self.timestamp.to_le_bytes());
        hasher.update(self.coinbase);
        hasher.update(&self.extra_data);
        let result = hasher.finalize();
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Block number at the given level.
    pub fn number_at(&self, level: HierarchyLevel) -> u64 {
        self.number[level.index()]
    }

    /// Parent hash at the given level.
    pub fn parent_hash_at(&self, level: HierarchyLevel) -> Hash {
        self.parent_hash[level.index()]
    }
}

/// A block: header plus the hashes of its transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    pub header: BlockHeader,
    pub transaction_hashes: Vec<Hash>,
}

impl Block {
    pub fn new(header: BlockHeader) -> Self {
        Self {
            header,
            transaction_hashes: Vec::new(),
        }
    }

    /// Get the hash of this block
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }
}
