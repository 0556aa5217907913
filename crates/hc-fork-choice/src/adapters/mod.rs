//! Adapters layer (Hexagonal Architecture)

pub mod dominant_check;
pub mod memory_chain;
pub mod random;

pub use dominant_check::DominantReorgCheck;
pub use memory_chain::InMemoryChainReader;
pub use random::{FixedRandomSource, SeededRandomSource};
