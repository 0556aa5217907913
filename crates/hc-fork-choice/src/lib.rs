//! # hc-fork-choice
//!
//! Fork choice and hierarchical coincidence validation for a multi-level
//! (prime / region / zone) chain.
//!
//! ## Architecture
//!
//! The block import pipeline calls two operations for every new header:
//!
//! ```text
//! header ──→ untwist_and_trim ──ok──→ reorg_needed(current, header) ──→ apply / keep
//!                 │
//!                 └── genuine ancestry violation ──→ reject
//! ```
//!
//! Both are synchronous and read the chain only through the `ChainReader`
//! port. No chain state is mutated here.
//!
//! ### Reorg rule
//!
//! Total difficulty is a tuple, one component per level. The chain reader's
//! hierarchical compare decides whether the candidate is heavier. On exactly
//! equal work at every level a tie break applies: a lower candidate wins, a
//! locally preferred head is never abandoned, a preferred candidate wins,
//! and otherwise a fair coin decides.
//!
//! ### Ancestry check
//!
//! A coincidence-check failure because a coarser level is not synced yet,
//! or because the header is not (yet) on the canonical dominant chain, is
//! expected while levels catch up with each other. Both are logged and
//! accepted. Every other failure rejects the header.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hc_fork_choice::{ForkChoice, ForkChoiceApi};
//!
//! let fork_choice = ForkChoice::new(chain_reader, Some(preserve))?;
//!
//! fork_choice.untwist_and_trim(&header)?;
//! if fork_choice.reorg_needed(Some(&head), Some(&header))? {
//!     // reorganise to header
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{DominantReorgCheck, FixedRandomSource, InMemoryChainReader, SeededRandomSource};
pub use config::{ChainConfig, ForkChoiceConfig};
pub use domain::{
    ChainReaderError, CoincidenceFailure, CoincidenceTermini, ForkChoiceError, ForkChoiceResult,
};
pub use ports::{ChainReader, ForkChoiceApi, RandomSource, ReorgPostCheck};
pub use service::{ForkChoice, PreservePredicate};
