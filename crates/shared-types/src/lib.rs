//! # Shared Types Crate
//!
//! Entities shared between the fork-choice core and the chain collaborators
//! that feed it.
//!
//! ## Design Principles
//!
//! - **One position per level**: a header sits at a position in every
//!   hierarchy level at once (prime, region, zone), so numbers and parent
//!   links are stored per level.
//! - **Opaque difficulty**: cumulative work is an unbounded integer per level.
//!   Ordering of difficulty tuples is the collaborator's business; only the
//!   all-components-equal check lives here.

pub mod difficulty;
pub mod entities;
pub mod errors;

pub use difficulty::DifficultyTuple;
pub use entities::*;
pub use errors::*;
