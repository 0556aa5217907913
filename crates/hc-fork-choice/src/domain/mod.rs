//! Domain layer for the fork-choice core
//!
//! - error: collaborator and core error taxonomy
//! - termini: coincident reference check record
//! - tie_break: equal-difficulty tie break rule

mod error;
mod termini;
mod tie_break;

pub use error::*;
pub use termini::*;
pub use tie_break::*;
