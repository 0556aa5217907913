//! # Error Types
//!
//! Errors raised while building shared entities from untrusted input.

use thiserror::Error;

/// Errors produced when converting raw values into shared entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Level name not recognised.
    #[error("Invalid hierarchy level name: {0:?}")]
    InvalidLevelName(String),
}
