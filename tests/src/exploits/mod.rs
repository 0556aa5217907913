//! # Attack Simulations
//!
//! Adversarial scenarios against the reorg rule.

pub mod selfish_mining;
