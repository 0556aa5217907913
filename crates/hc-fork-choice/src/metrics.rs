//! # Fork Choice Metrics
//!
//! Prometheus metrics for monitoring fork-choice decisions.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! hc-fork-choice = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `fork_choice_reorg_decisions_total` - Reorg decisions (by outcome)
//! - `fork_choice_tie_breaks_total` - Equal-difficulty tie breaks (by rule)
//! - `fork_choice_ancestry_checks_total` - Ancestry checks (by result)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Reorg decisions, labeled `reorg` or `keep`
    pub static ref REORG_DECISIONS: IntCounterVec = register_int_counter_vec!(
        "fork_choice_reorg_decisions_total",
        "Total number of reorg decisions",
        &["outcome"]
    )
    .expect("Failed to create REORG_DECISIONS metric");

    /// Tie breaks, labeled by the rule that settled them
    pub static ref TIE_BREAKS: IntCounterVec = register_int_counter_vec!(
        "fork_choice_tie_breaks_total",
        "Total number of equal-difficulty tie breaks",
        &["rule"]
    )
    .expect("Failed to create TIE_BREAKS metric");

    /// Ancestry checks, labeled `ok`, `not_synced`, `not_canonical_dom` or `rejected`
    pub static ref ANCESTRY_CHECKS: IntCounterVec = register_int_counter_vec!(
        "fork_choice_ancestry_checks_total",
        "Total number of hierarchical ancestry checks",
        &["result"]
    )
    .expect("Failed to create ANCESTRY_CHECKS metric");
}

/// Record a reorg decision
#[cfg(feature = "metrics")]
pub fn record_reorg_decision(reorg: bool) {
    let outcome = if reorg { "reorg" } else { "keep" };
    REORG_DECISIONS.with_label_values(&[outcome]).inc();
}

/// Record which rule settled a tie
#[cfg(feature = "metrics")]
pub fn record_tie_break(rule: &str) {
    TIE_BREAKS.with_label_values(&[rule]).inc();
}

/// Record an ancestry check result
#[cfg(feature = "metrics")]
pub fn record_ancestry_check(result: &str) {
    ANCESTRY_CHECKS.with_label_values(&[result]).inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_reorg_decision(_reorg: bool) {}

#[cfg(not(feature = "metrics"))]
pub fn record_tie_break(_rule: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_ancestry_check(_result: &str) {}
