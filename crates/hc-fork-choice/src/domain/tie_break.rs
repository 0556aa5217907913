//! # Equal-Difficulty Tie Break
//!
//! Runs only when the hierarchical compare says "no reorg" and both tuples
//! carry exactly the same work at every level.
//!
//! ## Rule
//!
//! 1. Candidate lower than the current head: take the candidate.
//! 2. Same number: never leave a locally preferred head; take a preferred
//!    candidate; otherwise flip a fair coin.
//! 3. Candidate higher: keep the current head.
//!
//! Reference: Eyal & Sirer, "Majority is not Enough" (selfish mining).

/// Which branch of the rule decided a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreakRule {
    LowerNumber,
    HigherNumber,
    LocalPreferred,
    ExternalPreferred,
    CoinFlip,
}

impl TieBreakRule {
    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            TieBreakRule::LowerNumber => "lower_number",
            TieBreakRule::HigherNumber => "higher_number",
            TieBreakRule::LocalPreferred => "local_preferred",
            TieBreakRule::ExternalPreferred => "external_preferred",
            TieBreakRule::CoinFlip => "coin_flip",
        }
    }
}

/// Outcome of a tie break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieBreak {
    pub reorg: bool,
    pub rule: TieBreakRule,
}

/// Inputs to a tie break. Preferences are only evaluated for equal numbers.
pub struct TieBreakInput<P, F>
where
    P: FnOnce() -> (bool, bool),
    F: FnOnce() -> bool,
{
    pub current_number: u64,
    pub candidate_number: u64,
    /// Yields `(local_preferred, external_preferred)`.
    pub preferences: P,
    /// Fair coin. Drawn at most once.
    pub coin_flip: F,
}

/// Settle an equal-difficulty tie.
pub fn resolve_tie<P, F>(input: TieBreakInput<P, F>) -> TieBreak
where
    P: FnOnce() -> (bool, bool),
    F: FnOnce() -> bool,
{
    use std::cmp::Ordering::*;

    match input.candidate_number.cmp(&input.current_number) {
        Less => TieBreak {
            reorg: true,
            rule: TieBreakRule::LowerNumber,
        },
        Greater => TieBreak {
            reorg: false,
            rule: TieBreakRule::HigherNumber,
        },
        Equal => {
            let (local_preferred, external_preferred) = (input.preferences)();
            if local_preferred {
                TieBreak {
                    reorg: false,
                    rule: TieBreakRule::LocalPreferred,
                }
            } else if external_preferred {
                TieBreak {
                    reorg: true,
                    rule: TieBreakRule::ExternalPreferred,
                }
            } else {
                TieBreak {
                    reorg: (input.coin_flip)(),
                    rule: TieBreakRule::CoinFlip,
                }
            }
        }
    }
}
