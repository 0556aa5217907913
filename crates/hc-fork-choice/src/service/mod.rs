//! Fork Choice Service - Core decision logic
//!
//! # Architecture
//! - Total-difficulty fork choice generalised to a tuple of difficulties,
//!   one per hierarchy level, ordered by the chain reader's `hlcr`
//! - Selfish-mining resistant tie break on exactly equal work
//! - Coincidence validation that absorbs expected desync between levels

use crate::adapters::{DominantReorgCheck, SeededRandomSource};
use crate::config::ForkChoiceConfig;
use crate::domain::{
    resolve_tie, CoincidenceFailure, ForkChoiceError, ForkChoiceResult, TieBreakInput,
};
use crate::metrics;
use crate::ports::{ChainReader, ForkChoiceApi, RandomSource, ReorgPostCheck};
use shared_types::BlockHeader;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Local preference over headers.
///
/// Miners use it to favour their own blocks on an exact tie. Light clients
/// pass `None`.
pub type PreservePredicate = Arc<dyn Fn(&BlockHeader) -> bool + Send + Sync>;

/// Fork chooser over hierarchical total difficulty.
///
/// Created once at node startup. Holds no chain state of its own; the only
/// mutable state is the tie-break random source, which serialises its own
/// draws.
pub struct ForkChoice<C: ChainReader> {
    chain: Arc<C>,
    rand: Box<dyn RandomSource>,
    preserve: Option<PreservePredicate>,
    post_check: Option<Box<dyn ReorgPostCheck>>,
    config: ForkChoiceConfig,
}

impl<C: ChainReader> ForkChoice<C> {
    /// Create a fork chooser with a tie-breaker seeded from OS entropy.
    ///
    /// # Errors
    /// `EntropyUnavailable` if the seed cannot be drawn. This is fatal:
    /// the node must not start without an unbiased tie-breaker.
    pub fn new(chain: Arc<C>, preserve: Option<PreservePredicate>) -> ForkChoiceResult<Self> {
        let rand = SeededRandomSource::from_entropy()?;
        Ok(Self::with_random_source(chain, preserve, Box::new(rand)))
    }

    /// Create a fork chooser with an injected random source.
    pub fn with_random_source(
        chain: Arc<C>,
        preserve: Option<PreservePredicate>,
        rand: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            chain,
            rand,
            preserve,
            post_check: None,
            config: ForkChoiceConfig::default(),
        }
    }

    /// Apply configuration.
    ///
    /// The post-check slot follows `dominant_recheck`: set installs the
    /// dominant-chain re-check, clear removes any post-check. Call
    /// `with_post_check` afterwards to install a custom check.
    pub fn with_config(mut self, config: ForkChoiceConfig) -> Self {
        self.post_check = if config.dominant_recheck {
            Some(Box::new(DominantReorgCheck))
        } else {
            None
        };
        self.config = config;
        self
    }

    /// Install a post-check that may overrule sub-prime reorg decisions.
    pub fn with_post_check(mut self, check: Box<dyn ReorgPostCheck>) -> Self {
        self.post_check = Some(check);
        self
    }

    pub fn config(&self) -> &ForkChoiceConfig {
        &self.config
    }

    fn preferred(&self, header: &BlockHeader) -> bool {
        self.preserve.as_ref().is_some_and(|preserve| preserve(header))
    }
}

impl<C: ChainReader> ForkChoiceApi for ForkChoice<C> {
    fn reorg_needed(
        &self,
        current: Option<&BlockHeader>,
        candidate: Option<&BlockHeader>,
    ) -> ForkChoiceResult<bool> {
        let (Some(current), Some(candidate)) = (current, candidate) else {
            return Err(ForkChoiceError::InvalidInput);
        };

        let context = self.chain.config().context;
        let current_number = current.number_at(context);
        let candidate_number = candidate.number_at(context);

        let current_hash = current.hash();
        let local_td = self.chain.get_td(&current_hash, current_number);

        trace!(candidate_number, "Calculating external total difficulty");
        let extern_td = self.chain.calc_td(candidate)?;

        let Some(local_td) = local_td else {
            return Err(ForkChoiceError::MissingData {
                hash: current_hash,
                number: current_number,
            });
        };

        // Higher hierarchical work wins outright. On exactly equal work the
        // tie break reduces the advantage of selfish mining.
        // See http://www.cs.cornell.edu/~ie53/publications/btcProcFC.pdf
        let mut reorg = self.chain.hlcr(&local_td, &extern_td);
        let tied = extern_td.is_tied_with(&local_td);

        if !reorg && tied {
            let outcome = resolve_tie(TieBreakInput {
                current_number,
                candidate_number,
                preferences: || (self.preferred(current), self.preferred(candidate)),
                coin_flip: || self.rand.coin_flip(),
            });
            metrics::record_tie_break(outcome.rule.as_str());
            debug!(
                reorg = outcome.reorg,
                rule = outcome.rule.as_str(),
                current_number,
                candidate_number,
                "Settled equal-difficulty tie"
            );
            reorg = outcome.reorg;
        }

        if reorg && !context.is_dominant() {
            if let Some(check) = &self.post_check {
                reorg = check.check(&*self.chain, candidate)?;
            }
        }

        debug!(
            reorg,
            tied,
            %context,
            current_number,
            candidate_number,
            "Computed reorg decision"
        );
        metrics::record_reorg_decision(reorg);
        Ok(reorg)
    }

    fn untwist_and_trim(&self, header: &BlockHeader) -> ForkChoiceResult<()> {
        let order = self.chain.get_difficulty_order(header)?;

        let err = match self.chain.pccrc(header, order) {
            Ok(_) => {
                metrics::record_ancestry_check("ok");
                return Ok(());
            }
            Err(err) => err,
        };

        match err.kind() {
            CoincidenceFailure::SliceNotSynced => {
                debug!(hash = ?header.hash(), %order, error = %err, "Slice not synced, do nothing");
                metrics::record_ancestry_check("not_synced");
                Ok(())
            }
            CoincidenceFailure::NotCanonicalDominant => {
                debug!(hash = ?header.hash(), %order, "Header not built on canonical dominant chain");
                metrics::record_ancestry_check("not_canonical_dom");
                Ok(())
            }
            CoincidenceFailure::Other => {
                warn!(hash = ?header.hash(), %order, error = %err, "Coincident reference check failed");
                metrics::record_ancestry_check("rejected");
                Err(err.into())
            }
        }
    }
}
