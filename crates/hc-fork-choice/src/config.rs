//! Chain and fork-choice configuration from environment variables.

use crate::domain::{ForkChoiceError, ForkChoiceResult};
use shared_types::HierarchyLevel;
use std::env;

/// Chain configuration served by the chain reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Network chain id
    pub chain_id: u64,

    /// Level this node runs at. Block numbers are read at this level.
    pub context: HierarchyLevel,

    /// Region index within prime
    pub region: u8,

    /// Zone index within the region
    pub zone: u8,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            context: HierarchyLevel::Zone,
            region: 0,
            zone: 0,
        }
    }
}

impl ChainConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HC_CHAIN_ID`: Chain id (default: 1)
    /// - `HC_CONTEXT`: `prime`, `region` or `zone` (default: zone)
    /// - `HC_REGION`: Region index (default: 0)
    /// - `HC_ZONE`: Zone index (default: 0)
    pub fn from_env() -> ForkChoiceResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> ForkChoiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            chain_id: parse_or(&lookup, "HC_CHAIN_ID", defaults.chain_id)?,
            context: match lookup("HC_CONTEXT") {
                Some(v) => v
                    .parse()
                    .map_err(|e| ForkChoiceError::Config(format!("HC_CONTEXT: {e}")))?,
                None => defaults.context,
            },
            region: parse_or(&lookup, "HC_REGION", defaults.region)?,
            zone: parse_or(&lookup, "HC_ZONE", defaults.zone)?,
        })
    }
}

/// Fork choice tunables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForkChoiceConfig {
    /// Re-validate reorgs against the dominant chain below prime.
    /// Off by default.
    pub dominant_recheck: bool,
}

impl ForkChoiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HC_DOMINANT_RECHECK`: Enable the dominant-chain re-check (default: false)
    pub fn from_env() -> ForkChoiceResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> ForkChoiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dominant_recheck = lookup("HC_DOMINANT_RECHECK")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self { dominant_recheck })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> ForkChoiceResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|e| ForkChoiceError::Config(format!("{key}: {e}"))),
        None => Ok(default),
    }
}
