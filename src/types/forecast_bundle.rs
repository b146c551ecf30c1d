use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ChampionId, SeedDigest};

/// Split of a predicted rotation size across the three selection passes.
/// `interval + frequency + random` always equals the predicted size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub interval: usize,
    pub frequency: usize,
    pub random: usize,
}

impl Allocation {
    pub fn total(&self) -> usize {
        self.interval + self.frequency + self.random
    }
}

/// Champions picked by each pass, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassBreakdown {
    pub interval: Vec<ChampionId>,
    pub frequency: Vec<ChampionId>,
    pub random: Vec<ChampionId>,
}

impl PassBreakdown {
    pub fn len(&self) -> usize {
        self.interval.len() + self.frequency.len() + self.random.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Full, explainable result of a forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub seed_key: String,
    pub seed_digest: SeedDigest,
    pub seed: u64,

    pub pool_size: usize,
    pub history_length: usize,

    pub predicted_size: usize,
    pub allocation: Allocation,
    pub passes: PassBreakdown,

    /// Sorted ascending by id.
    pub champions: Vec<ChampionId>,
}

/// Invariant violations raised while sampling. Not retryable: the same
/// inputs reproduce the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    #[error("Drawn fraction {fraction} fell outside every candidate range (total weight {total_weight})")]
    Inconsistency { fraction: f64, total_weight: f64 },

    #[error("Invalid candidate weight: {weight}")]
    InvalidWeight { weight: f64 },

    #[error("No rotation size to predict from: history is empty")]
    NoSizeCandidate,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("Prediction failed: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Predicted {predicted} champions but only {available} are available")]
    InsufficientCandidates { predicted: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid pass shares: interval {interval}, frequency {frequency}")]
    InvalidShares { interval: f64, frequency: f64 },
}
