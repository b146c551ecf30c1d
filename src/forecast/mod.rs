pub mod config;
pub mod sampler;
pub mod scoring;
pub mod size_model;

use std::collections::BTreeSet;

use crate::rng::{derive_seed, seed_material, DeterministicGenerator};
use crate::rotation::RotationHistory;
use crate::types::forecast_bundle::{
	ConfigError, ForecastReport, PassBreakdown, PredictionError,
};
use crate::types::identifiers::{ChampionId, SeedDigest};
pub use config::ForecastConfig;
pub use sampler::{draw_without_replacement, pick_weighted, WeightMap, WeightedDraw};
pub use scoring::{
	mode_with_tiebreak, FrequencyScorer, IntervalAffinityScorer, RandomFiller, Scorer,
};
pub use size_model::RotationSizeModel;

/// Predicts the next rotation from the observed history.
///
/// Output depends only on `(pool, history, seed_key)` and the config; every
/// call builds its own generator, so a forecaster can be shared across threads.
#[derive(Debug, Clone)]
pub struct RotationForecaster {
	size_model: RotationSizeModel,
}

impl Default for RotationForecaster {
	fn default() -> Self {
		Self {
			size_model: RotationSizeModel::new(&ForecastConfig::v0()),
		}
	}
}

impl RotationForecaster {
	pub fn new(config: ForecastConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			size_model: RotationSizeModel::new(&config),
		})
	}

	/// Sorted predicted champion ids.
	pub fn predict(
		&self,
		pool: &BTreeSet<ChampionId>,
		history: &RotationHistory,
		seed_key: &str,
	) -> Result<Vec<ChampionId>, PredictionError> {
		Ok(self.forecast(pool, history, seed_key)?.champions)
	}

	pub fn forecast(
		&self,
		pool: &BTreeSet<ChampionId>,
		history: &RotationHistory,
		seed_key: &str,
	) -> Result<ForecastReport, PredictionError> {
		// 0. Seed from the key alone; history only shapes the weights
		let seed = derive_seed([seed_key], None);
		let seed_digest = SeedDigest::from_material(seed_material([seed_key], None).as_bytes());
		let mut rng = DeterministicGenerator::new(seed);

		tracing::debug!(
			seed_key,
			pool_size = pool.len(),
			history_length = history.len(),
			"forecast started"
		);

		// 1. Size Phase
		let predicted_size = self.size_model.predict_size(history, &mut rng)?;
		if pool.len() < predicted_size {
			return Err(PredictionError::InsufficientCandidates {
				predicted: predicted_size,
				available: pool.len(),
			});
		}
		let allocation = self.size_model.allocate(predicted_size);
		debug_assert_eq!(allocation.total(), predicted_size);

		tracing::debug!(
			predicted_size,
			interval = allocation.interval,
			frequency = allocation.frequency,
			random = allocation.random,
			"rotation size predicted"
		);

		// 2. Selection Phase, each pass on what the previous one left
		let interval = IntervalAffinityScorer.select(allocation.interval, pool.clone(), history, &mut rng)?;
		let frequency = FrequencyScorer.select(allocation.frequency, interval.remaining, history, &mut rng)?;
		let random = RandomFiller.select(allocation.random, frequency.remaining, &mut rng);

		let passes = PassBreakdown {
			interval: interval.selected,
			frequency: frequency.selected,
			random: random.selected,
		};

		tracing::debug!(
			interval = ?passes.interval,
			frequency = ?passes.frequency,
			random = ?passes.random,
			"selection passes complete"
		);

		// 3. Ordering Phase
		let mut champions: Vec<ChampionId> = passes
			.interval
			.iter()
			.chain(&passes.frequency)
			.chain(&passes.random)
			.cloned()
			.collect();
		champions.sort();

		debug_assert_eq!(champions.len(), predicted_size);
		debug_assert!(champions.windows(2).all(|w| w[0] < w[1]));

		Ok(ForecastReport {
			seed_key: seed_key.to_string(),
			seed_digest,
			seed,
			pool_size: pool.len(),
			history_length: history.len(),
			predicted_size,
			allocation,
			passes,
			champions,
		})
	}
}
