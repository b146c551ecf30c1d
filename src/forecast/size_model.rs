use crate::forecast::config::ForecastConfig;
use crate::forecast::sampler::pick_weighted;
use crate::rng::DeterministicGenerator;
use crate::rotation::RotationHistory;
use crate::types::forecast_bundle::{Allocation, SamplingError};

/// Predicts the next rotation size and splits it into pass quotas.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationSizeModel {
    interval_share: f64,
    frequency_share: f64,
}

impl RotationSizeModel {
    pub fn new(config: &ForecastConfig) -> Self {
        Self {
            interval_share: config.interval_share,
            frequency_share: config.frequency_share,
        }
    }

    /// Draw a size from the observed sizes, each weighted by `occurrences^1.5`.
    ///
    /// Distinct sizes are laid out ascending. The weight is computed as
    /// `n * sqrt(n)` so it is correctly rounded on every platform.
    pub fn predict_size(
        &self,
        history: &RotationHistory,
        rng: &mut DeterministicGenerator,
    ) -> Result<usize, SamplingError> {
        let histogram = history.size_histogram();
        if histogram.is_empty() {
            return Err(SamplingError::NoSizeCandidate);
        }

        let (sizes, weights): (Vec<usize>, Vec<f64>) = histogram
            .into_iter()
            .map(|(size, occurrences)| {
                let n = occurrences as f64;
                (size, n * n.sqrt())
            })
            .unzip();

        let index = pick_weighted(&weights, rng)?;
        Ok(sizes[index])
    }

    /// Round each share independently; the random quota absorbs the remainder.
    pub fn allocate(&self, size: usize) -> Allocation {
        let interval = ((size as f64 * self.interval_share).round() as usize).min(size);
        let frequency =
            ((size as f64 * self.frequency_share).round() as usize).min(size - interval);

        Allocation {
            interval,
            frequency,
            random: size - interval - frequency,
        }
    }
}

impl Default for RotationSizeModel {
    fn default() -> Self {
        Self::new(&ForecastConfig::v0())
    }
}
