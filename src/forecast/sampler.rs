use std::collections::{BTreeMap, BTreeSet};

use crate::rng::DeterministicGenerator;
use crate::types::forecast_bundle::SamplingError;
use crate::types::identifiers::ChampionId;

pub type WeightMap = BTreeMap<ChampionId, f64>;

/// Outcome of a draw: picks in draw order, plus what is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedDraw<T: Ord> {
    pub selected: Vec<T>,
    pub remaining: BTreeSet<T>,
}

/// Draw up to `count` candidates without replacement.
///
/// Every iteration recomputes the weights of the remaining candidates and lays
/// them out as contiguous sub-ranges of `[0, 1)` in ascending candidate order,
/// so the distribution is renormalized after each removal. When all remaining
/// weights are zero the draw is uniform. Drawing stops early if the candidates
/// run out.
pub fn draw_without_replacement<T, F>(
    count: usize,
    candidates: BTreeSet<T>,
    mut weight_of: F,
    rng: &mut DeterministicGenerator,
) -> Result<WeightedDraw<T>, SamplingError>
where
    T: Ord,
    F: FnMut(&T) -> f64,
{
    let mut remaining: Vec<T> = candidates.into_iter().collect();
    let mut selected = Vec::with_capacity(count.min(remaining.len()));
    let mut uniform_draws = 0usize;

    while selected.len() < count && !remaining.is_empty() {
        let weights: Vec<f64> = remaining.iter().map(&mut weight_of).collect();
        if weights.iter().all(|w| *w == 0.0) {
            uniform_draws += 1;
        }
        let index = pick_weighted(&weights, rng)?;
        selected.push(remaining.remove(index));
    }

    if uniform_draws > 0 {
        tracing::warn!(
            uniform_draws,
            drawn = selected.len(),
            "all remaining weights were zero, drew uniformly"
        );
    }

    Ok(WeightedDraw {
        selected,
        remaining: remaining.into_iter().collect(),
    })
}

/// Draw one fraction and return the index whose cumulative range contains it.
///
/// Bounds are `prefix_sum / total`, which is monotonic; the last band is
/// closed at `1.0` so rounding can never leave the top of the interval
/// uncovered. An all-zero slice is treated as uniform.
pub fn pick_weighted(
    weights: &[f64],
    rng: &mut DeterministicGenerator,
) -> Result<usize, SamplingError> {
    if let Some(&weight) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(SamplingError::InvalidWeight { weight });
    }

    let mut total = weights.iter().fold(0.0_f64, |acc, w| acc + w);
    let uniform = total == 0.0;
    if uniform {
        total = weights.len() as f64;
    }

    let fraction = rng.next_fraction();
    let last = weights.len().saturating_sub(1);
    let mut cumulative = 0.0;

    for (i, &weight) in weights.iter().enumerate() {
        cumulative += if uniform { 1.0 } else { weight };
        if i == last {
            if fraction <= 1.0 {
                return Ok(i);
            }
        } else if fraction < cumulative / total {
            return Ok(i);
        }
    }

    Err(SamplingError::Inconsistency {
        fraction,
        total_weight: total,
    })
}
