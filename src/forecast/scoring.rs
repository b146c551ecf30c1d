use std::collections::{BTreeMap, BTreeSet};

use crate::forecast::sampler::{draw_without_replacement, WeightMap, WeightedDraw};
use crate::rng::DeterministicGenerator;
use crate::rotation::RotationHistory;
use crate::types::forecast_bundle::SamplingError;
use crate::types::identifiers::ChampionId;

/// A weighted selection pass over the still-available pool.
pub trait Scorer {
    fn weights(
        &self,
        pool: &BTreeSet<ChampionId>,
        history: &RotationHistory,
        rng: &mut DeterministicGenerator,
    ) -> WeightMap;

    /// Score the pool once, then draw `quota` champions against those weights.
    /// A zero quota leaves the generator untouched.
    fn select(
        &self,
        quota: usize,
        pool: BTreeSet<ChampionId>,
        history: &RotationHistory,
        rng: &mut DeterministicGenerator,
    ) -> Result<WeightedDraw<ChampionId>, SamplingError> {
        if quota == 0 {
            return Ok(WeightedDraw {
                selected: Vec::new(),
                remaining: pool,
            });
        }
        let weights = self.weights(&pool, history, rng);
        draw_without_replacement(
            quota,
            pool,
            |id| weights.get(id).copied().unwrap_or(0.0),
            rng,
        )
    }
}

/// Favors "due" champions: those whose time since last appearance is close to
/// their most common gap between appearances.
///
/// weight = 1 / (1 + |mode_gap - current_gap|), or 0 for never-seen champions.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalAffinityScorer;

impl IntervalAffinityScorer {
    pub fn weight(
        &self,
        id: &ChampionId,
        history: &RotationHistory,
        rng: &mut DeterministicGenerator,
    ) -> f64 {
        let indices = history.appearance_indices(id);
        let gaps: Vec<usize> = indices.windows(2).map(|w| w[1] - w[0]).collect();

        let Some(mode) = mode_with_tiebreak(&gaps, rng) else {
            return 0.0;
        };
        let last_seen = indices.last().copied().unwrap_or(0);
        let current_gap = history.len() - last_seen;

        1.0 / (1.0 + mode.abs_diff(current_gap) as f64)
    }
}

impl Scorer for IntervalAffinityScorer {
    fn weights(
        &self,
        pool: &BTreeSet<ChampionId>,
        history: &RotationHistory,
        rng: &mut DeterministicGenerator,
    ) -> WeightMap {
        // Ascending id order fixes the order of tie-break draws.
        pool.iter()
            .map(|id| (id.clone(), self.weight(id, history, rng)))
            .collect()
    }
}

/// Favors champions that appeared most often overall.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrequencyScorer;

impl Scorer for FrequencyScorer {
    fn weights(
        &self,
        pool: &BTreeSet<ChampionId>,
        history: &RotationHistory,
        _rng: &mut DeterministicGenerator,
    ) -> WeightMap {
        pool.iter()
            .map(|id| (id.clone(), history.occurrences(id) as f64))
            .collect()
    }
}

/// Unweighted final pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFiller;

impl RandomFiller {
    pub fn select(
        &self,
        quota: usize,
        pool: BTreeSet<ChampionId>,
        rng: &mut DeterministicGenerator,
    ) -> WeightedDraw<ChampionId> {
        let mut remaining: Vec<ChampionId> = pool.into_iter().collect();
        let mut selected = Vec::with_capacity(quota.min(remaining.len()));

        while selected.len() < quota && !remaining.is_empty() {
            let index = rng.next_int(remaining.len());
            selected.push(remaining.remove(index));
        }

        WeightedDraw {
            selected,
            remaining: remaining.into_iter().collect(),
        }
    }
}

/// Most frequent value. Ties are listed ascending and one is drawn uniformly;
/// the generator is only consulted when there is a real tie.
pub fn mode_with_tiebreak(values: &[usize], rng: &mut DeterministicGenerator) -> Option<usize> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let top = counts.values().copied().max()?;
    let tied: Vec<usize> = counts
        .into_iter()
        .filter(|&(_, count)| count == top)
        .map(|(value, _)| value)
        .collect();

    match tied.len() {
        1 => Some(tied[0]),
        n => Some(tied[rng.next_int(n)]),
    }
}
