use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rotation::Rotation;
use crate::types::identifiers::ChampionId;

/// Observed rotations, newest first.
///
/// Ordering is the caller's responsibility; nothing here re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationHistory {
    rotations: Vec<Rotation>,
}

impl RotationHistory {
    pub fn newest_first(rotations: Vec<Rotation>) -> Self {
        RotationHistory { rotations }
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Number of rotations containing `id`.
    pub fn occurrences(&self, id: &ChampionId) -> usize {
        self.rotations.iter().filter(|r| r.contains(id)).count()
    }

    /// Appearance indices of `id`, oldest rotation = 1, newest = `len()`.
    ///
    /// Always starts with the implicit index 0 ("before any observed rotation").
    pub fn appearance_indices(&self, id: &ChampionId) -> Vec<usize> {
        let mut indices = vec![0];
        for (i, rotation) in self.rotations.iter().rev().enumerate() {
            if rotation.contains(id) {
                indices.push(i + 1);
            }
        }
        indices
    }

    /// Histogram of rotation sizes, keyed ascending by size.
    pub fn size_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for rotation in &self.rotations {
            *histogram.entry(rotation.len()).or_insert(0) += 1;
        }
        histogram
    }
}

impl FromIterator<Rotation> for RotationHistory {
    fn from_iter<I: IntoIterator<Item = Rotation>>(iter: I) -> Self {
        RotationHistory {
            rotations: iter.into_iter().collect(),
        }
    }
}
