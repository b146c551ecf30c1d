use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::ChampionId;

/// One observed rotation: an unordered set of champions.
///
/// Duplicate ids collapse on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation {
    champions: BTreeSet<ChampionId>,
}

impl Rotation {
    pub fn new<I, T>(champions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ChampionId>,
    {
        Rotation {
            champions: champions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn contains(&self, id: &ChampionId) -> bool {
        self.champions.contains(id)
    }
}

impl<T: Into<ChampionId>> FromIterator<T> for Rotation {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Rotation::new(iter)
    }
}
