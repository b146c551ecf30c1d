use crate::rng::{derive_seed, DeterministicGenerator};

/// Picks a small, stable "preview" subset of a list.
///
/// The seed comes from the elements themselves (concatenated in order) plus
/// an optional key, so the same list always yields the same preview.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeededTopKSelector;

impl SeededTopKSelector {
    /// Shuffle `from` deterministically and keep the first `min(k, len)` items.
    pub fn select<T>(&self, from: &[T], k: usize, seed_key: Option<&str>) -> Vec<T>
    where
        T: AsRef<str> + Clone,
    {
        let mut rng = DeterministicGenerator::new(derive_seed(from, seed_key));

        let mut items = from.to_vec();
        rng.shuffle(&mut items);
        items.truncate(k);
        items
    }
}
