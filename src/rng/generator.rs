/// Weyl increment (2^64 / golden ratio, odd).
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Additive (Weyl-sequence) generator.
///
/// State advances by [`GOLDEN_GAMMA`] modulo 2^64 on every draw, so the state
/// sequence has period 2^64 and never repeats earlier. It is built for
/// reproducibility, not statistical strength.
///
/// Derived draws use fixed mappings which every golden value depends on:
/// - [`next_fraction`](Self::next_fraction): top 53 bits of the raw value times 2^-53.
/// - [`next_int`](Self::next_int): Lemire multiply-shift with rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterministicGenerator {
    state: u64,
}

impl DeterministicGenerator {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current state, without advancing.
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance the state and return it.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        self.state
    }

    /// Uniform fraction in `[0, 1)`.
    #[inline]
    pub fn next_fraction(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_raw() >> 11) as f64 * SCALE
    }

    /// Uniform integer in `0..bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_int(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be non-zero");
        let bound = bound as u64;

        let mut m = u128::from(self.next_raw()) * u128::from(bound);
        if (m as u64) < bound {
            let threshold = bound.wrapping_neg() % bound;
            while (m as u64) < threshold {
                m = u128::from(self.next_raw()) * u128::from(bound);
            }
        }
        (m >> 64) as usize
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_int(i + 1);
            slice.swap(i, j);
        }
    }
}
