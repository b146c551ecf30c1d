//! Deterministic champion rotation forecasting.
//!
//! `rotation-forecast` predicts the next champion rotation from the observed
//! history: a weighted size draw, then three selection passes (interval
//! affinity, raw frequency, uniform fill) against a shrinking pool. It also
//! provides a seeded top-k selector for preview subsets. All operations are
//! deterministic: identical inputs always produce identical outputs,
//! byte-for-byte.

pub mod forecast;
pub mod preview;
pub mod rng;
pub mod rotation;
pub mod types;
