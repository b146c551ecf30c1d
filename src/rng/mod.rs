pub mod generator;
pub mod seed;

pub use generator::{DeterministicGenerator, GOLDEN_GAMMA};
pub use seed::{derive_seed, seed_material};
