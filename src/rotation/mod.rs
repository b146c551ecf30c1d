pub mod history;
pub mod rotation;

pub use crate::types::identifiers::ChampionId;
pub use history::RotationHistory;
pub use rotation::Rotation;
