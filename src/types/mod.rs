pub mod forecast_bundle;
pub mod identifiers;

pub use forecast_bundle::{
    Allocation, ConfigError, ForecastReport, PassBreakdown, PredictionError, SamplingError,
};
pub use identifiers::{ChampionId, SeedDigest};
