use crate::types::forecast_bundle::ConfigError;

// Key point:
// Serializable
// Comparable
// Explicit defaults
// The random share is never stored: it is whatever the other two leave.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ForecastConfig {
    pub version: String,
    pub hash_algorithm: String,
    pub interval_share: f64,
    pub frequency_share: f64,
}

impl ForecastConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
            interval_share: 0.6,
            frequency_share: 0.3,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_unit = |share: f64| (0.0..=1.0).contains(&share);
        if in_unit(self.interval_share)
            && in_unit(self.frequency_share)
            && self.interval_share + self.frequency_share <= 1.0
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidShares {
                interval: self.interval_share,
                frequency: self.frequency_share,
            })
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::v0()
    }
}
