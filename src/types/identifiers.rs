use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque champion token. Case-sensitive, compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionId(String);

impl ChampionId {
    pub fn new(id: impl Into<String>) -> Self {
        ChampionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChampionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ChampionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChampionId {
    fn from(s: &str) -> Self {
        ChampionId(s.to_string())
    }
}

impl From<String> for ChampionId {
    fn from(s: String) -> Self {
        ChampionId(s)
    }
}

/// Content hash of the seed material, rendered as `sha256:<hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedDigest(String);

impl SeedDigest {
    pub fn from_material(material: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(material);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SeedDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
