use sha2::{Digest, Sha256};

/// Concatenate seed parts in order, with no separator, then append `auxiliary`.
pub fn seed_material<I, S>(parts: I, auxiliary: Option<&str>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut material = String::new();
    for part in parts {
        material.push_str(part.as_ref());
    }
    if let Some(aux) = auxiliary {
        material.push_str(aux);
    }
    material
}

/// Derive a reproducible 64-bit seed from identifying strings.
///
/// The material is hashed with SHA-256 and the first 8 digest bytes are read
/// as a big-endian integer. The hash only spreads bits; it is not a secrecy
/// boundary. Any input is valid, including no parts at all.
pub fn derive_seed<I, S>(parts: I, auxiliary: Option<&str>) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let material = seed_material(parts, auxiliary);

    let mut hasher = Sha256::new();
    hasher.update(material.as_bytes());
    let digest = hasher.finalize();

    digest[..8]
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}
