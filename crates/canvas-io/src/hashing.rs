//! Fingerprint helpers over canonical JSON.
//!
//! A fingerprint identifies one exact schema value; the external storage
//! collaborator uses it for change detection and cache keys alongside the
//! `version`/`updatedAt` fields it already carries.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::canonical_json::to_canonical_json_bytes;

/// Fingerprint algorithms supported for schema version 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintAlgorithm {
    Xxh64,
    Sha256,
}

impl FingerprintAlgorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            FingerprintAlgorithm::Xxh64 => "xxh64",
            FingerprintAlgorithm::Sha256 => "sha256",
        }
    }

    /// Parse an algorithm name. Unknown names simply test `None`.
    pub fn parse(value: &str) -> Option<FingerprintAlgorithm> {
        match value.trim().to_ascii_lowercase().as_str() {
            "xxh64" => Some(FingerprintAlgorithm::Xxh64),
            "sha256" => Some(FingerprintAlgorithm::Sha256),
            _ => None,
        }
    }
}

/// Return fixed-width 16-char lowercase hex xxh64 of bytes.
pub fn xxh64_hex(bytes: &[u8]) -> String {
    format!("{:016x}", xxh3_64(bytes))
}

/// Return lowercase hex SHA-256 of bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Hash a value's canonical JSON with the selected algorithm.
pub fn schema_fingerprint<T: Serialize>(
    value: &T,
    algorithm: FingerprintAlgorithm,
) -> Result<String, serde_json::Error> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(match algorithm {
        FingerprintAlgorithm::Xxh64 => xxh64_hex(&bytes),
        FingerprintAlgorithm::Sha256 => sha256_hex(&bytes),
    })
}

/// Compute a deterministic storage/cache key:
///   canvas-layout|ns=<...>|schema=v1|sha256:<...>
pub fn storage_key_v1(
    namespace: &str,
    schema: &impl Serialize,
) -> Result<String, serde_json::Error> {
    let fingerprint = schema_fingerprint(schema, FingerprintAlgorithm::Sha256)?;
    Ok(format!(
        "canvas-layout|ns={namespace}|schema=v1|sha256:{fingerprint}"
    ))
}
