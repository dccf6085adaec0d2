//! Fingerprinter (C2): deterministic 64-bit content hash used as the cache key.
//!
//! Serialises a request value with `bincode` (a stable, type-tagged binary encoding — the
//! variant discriminant plus fields in declaration order) and runs CRC-64 with the ISO
//! polynomial over the resulting bytes. The fingerprint is a cache key, not a security
//! primitive; 64-bit collisions are accepted (see the design notes on this).

use crc::{Crc, CRC_64_GO_ISO};
use serde::Serialize;

use crate::model::RequestInput;

const CRC64_ISO: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);

/// Errors while canonically encoding a value prior to hashing.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("failed to encode request for fingerprinting: {0}")]
    Encode(#[from] bincode::Error),
}

/// Computes the fingerprint of `input`, rendered as the decimal string of the unsigned
/// 64-bit CRC.
pub fn fingerprint(input: &RequestInput) -> Result<String, FingerprintError> {
    Ok(fingerprint_u64(input)?.to_string())
}

/// Same as [`fingerprint`] but returns the raw integer, for callers that want to avoid the
/// string round-trip.
pub fn fingerprint_u64(input: &RequestInput) -> Result<u64, FingerprintError> {
    let bytes = canonical_bytes(input)?;
    Ok(CRC64_ISO.checksum(&bytes))
}

fn canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(value)
}
