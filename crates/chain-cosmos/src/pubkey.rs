use serde::{Deserialize, Serialize};

use crate::error::CosmosError;

/// SEC1 compressed secp256k1 key length (parity byte + x coordinate).
pub const SECP256K1_COMPRESSED_LEN: usize = 33;

/// SEC1 uncompressed secp256k1 key length (0x04 byte + x + y coordinates).
pub const SECP256K1_UNCOMPRESSED_LEN: usize = 65;

/// Raw Ed25519 key length.
pub const ED25519_LEN: usize = 32;

/// An account public key, tagged by signature algorithm.
///
/// Construct through [`PublicKey::secp256k1`] or [`PublicKey::ed25519`];
/// the constructors reject any payload whose length and leading tag byte
/// do not match the declared algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicKey {
    /// SEC1-encoded secp256k1 point: 33 bytes compressed (0x02/0x03) or
    /// 65 bytes uncompressed (0x04).
    Secp256k1(Vec<u8>),
    /// Raw 32-byte Ed25519 point.
    Ed25519([u8; ED25519_LEN]),
}

impl PublicKey {
    /// Build a secp256k1 key from SEC1 bytes, compressed or uncompressed.
    pub fn secp256k1(bytes: &[u8]) -> Result<Self, CosmosError> {
        match (bytes.len(), bytes.first().copied()) {
            (SECP256K1_COMPRESSED_LEN, Some(0x02 | 0x03))
            | (SECP256K1_UNCOMPRESSED_LEN, Some(0x04)) => {
                Ok(PublicKey::Secp256k1(bytes.to_vec()))
            }
            _ => Err(CosmosError::InvalidPublicKey(format!(
                "secp256k1 key must be {SECP256K1_COMPRESSED_LEN} bytes tagged 0x02/0x03 \
                 or {SECP256K1_UNCOMPRESSED_LEN} bytes tagged 0x04, got {} bytes",
                bytes.len()
            ))),
        }
    }

    /// Build an Ed25519 key from its raw 32 bytes.
    pub fn ed25519(bytes: &[u8]) -> Result<Self, CosmosError> {
        let raw: [u8; ED25519_LEN] = bytes.try_into().map_err(|_| {
            CosmosError::InvalidPublicKey(format!(
                "ed25519 key must be {ED25519_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(PublicKey::Ed25519(raw))
    }

    /// The key bytes exactly as supplied at construction.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Secp256k1(bytes) => bytes,
            PublicKey::Ed25519(bytes) => bytes,
        }
    }
}
