use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::EncodedPoint;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::CosmosError;
use crate::pubkey::{PublicKey, SECP256K1_COMPRESSED_LEN};

/// Default HRP for Cosmos Hub account addresses.
pub const ACCOUNT_PREFIX: &str = "cosmos";

/// Length of the raw address digest in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Derive a Bech32 account address from a public key.
///
/// Secp256k1 keys are hashed over their 33-byte compressed form (an
/// uncompressed key is compressed first, so both encodings of the same
/// point yield the same address). Ed25519 addresses are the first 20
/// bytes of the SHA-256 of the raw key, per Tendermint.
pub fn pubkey_to_address(pubkey: &PublicKey, prefix: &str) -> Result<String, CosmosError> {
    let digest = raw_address(pubkey)?;
    Ok(bech32_codec::encode(prefix, &digest)?)
}

/// Compute the 20-byte raw address digest for a public key.
pub fn raw_address(pubkey: &PublicKey) -> Result<[u8; ADDRESS_LEN], CosmosError> {
    let mut out = [0u8; ADDRESS_LEN];
    match pubkey {
        PublicKey::Secp256k1(bytes) => {
            let compressed = compress_secp256k1(bytes)?;
            let sha = Sha256::digest(&compressed);
            out.copy_from_slice(&Ripemd160::digest(sha));
        }
        PublicKey::Ed25519(bytes) => {
            let sha = Sha256::digest(bytes);
            out.copy_from_slice(&sha[..ADDRESS_LEN]);
        }
    }
    Ok(out)
}

/// Validate a Cosmos-style address against an exact expected prefix.
///
/// True only if the string decodes as Bech32, the prefix equals
/// `expected_prefix` exactly, and the payload is 20 bytes. Prefix
/// namespaces like `cosmosvaloper` are the caller's choice to pass; no
/// suffix matching happens here.
pub fn is_valid_address(address: &str, expected_prefix: &str) -> bool {
    match bech32_codec::decode(address) {
        Ok((prefix, payload)) => prefix == expected_prefix && payload.len() == ADDRESS_LEN,
        Err(_) => false,
    }
}

/// Validate against the default `cosmos` account prefix.
pub fn is_valid_cosmos_address(address: &str) -> bool {
    is_valid_address(address, ACCOUNT_PREFIX)
}

/// Normalize a SEC1 secp256k1 encoding to its 33-byte compressed form.
///
/// Uncompressed keys go through k256 point parsing, which also rejects
/// encodings that are not on the curve.
pub(crate) fn compress_secp256k1(bytes: &[u8]) -> Result<Vec<u8>, CosmosError> {
    if bytes.len() == SECP256K1_COMPRESSED_LEN {
        return Ok(bytes.to_vec());
    }

    let encoded = EncodedPoint::from_bytes(bytes)
        .map_err(|e| CosmosError::InvalidPublicKey(format!("invalid SEC1 encoding: {e}")))?;

    let point: Option<k256::PublicKey> = k256::PublicKey::from_encoded_point(&encoded).into();
    let point = point.ok_or_else(|| {
        CosmosError::InvalidPublicKey("point is not on the secp256k1 curve".into())
    })?;

    Ok(point.to_encoded_point(true).as_bytes().to_vec())
}
