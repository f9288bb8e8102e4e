//! Legacy amino pubkey envelopes.
//!
//! Cosmos SDK historically serializes a public key as a fixed 4-byte type
//! prefix plus a 1-byte length, followed by the raw key bytes, the whole
//! thing Bech32-encoded under a `...pub` HRP (`cosmospub`,
//! `cosmosvalconspub`, ...).

use crate::address::compress_secp256k1;
use crate::error::CosmosError;
use crate::pubkey::{PublicKey, ED25519_LEN, SECP256K1_COMPRESSED_LEN};

/// Amino type+length prefix for secp256k1 keys (33-byte payload).
const SECP256K1_PREFIX: [u8; 5] = [0xeb, 0x5a, 0xe9, 0x87, 0x21];

/// Amino type+length prefix for ed25519 keys (32-byte payload).
const ED25519_PREFIX: [u8; 5] = [0x16, 0x24, 0xde, 0x64, 0x20];

/// HRP suffix shared by every pubkey namespace.
const PUBKEY_HRP_SUFFIX: &str = "pub";

/// Decode a Bech32-encoded amino pubkey envelope back into a [`PublicKey`].
///
/// The HRP must end in `pub`; the payload must start with a known amino
/// type prefix and carry exactly the key length that prefix declares.
pub fn decode_pubkey(input: &str) -> Result<PublicKey, CosmosError> {
    let (prefix, payload) = bech32_codec::decode(input)?;
    if !prefix.ends_with(PUBKEY_HRP_SUFFIX) {
        return Err(CosmosError::MalformedEnvelope(format!(
            "prefix {prefix:?} does not end in \"{PUBKEY_HRP_SUFFIX}\""
        )));
    }
    if payload.len() < SECP256K1_PREFIX.len() {
        return Err(CosmosError::MalformedEnvelope(format!(
            "payload of {} bytes is too short for a type prefix",
            payload.len()
        )));
    }

    let (tag, key) = payload.split_at(SECP256K1_PREFIX.len());
    if tag == SECP256K1_PREFIX {
        if key.len() != SECP256K1_COMPRESSED_LEN {
            return Err(CosmosError::MalformedEnvelope(format!(
                "secp256k1 envelope must carry {SECP256K1_COMPRESSED_LEN} key bytes, got {}",
                key.len()
            )));
        }
        PublicKey::secp256k1(key)
    } else if tag == ED25519_PREFIX {
        if key.len() != ED25519_LEN {
            return Err(CosmosError::MalformedEnvelope(format!(
                "ed25519 envelope must carry {ED25519_LEN} key bytes, got {}",
                key.len()
            )));
        }
        PublicKey::ed25519(key)
    } else {
        Err(CosmosError::UnsupportedPubkeyType(hex::encode(tag)))
    }
}

/// Encode a [`PublicKey`] as a Bech32 amino pubkey envelope.
///
/// Secp256k1 keys are compressed first; the envelope format only carries
/// the 33-byte form. The HRP must end in `pub`.
pub fn encode_pubkey(pubkey: &PublicKey, prefix: &str) -> Result<String, CosmosError> {
    if !prefix.ends_with(PUBKEY_HRP_SUFFIX) {
        return Err(CosmosError::MalformedEnvelope(format!(
            "prefix {prefix:?} does not end in \"{PUBKEY_HRP_SUFFIX}\""
        )));
    }

    let mut payload = Vec::with_capacity(SECP256K1_PREFIX.len() + SECP256K1_COMPRESSED_LEN);
    match pubkey {
        PublicKey::Secp256k1(bytes) => {
            payload.extend_from_slice(&SECP256K1_PREFIX);
            payload.extend_from_slice(&compress_secp256k1(bytes)?);
        }
        PublicKey::Ed25519(bytes) => {
            payload.extend_from_slice(&ED25519_PREFIX);
            payload.extend_from_slice(bytes);
        }
    }
    Ok(bech32_codec::encode(prefix, &payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECP_ENVELOPE: &str =
        "cosmospub1addwnpepqd8sgxq7aw348ydctp3n5ajufgxp395hksxjzc6565yfp56scupfqhlgyg5";

    const SECP_KEY: &str =
        "034f04181eeba35391b858633a765c4a0c189697b40d216354d50890d350c70290";

    #[test]
    fn decode_secp256k1_envelope() {
        let key = decode_pubkey(SECP_ENVELOPE).unwrap();
        match &key {
            PublicKey::Secp256k1(bytes) => assert_eq!(hex::encode(bytes), SECP_KEY),
            other => panic!("expected secp256k1 key, got {other:?}"),
        }
    }

    #[test]
    fn encode_secp256k1_envelope() {
        let key = PublicKey::secp256k1(&hex::decode(SECP_KEY).unwrap()).unwrap();
        assert_eq!(encode_pubkey(&key, "cosmospub").unwrap(), SECP_ENVELOPE);
    }

    #[test]
    fn ed25519_envelope_round_trip() {
        let key = PublicKey::ed25519(
            &hex::decode("12ee6f581fe55673a1e9e1382a0829e32075a0aa4763c968bc526e1852e78c95")
                .unwrap(),
        )
        .unwrap();
        let encoded = encode_pubkey(&key, "cosmospub").unwrap();
        assert_eq!(
            encoded,
            "cosmospub1zcjduepqzthx7kqlu4t88g0fuyuz5zpfuvs8tg92ga3uj69u2fhps5h83j2ssy6a4g"
        );
        assert_eq!(decode_pubkey(&encoded).unwrap(), key);
    }

    #[test]
    fn encode_compresses_uncompressed_keys() {
        let uncompressed = PublicKey::secp256k1(
            &hex::decode(
                "044f04181eeba35391b858633a765c4a0c189697b40d216354d50890d350c702\
                 9013b587a681e836cc187a8164b98a5848a2b89b3173315fdd0740d5032e259cd5",
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(
            encode_pubkey(&uncompressed, "cosmospub").unwrap(),
            SECP_ENVELOPE
        );
    }

    #[test]
    fn decode_rejects_non_pub_prefix() {
        // A plain account address is not a pubkey envelope.
        assert!(matches!(
            decode_pubkey("cosmos1pkptre7fdkl6gfrzlesjjvhxhlc3r4gmmk8rs6"),
            Err(CosmosError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn decode_rejects_unknown_type_prefix() {
        // sr25519 amino prefix, unsupported here.
        let mut payload = vec![0x0d, 0xfb, 0x10, 0x05, 0x20];
        payload.extend_from_slice(&[0x33; 32]);
        let encoded = bech32_codec::encode("cosmospub", &payload).unwrap();
        assert!(matches!(
            decode_pubkey(&encoded),
            Err(CosmosError::UnsupportedPubkeyType(_))
        ));
    }

    #[test]
    fn decode_rejects_short_payload() {
        let encoded = bech32_codec::encode("cosmospub", &[0xeb, 0x5a]).unwrap();
        assert!(matches!(
            decode_pubkey(&encoded),
            Err(CosmosError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn decode_rejects_wrong_key_length() {
        // Secp256k1 type prefix but only 32 key bytes.
        let mut payload = SECP256K1_PREFIX.to_vec();
        payload.extend_from_slice(&[0x02; 32]);
        let encoded = bech32_codec::encode("cosmospub", &payload).unwrap();
        assert!(matches!(
            decode_pubkey(&encoded),
            Err(CosmosError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn decode_propagates_checksum_failure() {
        let mut broken = SECP_ENVELOPE.to_string();
        broken.pop();
        broken.push('q');
        assert!(matches!(
            decode_pubkey(&broken),
            Err(CosmosError::Decode(bech32_codec::DecodeError::InvalidChecksum))
        ));
    }

    #[test]
    fn encode_rejects_non_pub_prefix() {
        let key = PublicKey::ed25519(&[0x11; 32]).unwrap();
        assert!(matches!(
            encode_pubkey(&key, "cosmos"),
            Err(CosmosError::MalformedEnvelope(_))
        ));
    }
}
