use thiserror::Error;

/// Cosmos address and pubkey operation errors.
#[derive(Debug, Error)]
pub enum CosmosError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("unsupported pubkey type prefix: {0}")]
    UnsupportedPubkeyType(String),

    #[error("malformed pubkey envelope: {0}")]
    MalformedEnvelope(String),

    #[error("address encoding failed: {0}")]
    Encode(#[from] bech32_codec::EncodeError),

    #[error("address decoding failed: {0}")]
    Decode(#[from] bech32_codec::DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_public_key() {
        let err = CosmosError::InvalidPublicKey("wrong length".into());
        assert_eq!(err.to_string(), "invalid public key: wrong length");
    }

    #[test]
    fn display_unsupported_pubkey_type() {
        let err = CosmosError::UnsupportedPubkeyType("0dfb100520".into());
        assert_eq!(
            err.to_string(),
            "unsupported pubkey type prefix: 0dfb100520"
        );
    }

    #[test]
    fn wraps_codec_decode_error() {
        let err = CosmosError::from(bech32_codec::DecodeError::NoSeparator);
        assert_eq!(
            err.to_string(),
            "address decoding failed: no separator character"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(CosmosError::MalformedEnvelope("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
