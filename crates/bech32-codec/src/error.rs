use thiserror::Error;

/// Bech32 encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("invalid prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("encoded string would be {needed} characters, limit is {max}")]
    TooLong { needed: usize, max: usize },
}

/// Bech32 decoding errors. Each structural violation maps to its own
/// variant so callers (and tests) can tell them apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no separator character")]
    NoSeparator,

    #[error("invalid prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("checksum verification failed")]
    InvalidChecksum,

    #[error("invalid character: {0:?}")]
    InvalidCharacter(char),

    #[error("invalid padding in data part")]
    InvalidPadding,
}
