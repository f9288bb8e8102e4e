//! Bech32 string codec (the original BIP-173 variant, checksum constant 1).
//!
//! Encodes arbitrary byte payloads as `<prefix>1<data><checksum>` strings
//! and decodes them back, with every failure mode reported as a distinct
//! error variant. Used by `chain-cosmos` for account addresses and amino
//! pubkey envelopes; carries no intra-workspace dependencies.

pub mod codec;
pub mod error;

pub use codec::{decode, encode, is_valid};
pub use error::{DecodeError, EncodeError};
