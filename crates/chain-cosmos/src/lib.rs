//! Cosmos SDK chain support: account address derivation and validation.
//!
//! Account addresses are Bech32-encoded 20-byte digests of the account
//! public key. Secp256k1 keys hash their compressed SEC1 form through
//! SHA-256 then RIPEMD-160; Ed25519 keys take the first 20 bytes of their
//! SHA-256, per Tendermint. Also handles the legacy amino pubkey envelope
//! (`cosmospub...` strings) and defines the signer boundary for external
//! hardware devices.

pub mod address;
pub mod amino;
pub mod error;
pub mod pubkey;
pub mod signer;

pub use address::{
    is_valid_address, is_valid_cosmos_address, pubkey_to_address, raw_address, ACCOUNT_PREFIX,
};
pub use amino::{decode_pubkey, encode_pubkey};
pub use error::CosmosError;
pub use pubkey::PublicKey;
pub use signer::{Signer, SignerError};
