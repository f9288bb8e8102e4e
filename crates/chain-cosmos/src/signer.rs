//! Boundary to an external signing device.
//!
//! The toolkit never talks to hardware itself. Callers inject a [`Signer`]
//! (a Ledger transport, a software key, a test double) and the core only
//! consumes the public key bytes it returns; retries and vendor error
//! translation live on the caller's side of this trait.

use thiserror::Error;

use crate::pubkey::PublicKey;

/// Cosmos Hub BIP-44 coin type.
pub const COSMOS_COIN_TYPE: u32 = 118;

/// Standard Cosmos Hub derivation path for an account index:
/// `m/44'/118'/0'/0/{account}`.
pub fn cosmoshub_path(account: u32) -> String {
    format!("m/44'/{COSMOS_COIN_TYPE}'/0'/0/{account}")
}

/// Failure modes of an external signing device. None are retryable from
/// the core's perspective; callers own any retry policy.
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("signing device not found")]
    DeviceNotFound,

    #[error("request rejected on the device")]
    UserRejected,

    #[error("device is locked")]
    DeviceLocked,

    #[error("unsupported device firmware: {0}")]
    FirmwareMismatch(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Capability exposed by an external signer.
pub trait Signer {
    /// Public key at the given BIP-44 path.
    fn public_key(&self, path: &str) -> Result<PublicKey, SignerError>;

    /// Sign an opaque message with the key at the given path.
    fn sign(&self, path: &str, message: &[u8]) -> Result<Vec<u8>, SignerError>;
}
