//! Cryptographic operations.
//!
//! Secrets are uploaded sealed for the public key of the repository or
//! organization that stores them. Only the service holds the matching
//! private key, so this crate encrypts but never decrypts.
//!
//! ## Backends
//!
//! - **sealed box**: X25519 + XSalsa20-Poly1305 anonymous encryption,
//!   byte-compatible with libsodium's `crypto_box_seal`.

use tracing::debug;

use crate::core::domain::PublicKey;
use crate::error::Result;

mod sealed_box;

pub use sealed_box::SealedBox;

/// Cryptographic backend trait.
///
/// Abstracts the encryption step so the workflow does not depend on a
/// particular primitive.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient: ?Sized;

    /// Encrypt plaintext for a single recipient.
    ///
    /// # Returns
    ///
    /// Base64-encoded ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the recipient key is malformed or
    /// encryption fails.
    fn encrypt(&self, plaintext: &[u8], recipient: &Self::Recipient) -> Result<String>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Seal a value for a service-provided public key.
///
/// This is a convenience wrapper around `SealedBox::encrypt`. The
/// primitive is randomized, so two calls never return the same string.
pub fn seal(key: &PublicKey, plaintext: &str) -> Result<String> {
    let cipher = SealedBox;
    debug!(backend = cipher.name(), key_id = %key.key_id, "encrypting value");
    cipher.encrypt(plaintext.as_bytes(), key.key.as_str())
}
