//! Sealed-box backend implementation.
//!
//! The service hands out base64 X25519 public keys; the ciphertext is an
//! ephemeral public key followed by the boxed message, base64-encoded.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::aead::OsRng;
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Length of an X25519 public key.
const KEY_LEN: usize = crypto_box::KEY_SIZE;

/// Anonymous public-key encryption using `crypto_box` sealed boxes
pub struct SealedBox;

impl Cipher for SealedBox {
    /// Base64-encoded X25519 public key as returned by the service
    type Recipient = str;

    fn name(&self) -> &'static str {
        "sealed-box"
    }

    fn encrypt(&self, plaintext: &[u8], recipient: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let public_key = parse_public_key(recipient)?;
        let sealed = public_key
            .seal(&mut OsRng, plaintext)
            .map_err(|_| CipherError::EncryptionFailed)?;

        trace!(ciphertext_len = sealed.len(), "sealed");

        Ok(STANDARD.encode(sealed))
    }
}

/// Decode a base64 public key into an X25519 key.
///
/// # Errors
///
/// Returns `CipherError::InvalidEncoding` for bad base64 and
/// `CipherError::InvalidKeyLength` when the key is not 32 bytes.
fn parse_public_key(encoded: &str) -> Result<crypto_box::PublicKey> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(CipherError::InvalidEncoding)?;
    let bytes: [u8; KEY_LEN] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CipherError::InvalidKeyLength(bytes.len()))?;

    Ok(crypto_box::PublicKey::from(bytes))
}
