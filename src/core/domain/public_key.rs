//! Public key material and the ciphertext sealed for it.

use serde::{Deserialize, Serialize};

use crate::core::types::{EncryptedValue, KeyId};

/// Public key of a repository or organization secret store.
///
/// Fetched fresh for every target and never reused across targets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKey {
    /// Opaque identifier echoed back on upsert
    pub key_id: KeyId,
    /// Base64-encoded X25519 public key
    pub key: String,
}

/// A value sealed for one public key, consumed by a single upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SealedSecret {
    pub encrypted_value: EncryptedValue,
    pub key_id: KeyId,
}
