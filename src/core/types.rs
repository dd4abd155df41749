//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A user, organization or team login (e.g., octocat).
pub type Login = String;

/// A repository name without its owner.
pub type RepoName = String;

/// Opaque identifier of the public key a ciphertext was sealed for.
pub type KeyId = String;

/// Base64 sealed-box ciphertext, ready for an upsert call.
pub type EncryptedValue = String;
