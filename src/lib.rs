//! github-update-secret - Rotate a GitHub Actions secret everywhere it is used.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and execution
//! │   └── output        # Terminal output helpers (stderr)
//! └── core/             # Core library components
//!     ├── config        # Token and API settings, resolved once
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── sealed_box# X25519 sealed box implementation
//!     ├── domain/       # Repositories, secrets, keys, reports
//!     ├── github/       # Remote interface
//!     │   ├── mod       # GitHub trait
//!     │   └── rest      # REST API client
//!     └── propagate     # Discover, filter, update, reconcile org
//! ```
//!
//! # Flow
//!
//! 1. List the target's repositories the token administers
//! 2. Keep those that already define the secret (case-insensitive)
//! 3. Seal the value for each repository's public key and upsert it
//! 4. If the target is an organization defining the secret, update it too,
//!    keeping its visibility

pub mod cli;
pub mod core;
pub mod error;
