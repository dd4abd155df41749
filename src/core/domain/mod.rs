//! Domain types.

mod account;
mod public_key;
mod report;
mod repository;
mod secret;

pub use account::AccountType;
pub use public_key::{PublicKey, SealedSecret};
pub use report::{OrgOutcome, Report, Skipped};
pub use repository::Repository;
pub use secret::{OrgSecret, SecretName, Visibility};
