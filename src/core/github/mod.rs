//! Remote secret store interface.
//!
//! The workflow only talks to the service through the [`GitHub`] trait so
//! it can be driven by the REST client in production and by an in-memory
//! fake in tests.
//!
//! ## Implementations
//!
//! - **rest**: `reqwest` client for api.github.com or GitHub Enterprise.

mod link;
mod rest;

pub use rest::RestClient;

use crate::core::domain::{
    AccountType, OrgSecret, PublicKey, Repository, SealedSecret, Visibility,
};
use crate::error::Result;

/// Result of a lookup where absence is an expected answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

/// Operations the propagation workflow needs from the hosting service.
///
/// Every method is a blocking call; the workflow never issues two at once.
pub trait GitHub {
    /// All repositories owned by `owner` that the token administers,
    /// excluding forks, archived and template repositories.
    ///
    /// # Errors
    ///
    /// Authorization failures are returned as `ApiError::Unauthorized` or
    /// `ApiError::Forbidden`.
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>>;

    /// Names of the Actions secrets defined on a repository.
    fn list_secret_names(&self, repo: &Repository) -> Result<Vec<String>>;

    /// Current public key of a repository's secret store.
    fn repo_public_key(&self, repo: &Repository) -> Result<PublicKey>;

    /// Create or update a repository secret.
    fn put_repo_secret(&self, repo: &Repository, name: &str, sealed: &SealedSecret)
        -> Result<()>;

    /// Whether a login is a user, an organization, or something else.
    fn account_type(&self, login: &str) -> Result<AccountType>;

    /// Descriptor of an organization secret.
    ///
    /// A missing secret is `Ok(Lookup::NotFound)`; every other failure is
    /// an error.
    fn org_secret(&self, org: &str, name: &str) -> Result<Lookup<OrgSecret>>;

    /// Current public key of an organization's secret store.
    fn org_public_key(&self, org: &str) -> Result<PublicKey>;

    /// Create or update an organization secret with the given visibility.
    fn put_org_secret(
        &self,
        org: &str,
        name: &str,
        sealed: &SealedSecret,
        visibility: &Visibility,
    ) -> Result<()>;
}
