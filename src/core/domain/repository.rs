//! Repository type.
//!
//! A candidate repository is identified only by its owner and name.

use crate::core::types::{Login, RepoName};

/// A repository as produced by discovery
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    owner: Login,
    name: RepoName,
}

impl Repository {
    /// Create a repository reference from an owner login and a name
    pub fn new(owner: impl Into<Login>, name: impl Into<RepoName>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Owner login
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
