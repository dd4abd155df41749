//! Account type of a login.

use serde::Deserialize;

use crate::core::constants::ORGANIZATION;

/// Kind of account behind a login, as reported by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AccountType {
    User,
    Organization,
    /// Anything else the service reports (e.g. `Bot`).
    Other(String),
}

impl AccountType {
    pub fn is_organization(&self) -> bool {
        matches!(self, AccountType::Organization)
    }
}

impl From<String> for AccountType {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "User" => AccountType::User,
            ORGANIZATION => AccountType::Organization,
            _ => AccountType::Other(kind),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::User => f.write_str("User"),
            AccountType::Organization => f.write_str(ORGANIZATION),
            AccountType::Other(kind) => f.write_str(kind),
        }
    }
}
