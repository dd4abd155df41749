//! Secret names and organization secret descriptors.
//!
//! Secret names are case-insensitive on the service side, so every
//! comparison goes through [`SecretName::matches`].

use serde::{Deserialize, Serialize};

use crate::core::constants::RESERVED_PREFIX;
use crate::error::ConfigError;

/// A validated secret name, kept in the spelling the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretName(String);

impl SecretName {
    /// Validate a secret name against the service's naming rules.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSecretName` when the name is empty,
    /// contains anything but ASCII alphanumerics and `_`, starts with a
    /// digit, or uses the reserved `GITHUB_` prefix.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidSecretName {
            name: name.to_string(),
            reason,
        };

        let first = name.chars().next().ok_or_else(|| invalid("empty"))?;
        if first.is_ascii_digit() {
            return Err(invalid("must not start with a digit"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("only letters, digits and underscores are allowed"));
        }
        if name.len() >= RESERVED_PREFIX.len()
            && name[..RESERVED_PREFIX.len()].eq_ignore_ascii_case(RESERVED_PREFIX)
        {
            return Err(invalid("the GITHUB_ prefix is reserved"));
        }

        Ok(Self(name.to_string()))
    }

    /// Case-insensitive comparison with a name reported by the service.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for SecretName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SecretName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which repositories of an organization may use an org-level secret.
///
/// Unknown values are kept verbatim so an upsert writes back exactly what
/// was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Visibility {
    All,
    Private,
    Selected,
    Other(String),
}

impl From<String> for Visibility {
    fn from(value: String) -> Self {
        match value.as_str() {
            "all" => Visibility::All,
            "private" => Visibility::Private,
            "selected" => Visibility::Selected,
            _ => Visibility::Other(value),
        }
    }
}

impl From<Visibility> for String {
    fn from(value: Visibility) -> Self {
        match value {
            Visibility::All => "all".to_string(),
            Visibility::Private => "private".to_string(),
            Visibility::Selected => "selected".to_string(),
            Visibility::Other(other) => other,
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from(self.clone()))
    }
}

/// Descriptor of an existing organization secret.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrgSecret {
    pub name: String,
    pub visibility: Visibility,
}
