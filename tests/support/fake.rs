//! In-memory `GitHub` implementation that records every call.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;

use github_update_secret::core::domain::{
    AccountType, OrgSecret, PublicKey, Repository, SealedSecret, Visibility,
};
use github_update_secret::core::github::{GitHub, Lookup};
use github_update_secret::error::{ApiError, Result};

/// One recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListRepositories(String),
    ListSecrets(String),
    RepoKey(String),
    PutRepo {
        repo: String,
        name: String,
        sealed: SealedSecret,
    },
    AccountType(String),
    OrgSecret {
        org: String,
        name: String,
    },
    OrgKey(String),
    PutOrg {
        org: String,
        name: String,
        sealed: SealedSecret,
        visibility: Visibility,
    },
}

impl Call {
    pub fn is_write(&self) -> bool {
        matches!(self, Call::PutRepo { .. } | Call::PutOrg { .. })
    }
}

/// A fake account with repositories, their secret names and one private
/// key per secret store.
pub struct FakeGitHub {
    login: String,
    account: AccountType,
    repos: Vec<(Repository, Vec<String>)>,
    org_secret: Option<OrgSecret>,
    keys: HashMap<String, SecretKey>,
    deny_discovery: bool,
    org_lookup_fails: bool,
    failing_lists: HashSet<String>,
    failing_puts: HashSet<String>,
    calls: RefCell<Vec<Call>>,
}

impl FakeGitHub {
    fn new(login: &str, account: AccountType) -> Self {
        let mut fake = Self {
            login: login.to_string(),
            account,
            repos: Vec::new(),
            org_secret: None,
            keys: HashMap::new(),
            deny_discovery: false,
            org_lookup_fails: false,
            failing_lists: HashSet::new(),
            failing_puts: HashSet::new(),
            calls: RefCell::new(Vec::new()),
        };
        fake.keys
            .insert(login.to_string(), SecretKey::generate(&mut OsRng));
        fake
    }

    pub fn user(login: &str) -> Self {
        Self::new(login, AccountType::User)
    }

    pub fn org(login: &str) -> Self {
        Self::new(login, AccountType::Organization)
    }

    /// Add a repository owned by the account with the given secret names.
    pub fn repo(mut self, name: &str, secrets: &[&str]) -> Self {
        let repo = Repository::new(self.login.clone(), name);
        self.keys
            .insert(repo.to_string(), SecretKey::generate(&mut OsRng));
        self.repos
            .push((repo, secrets.iter().map(|s| s.to_string()).collect()));
        self
    }

    /// Define an org-level secret.
    pub fn org_secret(mut self, name: &str, visibility: &str) -> Self {
        self.org_secret = Some(OrgSecret {
            name: name.to_string(),
            visibility: Visibility::from(visibility.to_string()),
        });
        self
    }

    /// Reject repository discovery with 403.
    pub fn deny_discovery(mut self) -> Self {
        self.deny_discovery = true;
        self
    }

    /// Fail the org secret lookup with something other than 404.
    pub fn fail_org_lookup(mut self) -> Self {
        self.org_lookup_fails = true;
        self
    }

    /// Reject the secret listing of one repository with 403.
    pub fn fail_listing(mut self, name: &str) -> Self {
        self.failing_lists.insert(format!("{}/{}", self.login, name));
        self
    }

    /// Reject the upsert on one repository with 403.
    pub fn fail_update(mut self, name: &str) -> Self {
        self.failing_puts.insert(format!("{}/{}", self.login, name));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    /// Names of the repositories that received an upsert, in call order.
    pub fn updated_repos(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::PutRepo { repo, .. } => Some(repo),
                _ => None,
            })
            .collect()
    }

    /// Decrypt a value sealed for `store` (a repository full name or the
    /// org login).
    pub fn open(&self, store: &str, encrypted: &str) -> String {
        let raw = STANDARD.decode(encrypted).expect("ciphertext is base64");
        let plain = self.keys[store].unseal(&raw).expect("sealed for this store");
        String::from_utf8(plain).expect("utf-8 plaintext")
    }

    pub fn key_id(store: &str) -> String {
        format!("key-{}", store)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn public_key(&self, store: &str) -> PublicKey {
        PublicKey {
            key_id: Self::key_id(store),
            key: STANDARD.encode(self.keys[store].public_key().as_bytes()),
        }
    }

    fn forbidden(path: String) -> github_update_secret::error::Error {
        ApiError::Forbidden { path }.into()
    }
}

impl GitHub for FakeGitHub {
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>> {
        self.record(Call::ListRepositories(owner.to_string()));
        if self.deny_discovery {
            return Err(Self::forbidden(format!("/orgs/{}/repos", owner)));
        }
        Ok(self.repos.iter().map(|(r, _)| r.clone()).collect())
    }

    fn list_secret_names(&self, repo: &Repository) -> Result<Vec<String>> {
        let full = repo.to_string();
        self.record(Call::ListSecrets(full.clone()));
        if self.failing_lists.contains(&full) {
            return Err(Self::forbidden(format!("/repos/{}/actions/secrets", full)));
        }
        Ok(self
            .repos
            .iter()
            .find(|(r, _)| r == repo)
            .map(|(_, names)| names.clone())
            .unwrap_or_default())
    }

    fn repo_public_key(&self, repo: &Repository) -> Result<PublicKey> {
        let full = repo.to_string();
        self.record(Call::RepoKey(full.clone()));
        Ok(self.public_key(&full))
    }

    fn put_repo_secret(&self, repo: &Repository, name: &str, sealed: &SealedSecret) -> Result<()> {
        let full = repo.to_string();
        self.record(Call::PutRepo {
            repo: full.clone(),
            name: name.to_string(),
            sealed: sealed.clone(),
        });
        if self.failing_puts.contains(&full) {
            return Err(Self::forbidden(format!("/repos/{}/actions/secrets/{}", full, name)));
        }
        Ok(())
    }

    fn account_type(&self, login: &str) -> Result<AccountType> {
        self.record(Call::AccountType(login.to_string()));
        Ok(self.account.clone())
    }

    fn org_secret(&self, org: &str, name: &str) -> Result<Lookup<OrgSecret>> {
        self.record(Call::OrgSecret {
            org: org.to_string(),
            name: name.to_string(),
        });
        if self.org_lookup_fails {
            return Err(Self::forbidden(format!("/orgs/{}/actions/secrets/{}", org, name)));
        }
        Ok(match &self.org_secret {
            Some(secret) if secret.name.eq_ignore_ascii_case(name) => Lookup::Found(secret.clone()),
            _ => Lookup::NotFound,
        })
    }

    fn org_public_key(&self, org: &str) -> Result<PublicKey> {
        self.record(Call::OrgKey(org.to_string()));
        Ok(self.public_key(org))
    }

    fn put_org_secret(
        &self,
        org: &str,
        name: &str,
        sealed: &SealedSecret,
        visibility: &Visibility,
    ) -> Result<()> {
        self.record(Call::PutOrg {
            org: org.to_string(),
            name: name.to_string(),
            sealed: sealed.clone(),
            visibility: visibility.clone(),
        });
        Ok(())
    }
}
