//! GitHub REST API client.
//!
//! Wraps an async `reqwest` client and drives it from a dedicated
//! current-thread runtime, so callers see plain blocking methods.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{link, GitHub, Lookup};
use crate::core::config::Config;
use crate::core::constants::{self, API_VERSION, PER_PAGE};
use crate::core::domain::{
    AccountType, OrgSecret, PublicKey, Repository, SealedSecret, Visibility,
};
use crate::core::types::Login;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Blocking GitHub API client
pub struct RestClient {
    base_url: String,
    client: Client,
    runtime: Runtime,
    /// Account types already resolved, keyed by lowercased login
    account_types: RefCell<HashMap<Login, AccountType>>,
}

impl RestClient {
    /// Create a client for the configured API URL and token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidToken` if the token cannot be sent as a
    /// header, or an error if the runtime or HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        let bearer = Zeroizing::new(format!("Bearer {}", config.token.expose()));
        let mut auth = HeaderValue::from_str(&bearer).map_err(|_| ConfigError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(constants::ACCEPT));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            base_url: config.api_url.clone(),
            client,
            runtime,
            account_types: RefCell::new(HashMap::new()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Login of the token's owner.
    pub fn authenticated_login(&self) -> Result<String> {
        let user: UserEntry = self.get("/user")?;
        Ok(user.login)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.runtime.block_on(async {
            let response = self.send(self.client.get(self.url(path)), path).await?;
            decode(path, response).await
        })
    }

    /// Fetch every page of a list endpoint, following `Link: rel="next"`.
    fn get_all<P, T>(&self, path: &str, items: impl Fn(P) -> Vec<T>) -> Result<Vec<T>>
    where
        P: DeserializeOwned,
    {
        self.runtime.block_on(async {
            let mut all = Vec::new();
            let mut next = Some(self.url(path));

            while let Some(url) = next.take() {
                let response = self.send(self.client.get(&url), path).await?;
                next = response
                    .headers()
                    .get(LINK)
                    .and_then(|value| value.to_str().ok())
                    .and_then(link::next_page);

                let page: P = decode(path, response).await?;
                all.extend(items(page));
            }

            trace!(path, count = all.len(), "fetched all pages");
            Ok(all)
        })
    }

    fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.runtime.block_on(async {
            self.send(self.client.put(self.url(path)).json(body), path)
                .await?;
            Ok(())
        })
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        debug!(path, status = status.as_u16(), "api response");
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        Err(ApiError::from_status(path, status, message).into())
    }
}

impl GitHub for RestClient {
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>> {
        let path = if self.authenticated_login()?.eq_ignore_ascii_case(owner) {
            format!("/user/repos?visibility=all&affiliation=owner&per_page={PER_PAGE}")
        } else if self.account_type(owner)?.is_organization() {
            format!("/orgs/{owner}/repos?type=all&per_page={PER_PAGE}")
        } else {
            format!("/users/{owner}/repos?type=owner&per_page={PER_PAGE}")
        };

        let entries: Vec<RepoEntry> = self.get_all(&path, |page: Vec<RepoEntry>| page)?;
        Ok(administered(entries))
    }

    fn list_secret_names(&self, repo: &Repository) -> Result<Vec<String>> {
        let path = format!(
            "/repos/{}/{}/actions/secrets?per_page={PER_PAGE}",
            repo.owner(),
            repo.name()
        );
        self.get_all(&path, |page: SecretsPage| {
            page.secrets.into_iter().map(|s| s.name).collect()
        })
    }

    fn repo_public_key(&self, repo: &Repository) -> Result<PublicKey> {
        self.get(&format!(
            "/repos/{}/{}/actions/secrets/public-key",
            repo.owner(),
            repo.name()
        ))
    }

    fn put_repo_secret(&self, repo: &Repository, name: &str, sealed: &SealedSecret) -> Result<()> {
        let path = format!(
            "/repos/{}/{}/actions/secrets/{name}",
            repo.owner(),
            repo.name()
        );
        self.put(&path, sealed)
    }

    fn account_type(&self, login: &str) -> Result<AccountType> {
        let key = login.to_ascii_lowercase();
        if let Some(kind) = self.account_types.borrow().get(&key) {
            trace!(login, "account type cached");
            return Ok(kind.clone());
        }

        let user: UserEntry = self.get(&format!("/users/{login}"))?;
        self.account_types.borrow_mut().insert(key, user.kind.clone());
        Ok(user.kind)
    }

    fn org_secret(&self, org: &str, name: &str) -> Result<Lookup<OrgSecret>> {
        match self.get(&format!("/orgs/{org}/actions/secrets/{name}")) {
            Ok(secret) => Ok(Lookup::Found(secret)),
            Err(Error::Api(e)) if e.is_not_found() => Ok(Lookup::NotFound),
            Err(e) => Err(e),
        }
    }

    fn org_public_key(&self, org: &str) -> Result<PublicKey> {
        self.get(&format!("/orgs/{org}/actions/secrets/public-key"))
    }

    fn put_org_secret(
        &self,
        org: &str,
        name: &str,
        sealed: &SealedSecret,
        visibility: &Visibility,
    ) -> Result<()> {
        let body = OrgSecretBody { sealed, visibility };
        self.put(&format!("/orgs/{org}/actions/secrets/{name}"), &body)
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    let body = response
        .bytes()
        .await
        .map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

    Ok(serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })?)
}

/// Keep repositories the token administers that are not forks, archived
/// or templates, in API order.
fn administered(entries: Vec<RepoEntry>) -> Vec<Repository> {
    entries
        .into_iter()
        .filter(|r| !r.fork && !r.archived && !r.is_template)
        .filter(|r| r.permissions.as_ref().is_some_and(|p| p.admin))
        .map(|r| Repository::new(r.owner.login, r.name))
        .collect()
}

#[derive(Deserialize)]
struct UserEntry {
    login: String,
    #[serde(rename = "type")]
    kind: AccountType,
}

#[derive(Deserialize)]
struct RepoEntry {
    name: String,
    owner: OwnerEntry,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    is_template: bool,
    #[serde(default)]
    permissions: Option<Permissions>,
}

#[derive(Deserialize)]
struct OwnerEntry {
    login: String,
}

#[derive(Deserialize)]
struct Permissions {
    #[serde(default)]
    admin: bool,
}

#[derive(Deserialize)]
struct SecretsPage {
    secrets: Vec<SecretEntry>,
}

#[derive(Deserialize)]
struct SecretEntry {
    name: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Serialize)]
struct OrgSecretBody<'a> {
    #[serde(flatten)]
    sealed: &'a SealedSecret,
    visibility: &'a Visibility,
}
