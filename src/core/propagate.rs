//! Secret propagation workflow.
//!
//! Discovers the target's repositories, keeps those that already define the
//! secret, re-seals the value for each one's public key and writes it back,
//! then does the same for the organization-level secret when there is one.
//!
//! Every step is sequential. A repository only ever receives an update if it
//! already has a secret with the requested name (case-insensitive); nothing
//! is created.

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::config::Config;
use crate::core::domain::{OrgOutcome, Report, Repository, SealedSecret, SecretName, Skipped};
use crate::core::github::{GitHub, Lookup};
use crate::core::types::Login;
use crate::error::{ConfigError, Result};

/// What to update and with which value.
pub struct Request {
    /// User or organization whose repositories are scanned
    pub target: Login,
    /// Secret name as typed by the user
    pub name: SecretName,
    /// New plaintext value, wiped on drop
    pub value: Zeroizing<String>,
}

impl Request {
    /// Validate the positional arguments.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTarget` for a login the service would
    /// not issue (it ends up in URL paths) and
    /// `ConfigError::InvalidSecretName` for a name the service would refuse.
    pub fn new(target: &str, name: &str, value: String) -> std::result::Result<Self, ConfigError> {
        let value = Zeroizing::new(value);

        Ok(Self {
            target: parse_login(target)?,
            name: SecretName::parse(name)?,
            value,
        })
    }
}

/// Validate a user or organization login.
///
/// Logins are ASCII alphanumerics and hyphens, and never start or end with
/// a hyphen.
fn parse_login(login: &str) -> std::result::Result<Login, ConfigError> {
    let login = login.trim();
    let invalid = |reason| ConfigError::InvalidTarget {
        login: login.to_string(),
        reason,
    };

    if login.is_empty() {
        return Err(invalid("empty"));
    }
    if !login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid("only letters, digits and hyphens are allowed"));
    }
    if login.starts_with('-') || login.ends_with('-') {
        return Err(invalid("must not start or end with a hyphen"));
    }

    Ok(login.to_string())
}

/// A repository that already defines the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub repository: Repository,
    /// The secret's name as the repository spells it
    pub secret: String,
}

/// Run the whole workflow against a remote.
///
/// # Errors
///
/// Discovery and org failures always abort. Per-repository failures abort
/// unless `config.keep_going` is set, in which case they are recorded in
/// [`Report::skipped`].
pub fn run(github: &dyn GitHub, config: &Config, request: &Request) -> Result<Report> {
    let mut report = Report {
        dry_run: config.dry_run,
        ..Default::default()
    };

    let repos = discover(github, &request.target)?;
    let matched = filter_with_secret(github, repos, &request.name, config, &mut report)?;
    update_repositories(github, &matched, &request.value, config, &mut report)?;
    report.org = reconcile_org(github, request, config.dry_run)?;

    Ok(report)
}

/// List every administered repository of the target.
pub fn discover(github: &dyn GitHub, target: &str) -> Result<Vec<Repository>> {
    debug!(owner = target, "fetching repository list");
    let repos = github.list_repositories(target)?;
    debug!(count = repos.len(), "fetched repository list");
    Ok(repos)
}

/// Keep the repositories that define a secret named `name`, in input order.
///
/// Repositories without secrets are dropped silently. A failed listing
/// aborts, or is recorded as skipped when `config.keep_going` is set.
pub fn filter_with_secret(
    github: &dyn GitHub,
    repos: Vec<Repository>,
    name: &SecretName,
    config: &Config,
    report: &mut Report,
) -> Result<Vec<Match>> {
    debug!(secret = %name, "looking for repositories using secret");
    let mut matched = Vec::new();

    for repository in repos {
        let names = match github.list_secret_names(&repository) {
            Ok(names) => names,
            Err(e) if config.keep_going => {
                warn!(repo = %repository, error = %e, "skipping repository");
                report.skipped.push(Skipped {
                    repository,
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        if let Some(secret) = names.into_iter().find(|n| name.matches(n)) {
            matched.push(Match { repository, secret });
        }
    }

    debug!(count = matched.len(), secret = %name, "found repositories with secret");
    Ok(matched)
}

/// Re-seal and write the secret on each matched repository, one at a time.
///
/// On an aborting failure, the repositories already written are logged
/// before the error is returned.
pub fn update_repositories(
    github: &dyn GitHub,
    matched: &[Match],
    value: &str,
    config: &Config,
    report: &mut Report,
) -> Result<()> {
    for m in matched {
        if config.dry_run {
            info!(repo = %m.repository, "would update");
            report.updated.push(m.repository.clone());
            continue;
        }

        debug!(repo = %m.repository, "updating");
        match update_repository(github, m, value) {
            Ok(()) => {
                debug!(repo = %m.repository, "updated");
                report.updated.push(m.repository.clone());
            }
            Err(e) if config.keep_going => {
                warn!(repo = %m.repository, error = %e, "skipping repository");
                report.skipped.push(Skipped {
                    repository: m.repository.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                if !report.updated.is_empty() {
                    let done: Vec<String> = report.updated.iter().map(|r| r.to_string()).collect();
                    warn!(
                        updated = %done.join(", "),
                        failed = %m.repository,
                        "aborting; earlier repositories were already updated"
                    );
                }
                return Err(e);
            }
        }
    }

    Ok(())
}

fn update_repository(github: &dyn GitHub, m: &Match, value: &str) -> Result<()> {
    let key = github.repo_public_key(&m.repository)?;
    let sealed = SealedSecret {
        encrypted_value: cipher::seal(&key, value)?,
        key_id: key.key_id,
    };
    github.put_repo_secret(&m.repository, &m.secret, &sealed)
}

/// Update the organization-level secret if the target is an organization
/// that already defines it.
///
/// The existing visibility is written back unchanged.
pub fn reconcile_org(github: &dyn GitHub, request: &Request, dry_run: bool) -> Result<OrgOutcome> {
    let org = request.target.as_str();

    debug!(login = org, "checking whether target is an organization");
    let kind = github.account_type(org)?;
    if !kind.is_organization() {
        debug!(login = org, kind = %kind, "not an organization; skipping org secret");
        return Ok(OrgOutcome::NotOrganization);
    }

    let secret = match github.org_secret(org, request.name.as_str())? {
        Lookup::Found(secret) => secret,
        Lookup::NotFound => {
            debug!(org, secret = %request.name, "org secret does not exist");
            return Ok(OrgOutcome::NoSecret);
        }
    };

    if dry_run {
        info!(org, "would update org secret");
        return Ok(OrgOutcome::Planned {
            visibility: secret.visibility,
        });
    }

    debug!(org, "fetching org public key");
    let key = github.org_public_key(org)?;
    let sealed = SealedSecret {
        encrypted_value: cipher::seal(&key, &request.value)?,
        key_id: key.key_id,
    };

    debug!(org, visibility = %secret.visibility, "updating org secret");
    github.put_org_secret(org, &secret.name, &sealed, &secret.visibility)?;
    debug!(org, "org secret updated");

    Ok(OrgOutcome::Updated {
        visibility: secret.visibility,
    })
}
