//! Outcome of a propagation run.

use super::{Repository, Visibility};

/// Where the organization-level reconciliation ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrgOutcome {
    /// Target is not an organization; nothing to do.
    #[default]
    NotOrganization,
    /// Target is an organization without a secret of that name.
    NoSecret,
    /// Org secret was re-sealed and written with its visibility unchanged.
    Updated { visibility: Visibility },
    /// Dry run: the org secret exists and would have been updated.
    Planned { visibility: Visibility },
}

/// A repository left untouched because a call failed under `--keep-going`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub repository: Repository,
    pub reason: String,
}

/// Summary of a run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Repositories that matched and were updated (or would be, in a dry run)
    pub updated: Vec<Repository>,
    /// Repositories that failed and were skipped
    pub skipped: Vec<Skipped>,
    pub org: OrgOutcome,
    pub dry_run: bool,
}

impl Report {
    /// Number of upsert calls made (or planned).
    pub fn writes(&self) -> usize {
        let org = matches!(
            self.org,
            OrgOutcome::Updated { .. } | OrgOutcome::Planned { .. }
        );
        self.updated.len() + usize::from(org)
    }

    /// True when every matching repository was handled.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
