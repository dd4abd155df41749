//! Shared CLI output helpers.
//!
//! Everything goes to stderr; stdout stays empty.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//! - Dimmed: secondary info

use console::style;

use crate::core::domain::{OrgOutcome, Report, SecretName};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled_stderr()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ updated acme/api`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green().for_stderr(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message (red).
///
/// Example: `✗ no access token`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ skipped acme/api: forbidden`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow().for_stderr(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --pat or set GITHUB_TOKEN`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        eprintln!("{}", style(msg).dim().for_stderr());
    } else {
        eprintln!("{}", msg);
    }
}

/// Print the outcome of a run.
pub fn report(report: &Report, name: &SecretName) {
    let verb = if report.dry_run { "would update" } else { "updated" };

    for repo in &report.updated {
        success(&format!("{} {}", verb, repo));
    }
    for skipped in &report.skipped {
        warn(&format!("skipped {}: {}", skipped.repository, skipped.reason));
    }
    match &report.org {
        OrgOutcome::Updated { visibility } | OrgOutcome::Planned { visibility } => {
            success(&format!("{} org secret (visibility: {})", verb, visibility));
        }
        OrgOutcome::NoSecret => dimmed("org does not define this secret"),
        OrgOutcome::NotOrganization => {}
    }

    if report.writes() == 0 && report.skipped.is_empty() {
        dimmed(&format!("no repositories use {}", name));
    } else {
        dimmed(&format!(
            "{} {} secret(s), {} skipped",
            verb,
            report.writes(),
            report.skipped.len()
        ));
    }
}
