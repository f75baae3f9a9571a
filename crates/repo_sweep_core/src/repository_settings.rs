//! Repository settings reconciliation.
//!
//! For every non-excluded repository of an organization, this module merges
//! the operator's sparse overrides with the repository's current settings and
//! submits the complete merged state in a single update call. Failures are
//! recorded per repository; the batch always runs to the end of the listing.

use github_client::{OrganizationClient, Repository, RepositorySettingsUpdate};
use tracing::{debug, info, warn};

use crate::errors::Error;
use crate::filter::ExclusionFilter;
use crate::outcome::{BatchReport, Outcome};
use crate::overrides::RepositorySettingsOverrides;

#[cfg(test)]
#[path = "repository_settings_tests.rs"]
mod tests;

/// A repository's complete settings, as used for merging.
///
/// GitHub omits optional fields from some listing responses;
/// [`RepositorySettings::from_repository`] substitutes the documented
/// defaults so the merge always works on concrete values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositorySettings {
    /// Whether the repository is private
    pub private: bool,
    /// Whether issues are enabled
    pub issues: bool,
    /// Whether the wiki is enabled
    pub wiki: bool,
    /// Whether downloads are enabled
    pub downloads: bool,
    /// Whether merge commits are allowed
    pub merge_commits: bool,
    /// Whether rebase merging is allowed
    pub rebase_merges: bool,
    /// Whether squash merging is allowed
    pub squash_merges: bool,
}

impl RepositorySettings {
    /// Reads the current settings out of an enumerated repository.
    ///
    /// Absent fields fall back to GitHub's defaults: public, with issues,
    /// wiki, downloads, and all three merge strategies enabled.
    pub fn from_repository(repository: &Repository) -> Self {
        Self {
            private: repository.private.unwrap_or(false),
            issues: repository.has_issues.unwrap_or(true),
            wiki: repository.has_wiki.unwrap_or(true),
            downloads: repository.has_downloads.unwrap_or(true),
            merge_commits: repository.allow_merge_commit.unwrap_or(true),
            rebase_merges: repository.allow_rebase_merge.unwrap_or(true),
            squash_merges: repository.allow_squash_merge.unwrap_or(true),
        }
    }

    /// Converts the settings into the wire payload for an update call.
    pub fn to_update(self) -> RepositorySettingsUpdate {
        RepositorySettingsUpdate {
            private: self.private,
            has_issues: self.issues,
            has_wiki: self.wiki,
            has_downloads: self.downloads,
            allow_merge_commit: self.merge_commits,
            allow_rebase_merge: self.rebase_merges,
            allow_squash_merge: self.squash_merges,
        }
    }
}

/// Merges sparse overrides with a repository's current settings.
///
/// Every field follows the same rule: a `Keep` intent passes the current
/// value through; a `Set` intent wins regardless of the current value.
pub fn merge_repository_settings(
    current: RepositorySettings,
    overrides: &RepositorySettingsOverrides,
) -> RepositorySettings {
    RepositorySettings {
        private: overrides.private.resolve(current.private),
        issues: overrides.issues.resolve(current.issues),
        wiki: overrides.wiki.resolve(current.wiki),
        downloads: overrides.downloads.resolve(current.downloads),
        merge_commits: overrides.merge_commits.resolve(current.merge_commits),
        rebase_merges: overrides.rebase_merges.resolve(current.rebase_merges),
        squash_merges: overrides.squash_merges.resolve(current.squash_merges),
    }
}

/// Applies repository-settings overrides across an organization.
///
/// Repositories are processed strictly sequentially, in the order the listing
/// returned them. A repository whose update fails is recorded as
/// [`Outcome::Failed`] and the batch moves on to the next one.
///
/// # Arguments
///
/// * `client` - The GitHub client to enumerate and update through.
/// * `org` - The organization whose repositories are updated.
/// * `overrides` - The validated override model for this batch.
/// * `exclusions` - Repositories to skip, matched case-insensitively.
///
/// # Errors
///
/// Returns [`Error::Enumeration`] when the repository listing itself fails;
/// per-repository failures are recorded in the report instead.
pub async fn run_repository_update(
    client: &impl OrganizationClient,
    org: &str,
    overrides: &RepositorySettingsOverrides,
    exclusions: &ExclusionFilter,
) -> Result<BatchReport, Error> {
    let repositories =
        client
            .list_org_repositories(org)
            .await
            .map_err(|source| Error::Enumeration {
                scope: format!("repositories of {}", org),
                source,
            })?;

    info!(
        org = org,
        count = repositories.len(),
        "Updating repository settings"
    );

    let mut report = BatchReport::new();

    for repository in &repositories {
        if exclusions.is_excluded(&repository.name) {
            debug!(repository = repository.name, "Ignoring repository");
            continue;
        }

        let outcome = reconcile_repository(client, org, repository, overrides).await;
        if let Outcome::Failed { reason } = &outcome {
            warn!(
                repository = repository.name,
                reason = reason,
                "Repository update failed"
            );
        }
        report.record(repository.name.clone(), outcome);
    }

    info!(
        org = org,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Finished updating repository settings"
    );

    Ok(report)
}

/// Merges and applies the settings for one repository.
///
/// The current state comes from the enumerated repository object, so no
/// separate fetch is needed before the merge.
async fn reconcile_repository(
    client: &impl OrganizationClient,
    org: &str,
    repository: &Repository,
    overrides: &RepositorySettingsOverrides,
) -> Outcome {
    debug!(repository = repository.name, "Processing repository update");

    let current = RepositorySettings::from_repository(repository);
    let merged = merge_repository_settings(current, overrides);

    match client
        .update_repository_settings(org, &repository.name, &merged.to_update())
        .await
    {
        Ok(()) => {
            debug!(
                repository = repository.name,
                "Finished processing repository update"
            );
            Outcome::Succeeded
        }
        Err(e) => Outcome::failed(e.to_string()),
    }
}
