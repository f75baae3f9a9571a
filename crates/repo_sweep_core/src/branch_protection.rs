//! Branch protection reconciliation.
//!
//! For every targeted branch, this module reads the branch's current
//! protection rules, merges them with the operator's sparse overrides, and
//! replaces the protection in a single update call. A branch with no
//! protection configured is a normal starting point: the merge then runs
//! against the default empty state instead of failing.

use github_client::{
    BranchProtection, BranchProtectionUpdate, Error as ClientError, OrganizationClient,
    RequiredReviewsUpdate, RequiredStatusChecksUpdate, RestrictionsUpdate,
};
use tracing::{debug, info, warn};

use crate::errors::Error;
use crate::filter::{BranchFilter, RepositoryScope};
use crate::outcome::{BatchReport, Outcome};
use crate::overrides::BranchProtectionOverrides;

#[cfg(test)]
#[path = "branch_protection_tests.rs"]
mod tests;

/// Merges sparse overrides with a branch's current protection rules.
///
/// Scalar fields follow the pass-through rule; the push-restriction team list
/// follows its three-way intent (keep, clear, replace). The status-check
/// contexts always pass through from the current state. Restrictions become
/// `None` (serialized as `null`, meaning unrestricted) exactly when the
/// merged team list is empty.
pub fn merge_branch_protection(
    current: &BranchProtection,
    overrides: &BranchProtectionOverrides,
) -> BranchProtectionUpdate {
    let teams = overrides
        .push_restriction_teams
        .resolve(current.push_restriction_teams.clone());

    BranchProtectionUpdate {
        required_status_checks: RequiredStatusChecksUpdate {
            strict: overrides
                .strict_status_checks
                .resolve(current.strict_status_checks),
            contexts: current.status_check_contexts.clone(),
        },
        enforce_admins: overrides.enforce_admins.resolve(current.enforce_admins),
        required_pull_request_reviews: RequiredReviewsUpdate {
            dismiss_stale_reviews: overrides
                .dismiss_stale_reviews
                .resolve(current.dismiss_stale_reviews),
            require_code_owner_reviews: overrides
                .require_code_owner_reviews
                .resolve(current.require_code_owner_reviews),
            required_approving_review_count: overrides
                .required_approving_review_count
                .resolve(current.required_approving_review_count),
        },
        restrictions: if teams.is_empty() {
            None
        } else {
            Some(RestrictionsUpdate::teams(teams))
        },
    }
}

/// Applies branch-protection overrides across the targeted branches.
///
/// The targeted repositories are resolved from `scope`, their branches are
/// enumerated, and each branch accepted by `filter` is reconciled strictly
/// sequentially. Branch listing failures and per-branch fetch/apply failures
/// are recorded in the report; only the initial repository enumeration can
/// abort the batch.
///
/// # Arguments
///
/// * `client` - The GitHub client to enumerate and update through.
/// * `org` - The organization under management.
/// * `scope` - All repositories, or a single one by name.
/// * `filter` - Which branches of each repository to process.
/// * `overrides` - The validated override model for this batch.
///
/// # Errors
///
/// Returns [`Error::Enumeration`] when the repositories in scope cannot be
/// listed (or the single named repository cannot be fetched).
pub async fn run_branch_protection_update(
    client: &impl OrganizationClient,
    org: &str,
    scope: &RepositoryScope,
    filter: &BranchFilter,
    overrides: &BranchProtectionOverrides,
) -> Result<BatchReport, Error> {
    let repositories = resolve_scope(client, org, scope).await?;

    info!(
        org = org,
        repositories = repositories.len(),
        "Updating branch protection"
    );

    let mut report = BatchReport::new();

    for repository in &repositories {
        let branches = match client.list_branches(org, repository).await {
            Ok(branches) => branches,
            Err(e) => {
                warn!(
                    repository = repository,
                    reason = e.to_string(),
                    "Failed to list branches"
                );
                report.record(repository.clone(), Outcome::failed(e.to_string()));
                continue;
            }
        };

        for branch in &branches {
            if !filter.matches(&branch.name) {
                debug!(
                    repository = repository,
                    branch = branch.name,
                    "Ignoring branch"
                );
                continue;
            }

            let resource = format!("{}/{}", repository, branch.name);
            let outcome =
                reconcile_branch(client, org, repository, &branch.name, overrides).await;
            if let Outcome::Failed { reason } = &outcome {
                warn!(
                    resource = resource,
                    reason = reason,
                    "Branch protection update failed"
                );
            }
            report.record(resource, outcome);
        }
    }

    info!(
        org = org,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Finished updating branch protection"
    );

    Ok(report)
}

/// Resolves the repository names targeted by a scope.
async fn resolve_scope(
    client: &impl OrganizationClient,
    org: &str,
    scope: &RepositoryScope,
) -> Result<Vec<String>, Error> {
    match scope {
        RepositoryScope::AllRepositories => {
            let repositories =
                client
                    .list_org_repositories(org)
                    .await
                    .map_err(|source| Error::Enumeration {
                        scope: format!("repositories of {}", org),
                        source,
                    })?;
            Ok(repositories.into_iter().map(|r| r.name).collect())
        }
        RepositoryScope::Single(name) => {
            let repository =
                client
                    .get_repository(org, name)
                    .await
                    .map_err(|source| Error::Enumeration {
                        scope: format!("repository {}/{}", org, name),
                        source,
                    })?;
            Ok(vec![repository.name])
        }
    }
}

/// Runs fetch, merge, and apply for one branch.
///
/// A `NotFound` from the protection lookup is the expected result for a
/// branch that has never been protected; the merge then starts from the
/// default empty state. Any other lookup error ends this branch's
/// reconciliation as `Failed`.
async fn reconcile_branch(
    client: &impl OrganizationClient,
    org: &str,
    repository: &str,
    branch: &str,
    overrides: &BranchProtectionOverrides,
) -> Outcome {
    debug!(
        repository = repository,
        branch = branch,
        "Processing branch protection update"
    );

    let current = match client.get_branch_protection(org, repository, branch).await {
        Ok(protection) => protection,
        Err(ClientError::NotFound) => {
            debug!(
                repository = repository,
                branch = branch,
                "Branch has no protection configured, starting from the empty state"
            );
            BranchProtection::default()
        }
        Err(e) => return Outcome::failed(e.to_string()),
    };

    let update = merge_branch_protection(&current, overrides);

    match client
        .update_branch_protection(org, repository, branch, &update)
        .await
    {
        Ok(()) => {
            debug!(
                repository = repository,
                branch = branch,
                "Processed branch protection update"
            );
            Outcome::Succeeded
        }
        Err(e) => Outcome::failed(e.to_string()),
    }
}
