//! Branch protection update command.
//!
//! Applies protection-rule overrides across the branches of one repository or
//! of every repository in the organization. Branches without existing
//! protection are configured starting from an empty rule set.

use clap::Args;
use github_client::OrganizationClient;
use repo_sweep_core::{
    run_branch_protection_update, BatchReport, BranchFilter, BranchProtectionOverrides, Intent,
    ListIntent, RepositoryScope,
};
use tracing::instrument;

use crate::errors::Error;

#[cfg(test)]
#[path = "branches_cmd_tests.rs"]
mod tests;

/// Arguments for the `branches` command.
#[derive(Args, Debug, Clone)]
pub struct BranchesArgs {
    /// Repository to update; omit (or pass `*`) to update every repository.
    #[arg(long, value_name = "NAME")]
    pub repo: Option<String>,

    /// Comma separated list of branches to update; omit to update all
    /// branches of each targeted repository.
    #[arg(long = "branch", value_delimiter = ',', value_name = "NAMES")]
    pub branches: Vec<String>,

    /// Require branches to be up to date before merging; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub strict: Option<bool>,

    /// Dismiss stale approvals when new commits are pushed; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub dismiss_stale_reviews: Option<bool>,

    /// Require a code owner review on pull requests; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub code_owner_reviews: Option<bool>,

    /// Enforce the protection rules for administrators; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub enforce_admins: Option<bool>,

    /// Number of approving reviews required; omit to leave as is.
    #[arg(long, value_name = "COUNT")]
    pub required_reviews: Option<u32>,

    /// Comma separated list of teams allowed to push to the branches.
    ///
    /// Passing this replaces the existing team list; omitting it leaves the
    /// existing teams untouched.
    #[arg(long, value_delimiter = ',', value_name = "SLUGS")]
    pub teams: Vec<String>,

    /// Remove every team from the push restrictions.
    ///
    /// Cannot be combined with `--teams`; to change the list, pass only the
    /// desired final teams.
    #[arg(long)]
    pub clear_teams: bool,
}

/// Translates the raw arguments into the core's override model.
///
/// # Errors
///
/// Returns the core's validation error when `--clear-teams` is combined with
/// an explicit `--teams` list.
pub fn build_overrides(args: &BranchesArgs) -> Result<BranchProtectionOverrides, Error> {
    let push_restriction_teams = ListIntent::from_parts(args.clear_teams, args.teams.clone())?;

    Ok(BranchProtectionOverrides {
        strict_status_checks: Intent::from(args.strict),
        dismiss_stale_reviews: Intent::from(args.dismiss_stale_reviews),
        require_code_owner_reviews: Intent::from(args.code_owner_reviews),
        enforce_admins: Intent::from(args.enforce_admins),
        required_approving_review_count: Intent::from(args.required_reviews),
        push_restriction_teams,
    })
}

/// Translates the raw arguments into the branch inclusion filter.
///
/// # Errors
///
/// Returns the core's validation error when `*` is combined with explicit
/// branch names.
pub fn build_filter(args: &BranchesArgs) -> Result<BranchFilter, Error> {
    let filter = BranchFilter::from_entries(args.branches.clone())?;
    Ok(filter)
}

/// Runs the branch protection batch.
///
/// The override model and filter are validated before any remote call; an
/// invalid combination aborts the batch up front.
///
/// # Errors
///
/// Returns an [`Error`] for invalid argument combinations and for failures
/// enumerating the targeted repositories.
#[instrument(skip(client, args))]
pub async fn execute(
    client: &impl OrganizationClient,
    org: &str,
    args: &BranchesArgs,
) -> Result<BatchReport, Error> {
    let overrides = build_overrides(args)?;
    let filter = build_filter(args)?;
    let scope = RepositoryScope::from_entry(args.repo.clone());

    let report = run_branch_protection_update(client, org, &scope, &filter, &overrides).await?;
    Ok(report)
}
