//! Team access assignment command.
//!
//! Grants one team a permission level on one repository or on every
//! repository in the organization.

use std::str::FromStr;

use clap::Args;
use github_client::{OrganizationClient, TeamRepositoryPermission};
use repo_sweep_core::{run_team_assignment, BatchReport, RepositoryScope};
use tracing::instrument;

use crate::errors::Error;

#[cfg(test)]
#[path = "teams_cmd_tests.rs"]
mod tests;

/// Arguments for the `teams` command.
#[derive(Args, Debug, Clone)]
pub struct TeamsArgs {
    /// Slug of the team to grant access to.
    #[arg(long, value_name = "SLUG")]
    pub team: String,

    /// Permission to grant: read, write, or admin.
    #[arg(long, value_name = "LEVEL")]
    pub permission: String,

    /// Repository to grant access on; omit (or pass `*`) for every repository.
    #[arg(long, value_name = "NAME")]
    pub repo: Option<String>,
}

/// Parses the permission argument.
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] for an unknown permission name.
pub fn parse_permission(raw: &str) -> Result<TeamRepositoryPermission, Error> {
    TeamRepositoryPermission::from_str(raw).map_err(Error::InvalidArguments)
}

/// Runs the team assignment batch.
///
/// # Errors
///
/// Returns an [`Error`] for an unknown permission name or a failure resolving
/// the targeted repositories.
#[instrument(skip(client, args))]
pub async fn execute(
    client: &impl OrganizationClient,
    org: &str,
    args: &TeamsArgs,
) -> Result<BatchReport, Error> {
    let permission = parse_permission(&args.permission)?;
    let scope = RepositoryScope::from_entry(args.repo.clone());

    let report = run_team_assignment(client, org, &args.team, permission, &scope).await?;
    Ok(report)
}
