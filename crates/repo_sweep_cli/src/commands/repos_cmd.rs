//! Repository settings update command.
//!
//! Applies tri-state setting overrides across the repositories of an
//! organization. An option that is not given on the command line leaves the
//! corresponding setting untouched on every repository.

use clap::Args;
use github_client::OrganizationClient;
use repo_sweep_core::{
    run_repository_update, BatchReport, ExclusionFilter, Intent, RepositorySettingsOverrides,
};
use tracing::instrument;

use crate::errors::Error;

#[cfg(test)]
#[path = "repos_cmd_tests.rs"]
mod tests;

/// Arguments for the `repos` command.
#[derive(Args, Debug, Clone)]
pub struct ReposArgs {
    /// Make repositories private (true) or public (false); omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub private: Option<bool>,

    /// Enable or disable issues; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub issues: Option<bool>,

    /// Enable or disable the wiki; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub wiki: Option<bool>,

    /// Enable or disable downloads; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub downloads: Option<bool>,

    /// Allow or forbid merge commits; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub merge_commits: Option<bool>,

    /// Allow or forbid rebase merging; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub rebase_merges: Option<bool>,

    /// Allow or forbid squash merging; omit to leave as is.
    #[arg(long, value_name = "BOOL")]
    pub squash_merges: Option<bool>,

    /// Comma separated list of repositories to skip.
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub exclude: Vec<String>,
}

/// Translates the raw arguments into the core's override model.
pub fn build_overrides(args: &ReposArgs) -> RepositorySettingsOverrides {
    RepositorySettingsOverrides {
        private: Intent::from(args.private),
        issues: Intent::from(args.issues),
        wiki: Intent::from(args.wiki),
        downloads: Intent::from(args.downloads),
        merge_commits: Intent::from(args.merge_commits),
        rebase_merges: Intent::from(args.rebase_merges),
        squash_merges: Intent::from(args.squash_merges),
    }
}

/// Runs the repository settings batch.
///
/// # Errors
///
/// Returns an [`Error`] when the repository listing fails; per-repository
/// failures are part of the returned report.
#[instrument(skip(client, args))]
pub async fn execute(
    client: &impl OrganizationClient,
    org: &str,
    args: &ReposArgs,
) -> Result<BatchReport, Error> {
    let overrides = build_overrides(args);
    let exclusions = ExclusionFilter::new(args.exclude.clone());

    let report = run_repository_update(client, org, &overrides, &exclusions).await?;
    Ok(report)
}
