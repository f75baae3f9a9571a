//! Team repository access assignment.
//!
//! Grants one team a permission level on the targeted repositories. There is
//! no merge step here: the grant endpoint is idempotent and replaces any
//! existing permission, so each repository needs exactly one apply call.

use github_client::{OrganizationClient, TeamRepositoryPermission};
use tracing::{debug, info, warn};

use crate::errors::Error;
use crate::filter::RepositoryScope;
use crate::outcome::{BatchReport, Outcome};

#[cfg(test)]
#[path = "team_access_tests.rs"]
mod tests;

/// Grants a team the given permission on every repository in scope.
///
/// Repositories are processed strictly sequentially, one outcome each; a
/// failed grant never stops the batch.
///
/// # Arguments
///
/// * `client` - The GitHub client to enumerate and update through.
/// * `org` - The organization under management.
/// * `team_slug` - The slug of the team receiving access.
/// * `permission` - The permission level to grant.
/// * `scope` - All repositories, or a single one by name.
///
/// # Errors
///
/// Returns [`Error::Enumeration`] when the repositories in scope cannot be
/// resolved.
pub async fn run_team_assignment(
    client: &impl OrganizationClient,
    org: &str,
    team_slug: &str,
    permission: TeamRepositoryPermission,
    scope: &RepositoryScope,
) -> Result<BatchReport, Error> {
    let repositories = resolve_scope(client, org, scope).await?;

    info!(
        org = org,
        team = team_slug,
        permission = %permission,
        repositories = repositories.len(),
        "Assigning team to repositories"
    );

    let mut report = BatchReport::new();

    for repository in &repositories {
        debug!(
            team = team_slug,
            repository = repository,
            "Processing team assignment"
        );

        let outcome = match client
            .add_team_repository(org, team_slug, repository, permission)
            .await
        {
            Ok(()) => Outcome::Succeeded,
            Err(e) => {
                warn!(
                    team = team_slug,
                    repository = repository,
                    reason = e.to_string(),
                    "Team assignment failed"
                );
                Outcome::failed(e.to_string())
            }
        };
        report.record(repository.clone(), outcome);
    }

    info!(
        org = org,
        team = team_slug,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Finished assigning team"
    );

    Ok(report)
}

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
