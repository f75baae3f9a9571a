//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub on
//! behalf of an operator-supplied personal access token, together with the
//! [`OrganizationClient`] trait that the reconciliation core consumes. The
//! trait keeps the core independent of the concrete HTTP client and lets tests
//! substitute configurable mock clients.

use async_trait::async_trait;
use http::StatusCode;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{
    Branch, NewLabel, Repository, RepositorySettingsUpdate, TeamRepositoryPermission,
    TeamRepositoryUpdate,
};

pub mod branch_protection;
pub use branch_protection::{
    BranchProtection, BranchProtectionUpdate, RequiredReviewsUpdate, RequiredStatusChecksUpdate,
    RestrictionsUpdate,
};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Operations the reconciliation core needs against a GitHub organization.
///
/// Each method corresponds to one remote read or write. Implementations must
/// report a missing resource as [`Error::NotFound`], distinct from transport
/// and permission failures, because callers treat "no configuration exists"
/// as an expected state rather than an error.
#[async_trait]
pub trait OrganizationClient: Send + Sync {
    /// Lists the repositories of an organization.
    ///
    /// # Arguments
    ///
    /// * `org` - The name of the organization.
    ///
    /// # Errors
    /// Returns an [`Error`] describing the failure when the listing cannot be
    /// retrieved.
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, Error>;

    /// Fetches details for a specific repository.
    ///
    /// # Arguments
    ///
    /// * `org` - The owner of the repository.
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when the repository does not exist.
    async fn get_repository(&self, org: &str, repo: &str) -> Result<Repository, Error>;

    /// Updates settings for a specific repository.
    ///
    /// The `settings` argument carries the complete desired state; every field
    /// is applied in a single call.
    ///
    /// # Errors
    /// Returns an [`Error`] describing the failure when the update is rejected.
    async fn update_repository_settings(
        &self,
        org: &str,
        repo: &str,
        settings: &RepositorySettingsUpdate,
    ) -> Result<(), Error>;

    /// Lists the branches of a repository.
    async fn list_branches(&self, org: &str, repo: &str) -> Result<Vec<Branch>, Error>;

    /// Reads the branch protection rules configured for a branch.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when the branch has no protection
    /// configured; this is an expected result for unprotected branches, not a
    /// failure.
    async fn get_branch_protection(
        &self,
        org: &str,
        repo: &str,
        branch: &str,
    ) -> Result<BranchProtection, Error>;

    /// Replaces the branch protection rules for a branch.
    async fn update_branch_protection(
        &self,
        org: &str,
        repo: &str,
        branch: &str,
        update: &BranchProtectionUpdate,
    ) -> Result<(), Error>;

    /// Grants a team access to a repository at the given permission level.
    ///
    /// The call is idempotent: granting an already-granted permission simply
    /// overwrites it.
    async fn add_team_repository(
        &self,
        org: &str,
        team_slug: &str,
        repo: &str,
        permission: TeamRepositoryPermission,
    ) -> Result<(), Error>;

    /// Creates a label on a repository.
    async fn create_label(&self, org: &str, repo: &str, label: &NewLabel) -> Result<(), Error>;

    /// Deletes a label from a repository.
    async fn delete_label(&self, org: &str, repo: &str, name: &str) -> Result<(), Error>;
}

/// A client for interacting with the GitHub API, authenticated with a
/// personal access token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` over an already-built `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build the underlying instance from a
    /// personal access token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationClient for GitHubClient {
    #[instrument(skip(self), fields(org = %org))]
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, Error> {
        // Reads a single page of up to 100 repositories; pagination strategy
        // is left to the caller's deployment.
        let path = format!("/orgs/{}/repos?per_page=100", org);
        let result: OctocrabResult<Vec<octocrab::models::Repository>> =
            self.client.get(path, None::<&()>).await;

        match result {
            Ok(repositories) => {
                info!(
                    org = org,
                    count = repositories.len(),
                    "Retrieved repositories for organization"
                );
                Ok(repositories.into_iter().map(Repository::from).collect())
            }
            Err(e) => Err(map_octocrab_error("Failed to list repositories", e)),
        }
    }

    #[instrument(skip(self), fields(org = %org, repo = %repo))]
    async fn get_repository(&self, org: &str, repo: &str) -> Result<Repository, Error> {
        let path = format!("/repos/{}/{}", org, repo);
        let result: OctocrabResult<octocrab::models::Repository> =
            self.client.get(path, None::<&()>).await;

        match result {
            Ok(r) => Ok(Repository::from(r)),
            Err(e) => Err(map_octocrab_error("Failed to get repository", e)),
        }
    }

    #[instrument(skip(self, settings), fields(org = %org, repo = %repo))]
    async fn update_repository_settings(
        &self,
        org: &str,
        repo: &str,
        settings: &RepositorySettingsUpdate,
    ) -> Result<(), Error> {
        let path = format!("/repos/{}/{}", org, repo);
        let response: OctocrabResult<octocrab::models::Repository> =
            self.client.patch(path, Some(settings)).await;

        match response {
            Ok(_) => {
                debug!(org = org, repo = repo, "Updated repository settings");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to update repository settings", e)),
        }
    }

    #[instrument(skip(self), fields(org = %org, repo = %repo))]
    async fn list_branches(&self, org: &str, repo: &str) -> Result<Vec<Branch>, Error> {
        let path = format!("/repos/{}/{}/branches?per_page=100", org, repo);
        let result: OctocrabResult<Vec<Branch>> = self.client.get(path, None::<&()>).await;

        result.map_err(|e| map_octocrab_error("Failed to list branches", e))
    }

    #[instrument(skip(self), fields(org = %org, repo = %repo, branch = %branch))]
    async fn get_branch_protection(
        &self,
        org: &str,
        repo: &str,
        branch: &str,
    ) -> Result<BranchProtection, Error> {
        let path = format!("/repos/{}/{}/branches/{}/protection", org, repo, branch);
        let result: OctocrabResult<branch_protection::ProtectionResponse> =
            self.client.get(path, None::<&()>).await;

        match result {
            Ok(response) => Ok(BranchProtection::from(response)),
            Err(e) => Err(map_octocrab_error("Failed to get branch protection", e)),
        }
    }

    #[instrument(skip(self, update), fields(org = %org, repo = %repo, branch = %branch))]
    async fn update_branch_protection(
        &self,
        org: &str,
        repo: &str,
        branch: &str,
        update: &BranchProtectionUpdate,
    ) -> Result<(), Error> {
        let path = format!("/repos/{}/{}/branches/{}/protection", org, repo, branch);
        let response: OctocrabResult<serde_json::Value> =
            self.client.put(path, Some(update)).await;

        match response {
            Ok(_) => {
                debug!(
                    org = org,
                    repo = repo,
                    branch = branch,
                    "Updated branch protection"
                );
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to update branch protection", e)),
        }
    }

    #[instrument(skip(self), fields(org = %org, team = %team_slug, repo = %repo))]
    async fn add_team_repository(
        &self,
        org: &str,
        team_slug: &str,
        repo: &str,
        permission: TeamRepositoryPermission,
    ) -> Result<(), Error> {
        let path = format!("/orgs/{}/teams/{}/repos/{}/{}", org, team_slug, org, repo);
        let body = TeamRepositoryUpdate { permission };

        // The endpoint answers 204 with an empty body, so the raw request
        // variant is used and the status checked directly.
        let response = self
            .client
            ._put(path, Some(&body))
            .await
            .map_err(|e| map_octocrab_error("Failed to update team repository access", e))?;

        expect_success(response.status(), "Failed to update team repository access")
    }

    #[instrument(skip(self, label), fields(org = %org, repo = %repo))]
    async fn create_label(&self, org: &str, repo: &str, label: &NewLabel) -> Result<(), Error> {
        let path = format!("/repos/{}/{}/labels", org, repo);
        let response: OctocrabResult<serde_json::Value> =
            self.client.post(path, Some(label)).await;

        match response {
            Ok(_) => Ok(()),
            Err(e) => Err(map_octocrab_error("Failed to create label", e)),
        }
    }

    #[instrument(skip(self), fields(org = %org, repo = %repo, label = %name))]
    async fn delete_label(&self, org: &str, repo: &str, name: &str) -> Result<(), Error> {
        let path = format!("/repos/{}/{}/labels/{}", org, repo, name);
        let response = self
            .client
            ._delete(path, None::<&()>)
            .await
            .map_err(|e| map_octocrab_error("Failed to delete label", e))?;

        expect_success(response.status(), "Failed to delete label")
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - A GitHub personal access token with sufficient scopes for the
///   organization being managed.
///
/// # Errors
/// Returns an [`Error::AuthError`] when the client cannot be built from the
/// provided token.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(e.to_string()))
}

/// Maps a raw response status to `Ok(())` or the matching [`Error`].
fn expect_success(status: StatusCode, message: &str) -> Result<(), Error> {
    if status.is_success() {
        Ok(())
    } else {
        error!(status = %status, "{}", message);
        Err(status_to_error(status, message))
    }
}

/// Translates an HTTP status code and message into the crate error taxonomy.
///
/// `404` becomes [`Error::NotFound`] so callers can recognize missing
/// configuration; `401`/`403` become [`Error::PermissionDenied`] unless the
/// message identifies a rate-limit rejection.
fn status_to_error(status: StatusCode, message: &str) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound,
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimitExceeded,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            if message.to_ascii_lowercase().contains("rate limit") {
                Error::RateLimitExceeded
            } else {
                Error::PermissionDenied(message.to_string())
            }
        }
        _ => Error::ApiError(format!("{}: {}", status, message)),
    }
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            let err = status_to_error(source.status_code, &source.message);
            // Missing branch protection is an expected lookup result; only
            // genuine failures are logged at error level.
            if matches!(err, Error::NotFound) {
                debug!(error_message = source.message, "{}. Resource not found", message);
            } else {
                error!(
                    status = %source.status_code,
                    error_message = source.message,
                    "{}. Received an error from GitHub",
                    message
                );
            }
            err
        }
        _ => {
            error!(error_message = e.to_string(), "{}", message);
            Error::ApiError(e.to_string())
        }
    }
}
