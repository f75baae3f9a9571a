//! # Models
//!
//! This module contains the data models used throughout the RepoSweep core.
//!
//! These models represent the GitHub entities RepoSweep manages, such as
//! repositories, branches, labels, and team permissions. They are designed to be
//! serializable and deserializable to facilitate integration with the GitHub
//! REST API, and they keep `octocrab` types from leaking across the crate
//! boundary.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub repository.
///
/// This struct contains the identity of a repository together with the
/// settings RepoSweep reconciles. The settings fields are optional because
/// GitHub omits them from some API responses; consumers substitute the
/// documented defaults when a field is absent.
///
/// # Examples
///
/// ```rust
/// use github_client::Repository;
///
/// let repo = Repository::new(42, "my-repo".to_string());
/// assert_eq!(repo.name, "my-repo");
/// assert_eq!(repo.private, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Repository {
    /// The unique ID of the repository
    pub id: u64,
    /// The name of the repository (without owner)
    pub name: String,
    /// Whether the repository is private
    pub private: Option<bool>,
    /// Whether issues are enabled for this repository
    pub has_issues: Option<bool>,
    /// Whether the wiki is enabled for this repository
    pub has_wiki: Option<bool>,
    /// Whether downloads are enabled for this repository
    pub has_downloads: Option<bool>,
    /// Whether merge commits are allowed for pull requests
    pub allow_merge_commit: Option<bool>,
    /// Whether rebase merging is allowed for pull requests
    pub allow_rebase_merge: Option<bool>,
    /// Whether squash merging is allowed for pull requests
    pub allow_squash_merge: Option<bool>,
}

impl Repository {
    /// Creates a new `Repository` with all settings unknown.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique ID of the repository
    /// * `name` - The name of the repository
    pub fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            private: None,
            has_issues: None,
            has_wiki: None,
            has_downloads: None,
            allow_merge_commit: None,
            allow_rebase_merge: None,
            allow_squash_merge: None,
        }
    }
}

impl From<octocrab::models::Repository> for Repository {
    fn from(value: octocrab::models::Repository) -> Self {
        Self {
            id: *value.id,
            name: value.name,
            private: value.private,
            has_issues: value.has_issues,
            has_wiki: value.has_wiki,
            has_downloads: value.has_downloads,
            allow_merge_commit: value.allow_merge_commit,
            allow_rebase_merge: value.allow_rebase_merge,
            allow_squash_merge: value.allow_squash_merge,
        }
    }
}

/// Represents a branch within a repository.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Branch {
    /// The name of the branch
    pub name: String,
    /// Whether the branch currently has protection configured
    #[serde(default)]
    pub protected: bool,
}

/// Represents a label to be created on a repository.
///
/// # Examples
///
/// ```rust
/// use github_client::NewLabel;
///
/// let label = NewLabel {
///     name: "triage".to_string(),
///     color: "d73a4a".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLabel {
    /// The name of the label
    pub name: String,
    /// The hex color for the label, without the leading `#`
    pub color: String,
}

/// The permission level granted to a team on a repository.
///
/// Serializes to the lowercase strings the GitHub REST API expects
/// (`pull`, `push`, `admin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRepositoryPermission {
    /// Read access
    Pull,
    /// Read and write access
    Push,
    /// Full administrative access
    Admin,
}

impl std::str::FromStr for TeamRepositoryPermission {
    type Err = String;

    /// Parses a permission from operator input.
    ///
    /// Accepts both the API names (`pull`, `push`, `admin`) and the
    /// read/write/admin aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pull" | "read" => Ok(Self::Pull),
            "push" | "write" => Ok(Self::Push),
            "admin" => Ok(Self::Admin),
            other => Err(format!(
                "unknown permission `{}`, expected one of read, write, admin",
                other
            )),
        }
    }
}

impl std::fmt::Display for TeamRepositoryPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
        };
        write!(f, "{}", name)
    }
}

/// Request body for granting a team access to a repository.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRepositoryUpdate {
    /// The permission to grant
    pub permission: TeamRepositoryPermission,
}

/// Represents the settings submitted when updating a repository.
///
/// Unlike a sparse PATCH payload, every field is always serialized: the caller
/// is expected to have merged its desired overrides with the repository's
/// current settings first, so the update carries the complete resulting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettingsUpdate {
    /// Whether the repository is private
    pub private: bool,
    /// Whether issues are enabled
    pub has_issues: bool,
    /// Whether the wiki is enabled
    pub has_wiki: bool,
    /// Whether downloads are enabled
    pub has_downloads: bool,
    /// Whether merge commits are allowed
    pub allow_merge_commit: bool,
    /// Whether rebase merging is allowed
    pub allow_rebase_merge: bool,
    /// Whether squash merging is allowed
    pub allow_squash_merge: bool,
}
