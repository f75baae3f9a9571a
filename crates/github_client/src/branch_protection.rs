//! Branch protection domain types.
//!
//! This module contains types representing GitHub branch protection rules: the
//! flattened current-state model the reconciler merges against, the nested wire
//! shape GitHub returns from a protection lookup, and the full update payload
//! submitted when protection is (re)applied.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "branch_protection_tests.rs"]
mod tests;

/// The protection rules currently configured for a repository branch.
///
/// `BranchProtection::default()` is the well-defined empty state used when a
/// branch has no protection configured at all: every rule disabled, no
/// required reviews, no status-check contexts, and no push restrictions.
///
/// # Examples
///
/// ```rust
/// use github_client::BranchProtection;
///
/// let unprotected = BranchProtection::default();
/// assert_eq!(unprotected.required_approving_review_count, 0);
/// assert!(unprotected.push_restriction_teams.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BranchProtection {
    /// Whether status checks require the branch to be up to date before merging
    pub strict_status_checks: bool,
    /// Names of the status checks that must pass before merging
    pub status_check_contexts: Vec<String>,
    /// Whether approvals are dismissed when new commits are pushed
    pub dismiss_stale_reviews: bool,
    /// Whether a code owner must review pull requests
    pub require_code_owner_reviews: bool,
    /// Number of approving reviews required before merging
    pub required_approving_review_count: u32,
    /// Whether the rules are enforced for repository administrators
    pub enforce_admins: bool,
    /// Slugs of the teams allowed to push to the branch; empty when pushes
    /// are unrestricted
    pub push_restriction_teams: Vec<String>,
}

/// Wire shape of GitHub's branch protection lookup response.
///
/// Every section is optional in the response; absent sections flatten to the
/// corresponding part of the empty state.
#[derive(Debug, Deserialize)]
pub(crate) struct ProtectionResponse {
    #[serde(default)]
    required_status_checks: Option<StatusChecksResponse>,
    #[serde(default)]
    enforce_admins: Option<EnforceAdminsResponse>,
    #[serde(default)]
    required_pull_request_reviews: Option<ReviewsResponse>,
    #[serde(default)]
    restrictions: Option<RestrictionsResponse>,
}

#[derive(Debug, Deserialize)]
struct StatusChecksResponse {
    #[serde(default)]
    strict: bool,
    #[serde(default)]
    contexts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EnforceAdminsResponse {
    #[serde(default)]
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    dismiss_stale_reviews: bool,
    #[serde(default)]
    require_code_owner_reviews: bool,
    #[serde(default)]
    required_approving_review_count: u32,
}

#[derive(Debug, Deserialize)]
struct RestrictionsResponse {
    #[serde(default)]
    teams: Vec<TeamRef>,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    slug: String,
}

impl From<ProtectionResponse> for BranchProtection {
    fn from(value: ProtectionResponse) -> Self {
        let status_checks = value.required_status_checks.unwrap_or(StatusChecksResponse {
            strict: false,
            contexts: Vec::new(),
        });
        let reviews = value
            .required_pull_request_reviews
            .unwrap_or(ReviewsResponse {
                dismiss_stale_reviews: false,
                require_code_owner_reviews: false,
                required_approving_review_count: 0,
            });

        Self {
            strict_status_checks: status_checks.strict,
            status_check_contexts: status_checks.contexts,
            dismiss_stale_reviews: reviews.dismiss_stale_reviews,
            require_code_owner_reviews: reviews.require_code_owner_reviews,
            required_approving_review_count: reviews.required_approving_review_count,
            enforce_admins: value.enforce_admins.map(|e| e.enabled).unwrap_or(false),
            push_restriction_teams: value
                .restrictions
                .map(|r| r.teams.into_iter().map(|t| t.slug).collect())
                .unwrap_or_default(),
        }
    }
}

/// The complete protection payload submitted when updating a branch.
///
/// GitHub's update endpoint replaces the whole protection object, so every
/// section is always present; `restrictions` serializes as `null` when the
/// branch should not restrict pushes (including after a restriction list has
/// been cleared).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchProtectionUpdate {
    /// Status check requirements
    pub required_status_checks: RequiredStatusChecksUpdate,
    /// Whether to enforce the rules for administrators
    pub enforce_admins: bool,
    /// Pull request review requirements
    pub required_pull_request_reviews: RequiredReviewsUpdate,
    /// Push restrictions; `None` serializes as `null`, meaning unrestricted
    pub restrictions: Option<RestrictionsUpdate>,
}

/// Status check requirements within a [`BranchProtectionUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredStatusChecksUpdate {
    /// Whether the branch must be up to date before merging
    pub strict: bool,
    /// The status checks that must pass
    pub contexts: Vec<String>,
}

/// Review requirements within a [`BranchProtectionUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredReviewsUpdate {
    /// Whether approvals are dismissed on new commits
    pub dismiss_stale_reviews: bool,
    /// Whether a code owner review is required
    pub require_code_owner_reviews: bool,
    /// Number of approving reviews required
    pub required_approving_review_count: u32,
}

/// Push restrictions within a [`BranchProtectionUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestrictionsUpdate {
    /// Logins of users allowed to push
    pub users: Vec<String>,
    /// Slugs of teams allowed to push
    pub teams: Vec<String>,
}

impl RestrictionsUpdate {
    /// Builds a team-only restriction set.
    pub fn teams(teams: Vec<String>) -> Self {
        Self {
            users: Vec::new(),
            teams,
        }
    }
}
