// Unit tests for repository settings reconciliation.
// Covers the merge laws and the batch driver's failure isolation with
// isolated mock clients.

use super::*;
use async_trait::async_trait;
use github_client::{
    Branch, BranchProtection, BranchProtectionUpdate, Error as GitHubError, NewLabel,
    TeamRepositoryPermission,
};
use std::sync::Mutex;

/// Mock client serving a fixed repository listing and failing updates for
/// selected repositories.
struct MockOrgClient {
    repositories: Result<Vec<Repository>, fn() -> GitHubError>,
    failing_updates: Vec<String>,
    updates: Mutex<Vec<(String, RepositorySettingsUpdate)>>,
}

impl MockOrgClient {
    fn with_repositories(repositories: Vec<Repository>) -> Self {
        Self {
            repositories: Ok(repositories),
            failing_updates: Vec::new(),
            updates: Mutex::new(Vec::new()),
        }
    }

    fn failing_enumeration() -> Self {
        Self {
            repositories: Err(|| GitHubError::RateLimitExceeded),
            failing_updates: Vec::new(),
            updates: Mutex::new(Vec::new()),
        }
    }

    fn failing_update_for(mut self, name: &str) -> Self {
        self.failing_updates.push(name.to_string());
        self
    }

    fn recorded_updates(&self) -> Vec<(String, RepositorySettingsUpdate)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrganizationClient for MockOrgClient {
    async fn list_org_repositories(&self, _org: &str) -> Result<Vec<Repository>, GitHubError> {
        match &self.repositories {
            Ok(repositories) => Ok(repositories.clone()),
            Err(make_error) => Err(make_error()),
        }
    }

    async fn get_repository(&self, _org: &str, _repo: &str) -> Result<Repository, GitHubError> {
        panic!("get_repository is not used by repository batches");
    }

    async fn update_repository_settings(
        &self,
        _org: &str,
        repo: &str,
        settings: &RepositorySettingsUpdate,
    ) -> Result<(), GitHubError> {
        if self.failing_updates.iter().any(|name| name == repo) {
            return Err(GitHubError::PermissionDenied(
                "Must have admin rights".to_string(),
            ));
        }
        self.updates
            .lock()
            .unwrap()
            .push((repo.to_string(), settings.clone()));
        Ok(())
    }

    async fn list_branches(&self, _org: &str, _repo: &str) -> Result<Vec<Branch>, GitHubError> {
        panic!("list_branches is not used by repository batches");
    }

    async fn get_branch_protection(
        &self,
        _org: &str,
        _repo: &str,
        _branch: &str,
    ) -> Result<BranchProtection, GitHubError> {
        panic!("get_branch_protection is not used by repository batches");
    }

    async fn update_branch_protection(
        &self,
        _org: &str,
        _repo: &str,
        _branch: &str,
        _update: &BranchProtectionUpdate,
    ) -> Result<(), GitHubError> {
        panic!("update_branch_protection is not used by repository batches");
    }

    async fn add_team_repository(
        &self,
        _org: &str,
        _team_slug: &str,
        _repo: &str,
        _permission: TeamRepositoryPermission,
    ) -> Result<(), GitHubError> {
        panic!("add_team_repository is not used by repository batches");
    }

    async fn create_label(
        &self,
        _org: &str,
        _repo: &str,
        _label: &NewLabel,
    ) -> Result<(), GitHubError> {
        panic!("create_label is not used by repository batches");
    }

    async fn delete_label(
        &self,
        _org: &str,
        _repo: &str,
        _name: &str,
    ) -> Result<(), GitHubError> {
        panic!("delete_label is not used by repository batches");
    }
}

fn repository(name: &str) -> Repository {
    Repository {
        id: 1,
        name: name.to_string(),
        private: Some(false),
        has_issues: Some(true),
        has_wiki: Some(false),
        has_downloads: Some(true),
        allow_merge_commit: Some(true),
        allow_rebase_merge: Some(true),
        allow_squash_merge: Some(false),
    }
}

#[test]
fn test_from_repository_substitutes_github_defaults() {
    let settings = RepositorySettings::from_repository(&Repository::new(9, "bare".to_string()));

    assert!(!settings.private);
    assert!(settings.issues);
    assert!(settings.wiki);
    assert!(settings.downloads);
    assert!(settings.merge_commits);
    assert!(settings.rebase_merges);
    assert!(settings.squash_merges);
}

#[test]
fn test_merge_with_all_keep_is_the_identity() {
    let current = RepositorySettings::from_repository(&repository("unchanged"));
    let merged = merge_repository_settings(current, &RepositorySettingsOverrides::new());

    assert_eq!(merged, current);
}

#[test]
fn test_merge_set_overrides_win_over_current_values() {
    use crate::overrides::Intent;

    let current = RepositorySettings::from_repository(&repository("target"));
    let overrides = RepositorySettingsOverrides {
        private: Intent::Set(true),
        squash_merges: Intent::Set(true),
        ..Default::default()
    };

    let merged = merge_repository_settings(current, &overrides);

    assert!(merged.private);
    assert!(merged.squash_merges);
    // Untouched fields pass through.
    assert_eq!(merged.issues, current.issues);
    assert_eq!(merged.wiki, current.wiki);
    assert_eq!(merged.merge_commits, current.merge_commits);
}

#[tokio::test]
async fn test_batch_continues_past_a_failing_repository() {
    let client = MockOrgClient::with_repositories(vec![
        repository("r1"),
        repository("r2"),
        repository("r3"),
    ])
    .failing_update_for("r2");

    let report = run_repository_update(
        &client,
        "acme",
        &RepositorySettingsOverrides::new(),
        &ExclusionFilter::none(),
    )
    .await
    .expect("enumeration should succeed");

    let outcomes = report.outcomes();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].resource, "r1");
    assert!(outcomes[0].outcome.is_success());
    assert_eq!(outcomes[1].resource, "r2");
    assert!(matches!(outcomes[1].outcome, Outcome::Failed { .. }));
    assert_eq!(outcomes[2].resource, "r3");
    assert!(outcomes[2].outcome.is_success());
}

#[tokio::test]
async fn test_excluded_repositories_are_skipped_case_insensitively() {
    let client =
        MockOrgClient::with_repositories(vec![repository("Keep-Me"), repository("Skip-Me")]);

    let report = run_repository_update(
        &client,
        "acme",
        &RepositorySettingsOverrides::new(),
        &ExclusionFilter::new(vec!["skip-me".to_string()]),
    )
    .await
    .unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.outcomes()[0].resource, "Keep-Me");

    let updates = client.recorded_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, "Keep-Me");
}

#[tokio::test]
async fn test_update_carries_the_complete_merged_state() {
    use crate::overrides::Intent;

    let client = MockOrgClient::with_repositories(vec![repository("target")]);
    let overrides = RepositorySettingsOverrides {
        private: Intent::Set(true),
        ..Default::default()
    };

    run_repository_update(&client, "acme", &overrides, &ExclusionFilter::none())
        .await
        .unwrap();

    let updates = client.recorded_updates();
    assert_eq!(updates.len(), 1);
    let (_, update) = &updates[0];

    // Overridden field.
    assert!(update.private);
    // Passed-through current values, all present in the single update call.
    assert!(update.has_issues);
    assert!(!update.has_wiki);
    assert!(update.has_downloads);
    assert!(update.allow_merge_commit);
    assert!(update.allow_rebase_merge);
    assert!(!update.allow_squash_merge);
}

#[tokio::test]
async fn test_enumeration_failure_aborts_the_batch() {
    let client = MockOrgClient::failing_enumeration();

    let result = run_repository_update(
        &client,
        "acme",
        &RepositorySettingsOverrides::new(),
        &ExclusionFilter::none(),
    )
    .await;

    assert!(matches!(result, Err(Error::Enumeration { .. })));
}
