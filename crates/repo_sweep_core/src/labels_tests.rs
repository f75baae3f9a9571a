// Unit tests for bulk label management.

use super::*;
use async_trait::async_trait;
use github_client::{
    Branch, BranchProtection, BranchProtectionUpdate, Error as ClientError, Repository,
    RepositorySettingsUpdate, TeamRepositoryPermission,
};
use std::sync::Mutex;

struct MockOrgClient {
    repositories: Vec<String>,
    missing_labels: Vec<String>,
    created: Mutex<Vec<(String, NewLabel)>>,
    deleted: Mutex<Vec<(String, String)>>,
}

impl MockOrgClient {
    fn with_repositories(names: &[&str]) -> Self {
        Self {
            repositories: names.iter().map(|n| n.to_string()).collect(),
            missing_labels: Vec::new(),
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Marks a repository as not having the label, so deletion returns 404.
    fn missing_label_in(mut self, repo: &str) -> Self {
        self.missing_labels.push(repo.to_string());
        self
    }
}

#[async_trait]
impl OrganizationClient for MockOrgClient {
    async fn list_org_repositories(&self, _org: &str) -> Result<Vec<Repository>, ClientError> {
        Ok(self
            .repositories
            .iter()
            .enumerate()
            .map(|(i, name)| Repository::new(i as u64, name.clone()))
            .collect())
    }

    async fn get_repository(&self, _org: &str, _repo: &str) -> Result<Repository, ClientError> {
        panic!("get_repository is not used by label batches");
    }

    async fn update_repository_settings(
        &self,
        _org: &str,
        _repo: &str,
        _settings: &RepositorySettingsUpdate,
    ) -> Result<(), ClientError> {
        panic!("update_repository_settings is not used by label batches");
    }

    async fn list_branches(&self, _org: &str, _repo: &str) -> Result<Vec<Branch>, ClientError> {
        panic!("list_branches is not used by label batches");
    }

    async fn get_branch_protection(
        &self,
        _org: &str,
        _repo: &str,
        _branch: &str,
    ) -> Result<BranchProtection, ClientError> {
        panic!("get_branch_protection is not used by label batches");
    }

    async fn update_branch_protection(
        &self,
        _org: &str,
        _repo: &str,
        _branch: &str,
        _update: &BranchProtectionUpdate,
    ) -> Result<(), ClientError> {
        panic!("update_branch_protection is not used by label batches");
    }

    async fn add_team_repository(
        &self,
        _org: &str,
        _team_slug: &str,
        _repo: &str,
        _permission: TeamRepositoryPermission,
    ) -> Result<(), ClientError> {
        panic!("add_team_repository is not used by label batches");
    }

    async fn create_label(
        &self,
        _org: &str,
        repo: &str,
        label: &NewLabel,
    ) -> Result<(), ClientError> {
        self.created
            .lock()
            .unwrap()
            .push((repo.to_string(), label.clone()));
        Ok(())
    }

    async fn delete_label(&self, _org: &str, repo: &str, name: &str) -> Result<(), ClientError> {
        if self.missing_labels.iter().any(|missing| missing == repo) {
            return Err(ClientError::NotFound);
        }
        self.deleted
            .lock()
            .unwrap()
            .push((repo.to_string(), name.to_string()));
        Ok(())
    }
}

#[tokio::test]
async fn test_add_label_to_every_non_excluded_repository() {
    let client = MockOrgClient::with_repositories(&["app", "Skip-Me", "docs"]);

    let update = LabelUpdate::Add {
        name: "triage".to_string(),
        color: "#d73a4a".to_string(),
    };

    let report = run_label_update(
        &client,
        "acme",
        &update,
        &ExclusionFilter::new(vec!["skip-me".to_string()]),
    )
    .await
    .unwrap();

    assert_eq!(report.len(), 2);
    assert!(report.is_success());

    let created = client.created.lock().unwrap().clone();
    assert_eq!(created.len(), 2);
    // The leading `#` is stripped before the label reaches the API.
    assert!(created.iter().all(|(_, label)| label.color == "d73a4a"));
}

#[tokio::test]
async fn test_remove_label_records_missing_labels_as_failures() {
    let client =
        MockOrgClient::with_repositories(&["app", "docs"]).missing_label_in("docs");

    let update = LabelUpdate::Remove {
        name: "stale".to_string(),
    };

    let report = run_label_update(&client, "acme", &update, &ExclusionFilter::none())
        .await
        .unwrap();

    let outcomes = report.outcomes();
    assert!(outcomes[0].outcome.is_success());
    assert!(matches!(outcomes[1].outcome, Outcome::Failed { .. }));

    let deleted = client.deleted.lock().unwrap().clone();
    assert_eq!(deleted, vec![("app".to_string(), "stale".to_string())]);
}
