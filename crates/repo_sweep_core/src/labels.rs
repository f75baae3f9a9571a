//! Bulk label management.
//!
//! Adds a label to, or removes a label from, every non-excluded repository of
//! an organization. Like the other batches, label operations run strictly
//! sequentially and record one outcome per repository.

use github_client::{NewLabel, OrganizationClient};
use tracing::{debug, info, warn};

use crate::errors::Error;
use crate::filter::ExclusionFilter;
use crate::outcome::{BatchReport, Outcome};

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;

/// A label operation applied across repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelUpdate {
    /// Create the label on every targeted repository.
    Add {
        /// The name of the label
        name: String,
        /// The hex color for the label; a leading `#` is accepted and stripped
        color: String,
    },
    /// Delete the label from every targeted repository.
    Remove {
        /// The name of the label
        name: String,
    },
}

/// Applies a label operation across an organization.
///
/// # Arguments
///
/// * `client` - The GitHub client to enumerate and update through.
/// * `org` - The organization whose repositories are updated.
/// * `update` - The label operation to perform.
/// * `exclusions` - Repositories to skip, matched case-insensitively.
///
/// # Errors
///
/// Returns [`Error::Enumeration`] when the repository listing fails;
/// per-repository failures are recorded in the report instead.
pub async fn run_label_update(
    client: &impl OrganizationClient,
    org: &str,
    update: &LabelUpdate,
    exclusions: &ExclusionFilter,
) -> Result<BatchReport, Error> {
    let repositories =
        client
            .list_org_repositories(org)
            .await
            .map_err(|source| Error::Enumeration {
                scope: format!("repositories of {}", org),
                source,
            })?;

    info!(
        org = org,
        update = ?update,
        count = repositories.len(),
        "Updating labels"
    );

    let mut report = BatchReport::new();

    for repository in &repositories {
        if exclusions.is_excluded(&repository.name) {
            debug!(repository = repository.name, "Ignoring repository");
            continue;
        }

        let result = match update {
            LabelUpdate::Add { name, color } => {
                let label = NewLabel {
                    name: name.clone(),
                    color: color.trim_start_matches('#').to_string(),
                };
                client.create_label(org, &repository.name, &label).await
            }
            LabelUpdate::Remove { name } => {
                client.delete_label(org, &repository.name, name).await
            }
        };

        let outcome = match result {
            Ok(()) => Outcome::Succeeded,
            Err(e) => {
                warn!(
                    repository = repository.name,
                    reason = e.to_string(),
                    "Label update failed"
                );
                Outcome::failed(e.to_string())
            }
        };
        report.record(repository.name.clone(), outcome);
    }

    info!(
        org = org,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Finished updating labels"
    );

    Ok(report)
}
