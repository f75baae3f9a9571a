//! Bulk label management command.
//!
//! Adds a label to, or removes a label from, every non-excluded repository of
//! the organization.

use clap::{Args, Subcommand};
use github_client::OrganizationClient;
use repo_sweep_core::{run_label_update, BatchReport, ExclusionFilter, LabelUpdate};
use tracing::instrument;

use crate::errors::Error;

#[cfg(test)]
#[path = "labels_cmd_tests.rs"]
mod tests;

/// Arguments for the `labels` command.
#[derive(Args, Debug, Clone)]
pub struct LabelsArgs {
    #[command(subcommand)]
    pub operation: LabelOperation,

    /// Comma separated list of repositories to skip.
    #[arg(long, value_delimiter = ',', value_name = "NAMES", global = true)]
    pub exclude: Vec<String>,
}

/// The label operation to perform.
#[derive(Subcommand, Debug, Clone)]
pub enum LabelOperation {
    /// Create a label on every targeted repository.
    Add {
        /// Name of the label.
        #[arg(long)]
        name: String,

        /// Hex color for the label; the leading `#` is optional.
        #[arg(long)]
        color: String,
    },

    /// Delete a label from every targeted repository.
    Remove {
        /// Name of the label.
        #[arg(long)]
        name: String,
    },
}

/// Translates the subcommand into the core's label update.
pub fn build_update(operation: &LabelOperation) -> LabelUpdate {
    match operation {
        LabelOperation::Add { name, color } => LabelUpdate::Add {
            name: name.clone(),
            color: color.clone(),
        },
        LabelOperation::Remove { name } => LabelUpdate::Remove { name: name.clone() },
    }
}

/// Runs the label batch.
///
/// # Errors
///
/// Returns an [`Error`] when the repository listing fails; per-repository
/// failures are part of the returned report.
#[instrument(skip(client, args))]
pub async fn execute(
    client: &impl OrganizationClient,
    org: &str,
    args: &LabelsArgs,
) -> Result<BatchReport, Error> {
    let update = build_update(&args.operation);
    let exclusions = ExclusionFilter::new(args.exclude.clone());

    let report = run_label_update(client, org, &update, &exclusions).await?;
    Ok(report)
}
