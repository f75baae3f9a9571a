//! # RepoSweep Core
//!
//! This crate provides the reconciliation logic for RepoSweep, a tool that
//! applies sparse configuration overrides across the repositories, branches,
//! and teams of a GitHub organization.
//!
//! ## Overview
//!
//! A batch run follows the same shape for every resource kind:
//! 1. Construct and validate the operator's override model (before any
//!    remote call).
//! 2. Enumerate the target resources and apply the requested filter.
//! 3. For each resource: fetch its current state, merge the overrides into
//!    it, and submit the complete merged state in one update call.
//! 4. Record one [`Outcome`] per resource in a [`BatchReport`].
//!
//! A failing resource never stops the batch; only a failing enumeration (or
//! an invalid override model) does. A branch without protection is not a
//! failure at all: the merge simply starts from the default empty state.
//!
//! ## Main Functions
//!
//! The batch entry points, one per resource kind:
//! - [`run_repository_update`] - repository settings
//! - [`run_branch_protection_update`] - branch protection rules
//! - [`run_team_assignment`] - team repository access
//! - [`run_label_update`] - labels
//!
//! ## Examples
//!
//! ```no_run
//! use repo_sweep_core::{
//!     run_repository_update, ExclusionFilter, Intent, RepositorySettingsOverrides,
//! };
//!
//! # async fn example(client: github_client::GitHubClient) -> Result<(), repo_sweep_core::Error> {
//! let overrides = RepositorySettingsOverrides {
//!     private: Intent::Set(true),
//!     ..Default::default()
//! };
//!
//! let report = run_repository_update(
//!     &client,
//!     "my-organization",
//!     &overrides,
//!     &ExclusionFilter::new(vec!["sandbox".to_string()]),
//! )
//! .await?;
//!
//! println!("{} updated, {} failed", report.succeeded(), report.failed());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! All remote access goes through the
//! [`OrganizationClient`](github_client::OrganizationClient) trait, so the
//! batch drivers can be exercised against mock clients in tests.

mod errors;
pub use errors::Error;

/// Sparse desired-state override types
pub mod overrides;

/// Per-resource outcomes and batch reporting
pub mod outcome;

/// Resource filters and scopes
pub mod filter;

/// Repository settings reconciliation
pub mod repository_settings;

/// Branch protection reconciliation
pub mod branch_protection;

/// Team repository access assignment
pub mod team_access;

/// Bulk label management
pub mod labels;

// Re-export commonly used types
pub use branch_protection::{merge_branch_protection, run_branch_protection_update};
pub use filter::{BranchFilter, ExclusionFilter, RepositoryScope};
pub use labels::{run_label_update, LabelUpdate};
pub use outcome::{BatchReport, Outcome, ResourceOutcome};
pub use overrides::{
    BranchProtectionOverrides, Intent, ListIntent, RepositorySettingsOverrides,
};
pub use repository_settings::{
    merge_repository_settings, run_repository_update, RepositorySettings,
};
pub use team_access::run_team_assignment;
