//! Sparse desired-state overrides.
//!
//! This module provides the override model an operator supplies for a batch
//! run: per-field intents that either leave the remote value as it is or
//! replace it. The model is pure data plus construction-time validation; the
//! computation of effective values happens in the reconcilers, which also hold
//! the fetched current state.

use crate::errors::Error;

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;

/// The operator's intent for a single scalar setting.
///
/// `Keep` means "do not change this field"; `Set` carries the desired value.
/// The explicit variant removes the ambiguity of a nullable value, where
/// "operator said no" and "operator said nothing" would collapse into the
/// same representation.
///
/// # Examples
///
/// ```rust
/// use repo_sweep_core::Intent;
///
/// assert_eq!(Intent::Keep.resolve(true), true);
/// assert_eq!(Intent::Set(false).resolve(true), false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent<T> {
    /// Leave the field at its current remote value.
    #[default]
    Keep,
    /// Set the field to this value.
    Set(T),
}

impl<T> Intent<T> {
    /// Computes the effective value given the field's current remote value.
    pub fn resolve(self, current: T) -> T {
        match self {
            Intent::Keep => current,
            Intent::Set(value) => value,
        }
    }

    /// Returns `true` when the intent changes the field.
    pub fn is_set(&self) -> bool {
        matches!(self, Intent::Set(_))
    }
}

impl<T> From<Option<T>> for Intent<T> {
    /// Converts an optional operator input: `None` keeps the current value.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Intent::Set(v),
            None => Intent::Keep,
        }
    }
}

/// The operator's intent for a list-valued setting.
///
/// `Clear` and `Replace` are distinct cases: clearing empties the remote list,
/// while replacing installs an exact new list. A request that asks for both at
/// once is contradictory and is rejected when the intent is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListIntent {
    /// Leave the list at its current remote value.
    #[default]
    Keep,
    /// Remove every entry from the list.
    Clear,
    /// Replace the list with exactly these entries, in this order.
    Replace(Vec<String>),
}

impl ListIntent {
    /// Builds a list intent from the two ways an operator can express one.
    ///
    /// # Arguments
    ///
    /// * `clear` - Whether the operator asked for the list to be emptied.
    /// * `names` - Explicit replacement entries, empty when none were given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOverrideCombination`] when `clear` is combined
    /// with a non-empty replacement list. The failure happens here, before any
    /// remote call, rather than partway through a batch.
    pub fn from_parts(clear: bool, names: Vec<String>) -> Result<Self, Error> {
        match (clear, names.is_empty()) {
            (true, false) => Err(Error::InvalidOverrideCombination),
            (true, true) => Ok(ListIntent::Clear),
            (false, true) => Ok(ListIntent::Keep),
            (false, false) => Ok(ListIntent::Replace(names)),
        }
    }

    /// Computes the effective list given the current remote list.
    ///
    /// `Replace` returns the entries verbatim: no deduplication and no
    /// reordering.
    pub fn resolve(&self, current: Vec<String>) -> Vec<String> {
        match self {
            ListIntent::Keep => current,
            ListIntent::Clear => Vec::new(),
            ListIntent::Replace(names) => names.clone(),
        }
    }
}

/// Sparse overrides for repository settings.
///
/// One instance is constructed per batch run, before any repository is
/// touched. Every field defaults to [`Intent::Keep`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySettingsOverrides {
    /// Whether the repository is private
    pub private: Intent<bool>,
    /// Whether issues are enabled
    pub issues: Intent<bool>,
    /// Whether the wiki is enabled
    pub wiki: Intent<bool>,
    /// Whether downloads are enabled
    pub downloads: Intent<bool>,
    /// Whether merge commits are allowed
    pub merge_commits: Intent<bool>,
    /// Whether rebase merging is allowed
    pub rebase_merges: Intent<bool>,
    /// Whether squash merging is allowed
    pub squash_merges: Intent<bool>,
}

impl RepositorySettingsOverrides {
    /// Creates an override model that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sparse overrides for branch protection rules.
///
/// The required status-check contexts are deliberately absent: they are always
/// passed through from the branch's current protection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchProtectionOverrides {
    /// Whether status checks require the branch to be up to date
    pub strict_status_checks: Intent<bool>,
    /// Whether approvals are dismissed when new commits are pushed
    pub dismiss_stale_reviews: Intent<bool>,
    /// Whether a code owner must review pull requests
    pub require_code_owner_reviews: Intent<bool>,
    /// Whether the rules are enforced for administrators
    pub enforce_admins: Intent<bool>,
    /// Number of approving reviews required before merging
    pub required_approving_review_count: Intent<u32>,
    /// Teams allowed to push to the branch
    pub push_restriction_teams: ListIntent,
}

impl BranchProtectionOverrides {
    /// Creates an override model that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }
}
