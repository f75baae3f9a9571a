//! Resource filters applied before reconciliation.
//!
//! Two filter shapes exist: an exclusion set for repository batches (process
//! everything except the named repositories) and an inclusion set for branch
//! batches (process only the named branches, or all of them when none are
//! named). All name matching is case-insensitive.

use crate::errors::Error;

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

/// The marker operators use to mean "all resources".
const ALL_MARKER: &str = "*";

/// Repositories to skip during a batch run.
///
/// # Examples
///
/// ```rust
/// use repo_sweep_core::ExclusionFilter;
///
/// let filter = ExclusionFilter::new(vec!["Legacy-App".to_string()]);
/// assert!(filter.is_excluded("legacy-app"));
/// assert!(!filter.is_excluded("widget-factory"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    names: Vec<String>,
}

impl ExclusionFilter {
    /// Creates a filter that skips the given repository names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Creates a filter that skips nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` when `name` matches an excluded entry, ignoring case.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(name))
    }
}

/// Branches to include in a batch run.
///
/// An empty entry list and the `*` marker both mean every branch. Naming
/// specific branches restricts the run to those branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchFilter {
    /// Process every branch of each target repository.
    All,
    /// Process only branches whose name matches one of these entries.
    Named(Vec<String>),
}

impl BranchFilter {
    /// Builds a filter from raw operator entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousFilter`] when the `*` marker appears together
    /// with explicit branch names: the combination could mean either "all"
    /// or "only these", so it is rejected instead of guessed at.
    pub fn from_entries(entries: Vec<String>) -> Result<Self, Error> {
        let has_marker = entries.iter().any(|entry| entry == ALL_MARKER);

        match (has_marker, entries.len()) {
            (_, 0) => Ok(Self::All),
            (true, 1) => Ok(Self::All),
            (true, _) => Err(Error::AmbiguousFilter {
                reason: format!(
                    "`{}` cannot be combined with explicit branch names",
                    ALL_MARKER
                ),
            }),
            (false, _) => Ok(Self::Named(entries)),
        }
    }

    /// Returns `true` when the branch should be processed.
    pub fn matches(&self, branch: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(entries) => entries
                .iter()
                .any(|entry| entry.eq_ignore_ascii_case(branch)),
        }
    }
}

impl Default for BranchFilter {
    fn default() -> Self {
        Self::All
    }
}

/// Which repositories a branch or team batch targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryScope {
    /// Every repository in the organization.
    AllRepositories,
    /// A single repository, by name.
    Single(String),
}

impl RepositoryScope {
    /// Builds a scope from a raw operator entry, where `*` (or nothing)
    /// selects every repository.
    pub fn from_entry(entry: Option<String>) -> Self {
        match entry {
            Some(name) if name != ALL_MARKER => Self::Single(name),
            _ => Self::AllRepositories,
        }
    }
}
