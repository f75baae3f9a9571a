//! Error types for the reconciliation core.
//!
//! Only conditions that prevent a batch from starting are errors here.
//! Per-resource fetch and apply failures are not: they are recorded as
//! [`Outcome::Failed`](crate::Outcome::Failed) in the batch report and the
//! batch carries on with the next resource.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that abort a batch before any resource is reconciled.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An override model requested both clearing a list field and replacing
    /// it with explicit entries in the same batch.
    ///
    /// The two intents contradict each other, so the batch is rejected during
    /// construction, before any remote call is made.
    #[error("cannot both clear a list and replace it with explicit entries; provide only the desired final list")]
    InvalidOverrideCombination,

    /// A resource filter mixed the all-resources marker with explicit names.
    #[error("ambiguous filter: {reason}")]
    AmbiguousFilter {
        /// What made the filter ambiguous
        reason: String,
    },

    /// The batch universe could not be enumerated.
    ///
    /// Without the resource listing there is nothing to iterate, so this is
    /// fatal to the whole batch, unlike per-resource failures.
    #[error("failed to enumerate {scope}")]
    Enumeration {
        /// Description of what was being listed
        scope: String,
        /// The underlying client failure
        #[source]
        source: github_client::Error,
    },
}
