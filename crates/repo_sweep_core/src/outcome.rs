//! Per-resource outcomes and batch reporting.
//!
//! Reconciling a resource ends in exactly one of two terminal states, and a
//! batch accumulates those states in enumeration order. Expected conditions
//! (such as a branch having no protection yet) never appear here; they are
//! handled inside the reconcilers.

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;

/// The terminal state of one resource's reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The merged state was applied.
    Succeeded,
    /// The resource could not be reconciled; the batch continued without it.
    Failed {
        /// Why the fetch or apply step failed
        reason: String,
    },
}

impl Outcome {
    /// Builds a failed outcome from any displayable reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Outcome::Succeeded`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

/// One resource's name paired with how its reconciliation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOutcome {
    /// Display name of the resource, e.g. `widget-factory` or
    /// `widget-factory/main`
    pub resource: String,
    /// How the reconciliation ended
    pub outcome: Outcome,
}

/// The ordered outcomes of one batch run.
///
/// Outcomes appear in the order the resources were processed. The report is
/// append-only while the batch runs and is handed to the caller for
/// rendering; the core only supplies the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    outcomes: Vec<ResourceOutcome>,
}

impl BatchReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the outcome for one resource.
    pub fn record(&mut self, resource: impl Into<String>, outcome: Outcome) {
        self.outcomes.push(ResourceOutcome {
            resource: resource.into(),
            outcome,
        });
    }

    /// The per-resource outcomes, in processing order.
    pub fn outcomes(&self) -> &[ResourceOutcome] {
        &self.outcomes
    }

    /// Number of resources that were reconciled successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| entry.outcome.is_success())
            .count()
    }

    /// Number of resources whose reconciliation failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Returns `true` when no resource failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Total number of resources that were processed.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` when nothing was processed.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
