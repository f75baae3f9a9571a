//! Rendering of batch reports.
//!
//! The core hands back an ordered outcome sequence; this module turns it into
//! terminal output. Rendering is the only thing that happens here, the counts
//! all come from the report itself.

use colored::Colorize;
use repo_sweep_core::{BatchReport, Outcome};

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Prints the per-resource outcomes followed by a summary line.
pub fn render(report: &BatchReport) {
    for entry in report.outcomes() {
        match &entry.outcome {
            Outcome::Succeeded => {
                println!("{} {}", "ok".green(), entry.resource);
            }
            Outcome::Failed { reason } => {
                println!("{} {}: {}", "failed".red(), entry.resource, reason);
            }
        }
    }

    println!("{}", summary_line(report));
}

/// Builds the one-line summary for a finished batch.
pub fn summary_line(report: &BatchReport) -> String {
    if report.is_empty() {
        return "Nothing to do: no resources matched".to_string();
    }

    format!(
        "Processed {} resources: {} succeeded, {} failed",
        report.len(),
        report.succeeded(),
        report.failed()
    )
}
