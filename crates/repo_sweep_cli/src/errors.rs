use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the RepoSweep CLI application.
///
/// This enum represents the error conditions that can arise before or while
/// running a batch: authentication problems, invalid arguments, and failures
/// surfaced by the core or the GitHub client.
#[derive(Error, Debug)]
pub enum Error {
    /// No usable GitHub token was available.
    ///
    /// This error is returned when neither the `--token` option nor the
    /// `GITHUB_TOKEN` environment variable supplies a token.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid command-line arguments were provided.
    ///
    /// This error is returned when an argument parses syntactically but its
    /// value cannot be used, such as an unknown permission name.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The GitHub client could not be constructed.
    #[error(transparent)]
    Client(#[from] github_client::Error),

    /// The batch was rejected or could not start.
    ///
    /// Wraps the core's construction-time validation failures and
    /// enumeration failures. Per-resource failures are not errors; they
    /// appear in the rendered report instead.
    #[error(transparent)]
    Core(#[from] repo_sweep_core::Error),
}
