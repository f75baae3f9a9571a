//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. The variants are deliberately more specific than a
//! single "request failed" error: callers performing bulk reconciliation need to tell a
//! missing resource apart from a transport failure or a permission problem.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// This enum represents all possible error conditions when working with the GitHub API,
/// including authentication failures, API errors, rate limiting, and data processing issues.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.get_branch_protection("my-org", "my-repo", "main").await {
///     Ok(protection) => println!("strict: {}", protection.strict_status_checks),
///     Err(Error::NotFound) => println!("branch is not protected"),
///     Err(err) => eprintln!("lookup failed: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when a GitHub API request fails for a reason that is not
    /// covered by one of the more specific variants, such as a server-side error
    /// or a network-level failure. The contained string carries the underlying
    /// error message.
    #[error("API request failed: {0}")]
    ApiError(String),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The provided token is invalid or expired
    /// - The client could not be constructed from the supplied credentials
    ///
    /// The contained string provides specific details about the authentication failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    ///
    /// This error occurs when the GitHub API returns a response that cannot be
    /// parsed into the expected data structure.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// This error indicates that the API response structure doesn't match
    /// what the client expects.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code.
    /// For branch protection lookups this is an expected, well-defined result:
    /// it means no protection is configured for the branch, which is distinct
    /// from the request itself having failed.
    #[error("Resource not found")]
    NotFound,

    /// The request was rejected because the authenticated identity lacks access.
    ///
    /// This error occurs when a GitHub API request returns a 401 or 403 status
    /// code (other than a rate-limit rejection). The contained string carries
    /// the message GitHub returned.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// GitHub API rate limit has been exceeded.
    ///
    /// This error occurs when the client has made too many requests in a given
    /// time window. Callers should back off before retrying; this client does
    /// not retry automatically.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
