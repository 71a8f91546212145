//! Error types for pr-lineup

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All errors pr-lineup can produce
#[derive(Debug, Error)]
pub enum Error {
    /// No pull request with this number exists in the repository
    #[error("PR #{0} not found")]
    PrNotFound(u64),

    /// The pull request exists but was never merged
    #[error("PR #{0} has not been merged")]
    NotMerged(u64),

    /// Input typed by the user could not be understood
    #[error("invalid input: {0}")]
    UserInput(String),

    /// The reporting window could not be located
    #[error("could not resolve merge window: {0}")]
    Resolution(String),

    /// GitHub API error with a message of our own
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error surfaced by the octocrab client
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Configuration file problem
    #[error("config error: {0}")]
    Config(String),

    /// Platform error not tied to a specific API (used by test doubles)
    #[error("platform error: {0}")]
    Platform(String),

    /// Unexpected internal failure (terminal I/O and the like)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the interactive session can recover by asking the user again.
    ///
    /// Missing or unmerged PRs and unparsable input are the user's to fix;
    /// everything else ends the run.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PrNotFound(_) | Self::NotMerged(_) | Self::UserInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_are_recoverable() {
        assert!(Error::PrNotFound(1).is_recoverable());
        assert!(Error::NotMerged(1).is_recoverable());
        assert!(Error::UserInput("x".to_string()).is_recoverable());
    }

    #[test]
    fn test_resolution_and_transport_errors_are_fatal() {
        assert!(!Error::Resolution("ceiling".to_string()).is_recoverable());
        assert!(!Error::GitHubApi("401".to_string()).is_recoverable());
        assert!(!Error::Config("bad".to_string()).is_recoverable());
    }

    #[test]
    fn test_display_includes_pr_number() {
        assert_eq!(Error::PrNotFound(42).to_string(), "PR #42 not found");
        assert_eq!(Error::NotMerged(7).to_string(), "PR #7 has not been merged");
    }
}
