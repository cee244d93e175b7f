//! Error types for release creation.

use thiserror::Error;

/// Every way a release run can fail. All of them abort the run.
#[derive(Error, Debug)]
pub enum ReleaseError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Release validation errors
    #[error("Tag is not valid: {0}")]
    InvalidTag(String),

    #[error("No merge commits found")]
    NoMergeCommits,

    #[error("No commits found on branch '{branch}'")]
    NoCommits { branch: String },

    // Forge errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid tag error
    pub fn invalid_tag(tag: impl Into<String>) -> Self {
        Self::InvalidTag(tag.into())
    }

    /// Create a no commits error for the given branch
    pub fn no_commits(branch: impl Into<String>) -> Self {
        Self::NoCommits {
            branch: branch.into(),
        }
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ReleaseError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            octocrab::Error::GitHub { source, .. }
                if source.status_code.as_u16() == 401
                    || source.status_code.as_u16() == 403 =>
            {
                Self::AuthenticationError(source.message.clone())
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
