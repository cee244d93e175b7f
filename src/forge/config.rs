//! Configuration for the GitHub connection.
use secrecy::SecretString;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default page size for paginated commit queries
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Largest page size the host accepts.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with the host.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the REST API (e.g., "https://api.github.com").
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl RemoteConfig {
    /// "owner/repo" form used in log lines.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}
