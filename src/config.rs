//! Run configuration, built once at process entry.
use secrecy::SecretString;

use crate::forge::config::{DEFAULT_PAGE_SIZE, RemoteConfig};

/// Everything a single release run needs to know.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Connection to the host repository.
    pub remote: RemoteConfig,
    /// Branch whose history is scanned and whose tip is tagged.
    pub branch: String,
    /// Proposed name for the new tag.
    pub new_tag_name: String,
    /// Number of commits requested per history page.
    pub page_size: u8,
    /// Log writes instead of performing them.
    pub dry_run: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            branch: "".to_string(),
            new_tag_name: "".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            dry_run: false,
        }
    }
}

impl ReleaseConfig {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        token: SecretString,
        new_tag_name: impl Into<String>,
    ) -> Self {
        Self {
            remote: RemoteConfig {
                owner: owner.into(),
                repo: repo.into(),
                token,
                ..RemoteConfig::default()
            },
            branch: branch.into(),
            new_tag_name: new_tag_name.into(),
            ..Self::default()
        }
    }
}
