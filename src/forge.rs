//! Interface to the repository host.
//!
//! Provides token-based authentication, tag and commit listing, and tag and
//! release creation through a common trait so the release flow can run
//! against GitHub or a test double.

/// Connection configuration for the host.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Wrapper adding logging and dry-run handling around a forge.
pub mod manager;

/// Common trait for host abstraction.
pub mod traits;

/// Shared data types for tags, commits and releases.
pub mod types;
