pub mod actions;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod forge;

pub use builder::{ReleaseBuilder, execute};
pub use cli::Args;
pub use config::ReleaseConfig;
pub use error::{ReleaseError, Result};
