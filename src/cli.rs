//! CLI argument parsing and run configuration.
//!
//! Every input can also be supplied through the `INPUT_*` environment
//! variables GitHub Actions sets for action inputs.
use clap::Parser;
use secrecy::SecretString;
use std::env;

use crate::{
    config::ReleaseConfig,
    error::{ReleaseError, Result},
    forge::config::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
};

/// Create a tag and a GitHub release listing the pull requests merged since
/// the previous tag.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "INPUT_OWNER")]
    /// Repository owner or organization.
    pub owner: Option<String>,

    #[arg(long, env = "INPUT_REPO")]
    /// Repository name.
    pub repo: Option<String>,

    #[arg(long, env = "INPUT_BRANCH")]
    /// Branch to scan for merged pull requests.
    pub branch: Option<String>,

    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    #[arg(long = "new-tag-name", env = "INPUT_NEWTAGNAME")]
    /// Tag to create, in the form v<YY><MM>.<digit>.
    pub new_tag_name: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    /// REST API base URL. Set this for GitHub Enterprise hosts.
    pub api_url: String,

    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=MAX_PAGE_SIZE as i64)
    )]
    /// Commits fetched per history page.
    pub page_size: u8,

    #[arg(long, default_value_t = false)]
    /// Log the tag and release that would be created without creating them.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Build the run configuration, rejecting missing inputs.
    pub fn release_config(&self) -> Result<ReleaseConfig> {
        let owner = required("owner", self.owner.as_deref())?;
        let repo = required("repo", self.repo.as_deref())?;
        let branch = required("branch", self.branch.as_deref())?;
        let new_tag_name =
            required("newTagName", self.new_tag_name.as_deref())?;

        let mut token = self
            .token
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token.trim().to_string();
        }

        if token.is_empty() {
            return Err(ReleaseError::invalid_args(
                "Input required and not supplied: token",
            ));
        }

        let mut config = ReleaseConfig::new(
            owner,
            repo,
            branch,
            SecretString::from(token),
            new_tag_name,
        );

        config.remote.api_url = self.api_url.trim_end_matches('/').to_string();
        config.page_size = self.page_size;
        config.dry_run = self.dry_run;

        Ok(config)
    }
}

fn required(name: &str, value: Option<&str>) -> Result<String> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(ReleaseError::invalid_args(format!(
            "Input required and not supplied: {name}"
        )));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI argument parsing and run configuration.
    use super::*;
    use clap::CommandFactory;
    use secrecy::ExposeSecret;

    fn args() -> Args {
        Args {
            owner: Some("acme".into()),
            repo: Some("widgets".into()),
            branch: Some("main".into()),
            token: Some("github_token".into()),
            new_tag_name: Some("v2503.2".into()),
            api_url: DEFAULT_API_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            dry_run: false,
            debug: false,
        }
    }

    #[test]
    fn builds_release_config() {
        let config = args().release_config().unwrap();

        assert_eq!(config.remote.owner, "acme");
        assert_eq!(config.remote.repo, "widgets");
        assert_eq!(config.remote.token.expose_secret(), "github_token");
        assert_eq!(config.branch, "main");
        assert_eq!(config.new_tag_name, "v2503.2");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(!config.dry_run);
    }

    #[test]
    fn rejects_missing_inputs() {
        let mut cli_args = args();
        cli_args.branch = Some("  ".into());

        let err = cli_args.release_config().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid arguments: Input required and not supplied: branch"
        );
    }

    #[test]
    fn falls_back_to_github_token_env_var() {
        let mut cli_args = args();
        cli_args.token = Some("".into());

        temp_env::with_var("GITHUB_TOKEN", Some("env_token"), || {
            let config = cli_args.release_config().unwrap();
            assert_eq!(config.remote.token.expose_secret(), "env_token");
        });
    }

    #[test]
    fn requires_a_token() {
        let mut cli_args = args();
        cli_args.token = None;

        temp_env::with_var_unset("GITHUB_TOKEN", || {
            let result = cli_args.release_config();
            assert!(matches!(result, Err(ReleaseError::InvalidArgs(_))));
        });
    }

    #[test]
    fn strips_trailing_slash_from_api_url() {
        let mut cli_args = args();
        cli_args.api_url = "https://ghe.example.com/api/v3/".into();

        let config = cli_args.release_config().unwrap();

        assert_eq!(config.remote.api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn reads_action_inputs_from_env() {
        temp_env::with_vars(
            [
                ("INPUT_OWNER", Some("acme")),
                ("INPUT_REPO", Some("widgets")),
                ("INPUT_BRANCH", Some("release")),
                ("INPUT_TOKEN", Some("input_token")),
                ("INPUT_NEWTAGNAME", Some("v2503.3")),
                ("GITHUB_API_URL", None),
            ],
            || {
                let cli_args = Args::try_parse_from(["merge-release"]).unwrap();
                let config = cli_args.release_config().unwrap();

                assert_eq!(config.remote.path(), "acme/widgets");
                assert_eq!(config.branch, "release");
                assert_eq!(config.new_tag_name, "v2503.3");
                assert_eq!(config.remote.api_url, DEFAULT_API_URL);
            },
        );
    }

    #[test]
    fn reports_absent_input_by_name() {
        let mut cli_args = args();
        cli_args.new_tag_name = None;

        let err = cli_args.release_config().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid arguments: Input required and not supplied: newTagName"
        );
    }

    #[test]
    fn help_shows_no_empty_defaults() {
        let help = Args::command().render_help().to_string();

        assert!(help.contains("--new-tag-name"));
        assert!(!help.contains("[default: ]"));
    }

    #[test]
    fn rejects_out_of_range_page_size() {
        let result = Args::try_parse_from(["merge-release", "--page-size", "0"]);
        assert!(result.is_err());

        let result =
            Args::try_parse_from(["merge-release", "--page-size", "101"]);
        assert!(result.is_err());
    }
}
