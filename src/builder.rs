//! Release builder: validates the requested tag, gathers the pull requests
//! merged since the latest tag and publishes a tag and release for them.
use chrono::{DateTime, Utc};
use log::*;

use crate::{
    config::ReleaseConfig,
    error::{ReleaseError, Result},
    forge::{
        github::Github,
        manager::ForgeManager,
        types::{CreateReleaseRequest, CreateTagRequest, PublishedRelease, Tag},
    },
};

/// Merge summary extraction and release body rendering.
pub mod notes;

/// Calendar tag validation.
pub mod tag;

/// Connects to GitHub and runs a release with the given configuration.
pub async fn execute(config: &ReleaseConfig) -> Result<PublishedRelease> {
    let forge = Github::new(config.remote.clone())?;
    let manager = ForgeManager::new(Box::new(forge), config.dry_run);
    ReleaseBuilder::new(config, manager).run().await
}

/// Runs one release against a forge using a borrowed run configuration.
///
/// ```rust,no_run
/// use merge_release::{
///     ReleaseBuilder, ReleaseConfig,
///     forge::{github::Github, manager::ForgeManager},
/// };
///
/// # async fn example(config: ReleaseConfig) -> merge_release::Result<()> {
/// let forge = Github::new(config.remote.clone())?;
/// let manager = ForgeManager::new(Box::new(forge), config.dry_run);
/// let release = ReleaseBuilder::new(&config, manager).run().await?;
/// println!("published {}", release.url);
/// # Ok(())
/// # }
/// ```
pub struct ReleaseBuilder<'a> {
    config: &'a ReleaseConfig,
    forge: ForgeManager,
    clock: Option<DateTime<Utc>>,
}

impl<'a> ReleaseBuilder<'a> {
    pub fn new(config: &'a ReleaseConfig, forge: ForgeManager) -> Self {
        Self {
            config,
            forge,
            clock: None,
        }
    }

    /// Pins the date used for tag validation instead of the current time.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }

    /// Resolve latest tag, validate the new tag, collect merge summaries,
    /// resolve the branch tip, then publish. The first failure aborts the
    /// run; remote objects already created are left in place.
    pub async fn run(&self) -> Result<PublishedRelease> {
        let remote = self.forge.remote_config();
        info!(
            "preparing release {} for {} on branch {}",
            self.config.new_tag_name,
            remote.path(),
            self.config.branch
        );

        let latest = self.resolve_latest_tag().await?;

        if !tag::validate_tag_at(
            &self.config.new_tag_name,
            &latest.name,
            self.now(),
        )? {
            return Err(ReleaseError::invalid_tag(&self.config.new_tag_name));
        }

        let summaries =
            self.collect_merge_summaries(latest.sha.as_deref()).await?;

        let tip = self.resolve_branch_tip().await?;

        self.publish_release(&self.config.new_tag_name, &tip, &summaries)
            .await
    }

    /// Latest tag name and commit, or an empty tag when none exist.
    pub async fn resolve_latest_tag(&self) -> Result<Tag> {
        match self.forge.latest_tag().await? {
            Some(tag) => {
                info!("latest tag: {} ({:?})", tag.name, tag.sha);
                Ok(tag)
            }
            None => {
                info!("no tags found: treating this as the first release");
                Ok(Tag::default())
            }
        }
    }

    /// Walks the branch history newest first, collecting merge summaries
    /// until `stop_at` is reached or history runs out. Summaries are
    /// returned oldest first.
    pub async fn collect_merge_summaries(
        &self,
        stop_at: Option<&str>,
    ) -> Result<Vec<String>> {
        let mut summaries = vec![];
        let mut page = 1;

        'pages: loop {
            let commits = self
                .forge
                .list_commits(&self.config.branch, page, self.config.page_size)
                .await?;

            if commits.is_empty() {
                debug!("history exhausted after {} page(s)", page - 1);
                break;
            }

            for commit in commits {
                if stop_at == Some(commit.id.as_str()) {
                    info!("reached latest tag commit: {}", commit.id);
                    break 'pages;
                }

                if let Some(summary) = notes::merge_summary(&commit.message) {
                    debug!("including {}: {}", commit.id, summary);
                    summaries.push(summary.to_string());
                }
            }

            page += 1;
        }

        if summaries.is_empty() {
            return Err(ReleaseError::NoMergeCommits);
        }

        summaries.reverse();

        info!("found {} merged pull request(s)", summaries.len());

        Ok(summaries)
    }

    /// Sha of the newest commit on the configured branch.
    pub async fn resolve_branch_tip(&self) -> Result<String> {
        let commits = self.forge.list_commits(&self.config.branch, 1, 1).await?;

        let tip = commits
            .into_iter()
            .next()
            .ok_or_else(|| ReleaseError::no_commits(&self.config.branch))?;

        info!("branch {} tip: {}", self.config.branch, tip.id);

        Ok(tip.id)
    }

    /// Creates the annotated tag, its reference and the published release.
    pub async fn publish_release(
        &self,
        tag_name: &str,
        target_sha: &str,
        summaries: &[String],
    ) -> Result<PublishedRelease> {
        info!("creating tag {tag_name} at {target_sha}");

        let object_sha = self
            .forge
            .create_tag_object(CreateTagRequest {
                tag: tag_name.to_string(),
                message: tag_name.to_string(),
                sha: target_sha.to_string(),
            })
            .await?;

        self.forge.create_tag_ref(tag_name, &object_sha).await?;

        info!("creating release {tag_name}");

        let release = self
            .forge
            .create_release(CreateReleaseRequest {
                tag: tag_name.to_string(),
                target_sha: target_sha.to_string(),
                title: tag_name.to_string(),
                body: notes::render_body(summaries),
                draft: false,
                prerelease: false,
            })
            .await?;

        info!("published release {}: {}", release.tag, release.url);

        Ok(release)
    }
}
