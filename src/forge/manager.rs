//! Manager that wraps forge implementations
use log::*;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{
            CreateReleaseRequest, CreateTagRequest, ForgeCommit,
            PublishedRelease, Tag,
        },
    },
};

/// Placeholder sha handed back for writes skipped in dry-run mode.
pub const DRY_RUN_SHA: &str = "fff";

/// Front for a [`Forge`] that logs each call and, in dry-run mode,
/// replaces writes with placeholder results.
pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
    dry_run: bool,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>, dry_run: bool) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
            dry_run,
        }
    }

    pub fn remote_config(&self) -> RemoteConfig {
        self.remote_config.clone()
    }

    pub async fn latest_tag(&self) -> Result<Option<Tag>> {
        debug!("fetching latest tag for {}", self.remote_config.path());
        self.forge.latest_tag().await
    }

    pub async fn list_commits(
        &self,
        branch: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<ForgeCommit>> {
        debug!(
            "listing commits for branch [{branch}]: page {page}, per_page {per_page}"
        );
        self.forge.list_commits(branch, page, per_page).await
    }

    pub async fn create_tag_object(
        &self,
        req: CreateTagRequest,
    ) -> Result<String> {
        if self.dry_run {
            warn!("dry_run: would create tag object: req: {:#?}", req);
            return Ok(DRY_RUN_SHA.into());
        }
        self.forge.create_tag_object(req).await
    }

    pub async fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<()> {
        if self.dry_run {
            warn!("dry_run: would create ref refs/tags/{tag} -> {sha}");
            return Ok(());
        }
        self.forge.create_tag_ref(tag, sha).await
    }

    pub async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<PublishedRelease> {
        if self.dry_run {
            warn!("dry_run: would create release: req: {:#?}", req);
            return Ok(PublishedRelease {
                id: 0,
                tag: req.tag,
                url: "".into(),
            });
        }
        self.forge.create_release(req).await
    }
}
