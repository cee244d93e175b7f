//! Traits related to the remote repository host
use async_trait::async_trait;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        types::{
            CreateReleaseRequest, CreateTagRequest, ForgeCommit,
            PublishedRelease, Tag,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    /// Most recently created tag, taken from the first entry of the host's
    /// default tag ordering.
    async fn latest_tag(&self) -> Result<Option<Tag>>;
    /// One page of commits on `branch`, newest first. Pages start at 1.
    async fn list_commits(
        &self,
        branch: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<ForgeCommit>>;
    /// Creates an annotated tag object and returns its sha.
    async fn create_tag_object(&self, req: CreateTagRequest) -> Result<String>;
    async fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<()>;
    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<PublishedRelease>;
}
