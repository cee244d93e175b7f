//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, params::repos::Reference};
use serde::Serialize;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{
            CreateReleaseRequest, CreateTagRequest, ForgeCommit, GitObject,
            PublishedRelease, Tag,
        },
    },
};

#[derive(Debug, Serialize)]
struct GithubTagObject {
    pub tag: String,
    pub message: String,
    pub object: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub const TAG_OBJECT_TYPE: &str = "commit";

/// GitHub forge implementation using Octocrab for API interactions with
/// tags, commit history and releases.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_url.trim_end_matches('/').to_string();
        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?
            .build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn latest_tag(&self) -> Result<Option<Tag>> {
        let page = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .list_tags()
            .per_page(1)
            .page(1u32)
            .send()
            .await?;

        Ok(page.items.into_iter().next().map(|tag| Tag {
            name: tag.name,
            sha: Some(tag.commit.sha),
        }))
    }

    async fn list_commits(
        &self,
        branch: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<ForgeCommit>> {
        let result = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .list_commits()
            .sha(branch)
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        let commits = result
            .items
            .into_iter()
            .map(|c| ForgeCommit {
                id: c.sha,
                message: c.commit.message,
            })
            .collect::<Vec<ForgeCommit>>();

        Ok(commits)
    }

    async fn create_tag_object(&self, req: CreateTagRequest) -> Result<String> {
        let endpoint = format!(
            "{}/repos/{}/{}/git/tags",
            self.base_uri, self.config.owner, self.config.repo
        );

        let body = serde_json::json!(GithubTagObject {
            tag: req.tag.clone(),
            message: req.message,
            object: req.sha,
            kind: TAG_OBJECT_TYPE.into(),
        });

        let object: GitObject =
            self.instance.post(endpoint, Some(&body)).await?;

        info!("created tag object {} for tag {}", object.sha, req.tag);

        Ok(object.sha)
    }

    async fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<()> {
        self.instance
            .repos(&self.config.owner, &self.config.repo)
            .create_ref(&Reference::Tag(tag.to_string()), sha)
            .await?;

        Ok(())
    }

    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<PublishedRelease> {
        let release = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .create(&req.tag)
            .name(&req.title)
            .body(&req.body)
            .target_commitish(&req.target_sha)
            .draft(req.draft)
            .prerelease(req.prerelease)
            .send()
            .await?;

        Ok(PublishedRelease {
            id: release.id.into_inner(),
            tag: release.tag_name,
            url: release.html_url.to_string(),
        })
    }
}
