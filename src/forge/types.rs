use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Latest tag in the repository. Both fields are empty when no tag exists.
pub struct Tag {
    pub name: String,
    pub sha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a normalized commit returned from the forge
pub struct ForgeCommit {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to create an annotated tag object.
pub struct CreateTagRequest {
    pub tag: String,
    pub message: String,
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to create a published release.
pub struct CreateReleaseRequest {
    pub tag: String,
    pub target_sha: String,
    pub title: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Release as recorded by the forge.
pub struct PublishedRelease {
    pub id: u64,
    pub tag: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
/// Git object returned by the git data API.
pub struct GitObject {
    pub sha: String,
}
