use crate::domain::release::release_date;
use crate::error::{ChannelTagError, Result};
use git2::{ObjectType, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn peel_tag(&self, tag_name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let oid = reference
                    .peel(ObjectType::Commit)
                    .map_err(|e| ChannelTagError::tag(format!("Cannot peel tag: {}", e)))?
                    .id();

                Ok(Some(oid))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(ChannelTagError::tag(format!(
                "Cannot find tag '{}': {}",
                tag_name, e
            ))),
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        let commit = head.peel_to_commit()?;
        Ok(commit.id())
    }

    fn tags_at_head(&self) -> Result<Vec<String>> {
        let head = self.head_oid()?;
        let mut tags = Vec::new();

        for tag_name in self.list_tags()? {
            if self.peel_tag(&tag_name)? == Some(head) {
                tags.push(tag_name);
            }
        }

        tags.sort();
        Ok(tags)
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        self.peel_tag(tag_name)
    }

    fn release_date(&self, revision: &str) -> Result<Option<String>> {
        let object = match self.repo.revparse_single(revision) {
            Ok(object) => object,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let commit = object.peel_to_commit()?;
        let time = commit.committer().when();

        release_date(time.seconds(), time.offset_minutes()).map(Some)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| ChannelTagError::tag(format!("Cannot find object: {}", e)))?;

        self.repo
            .tag_lightweight(name, &object, false)
            .map_err(|e| ChannelTagError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }
}
