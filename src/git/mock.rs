use crate::error::{ChannelTagError, Result};
use crate::git::Repository;
use git2::{ErrorClass, ErrorCode, Oid};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Mutex<HashMap<String, Oid>>,
    dates: HashMap<Oid, String>,
    head: Option<Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Mutex::new(HashMap::new()),
            dates: HashMap::new(),
            head: None,
        }
    }

    /// Add a commit with its `%ci` committer date
    pub fn add_commit(&mut self, oid: Oid, date: impl Into<String>) {
        self.dates.insert(oid, date.into());
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.into(), oid);
    }

    /// Point HEAD at a commit
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    fn tags(&self) -> std::sync::MutexGuard<'_, HashMap<String, Oid>> {
        self.tags.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags().keys().cloned().collect())
    }

    fn head_oid(&self) -> Result<Oid> {
        self.head.ok_or_else(|| {
            git2::Error::new(
                ErrorCode::UnbornBranch,
                ErrorClass::Reference,
                "reference 'refs/heads/master' not found",
            )
            .into()
        })
    }

    fn tags_at_head(&self) -> Result<Vec<String>> {
        let head = self.head_oid()?;
        let mut tags: Vec<String> = self
            .tags()
            .iter()
            .filter(|(_, oid)| **oid == head)
            .map(|(name, _)| name.clone())
            .collect();
        tags.sort();
        Ok(tags)
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags().get(tag_name).copied())
    }

    fn release_date(&self, revision: &str) -> Result<Option<String>> {
        let oid = match self.find_tag_oid(revision)? {
            Some(oid) => oid,
            None => return Ok(None),
        };
        Ok(self.dates.get(&oid).cloned())
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let mut tags = self.tags();
        if tags.contains_key(name) {
            return Err(ChannelTagError::tag(format!("Tag '{}' already exists", name)));
        }
        tags.insert(name.to_string(), oid);
        Ok(())
    }
}
