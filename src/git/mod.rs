//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the few git operations
//! channel-tag needs, allowing real repositories and an in-memory mock to be
//! used interchangeably.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Nothing here fetches, pushes or deletes; the only write is creating a
//! lightweight tag.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// Implementors must be `Send`; a repository is driven from one thread at a
/// time. Methods map underlying errors (like `git2::Error`) to
/// [crate::error::ChannelTagError] variants.
pub trait Repository: Send {
    /// Get all tags in the repository, in no particular order.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Object ID of the commit HEAD points at.
    ///
    /// An unborn HEAD is a [`git2::ErrorCode::UnbornBranch`] git error.
    fn head_oid(&self) -> Result<Oid>;

    /// Tags pointing at the HEAD commit.
    fn tags_at_head(&self) -> Result<Vec<String>>;

    /// Find a tag by name and get the OID of the commit it points at.
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - If the tag exists
    /// * `Ok(None)` - If the tag doesn't exist
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Committer date of the commit a revision (tag or branch) resolves to,
    /// in git's `%ci` layout, e.g. `2018-02-16 01:40:11 -0200`.
    ///
    /// Returns `Ok(None)` when the revision does not exist.
    fn release_date(&self, revision: &str) -> Result<Option<String>>;

    /// Create a lightweight tag at given OID
    ///
    /// Fails if the tag already exists.
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;
}
