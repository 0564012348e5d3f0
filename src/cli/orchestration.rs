//! Next-tag workflow
//!
//! Reads the tags of a repository, decides which one is the current release,
//! and derives the next tag from it. Kept apart from `main.rs` so it can run
//! against any [`Repository`], including the mock.

use crate::boundary::BoundaryWarning;
use crate::domain::release::{date_version, select_latest_tag};
use crate::domain::{Increment, Severity, TagIncrementer};
use crate::error::{ChannelTagError, Result};
use crate::git::Repository;
use git2::ErrorCode;
use tracing::{info, warn};

/// Arguments for the next-tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct NextTagArgs {
    /// How significant the release is
    pub severity: Severity,

    /// Start at 1.0.0 when the latest tag has no number
    pub create_when_missing: bool,
}

/// What the workflow would do, before anything is written
#[derive(Debug, Clone, PartialEq)]
pub struct NextTagPlan {
    /// Latest release tag (or the untagged sentinel)
    pub current_tag: String,

    /// Next tag derived from `current_tag`
    pub next: Increment,

    /// Committer date of `current_tag`, `%ci` layout
    pub release_date: Option<String>,

    /// `release_date` as `YYYY.MMDD.HHMM`
    pub date_version: Option<String>,

    /// Tags already on HEAD
    pub head_tags: Vec<String>,

    /// Every non-fatal condition met on the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Result of a successful tag creation
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that was created
    pub tag: String,

    /// The release tag it was derived from
    pub previous: String,
}

/// Work out the next tag of the repository without touching it.
pub fn plan_next_tag<R: Repository>(repo: &R, args: &NextTagArgs) -> Result<NextTagPlan> {
    let latest = select_latest_tag(&repo.list_tags()?);
    let mut warnings: Vec<BoundaryWarning> = latest.warning.into_iter().collect();

    let next = TagIncrementer::new()
        .create_when_missing(args.create_when_missing)
        .increment(&latest.tag, &args.severity);
    warnings.extend(next.warning.clone());

    let release_date = repo.release_date(&latest.tag)?;
    let date_version = release_date.as_deref().map(date_version).transpose()?;

    // An unborn HEAD simply has no tags.
    let head_tags = match repo.head_oid() {
        Ok(_) => repo.tags_at_head()?,
        Err(ChannelTagError::Git(e)) if e.code() == ErrorCode::UnbornBranch => Vec::new(),
        Err(e) => return Err(e),
    };
    if !head_tags.is_empty() {
        warn!(tags = ?head_tags, "HEAD is already tagged");
        warnings.push(BoundaryWarning::HeadAlreadyTagged {
            tags: head_tags.clone(),
        });
    }

    Ok(NextTagPlan {
        current_tag: latest.tag,
        next,
        release_date,
        date_version,
        head_tags,
        warnings,
    })
}

/// Create the planned tag as a lightweight tag on HEAD.
///
/// Refuses when the tag could not be incremented or already exists.
pub fn create_next_tag<R: Repository>(repo: &R, plan: &NextTagPlan) -> Result<WorkflowResult> {
    if !plan.next.incremented {
        return Err(ChannelTagError::tag(format!(
            "The tag '{}' could not be incremented",
            plan.current_tag
        )));
    }

    let tag = plan.next.tag.as_str();
    if repo.find_tag_oid(tag)?.is_some() {
        return Err(ChannelTagError::tag(format!("Tag '{}' already exists", tag)));
    }

    let head = repo.head_oid()?;
    repo.create_tag(tag, head)?;
    info!(tag, previous = %plan.current_tag, "created tag");

    Ok(WorkflowResult {
        tag: tag.to_string(),
        previous: plan.current_tag.clone(),
    })
}
