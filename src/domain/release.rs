//! Release bookkeeping: which tag is the current release and its date stamp.

use crate::boundary::BoundaryWarning;
use crate::domain::tag::UNTAGGED;
use crate::domain::version::normalize;
use crate::error::{ChannelTagError, Result};
use jiff::tz::{Offset, TimeZone};
use jiff::Timestamp;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

/// Tags that start with `number.number` are release tags.
static RELEASE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+").unwrap());

/// Git's `%ci` date layout, e.g. `2018-02-16 01:40:11 -0200`.
static COMMITTER_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})[ T]([0-9]{2}):([0-9]{2})").unwrap()
});

/// The tag a package is currently released at.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestTag {
    pub tag: String,
    pub warning: Option<BoundaryWarning>,
}

/// Orders tags the way `git tag --sort=version:refname` lists them.
///
/// Tags without a number sort first; ties are broken by name.
pub fn version_order(a: &str, b: &str) -> Ordering {
    normalize(a)
        .version()
        .cmp(&normalize(b).version())
        .then_with(|| a.cmp(b))
}

/// Pick the latest release tag among all tags of a repository.
///
/// Prefers the greatest tag starting with `number.number`; otherwise the
/// greatest tag overall; with no tags, [`UNTAGGED`].
pub fn select_latest_tag(tags: &[String]) -> LatestTag {
    let latest = tags
        .iter()
        .filter(|tag| RELEASE_TAG.is_match(tag))
        .max_by(|a, b| version_order(a, b))
        .or_else(|| tags.iter().max_by(|a, b| version_order(a, b)));

    match latest {
        Some(tag) => LatestTag {
            tag: tag.clone(),
            warning: None,
        },
        None => LatestTag {
            tag: UNTAGGED.to_string(),
            warning: Some(BoundaryWarning::NoTags {
                fallback: UNTAGGED.to_string(),
            }),
        },
    }
}

/// Turn a committer date into a date version, `YYYY.MMDD.HHMM`.
///
/// `"2018-02-16 01:40:11 -0200"` becomes `"2018.0216.0140"`.
pub fn date_version(release_date: &str) -> Result<String> {
    let captures = COMMITTER_DATE.captures(release_date.trim()).ok_or_else(|| {
        ChannelTagError::version(format!(
            "'{}' is not a date of the form YYYY-MM-DD HH:MM:SS",
            release_date
        ))
    })?;

    Ok(format!(
        "{}.{}{}.{}{}",
        &captures[1], &captures[2], &captures[3], &captures[4], &captures[5]
    ))
}

/// Render a commit time in git's `%ci` layout using the commit's own offset.
pub fn release_date(seconds: i64, offset_minutes: i32) -> Result<String> {
    let timestamp = Timestamp::from_second(seconds)
        .map_err(|e| ChannelTagError::version(format!("Invalid commit time: {}", e)))?;
    let offset = Offset::from_seconds(offset_minutes * 60)
        .map_err(|e| ChannelTagError::version(format!("Invalid commit offset: {}", e)))?;

    let zoned = timestamp.to_zoned(TimeZone::fixed(offset));
    Ok(zoned.strftime("%Y-%m-%d %H:%M:%S %z").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_latest_release_tag_by_version() {
        let latest = select_latest_tag(&tags(&["1.2.0", "1.10.0", "1.9.3"]));
        assert_eq!(latest.tag, "1.10.0");
        assert_eq!(latest.warning, None);
    }

    #[test]
    fn test_prefixed_tags_lose_to_release_tags() {
        let latest = select_latest_tag(&tags(&["v9.0.0", "1.0.1", "3147"]));
        assert_eq!(latest.tag, "1.0.1");
    }

    #[test]
    fn test_falls_back_to_greatest_tag() {
        let latest = select_latest_tag(&tags(&["3143", "v1.2", "3147"]));
        assert_eq!(latest.tag, "3147");
    }

    #[test]
    fn test_release_tag_with_suffix() {
        let latest = select_latest_tag(&tags(&["1.0.0", "1.1-beta"]));
        assert_eq!(latest.tag, "1.1-beta");
    }

    #[test]
    fn test_no_tags() {
        let latest = select_latest_tag(&[]);
        assert_eq!(latest.tag, UNTAGGED);
        assert!(matches!(latest.warning, Some(BoundaryWarning::NoTags { .. })));
    }

    #[test]
    fn test_version_order_puts_numberless_first() {
        let mut names = tags(&["2.0.0", "master", "1.0.0"]);
        names.sort_by(|a, b| version_order(a, b));
        assert_eq!(names, tags(&["master", "1.0.0", "2.0.0"]));
    }

    #[test]
    fn test_date_version() {
        assert_eq!(
            date_version("2018-02-16 01:40:11 -0200").unwrap(),
            "2018.0216.0140"
        );
        assert_eq!(date_version("2017-04-13 16:44:14").unwrap(), "2017.0413.1644");
    }

    #[test]
    fn test_date_version_rejects_garbage() {
        assert!(date_version("yesterday").is_err());
        assert!(date_version("").is_err());
    }

    #[test]
    fn test_release_date_uses_commit_offset() {
        assert_eq!(
            release_date(1518752411, -120).unwrap(),
            "2018-02-16 01:40:11 -0200"
        );
        assert_eq!(release_date(0, 0).unwrap(), "1970-01-01 00:00:00 +0000");
    }
}
