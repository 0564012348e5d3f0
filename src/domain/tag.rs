use crate::boundary::BoundaryWarning;
use crate::domain::severity::Severity;
use crate::domain::version::{normalize, Version};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Plain integer tags above this are editor build numbers.
pub const BUILD_NUMBER_THRESHOLD: u64 = 3000;

/// First tag handed out when a package has none and one must be created.
pub const INITIAL_TAG: &str = "1.0.0";

/// Stand-in for "no usable tag": the branch a package is installed from.
pub const UNTAGGED: &str = "master";

/// Result of incrementing a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Increment {
    /// Next tag, with the original prefix and suffix kept
    pub tag: String,
    /// False when the tag was left as it was
    pub incremented: bool,
    /// Bare `N.N.N` version of `tag` (or the tag itself when not incremented)
    pub version: String,
    /// Set when a fallback or guard kicked in
    pub warning: Option<BoundaryWarning>,
}

impl Increment {
    fn unchanged(tag: &str, warning: Option<BoundaryWarning>) -> Self {
        Increment {
            tag: tag.to_string(),
            incremented: false,
            version: tag.to_string(),
            warning,
        }
    }

    fn to(version: String) -> Self {
        Increment {
            tag: version.clone(),
            incremented: true,
            version,
            warning: None,
        }
    }
}

/// Computes the next tag of a package.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagIncrementer {
    create_when_missing: bool,
}

impl TagIncrementer {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, a tag without any number yields the initial release tag
    /// instead of the untagged sentinel.
    pub fn create_when_missing(mut self, create: bool) -> Self {
        self.create_when_missing = create;
        self
    }

    /// Increment `current_tag` at the given severity.
    ///
    /// Never fails: tags without a numeric core fall back to [`INITIAL_TAG`]
    /// or [`UNTAGGED`], and build numbers are returned untouched.
    pub fn increment(&self, current_tag: &str, severity: &Severity) -> Increment {
        if let Severity::Explicit(version) = severity {
            return Increment::to(version.to_string());
        }

        let Some(level) = severity.position() else {
            return Increment::unchanged(current_tag, None);
        };

        if is_build_number(current_tag) {
            debug!(tag = current_tag, "build number tags are never incremented");
            let warning = BoundaryWarning::BuildNumberTag {
                tag: current_tag.to_string(),
            };
            return Increment::unchanged(current_tag, Some(warning));
        }

        let normalized = normalize(current_tag);
        let bumped = normalized
            .version()
            .zip(normalized.span())
            .map(|(version, span)| (bump(version, level), span));

        if let Some((next, span)) = bumped {
            let version = next.to_string();
            let tag = format!(
                "{}{}{}",
                &current_tag[..span.start],
                version,
                &current_tag[span.end..]
            );

            return Increment {
                tag,
                incremented: true,
                version,
                warning: None,
            };
        }

        self.fallback(current_tag)
    }

    fn fallback(&self, current_tag: &str) -> Increment {
        let (fallback, incremented) = if self.create_when_missing {
            (INITIAL_TAG, true)
        } else {
            (UNTAGGED, false)
        };

        warn!(tag = current_tag, fallback, "could not increment the tag");

        Increment {
            tag: fallback.to_string(),
            incremented,
            version: fallback.to_string(),
            warning: Some(BoundaryWarning::UnparsableTag {
                tag: current_tag.to_string(),
                fallback: fallback.to_string(),
            }),
        }
    }
}

/// Increment `current_tag` without creating an initial tag when it has no number.
pub fn increment(current_tag: &str, severity: &Severity) -> Increment {
    TagIncrementer::new().increment(current_tag, severity)
}

/// A plain integer above [`BUILD_NUMBER_THRESHOLD`], such as `3147`.
pub fn is_build_number(tag: &str) -> bool {
    let digits = tag.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    // Anything that overflows is far above the threshold anyway.
    digits
        .parse::<u64>()
        .map_or(true, |number| number > BUILD_NUMBER_THRESHOLD)
}

/// Apply the cascading rule: the requested position is bumped, the less
/// significant ones reset, the more significant ones kept as written.
fn bump(version: &Version, level: u8) -> Version {
    let update = |position: u8| {
        let current = version.component(position);
        match level.cmp(&position) {
            Ordering::Equal => add_one(current),
            Ordering::Less => "0".to_string(),
            Ordering::Greater => current.to_string(),
        }
    };

    Version::from_digits(update(1), update(2), update(3))
}

/// Decimal text of `digits + 1`, without leading zeros.
fn add_one(digits: &str) -> String {
    let mut reversed = String::with_capacity(digits.len() + 1);
    let mut carry = true;

    for digit in digits.trim_start_matches('0').chars().rev() {
        match (carry, digit) {
            (true, '9') => reversed.push('0'),
            (true, _) => {
                reversed.push((digit as u8 + 1) as char);
                carry = false;
            }
            (false, _) => reversed.push(digit),
        }
    }
    if carry {
        reversed.push('1');
    }

    reversed.chars().rev().collect()
}
