use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use tracing::debug;

static TRIPLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap());
static PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.[0-9]+").unwrap());
static SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// A `MAJOR.MINOR.PATCH` triple, kept as the digit text it was written with.
///
/// Components are not limited to any integer width and `"01.0.0"` stays
/// `"01.0.0"`. Ordering is numeric, with the text breaking ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: String,
    minor: String,
    patch: String,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version::from_digits(major.to_string(), minor.to_string(), patch.to_string())
    }

    pub(crate) fn from_digits(major: String, minor: String, patch: String) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a strict `N.N.N` string, nothing before or after it.
    pub fn parse_exact(text: &str) -> Option<Self> {
        let found = TRIPLE.find(text)?;
        if found.start() != 0 || found.end() != text.len() {
            return None;
        }
        Some(VersionShape::Triple.expand(found.as_str()))
    }

    /// Digits at a 1-based position (1 = major, 2 = minor, 3 = patch).
    pub(crate) fn component(&self, position: u8) -> &str {
        match position {
            1 => &self.major,
            2 => &self.minor,
            _ => &self.patch,
        }
    }
}

/// Compare two runs of ASCII digits by value.
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (1..=3)
            .map(|position| numeric_cmp(self.component(position), other.component(position)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                (&self.major, &self.minor, &self.patch).cmp(&(
                    &other.major,
                    &other.minor,
                    &other.patch,
                ))
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The numeric shapes a tag may carry, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionShape {
    /// `N.M.P`
    Triple,
    /// `N.M`
    Pair,
    /// `N`
    Single,
}

impl VersionShape {
    /// Order in which shapes are tried against a tag.
    pub const BY_SPECIFICITY: [VersionShape; 3] =
        [VersionShape::Triple, VersionShape::Pair, VersionShape::Single];

    fn pattern(self) -> &'static Regex {
        match self {
            VersionShape::Triple => &TRIPLE,
            VersionShape::Pair => &PAIR,
            VersionShape::Single => &SINGLE,
        }
    }

    /// Expand the matched text to a full triple, appending `.0` for the
    /// components this shape lacks.
    fn expand(self, matched: &str) -> Version {
        let mut parts = matched.split('.').map(str::to_string);
        let mut next = || parts.next().unwrap_or_else(|| "0".to_string());

        let (major, minor, patch) = match self {
            VersionShape::Triple => (next(), next(), next()),
            VersionShape::Pair => (next(), next(), "0".to_string()),
            VersionShape::Single => (next(), "0".to_string(), "0".to_string()),
        };
        Version::from_digits(major, minor, patch)
    }
}

/// Outcome of normalizing a tag.
///
/// `matched` is the exact slice of the input that the winning shape matched;
/// callers splice their replacement into that span. When the tag carries no
/// digits both fields hold the tag itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a> {
    pub normalized: String,
    pub matched: &'a str,
    version: Option<Version>,
    span: Option<Range<usize>>,
}

impl<'a> Normalized<'a> {
    /// The parsed triple, if any shape matched.
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    /// Byte range of `matched` within the source tag.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    /// Whether a numeric core was found.
    pub fn is_versioned(&self) -> bool {
        self.span.is_some()
    }
}

/// Normalize a tag of any format to `MAJOR.MINOR.PATCH`.
///
/// The shapes are tried from most to least specific and the first one found
/// anywhere in the tag wins:
///
/// ```ignore
/// assert_eq!(normalize("v1.6a").normalized, "1.6.0");
/// assert_eq!(normalize("v1.6a").matched, "1.6");
/// assert_eq!(normalize("master").normalized, "master");
/// ```
pub fn normalize(tag: &str) -> Normalized<'_> {
    let found = VersionShape::BY_SPECIFICITY
        .into_iter()
        .find_map(|shape| shape.pattern().find(tag).map(|m| (shape, m)));

    match found {
        Some((shape, found)) => {
            debug!(tag, shape = ?shape, matched = found.as_str(), "normalized tag");

            let version = shape.expand(found.as_str());
            Normalized {
                normalized: version.to_string(),
                matched: found.as_str(),
                version: Some(version),
                span: Some(found.range()),
            }
        }
        None => Normalized {
            normalized: tag.to_string(),
            matched: tag,
            version: None,
            span: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(tag: &str) -> (String, String) {
        let n = normalize(tag);
        (n.normalized, n.matched.to_string())
    }

    #[test]
    fn test_normalize_plain_tags() {
        assert_eq!(pair("1.0"), ("1.0.0".into(), "1.0".into()));
        assert_eq!(pair("1.6"), ("1.6.0".into(), "1.6".into()));
        assert_eq!(pair("1.6.1"), ("1.6.1".into(), "1.6.1".into()));
    }

    #[test]
    fn test_normalize_prefixed_tags() {
        assert_eq!(pair("v1"), ("1.0.0".into(), "1".into()));
        assert_eq!(pair("v1.1"), ("1.1.0".into(), "1.1".into()));
        assert_eq!(pair("v1.1.1"), ("1.1.1".into(), "1.1.1".into()));
        assert_eq!(pair("v1.6.0"), ("1.6.0".into(), "1.6.0".into()));
    }

    #[test]
    fn test_normalize_stops_at_non_numeric() {
        assert_eq!(pair("v1.6a"), ("1.6.0".into(), "1.6".into()));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for tag in ["1.0.0", "1.6.0", "1.6.1", "10.20.30"] {
            assert_eq!(pair(tag), (tag.to_string(), tag.to_string()));
        }
    }

    #[test]
    fn test_normalize_without_digits() {
        assert_eq!(pair("master"), ("master".into(), "master".into()));
        assert!(!normalize("master").is_versioned());
        assert_eq!(pair(""), (String::new(), String::new()));
    }

    #[test]
    fn test_triple_anywhere_beats_earlier_single() {
        let n = normalize("build7-2.3.4");
        assert_eq!(n.normalized, "2.3.4");
        assert_eq!(n.matched, "2.3.4");
        assert_eq!(n.span(), Some(7..12));
    }

    #[test]
    fn test_extra_components_are_ignored() {
        assert_eq!(pair("1.2.3.4"), ("1.2.3".into(), "1.2.3".into()));
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(
            pair("2018.0216.0140"),
            ("2018.0216.0140".into(), "2018.0216.0140".into())
        );
        assert_eq!(pair("01.0.0"), ("01.0.0".into(), "01.0.0".into()));
        assert_eq!(pair("v1.02"), ("1.02.0".into(), "1.02".into()));
    }

    #[test]
    fn test_oversized_components_are_versions() {
        let n = normalize("v99999999999999999999999");
        assert_eq!(n.normalized, "99999999999999999999999.0.0");
        assert!(n.is_versioned());

        assert_eq!(
            pair("99999999999999999999.1 2"),
            ("99999999999999999999.1.0".into(), "99999999999999999999.1".into())
        );
    }

    #[test]
    fn test_parse_exact() {
        assert_eq!(Version::parse_exact("2.5.0"), Some(Version::new(2, 5, 0)));
        assert_eq!(Version::parse_exact("v2.5.0"), None);
        assert_eq!(Version::parse_exact("2.5"), None);
        assert_eq!(Version::parse_exact("2.5.0-rc1"), None);
    }

    #[test]
    fn test_version_display_and_order() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 9));
    }

    #[test]
    fn test_version_order_is_numeric() {
        let padded = Version::parse_exact("2018.0216.0140").unwrap();
        assert!(padded > Version::new(2018, 215, 999));
        assert!(padded < Version::new(2018, 216, 141));
        let huge = Version::parse_exact("100000000000000000000.0.0").unwrap();
        assert!(huge > Version::new(u64::MAX, 0, 0));
        assert_ne!(Version::parse_exact("01.0.0"), Version::parse_exact("1.0.0"));
    }
}
