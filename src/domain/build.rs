use crate::error::{ChannelTagError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Oldest editor build a release may declare support for.
pub const MINIMUM_ACCEPTABLE_BUILD: u32 = 3092;

static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\s*-\s*([0-9]+)$").unwrap());
static BOUND: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(<=|>=|<|>)([0-9]+)$").unwrap());

/// Editor builds a release declares support for, e.g. `>=3126`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildRange {
    /// `*`
    Any,
    /// `>N`
    Above(u32),
    /// `>=N`
    AtLeast(u32),
    /// `<N`
    Below(u32),
    /// `<=N`
    AtMost(u32),
    /// `N - M`
    Between(u32, u32),
}

impl BuildRange {
    /// Inclusive lower and upper bounds; `None` is unbounded.
    pub fn bounds(&self) -> (Option<u64>, Option<u64>) {
        match *self {
            BuildRange::Any => (None, None),
            BuildRange::Above(n) => (Some(u64::from(n) + 1), None),
            BuildRange::AtLeast(n) => (Some(u64::from(n)), None),
            BuildRange::Below(n) => (None, Some(u64::from(n).saturating_sub(1))),
            BuildRange::AtMost(n) => (None, Some(u64::from(n))),
            BuildRange::Between(low, high) => (Some(u64::from(low)), Some(u64::from(high))),
        }
    }

    /// Whether this range only targets builds at or after `minimum`.
    ///
    /// An open lower bound counts as too old, so `<N` and `<=N` never qualify.
    pub fn is_compatible(&self, minimum: u32) -> bool {
        if *self == BuildRange::Any {
            return true;
        }

        let minimum = u64::from(minimum);
        let (low, high) = self.bounds();
        let low_ok = low.is_some_and(|low| low >= minimum);
        let high_ok = high.map_or(true, |high| high >= minimum);
        low_ok && high_ok
    }
}

impl FromStr for BuildRange {
    type Err = ChannelTagError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text == "*" {
            return Ok(BuildRange::Any);
        }

        let number = |digits: &str| {
            digits
                .parse::<u32>()
                .map_err(|_| ChannelTagError::version(format!("Build number out of range: {}", digits)))
        };

        if let Some(captures) = BOUND.captures(text) {
            let build = number(&captures[2])?;
            return Ok(match &captures[1] {
                ">" => BuildRange::Above(build),
                ">=" => BuildRange::AtLeast(build),
                "<" => BuildRange::Below(build),
                _ => BuildRange::AtMost(build),
            });
        }

        if let Some(captures) = RANGE.captures(text) {
            return Ok(BuildRange::Between(number(&captures[1])?, number(&captures[2])?));
        }

        Err(ChannelTagError::version(format!(
            "'{}' is not a build range (*, >N, >=N, <N, <=N or N - M)",
            s
        )))
    }
}

impl fmt::Display for BuildRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildRange::Any => write!(f, "*"),
            BuildRange::Above(n) => write!(f, ">{}", n),
            BuildRange::AtLeast(n) => write!(f, ">={}", n),
            BuildRange::Below(n) => write!(f, "<{}", n),
            BuildRange::AtMost(n) => write!(f, "<={}", n),
            BuildRange::Between(low, high) => write!(f, "{} - {}", low, high),
        }
    }
}

/// Check a range given as text; unknown syntax is never compatible.
pub fn is_compatible_range(range: &str, minimum: u32) -> bool {
    range
        .parse::<BuildRange>()
        .map_or(false, |range| range.is_compatible(minimum))
}

/// Trailing build number of a text such as `"Sublime Text Build 3147"`, or 0.
pub fn trailing_build_number(text: &str) -> u32 {
    let start = text
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .len();
    text[start..].parse().unwrap_or(0)
}
