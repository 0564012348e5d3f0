use crate::domain::version::Version;
use crate::error::{ChannelTagError, Result};
use std::fmt;
use std::str::FromStr;

/// How significant the next release is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Keep the current tag
    NoChange,
    Patch,
    Minor,
    Major,
    /// Force this exact version regardless of the current tag
    Explicit(Version),
}

impl Severity {
    /// Build an explicit severity from a `N.N.N` literal.
    ///
    /// Anything else is a caller error and is reported, never coerced.
    pub fn explicit(literal: &str) -> Result<Self> {
        Version::parse_exact(literal.trim())
            .map(Severity::Explicit)
            .ok_or_else(|| {
                ChannelTagError::severity(format!(
                    "'{}' is not an explicit version of the form N.N.N",
                    literal
                ))
            })
    }

    /// Component position this severity bumps (1 = major, 2 = minor, 3 = patch).
    pub(crate) fn position(&self) -> Option<u8> {
        match self {
            Severity::Major => Some(1),
            Severity::Minor => Some(2),
            Severity::Patch => Some(3),
            Severity::NoChange | Severity::Explicit(_) => None,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Patch
    }
}

impl FromStr for Severity {
    type Err = ChannelTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "no-change" | "nochange" => Ok(Severity::NoChange),
            "patch" => Ok(Severity::Patch),
            "minor" => Ok(Severity::Minor),
            "major" => Ok(Severity::Major),
            other if other.starts_with(|c: char| c.is_ascii_digit()) => Severity::explicit(other),
            _ => Err(ChannelTagError::severity(format!(
                "unknown severity '{}' (expected none, patch, minor, major or N.N.N)",
                s
            ))),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::NoChange => write!(f, "none"),
            Severity::Patch => write!(f, "patch"),
            Severity::Minor => write!(f, "minor"),
            Severity::Major => write!(f, "major"),
            Severity::Explicit(version) => write!(f, "{}", version),
        }
    }
}
