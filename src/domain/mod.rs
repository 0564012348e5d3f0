//! Domain logic - pure tag rules independent of git operations

pub mod build;
pub mod release;
pub mod severity;
pub mod tag;
pub mod version;

pub use build::BuildRange;
pub use release::{date_version, select_latest_tag, LatestTag};
pub use severity::Severity;
pub use tag::{increment, Increment, TagIncrementer};
pub use version::{normalize, Normalized, Version, VersionShape};
