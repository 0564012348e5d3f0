use std::fmt;

/// Warnings raised while deriving a release tag.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag has no numeric core to increment
    UnparsableTag { tag: String, fallback: String },
    /// Tag is an editor build number and is never incremented
    BuildNumberTag { tag: String },
    /// Repository has no tags at all
    NoTags { fallback: String },
    /// HEAD already carries release tags
    HeadAlreadyTagged { tags: Vec<String> },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, fallback } => {
                write!(
                    f,
                    "Could not increment the tag '{}', falling back to '{}'",
                    tag, fallback
                )
            }
            BoundaryWarning::BuildNumberTag { tag } => {
                write!(f, "Tag '{}' is a build number and is left unchanged", tag)
            }
            BoundaryWarning::NoTags { fallback } => {
                write!(f, "Repository has no tags, using '{}'", fallback)
            }
            BoundaryWarning::HeadAlreadyTagged { tags } => {
                write!(
                    f,
                    "The current HEAD commit already has the tag(s): {}",
                    tags.join(", ")
                )
            }
        }
    }
}
