use thiserror::Error;

/// Unified error type for channel-tag operations
#[derive(Error, Debug)]
pub enum ChannelTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid severity: {0}")]
    Severity(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in channel-tag
pub type Result<T> = std::result::Result<T, ChannelTagError>;

impl ChannelTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChannelTagError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ChannelTagError::Version(msg.into())
    }

    /// Create a severity error with context
    pub fn severity(msg: impl Into<String>) -> Self {
        ChannelTagError::Severity(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ChannelTagError::Tag(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChannelTagError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChannelTagError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git() {
        let git_err = git2::Error::from_str("reference not found");
        let err: ChannelTagError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ChannelTagError::config("x"), "Configuration error"),
            (ChannelTagError::version("x"), "Version parsing error"),
            (ChannelTagError::severity("x"), "Invalid severity"),
            (ChannelTagError::tag("x"), "Tag error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_keeps_offending_literal() {
        let err = ChannelTagError::severity("'2.5' is not a N.N.N version");
        assert!(err.to_string().contains("'2.5'"));
    }
}
