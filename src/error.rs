use thiserror::Error;

/// Category of a [`TagNextError`], stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RepoNotFound,
    NoTagFound,
    MalformedTag,
    TagCollision,
    ArgumentConflict,
    UnknownArgument,
    Usage,
    Config,
    Git,
    Io,
}

/// Unified error type for tag-next operations
#[derive(Error, Debug)]
pub enum TagNextError {
    #[error("Not inside a git repository: {0}")]
    RepoNotFound(String),

    #[error("No tag found: {0}")]
    NoTagFound(String),

    #[error("Malformed tag: {0}")]
    MalformedTag(String),

    #[error("Tag already exists: {0}")]
    TagCollision(String),

    #[error("Conflicting arguments: {0}")]
    ArgumentConflict(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-next
pub type Result<T> = std::result::Result<T, TagNextError>;

impl TagNextError {
    /// Create a malformed tag error with context
    pub fn malformed(msg: impl Into<String>) -> Self {
        TagNextError::MalformedTag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagNextError::Config(msg.into())
    }

    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        TagNextError::Usage(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TagNextError::RepoNotFound(_) => ErrorKind::RepoNotFound,
            TagNextError::NoTagFound(_) => ErrorKind::NoTagFound,
            TagNextError::MalformedTag(_) => ErrorKind::MalformedTag,
            TagNextError::TagCollision(_) => ErrorKind::TagCollision,
            TagNextError::ArgumentConflict(_) => ErrorKind::ArgumentConflict,
            TagNextError::UnknownArgument(_) => ErrorKind::UnknownArgument,
            TagNextError::Usage(_) => ErrorKind::Usage,
            TagNextError::Config(_) => ErrorKind::Config,
            TagNextError::Git(_) => ErrorKind::Git,
            TagNextError::Io(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for this error. Every failure is fatal.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TagNextError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TagNextError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("object not found");
        let err: TagNextError = git_err.into();
        assert_eq!(err.kind(), ErrorKind::Git);
        assert!(err.to_string().contains("object not found"));
    }

    #[test]
    fn test_error_kinds() {
        let pairs = vec![
            (TagNextError::RepoNotFound("x".into()), ErrorKind::RepoNotFound),
            (TagNextError::NoTagFound("x".into()), ErrorKind::NoTagFound),
            (TagNextError::malformed("x"), ErrorKind::MalformedTag),
            (TagNextError::TagCollision("x".into()), ErrorKind::TagCollision),
            (TagNextError::ArgumentConflict("x".into()), ErrorKind::ArgumentConflict),
            (TagNextError::UnknownArgument("x".into()), ErrorKind::UnknownArgument),
            (TagNextError::usage("x"), ErrorKind::Usage),
            (TagNextError::config("x"), ErrorKind::Config),
        ];

        for (err, kind) in pairs {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (TagNextError::malformed("x"), "Malformed tag"),
            (TagNextError::TagCollision("x".into()), "Tag already exists"),
            (TagNextError::NoTagFound("x".into()), "No tag found"),
            (TagNextError::UnknownArgument("x".into()), "Unknown argument"),
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
}
