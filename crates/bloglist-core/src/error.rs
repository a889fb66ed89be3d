use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the blog list service.
#[derive(Error, Debug)]
pub enum BlogError {
    /// The data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed or serialized.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A required payload field was empty or absent.
    #[error("{0} missing")]
    MissingField(&'static str),

    /// No blog document exists with the given id.
    #[error("Blog not found: {0}")]
    BlogNotFound(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the bloglist crates.
pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = BlogError::FileRead {
            path: PathBuf::from("/some/blogs.jsonl"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/blogs.jsonl"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_field() {
        let err = BlogError::MissingField("title or url");
        assert_eq!(err.to_string(), "title or url missing");
    }

    #[test]
    fn test_error_display_blog_not_found() {
        let err = BlogError::BlogNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Blog not found: abc-123");
    }

    #[test]
    fn test_error_display_config() {
        let err = BlogError::Config("bad port".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BlogError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: BlogError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
