//! Error types shared by the walker, the report writer and the flattener

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreecatError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to walk '{}'", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("invalid exclusion pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to write report '{}'", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("destination must be a single folder name, got '{0}'")]
    InvalidDestination(String),

    #[error("failed to create destination '{}'", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy '{}' to '{}'", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TreecatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_root_not_found_message() {
        let err = TreecatError::RootNotFound(PathBuf::from("missing"));
        assert_eq!(
            err.to_string(),
            "cannot access 'missing': No such file or directory"
        );
    }

    #[test]
    fn test_copy_error_keeps_source() {
        let err = TreecatError::Copy {
            from: PathBuf::from("a.txt"),
            to: PathBuf::from("output/a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("a.txt"));
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("denied"));
    }

    #[test]
    fn test_invalid_pattern_error() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = TreecatError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "invalid exclusion pattern: [");
    }
}
