//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for listexamples operations.
///
/// Every variant is fatal for the run: nothing is rendered once one of these
/// has been returned.
#[derive(Debug, Error)]
pub enum Error {
    /// The search path could not be made absolute
    #[error("cannot resolve search path {path}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither GOPATH, the config file nor a home directory gave a root
    #[error("no package root configured: set GOPATH or `root` in .listexamples.toml")]
    NoPackageRoot,

    /// The search path is not below the package root
    #[error("search path {path} is not in GOPATH ({root})")]
    OutsidePackageRoot { path: PathBuf, root: String },

    /// A source file could not be parsed
    #[error("could not parse files in {dir}: {file}:{line}:{column}: {message}")]
    Parse {
        dir: PathBuf,
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The Go grammar could not be loaded
    #[error("cannot load Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// File system related errors
    #[error("file system error at {path}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// Ignore pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Report serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO errors while writing the report
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with location
    pub fn parse(
        dir: impl Into<PathBuf>,
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            dir: dir.into(),
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_names_location() {
        let err = Error::parse("/go/src/demo", "/go/src/demo/a.go", 4, 7, "syntax error");
        assert_eq!(
            err.to_string(),
            "could not parse files in /go/src/demo: /go/src/demo/a.go:4:7: syntax error"
        );
    }

    #[test]
    fn test_outside_root_message() {
        let err = Error::OutsidePackageRoot {
            path: PathBuf::from("/tmp/x"),
            root: "/home/me/go".to_string(),
        };
        assert_eq!(err.to_string(), "search path /tmp/x is not in GOPATH (/home/me/go)");
    }
}
