//! Error types for brewbook
//!
//! Library code returns [`Error`]; the binary wraps it in `anyhow` for
//! context.

use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::HighlightError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Highlight error: {0}")]
    Highlight(#[from] HighlightError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme could not be found or has bad colors
    #[error("Theme error: {0}")]
    Theme(String),

    /// A note file without usable front matter
    #[error("Invalid front matter in {}: {reason}", .path.display())]
    FrontMatter { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_error_converts() {
        let err: Error = HighlightError::MissingSource.into();
        assert!(matches!(err, Error::Highlight(_)));
        assert_eq!(
            err.to_string(),
            "Highlight error: no source text to highlight"
        );
    }

    #[test]
    fn test_front_matter_display() {
        let err = Error::FrontMatter {
            path: PathBuf::from("notes/basics.md"),
            reason: "missing title".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid front matter in notes/basics.md: missing title"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
