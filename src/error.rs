//! Error types for raster-canvas operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-canvas operations.
///
/// Out-of-bounds pixel writes are deliberately absent: they are silently dropped.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (export file creation, write, flush).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Malformed text image while parsing.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Scene configuration error.
    #[cfg(feature = "scene")]
    #[error("Scene configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_parse_error_line() {
        let err = Error::Parse {
            line: 3,
            message: "expected 255".to_string(),
        };
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("expected 255"));
    }

    #[cfg(feature = "scene")]
    #[test]
    fn test_config_display() {
        let err = Error::Config("operation 2: bad color".to_string());
        assert!(err.to_string().contains("Scene configuration error"));
        assert!(err.to_string().contains("operation 2"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
