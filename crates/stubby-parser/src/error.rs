//! Parser error types for stubby-parser.

use std::path::PathBuf;

/// Errors that can occur while reading and lowering Go source.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse failed for {}:{line}: {message}", path.display())]
    ParseFailed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("not a Go source file: {}", .0.display())]
    NotGoSource(PathBuf),
}
