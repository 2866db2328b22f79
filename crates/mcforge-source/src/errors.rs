//! Error taxonomy for command generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SourceError
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors from invoking the external command generator
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source path does not point to a regular file
    #[error("{path} is not a file")]
    NotAFile { path: PathBuf },

    /// The generator process could not be launched
    #[error("failed to launch generator '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator emitted diagnostics; its stdout is discarded
    #[error("generator reported errors:\n{diagnostics}")]
    Diagnostics { diagnostics: String },

    /// Generator output was not valid UTF-8
    #[error("generator output is not valid UTF-8")]
    NonUtf8Output,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_message_carries_stderr_text() {
        let err = SourceError::Diagnostics {
            diagnostics: "parse error on line 3".to_string(),
        };
        assert!(err.to_string().contains("parse error on line 3"));
    }
}
