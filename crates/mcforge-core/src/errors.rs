//! Error taxonomy for the core model, chain compiler, and wire codec

use thiserror::Error;

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced by the chain compiler and the wire codec
///
/// Compiler errors (`InvalidFootprint`, `MissingAnchor`) are detected before
/// any cell is produced, so a failed compile never yields a partial artifact.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Placement footprint axis is zero or negative
    #[error("invalid chain footprint: {axis} = {value} (must be positive)")]
    InvalidFootprint { axis: char, value: i32 },

    /// Relative placement was requested but no anchor position was supplied
    #[error("relative placement requires an anchor position")]
    MissingAnchor,

    /// JSON encoding/decoding failure
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// The serialized document itself contains the frame sentinel,
    /// which would make the frame ambiguous on the wire
    #[error("payload contains the end-of-sequence sentinel")]
    SentinelCollision,

    /// Decoder input does not end with the frame sentinel
    #[error("frame is missing the end-of-sequence sentinel")]
    MissingSentinel,

    /// Decoder input has the sentinel but not the separator before it
    #[error("frame is truncated: separator before the sentinel is missing")]
    TruncatedFrame,
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization {
            message: err.to_string(),
        }
    }
}
