//! Error taxonomy for command delivery

use mcforge_core::CoreError;
use thiserror::Error;

/// Result type alias using DeliveryError
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Errors from a delivery attempt
///
/// The frame is all-or-nothing from the receiver's perspective (it waits
/// for the sentinel), so any of these means nothing was delivered.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// TCP connection could not be established
    #[error("failed to connect to {address}:{port}: {source}")]
    Connect {
        address: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// TLS handshake failed certificate verification
    #[error("certificate verification failed: {reason}")]
    Certificate { reason: String },

    /// Failure while writing the frame or closing the write side
    #[error("failed to write delivery frame: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Connect or write exceeded the configured deadline
    #[error("delivery timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The endpoint address is not usable as a TLS server name
    #[error("'{name}' is not a valid TLS server name")]
    InvalidServerName { name: String },

    /// Payload could not be framed
    #[error(transparent)]
    Encode(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_message_names_endpoint() {
        let err = DeliveryError::Connect {
            address: "203.0.113.9".to_string(),
            port: 25563,
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert!(err.to_string().contains("203.0.113.9:25563"));
    }

    #[test]
    fn test_encode_error_wraps_core_error() {
        let err: DeliveryError = CoreError::SentinelCollision.into();
        assert!(matches!(err, DeliveryError::Encode(_)));
    }
}
