use serde::{Deserialize, Serialize};

/// Remote listener endpoint and transport security settings
///
/// `reject_unauthorized` only matters when `secure` is true: `false`
/// accepts self-signed or unknown-CA certificates, an operational tradeoff
/// for local/private servers rather than a general recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub address: String,
    pub port: u16,
    pub secure: bool,
    pub reject_unauthorized: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 25563,
            secure: false,
            reject_unauthorized: false,
        }
    }
}
