//! Sentinel-framed wire codec for the delivery protocol
//!
//! The transport is a bare byte stream, so the frame is self-delimiting:
//! one JSON document, a blank-line separator, then a fixed sentinel the
//! listener watches for. The protocol has no escaping; a document that
//! already contains the sentinel is rejected at encode time rather than
//! sent ambiguously.

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};
use crate::model::{CommandBatch, DeliveryPayload};
use crate::sensitive::Sensitive;

/// End-of-message marker, agreed out-of-band with the listener
pub const SENTINEL: &str = "------***endofsequence***-------";

/// Separator between the JSON document and the sentinel
const SEPARATOR: &str = "\n\n";

/// The JSON document as it appears on the wire
///
/// `commands` is the whole batch as one newline-joined string.
#[derive(Serialize, Deserialize)]
struct WireDoc {
    world: String,
    password: String,
    commands: String,
}

/// Encode a payload as a complete sentinel-terminated frame
///
/// # Errors
/// * `CoreError::Serialization` - JSON encoding failed
/// * `CoreError::SentinelCollision` - the document contains the sentinel
pub fn encode_frame(payload: &DeliveryPayload) -> Result<Vec<u8>> {
    let doc = WireDoc {
        world: payload.world.clone(),
        password: payload.password.expose().clone(),
        commands: payload.commands.to_text(),
    };
    let json = serde_json::to_string(&doc)?;
    if json.contains(SENTINEL) {
        return Err(CoreError::SentinelCollision);
    }

    let mut frame = json.into_bytes();
    frame.extend_from_slice(SEPARATOR.as_bytes());
    frame.extend_from_slice(SENTINEL.as_bytes());
    Ok(frame)
}

/// Decode a complete frame back into a payload
///
/// This is the reference receiver contract: a listener that accumulates
/// bytes until the sentinel and then parses with this function observes
/// exactly the `world`, `password`, and `commands` values that were sent.
///
/// # Errors
/// * `CoreError::MissingSentinel` - input does not end with the sentinel
/// * `CoreError::TruncatedFrame` - separator before the sentinel is missing
/// * `CoreError::Serialization` - input is not UTF-8 or not valid JSON
pub fn decode_frame(frame: &[u8]) -> Result<DeliveryPayload> {
    let text = std::str::from_utf8(frame).map_err(|e| CoreError::Serialization {
        message: e.to_string(),
    })?;
    let body = text
        .strip_suffix(SENTINEL)
        .ok_or(CoreError::MissingSentinel)?;
    let body = body
        .strip_suffix(SEPARATOR)
        .ok_or(CoreError::TruncatedFrame)?;

    let doc: WireDoc = serde_json::from_str(body)?;
    Ok(DeliveryPayload {
        world: doc.world,
        password: Sensitive::new(doc.password),
        commands: CommandBatch::from_text(&doc.commands),
    })
}
