//! JSON codec for demo messages.
//!
//! Messages travel through the queue as JSON strings. Decoding an encoded
//! message yields a value equal to the original, timestamp included.

use crate::message::DemoMessage;
use thiserror::Error;

/// Error raised when a message cannot be rendered as JSON.
#[derive(Debug, Error)]
#[error("Failed to encode message: {source}")]
pub struct EncodeError {
    #[from]
    source: serde_json::Error,
}

/// Error raised when a payload cannot be read back as a message.
#[derive(Debug, Error)]
#[error("Failed to decode payload: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

/// Render a message as its JSON wire form.
pub fn encode(message: &DemoMessage) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(message)?)
}

/// Read a JSON payload back into a message.
pub fn decode(payload: &str) -> Result<DemoMessage, DecodeError> {
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
