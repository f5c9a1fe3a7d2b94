//! Queue service data types: queue identity, handles, and call replies.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Queue Identity
// ============================================================================

/// Validated queue name with length and character restrictions
///
/// Follows the SQS naming rules: 1-80 characters, ASCII alphanumeric plus
/// hyphens and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueName(String);

impl QueueName {
    /// Create new queue name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() || name.len() > 80 {
            return Err(ValidationError::OutOfRange {
                field: "queue_name".to_string(),
                message: "must be 1-80 characters".to_string(),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidFormat {
                field: "queue_name".to_string(),
                message: "only ASCII alphanumeric, hyphens, and underscores allowed".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get queue name as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueueName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueueName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Handle to a provisioned queue.
///
/// Returned by queue creation and passed read-only into every subsequent
/// service call. The URL is an opaque identifier owned by the provider; the
/// visibility timeout records the configuration the queue was created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueHandle {
    url: String,
    visibility_timeout_seconds: u32,
}

impl QueueHandle {
    /// Create new handle for a provisioned queue
    pub fn new(url: impl Into<String>, visibility_timeout_seconds: u32) -> Self {
        Self {
            url: url.into(),
            visibility_timeout_seconds,
        }
    }

    /// Get the provider-assigned queue URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the visibility timeout the queue was created with
    pub fn visibility_timeout_seconds(&self) -> u32 {
        self.visibility_timeout_seconds
    }
}

impl std::fmt::Display for QueueHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

// ============================================================================
// Call Replies
// ============================================================================

/// Reply to a send call: the HTTP-style status the service answered with.
///
/// A non-success status is a per-message rejection, not an error; transport
/// failures surface as [`crate::ServiceError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub status_code: u16,
}

impl SendReceipt {
    /// Check whether the service accepted the message
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Reply to a receive call.
///
/// `message` is `None` when the service answered but had no message
/// available, or when it rejected the call with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveReply {
    pub status_code: u16,
    pub message: Option<ReceivedPayload>,
}

impl ReceiveReply {
    /// Check whether the service answered the call successfully
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// A raw payload handed back by the queue service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedPayload {
    /// Service-assigned message identifier
    pub id: String,
    /// Message body exactly as enqueued
    pub body: String,
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
