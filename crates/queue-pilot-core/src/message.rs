//! The demo message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message carried through the demonstration queue.
///
/// Instances are immutable once constructed. The creation timestamp is fixed
/// when the message is built and travels with it through the codec, so a
/// decoded message compares equal to the one that was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoMessage {
    id: u32,
    description: String,
    created_on: DateTime<Utc>,
}

impl DemoMessage {
    /// Create a message stamped with the current time.
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            created_on: Utc::now(),
        }
    }

    /// Reassemble a message from stored fields.
    pub fn from_parts(
        id: u32,
        description: impl Into<String>,
        created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            created_on,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
