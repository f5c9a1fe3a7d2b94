//! Batch production of demo messages.

use crate::codec::{self, EncodeError};
use crate::message::DemoMessage;
use queue_pilot_runtime::{QueueHandle, QueueService, ServiceError};
use thiserror::Error;
use tracing::{info, warn};

/// Outcome of one send attempt, in batch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    /// Id of the message that was offered
    pub message_id: u32,
    /// HTTP status the queue service reported for the send
    pub status_code: u16,
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Error raised when a batch cannot be fully offered to the queue.
#[derive(Debug, Error)]
pub enum EnqueueError {
    #[error("Failed to encode message {message_id}: {source}")]
    Encode {
        message_id: u32,
        #[source]
        source: EncodeError,
    },

    #[error("Queue service failure: {0}")]
    Service(#[from] ServiceError),
}

/// Build the demonstration batch of sequentially numbered messages.
///
/// Ids run from 0 through `count - 1`. Each message is stamped at creation
/// time.
pub fn produce_batch(count: u32) -> Vec<DemoMessage> {
    (0..count)
        .map(|id| DemoMessage::new(id, format!("I am message #:{id}")))
        .collect()
}

/// Offer every message to the queue in batch order, one send per message.
///
/// Rejections the backend reports in-band are recorded in the outcome for
/// that message and do not stop the batch. Encode failures and transport
/// failures abort the remaining sends.
pub async fn enqueue_all(
    service: &dyn QueueService,
    queue: &QueueHandle,
    messages: &[DemoMessage],
) -> Result<Vec<SendOutcome>, EnqueueError> {
    let mut outcomes = Vec::with_capacity(messages.len());

    for message in messages {
        let payload = codec::encode(message).map_err(|source| EnqueueError::Encode {
            message_id: message.id(),
            source,
        })?;

        let receipt = service.send(queue, payload).await?;
        let outcome = SendOutcome {
            message_id: message.id(),
            status_code: receipt.status_code,
        };

        if outcome.is_success() {
            info!(
                message_id = outcome.message_id,
                status = outcome.status_code,
                "message sent"
            );
        } else {
            warn!(
                message_id = outcome.message_id,
                status = outcome.status_code,
                "message rejected by queue"
            );
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

#[cfg(test)]
#[path = "producer_tests.rs"]
mod tests;
