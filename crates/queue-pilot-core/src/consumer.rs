//! Depth-bounded queue consumption.
//!
//! The consumer takes one snapshot of the queue depth and makes exactly that
//! many receive calls. Messages arriving after the snapshot wait for a later
//! run; attempts that come back empty still count against the budget.

use crate::codec::{self, DecodeError};
use crate::message::DemoMessage;
use queue_pilot_runtime::{QueueHandle, QueueService, ServiceError};
use tracing::{info, warn};

/// Outcome of one receive attempt.
#[derive(Debug)]
pub enum ReceiveOutcome {
    /// A payload arrived and decoded into a message.
    Delivered {
        /// Id the queue service assigned to the stored message
        service_message_id: String,
        message: DemoMessage,
    },
    /// The call succeeded but the queue had nothing to hand out.
    Empty,
    /// The backend rejected the call in-band.
    Rejected { status_code: u16 },
    /// A payload arrived but could not be read back as a message.
    Undecodable {
        service_message_id: String,
        source: DecodeError,
    },
}

impl ReceiveOutcome {
    /// The decoded message, when this attempt delivered one.
    pub fn message(&self) -> Option<&DemoMessage> {
        match self {
            ReceiveOutcome::Delivered { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Record of draining a queue by its reported depth.
#[derive(Debug)]
pub struct DrainReport {
    /// Queue depth reported before the attempts started
    pub reported_depth: u64,
    /// One outcome per receive attempt, in attempt order
    pub outcomes: Vec<ReceiveOutcome>,
}

impl DrainReport {
    /// Messages that arrived and decoded, in arrival order.
    pub fn delivered(&self) -> impl Iterator<Item = &DemoMessage> {
        self.outcomes.iter().filter_map(ReceiveOutcome::message)
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered().count()
    }

    pub fn attempt_count(&self) -> usize {
        self.outcomes.len()
    }
}

/// Make exactly `attempts` receive calls against the queue.
///
/// The attempt budget is fixed up front. Empty replies and in-band rejections
/// consume an attempt without shortening the loop. A transport failure aborts
/// the remaining attempts.
pub async fn drain_attempts(
    service: &dyn QueueService,
    queue: &QueueHandle,
    attempts: u64,
) -> Result<Vec<ReceiveOutcome>, ServiceError> {
    let mut outcomes = Vec::new();

    for _ in 0..attempts {
        let reply = service.receive(queue).await?;

        let outcome = if !reply.is_success() {
            warn!(status = reply.status_code, "receive rejected by queue");
            ReceiveOutcome::Rejected {
                status_code: reply.status_code,
            }
        } else {
            match reply.message {
                Some(payload) => match codec::decode(&payload.body) {
                    Ok(message) => {
                        info!(
                            message_id = message.id(),
                            service_message_id = %payload.id,
                            "message received"
                        );
                        ReceiveOutcome::Delivered {
                            service_message_id: payload.id,
                            message,
                        }
                    }
                    Err(source) => {
                        warn!(
                            service_message_id = %payload.id,
                            error = %source,
                            "payload failed to decode"
                        );
                        ReceiveOutcome::Undecodable {
                            service_message_id: payload.id,
                            source,
                        }
                    }
                },
                None => ReceiveOutcome::Empty,
            }
        };

        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Drain the queue using its reported depth as the attempt budget.
pub async fn drain_by_depth(
    service: &dyn QueueService,
    queue: &QueueHandle,
) -> Result<DrainReport, ServiceError> {
    let reported_depth = service.approximate_message_count(queue).await?;
    info!(depth = reported_depth, "draining queue by reported depth");

    let outcomes = drain_attempts(service, queue, reported_depth).await?;

    Ok(DrainReport {
        reported_depth,
        outcomes,
    })
}

#[cfg(test)]
#[path = "consumer_tests.rs"]
mod tests;
