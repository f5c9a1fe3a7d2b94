//! End-to-end demonstration workflow.
//!
//! The workflow sequences the three demo phases against one queue service:
//! create the queue, produce and send the numbered batch, then drain the
//! queue by its reported depth.

use crate::consumer::{self, DrainReport};
use crate::producer::{self, EnqueueError, SendOutcome};
use queue_pilot_runtime::{QueueHandle, QueueName, QueueService, ServiceError, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Settings for one demonstration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Name of the queue to create and use
    pub queue_name: String,
    /// Number of messages to produce
    pub message_count: u32,
    /// Visibility timeout applied at queue creation
    pub visibility_timeout_seconds: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            queue_name: "DemoQueue".to_string(),
            message_count: 100,
            visibility_timeout_seconds: 10,
        }
    }
}

/// Errors that end a demonstration run.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Invalid demo configuration: {0}")]
    Configuration(#[from] ValidationError),

    #[error("Producing failed: {0}")]
    Enqueue(#[from] EnqueueError),

    #[error("Queue service failure: {0}")]
    Service(#[from] ServiceError),
}

/// Standard result type for demonstration runs.
pub type DemoResult<T> = Result<T, DemoError>;

/// Record of a completed demonstration run.
#[derive(Debug)]
pub struct DemoReport {
    /// The queue the run was performed against
    pub queue: QueueHandle,
    /// One outcome per produced message, in batch order
    pub send_outcomes: Vec<SendOutcome>,
    /// Record of the consume phase
    pub drain: DrainReport,
}

/// Run the full create, produce, consume sequence against the given service.
pub async fn run_demo(
    service: &dyn QueueService,
    config: &DemoConfig,
) -> DemoResult<DemoReport> {
    let queue_name = QueueName::new(config.queue_name.clone())?;

    info!(
        queue = %queue_name,
        visibility_timeout = config.visibility_timeout_seconds,
        "creating queue"
    );
    let queue = service
        .create_queue(&queue_name, config.visibility_timeout_seconds)
        .await?;

    info!(count = config.message_count, "producing messages");
    let messages = producer::produce_batch(config.message_count);
    let send_outcomes = producer::enqueue_all(service, &queue, &messages).await?;

    info!("consuming messages");
    let drain = consumer::drain_by_depth(service, &queue).await?;

    info!(
        sent = send_outcomes.iter().filter(|outcome| outcome.is_success()).count(),
        delivered = drain.delivered_count(),
        "demo run complete"
    );

    Ok(DemoReport {
        queue,
        send_outcomes,
        drain,
    })
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
