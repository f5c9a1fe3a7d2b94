//! Queue service abstraction and factory.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::message::{QueueHandle, QueueName, ReceiveReply, SendReceipt};
use crate::provider::{InMemoryConfig, ProviderConfig, ProviderType};
use crate::providers::{InMemoryQueueService, SqsQueueService};

// ============================================================================
// Queue Service Trait
// ============================================================================

/// Provider-neutral queue operations.
///
/// Implementations talk to one backing service. All operations surface
/// transport and backend failures as [`ServiceError`]; rejections the backend
/// reports in-band stay in the reply status codes.
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Create a queue, or return the existing one with the same name.
    ///
    /// The returned handle carries the queue URL and the visibility timeout
    /// the queue was configured with.
    async fn create_queue(
        &self,
        name: &QueueName,
        visibility_timeout_seconds: u32,
    ) -> Result<QueueHandle, ServiceError>;

    /// Send a single message body to the queue.
    async fn send(
        &self,
        queue: &QueueHandle,
        body: String,
    ) -> Result<SendReceipt, ServiceError>;

    /// Receive at most one message from the queue.
    ///
    /// An empty queue is a successful reply with no message.
    async fn receive(&self, queue: &QueueHandle) -> Result<ReceiveReply, ServiceError>;

    /// Report the approximate number of messages currently on the queue.
    async fn approximate_message_count(
        &self,
        queue: &QueueHandle,
    ) -> Result<u64, ServiceError>;

    /// The provider backing this service.
    fn provider_type(&self) -> ProviderType;
}

// ============================================================================
// Queue Service Factory
// ============================================================================

/// Factory for creating queue service instances from configuration.
pub struct QueueServiceFactory;

impl QueueServiceFactory {
    /// Create a queue service for the given provider configuration.
    pub async fn create(
        config: ProviderConfig,
    ) -> Result<Box<dyn QueueService>, ServiceError> {
        match config {
            ProviderConfig::AwsSqs(aws_config) => {
                let service = SqsQueueService::connect(aws_config).await?;
                Ok(Box::new(service))
            }
            ProviderConfig::InMemory(memory_config) => {
                Ok(Box::new(InMemoryQueueService::new(memory_config)))
            }
        }
    }

    /// Create an in-memory queue service with default settings.
    pub fn create_test_service() -> Box<dyn QueueService> {
        Box::new(InMemoryQueueService::new(InMemoryConfig::default()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
