//! Common test utilities for the Queue-Pilot integration tests
//!
//! This module provides:
//! - Unique queue names so tests stay independent
//! - A flaky queue service for exercising in-band rejection handling

use async_trait::async_trait;
use queue_pilot_runtime::{
    InMemoryQueueService, ProviderType, QueueHandle, QueueName, QueueService, ReceiveReply,
    SendReceipt, ServiceError,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build a queue name no other test will collide with.
#[allow(dead_code)]
pub fn unique_queue_name(prefix: &str) -> QueueName {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    QueueName::new(format!("{prefix}-{suffix}")).expect("generated queue name should be valid")
}

// ============================================================================
// Flaky Queue Service
// ============================================================================

/// In-memory queue service that rejects every second send in-band.
///
/// The rejection is reported through the reply status code, the way a real
/// backend refuses a message without failing the connection.
#[allow(dead_code)]
pub struct FlakyQueueService {
    inner: InMemoryQueueService,
    send_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FlakyQueueService {
    pub fn new() -> Self {
        Self {
            inner: InMemoryQueueService::default(),
            send_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QueueService for FlakyQueueService {
    async fn create_queue(
        &self,
        name: &QueueName,
        visibility_timeout_seconds: u32,
    ) -> Result<QueueHandle, ServiceError> {
        self.inner.create_queue(name, visibility_timeout_seconds).await
    }

    async fn send(&self, queue: &QueueHandle, body: String) -> Result<SendReceipt, ServiceError> {
        let call = self.send_calls.fetch_add(1, Ordering::SeqCst);
        if call % 2 == 1 {
            return Ok(SendReceipt { status_code: 500 });
        }
        self.inner.send(queue, body).await
    }

    async fn receive(&self, queue: &QueueHandle) -> Result<ReceiveReply, ServiceError> {
        self.inner.receive(queue).await
    }

    async fn approximate_message_count(&self, queue: &QueueHandle) -> Result<u64, ServiceError> {
        self.inner.approximate_message_count(queue).await
    }

    fn provider_type(&self) -> ProviderType {
        self.inner.provider_type()
    }
}
