//! In-memory queue provider implementation for testing and development.
//!
//! This module provides a fully functional in-memory queue implementation that:
//! - Stores queues in process memory behind a single lock
//! - Holds messages in FIFO order and removes them on receive
//! - Enforces the same maximum message size as the hosted provider
//!
//! This provider is intended for:
//! - Unit testing of queue consumers
//! - Demonstration runs without cloud credentials

use crate::client::QueueService;
use crate::error::ServiceError;
use crate::message::{QueueHandle, QueueName, ReceivedPayload, ReceiveReply, SendReceipt};
use crate::provider::{InMemoryConfig, ProviderType};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use uuid::Uuid;

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;

// ============================================================================
// Internal Storage Structures
// ============================================================================

/// Thread-safe storage for all queues, keyed by queue URL.
struct QueueStorage {
    queues: HashMap<String, InMemoryQueue>,
    config: InMemoryConfig,
}

impl QueueStorage {
    fn new(config: InMemoryConfig) -> Self {
        Self {
            queues: HashMap::new(),
            config,
        }
    }

    fn queue(&self, url: &str) -> Result<&InMemoryQueue, ServiceError> {
        self.queues.get(url).ok_or_else(|| ServiceError::QueueNotFound {
            queue: url.to_string(),
        })
    }

    fn queue_mut(&mut self, url: &str) -> Result<&mut InMemoryQueue, ServiceError> {
        self.queues
            .get_mut(url)
            .ok_or_else(|| ServiceError::QueueNotFound {
                queue: url.to_string(),
            })
    }
}

/// Internal state for a single queue.
struct InMemoryQueue {
    visibility_timeout_seconds: u32,
    /// Pending messages in FIFO order
    messages: VecDeque<StoredMessage>,
}

impl InMemoryQueue {
    fn new(visibility_timeout_seconds: u32) -> Self {
        Self {
            visibility_timeout_seconds,
            messages: VecDeque::new(),
        }
    }
}

/// A message stored in a queue.
struct StoredMessage {
    id: String,
    body: String,
}

// ============================================================================
// InMemoryQueueService
// ============================================================================

/// In-memory queue service implementation.
pub struct InMemoryQueueService {
    storage: Arc<RwLock<QueueStorage>>,
}

impl InMemoryQueueService {
    /// Create a new in-memory service with the given configuration.
    pub fn new(config: InMemoryConfig) -> Self {
        Self {
            storage: Arc::new(RwLock::new(QueueStorage::new(config))),
        }
    }

    // Queue state stays valid even when a holder panicked mid-write.
    fn storage_read(&self) -> RwLockReadGuard<'_, QueueStorage> {
        match self.storage.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn storage_write(&self) -> RwLockWriteGuard<'_, QueueStorage> {
        match self.storage.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for InMemoryQueueService {
    fn default() -> Self {
        Self::new(InMemoryConfig::default())
    }
}

#[async_trait]
impl QueueService for InMemoryQueueService {
    async fn create_queue(
        &self,
        name: &QueueName,
        visibility_timeout_seconds: u32,
    ) -> Result<QueueHandle, ServiceError> {
        let url = format!("memory://{}", name.as_str());
        let mut storage = self.storage_write();

        let queue = storage
            .queues
            .entry(url.clone())
            .or_insert_with(|| InMemoryQueue::new(visibility_timeout_seconds));

        // Creating an existing queue returns it unchanged.
        let handle = QueueHandle::new(url, queue.visibility_timeout_seconds);
        debug!(queue = %name, url = %handle.url(), "in-memory queue ready");
        Ok(handle)
    }

    async fn send(
        &self,
        queue: &QueueHandle,
        body: String,
    ) -> Result<SendReceipt, ServiceError> {
        let mut storage = self.storage_write();
        let max_size = storage.config.max_message_size_bytes;
        let target = storage.queue_mut(queue.url())?;

        if body.len() > max_size {
            debug!(url = %queue.url(), size = body.len(), "message rejected, too large");
            return Ok(SendReceipt { status_code: 400 });
        }

        target.messages.push_back(StoredMessage {
            id: Uuid::new_v4().to_string(),
            body,
        });
        Ok(SendReceipt { status_code: 200 })
    }

    async fn receive(&self, queue: &QueueHandle) -> Result<ReceiveReply, ServiceError> {
        let mut storage = self.storage_write();
        let target = storage.queue_mut(queue.url())?;

        let message = target.messages.pop_front().map(|stored| ReceivedPayload {
            id: stored.id,
            body: stored.body,
        });

        Ok(ReceiveReply {
            status_code: 200,
            message,
        })
    }

    async fn approximate_message_count(
        &self,
        queue: &QueueHandle,
    ) -> Result<u64, ServiceError> {
        let storage = self.storage_read();
        let target = storage.queue(queue.url())?;
        Ok(target.messages.len() as u64)
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::InMemory
    }
}
