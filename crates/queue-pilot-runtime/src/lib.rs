//! # Queue-Pilot Runtime
//!
//! Provider-neutral queue runtime backing the Queue-Pilot demonstration,
//! with AWS SQS and in-memory implementations.
//!
//! This library provides:
//! - Provider-agnostic queue creation, send, receive, and depth queries
//! - In-band status reporting for backend rejections
//! - An in-memory provider for tests and local runs
//!
//! ## Module Organization
//!
//! - [`error`] - Error types for all queue operations
//! - [`message`] - Queue identity and call reply types
//! - [`provider`] - Provider types and configuration
//! - [`client`] - The service trait and factory
//! - [`providers`] - Concrete provider implementations

// Module declarations
pub mod client;
pub mod error;
pub mod message;
pub mod provider;
pub mod providers;

// Re-export commonly used types at crate root for convenience
pub use client::{QueueService, QueueServiceFactory};
pub use error::{ConfigurationError, ServiceError, ValidationError};
pub use message::{QueueHandle, QueueName, ReceiveReply, ReceivedPayload, SendReceipt};
pub use provider::{AwsSqsConfig, InMemoryConfig, ProviderConfig, ProviderType};
pub use providers::{InMemoryQueueService, SqsQueueService};
