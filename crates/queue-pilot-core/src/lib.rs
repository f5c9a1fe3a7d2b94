//! # Queue-Pilot Core
//!
//! Message lifecycle demonstration built on the Queue-Pilot runtime: create a
//! queue, produce a numbered batch of JSON messages, then drain the queue by
//! its reported depth.
//!
//! ## Architecture
//!
//! The demo logic depends only on the `QueueService` trait from the runtime
//! crate. Provider selection happens at the edge, so every phase runs the
//! same way against AWS SQS and the in-memory provider.
//!
//! ## Usage
//!
//! ```rust
//! use queue_pilot_core::{decode, encode, DemoMessage};
//!
//! let message = DemoMessage::new(1, "I am message #:1");
//! let payload = encode(&message).unwrap();
//! assert_eq!(decode(&payload).unwrap(), message);
//! ```

// Module declarations
pub mod codec;
pub mod consumer;
pub mod message;
pub mod producer;
pub mod workflow;

// Re-export commonly used types at crate root for convenience
pub use codec::{decode, encode, DecodeError, EncodeError};
pub use consumer::{drain_attempts, drain_by_depth, DrainReport, ReceiveOutcome};
pub use message::DemoMessage;
pub use producer::{enqueue_all, produce_batch, EnqueueError, SendOutcome};
pub use workflow::{run_demo, DemoConfig, DemoError, DemoReport, DemoResult};
