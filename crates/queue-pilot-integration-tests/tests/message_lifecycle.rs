//! Integration tests for message transit through the queue service
//!
//! These tests verify:
//! - Codec round-trips across a real send and receive
//! - The wire shape of encoded payloads
//! - Batch ordering and depth reporting
//! - Queue isolation within one service

mod common;

use chrono::DateTime;
use common::unique_queue_name;
use queue_pilot_core::{
    decode, drain_attempts, encode, enqueue_all, produce_batch, DemoMessage, ReceiveOutcome,
};
use queue_pilot_runtime::QueueServiceFactory;

/// Verify that an encoded message survives queue transit unchanged
#[tokio::test]
async fn test_encoded_message_survives_queue_transit() {
    // Arrange
    let service = QueueServiceFactory::create_test_service();
    let queue = service
        .create_queue(&unique_queue_name("transit"), 10)
        .await
        .expect("queue should be created");
    let message = DemoMessage::new(7, "I am message #:7");

    // Act: Send the encoded message and receive it back
    let receipt = service
        .send(&queue, encode(&message).expect("message should encode"))
        .await
        .expect("send should succeed");
    assert!(receipt.is_success());

    let reply = service.receive(&queue).await.expect("receive should succeed");

    // Assert: The decoded message compares equal, timestamp included
    assert!(reply.is_success());
    let payload = reply.message.expect("a message should be delivered");
    let decoded = decode(&payload.body).expect("payload should decode");
    assert_eq!(decoded, message);
    assert_eq!(decoded.created_on(), message.created_on());
}

/// Verify that the encoded payload carries the documented fields
#[tokio::test]
async fn test_payload_shape_matches_wire_contract() {
    let message = DemoMessage::new(3, "I am message #:3");
    let payload = encode(&message).expect("message should encode");

    let value: serde_json::Value =
        serde_json::from_str(&payload).expect("payload should be valid JSON");

    assert_eq!(value["id"], 3);
    assert_eq!(value["description"], "I am message #:3");

    let created_on = value["created_on"]
        .as_str()
        .expect("created_on should be a string");
    let parsed = DateTime::parse_from_rfc3339(created_on).expect("created_on should be RFC 3339");
    assert_eq!(parsed, message.created_on());
}

/// Verify that a produced batch drains in first-in first-out order
#[tokio::test]
async fn test_fifo_order_preserved() {
    // Arrange
    let service = QueueServiceFactory::create_test_service();
    let queue = service
        .create_queue(&unique_queue_name("fifo"), 10)
        .await
        .expect("queue should be created");
    let messages = produce_batch(5);

    // Act
    let outcomes = enqueue_all(service.as_ref(), &queue, &messages)
        .await
        .expect("batch should enqueue");
    assert!(outcomes.iter().all(|outcome| outcome.is_success()));

    let received = drain_attempts(service.as_ref(), &queue, 5)
        .await
        .expect("drain should succeed");

    // Assert
    let ids: Vec<u32> = received
        .iter()
        .filter_map(|outcome| outcome.message())
        .map(|message| message.id())
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

/// Verify that the reported depth tracks sends and receives
#[tokio::test]
async fn test_depth_tracks_queue_activity() {
    let service = QueueServiceFactory::create_test_service();
    let queue = service
        .create_queue(&unique_queue_name("depth"), 10)
        .await
        .expect("queue should be created");

    for message in produce_batch(3) {
        service
            .send(&queue, encode(&message).expect("message should encode"))
            .await
            .expect("send should succeed");
    }
    assert_eq!(
        service.approximate_message_count(&queue).await.unwrap(),
        3
    );

    service.receive(&queue).await.expect("receive should succeed");
    assert_eq!(
        service.approximate_message_count(&queue).await.unwrap(),
        2
    );
}

/// Verify that queues on the same service do not share messages
#[tokio::test]
async fn test_queues_are_isolated() {
    let service = QueueServiceFactory::create_test_service();
    let first = service
        .create_queue(&unique_queue_name("first"), 10)
        .await
        .expect("queue should be created");
    let second = service
        .create_queue(&unique_queue_name("second"), 10)
        .await
        .expect("queue should be created");

    let message = DemoMessage::new(1, "I am message #:1");
    service
        .send(&first, encode(&message).expect("message should encode"))
        .await
        .expect("send should succeed");

    assert_eq!(
        service.approximate_message_count(&second).await.unwrap(),
        0
    );
    let reply = service.receive(&second).await.expect("receive should succeed");
    assert!(reply.is_success());
    assert!(reply.message.is_none());
}

/// Verify that receive attempts beyond the queue depth report empty
#[tokio::test]
async fn test_drain_attempts_beyond_depth_report_empty() {
    let service = QueueServiceFactory::create_test_service();
    let queue = service
        .create_queue(&unique_queue_name("drain"), 10)
        .await
        .expect("queue should be created");

    let messages = produce_batch(2);
    enqueue_all(service.as_ref(), &queue, &messages)
        .await
        .expect("batch should enqueue");

    let outcomes = drain_attempts(service.as_ref(), &queue, 4)
        .await
        .expect("drain should succeed");

    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes
            .iter()
            .filter(|outcome| outcome.message().is_some())
            .count(),
        2
    );
    assert!(matches!(outcomes[2], ReceiveOutcome::Empty));
    assert!(matches!(outcomes[3], ReceiveOutcome::Empty));
}
