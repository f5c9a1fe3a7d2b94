//! Tests for queue service data types.

use super::*;

#[test]
fn test_queue_name_validation() {
    // Valid names
    assert!(QueueName::new("DemoQueue").is_ok());
    assert!(QueueName::new("demo-queue_123").is_ok());
    assert!(QueueName::new("a").is_ok());
    assert!(QueueName::new("q".repeat(80)).is_ok());

    // Invalid names
    assert!(QueueName::new("").is_err());
    assert!(QueueName::new("q".repeat(81)).is_err());
    assert!(QueueName::new("special@chars").is_err());
    assert!(QueueName::new("with space").is_err());
    assert!(QueueName::new("dotted.name").is_err());
}

#[test]
fn test_queue_name_round_trips_as_string() {
    let name: QueueName = "DemoQueue".parse().expect("valid name");
    assert_eq!(name.as_str(), "DemoQueue");
    assert_eq!(name.to_string(), "DemoQueue");
}

#[test]
fn test_queue_handle_accessors() {
    let handle = QueueHandle::new("memory://DemoQueue", 10);
    assert_eq!(handle.url(), "memory://DemoQueue");
    assert_eq!(handle.visibility_timeout_seconds(), 10);
    assert_eq!(handle.to_string(), "memory://DemoQueue");
}

#[test]
fn test_send_receipt_success_range() {
    assert!(SendReceipt { status_code: 200 }.is_success());
    assert!(SendReceipt { status_code: 299 }.is_success());
    assert!(!SendReceipt { status_code: 199 }.is_success());
    assert!(!SendReceipt { status_code: 300 }.is_success());
    assert!(!SendReceipt { status_code: 400 }.is_success());
    assert!(!SendReceipt { status_code: 500 }.is_success());
}

#[test]
fn test_receive_reply_success_is_independent_of_payload() {
    let empty = ReceiveReply {
        status_code: 200,
        message: None,
    };
    assert!(empty.is_success());

    let rejected = ReceiveReply {
        status_code: 500,
        message: None,
    };
    assert!(!rejected.is_success());

    let delivered = ReceiveReply {
        status_code: 200,
        message: Some(ReceivedPayload {
            id: "m-1".to_string(),
            body: "{}".to_string(),
        }),
    };
    assert!(delivered.is_success());
    assert_eq!(delivered.message.map(|m| m.id), Some("m-1".to_string()));
}
