//! Publish example — validates messages against topic schemas and hands
//! them to a stand-in broker that prints what it would put on the wire.
//!
//! Run with:
//!   cargo run --example publish-events

use std::sync::Arc;

use async_trait::async_trait;
use eventgate::{BrokerClient, BrokerError, EventPublisher, SchemaRegistry};
use serde_json::{json, Value};

struct StderrBroker;

#[async_trait]
impl BrokerClient for StderrBroker {
    async fn send(&self, topic: &str, message: &Value) -> Result<bool, BrokerError> {
        eprintln!("[broker] topic={topic} payload={message}");
        Ok(true)
    }

    async fn close(&self) -> Result<(), BrokerError> {
        eprintln!("[broker] closed");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let outcome = SchemaRegistry::load_embedded(&[
        (
            "calendar.class.checkin",
            r#"{
                "type": "object",
                "properties": {
                    "id": { "type": "string" },
                    "memberId": { "type": "string" },
                    "checkinAt": { "type": "string" }
                },
                "required": ["id", "memberId", "checkinAt"]
            }"#,
        ),
        // Malformed key: filtered at load time and reported below.
        ("checkin", r#"{"type": "object"}"#),
    ])?;

    for key in &outcome.rejected {
        eprintln!("[registry] dropped malformed topic key: {key}");
    }

    let publisher = EventPublisher::new(Arc::new(outcome.registry), StderrBroker);

    publisher
        .publish(
            "calendar.class.checkin",
            &json!({
                "id": "chkin_123",
                "memberId": "mbr_123",
                "checkinAt": "2021-01-01T00:00:00.000Z"
            }),
        )
        .await?;

    let result = publisher
        .safe_publish(
            "calendar.class.checkin",
            &json!({ "id": 1, "memberId": "mbr_123" }),
        )
        .await?;

    if let Some(rejection) = result.rejection() {
        for violation in rejection.violations() {
            eprintln!("[publisher] rejected: {}: {}", violation.path, violation.reason);
        }
    }

    // The publisher never closes the broker; its owner does.
    publisher.into_broker().close().await?;
    Ok(())
}
