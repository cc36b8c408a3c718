use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// Opaque failure surfaced by a broker client.
///
/// Propagated to the caller unmodified; this layer applies no retry,
/// backoff, or transient/permanent distinction.
pub type BrokerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Minimal capability a message broker must expose to the publisher.
///
/// Transport, delivery guarantees, retries, and on-the-wire ordering all
/// belong to the implementation behind this trait. The publisher holds a
/// broker but does not own its lifecycle: it never calls `close` itself.
#[async_trait]
pub trait BrokerClient: Send + Sync {
    /// Dispatch a validated message on a topic.
    ///
    /// Returns the broker's own acknowledgment flag. May suspend on I/O.
    async fn send(&self, topic: &str, message: &Value) -> std::result::Result<bool, BrokerError>;

    /// Release the underlying connection for graceful shutdown.
    async fn close(&self) -> std::result::Result<(), BrokerError>;
}

#[async_trait]
impl<T: BrokerClient + ?Sized> BrokerClient for Arc<T> {
    async fn send(&self, topic: &str, message: &Value) -> std::result::Result<bool, BrokerError> {
        (**self).send(topic, message).await
    }

    async fn close(&self) -> std::result::Result<(), BrokerError> {
        (**self).close().await
    }
}
