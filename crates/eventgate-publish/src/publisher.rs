use std::sync::Arc;

use eventgate_schema::SchemaRegistry;
use serde::Serialize;
use serde_json::Value;

use crate::broker::BrokerClient;
use crate::error::{PublishError, Result};
use crate::result::PublishResult;

/// Typed publishing façade over a broker capability.
///
/// Holds an immutable `{registry, broker}` pair fixed at construction;
/// every call is stateless and independent, so one publisher can serve
/// any number of concurrent publish calls. The registry decides which
/// topics exist, the schema decides whether a message may leave, and the
/// broker does everything after that.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use eventgate_publish::EventPublisher;
/// use eventgate_schema::SchemaRegistry;
/// # use eventgate_publish::{BrokerClient, BrokerError};
/// # use async_trait::async_trait;
/// # struct Amqp;
/// # #[async_trait]
/// # impl BrokerClient for Amqp {
/// #     async fn send(&self, _: &str, _: &serde_json::Value) -> Result<bool, BrokerError> { Ok(true) }
/// #     async fn close(&self) -> Result<(), BrokerError> { Ok(()) }
/// # }
///
/// # async fn run(broker: Amqp) -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = SchemaRegistry::load_embedded(&[(
///     "calendar.class.checkin",
///     r#"{"type":"object","required":["id"],"properties":{"id":{"type":"string"}}}"#,
/// )])?;
///
/// let publisher = EventPublisher::new(Arc::new(outcome.registry), broker);
/// publisher
///     .publish("calendar.class.checkin", &serde_json::json!({"id": "chkin_123"}))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct EventPublisher<B: BrokerClient> {
    registry: Arc<SchemaRegistry>,
    broker: B,
}

impl<B: BrokerClient> EventPublisher<B> {
    /// Build a publisher from a schema registry and a broker capability.
    pub fn new(registry: Arc<SchemaRegistry>, broker: B) -> Self {
        Self { registry, broker }
    }

    /// Validate a message against its topic's schema, then dispatch it.
    ///
    /// The decoded value, not the raw input, is what goes to the broker.
    /// Fails with [`PublishError::Validation`] on a non-conforming
    /// message (no dispatch occurs) and with
    /// [`PublishError::SchemaNotFound`] when the topic is absent from the
    /// registry. Broker failures propagate unmodified as
    /// [`PublishError::BrokerDispatch`].
    pub async fn publish<T: Serialize + ?Sized>(&self, topic: &str, message: &T) -> Result<()> {
        let decoded = self.decode(topic, message)??;
        self.dispatch(topic, &decoded).await
    }

    /// Validate and dispatch, reporting validation failure as a value.
    ///
    /// A non-conforming message yields `Ok(PublishResult::Rejected(..))`
    /// with every violation enumerated, and the broker is never invoked.
    /// A missing schema or a broker failure still errors — validation is
    /// the expected failure here, transport failure is not.
    pub async fn safe_publish<T: Serialize + ?Sized>(
        &self,
        topic: &str,
        message: &T,
    ) -> Result<PublishResult> {
        let decoded = match self.decode(topic, message)? {
            Ok(decoded) => decoded,
            Err(error) => return Ok(PublishResult::Rejected(error)),
        };

        self.dispatch(topic, &decoded).await?;
        Ok(PublishResult::Published)
    }

    /// The registry this publisher validates against.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The broker capability held by this publisher.
    pub fn broker(&self) -> &B {
        &self.broker
    }

    /// Consume the publisher and hand the broker back to its owner, e.g.
    /// for shutdown orchestration. The publisher never closes it.
    pub fn into_broker(self) -> B {
        self.broker
    }

    /// Shared lookup + parse step for both calling conventions.
    ///
    /// The outer error is fatal (unknown topic, unserializable message);
    /// the inner one is the recoverable validation outcome.
    fn decode<T: Serialize + ?Sized>(
        &self,
        topic: &str,
        message: &T,
    ) -> Result<std::result::Result<Value, eventgate_schema::ValidationError>> {
        let schema = self
            .registry
            .schema(topic)
            .ok_or_else(|| PublishError::SchemaNotFound {
                topic: topic.to_string(),
            })?;

        let message = serde_json::to_value(message)?;
        Ok(schema.parse(&message))
    }

    async fn dispatch(&self, topic: &str, decoded: &Value) -> Result<()> {
        let acknowledged = self
            .broker
            .send(topic, decoded)
            .await
            .map_err(PublishError::BrokerDispatch)?;

        if acknowledged {
            tracing::debug!(topic, "event dispatched");
        } else {
            // Dispatch still counts as success; see the result contract.
            tracing::warn!(topic, "broker did not acknowledge dispatch");
        }

        Ok(())
    }
}
