//! Typed event publishing over a message broker.
//!
//! eventgate validates outgoing messages against per-topic schemas and
//! forwards the decoded payload to a broker capability. Topics follow
//! the `service.domain.event` shape; the broker is consumed only through
//! its `send`/`close` interface and owns everything on the wire.
//!
//! # Crate Structure
//!
//! - [`schema`] — Topic shape filter, schema registry, structured
//!   validation errors
//! - [`publish`] — `EventPublisher` with its two calling conventions and
//!   the `BrokerClient` seam

/// Re-export schema registry types.
pub mod schema {
    pub use eventgate_schema::*;
}

/// Re-export publisher types.
pub mod publish {
    pub use eventgate_publish::*;
}

pub use eventgate_publish::{BrokerClient, BrokerError, EventPublisher, PublishError, PublishResult};
pub use eventgate_schema::{LoadOutcome, SchemaRegistry, ValidationError, Violation};
