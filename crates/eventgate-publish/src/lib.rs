//! Validate-then-dispatch event publishing.
//!
//! [`EventPublisher`] is the only orchestration in this workspace: look up
//! the schema for a topic, validate the outgoing message against it, and
//! hand the decoded payload to the broker. Two calling conventions share
//! that one validation step — [`EventPublisher::publish`] fails on an
//! invalid message, [`EventPublisher::safe_publish`] reports the
//! validation outcome as a value and never errors on bad input.

pub mod broker;
pub mod error;
pub mod publisher;
pub mod result;

pub use broker::{BrokerClient, BrokerError};
pub use error::{PublishError, Result};
pub use publisher::EventPublisher;
pub use result::PublishResult;
