//! Topic-keyed schema registry for event publishing.
//!
//! Maps event topic names of the shape `service.domain.event` to compiled
//! JSON Schema validators. Malformed topic names are filtered out at load
//! time and reported, so only well-formed topics are ever visible to the
//! publishing layer.

pub mod config;
pub mod error;
pub mod registry;
pub mod schema;
pub mod topic;

pub use config::RegistryConfig;
pub use error::{Result, SchemaError, ValidationError, Violation};
pub use registry::{LoadOutcome, SchemaRegistry};
pub use schema::EventSchema;
