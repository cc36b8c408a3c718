use eventgate_schema::ValidationError;

use crate::broker::BrokerError;

/// Errors that can occur in publish operations.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The topic has no registered schema.
    ///
    /// This is a contract violation in the surrounding system, not a
    /// recoverable condition; callers should not catch and retry it.
    #[error("no schema registered for topic {topic}")]
    SchemaNotFound { topic: String },

    /// The message does not conform to its topic's schema.
    ///
    /// Carries every field-level violation; always recoverable.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The message could not be serialized to a JSON value.
    #[error("failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The broker failed during dispatch. Propagated unmodified.
    #[error("broker dispatch failed: {0}")]
    BrokerDispatch(#[source] BrokerError),
}

pub type Result<T> = std::result::Result<T, PublishError>;
