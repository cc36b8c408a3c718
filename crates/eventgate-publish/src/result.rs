use eventgate_schema::ValidationError;

/// Outcome of a [`safe_publish`](crate::EventPublisher::safe_publish) call.
///
/// Produced per call and never stored. A rejected message carries the
/// full structured validation error; the broker was not invoked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishResult {
    /// The message validated and was handed to the broker.
    Published,
    /// The message failed validation; no dispatch occurred.
    Rejected(ValidationError),
}

impl PublishResult {
    /// True if the message was validated and dispatched.
    pub fn is_published(&self) -> bool {
        matches!(self, PublishResult::Published)
    }

    /// The validation error for a rejected message, if any.
    pub fn rejection(&self) -> Option<&ValidationError> {
        match self {
            PublishResult::Published => None,
            PublishResult::Rejected(error) => Some(error),
        }
    }
}
