use serde::Serialize;

/// Errors that can occur while building a schema registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema document could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// A topic key does not match `service.domain.event` and the registry
    /// was configured to deny malformed topics.
    #[error("malformed topic name: {0}")]
    MalformedTopic(String),

    /// The schema document is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// A single field-level schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON pointer to the offending location (empty for the document root).
    pub path: String,
    /// Why the value at `path` failed.
    pub reason: String,
}

/// Structured validation failure enumerating every violated field.
///
/// Produced by [`EventSchema::parse`](crate::schema::EventSchema::parse);
/// a pure function of the schema and the input, so parsing the same
/// message twice yields the same violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Every recorded violation, in schema-evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "message failed schema validation")?;
        for violation in &self.violations {
            let path = if violation.path.is_empty() {
                "<root>"
            } else {
                violation.path.as_str()
            };
            write!(f, "; {path}: {}", violation.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
