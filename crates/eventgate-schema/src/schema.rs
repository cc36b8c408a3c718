use jsonschema::Validator;
use serde_json::Value;

use crate::error::{Result, SchemaError, ValidationError, Violation};

/// A compiled validator for one topic's message payloads.
///
/// Opaque beyond its parse contract: callers get back either the decoded
/// value or a [`ValidationError`] enumerating every field-level violation.
pub struct EventSchema {
    document: Value,
    validator: Validator,
}

impl EventSchema {
    /// Compile a JSON Schema document.
    pub fn compile(document: &Value) -> Result<Self> {
        let validator = jsonschema::validator_for(document)
            .map_err(|err| SchemaError::CompileFailed(err.to_string()))?;

        Ok(Self {
            document: document.clone(),
            validator,
        })
    }

    /// Compile a JSON Schema document from a JSON string.
    pub fn compile_str(document: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(document)?;
        Self::compile(&value)
    }

    /// Validate a message payload and return the decoded value.
    ///
    /// On mismatch, returns a [`ValidationError`] carrying every violation
    /// rather than stopping at the first one.
    pub fn parse(&self, input: &Value) -> std::result::Result<Value, ValidationError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(input)
            .map(|err| Violation {
                path: err.instance_path().to_string(),
                reason: err.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(input.clone())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    /// The schema document this validator was compiled from.
    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl std::fmt::Debug for EventSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSchema")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const CHECKIN_SCHEMA: &str = r#"{
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "memberId": { "type": "string" },
            "checkinAt": { "type": "string" }
        },
        "required": ["id", "memberId", "checkinAt"]
    }"#;

    #[test]
    fn parse_returns_decoded_value_on_success() {
        let schema = EventSchema::compile_str(CHECKIN_SCHEMA).unwrap();
        let message = json!({
            "id": "chkin_123",
            "memberId": "mbr_123",
            "checkinAt": "2021-01-01T00:00:00.000Z"
        });

        let decoded = schema.parse(&message).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn parse_enumerates_every_violation() {
        let schema = EventSchema::compile_str(CHECKIN_SCHEMA).unwrap();
        // id has the wrong type and checkinAt is missing entirely.
        let message = json!({ "id": 1, "memberId": "mbr_123" });

        let error = schema.parse(&message).unwrap_err();
        assert_eq!(error.violations().len(), 2);
        assert!(error
            .violations()
            .iter()
            .any(|violation| violation.path == "/id"));
        assert!(error
            .violations()
            .iter()
            .any(|violation| violation.reason.contains("checkinAt")));
    }

    #[test]
    fn parse_is_idempotent() {
        let schema = EventSchema::compile_str(CHECKIN_SCHEMA).unwrap();
        let message = json!({ "id": 1, "memberId": "mbr_123" });

        let first = schema.parse(&message).unwrap_err();
        let second = schema.parse(&message).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_schema_fails_compile() {
        let result = EventSchema::compile_str(r#"{"type":"definitely-not-a-type"}"#);
        assert!(matches!(result, Err(SchemaError::CompileFailed(_))));
    }

    #[test]
    fn invalid_json_document_is_rejected() {
        let result = EventSchema::compile_str("not-json");
        assert!(matches!(result, Err(SchemaError::InvalidJson(_))));
    }
}
