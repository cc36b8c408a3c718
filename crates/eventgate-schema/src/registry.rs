use std::collections::HashMap;

use serde_json::Value;

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::schema::EventSchema;
use crate::topic;

/// Topic-keyed registry of compiled schema validators.
///
/// Built once from an ordered topic → schema mapping; read-only for the
/// rest of the process lifetime. Safe to share across concurrent publish
/// calls without locking.
pub struct SchemaRegistry {
    entries: Vec<(String, EventSchema)>,
    index: HashMap<String, usize>,
    config: RegistryConfig,
}

/// The result of loading a registry: the registry itself plus every topic
/// key that was dropped by the shape filter.
///
/// A typo'd topic name would otherwise vanish silently, so rejected keys
/// are always reported back to the caller and logged.
#[derive(Debug)]
pub struct LoadOutcome {
    pub registry: SchemaRegistry,
    pub rejected: Vec<String>,
}

impl SchemaRegistry {
    /// Load a registry from an ordered mapping of topic names to schema
    /// documents, with default config.
    ///
    /// Keys that do not match `service.domain.event` are excluded and
    /// returned in [`LoadOutcome::rejected`]; surviving entries keep the
    /// input order. A duplicate surviving key overwrites the earlier
    /// schema but keeps its original position.
    pub fn load<I, K>(entries: I) -> Result<LoadOutcome>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::load_with_config(entries, RegistryConfig::default())
    }

    /// Load with explicit config.
    pub fn load_with_config<I, K>(entries: I, config: RegistryConfig) -> Result<LoadOutcome>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut registry = Self {
            entries: Vec::new(),
            index: HashMap::new(),
            config,
        };
        let mut rejected = Vec::new();

        for (key, document) in entries {
            let key = key.into();

            if !topic::is_well_formed(&key) {
                if config.deny_malformed_topics {
                    return Err(SchemaError::MalformedTopic(key));
                }
                tracing::warn!(topic = %key, "dropping malformed topic key from registry");
                rejected.push(key);
                continue;
            }

            let schema = EventSchema::compile(&document).map_err(|err| match err {
                SchemaError::CompileFailed(message) => {
                    SchemaError::CompileFailed(format!("{key}: {message}"))
                }
                other => other,
            })?;

            match registry.index.get(&key).copied() {
                Some(slot) => registry.entries[slot].1 = schema,
                None => {
                    registry.index.insert(key.clone(), registry.entries.len());
                    registry.entries.push((key, schema));
                }
            }
        }

        Ok(LoadOutcome { registry, rejected })
    }

    /// Load from embedded topic/schema string pairs.
    pub fn load_embedded(entries: &[(&str, &str)]) -> Result<LoadOutcome> {
        let mut parsed = Vec::with_capacity(entries.len());
        for (key, document) in entries {
            let document: Value = serde_json::from_str(document)?;
            parsed.push((*key, document));
        }
        Self::load(parsed)
    }

    /// Get the schema registered for a topic.
    pub fn schema(&self, topic: &str) -> Option<&EventSchema> {
        self.index.get(topic).map(|&slot| &self.entries[slot].1)
    }

    /// Check if a topic has a registered schema.
    pub fn has_schema(&self, topic: &str) -> bool {
        self.index.contains_key(topic)
    }

    /// Registered topics, in load order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of registered topics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no topics.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("topics", &self.topics().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
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

    const PAYMENT_SCHEMA: &str = r#"{
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "amount": { "type": "number" }
        },
        "required": ["id", "amount"]
    }"#;

    #[test]
    fn malformed_keys_are_filtered_and_reported() {
        let outcome = SchemaRegistry::load_embedded(&[
            ("checkin", CHECKIN_SCHEMA),
            ("calendar.class.checkin", CHECKIN_SCHEMA),
        ])
        .unwrap();

        assert_eq!(
            outcome.registry.topics().collect::<Vec<_>>(),
            vec!["calendar.class.checkin"]
        );
        assert_eq!(outcome.rejected, vec!["checkin".to_string()]);
    }

    #[test]
    fn surviving_entries_keep_input_order() {
        let outcome = SchemaRegistry::load_embedded(&[
            ("billing.invoice.payment", PAYMENT_SCHEMA),
            ("not-a-topic", CHECKIN_SCHEMA),
            ("calendar.class.checkin", CHECKIN_SCHEMA),
        ])
        .unwrap();

        assert_eq!(
            outcome.registry.topics().collect::<Vec<_>>(),
            vec!["billing.invoice.payment", "calendar.class.checkin"]
        );
    }

    #[test]
    fn duplicate_key_keeps_slot_and_takes_last_schema() {
        let outcome = SchemaRegistry::load([
            ("a.b.c".to_string(), json!({"type": "string"})),
            ("x.y.z".to_string(), json!({"type": "object"})),
            ("a.b.c".to_string(), json!({"type": "integer"})),
        ])
        .unwrap();

        assert_eq!(
            outcome.registry.topics().collect::<Vec<_>>(),
            vec!["a.b.c", "x.y.z"]
        );
        let schema = outcome.registry.schema("a.b.c").unwrap();
        assert!(schema.parse(&json!(7)).is_ok());
        assert!(schema.parse(&json!("seven")).is_err());
    }

    #[test]
    fn deny_malformed_topics_fails_the_load() {
        let config = RegistryConfig {
            deny_malformed_topics: true,
        };
        let result = SchemaRegistry::load_with_config(
            [("checkin".to_string(), json!({"type": "object"}))],
            config,
        );

        assert!(matches!(result, Err(SchemaError::MalformedTopic(key)) if key == "checkin"));
    }

    #[test]
    fn lookup_and_introspection() {
        let outcome = SchemaRegistry::load_embedded(&[
            ("calendar.class.checkin", CHECKIN_SCHEMA),
            ("billing.invoice.payment", PAYMENT_SCHEMA),
        ])
        .unwrap();
        let registry = outcome.registry;

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.has_schema("calendar.class.checkin"));
        assert!(!registry.has_schema("calendar.class.noshow"));
        assert!(registry.schema("billing.invoice.payment").is_some());
        assert!(registry.schema("checkin").is_none());
    }

    #[test]
    fn invalid_schema_document_names_the_topic() {
        let result = SchemaRegistry::load([(
            "a.b.c".to_string(),
            json!({"type": "definitely-not-a-type"}),
        )]);

        match result {
            Err(SchemaError::CompileFailed(message)) => assert!(message.contains("a.b.c")),
            other => panic!("expected CompileFailed, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_registry() {
        let outcome = SchemaRegistry::load(Vec::<(String, Value)>::new()).unwrap();
        assert!(outcome.registry.is_empty());
        assert!(outcome.rejected.is_empty());
    }
}
