/// Controls registry load behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, a malformed topic key fails the load with
    /// `SchemaError::MalformedTopic` instead of being filtered out.
    pub deny_malformed_topics: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            deny_malformed_topics: false,
        }
    }
}
