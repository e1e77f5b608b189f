//! Endpoint configuration used to derive schema locations.
//!
//! SCIM publishes each schema as a resource under `/Schemas/{id}`. The
//! [`SchemaConfig`] holds the pieces of that URL that vary per deployment.

/// Base URL and protocol version for published schema resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Base URL of the SCIM service, without the version segment.
    /// Examples: "https://scim.example.com", "https://api.company.com"
    pub base_url: String,

    /// SCIM protocol version segment. Defaults to "v2".
    pub scim_version: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            scim_version: "v2".to_string(),
        }
    }
}

impl SchemaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. A trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the SCIM protocol version segment.
    pub fn with_scim_version(mut self, version: impl Into<String>) -> Self {
        self.scim_version = version.into();
        self
    }

    /// URL of the `/Schemas` endpoint.
    pub fn schemas_endpoint(&self) -> String {
        format!(
            "{}/{}/Schemas",
            self.base_url.trim_end_matches('/'),
            self.scim_version
        )
    }

    /// Location of the schema resource with the given id.
    pub fn schema_location(&self, schema_id: &str) -> String {
        format!("{}/{}", self.schemas_endpoint(), schema_id)
    }
}
