//! SCIM schema definitions.
//!
//! A [`SchemaDefinition`] is the root of an attribute tree: it carries the
//! schema's identity (URN, name, location) and owns its top-level attributes in
//! insertion order. Serializing it produces the schema resource returned by the
//! `/Schemas` endpoint during schema discovery.

use super::attribute::{AttributeType, build_attribute, string_member};
use crate::config::SchemaConfig;
use crate::error::{SchemaError, SchemaResult};
use log::{debug, trace};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::str::FromStr;

/// Schema URN of SCIM error responses.
pub const ERROR: &str = "urn:ietf:params:scim:api:messages:2.0:Error";
/// Schema URN of the core Group resource.
pub const GROUP: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";
/// Schema URN of ResourceType resources.
pub const RESOURCE_TYPE: &str = "urn:ietf:params:scim:schemas:core:2.0:ResourceType";
/// Schema URN of the core User resource.
pub const USER: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
/// Schema URN carried by schema resources themselves.
pub const SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Schema";

/// A named, identified SCIM schema and its attribute definitions.
///
/// # Examples
///
/// ```rust
/// use scim_schema_kit::schema::{SchemaDefinition, definition::GROUP};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut group = SchemaDefinition::new(
///     GROUP,
///     "Group",
///     "https://example.org/scim/v2/Schemas/urn:ietf:params:scim:schemas:core:2.0:Group",
/// );
/// group.add_attribute_with("displayName", "string", |display_name| {
///     display_name.set_required(true);
///     Ok(())
/// })?;
///
/// let json = group.to_json()?;
/// assert_eq!(json["attributes"][0]["name"], "displayName");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefinition {
    id: String,
    name: String,
    location: String,
    description: Option<String>,
    attributes: Vec<AttributeType>,
}

impl SchemaDefinition {
    /// Create an empty schema. No URN or URL syntax checks are applied.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            description: None,
            attributes: Vec::new(),
        }
    }

    /// Create an empty schema located under the configured `/Schemas` endpoint.
    pub fn from_config(config: &SchemaConfig, id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        let location = config.schema_location(&id);
        Self::new(id, name, location)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Top-level attributes in insertion order.
    pub fn attributes(&self) -> &[AttributeType] {
        &self.attributes
    }

    /// Find a top-level attribute by name, ignoring case.
    pub fn attribute(&self, name: &str) -> Option<&AttributeType> {
        self.attributes
            .iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
    }

    /// Append a top-level attribute with default characteristics.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        data_type: impl AsRef<str>,
    ) -> SchemaResult<&mut Self> {
        self.add_attribute_with(name, data_type, |_| Ok(()))
    }

    /// Build a top-level attribute, let `configure` adjust it, then append it.
    ///
    /// Same contract as [`AttributeType::add_attribute_with`], except that a
    /// schema has no datatype to coerce.
    pub fn add_attribute_with<F>(
        &mut self,
        name: impl Into<String>,
        data_type: impl AsRef<str>,
        configure: F,
    ) -> SchemaResult<&mut Self>
    where
        F: FnOnce(&mut AttributeType) -> SchemaResult<()>,
    {
        let attribute = build_attribute(name, data_type, configure)?;
        trace!("Appending attribute '{}' to schema {}", attribute.name(), self.id);
        self.attributes.push(attribute);
        Ok(self)
    }

    /// Serialized form of every top-level attribute, in order.
    pub fn attributes_json(&self) -> SchemaResult<Vec<Value>> {
        self.attributes.iter().map(AttributeType::to_json).collect()
    }

    /// Render the full schema resource document.
    pub fn to_json(&self) -> SchemaResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a definition from a schema resource document.
    ///
    /// `location` is read from `meta.location` and is empty when absent. A
    /// missing `attributes` member yields a schema without attributes.
    pub fn from_json(value: &Value) -> SchemaResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SchemaError::invalid_document("schema must be a JSON object"))?;

        let id = string_member(object, "id")?
            .ok_or_else(|| SchemaError::invalid_document("schema is missing 'id'"))?;
        let name = string_member(object, "name")?
            .ok_or_else(|| SchemaError::invalid_document("schema is missing 'name'"))?;
        let location = match object.get("meta") {
            Some(Value::Object(meta)) => string_member(meta, "location")?.unwrap_or_default(),
            None | Some(Value::Null) => String::new(),
            Some(_) => return Err(SchemaError::invalid_document("'meta' must be an object")),
        };

        let mut schema = Self::new(id, name, location);
        if let Some(description) = string_member(object, "description")? {
            schema.set_description(description);
        }

        match object.get("attributes") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items {
                    schema.attributes.push(AttributeType::from_json(item)?);
                }
            }
            Some(_) => {
                return Err(SchemaError::invalid_document(
                    "'attributes' must be an array",
                ));
            }
        }

        debug!(
            "Loaded schema {} with {} top-level attributes",
            schema.id,
            schema.attributes.len()
        );
        Ok(schema)
    }
}

impl FromStr for SchemaDefinition {
    type Err = SchemaError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json(&value)
    }
}

impl Serialize for SchemaDefinition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("schemas", &[SCHEMA])?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", &self.name)?;
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        map.serialize_entry("attributes", &self.attributes)?;
        map.serialize_entry(
            "meta",
            &json!({
                "resourceType": "Schema",
                "location": self.location,
            }),
        )?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for SchemaDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
