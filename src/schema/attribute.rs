//! Recursive SCIM attribute definitions.
//!
//! An [`AttributeType`] describes one attribute of a SCIM resource: its name,
//! datatype and the characteristics RFC 7643 §7 attaches to it. Complex
//! attributes own an ordered list of sub-attributes of the same type, so a
//! schema's attributes form a tree rooted at the schema definition.
//!
//! # Examples
//!
//! ```rust
//! use scim_schema_kit::schema::AttributeType;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut name = AttributeType::new("name", "complex")?;
//! name.add_attribute_with("givenName", "string", |given| {
//!     given.set_description("The given name of the User");
//!     Ok(())
//! })?;
//!
//! let json = name.to_json()?;
//! assert_eq!(json["type"], "complex");
//! assert_eq!(json["subAttributes"][0]["name"], "givenName");
//! # Ok(())
//! # }
//! ```

use super::types::{Datatype, Mutability, Returned, Uniqueness};
use crate::error::{SchemaError, SchemaResult};
use log::trace;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Definition of a single SCIM attribute.
///
/// `name` and the initial datatype are fixed at construction. Everything else
/// starts at the RFC 7643 defaults and can be changed through setters until the
/// definition is serialized. Adding a sub-attribute turns the attribute into a
/// `complex` one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeType {
    name: String,
    data_type: Datatype,
    description: String,
    multi_valued: bool,
    required: bool,
    case_exact: bool,
    reference_types: Vec<String>,
    mutability: Mutability,
    returned: Returned,
    uniqueness: Uniqueness,
    sub_attributes: Vec<AttributeType>,
}

impl AttributeType {
    /// Create an attribute, resolving `data_type` against the datatype vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidDatatype`] when `data_type` is not one of
    /// the eight SCIM datatypes.
    pub fn new(name: impl Into<String>, data_type: impl AsRef<str>) -> SchemaResult<Self> {
        let data_type = data_type.as_ref().parse::<Datatype>()?;
        Ok(Self::of_type(name, data_type))
    }

    /// Create an attribute of an already resolved datatype.
    pub fn of_type(name: impl Into<String>, data_type: Datatype) -> Self {
        Self {
            name: name.into(),
            data_type,
            description: String::new(),
            multi_valued: false,
            required: false,
            case_exact: false,
            reference_types: Vec::new(),
            mutability: Mutability::default(),
            returned: Returned::default(),
            uniqueness: Uniqueness::default(),
            sub_attributes: Vec::new(),
        }
    }

    /// Create a `string` attribute, the default SCIM datatype.
    pub fn string(name: impl Into<String>) -> Self {
        Self::of_type(name, Datatype::String)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> Datatype {
        self.data_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn multi_valued(&self) -> bool {
        self.multi_valued
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn case_exact(&self) -> bool {
        self.case_exact
    }

    pub fn reference_types(&self) -> &[String] {
        &self.reference_types
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    pub fn returned(&self) -> Returned {
        self.returned
    }

    pub fn uniqueness(&self) -> Uniqueness {
        self.uniqueness
    }

    /// Sub-attributes in insertion order. Empty unless the type is `complex`.
    pub fn sub_attributes(&self) -> &[AttributeType] {
        &self.sub_attributes
    }

    pub fn is_complex(&self) -> bool {
        self.data_type == Datatype::Complex
    }

    /// Find a direct sub-attribute by name.
    ///
    /// SCIM attribute names are case-insensitive, so the comparison is too.
    pub fn sub_attribute(&self, name: &str) -> Option<&AttributeType> {
        self.sub_attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_multi_valued(&mut self, multi_valued: bool) -> &mut Self {
        self.multi_valued = multi_valued;
        self
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }

    /// Set `caseExact`. Only emitted for `string` and `reference` attributes.
    pub fn set_case_exact(&mut self, case_exact: bool) -> &mut Self {
        self.case_exact = case_exact;
        self
    }

    /// Set the resource types a `reference` attribute may point at.
    pub fn set_reference_types<I, S>(&mut self, reference_types: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reference_types = reference_types.into_iter().map(Into::into).collect();
        self
    }

    /// Set mutability from any spelling the vocabulary accepts.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownEnumValue`] and leaves the current value
    /// untouched when `value` does not resolve.
    pub fn set_mutability(&mut self, value: impl AsRef<str>) -> SchemaResult<&mut Self> {
        self.mutability = Mutability::find(value)?;
        Ok(self)
    }

    /// Set the returned policy from any spelling the vocabulary accepts.
    pub fn set_returned(&mut self, value: impl AsRef<str>) -> SchemaResult<&mut Self> {
        self.returned = Returned::find(value)?;
        Ok(self)
    }

    /// Set uniqueness from any spelling the vocabulary accepts.
    pub fn set_uniqueness(&mut self, value: impl AsRef<str>) -> SchemaResult<&mut Self> {
        self.uniqueness = Uniqueness::find(value)?;
        Ok(self)
    }

    /// Append a sub-attribute with default characteristics.
    ///
    /// Equivalent to [`add_attribute_with`](Self::add_attribute_with) with a
    /// callback that does nothing.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        data_type: impl AsRef<str>,
    ) -> SchemaResult<&mut Self> {
        self.add_attribute_with(name, data_type, |_| Ok(()))
    }

    /// Build a sub-attribute, let `configure` adjust it, then append it.
    ///
    /// The callback sees the new attribute before it joins `subAttributes`, and
    /// may itself add further sub-attributes. Once the child is appended this
    /// attribute's datatype becomes `complex`, whatever it was before.
    ///
    /// # Errors
    ///
    /// Fails with [`SchemaError::InvalidDatatype`] for an unknown datatype, or
    /// with whatever error `configure` returns. In both cases nothing is
    /// appended and the datatype of `self` is unchanged.
    pub fn add_attribute_with<F>(
        &mut self,
        name: impl Into<String>,
        data_type: impl AsRef<str>,
        configure: F,
    ) -> SchemaResult<&mut Self>
    where
        F: FnOnce(&mut AttributeType) -> SchemaResult<()>,
    {
        let child = build_attribute(name, data_type, configure)?;
        trace!("Appending sub-attribute '{}' to '{}'", child.name, self.name);
        self.data_type = Datatype::Complex;
        self.sub_attributes.push(child);
        Ok(self)
    }

    /// Render the attribute as a JSON object in SCIM attribute-metadata form.
    pub fn to_json(&self) -> SchemaResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild an attribute from its SCIM attribute-metadata form.
    ///
    /// Datatype and characteristics go through the same vocabularies as the
    /// setters, so unknown values produce [`SchemaError::InvalidDatatype`] and
    /// [`SchemaError::UnknownEnumValue`]. Absent members keep their defaults.
    pub fn from_json(value: &Value) -> SchemaResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SchemaError::invalid_document("attribute must be a JSON object"))?;

        let name = string_member(object, "name")?
            .ok_or_else(|| SchemaError::invalid_document("attribute is missing 'name'"))?;
        let mut attribute = match string_member(object, "type")? {
            Some(data_type) => Self::new(name, data_type)?,
            None => Self::string(name),
        };

        if let Some(description) = string_member(object, "description")? {
            attribute.set_description(description);
        }
        if let Some(multi_valued) = bool_member(object, "multiValued")? {
            attribute.set_multi_valued(multi_valued);
        }
        if let Some(required) = bool_member(object, "required")? {
            attribute.set_required(required);
        }
        if let Some(case_exact) = bool_member(object, "caseExact")? {
            attribute.set_case_exact(case_exact);
        }
        if let Some(mutability) = string_member(object, "mutability")? {
            attribute.set_mutability(mutability)?;
        }
        if let Some(returned) = string_member(object, "returned")? {
            attribute.set_returned(returned)?;
        }
        if let Some(uniqueness) = string_member(object, "uniqueness")? {
            attribute.set_uniqueness(uniqueness)?;
        }
        if let Some(reference_types) = object.get("referenceTypes") {
            let reference_types = reference_types
                .as_array()
                .and_then(|items| {
                    items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .ok_or_else(|| {
                    SchemaError::invalid_document(format!(
                        "'referenceTypes' of '{}' must be an array of strings",
                        attribute.name
                    ))
                })?;
            attribute.set_reference_types(reference_types);
        }
        if let Some(sub_attributes) = object.get("subAttributes") {
            let items = sub_attributes.as_array().ok_or_else(|| {
                SchemaError::invalid_document(format!(
                    "'subAttributes' of '{}' must be an array",
                    attribute.name
                ))
            })?;
            for item in items {
                let child = Self::from_json(item)?;
                attribute.data_type = Datatype::Complex;
                attribute.sub_attributes.push(child);
            }
        }

        Ok(attribute)
    }
}

/// Create and configure a fresh attribute without attaching it anywhere.
pub(crate) fn build_attribute<F>(
    name: impl Into<String>,
    data_type: impl AsRef<str>,
    configure: F,
) -> SchemaResult<AttributeType>
where
    F: FnOnce(&mut AttributeType) -> SchemaResult<()>,
{
    let mut attribute = AttributeType::new(name, data_type)?;
    configure(&mut attribute)?;
    Ok(attribute)
}

pub(crate) fn string_member(object: &Map<String, Value>, key: &str) -> SchemaResult<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(SchemaError::invalid_document(format!(
            "'{}' must be a string",
            key
        ))),
    }
}

fn bool_member(object: &Map<String, Value>, key: &str) -> SchemaResult<Option<bool>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(SchemaError::invalid_document(format!(
            "'{}' must be a boolean",
            key
        ))),
    }
}

impl Serialize for AttributeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("description", &self.description)?;
        map.serialize_entry("multiValued", &self.multi_valued)?;
        map.serialize_entry("mutability", &self.mutability)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("required", &self.required)?;
        map.serialize_entry("returned", &self.returned)?;
        map.serialize_entry("type", &self.data_type)?;
        map.serialize_entry("uniqueness", &self.uniqueness)?;
        if self.data_type.supports_case_exact() {
            map.serialize_entry("caseExact", &self.case_exact)?;
        }
        if self.data_type == Datatype::Reference {
            map.serialize_entry("referenceTypes", &self.reference_types)?;
        }
        if self.is_complex() {
            map.serialize_entry("subAttributes", &self.sub_attributes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
