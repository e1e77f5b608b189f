//! Closed vocabularies used by SCIM attribute definitions.
//!
//! RFC 7643 fixes the set of attribute datatypes and the values of the three
//! attribute characteristics `mutability`, `returned` and `uniqueness`. Each is
//! modelled as an enum that carries its canonical protocol string and resolves
//! external input back to a member through [`FromStr`].
//!
//! Resolution compares, ignoring ASCII case, against each member's accepted
//! spellings: the canonical string plus, for the two-word mutability values,
//! the snake-case symbol. `readWrite`, `READWRITE`, `read_write` and
//! `READ_WRITE` resolve to [`Mutability::ReadWrite`]; `read-write` or
//! ` readWrite` do not. Output always uses the canonical camelCase form.

use crate::error::SchemaError;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

fn is_spelled(spellings: &[&str], value: &str) -> bool {
    spellings
        .iter()
        .any(|spelling| spelling.eq_ignore_ascii_case(value))
}

/// SCIM attribute data types.
///
/// Represents the valid data types for SCIM attributes as defined in RFC 7643.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Datatype {
    /// String value
    #[default]
    String,
    /// Boolean value
    Boolean,
    /// Decimal number
    Decimal,
    /// Integer number
    Integer,
    /// DateTime in RFC3339 format
    DateTime,
    /// Binary data (base64 encoded)
    Binary,
    /// URI reference
    Reference,
    /// Complex attribute with sub-attributes
    Complex,
}

impl Datatype {
    /// Every datatype, in RFC 7643 order.
    pub const ALL: [Datatype; 8] = [
        Datatype::String,
        Datatype::Boolean,
        Datatype::Decimal,
        Datatype::Integer,
        Datatype::DateTime,
        Datatype::Binary,
        Datatype::Reference,
        Datatype::Complex,
    ];

    /// Canonical protocol string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Datatype::String => "string",
            Datatype::Boolean => "boolean",
            Datatype::Decimal => "decimal",
            Datatype::Integer => "integer",
            Datatype::DateTime => "dateTime",
            Datatype::Binary => "binary",
            Datatype::Reference => "reference",
            Datatype::Complex => "complex",
        }
    }

    /// Spellings accepted when resolving input. Every datatype is a single
    /// word, so this is just the canonical string.
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            Datatype::String => &["string"],
            Datatype::Boolean => &["boolean"],
            Datatype::Decimal => &["decimal"],
            Datatype::Integer => &["integer"],
            Datatype::DateTime => &["dateTime"],
            Datatype::Binary => &["binary"],
            Datatype::Reference => &["reference"],
            Datatype::Complex => &["complex"],
        }
    }

    /// Whether `caseExact` applies to values of this type.
    pub fn supports_case_exact(&self) -> bool {
        matches!(self, Datatype::String | Datatype::Reference)
    }
}

impl FromStr for Datatype {
    type Err = SchemaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Datatype::ALL
            .into_iter()
            .find(|candidate| is_spelled(candidate.spellings(), value))
            .ok_or_else(|| {
                debug!("Rejected attribute datatype '{}'", value);
                SchemaError::invalid_datatype(value)
            })
    }
}

/// Attribute mutability characteristics.
///
/// Defines whether and how an attribute can be modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mutability {
    /// Read-only attribute (managed by server)
    ReadOnly,
    /// Read-write attribute (can be modified by clients)
    #[default]
    ReadWrite,
    /// Immutable attribute (set once, never modified)
    Immutable,
    /// Write-only attribute (passwords, etc.)
    WriteOnly,
}

impl Mutability {
    /// Every mutability value, in RFC 7643 order.
    pub const ALL: [Mutability; 4] = [
        Mutability::ReadOnly,
        Mutability::ReadWrite,
        Mutability::Immutable,
        Mutability::WriteOnly,
    ];

    /// Canonical protocol string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mutability::ReadOnly => "readOnly",
            Mutability::ReadWrite => "readWrite",
            Mutability::Immutable => "immutable",
            Mutability::WriteOnly => "writeOnly",
        }
    }

    /// Spellings accepted when resolving input: the canonical string and the
    /// snake-case symbol.
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            Mutability::ReadOnly => &["readOnly", "read_only"],
            Mutability::ReadWrite => &["readWrite", "read_write"],
            Mutability::Immutable => &["immutable"],
            Mutability::WriteOnly => &["writeOnly", "write_only"],
        }
    }

    /// Resolve an external spelling against the mutability vocabulary.
    pub fn find(value: impl AsRef<str>) -> Result<Self, SchemaError> {
        value.as_ref().parse()
    }
}

impl FromStr for Mutability {
    type Err = SchemaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Mutability::ALL
            .into_iter()
            .find(|candidate| is_spelled(candidate.spellings(), value))
            .ok_or_else(|| {
                debug!("No mutability matches '{}'", value);
                SchemaError::unknown_enum_value("mutability", value)
            })
    }
}

/// When an attribute is returned in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Returned {
    /// Always returned, regardless of `attributes`/`excludedAttributes`
    Always,
    /// Never returned
    Never,
    /// Returned unless excluded
    #[default]
    Default,
    /// Returned only when explicitly requested
    Request,
}

impl Returned {
    /// Every returned value, in RFC 7643 order.
    pub const ALL: [Returned; 4] = [
        Returned::Always,
        Returned::Never,
        Returned::Default,
        Returned::Request,
    ];

    /// Canonical protocol string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Returned::Always => "always",
            Returned::Never => "never",
            Returned::Default => "default",
            Returned::Request => "request",
        }
    }

    /// Spellings accepted when resolving input.
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            Returned::Always => &["always"],
            Returned::Never => &["never"],
            Returned::Default => &["default"],
            Returned::Request => &["request"],
        }
    }

    /// Resolve an external spelling against the returned vocabulary.
    pub fn find(value: impl AsRef<str>) -> Result<Self, SchemaError> {
        value.as_ref().parse()
    }
}

impl FromStr for Returned {
    type Err = SchemaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Returned::ALL
            .into_iter()
            .find(|candidate| is_spelled(candidate.spellings(), value))
            .ok_or_else(|| {
                debug!("No returned policy matches '{}'", value);
                SchemaError::unknown_enum_value("returned", value)
            })
    }
}

/// Attribute uniqueness constraints.
///
/// Defines the scope of uniqueness for attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Uniqueness {
    /// No uniqueness constraint
    #[default]
    None,
    /// Unique within the server
    Server,
    /// Globally unique
    Global,
}

impl Uniqueness {
    /// Every uniqueness value, in RFC 7643 order.
    pub const ALL: [Uniqueness; 3] = [Uniqueness::None, Uniqueness::Server, Uniqueness::Global];

    /// Canonical protocol string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Uniqueness::None => "none",
            Uniqueness::Server => "server",
            Uniqueness::Global => "global",
        }
    }

    /// Spellings accepted when resolving input.
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            Uniqueness::None => &["none"],
            Uniqueness::Server => &["server"],
            Uniqueness::Global => &["global"],
        }
    }

    /// Resolve an external spelling against the uniqueness vocabulary.
    pub fn find(value: impl AsRef<str>) -> Result<Self, SchemaError> {
        value.as_ref().parse()
    }
}

impl FromStr for Uniqueness {
    type Err = SchemaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uniqueness::ALL
            .into_iter()
            .find(|candidate| is_spelled(candidate.spellings(), value))
            .ok_or_else(|| {
                debug!("No uniqueness matches '{}'", value);
                SchemaError::unknown_enum_value("uniqueness", value)
            })
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Returned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Uniqueness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Datatype {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Mutability {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Returned {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Uniqueness {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Serde goes through the canonical string in both directions so documents
// read back with the same resolution the setters use.

impl Serialize for Datatype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Datatype {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Mutability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mutability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Returned {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Returned {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Uniqueness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Uniqueness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
