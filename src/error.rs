//! Error types for SCIM schema construction and loading.
//!
//! Every failure is raised at the point of violation and propagated to the
//! caller. Nothing in this crate substitutes a default for a value it could
//! not resolve.

/// Main error type for schema definition operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Attribute datatype outside the fixed SCIM vocabulary
    #[error("Invalid attribute datatype '{value}'")]
    InvalidDatatype { value: String },

    /// Facet value (mutability, returned, uniqueness) outside its vocabulary
    #[error("Unknown {kind} value '{value}'")]
    UnknownEnumValue { kind: &'static str, value: String },

    /// Schema document is missing a required member or has the wrong shape
    #[error("Invalid schema document: {message}")]
    InvalidDocument { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Create an invalid datatype error
    pub fn invalid_datatype(value: impl Into<String>) -> Self {
        Self::InvalidDatatype {
            value: value.into(),
        }
    }

    /// Create an unknown enum value error for the named vocabulary
    pub fn unknown_enum_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}

// Result type alias for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
