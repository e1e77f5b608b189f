//! SCIM 2.0 schema definitions for Rust.
//!
//! Builds the schema resources a SCIM service provider publishes for schema
//! discovery: recursive attribute type trees with the RFC 7643 datatypes and
//! characteristics, rendered into the canonical JSON attribute-metadata form.
//!
//! # Core Components
//!
//! - [`SchemaDefinition`] - Root of a schema: identity plus top-level attributes
//! - [`AttributeType`] - Attribute definition, nesting sub-attributes when `complex`
//! - [`SchemaConfig`] - Base URL used to derive schema locations
//!
//! # Quick Start
//!
//! ```rust
//! use scim_schema_kit::{SchemaConfig, SchemaDefinition};
//! use scim_schema_kit::schema::definition::GROUP;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SchemaConfig::new().with_base_url("https://example.org/scim");
//! let mut group = SchemaDefinition::from_config(&config, GROUP, "Group");
//! group.add_attribute_with("displayName", "string", |attr| {
//!     attr.set_required(true);
//!     Ok(())
//! })?;
//!
//! println!("{}", serde_json::to_string_pretty(&group)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use config::SchemaConfig;
pub use error::{SchemaError, SchemaResult};
pub use schema::{AttributeType, Datatype, Mutability, Returned, SchemaDefinition, Uniqueness};
