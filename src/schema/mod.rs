//! SCIM schema definitions and their attribute type trees.
//!
//! This module models the schema representation of RFC 7643 §7: a schema is a
//! named, identified container of attribute definitions, and complex
//! attributes nest further attribute definitions without a depth limit.
//!
//! # Key Types
//!
//! - [`SchemaDefinition`] - Schema identity plus its ordered top-level attributes
//! - [`AttributeType`] - One attribute definition, recursive for `complex` attributes
//! - [`Datatype`], [`Mutability`], [`Returned`], [`Uniqueness`] - Closed vocabularies
//!
//! # Examples
//!
//! ```rust
//! use scim_schema_kit::schema::SchemaDefinition;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut group = SchemaDefinition::new(
//!     "urn:example:Group",
//!     "Group",
//!     "https://example.org/scim/v2/Schemas/Group",
//! );
//! group.add_attribute_with("members", "complex", |members| {
//!     members.set_multi_valued(true);
//!     members.add_attribute("value", "string")?;
//!     Ok(())
//! })?;
//!
//! let document = group.to_json()?;
//! assert_eq!(document["attributes"][0]["subAttributes"][0]["name"], "value");
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod core_schemas;
pub mod definition;
pub mod types;

// Re-export the main types for convenience
pub use attribute::AttributeType;
pub use core_schemas::{core_group_schema, core_user_schema};
pub use definition::{ERROR, GROUP, RESOURCE_TYPE, SCHEMA, SchemaDefinition, USER};
pub use types::{Datatype, Mutability, Returned, Uniqueness};
