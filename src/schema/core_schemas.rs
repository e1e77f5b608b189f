//! RFC 7643 core schemas built with the attribute builder.
//!
//! These are the `User` (§4.1) and `Group` (§4.2) schemas as published in the
//! RFC's schema representation (§8.7.1). Common attributes (`id`,
//! `externalId`, `meta`) belong to every resource and are not part of either
//! schema's attribute list.

use super::attribute::AttributeType;
use super::definition::{GROUP, SchemaDefinition, USER};
use crate::config::SchemaConfig;
use crate::error::SchemaResult;

/// Build the core Group schema.
pub fn core_group_schema(config: &SchemaConfig) -> SchemaResult<SchemaDefinition> {
    let mut schema = SchemaDefinition::from_config(config, GROUP, "Group").with_description("Group");

    schema
        .add_attribute_with("displayName", "string", |attr| {
            attr.set_description("A human-readable name for the Group. REQUIRED.")
                .set_required(true);
            Ok(())
        })?
        .add_attribute_with("members", "complex", |members| {
            members
                .set_description("A list of members of the Group.")
                .set_multi_valued(true);
            members
                .add_attribute_with("value", "string", |attr| {
                    attr.set_description("Identifier of the member of this Group.");
                    attr.set_mutability("immutable")?;
                    Ok(())
                })?
                .add_attribute_with("$ref", "reference", |attr| {
                    attr.set_description(
                        "The URI corresponding to a SCIM resource that is a member of this Group.",
                    )
                    .set_reference_types(["User", "Group"]);
                    attr.set_mutability("immutable")?;
                    Ok(())
                })?
                .add_attribute_with("type", "string", |attr| {
                    attr.set_description(
                        "A label indicating the type of resource, e.g., 'User' or 'Group'.",
                    );
                    attr.set_mutability("immutable")?;
                    Ok(())
                })?;
            Ok(())
        })?;

    Ok(schema)
}

/// Build the core User schema.
pub fn core_user_schema(config: &SchemaConfig) -> SchemaResult<SchemaDefinition> {
    let mut schema =
        SchemaDefinition::from_config(config, USER, "User").with_description("User Account");

    schema
        .add_attribute_with("userName", "string", |attr| {
            attr.set_description(
                "Unique identifier for the User, typically used by the user to directly \
                 authenticate to the service provider. REQUIRED.",
            )
            .set_required(true);
            attr.set_uniqueness("server")?;
            Ok(())
        })?
        .add_attribute_with("name", "complex", |name| {
            name.set_description("The components of the user's real name.");
            for (sub_name, description) in [
                ("formatted", "The full name, including all middle names, titles, and suffixes."),
                ("familyName", "The family name of the User."),
                ("givenName", "The given name of the User."),
                ("middleName", "The middle name(s) of the User."),
                ("honorificPrefix", "The honorific prefix(es) of the User."),
                ("honorificSuffix", "The honorific suffix(es) of the User."),
            ] {
                name.add_attribute_with(sub_name, "string", |attr| {
                    attr.set_description(description);
                    Ok(())
                })?;
            }
            Ok(())
        })?
        .add_attribute_with("displayName", "string", |attr| {
            attr.set_description("The name of the User, suitable for display to end-users.");
            Ok(())
        })?
        .add_attribute_with("nickName", "string", |attr| {
            attr.set_description("The casual way to address the user in real life.");
            Ok(())
        })?
        .add_attribute_with("profileUrl", "reference", |attr| {
            attr.set_description("A fully qualified URL pointing to a page representing the User's online profile.")
                .set_reference_types(["external"]);
            Ok(())
        })?
        .add_attribute_with("title", "string", |attr| {
            attr.set_description("The user's title, such as \"Vice President.\"");
            Ok(())
        })?
        .add_attribute_with("userType", "string", |attr| {
            attr.set_description("Used to identify the relationship between the organization and the user.");
            Ok(())
        })?
        .add_attribute_with("preferredLanguage", "string", |attr| {
            attr.set_description("Indicates the User's preferred written or spoken language.");
            Ok(())
        })?
        .add_attribute_with("locale", "string", |attr| {
            attr.set_description("Used to indicate the User's default location for purposes of localizing items.");
            Ok(())
        })?
        .add_attribute_with("timezone", "string", |attr| {
            attr.set_description("The User's time zone in the 'Olson' time zone database format.");
            Ok(())
        })?
        .add_attribute_with("active", "boolean", |attr| {
            attr.set_description("A Boolean value indicating the User's administrative status.");
            Ok(())
        })?
        .add_attribute_with("password", "string", |attr| {
            attr.set_description("The User's cleartext password.");
            attr.set_mutability("writeOnly")?.set_returned("never")?;
            Ok(())
        })?
        .add_attribute_with("emails", "complex", |emails| {
            emails
                .set_description("Email addresses for the user.")
                .set_multi_valued(true);
            add_labelled_value_attributes(emails, &["work", "home", "other"])
        })?
        .add_attribute_with("phoneNumbers", "complex", |phones| {
            phones
                .set_description("Phone numbers for the User.")
                .set_multi_valued(true);
            add_labelled_value_attributes(phones, &["work", "home", "mobile", "fax", "pager", "other"])
        })?
        .add_attribute_with("addresses", "complex", |addresses| {
            addresses
                .set_description("A physical mailing address for this User.")
                .set_multi_valued(true);
            for sub_name in [
                "formatted",
                "streetAddress",
                "locality",
                "region",
                "postalCode",
                "country",
                "type",
            ] {
                addresses.add_attribute(sub_name, "string")?;
            }
            addresses.add_attribute("primary", "boolean")?;
            Ok(())
        })?
        .add_attribute_with("groups", "complex", |groups| {
            groups
                .set_description("A list of groups to which the user belongs.")
                .set_multi_valued(true);
            groups.set_mutability("readOnly")?;
            groups
                .add_attribute_with("value", "string", |attr| {
                    attr.set_description("The identifier of the User's group.");
                    attr.set_mutability("readOnly")?;
                    Ok(())
                })?
                .add_attribute_with("$ref", "reference", |attr| {
                    attr.set_description("The URI of the corresponding 'Group' resource.")
                        .set_reference_types(["User", "Group"]);
                    attr.set_mutability("readOnly")?;
                    Ok(())
                })?
                .add_attribute_with("display", "string", |attr| {
                    attr.set_description("A human-readable name, primarily used for display purposes.");
                    attr.set_mutability("readOnly")?;
                    Ok(())
                })?
                .add_attribute_with("type", "string", |attr| {
                    attr.set_description("A label indicating the attribute's function, e.g., 'direct' or 'indirect'.");
                    attr.set_mutability("readOnly")?;
                    Ok(())
                })?;
            Ok(())
        })?;

    Ok(schema)
}

/// Add the `value`/`display`/`type`/`primary` sub-attributes shared by the
/// multi-valued contact attributes.
fn add_labelled_value_attributes(parent: &mut AttributeType, labels: &[&str]) -> SchemaResult<()> {
    let labels = labels.join(", ");
    parent
        .add_attribute("value", "string")?
        .add_attribute_with("display", "string", |attr| {
            attr.set_description("A human-readable name, primarily used for display purposes.");
            Ok(())
        })?
        .add_attribute_with("type", "string", |attr| {
            attr.set_description(format!("A label indicating the attribute's function, e.g., {}.", labels));
            Ok(())
        })?
        .add_attribute_with("primary", "boolean", |attr| {
            attr.set_description("A Boolean value indicating the 'primary' or preferred attribute value.");
            Ok(())
        })?;
    Ok(())
}
