//! # SCIM Schema Validator
//!
//! A command-line utility that loads SCIM schema resource files into
//! [`SchemaDefinition`]s, checking that every datatype and attribute
//! characteristic belongs to its RFC 7643 vocabulary.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin schema-validator schemas/User.json
//! cargo run --bin schema-validator ./schemas/
//! cargo run --bin schema-validator --core
//! ```
//!
//! `--core` prints the built-in core User and Group schemas instead of
//! reading files.
//!
//! ## Output Examples
//!
//! ```text
//! Validating schema file: schemas/Group.json
//! ✓ Schema is valid!
//!
//! Schema Summary:
//!   ID: urn:ietf:params:scim:schemas:core:2.0:Group
//!   Name: Group
//!   Description: Group
//!   Attributes: 2 (5 including sub-attributes)
//!   Required attributes: 1
//!   Multi-valued attributes: 1
//!   Attribute types:
//!     - string: 3
//!     - complex: 1
//!     - reference: 1
//!   Required attribute names: displayName
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: All schemas are valid
//! - `1`: One or more schemas are invalid or validation error occurred

use scim_schema_kit::schema::{AttributeType, Datatype, core_group_schema, core_user_schema};
use scim_schema_kit::{SchemaConfig, SchemaDefinition};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);

    let Some(target) = args.get(1) else {
        eprintln!("Usage: {} <schema-file-or-directory> | --core", program);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} schemas/User.json", program);
        eprintln!("  {} ./schemas/", program);
        eprintln!("  {} --core", program);
        process::exit(1);
    };

    if target == "--core" {
        print_core_schemas();
        return;
    }

    let path = Path::new(target);

    if path.is_file() {
        validate_single_file(path);
    } else if path.is_dir() {
        validate_directory(path);
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            path.display()
        );
        process::exit(1);
    }
}

/// Name to show in usage text; argv may be empty when spawned by exec.
fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("schema-validator")
}

fn print_core_schemas() {
    let config = SchemaConfig::default();
    let schemas = core_user_schema(&config)
        .and_then(|user| Ok(vec![user, core_group_schema(&config)?]))
        .and_then(|schemas| Ok(serde_json::to_string_pretty(&schemas)?));

    match schemas {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to build core schemas: {}", e);
            process::exit(1);
        }
    }
}

fn validate_single_file(file_path: &Path) {
    println!("Validating schema file: {}", file_path.display());

    match load_schema(file_path) {
        Ok(schema) => {
            println!("✓ Schema is valid!");
            print_schema_summary(&schema);
        }
        Err(e) => {
            eprintln!("❌ Schema validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn validate_directory(dir_path: &Path) {
    println!("Validating schemas in directory: {}", dir_path.display());

    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory: {}", e);
            process::exit(1);
        }
    };

    let mut valid_count = 0;
    let mut error_count = 0;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        println!("\nValidating: {}", path.display());
        match load_schema(&path) {
            Ok(schema) => {
                println!("  ✓ Valid - {} ({})", schema.name(), schema.id());
                valid_count += 1;
            }
            Err(e) => {
                eprintln!("  ❌ Invalid - {}", e);
                error_count += 1;
            }
        }
    }

    println!("\nValidation Summary:");
    println!("  Valid schemas: {}", valid_count);
    println!("  Invalid schemas: {}", error_count);

    if error_count > 0 {
        process::exit(1);
    }
}

fn load_schema(file_path: &Path) -> Result<SchemaDefinition, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file_path)?;
    Ok(content.parse::<SchemaDefinition>()?)
}

fn count_attributes(attributes: &[AttributeType]) -> usize {
    attributes
        .iter()
        .map(|attr| 1 + count_attributes(attr.sub_attributes()))
        .sum()
}

fn count_types(attributes: &[AttributeType], counts: &mut Vec<(Datatype, usize)>) {
    for attr in attributes {
        match counts.iter_mut().find(|(data_type, _)| *data_type == attr.data_type()) {
            Some((_, count)) => *count += 1,
            None => counts.push((attr.data_type(), 1)),
        }
        count_types(attr.sub_attributes(), counts);
    }
}

fn print_schema_summary(schema: &SchemaDefinition) {
    let attributes = schema.attributes();

    println!();
    println!("Schema Summary:");
    println!("  ID: {}", schema.id());
    println!("  Name: {}", schema.name());
    println!("  Description: {}", schema.description().unwrap_or("-"));
    println!(
        "  Attributes: {} ({} including sub-attributes)",
        attributes.len(),
        count_attributes(attributes)
    );

    let required_count = attributes.iter().filter(|attr| attr.required()).count();
    let multi_valued_count = attributes.iter().filter(|attr| attr.multi_valued()).count();
    println!("  Required attributes: {}", required_count);
    println!("  Multi-valued attributes: {}", multi_valued_count);

    let mut type_counts = Vec::new();
    count_types(attributes, &mut type_counts);
    println!("  Attribute types:");
    for (data_type, count) in type_counts {
        println!("    - {}: {}", data_type, count);
    }

    let required_attrs: Vec<&str> = attributes
        .iter()
        .filter(|attr| attr.required())
        .map(AttributeType::name)
        .collect();

    if !required_attrs.is_empty() {
        println!("  Required attribute names: {}", required_attrs.join(", "));
    }
}
