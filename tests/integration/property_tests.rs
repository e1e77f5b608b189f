//! Property-based tests for the vocabularies and attribute trees.
//!
//! Uses proptest to generate attribute names, vocabulary spellings and tree
//! shapes, checking the invariants the serializer guarantees.

use scim_schema_kit::{
    AttributeType, Datatype, Mutability, Returned, SchemaDefinition, SchemaError, Uniqueness,
};
use proptest::prelude::*;
use serde_json::Value;

fn datatype() -> impl Strategy<Value = Datatype> {
    prop::sample::select(Datatype::ALL.to_vec())
}

fn attribute_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,15}"
}

/// Letters mixed with `_`, `-` and spaces.
fn near_miss() -> impl Strategy<Value = String> {
    "[a-zA-Z_\\- ]{1,14}"
}

/// A canonical spelling with one `_`, `-` or space inserted somewhere.
fn with_separator(canonical: &'static str) -> impl Strategy<Value = String> {
    (0..=canonical.len(), prop::sample::select(vec!['_', '-', ' '])).prop_map(
        move |(at, separator)| {
            let mut value = canonical.to_string();
            value.insert(at, separator);
            value
        },
    )
}

/// The member whose accepted spellings contain `value`, ignoring ASCII case.
fn listed<T: Copy>(
    all: &[T],
    spellings: fn(&T) -> &'static [&'static str],
    value: &str,
) -> Option<T> {
    all.iter()
        .copied()
        .find(|member| spellings(member).iter().any(|s| s.eq_ignore_ascii_case(value)))
}

/// Re-case a canonical spelling so only case differs.
fn recase(canonical: &str, mask: &[bool]) -> String {
    canonical
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Every node of a serialized tree: complex nodes carry `subAttributes`,
/// everything else does not.
fn assert_tree_shape(node: &Value) {
    let is_complex = node["type"] == "complex";
    assert_eq!(node.get("subAttributes").is_some(), is_complex);
    if let Some(children) = node.get("subAttributes").and_then(Value::as_array) {
        for child in children {
            assert_tree_shape(child);
        }
    }
}

proptest! {
    #[test]
    fn prop_datatype_round_trips_through_type_member(name in attribute_name(), data_type in datatype()) {
        let attribute = AttributeType::new(name.clone(), data_type.as_str()).unwrap();
        let json = attribute.to_json().unwrap();
        prop_assert_eq!(json["type"].as_str(), Some(data_type.as_str()));
        prop_assert_eq!(json["name"].as_str(), Some(name.as_str()));
    }

    #[test]
    fn prop_unknown_datatypes_rejected(value in near_miss()) {
        let expected = listed(&Datatype::ALL, Datatype::spellings, &value);
        let result = AttributeType::new("attr", &value);
        match expected {
            Some(data_type) => prop_assert_eq!(result.unwrap().data_type(), data_type),
            None => prop_assert!(
                matches!(result, Err(SchemaError::InvalidDatatype { .. })),
                "expected InvalidDatatype error for {:?}", value
            ),
        }
    }

    #[test]
    fn prop_unknown_mutability_rejected(value in near_miss()) {
        let expected = listed(&Mutability::ALL, Mutability::spellings, &value);
        match (Mutability::find(&value), expected) {
            (Ok(found), Some(member)) => prop_assert_eq!(found, member),
            (Err(SchemaError::UnknownEnumValue { kind: "mutability", .. }), None) => {}
            (other, _) => prop_assert!(false, "{:?} resolved to {:?}, expected {:?}", value, other, expected),
        }
    }

    #[test]
    fn prop_unknown_returned_rejected(value in near_miss()) {
        let expected = listed(&Returned::ALL, Returned::spellings, &value);
        match (Returned::find(&value), expected) {
            (Ok(found), Some(member)) => prop_assert_eq!(found, member),
            (Err(SchemaError::UnknownEnumValue { kind: "returned", .. }), None) => {}
            (other, _) => prop_assert!(false, "{:?} resolved to {:?}, expected {:?}", value, other, expected),
        }
    }

    #[test]
    fn prop_unknown_uniqueness_rejected(value in near_miss()) {
        let expected = listed(&Uniqueness::ALL, Uniqueness::spellings, &value);
        match (Uniqueness::find(&value), expected) {
            (Ok(found), Some(member)) => prop_assert_eq!(found, member),
            (Err(SchemaError::UnknownEnumValue { kind: "uniqueness", .. }), None) => {}
            (other, _) => prop_assert!(false, "{:?} resolved to {:?}, expected {:?}", value, other, expected),
        }
    }

    #[test]
    fn prop_inserted_separator_needs_a_listed_spelling(
        (canonical, value) in prop::sample::select(
            Datatype::ALL.iter().map(Datatype::as_str)
                .chain(Mutability::ALL.iter().map(Mutability::as_str))
                .chain(Returned::ALL.iter().map(Returned::as_str))
                .chain(Uniqueness::ALL.iter().map(Uniqueness::as_str))
                .collect::<Vec<_>>()
        ).prop_flat_map(|canonical| (Just(canonical), with_separator(canonical))),
    ) {
        let resolved = value.parse::<Datatype>().is_ok()
            || Mutability::find(&value).is_ok()
            || Returned::find(&value).is_ok()
            || Uniqueness::find(&value).is_ok();
        let listed_anywhere = listed(&Datatype::ALL, Datatype::spellings, &value).is_some()
            || listed(&Mutability::ALL, Mutability::spellings, &value).is_some()
            || listed(&Returned::ALL, Returned::spellings, &value).is_some()
            || listed(&Uniqueness::ALL, Uniqueness::spellings, &value).is_some();
        prop_assert_eq!(resolved, listed_anywhere, "{:?} from {:?}", value, canonical);
    }

    #[test]
    fn prop_add_attribute_always_yields_complex(parent in datatype(), child in datatype()) {
        let mut attribute = AttributeType::of_type("parent", parent);
        attribute.add_attribute("child", child.as_str()).unwrap();
        let json = attribute.to_json().unwrap();
        prop_assert_eq!(json["type"].as_str(), Some("complex"));
        prop_assert_eq!(json["subAttributes"][0]["type"].as_str(), Some(child.as_str()));
    }

    #[test]
    fn prop_case_insensitive_facet_resolution(
        mutability in prop::sample::select(Mutability::ALL.to_vec()),
        returned in prop::sample::select(Returned::ALL.to_vec()),
        uniqueness in prop::sample::select(Uniqueness::ALL.to_vec()),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let mut attribute = AttributeType::string("attr");
        attribute.set_mutability(recase(mutability.as_str(), &mask)).unwrap();
        attribute.set_returned(recase(returned.as_str(), &mask)).unwrap();
        attribute.set_uniqueness(recase(uniqueness.as_str(), &mask)).unwrap();

        let json = attribute.to_json().unwrap();
        prop_assert_eq!(json["mutability"].as_str(), Some(mutability.as_str()));
        prop_assert_eq!(json["returned"].as_str(), Some(returned.as_str()));
        prop_assert_eq!(json["uniqueness"].as_str(), Some(uniqueness.as_str()));
    }

    #[test]
    fn prop_schema_preserves_insertion_order(
        attributes in prop::collection::vec((attribute_name(), datatype()), 0..12),
    ) {
        let mut schema = SchemaDefinition::new("urn:example:Thing", "Thing", "https://example.org/Thing");
        for (name, data_type) in &attributes {
            schema.add_attribute(name.clone(), data_type).unwrap();
        }

        let document = schema.to_json().unwrap();
        let rendered = document["attributes"].as_array().unwrap();
        prop_assert_eq!(rendered.len(), attributes.len());
        for (json, (name, data_type)) in rendered.iter().zip(&attributes) {
            prop_assert_eq!(json["name"].as_str(), Some(name.as_str()));
            prop_assert_eq!(json["type"].as_str(), Some(data_type.as_str()));
            assert_tree_shape(json);
        }
    }

    #[test]
    fn prop_nested_children_keep_order(
        children in prop::collection::vec((attribute_name(), datatype()), 0..8),
        depth in 1usize..5,
    ) {
        // Build a chain `depth` levels deep whose innermost node gets `children`.
        fn build(node: &mut AttributeType, depth: usize, children: &[(String, Datatype)]) -> Result<(), SchemaError> {
            if depth == 0 {
                for (name, data_type) in children {
                    node.add_attribute(name.clone(), data_type)?;
                }
                return Ok(());
            }
            node.add_attribute_with("nested", "complex", |nested| build(nested, depth - 1, children))?;
            Ok(())
        }

        let mut root = AttributeType::of_type("root", Datatype::Complex);
        build(&mut root, depth, &children).unwrap();

        let json = root.to_json().unwrap();
        assert_tree_shape(&json);

        let mut innermost = &json;
        for _ in 0..depth {
            innermost = &innermost["subAttributes"][0];
        }
        let names: Vec<&str> = innermost["subAttributes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|child| child["name"].as_str())
            .collect();
        let expected: Vec<&str> = children.iter().map(|(name, _)| name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }
}
