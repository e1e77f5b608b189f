//! Resolution of the mutability, returned and uniqueness characteristics.

use crate::assert_schema_error;
use crate::common::init_logging;
use scim_schema_kit::{AttributeType, Mutability, Returned, SchemaError, Uniqueness};

#[test]
fn test_defaults_serialize_canonically() {
    let json = AttributeType::string("nickName").to_json().unwrap();
    assert_eq!(json["mutability"], "readWrite");
    assert_eq!(json["returned"], "default");
    assert_eq!(json["uniqueness"], "none");
}

#[test]
fn test_mutability_vocabulary() {
    for (input, expected) in [
        ("readOnly", "readOnly"),
        ("readwrite", "readWrite"),
        ("IMMUTABLE", "immutable"),
        ("write_only", "writeOnly"),
    ] {
        let mut attribute = AttributeType::string("attr");
        attribute.set_mutability(input).unwrap();
        assert_eq!(attribute.to_json().unwrap()["mutability"], expected);
    }
}

#[test]
fn test_returned_vocabulary() {
    for (input, expected) in [
        ("always", Returned::Always),
        ("Never", Returned::Never),
        ("DEFAULT", Returned::Default),
        ("request", Returned::Request),
    ] {
        let mut attribute = AttributeType::string("attr");
        attribute.set_returned(input).unwrap();
        assert_eq!(attribute.returned(), expected);
        assert_eq!(attribute.to_json().unwrap()["returned"], expected.as_str());
    }
}

#[test]
fn test_uniqueness_vocabulary() {
    for (input, expected) in [
        ("none", Uniqueness::None),
        ("Server", Uniqueness::Server),
        ("global", Uniqueness::Global),
    ] {
        let mut attribute = AttributeType::string("attr");
        attribute.set_uniqueness(input).unwrap();
        assert_eq!(attribute.uniqueness(), expected);
    }
}

#[test]
fn test_unresolvable_values_fail() {
    init_logging();

    let mut attribute = AttributeType::string("attr");
    assert_schema_error!(
        attribute.set_mutability("readSometimes"),
        SchemaError::UnknownEnumValue { kind: "mutability", .. }
    );
    assert_schema_error!(
        attribute.set_returned("rarely"),
        SchemaError::UnknownEnumValue { kind: "returned", .. }
    );
    assert_schema_error!(
        attribute.set_uniqueness("tenant"),
        SchemaError::UnknownEnumValue { kind: "uniqueness", .. }
    );
    assert_schema_error!(
        attribute.set_mutability(""),
        SchemaError::UnknownEnumValue { .. }
    );
}

#[test]
fn test_separated_spellings_fail() {
    init_logging();

    let mut attribute = AttributeType::string("attr");
    for value in ["im_mu_ta_ble", "--readOnly--", "read-only", " readWrite"] {
        assert_schema_error!(
            attribute.set_mutability(value),
            SchemaError::UnknownEnumValue { kind: "mutability", .. }
        );
    }
    assert_schema_error!(
        attribute.set_returned("d-e-f-a-u-l-t"),
        SchemaError::UnknownEnumValue { kind: "returned", .. }
    );
    assert_schema_error!(
        attribute.set_uniqueness("_server_"),
        SchemaError::UnknownEnumValue { kind: "uniqueness", .. }
    );

    let json = attribute.to_json().unwrap();
    assert_eq!(json["mutability"], "readWrite");
    assert_eq!(json["returned"], "default");
    assert_eq!(json["uniqueness"], "none");
}

#[test]
fn test_resolved_members_can_be_passed_directly() {
    let mut attribute = AttributeType::string("id");
    attribute
        .set_mutability(Mutability::ReadOnly)
        .unwrap()
        .set_returned(Returned::Always)
        .unwrap()
        .set_uniqueness(Uniqueness::Server)
        .unwrap();

    let json = attribute.to_json().unwrap();
    assert_eq!(json["mutability"], "readOnly");
    assert_eq!(json["returned"], "always");
    assert_eq!(json["uniqueness"], "server");
}

#[test]
fn test_later_serialization_reflects_updates() {
    let mut attribute = AttributeType::string("title");
    assert_eq!(attribute.to_json().unwrap()["returned"], "default");

    attribute.set_returned("request").unwrap();
    assert_eq!(attribute.to_json().unwrap()["returned"], "request");
}
