//! View registry lookups

use crate::common::*;
use contacts_db::registry;

#[test]
fn test_every_registered_view_creates_records() {
    for view in registry::views() {
        let record = Record::new(view.uri).unwrap();
        assert_eq!(record.record_type(), view.record_type, "{}", view.uri);
        assert_eq!(record.property_count(), view.properties.len());
    }
}

#[test]
fn test_unknown_view_is_rejected() {
    let err = Record::new("tizen.contacts_view.nope").unwrap_err();
    assert!(err.is_invalid_parameter());
    assert!(registry::lookup_record_type("").is_err());
}

#[test]
fn test_with_type_uses_canonical_view() {
    for &rt in RecordType::all() {
        match registry::default_view(rt) {
            Some(uri) => {
                let record = Record::with_type(rt).unwrap();
                assert_eq!(record.view_uri(), uri);
                assert_eq!(record.record_type(), rt);
            }
            None => assert!(Record::with_type(rt).is_err()),
        }
    }
}

#[test]
fn test_property_index_follows_declaration_order() {
    let props = registry::lookup_properties(view_uri::PERSON_NUMBER).unwrap();
    for (idx, desc) in props.iter().enumerate() {
        assert_eq!(
            registry::property_index(view_uri::PERSON_NUMBER, desc.id).unwrap(),
            idx
        );
    }
    assert!(registry::property_index(view_uri::PERSON_NUMBER, group::ID).is_err());
}

#[test]
fn test_columns_are_named() {
    let desc = registry::descriptor(view_uri::PERSON_NUMBER, number::ID).unwrap();
    assert_eq!(desc.column, Some("number_id"));
    assert!(desc.child.is_none());
}
