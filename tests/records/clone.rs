//! Deep copy invariants
//!
//! A clone shares nothing with its source: mutating or destroying either
//! side never shows through the other.

use crate::common::*;

#[test]
fn test_clone_copies_scalars_and_flags() {
    let mut original = Record::with_type(RecordType::Contact).unwrap();
    original.set_str(contact::UID, Some("uid-7")).unwrap();
    original.set_bool(contact::IS_FAVORITE, true).unwrap();

    let copy = original.try_clone().unwrap();
    assert_eq!(copy.view_uri(), original.view_uri());
    assert_eq!(copy.get_str(contact::UID).unwrap().as_deref(), Some("uid-7"));
    assert!(copy.get_bool(contact::IS_FAVORITE).unwrap());
    assert_eq!(copy.dirty_properties(), original.dirty_properties());
}

#[test]
fn test_clone_is_independent_of_source() {
    let mut original = Record::with_type(RecordType::Contact).unwrap();
    original.set_str(contact::UID, Some("before")).unwrap();
    original
        .add_child(contact::NUMBER, number_record("010-000-0000"))
        .unwrap();

    let copy = original.try_clone().unwrap();
    original.set_str(contact::UID, Some("after")).unwrap();
    original
        .child_at_mut(contact::NUMBER, 0)
        .unwrap()
        .set_str(number::NUMBER, Some("999"))
        .unwrap();

    assert_eq!(copy.get_str(contact::UID).unwrap().as_deref(), Some("before"));
    assert_eq!(numbers_of(&copy), vec!["010-000-0000"]);
}

#[test]
fn test_clone_survives_source_destruction() {
    let original = loaded_contact(3, &[(30, "010-000-0000"), (31, "010-111-1111")]);
    let copy = original.try_clone().unwrap();
    original.destroy();

    assert_eq!(copy.identity(), 3);
    assert_eq!(numbers_of(&copy), vec!["010-000-0000", "010-111-1111"]);
    assert_eq!(copy.child_at(contact::NUMBER, 1).unwrap().identity(), 31);
}

#[test]
fn test_clone_preserves_projection() {
    let mut original = Record::with_type(RecordType::Person).unwrap();
    let count = original.property_count();
    original.set_projection(&[person::ID], count).unwrap();

    let copy = original.try_clone().unwrap();
    assert!(copy.get_int(person::ID).is_ok());
    assert!(copy.get_str(person::RINGTONE_PATH).is_err());
}

#[test]
fn test_clone_child_list_copies_live_children_only() {
    let mut record = loaded_contact(3, &[(30, "010-000-0000"), (31, "010-111-1111")]);
    record.remove_child(contact::NUMBER, 0).unwrap();

    let list = record.clone_child_list(contact::NUMBER).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.staged_len(), 0);
    assert_eq!(list.record_type(), Some(RecordType::Number));
}

#[test]
fn test_clone_of_empty_child_list_is_no_data() {
    let record = Record::with_type(RecordType::Contact).unwrap();
    let err = record.clone_child_list(contact::EMAIL).unwrap_err();
    assert!(err.is_no_data());
}
