//! Child record lists
//!
//! Parents own typed lists. Removing a persisted child stages it so storage
//! can issue the delete; removing an unsaved child just drops it.

use crate::common::*;
use contacts_db::properties::{activity, activity_photo, email, group_relation, my_profile, name};

#[test]
fn test_add_child_resets_identity() {
    let mut parent = Record::with_type(RecordType::Contact).unwrap();
    parent
        .add_child(contact::NUMBER, loaded_number(77, "010-000-0000"))
        .unwrap();
    assert_eq!(parent.child_at(contact::NUMBER, 0).unwrap().identity(), 0);
}

#[test]
fn test_child_of_wrong_type_is_rejected() {
    let mut parent = Record::with_type(RecordType::Contact).unwrap();
    let mut mail = Record::with_type(RecordType::Email).unwrap();
    mail.set_str(email::EMAIL, Some("kim@example.com")).unwrap();

    let err = parent.add_child(contact::NUMBER, mail).unwrap_err();
    assert!(err.is_invalid_parameter());
    assert_eq!(parent.child_count(contact::NUMBER).unwrap(), 0);
}

#[test]
fn test_name_list_holds_one_record() {
    let mut parent = Record::with_type(RecordType::Contact).unwrap();
    let mut first = Record::with_type(RecordType::Name).unwrap();
    first.set_str(name::FIRST, Some("Minsu")).unwrap();
    parent.add_child(contact::NAME, first).unwrap();

    let second = Record::with_type(RecordType::Name).unwrap();
    assert!(parent.add_child(contact::NAME, second).is_err());
    assert_eq!(parent.child_count(contact::NAME).unwrap(), 1);
}

#[test]
fn test_staged_name_does_not_count_against_cap() {
    let mut parent = Record::with_type(RecordType::Contact).unwrap();
    let mut loaded = Record::with_type(RecordType::Name).unwrap();
    loaded.set_int_trusted(name::ID, 12).unwrap();
    loaded.set_str(name::FIRST, Some("Old")).unwrap();
    parent.attach_child(contact::NAME, loaded).unwrap();

    parent.remove_child(contact::NAME, 0).unwrap();
    assert_eq!(parent.child_list(contact::NAME).unwrap().staged_len(), 1);

    let mut replacement = Record::with_type(RecordType::Name).unwrap();
    replacement.set_str(name::FIRST, Some("New")).unwrap();
    parent.accepts_child(contact::NAME, &replacement).unwrap();
    parent.add_child(contact::NAME, replacement).unwrap();

    let list = parent.child_list(contact::NAME).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.staged_len(), 1);
    assert_eq!(list.staged()[0].identity(), 12);
}

#[test]
fn test_rejected_child_can_be_checked_first() {
    let mut parent = Record::with_type(RecordType::Contact).unwrap();
    let mail = Record::with_type(RecordType::Email).unwrap();
    assert!(parent
        .accepts_child(contact::NUMBER, &mail)
        .unwrap_err()
        .is_invalid_parameter());
    parent.add_child(contact::EMAIL, mail).unwrap();
    assert_eq!(parent.child_count(contact::EMAIL).unwrap(), 1);
}

#[test]
fn test_non_list_property_is_not_a_child_list() {
    let parent = Record::with_type(RecordType::Contact).unwrap();
    assert!(parent.child_list(contact::UID).unwrap_err().is_invalid_parameter());
    assert!(parent.child_count(my_profile::NUMBER).is_err());
}

#[test]
fn test_leaf_record_has_no_child_lists() {
    let mut record = Record::with_type(RecordType::Number).unwrap();
    assert!(record.child_list(contact::NUMBER).is_err());
    assert!(record
        .add_child(contact::NUMBER, number_record("1"))
        .is_err());
}

#[test]
fn test_remove_persisted_child_is_staged() {
    let mut parent = loaded_contact(1, &[(10, "010-000-0000"), (11, "010-111-1111")]);
    parent.remove_child(contact::NUMBER, 0).unwrap();

    let list = parent.child_list(contact::NUMBER).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.staged_len(), 1);
    assert_eq!(list.staged()[0].identity(), 10);
}

#[test]
fn test_remove_unsaved_child_is_dropped() {
    let mut parent = Record::with_type(RecordType::Contact).unwrap();
    parent
        .add_child(contact::NUMBER, number_record("010-000-0000"))
        .unwrap();
    parent.remove_child(contact::NUMBER, 0).unwrap();

    let list = parent.child_list(contact::NUMBER).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.staged_len(), 0);
}

#[test]
fn test_remove_out_of_range() {
    let mut parent = loaded_contact(1, &[(10, "010-000-0000")]);
    let err = parent.remove_child(contact::NUMBER, 1).unwrap_err();
    assert!(err.is_invalid_parameter());
    assert_eq!(parent.child_count(contact::NUMBER).unwrap(), 1);
}

#[test]
fn test_take_staged_drains() {
    let mut parent = loaded_contact(1, &[(10, "a"), (11, "b")]);
    parent.remove_child(contact::NUMBER, 1).unwrap();
    parent.remove_child(contact::NUMBER, 0).unwrap();

    let list = parent.child_list_mut(contact::NUMBER).unwrap();
    let staged: Vec<_> = list.take_staged().iter().map(Record::identity).collect();
    assert_eq!(staged, vec![11, 10]);
    assert_eq!(list.staged_len(), 0);
}

#[test]
fn test_child_properties_describe_elements() {
    let parent = Record::with_type(RecordType::Contact).unwrap();
    let props = parent.child_properties(contact::NUMBER).unwrap();
    assert!(props.iter().any(|d| d.id == number::NUMBER));
    assert!(props.iter().all(|d| d.id.category() == number::ID.category()));
}

#[test]
fn test_cursor_walk() {
    let mut list = RecordList::new();
    for v in ["a", "b", "c"] {
        list.add(number_record(v)).unwrap();
    }
    assert_eq!(list.record_type(), Some(RecordType::Number));

    let mut seen = Vec::new();
    list.first().unwrap();
    loop {
        seen.push(list.current().unwrap().get_str(number::NUMBER).unwrap().unwrap());
        if list.next().is_err() {
            break;
        }
    }
    assert_eq!(seen, vec!["a", "b", "c"]);
    assert!(list.next().unwrap_err().is_no_data());

    list.last().unwrap();
    list.prev().unwrap();
    assert_eq!(
        list.current().unwrap().get_str(number::NUMBER).unwrap().as_deref(),
        Some("b")
    );
}

#[test]
fn test_empty_list_cursor_is_no_data() {
    let mut list = RecordList::of_type(RecordType::Email);
    assert!(list.first().unwrap_err().is_no_data());
    assert!(list.current().unwrap_err().is_no_data());
    assert!(list.at(0).unwrap_err().is_no_data());
}

#[test]
fn test_into_child_lists_hands_over_children() {
    let parent = loaded_contact(1, &[(10, "010-000-0000")]);
    let lists = parent.into_child_lists();
    let (_, numbers) = lists
        .into_iter()
        .find(|(id, _)| *id == contact::NUMBER)
        .unwrap();
    assert_eq!(numbers.len(), 1);
    assert_eq!(numbers.at(0).unwrap().identity(), 10);
}

#[test]
fn test_simple_contact_carries_group_relations_only() {
    let mut record = Record::with_type(RecordType::SimpleContact).unwrap();
    let mut relation = Record::with_type(RecordType::GroupRelation).unwrap();
    relation.set_int(group_relation::GROUP_ID, 2).unwrap();
    record.add_child(contact::GROUP_RELATION, relation).unwrap();

    assert_eq!(record.child_count(contact::GROUP_RELATION).unwrap(), 1);
    assert!(record.child_list(contact::NUMBER).is_err());
}

#[test]
fn test_my_profile_lists() {
    let mut record = Record::with_type(RecordType::MyProfile).unwrap();
    record
        .add_child(my_profile::NUMBER, number_record("010-999-0000"))
        .unwrap();
    assert_eq!(record.child_count(my_profile::NUMBER).unwrap(), 1);
    assert!(record.child_list(contact::GROUP_RELATION).is_err());
}

#[test]
fn test_activity_photos() {
    let mut record = Record::with_type(RecordType::Activity).unwrap();
    let mut photo = Record::with_type(RecordType::ActivityPhoto).unwrap();
    photo
        .set_str(activity_photo::PHOTO_URL, Some("file:///a.jpg"))
        .unwrap();
    record.add_child(activity::PHOTO, photo).unwrap();

    let copy = record.try_clone().unwrap();
    assert_eq!(copy.child_count(activity::PHOTO).unwrap(), 1);
}
