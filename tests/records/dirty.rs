//! Dirty tracking
//!
//! A property is dirty exactly when a setter changed its value since the
//! record was loaded or marked clean.

use crate::common::*;
use proptest::prelude::*;

#[test]
fn test_new_record_is_clean() {
    let record = Record::with_type(RecordType::Group).unwrap();
    assert!(!record.is_modified());
    assert!(record.dirty_properties().is_empty());
    assert!(!record.flags().is_allocated());
}

#[test]
fn test_same_value_does_not_mark_dirty() {
    let mut record = Record::with_type(RecordType::Group).unwrap();
    record.set_str(group::NAME, None).unwrap();
    record.set_int(group::ADDRESSBOOK_ID, 0).unwrap();
    assert!(!record.is_modified());
    assert!(!record.flags().is_allocated());
}

#[test]
fn test_change_marks_only_that_property() {
    let mut record = Record::with_type(RecordType::Group).unwrap();
    record.set_str(group::NAME, Some("Family")).unwrap();
    assert!(record.is_dirty(group::NAME).unwrap());
    assert!(!record.is_dirty(group::RINGTONE_PATH).unwrap());
    assert_eq!(record.dirty_properties(), vec![group::NAME]);
}

#[test]
fn test_failed_write_leaves_record_clean() {
    let mut record = Record::with_type(RecordType::Group).unwrap();
    assert!(record.set_int(group::ID, 5).is_err());
    assert!(record.set_str(number::NUMBER, Some("1")).is_err());
    assert!(!record.is_modified());
    assert_eq!(record.identity(), 0);
}

#[test]
fn test_is_dirty_of_undeclared_property() {
    let record = Record::with_type(RecordType::Group).unwrap();
    assert!(record.is_dirty(number::NUMBER).unwrap_err().is_invalid_parameter());
}

#[test]
fn test_child_changes_do_not_dirty_parent() {
    let mut record = loaded_contact(1, &[(10, "010-000-0000")]);
    record
        .child_at_mut(contact::NUMBER, 0)
        .unwrap()
        .set_str(number::LABEL, Some("work"))
        .unwrap();

    assert!(!record.is_modified());
    assert!(record.child_at(contact::NUMBER, 0).unwrap().is_modified());
}

fn group_string_id() -> impl Strategy<Value = contacts_db::PropertyId> {
    prop_oneof![
        Just(group::NAME),
        Just(group::RINGTONE_PATH),
        Just(group::IMAGE_PATH),
        Just(group::VIBRATION),
        Just(group::MESSAGE_ALERT),
        Just(group::EXTRA_DATA),
    ]
}

proptest! {
    /// Dirty set equals the set of properties some write actually changed
    #[test]
    fn prop_dirty_set_matches_changed_writes(
        writes in prop::collection::vec(
            (group_string_id(), prop::option::of("[a-z]{0,6}")),
            0..24,
        )
    ) {
        let mut record = Record::with_type(RecordType::Group).unwrap();
        let mut changed = std::collections::BTreeSet::new();
        for (id, value) in &writes {
            let before = record.get_str(*id).unwrap();
            record.set_str(*id, value.as_deref()).unwrap();
            if before.as_deref() != value.as_deref() {
                changed.insert(id.raw());
            }
        }
        let dirty: std::collections::BTreeSet<_> =
            record.dirty_properties().into_iter().map(|id| id.raw()).collect();
        prop_assert_eq!(dirty, changed);
    }

    /// Reading back returns the last value written
    #[test]
    fn prop_last_write_wins(values in prop::collection::vec(any::<i32>(), 1..16)) {
        let mut record = Record::with_type(RecordType::PhoneLog).unwrap();
        for v in &values {
            record.set_int(phone_log::LOG_TIME, *v).unwrap();
        }
        prop_assert_eq!(record.get_int(phone_log::LOG_TIME).unwrap(), *values.last().unwrap());
    }
}
