//! End-to-end flows as the service runs them

use crate::common::*;

/// Edit a loaded contact: drop a number, keep a copy, and discard the
/// original as an update handler does
#[test]
fn test_edit_clone_and_discard() {
    let mut record = loaded_contact(5, &[(50, "010-000-0000"), (51, "010-111-1111")]);

    record.remove_child(contact::NUMBER, 0).unwrap();
    assert_eq!(record.child_list(contact::NUMBER).unwrap().staged_len(), 1);

    let copy = record.try_clone().unwrap();
    record.destroy();

    assert_eq!(numbers_of(&copy), vec!["010-111-1111"]);
    assert_eq!(copy.child_list(contact::NUMBER).unwrap().staged_len(), 0);
    assert_eq!(copy.identity(), 5);
}

/// A list screen fetches id and display name only
#[test]
fn test_projected_contact_list_row() {
    let mut record = Record::with_type(RecordType::Contact).unwrap();
    let count = record.property_count();
    record
        .set_projection(&[contact::ID, contact::DISPLAY_NAME], count)
        .unwrap();
    record.set_int_trusted(contact::ID, 9).unwrap();
    record
        .set_str_trusted(contact::DISPLAY_NAME, Some("Park Seoyeon"))
        .unwrap();
    record.mark_clean();

    assert_eq!(record.get_int(contact::ID).unwrap(), 9);
    assert_eq!(
        record.get_str_p(contact::DISPLAY_NAME).unwrap(),
        Some("Park Seoyeon")
    );
    assert!(record
        .get_str(contact::RINGTONE_PATH)
        .unwrap_err()
        .is_invalid_parameter());
    assert!(!record.is_modified());
}

/// Build a new contact the way an application does before insert
#[test]
fn test_compose_new_contact() {
    use contacts_db::properties::{email, name};

    let mut record = Record::with_type(RecordType::Contact).unwrap();
    record.set_int(contact::ADDRESSBOOK_ID, 0).unwrap();
    record.set_bool(contact::IS_FAVORITE, true).unwrap();

    let mut full_name = Record::with_type(RecordType::Name).unwrap();
    full_name.set_str(name::FIRST, Some("Minsu")).unwrap();
    full_name.set_str(name::LAST, Some("Kim")).unwrap();
    record.add_child(contact::NAME, full_name).unwrap();

    for v in ["010-000-0000", "010-111-1111"] {
        record.add_child(contact::NUMBER, number_record(v)).unwrap();
    }
    let mut mail = Record::with_type(RecordType::Email).unwrap();
    mail.set_str(email::EMAIL, Some("minsu@example.com")).unwrap();
    record.add_child(contact::EMAIL, mail).unwrap();

    assert_eq!(record.dirty_properties(), vec![contact::IS_FAVORITE]);
    assert_eq!(record.child_count(contact::NUMBER).unwrap(), 2);
    assert_eq!(
        record
            .child_at(contact::NAME, 0)
            .unwrap()
            .get_str(name::LAST)
            .unwrap()
            .as_deref(),
        Some("Kim")
    );
}

#[test]
fn test_records_move_across_threads() {
    let record = loaded_contact(5, &[(50, "010-000-0000")]);
    let handle = std::thread::spawn(move || numbers_of(&record));
    assert_eq!(handle.join().unwrap(), vec!["010-000-0000"]);
}
