//! Shared helpers for record tests

#![allow(dead_code)]

pub use contacts_db::properties::{contact, group, number, person, phone_log};
pub use contacts_db::{view_uri, Record, RecordList, RecordType, TrustedAccess};

/// Number record carrying `value`, unsaved
pub fn number_record(value: &str) -> Record {
    let mut record = Record::with_type(RecordType::Number).unwrap();
    record.set_str(number::NUMBER, Some(value)).unwrap();
    record
}

/// Number record as storage loads it: persisted id, clean flags
pub fn loaded_number(id: i32, value: &str) -> Record {
    let mut record = number_record(value);
    record.set_int_trusted(number::ID, id).unwrap();
    record.mark_clean();
    record
}

/// Contact as storage loads it, with the given persisted numbers
pub fn loaded_contact(id: i32, numbers: &[(i32, &str)]) -> Record {
    let mut record = Record::with_type(RecordType::Contact).unwrap();
    record.set_int_trusted(contact::ID, id).unwrap();
    record
        .set_str_trusted(contact::DISPLAY_NAME, Some("Kim Minsu"))
        .unwrap();
    for &(number_id, value) in numbers {
        record
            .attach_child(contact::NUMBER, loaded_number(number_id, value))
            .unwrap();
    }
    record.mark_clean();
    record
}

/// Number strings of a contact's live number children, in order
pub fn numbers_of(record: &Record) -> Vec<String> {
    record
        .child_list(contact::NUMBER)
        .unwrap()
        .iter()
        .map(|n| n.get_str(number::NUMBER).unwrap().unwrap_or_default())
        .collect()
}
