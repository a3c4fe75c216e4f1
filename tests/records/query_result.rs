//! Query-result rows
//!
//! Rows of join views are filled by storage with whichever columns the
//! query selected and are always fully readable.

use crate::common::*;
use contacts_db::types::ResultValue;
use contacts_db::{ProjectionState, RecordBody};

fn person_number_row() -> Record {
    let mut row = Record::new(view_uri::PERSON_NUMBER).unwrap();
    let count = row.property_count();
    row.set_projection(&[person::ID, person::DISPLAY_NAME, number::NUMBER], count)
        .unwrap();
    row.set_int_trusted(person::ID, 8).unwrap();
    row.set_str_trusted(person::DISPLAY_NAME, Some("Lee Jiwon"))
        .unwrap();
    row.set_str(number::NUMBER, Some("010-222-3333")).unwrap();
    row
}

#[test]
fn test_result_view_has_result_type() {
    let row = Record::new(view_uri::PERSON_NUMBER).unwrap();
    assert_eq!(row.record_type(), RecordType::Result);
    assert!(Record::with_type(RecordType::Result).is_err());
}

#[test]
fn test_result_reads_bypass_projection() {
    let row = person_number_row();
    assert_eq!(row.projection_state(), ProjectionState::Restricted);
    assert_eq!(row.get_int(person::ID).unwrap(), 8);
    assert_eq!(
        row.get_str(number::NUMBER).unwrap().as_deref(),
        Some("010-222-3333")
    );
    // declared but never filled
    assert_eq!(row.get_str(person::RINGTONE_PATH).unwrap(), None);
    assert!(!row.get_bool(person::IS_FAVORITE).unwrap());
}

#[test]
fn test_result_still_checks_view_membership() {
    let row = person_number_row();
    assert!(row.get_int(group::ID).unwrap_err().is_invalid_parameter());
    assert!(row.get_int(number::NUMBER).unwrap_err().is_invalid_parameter());
}

#[test]
fn test_result_rejects_plain_write_of_read_only() {
    let mut row = Record::new(view_uri::PERSON_NUMBER).unwrap();
    assert!(row.set_int(person::ID, 1).is_err());
}

#[test]
fn test_result_body_keeps_fill_order() {
    let row = person_number_row();
    let RecordBody::Result(values) = row.body() else {
        panic!("expected a result body");
    };
    let filled: Vec<_> = values.values().map(|(id, _)| id).collect();
    assert_eq!(filled, vec![person::ID, person::DISPLAY_NAME, number::NUMBER]);
    assert!(matches!(
        values.values().next().unwrap().1,
        ResultValue::Int(8)
    ));
}

#[test]
fn test_phone_log_stat_row() {
    use contacts_db::properties::phone_log_stat;

    let mut row = Record::new(view_uri::PHONE_LOG_STAT).unwrap();
    row.set_int_trusted(phone_log_stat::LOG_COUNT, 17).unwrap();
    row.set_int_trusted(phone_log_stat::LOG_TYPE, 1).unwrap();
    assert_eq!(row.get_int(phone_log_stat::LOG_COUNT).unwrap(), 17);
    assert_eq!(row.get_int(phone_log_stat::SIM_SLOT_NO).unwrap(), 0);
}
