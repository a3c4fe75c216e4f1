//! Projection
//!
//! After a projected fetch only the fetched properties are readable.
//! Writes are not restricted by projection.

use crate::common::*;
use contacts_db::{properties::number as num, ProjectionState};

#[test]
fn test_unprojected_record_reads_everything() {
    let record = Record::with_type(RecordType::Person).unwrap();
    assert_eq!(record.projection_state(), ProjectionState::Unallocated);
    assert_eq!(record.get_int(person::ID).unwrap(), 0);
    assert_eq!(record.get_str(person::RINGTONE_PATH).unwrap(), None);
}

#[test]
fn test_projection_restricts_reads() {
    let mut record = Record::with_type(RecordType::Person).unwrap();
    let count = record.property_count();
    record
        .set_projection(&[person::ID, person::DISPLAY_NAME], count)
        .unwrap();

    assert_eq!(record.projection_state(), ProjectionState::Restricted);
    assert!(record.get_int(person::ID).is_ok());
    assert!(record.get_str(person::DISPLAY_NAME).is_ok());
    let err = record.get_str(person::RINGTONE_PATH).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_empty_projection_is_unrestricted() {
    let mut record = Record::with_type(RecordType::Person).unwrap();
    let count = record.property_count();
    record.set_projection(&[], count).unwrap();

    assert_eq!(record.projection_state(), ProjectionState::Unrestricted);
    assert!(record.get_str(person::RINGTONE_PATH).is_ok());
}

#[test]
fn test_writes_ignore_projection() {
    let mut record = Record::with_type(RecordType::Person).unwrap();
    let count = record.property_count();
    record.set_projection(&[person::ID], count).unwrap();

    record
        .set_str(person::RINGTONE_PATH, Some("/opt/ring.ogg"))
        .unwrap();
    assert!(record.is_dirty(person::RINGTONE_PATH).unwrap());
    assert!(record.get_str(person::RINGTONE_PATH).is_err());
}

#[test]
fn test_projection_count_mismatch_is_rejected() {
    let mut record = Record::with_type(RecordType::Person).unwrap();
    let count = record.property_count();
    let err = record.set_projection(&[person::ID], count + 1).unwrap_err();
    assert!(err.is_invalid_parameter());
    assert_eq!(record.projection_state(), ProjectionState::Unallocated);
}

#[test]
fn test_projection_of_undeclared_property_is_rejected() {
    let mut record = Record::with_type(RecordType::Person).unwrap();
    let count = record.property_count();
    assert!(record.set_projection(&[num::NUMBER], count).is_err());
    assert_eq!(record.projection_state(), ProjectionState::Unallocated);
}

#[test]
fn test_filter_only_property_cannot_be_projected() {
    let mut record = Record::with_type(RecordType::Number).unwrap();
    let count = record.property_count();
    let err = record
        .set_projection(&[num::ID, num::NORMALIZED_NUMBER], count)
        .unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_projection_drops_pending_modifications() {
    let mut record = Record::with_type(RecordType::Group).unwrap();
    record.set_str(group::NAME, Some("Work")).unwrap();
    assert!(record.is_modified());

    let count = record.property_count();
    record.set_projection(&[group::NAME], count).unwrap();
    assert!(!record.is_modified());
    assert_eq!(record.get_str(group::NAME).unwrap().as_deref(), Some("Work"));
}
