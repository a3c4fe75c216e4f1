//! Read-only properties
//!
//! Row ids, derived fields and change-feed columns reject the public
//! setters and accept the trusted ones.

use crate::common::*;
use contacts_db::properties::{speeddial, updated_info};

#[test]
fn test_public_setter_rejects_read_only() {
    let mut record = Record::with_type(RecordType::Contact).unwrap();
    for result in [
        record.set_int(contact::ID, 1),
        record.set_str(contact::DISPLAY_NAME, Some("Kim")),
        record.set_bool(contact::HAS_EMAIL, true),
        record.set_int(contact::CHANGED_TIME, 3),
    ] {
        assert!(result.unwrap_err().is_invalid_parameter());
    }
    assert!(!record.is_modified());
}

#[test]
fn test_trusted_setter_accepts_read_only() {
    let mut record = Record::with_type(RecordType::Contact).unwrap();
    record.set_int_trusted(contact::ID, 11).unwrap();
    record
        .set_str_trusted(contact::DISPLAY_NAME, Some("Kim"))
        .unwrap();
    assert_eq!(record.identity(), 11);
    assert_eq!(
        record.get_str(contact::DISPLAY_NAME).unwrap().as_deref(),
        Some("Kim")
    );
}

#[test]
fn test_speeddial_lookup_columns_are_read_only() {
    let mut record = Record::with_type(RecordType::SpeedDial).unwrap();
    record.set_int(speeddial::SPEEDDIAL_NUMBER, 2).unwrap();
    record.set_int(speeddial::NUMBER_ID, 40).unwrap();
    assert!(record.set_str(speeddial::NUMBER, Some("010")).is_err());
    record
        .set_str_trusted(speeddial::NUMBER, Some("010-444-5555"))
        .unwrap();
    assert_eq!(record.identity(), 0);
}

#[test]
fn test_change_feeds_share_one_record_type() {
    for uri in [
        view_uri::CONTACTS_UPDATED_INFO,
        view_uri::GROUPS_UPDATED_INFO,
        view_uri::MY_PROFILE_UPDATED_INFO,
    ] {
        let mut record = Record::new(uri).unwrap();
        assert_eq!(record.record_type(), RecordType::UpdatedInfo);
        assert!(record.set_int(updated_info::VERSION, 1).is_err());
        record.set_int_trusted(updated_info::VERSION, 1).unwrap();
        assert_eq!(record.get_int(updated_info::VERSION).unwrap(), 1);
    }
}

#[test]
fn test_group_feed_does_not_declare_contact_id() {
    let mut record = Record::new(view_uri::GROUPS_UPDATED_INFO).unwrap();
    assert!(record
        .set_int_trusted(updated_info::CONTACT_ID, 1)
        .unwrap_err()
        .is_invalid_parameter());
}
