//! Process-wide limits installed from `contacts.toml`
//!
//! Runs as its own test binary: the limits can be installed only once per
//! process, so everything here shares one installation.

use std::sync::Once;

use contacts_db::properties::{contact, group, number};
use contacts_db::{install_config, limits, Limits, Record, RecordConfig, RecordType, CONFIG_FILE_NAME};
use tempfile::TempDir;

static INSTALL: Once = Once::new();

fn install_small_limits() {
    INSTALL.call_once(|| {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[limits]\nmax_string_bytes = 8\nmax_children = 2\n").unwrap();

        let config = RecordConfig::from_file(&path).unwrap();
        assert!(install_config(&config).unwrap());
    });
}

#[test]
fn test_installed_limits_are_in_force() {
    install_small_limits();
    assert_eq!(
        *limits(),
        Limits {
            max_string_bytes: 8,
            max_children: 2
        }
    );
}

#[test]
fn test_second_install_is_ignored() {
    install_small_limits();
    let again = RecordConfig::default();
    assert!(!install_config(&again).unwrap());
    assert_eq!(limits().max_children, 2);
}

#[test]
fn test_invalid_config_is_not_installed() {
    install_small_limits();
    let bad = RecordConfig {
        limits: Limits {
            max_string_bytes: 0,
            max_children: 1,
        },
    };
    assert!(install_config(&bad).is_err());
    assert_eq!(limits().max_string_bytes, 8);
}

#[test]
fn test_long_string_is_rejected() {
    install_small_limits();
    let mut record = Record::with_type(RecordType::Group).unwrap();
    record.set_str(group::NAME, Some("12345678")).unwrap();

    let err = record.set_str(group::NAME, Some("123456789")).unwrap_err();
    assert!(err.is_invalid_parameter());
    assert_eq!(
        record.get_str(group::NAME).unwrap().as_deref(),
        Some("12345678")
    );
}

#[test]
fn test_child_list_is_capped() {
    install_small_limits();
    let mut record = Record::with_type(RecordType::Contact).unwrap();
    for v in ["1", "2"] {
        let mut n = Record::with_type(RecordType::Number).unwrap();
        n.set_str(number::NUMBER, Some(v)).unwrap();
        record.add_child(contact::NUMBER, n).unwrap();
    }
    let extra = Record::with_type(RecordType::Number).unwrap();
    assert!(record
        .add_child(contact::NUMBER, extra)
        .unwrap_err()
        .is_invalid_parameter());
    assert_eq!(record.child_count(contact::NUMBER).unwrap(), 2);
}
