//! Invariants checked against every registered view and property
//!
//! Walks the registry so that every per-type match table is covered, not
//! only the types the other modules pick by hand.

use crate::common::*;
use contacts_db::{registry, DataType, PropertyDescriptor, PropertyId, Result};

fn scalar_properties(record: &Record) -> impl Iterator<Item = &'static PropertyDescriptor> {
    record
        .view()
        .properties
        .iter()
        .filter(|d| !matches!(d.id.data_type(), Some(DataType::Record) | None))
}

/// Write a value derived from `seed` through the trusted path
fn write_seeded(record: &mut Record, id: PropertyId, seed: i32) -> Result<()> {
    match id.data_type() {
        Some(DataType::Int) => record.set_int_trusted(id, seed),
        Some(DataType::Str) => record.set_str_trusted(id, Some(&format!("v{}", seed))),
        Some(DataType::Bool) => record.set_bool_trusted(id, seed % 2 == 1),
        Some(DataType::Lli) => record.set_lli_trusted(id, i64::from(seed) << 33),
        Some(DataType::Double) => record.set_double_trusted(id, f64::from(seed) + 0.5),
        _ => Ok(()),
    }
}

/// Read any scalar property, rendered for comparison
fn read_rendered(record: &Record, id: PropertyId) -> Result<String> {
    Ok(match id.data_type() {
        Some(DataType::Int) => record.get_int(id)?.to_string(),
        Some(DataType::Str) => format!("{:?}", record.get_str_p(id)?),
        Some(DataType::Bool) => record.get_bool(id)?.to_string(),
        Some(DataType::Lli) => record.get_lli(id)?.to_string(),
        Some(DataType::Double) => record.get_double(id)?.to_string(),
        _ => String::new(),
    })
}

/// Public setter for `id` with a harmless value of its family
fn write_public(record: &mut Record, id: PropertyId) -> Result<()> {
    match id.data_type() {
        Some(DataType::Int) => record.set_int(id, 1),
        Some(DataType::Str) => record.set_str(id, Some("x")),
        Some(DataType::Bool) => record.set_bool(id, true),
        Some(DataType::Lli) => record.set_lli(id, 1),
        Some(DataType::Double) => record.set_double(id, 1.0),
        _ => Ok(()),
    }
}

#[test]
fn test_unallocated_flags_read_every_stored_property() {
    for view in registry::views() {
        let record = Record::new(view.uri).unwrap();
        for desc in scalar_properties(&record) {
            if !desc.search_class.allows_projection() {
                continue;
            }
            assert!(
                read_rendered(&record, desc.id).is_ok(),
                "{} {}",
                view.uri,
                desc.id
            );
        }
        assert!(!record.flags().is_allocated(), "{}", view.uri);
    }
}

#[test]
fn test_every_read_only_property_rejects_public_setter() {
    for view in registry::views() {
        let mut record = Record::new(view.uri).unwrap();
        for desc in scalar_properties(&record) {
            if !desc.id.is_read_only() {
                continue;
            }
            let err = write_public(&mut record, desc.id).unwrap_err();
            assert!(err.is_invalid_parameter(), "{} {}", view.uri, desc.id);
        }
        assert!(!record.is_modified(), "{}", view.uri);
    }
}

#[test]
fn test_clone_is_deep_for_every_view() {
    for view in registry::views() {
        let mut original = Record::new(view.uri).unwrap();
        let mut written = Vec::new();
        for (seed, desc) in (1..).zip(scalar_properties(&original).collect::<Vec<_>>()) {
            // filter-only columns are not stored by entity records
            if write_seeded(&mut original, desc.id, seed).is_ok() {
                written.push((desc.id, read_rendered(&original, desc.id).unwrap()));
            }
        }

        let copy = original.try_clone().unwrap();
        assert_eq!(copy.view_uri(), view.uri);
        assert_eq!(copy.dirty_properties(), original.dirty_properties());

        for (seed, &(id, _)) in (1000..).zip(written.iter()) {
            write_seeded(&mut original, id, seed).unwrap();
        }
        original.destroy();

        for (id, expected) in &written {
            assert_eq!(
                &read_rendered(&copy, *id).unwrap(),
                expected,
                "{} {}",
                view.uri,
                id
            );
        }
    }
}
