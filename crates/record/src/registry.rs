//! Property Registry
//!
//! Maps each view URI to its record type and ordered property descriptors.
//! The record layer uses it to validate property ids, to size flag arrays
//! and to find the descriptor array of a child list.
//!
//! ## How It Works
//!
//! The descriptor tables live in [`crate::views`] as static data. On first
//! use they are indexed into a `HashMap` keyed by URI. The map is built once
//! per process and never mutated afterwards, so lookups need no locking.
//!
//! ```ignore
//! use contacts_record::registry;
//!
//! let count = registry::property_count(view_uri::CONTACT)?;
//! let props = registry::lookup_properties(view_uri::NUMBER)?;
//! ```

use std::collections::HashMap;

use contacts_core::{view_uri, Error, PropertyId, RecordType, Result, SearchClass};
use once_cell::sync::Lazy;
use tracing::error;

use crate::views::VIEWS;

// =============================================================================
// Descriptors
// =============================================================================

/// Metadata for one property of a view
#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor {
    /// Packed property id
    pub id: PropertyId,
    /// Where the property may appear in a query
    pub search_class: SearchClass,
    /// Storage column hint for the SQL collaborator
    pub column: Option<&'static str>,
    /// Descriptors of the child view, for record-valued properties
    pub child: Option<&'static [PropertyDescriptor]>,
}

impl PropertyDescriptor {
    /// Scalar property stored in `column`
    pub const fn column(id: PropertyId, column: &'static str) -> Self {
        Self {
            id,
            search_class: search_class_of(id),
            column: Some(column),
            child: None,
        }
    }

    /// Record-valued property whose elements are described by `properties`
    pub const fn child(id: PropertyId, properties: &'static [PropertyDescriptor]) -> Self {
        Self {
            id,
            search_class: search_class_of(id),
            column: None,
            child: Some(properties),
        }
    }
}

const fn search_class_of(id: PropertyId) -> SearchClass {
    match id.search_class() {
        Some(class) => class,
        None => SearchClass::None,
    }
}

/// A registered view: record shape behind a URI
#[derive(Debug, Clone, Copy)]
pub struct ViewDescriptor {
    /// Stable URI string
    pub uri: &'static str,
    /// Type of records created for this view
    pub record_type: RecordType,
    /// Ordered property descriptors; order is the flag-array order
    pub properties: &'static [PropertyDescriptor],
}

impl ViewDescriptor {
    pub(crate) const fn new(
        uri: &'static str,
        record_type: RecordType,
        properties: &'static [PropertyDescriptor],
    ) -> Self {
        Self {
            uri,
            record_type,
            properties,
        }
    }

    /// Position of `id` in the property array
    ///
    /// Views with a single category list properties in sequence order, so
    /// the sequence index is tried first.
    pub fn index_of(&self, id: PropertyId) -> Option<usize> {
        let seq = id.sequence() as usize;
        if self.properties.get(seq).map(|d| d.id) == Some(id) {
            return Some(seq);
        }
        self.properties.iter().position(|d| d.id == id)
    }

    /// Descriptor for `id`, if the view declares it
    pub fn descriptor(&self, id: PropertyId) -> Option<&'static PropertyDescriptor> {
        self.index_of(id).map(|idx| &self.properties[idx])
    }
}

// =============================================================================
// Global Registry
// =============================================================================

static REGISTRY: Lazy<HashMap<&'static str, &'static ViewDescriptor>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(VIEWS.len());
    for view in VIEWS.iter() {
        if map.insert(view.uri, view).is_some() {
            error!(uri = view.uri, "View registered twice");
        }
    }
    map
});

/// Registered view for `uri`
///
/// # Errors
///
/// `InvalidParameter` if no view is registered under `uri`.
pub fn lookup_view(uri: &str) -> Result<&'static ViewDescriptor> {
    REGISTRY
        .get(uri)
        .copied()
        .ok_or_else(|| Error::invalid_parameter(format!("unknown view uri '{}'", uri)))
}

/// Record type created for `uri`
pub fn lookup_record_type(uri: &str) -> Result<RecordType> {
    lookup_view(uri).map(|view| view.record_type)
}

/// Ordered property descriptors of `uri`; the count is the slice length
pub fn lookup_properties(uri: &str) -> Result<&'static [PropertyDescriptor]> {
    lookup_view(uri).map(|view| view.properties)
}

/// Number of properties declared by `uri`
pub fn property_count(uri: &str) -> Result<usize> {
    lookup_view(uri).map(|view| view.properties.len())
}

/// Flag-array position of `id` within `uri`
///
/// # Errors
///
/// `InvalidParameter` if the view is unknown or does not declare `id`.
pub fn property_index(uri: &str, id: PropertyId) -> Result<usize> {
    lookup_view(uri)?
        .index_of(id)
        .ok_or_else(|| not_declared(uri, id))
}

/// Descriptor of `id` within `uri`
pub fn descriptor(uri: &str, id: PropertyId) -> Result<&'static PropertyDescriptor> {
    lookup_view(uri)?
        .descriptor(id)
        .ok_or_else(|| not_declared(uri, id))
}

/// Descriptor array of the child list behind record-valued `id`
pub fn child_properties(uri: &str, id: PropertyId) -> Result<&'static [PropertyDescriptor]> {
    descriptor(uri, id)?.child.ok_or_else(|| {
        Error::invalid_parameter(format!("property {} of '{}' is not a child list", id, uri))
    })
}

/// Every registered view, in registration order
pub fn views() -> impl Iterator<Item = &'static ViewDescriptor> {
    VIEWS.iter()
}

/// Canonical view of a record type
///
/// Query results have no canonical view; their shape depends on the query.
pub fn default_view(record_type: RecordType) -> Option<&'static str> {
    let uri = match record_type {
        RecordType::Addressbook => view_uri::ADDRESSBOOK,
        RecordType::Group => view_uri::GROUP,
        RecordType::Person => view_uri::PERSON,
        RecordType::SimpleContact => view_uri::SIMPLE_CONTACT,
        RecordType::Contact => view_uri::CONTACT,
        RecordType::MyProfile => view_uri::MY_PROFILE,
        RecordType::Activity => view_uri::ACTIVITY,
        RecordType::ActivityPhoto => view_uri::ACTIVITY_PHOTO,
        RecordType::Name => view_uri::NAME,
        RecordType::Number => view_uri::NUMBER,
        RecordType::Email => view_uri::EMAIL,
        RecordType::Address => view_uri::ADDRESS,
        RecordType::Url => view_uri::URL,
        RecordType::Event => view_uri::EVENT,
        RecordType::Messenger => view_uri::MESSENGER,
        RecordType::GroupRelation => view_uri::GROUP_RELATION,
        RecordType::Note => view_uri::NOTE,
        RecordType::Company => view_uri::COMPANY,
        RecordType::Profile => view_uri::PROFILE,
        RecordType::Relationship => view_uri::RELATIONSHIP,
        RecordType::Image => view_uri::IMAGE,
        RecordType::Nickname => view_uri::NICKNAME,
        RecordType::Extension => view_uri::EXTENSION,
        RecordType::PhoneLog => view_uri::PHONE_LOG,
        RecordType::SpeedDial => view_uri::SPEEDDIAL,
        RecordType::Sdn => view_uri::SDN,
        RecordType::UpdatedInfo => view_uri::CONTACTS_UPDATED_INFO,
        RecordType::Result => return None,
    };
    Some(uri)
}

fn not_declared(uri: &str, id: PropertyId) -> Error {
    Error::invalid_parameter(format!("property {} is not declared by '{}'", id, uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::properties::{contact, number, person};
    use contacts_core::DataType;
    use std::collections::HashSet;

    #[test]
    fn test_no_uri_registered_twice() {
        let mut seen = HashSet::new();
        for view in views() {
            assert!(seen.insert(view.uri), "duplicate view {}", view.uri);
        }
        assert_eq!(REGISTRY.len(), VIEWS.len());
    }

    #[test]
    fn test_every_record_type_but_result_has_default_view() {
        for &rt in RecordType::all() {
            match default_view(rt) {
                Some(uri) => assert_eq!(lookup_record_type(uri).unwrap(), rt),
                None => assert_eq!(rt, RecordType::Result),
            }
        }
    }

    #[test]
    fn test_unknown_uri_is_invalid_parameter() {
        let err = lookup_view("tizen.contacts_view.nope").unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(lookup_properties("").unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_property_index_fast_and_slow_path() {
        assert_eq!(
            property_index(view_uri::NUMBER, number::NUMBER).unwrap(),
            number::NUMBER.sequence() as usize
        );
        // person fields occupy the head of the joined view
        assert_eq!(
            property_index(view_uri::PERSON_NUMBER, number::ID).unwrap(),
            11
        );
        assert!(property_index(view_uri::NUMBER, person::ID)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_child_properties() {
        let props = child_properties(view_uri::CONTACT, contact::NUMBER).unwrap();
        assert_eq!(props.len(), property_count(view_uri::NUMBER).unwrap());
        assert!(child_properties(view_uri::CONTACT, contact::ID)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_record_properties_carry_child_descriptors() {
        for view in views() {
            for desc in view.properties {
                let is_record = desc.id.data_type() == Some(DataType::Record);
                assert_eq!(is_record, desc.child.is_some(), "{} in {}", desc.id, view.uri);
                assert_eq!(Some(desc.search_class), desc.id.search_class());
            }
        }
    }

    #[test]
    fn test_single_category_views_are_sequence_ordered() {
        // simple contact declares a subset of the contact category
        let canonical = RecordType::all()
            .iter()
            .filter(|&&rt| rt != RecordType::SimpleContact)
            .filter_map(|&rt| default_view(rt));
        for uri in canonical {
            let view = lookup_view(uri).unwrap();
            for (idx, desc) in view.properties.iter().enumerate() {
                assert_eq!(desc.id.sequence() as usize, idx, "{}", view.uri);
            }
        }
    }

    #[test]
    fn test_no_property_declared_twice_in_a_view() {
        for view in views() {
            let mut seen = HashSet::new();
            for desc in view.properties {
                assert!(seen.insert(desc.id), "{} twice in {}", desc.id, view.uri);
            }
        }
    }
}
