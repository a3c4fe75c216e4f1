//! Record-type dispatch
//!
//! Every record type implements [`RecordOps`]. A slot a type does not
//! override falls back to a default that fails with `InvalidParameter`,
//! which is how "no such property", "no children" and "datatype not
//! supported by this type" are all reported.
//!
//! [`RecordBody`] is the closed set of concrete types. It owns creation and
//! cloning; everything else goes through `ops()` / `ops_mut()`.

use contacts_core::{Error, PropertyId, RecordType, Result};

use crate::list::RecordList;
use crate::registry::{self, PropertyDescriptor};
use crate::types::{
    Activity, ActivityPhoto, Address, Addressbook, Company, Contact, Email, Event, Extension,
    Group, GroupRelation, Image, Messenger, MyProfile, Name, Nickname, Note, Number, Person,
    PhoneLog, Profile, QueryResult, Relationship, Sdn, SimpleContact, SpeedDial, UpdatedInfo, Url,
};

// =============================================================================
// Operation Table
// =============================================================================

/// Per-type operation table
///
/// Setters return whether the stored value changed. The generic layer uses
/// that to decide whether the property becomes dirty.
pub trait RecordOps {
    /// Type tag of the body
    fn record_type(&self) -> RecordType;

    /// Row id of the record; 0 until persisted or for types without one
    fn identity(&self) -> i32 {
        0
    }

    /// Forget the row id so the record is inserted as new
    fn reset_identity(&mut self) {}

    /// Typed int getter
    fn get_int(&self, id: PropertyId) -> Result<i32> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed string getter, borrowing from the record
    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed bool getter
    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed 64-bit int getter
    fn get_lli(&self, id: PropertyId) -> Result<i64> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed double getter
    fn get_double(&self, id: PropertyId) -> Result<f64> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed int setter
    fn set_int(&mut self, id: PropertyId, _value: i32) -> Result<bool> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed string setter; `None` clears the value
    fn set_str(&mut self, id: PropertyId, _value: Option<&str>) -> Result<bool> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed bool setter
    fn set_bool(&mut self, id: PropertyId, _value: bool) -> Result<bool> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed 64-bit int setter
    fn set_lli(&mut self, id: PropertyId, _value: i64) -> Result<bool> {
        Err(unsupported(self.record_type(), id))
    }

    /// Typed double setter
    fn set_double(&mut self, id: PropertyId, _value: f64) -> Result<bool> {
        Err(unsupported(self.record_type(), id))
    }

    /// Child list behind record-valued `id`
    fn child_list(&self, id: PropertyId) -> Result<&RecordList> {
        Err(unsupported(self.record_type(), id))
    }

    /// Mutable child list behind record-valued `id`
    fn child_list_mut(&mut self, id: PropertyId) -> Result<&mut RecordList> {
        Err(unsupported(self.record_type(), id))
    }

    /// Record-valued properties this type owns, in declaration order
    fn child_ids(&self) -> &'static [PropertyId] {
        &[]
    }

    /// Descriptor array of the elements of child list `id`
    fn child_properties(&self, id: PropertyId) -> Result<&'static [PropertyDescriptor]> {
        let uri = registry::default_view(self.record_type())
            .ok_or_else(|| unsupported(self.record_type(), id))?;
        registry::child_properties(uri, id)
    }
}

/// Error for a slot the type does not provide
pub(crate) fn unsupported(record_type: RecordType, id: PropertyId) -> Error {
    Error::invalid_parameter(format!(
        "property {} is not supported by {} records",
        id, record_type
    ))
}

// =============================================================================
// Assignment Helpers
// =============================================================================

/// Store `value` in `slot`; returns whether it differed
pub(crate) fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Store a copy of `value` in `slot`; returns whether it differed
///
/// The copy is allocated fallibly before the slot is touched.
pub(crate) fn assign_str(slot: &mut Option<String>, value: Option<&str>) -> Result<bool> {
    if slot.as_deref() == value {
        return Ok(false);
    }
    *slot = match value {
        Some(v) => {
            let mut owned = String::new();
            owned.try_reserve_exact(v.len())?;
            owned.push_str(v);
            Some(owned)
        }
        None => None,
    };
    Ok(true)
}

// =============================================================================
// Record Body
// =============================================================================

/// Closed set of concrete record types
#[derive(Debug)]
pub enum RecordBody {
    /// Address book
    Addressbook(Addressbook),
    /// Group
    Group(Group),
    /// Person
    Person(Person),
    /// Simple contact
    SimpleContact(SimpleContact),
    /// Contact
    Contact(Contact),
    /// My profile
    MyProfile(MyProfile),
    /// Activity
    Activity(Activity),
    /// Activity photo
    ActivityPhoto(ActivityPhoto),
    /// Name
    Name(Name),
    /// Number
    Number(Number),
    /// Email
    Email(Email),
    /// Address
    Address(Address),
    /// Url
    Url(Url),
    /// Event
    Event(Event),
    /// Messenger
    Messenger(Messenger),
    /// Group relation
    GroupRelation(GroupRelation),
    /// Note
    Note(Note),
    /// Company
    Company(Company),
    /// Profile
    Profile(Profile),
    /// Relationship
    Relationship(Relationship),
    /// Image
    Image(Image),
    /// Nickname
    Nickname(Nickname),
    /// Extension
    Extension(Extension),
    /// Phone log
    PhoneLog(PhoneLog),
    /// Speed dial
    SpeedDial(SpeedDial),
    /// Service dialing number
    Sdn(Sdn),
    /// Change feed entry
    UpdatedInfo(UpdatedInfo),
    /// Query result row
    Result(QueryResult),
}

impl RecordBody {
    /// Empty body of `record_type`, child lists typed and empty
    pub fn create(record_type: RecordType) -> Self {
        match record_type {
            RecordType::Addressbook => RecordBody::Addressbook(Addressbook::default()),
            RecordType::Group => RecordBody::Group(Group::default()),
            RecordType::Person => RecordBody::Person(Person::default()),
            RecordType::SimpleContact => RecordBody::SimpleContact(SimpleContact::new()),
            RecordType::Contact => RecordBody::Contact(Contact::new()),
            RecordType::MyProfile => RecordBody::MyProfile(MyProfile::new()),
            RecordType::Activity => RecordBody::Activity(Activity::new()),
            RecordType::ActivityPhoto => RecordBody::ActivityPhoto(ActivityPhoto::default()),
            RecordType::Name => RecordBody::Name(Name::default()),
            RecordType::Number => RecordBody::Number(Number::default()),
            RecordType::Email => RecordBody::Email(Email::default()),
            RecordType::Address => RecordBody::Address(Address::default()),
            RecordType::Url => RecordBody::Url(Url::default()),
            RecordType::Event => RecordBody::Event(Event::default()),
            RecordType::Messenger => RecordBody::Messenger(Messenger::default()),
            RecordType::GroupRelation => RecordBody::GroupRelation(GroupRelation::default()),
            RecordType::Note => RecordBody::Note(Note::default()),
            RecordType::Company => RecordBody::Company(Company::default()),
            RecordType::Profile => RecordBody::Profile(Profile::default()),
            RecordType::Relationship => RecordBody::Relationship(Relationship::default()),
            RecordType::Image => RecordBody::Image(Image::default()),
            RecordType::Nickname => RecordBody::Nickname(Nickname::default()),
            RecordType::Extension => RecordBody::Extension(Extension::default()),
            RecordType::PhoneLog => RecordBody::PhoneLog(PhoneLog::default()),
            RecordType::SpeedDial => RecordBody::SpeedDial(SpeedDial::default()),
            RecordType::Sdn => RecordBody::Sdn(Sdn::default()),
            RecordType::UpdatedInfo => RecordBody::UpdatedInfo(UpdatedInfo::default()),
            RecordType::Result => RecordBody::Result(QueryResult::default()),
        }
    }

    /// Operation table of the body
    pub fn ops(&self) -> &dyn RecordOps {
        match self {
            RecordBody::Addressbook(b) => b,
            RecordBody::Group(b) => b,
            RecordBody::Person(b) => b,
            RecordBody::SimpleContact(b) => b,
            RecordBody::Contact(b) => b,
            RecordBody::MyProfile(b) => b,
            RecordBody::Activity(b) => b,
            RecordBody::ActivityPhoto(b) => b,
            RecordBody::Name(b) => b,
            RecordBody::Number(b) => b,
            RecordBody::Email(b) => b,
            RecordBody::Address(b) => b,
            RecordBody::Url(b) => b,
            RecordBody::Event(b) => b,
            RecordBody::Messenger(b) => b,
            RecordBody::GroupRelation(b) => b,
            RecordBody::Note(b) => b,
            RecordBody::Company(b) => b,
            RecordBody::Profile(b) => b,
            RecordBody::Relationship(b) => b,
            RecordBody::Image(b) => b,
            RecordBody::Nickname(b) => b,
            RecordBody::Extension(b) => b,
            RecordBody::PhoneLog(b) => b,
            RecordBody::SpeedDial(b) => b,
            RecordBody::Sdn(b) => b,
            RecordBody::UpdatedInfo(b) => b,
            RecordBody::Result(b) => b,
        }
    }

    /// Mutable operation table of the body
    pub fn ops_mut(&mut self) -> &mut dyn RecordOps {
        match self {
            RecordBody::Addressbook(b) => b,
            RecordBody::Group(b) => b,
            RecordBody::Person(b) => b,
            RecordBody::SimpleContact(b) => b,
            RecordBody::Contact(b) => b,
            RecordBody::MyProfile(b) => b,
            RecordBody::Activity(b) => b,
            RecordBody::ActivityPhoto(b) => b,
            RecordBody::Name(b) => b,
            RecordBody::Number(b) => b,
            RecordBody::Email(b) => b,
            RecordBody::Address(b) => b,
            RecordBody::Url(b) => b,
            RecordBody::Event(b) => b,
            RecordBody::Messenger(b) => b,
            RecordBody::GroupRelation(b) => b,
            RecordBody::Note(b) => b,
            RecordBody::Company(b) => b,
            RecordBody::Profile(b) => b,
            RecordBody::Relationship(b) => b,
            RecordBody::Image(b) => b,
            RecordBody::Nickname(b) => b,
            RecordBody::Extension(b) => b,
            RecordBody::PhoneLog(b) => b,
            RecordBody::SpeedDial(b) => b,
            RecordBody::Sdn(b) => b,
            RecordBody::UpdatedInfo(b) => b,
            RecordBody::Result(b) => b,
        }
    }

    /// Deep copy: scalars, strings and live child records
    pub fn try_clone(&self) -> Result<Self> {
        let body = match self {
            RecordBody::SimpleContact(b) => RecordBody::SimpleContact(b.try_clone()?),
            RecordBody::Contact(b) => RecordBody::Contact(b.try_clone()?),
            RecordBody::MyProfile(b) => RecordBody::MyProfile(b.try_clone()?),
            RecordBody::Activity(b) => RecordBody::Activity(b.try_clone()?),
            RecordBody::Addressbook(b) => RecordBody::Addressbook(b.clone()),
            RecordBody::Group(b) => RecordBody::Group(b.clone()),
            RecordBody::Person(b) => RecordBody::Person(b.clone()),
            RecordBody::ActivityPhoto(b) => RecordBody::ActivityPhoto(b.clone()),
            RecordBody::Name(b) => RecordBody::Name(b.clone()),
            RecordBody::Number(b) => RecordBody::Number(b.clone()),
            RecordBody::Email(b) => RecordBody::Email(b.clone()),
            RecordBody::Address(b) => RecordBody::Address(b.clone()),
            RecordBody::Url(b) => RecordBody::Url(b.clone()),
            RecordBody::Event(b) => RecordBody::Event(b.clone()),
            RecordBody::Messenger(b) => RecordBody::Messenger(b.clone()),
            RecordBody::GroupRelation(b) => RecordBody::GroupRelation(b.clone()),
            RecordBody::Note(b) => RecordBody::Note(b.clone()),
            RecordBody::Company(b) => RecordBody::Company(b.clone()),
            RecordBody::Profile(b) => RecordBody::Profile(b.clone()),
            RecordBody::Relationship(b) => RecordBody::Relationship(b.clone()),
            RecordBody::Image(b) => RecordBody::Image(b.clone()),
            RecordBody::Nickname(b) => RecordBody::Nickname(b.clone()),
            RecordBody::Extension(b) => RecordBody::Extension(b.clone()),
            RecordBody::PhoneLog(b) => RecordBody::PhoneLog(b.clone()),
            RecordBody::SpeedDial(b) => RecordBody::SpeedDial(b.clone()),
            RecordBody::Sdn(b) => RecordBody::Sdn(b.clone()),
            RecordBody::UpdatedInfo(b) => RecordBody::UpdatedInfo(b.clone()),
            RecordBody::Result(b) => RecordBody::Result(b.clone()),
        };
        Ok(body)
    }

    /// Move every child list out, leaving empty lists of the same shape
    pub fn take_child_lists(&mut self) -> Vec<(PropertyId, RecordList)> {
        let ops = self.ops_mut();
        let ids = ops.child_ids();
        let mut taken = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Ok(list) = ops.child_list_mut(id) {
                let empty = list.empty_like();
                taken.push((id, std::mem::replace(list, empty)));
            }
        }
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::properties::{contact, name, number};

    #[test]
    fn test_create_matches_record_type() {
        for &rt in RecordType::all() {
            assert_eq!(RecordBody::create(rt).ops().record_type(), rt);
        }
    }

    #[test]
    fn test_only_parents_have_child_ids() {
        for &rt in RecordType::all() {
            let body = RecordBody::create(rt);
            assert_eq!(!body.ops().child_ids().is_empty(), rt.has_children(), "{}", rt);
        }
    }

    #[test]
    fn test_default_slots_reject() {
        let body = RecordBody::create(RecordType::Note);
        let err = body.ops().get_double(name::FIRST).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(body.ops().child_list(contact::NUMBER).is_err());
    }

    #[test]
    fn test_assign_reports_change() {
        let mut slot = 3;
        assert!(!assign(&mut slot, 3));
        assert!(assign(&mut slot, 4));
        assert_eq!(slot, 4);
    }

    #[test]
    fn test_assign_str_reports_change() {
        let mut slot = None;
        assert!(!assign_str(&mut slot, None).unwrap());
        assert!(assign_str(&mut slot, Some("a")).unwrap());
        assert!(!assign_str(&mut slot, Some("a")).unwrap());
        assert!(assign_str(&mut slot, None).unwrap());
        assert_eq!(slot, None);
    }

    #[test]
    fn test_take_child_lists_leaves_empty_typed_lists() {
        let mut body = RecordBody::create(RecordType::Contact);
        let taken = body.take_child_lists();
        assert_eq!(taken.len(), body.ops().child_ids().len());

        let numbers = body.ops().child_list(contact::NUMBER).unwrap();
        assert_eq!(numbers.record_type(), Some(RecordType::Number));
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_child_properties_from_default_view() {
        let body = RecordBody::create(RecordType::Contact);
        let props = body.ops().child_properties(contact::NUMBER).unwrap();
        assert_eq!(props[number::NUMBER.sequence() as usize].id, number::NUMBER);
    }
}
