//! Record type enumeration
//!
//! Every record reports which kind of entity it is. The tag selects the
//! operation table used for typed access, and every element of a record
//! list carries the list's declared tag.
//!
//! ## Parent types
//!
//! | Type | Child relationships |
//! |------|---------------------|
//! | Contact | name (one), company, note, number, email, event, messenger, address, url, nickname, profile, relationship, image, group relation, extension |
//! | MyProfile | as Contact, without group relation |
//! | SimpleContact | group relation |
//! | Activity | photo |
//!
//! All other types are leaves.

use serde::{Deserialize, Serialize};

/// The record types of the contacts data model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Address book
    Addressbook,
    /// Contact group
    Group,
    /// Person aggregating linked contacts
    Person,
    /// Contact without child data
    SimpleContact,
    /// Full contact with child lists
    Contact,
    /// The device owner's profile
    MyProfile,
    /// Social activity
    Activity,
    /// Photo of an activity
    ActivityPhoto,
    /// Structured name
    Name,
    /// Phone number
    Number,
    /// Email address
    Email,
    /// Postal address
    Address,
    /// Web address
    Url,
    /// Dated event
    Event,
    /// Instant messenger handle
    Messenger,
    /// Group membership
    GroupRelation,
    /// Free-text note
    Note,
    /// Organization
    Company,
    /// Application profile entry
    Profile,
    /// Relationship to another person
    Relationship,
    /// Image
    Image,
    /// Nickname
    Nickname,
    /// Application-defined extension data
    Extension,
    /// Call or message log entry
    PhoneLog,
    /// Speed dial slot
    SpeedDial,
    /// Service dialing number
    Sdn,
    /// Change feed entry
    UpdatedInfo,
    /// Row of a query-result view
    Result,
}

impl RecordType {
    /// All record types (for iteration)
    pub const ALL: [RecordType; 28] = [
        RecordType::Addressbook,
        RecordType::Group,
        RecordType::Person,
        RecordType::SimpleContact,
        RecordType::Contact,
        RecordType::MyProfile,
        RecordType::Activity,
        RecordType::ActivityPhoto,
        RecordType::Name,
        RecordType::Number,
        RecordType::Email,
        RecordType::Address,
        RecordType::Url,
        RecordType::Event,
        RecordType::Messenger,
        RecordType::GroupRelation,
        RecordType::Note,
        RecordType::Company,
        RecordType::Profile,
        RecordType::Relationship,
        RecordType::Image,
        RecordType::Nickname,
        RecordType::Extension,
        RecordType::PhoneLog,
        RecordType::SpeedDial,
        RecordType::Sdn,
        RecordType::UpdatedInfo,
        RecordType::Result,
    ];

    /// Get all record types as a slice
    pub fn all() -> &'static [RecordType] {
        &Self::ALL
    }

    /// Short identifier (for logging and error messages)
    pub const fn name(&self) -> &'static str {
        match self {
            RecordType::Addressbook => "addressbook",
            RecordType::Group => "group",
            RecordType::Person => "person",
            RecordType::SimpleContact => "simple_contact",
            RecordType::Contact => "contact",
            RecordType::MyProfile => "my_profile",
            RecordType::Activity => "activity",
            RecordType::ActivityPhoto => "activity_photo",
            RecordType::Name => "name",
            RecordType::Number => "number",
            RecordType::Email => "email",
            RecordType::Address => "address",
            RecordType::Url => "url",
            RecordType::Event => "event",
            RecordType::Messenger => "messenger",
            RecordType::GroupRelation => "group_relation",
            RecordType::Note => "note",
            RecordType::Company => "company",
            RecordType::Profile => "profile",
            RecordType::Relationship => "relationship",
            RecordType::Image => "image",
            RecordType::Nickname => "nickname",
            RecordType::Extension => "extension",
            RecordType::PhoneLog => "phone_log",
            RecordType::SpeedDial => "speeddial",
            RecordType::Sdn => "sdn",
            RecordType::UpdatedInfo => "updated_info",
            RecordType::Result => "result",
        }
    }

    /// Parse from short identifier
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Whether records of this type own child record lists
    pub const fn has_children(&self) -> bool {
        matches!(
            self,
            RecordType::Contact
                | RecordType::SimpleContact
                | RecordType::MyProfile
                | RecordType::Activity
        )
    }

    /// Whether records of this type are rows of a query-result view
    ///
    /// Query results bypass per-property projection checks on read.
    pub const fn is_query_result(&self) -> bool {
        matches!(self, RecordType::Result)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
