//! Property categories
//!
//! The category bits of a property identifier name the entity kind the
//! property belongs to. Categories are part of the packed identifier layout
//! and MUST NOT be renumbered.
//!
//! Categories do not map 1:1 to record types: SimpleContact reuses the
//! Contact category, and query-result views mix properties from several
//! categories. `PhoneLogStat` exists only for the aggregate columns of the
//! phone log statistics view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity kind encoded in a property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum Category {
    /// Address book
    Addressbook = 0x001,
    /// Group
    Group = 0x002,
    /// Person (aggregate of linked contacts)
    Person = 0x003,
    /// Contact (also used by simple contact views)
    Contact = 0x005,
    /// The owner's profile
    MyProfile = 0x006,
    /// Social activity
    Activity = 0x007,
    /// Photo attached to an activity
    ActivityPhoto = 0x008,
    /// Structured name
    Name = 0x009,
    /// Phone number
    Number = 0x00A,
    /// Email address
    Email = 0x00B,
    /// Postal address
    Address = 0x00C,
    /// Web address
    Url = 0x00D,
    /// Dated event (birthday, anniversary)
    Event = 0x00E,
    /// Instant messenger handle
    Messenger = 0x00F,
    /// Group membership
    GroupRelation = 0x010,
    /// Free-text note
    Note = 0x011,
    /// Organization
    Company = 0x012,
    /// Application profile entry
    Profile = 0x013,
    /// Relationship to another person
    Relationship = 0x014,
    /// Image
    Image = 0x015,
    /// Nickname
    Nickname = 0x016,
    /// Application-defined extension data
    Extension = 0x017,
    /// Call or message log entry
    PhoneLog = 0x018,
    /// Speed dial slot
    SpeedDial = 0x019,
    /// Service dialing number stored on the SIM
    Sdn = 0x01A,
    /// Change feed entry
    UpdatedInfo = 0x01B,
    /// Aggregate columns of the phone log statistics view
    PhoneLogStat = 0x01C,
}

impl Category {
    /// All categories (for iteration)
    pub const ALL: [Category; 27] = [
        Category::Addressbook,
        Category::Group,
        Category::Person,
        Category::Contact,
        Category::MyProfile,
        Category::Activity,
        Category::ActivityPhoto,
        Category::Name,
        Category::Number,
        Category::Email,
        Category::Address,
        Category::Url,
        Category::Event,
        Category::Messenger,
        Category::GroupRelation,
        Category::Note,
        Category::Company,
        Category::Profile,
        Category::Relationship,
        Category::Image,
        Category::Nickname,
        Category::Extension,
        Category::PhoneLog,
        Category::SpeedDial,
        Category::Sdn,
        Category::UpdatedInfo,
        Category::PhoneLogStat,
    ];

    /// Encoded category bits
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Decode from category bits
    pub const fn from_bits(bits: u16) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i] as u16 == bits {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Category::Addressbook => "addressbook",
            Category::Group => "group",
            Category::Person => "person",
            Category::Contact => "contact",
            Category::MyProfile => "my_profile",
            Category::Activity => "activity",
            Category::ActivityPhoto => "activity_photo",
            Category::Name => "name",
            Category::Number => "number",
            Category::Email => "email",
            Category::Address => "address",
            Category::Url => "url",
            Category::Event => "event",
            Category::Messenger => "messenger",
            Category::GroupRelation => "group_relation",
            Category::Note => "note",
            Category::Company => "company",
            Category::Profile => "profile",
            Category::Relationship => "relationship",
            Category::Image => "image",
            Category::Nickname => "nickname",
            Category::Extension => "extension",
            Category::PhoneLog => "phone_log",
            Category::SpeedDial => "speeddial",
            Category::Sdn => "sdn",
            Category::UpdatedInfo => "updated_info",
            Category::PhoneLogStat => "phone_log_stat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
