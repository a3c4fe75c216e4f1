//! Property identifier constants
//!
//! One submodule per category. Sequence indices are unique within a
//! category and are part of the packed identifier, so existing constants
//! MUST NOT be renumbered; new properties take the next free index.
//!
//! Properties marked filter-only (normalized and cleaned phone numbers, the
//! person favorite priority) exist for query filters. Records do not store
//! them, so typed getters reject them.

use crate::category::Category;
use crate::property_id::{DataType, PropertyId, SearchClass};

const fn rw(category: Category, data_type: DataType, sequence: u8) -> PropertyId {
    PropertyId::new(category, data_type, SearchClass::All, false, sequence)
}

const fn ro(category: Category, data_type: DataType, sequence: u8) -> PropertyId {
    PropertyId::new(category, data_type, SearchClass::All, true, sequence)
}

const fn filter_only(category: Category, data_type: DataType, sequence: u8) -> PropertyId {
    PropertyId::new(category, data_type, SearchClass::Filter, true, sequence)
}

const fn projection_only(category: Category, data_type: DataType, sequence: u8) -> PropertyId {
    PropertyId::new(category, data_type, SearchClass::Projection, true, sequence)
}

const fn child(category: Category, sequence: u8) -> PropertyId {
    PropertyId::new(category, DataType::Record, SearchClass::None, false, sequence)
}

/// Address book properties
pub mod addressbook {
    use super::*;
    const C: Category = Category::Addressbook;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning account
    pub const ACCOUNT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Display name of the address book
    pub const NAME: PropertyId = rw(C, DataType::Str, 2);
    /// Access mode (read-write or read-only)
    pub const MODE: PropertyId = rw(C, DataType::Int, 3);
}

/// Group properties
pub mod group {
    use super::*;
    const C: Category = Category::Group;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Address book the group belongs to
    pub const ADDRESSBOOK_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Group name
    pub const NAME: PropertyId = rw(C, DataType::Str, 2);
    /// Ringtone path
    pub const RINGTONE_PATH: PropertyId = rw(C, DataType::Str, 3);
    /// Image path
    pub const IMAGE_PATH: PropertyId = rw(C, DataType::Str, 4);
    /// Vibration pattern
    pub const VIBRATION: PropertyId = rw(C, DataType::Str, 5);
    /// Message alert tone
    pub const MESSAGE_ALERT: PropertyId = rw(C, DataType::Str, 6);
    /// Application-defined data
    pub const EXTRA_DATA: PropertyId = rw(C, DataType::Str, 7);
    /// System groups cannot be edited
    pub const IS_READ_ONLY: PropertyId = ro(C, DataType::Bool, 8);
}

/// Person properties
pub mod person {
    use super::*;
    const C: Category = Category::Person;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Display name, derived from the display contact
    pub const DISPLAY_NAME: PropertyId = ro(C, DataType::Str, 1);
    /// Index letter of the display name
    pub const DISPLAY_NAME_INDEX: PropertyId = ro(C, DataType::Str, 2);
    /// Contact whose name is displayed
    pub const DISPLAY_CONTACT_ID: PropertyId = rw(C, DataType::Int, 3);
    /// Ringtone path
    pub const RINGTONE_PATH: PropertyId = rw(C, DataType::Str, 4);
    /// Thumbnail image path
    pub const IMAGE_THUMBNAIL_PATH: PropertyId = rw(C, DataType::Str, 5);
    /// Vibration pattern
    pub const VIBRATION: PropertyId = rw(C, DataType::Str, 6);
    /// Message alert tone
    pub const MESSAGE_ALERT: PropertyId = rw(C, DataType::Str, 7);
    /// Latest activity status
    pub const STATUS: PropertyId = ro(C, DataType::Str, 8);
    /// Favorite flag
    pub const IS_FAVORITE: PropertyId = rw(C, DataType::Bool, 9);
    /// Ordering among favorites
    pub const FAVORITE_PRIORITY: PropertyId = filter_only(C, DataType::Double, 10);
    /// Number of linked contacts
    pub const LINK_COUNT: PropertyId = ro(C, DataType::Int, 11);
    /// Address books of the linked contacts, space separated
    pub const ADDRESSBOOK_IDS: PropertyId = projection_only(C, DataType::Str, 12);
    /// Whether any linked contact has a number
    pub const HAS_PHONENUMBER: PropertyId = ro(C, DataType::Bool, 13);
    /// Whether any linked contact has an email
    pub const HAS_EMAIL: PropertyId = ro(C, DataType::Bool, 14);
}

/// Contact properties, shared with simple contact views
pub mod contact {
    use super::*;
    const C: Category = Category::Contact;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Display name, derived from the name child
    pub const DISPLAY_NAME: PropertyId = ro(C, DataType::Str, 1);
    /// Which child the display name was derived from
    pub const DISPLAY_SOURCE_TYPE: PropertyId = ro(C, DataType::Int, 2);
    /// Address book the contact belongs to
    pub const ADDRESSBOOK_ID: PropertyId = rw(C, DataType::Int, 3);
    /// Ringtone path
    pub const RINGTONE_PATH: PropertyId = rw(C, DataType::Str, 4);
    /// Thumbnail image path
    pub const IMAGE_THUMBNAIL_PATH: PropertyId = rw(C, DataType::Str, 5);
    /// Favorite flag
    pub const IS_FAVORITE: PropertyId = rw(C, DataType::Bool, 6);
    /// Whether the contact has a number
    pub const HAS_PHONENUMBER: PropertyId = ro(C, DataType::Bool, 7);
    /// Whether the contact has an email
    pub const HAS_EMAIL: PropertyId = ro(C, DataType::Bool, 8);
    /// Person the contact is linked to
    pub const PERSON_ID: PropertyId = rw(C, DataType::Int, 9);
    /// Application-defined unique id
    pub const UID: PropertyId = rw(C, DataType::Str, 10);
    /// Vibration pattern
    pub const VIBRATION: PropertyId = rw(C, DataType::Str, 11);
    /// Message alert tone
    pub const MESSAGE_ALERT: PropertyId = rw(C, DataType::Str, 12);
    /// Version of the last change
    pub const CHANGED_TIME: PropertyId = ro(C, DataType::Int, 13);
    /// Linking mode on insert
    pub const LINK_MODE: PropertyId = rw(C, DataType::Int, 14);
    /// Name child (at most one)
    pub const NAME: PropertyId = child(C, 15);
    /// Company children
    pub const COMPANY: PropertyId = child(C, 16);
    /// Note children
    pub const NOTE: PropertyId = child(C, 17);
    /// Number children
    pub const NUMBER: PropertyId = child(C, 18);
    /// Email children
    pub const EMAIL: PropertyId = child(C, 19);
    /// Event children
    pub const EVENT: PropertyId = child(C, 20);
    /// Messenger children
    pub const MESSENGER: PropertyId = child(C, 21);
    /// Address children
    pub const ADDRESS: PropertyId = child(C, 22);
    /// Url children
    pub const URL: PropertyId = child(C, 23);
    /// Nickname children
    pub const NICKNAME: PropertyId = child(C, 24);
    /// Profile children
    pub const PROFILE: PropertyId = child(C, 25);
    /// Relationship children
    pub const RELATIONSHIP: PropertyId = child(C, 26);
    /// Image children
    pub const IMAGE: PropertyId = child(C, 27);
    /// Group relation children
    pub const GROUP_RELATION: PropertyId = child(C, 28);
    /// Extension children
    pub const EXTENSION: PropertyId = child(C, 29);
}

/// My profile properties
pub mod my_profile {
    use super::*;
    const C: Category = Category::MyProfile;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Display name, derived from the name child
    pub const DISPLAY_NAME: PropertyId = ro(C, DataType::Str, 1);
    /// Address book the profile belongs to
    pub const ADDRESSBOOK_ID: PropertyId = rw(C, DataType::Int, 2);
    /// Thumbnail image path
    pub const IMAGE_THUMBNAIL_PATH: PropertyId = rw(C, DataType::Str, 3);
    /// Application-defined unique id
    pub const UID: PropertyId = rw(C, DataType::Str, 4);
    /// Version of the last change
    pub const CHANGED_TIME: PropertyId = ro(C, DataType::Int, 5);
    /// Name child (at most one)
    pub const NAME: PropertyId = child(C, 6);
    /// Company children
    pub const COMPANY: PropertyId = child(C, 7);
    /// Note children
    pub const NOTE: PropertyId = child(C, 8);
    /// Number children
    pub const NUMBER: PropertyId = child(C, 9);
    /// Email children
    pub const EMAIL: PropertyId = child(C, 10);
    /// Event children
    pub const EVENT: PropertyId = child(C, 11);
    /// Messenger children
    pub const MESSENGER: PropertyId = child(C, 12);
    /// Address children
    pub const ADDRESS: PropertyId = child(C, 13);
    /// Url children
    pub const URL: PropertyId = child(C, 14);
    /// Nickname children
    pub const NICKNAME: PropertyId = child(C, 15);
    /// Profile children
    pub const PROFILE: PropertyId = child(C, 16);
    /// Relationship children
    pub const RELATIONSHIP: PropertyId = child(C, 17);
    /// Image children
    pub const IMAGE: PropertyId = child(C, 18);
    /// Extension children
    pub const EXTENSION: PropertyId = child(C, 19);
}

/// Activity properties
pub mod activity {
    use super::*;
    const C: Category = Category::Activity;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Contact the activity belongs to
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Originating service
    pub const SOURCE_NAME: PropertyId = rw(C, DataType::Str, 2);
    /// Status text
    pub const STATUS: PropertyId = rw(C, DataType::Str, 3);
    /// Time of the activity, seconds since the epoch
    pub const TIMESTAMP: PropertyId = rw(C, DataType::Int, 4);
    /// Service operation to launch
    pub const SERVICE_OPERATION: PropertyId = rw(C, DataType::Str, 5);
    /// Resource uri
    pub const URI: PropertyId = rw(C, DataType::Str, 6);
    /// Photo children
    pub const PHOTO: PropertyId = child(C, 7);
}

/// Activity photo properties
pub mod activity_photo {
    use super::*;
    const C: Category = Category::ActivityPhoto;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning activity
    pub const ACTIVITY_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Photo location
    pub const PHOTO_URL: PropertyId = rw(C, DataType::Str, 2);
    /// Display order
    pub const SORT_INDEX: PropertyId = rw(C, DataType::Int, 3);
}

/// Name properties
pub mod name {
    use super::*;
    const C: Category = Category::Name;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Given name
    pub const FIRST: PropertyId = rw(C, DataType::Str, 2);
    /// Family name
    pub const LAST: PropertyId = rw(C, DataType::Str, 3);
    /// Middle name
    pub const ADDITION: PropertyId = rw(C, DataType::Str, 4);
    /// Suffix
    pub const SUFFIX: PropertyId = rw(C, DataType::Str, 5);
    /// Prefix
    pub const PREFIX: PropertyId = rw(C, DataType::Str, 6);
    /// Phonetic given name
    pub const PHONETIC_FIRST: PropertyId = rw(C, DataType::Str, 7);
    /// Phonetic middle name
    pub const PHONETIC_MIDDLE: PropertyId = rw(C, DataType::Str, 8);
    /// Phonetic family name
    pub const PHONETIC_LAST: PropertyId = rw(C, DataType::Str, 9);
}

/// Number properties
pub mod number {
    use super::*;
    const C: Category = Category::Number;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Number type bits
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Default number of the contact
    pub const IS_DEFAULT: PropertyId = rw(C, DataType::Bool, 4);
    /// The number as entered
    pub const NUMBER: PropertyId = rw(C, DataType::Str, 5);
    /// Normalized form used for matching
    pub const NORMALIZED_NUMBER: PropertyId = filter_only(C, DataType::Str, 6);
    /// Digits-only form
    pub const CLEANED_NUMBER: PropertyId = filter_only(C, DataType::Str, 7);
    /// Match against both normalized and cleaned forms
    pub const NUMBER_FILTER: PropertyId = filter_only(C, DataType::Str, 8);
}

/// Email properties
pub mod email {
    use super::*;
    const C: Category = Category::Email;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Email type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Default email of the contact
    pub const IS_DEFAULT: PropertyId = rw(C, DataType::Bool, 4);
    /// The address
    pub const EMAIL: PropertyId = rw(C, DataType::Str, 5);
}

/// Postal address properties
pub mod address {
    use super::*;
    const C: Category = Category::Address;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Address type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Post office box
    pub const POSTBOX: PropertyId = rw(C, DataType::Str, 4);
    /// Postal code
    pub const POSTAL_CODE: PropertyId = rw(C, DataType::Str, 5);
    /// Region or state
    pub const REGION: PropertyId = rw(C, DataType::Str, 6);
    /// City
    pub const LOCALITY: PropertyId = rw(C, DataType::Str, 7);
    /// Street
    pub const STREET: PropertyId = rw(C, DataType::Str, 8);
    /// Country
    pub const COUNTRY: PropertyId = rw(C, DataType::Str, 9);
    /// Extended address
    pub const EXTENDED: PropertyId = rw(C, DataType::Str, 10);
    /// Default address of the contact
    pub const IS_DEFAULT: PropertyId = rw(C, DataType::Bool, 11);
}

/// Url properties
pub mod url {
    use super::*;
    const C: Category = Category::Url;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Url type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// The url
    pub const URL: PropertyId = rw(C, DataType::Str, 4);
}

/// Event properties
pub mod event {
    use super::*;
    const C: Category = Category::Event;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Event type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Date as YYYYMMDD
    pub const DATE: PropertyId = rw(C, DataType::Int, 4);
    /// Calendar system of the date
    pub const CALENDAR_TYPE: PropertyId = rw(C, DataType::Int, 5);
    /// Leap month in lunar calendars
    pub const IS_LEAP_MONTH: PropertyId = rw(C, DataType::Bool, 6);
}

/// Messenger properties
pub mod messenger {
    use super::*;
    const C: Category = Category::Messenger;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Messenger service type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Handle on the service
    pub const IM_ID: PropertyId = rw(C, DataType::Str, 4);
}

/// Group relation properties
pub mod group_relation {
    use super::*;
    const C: Category = Category::GroupRelation;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Group
    pub const GROUP_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Member contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 2);
    /// Group name, filled in by storage
    pub const NAME: PropertyId = ro(C, DataType::Str, 3);
}

/// Note properties
pub mod note {
    use super::*;
    const C: Category = Category::Note;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Note text
    pub const NOTE: PropertyId = rw(C, DataType::Str, 2);
}

/// Company properties
pub mod company {
    use super::*;
    const C: Category = Category::Company;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Company type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Organization name
    pub const NAME: PropertyId = rw(C, DataType::Str, 4);
    /// Department
    pub const DEPARTMENT: PropertyId = rw(C, DataType::Str, 5);
    /// Job title
    pub const JOB_TITLE: PropertyId = rw(C, DataType::Str, 6);
    /// Assistant name
    pub const ASSISTANT_NAME: PropertyId = rw(C, DataType::Str, 7);
    /// Role
    pub const ROLE: PropertyId = rw(C, DataType::Str, 8);
    /// Logo image path
    pub const LOGO: PropertyId = rw(C, DataType::Str, 9);
    /// Location
    pub const LOCATION: PropertyId = rw(C, DataType::Str, 10);
    /// Description
    pub const DESCRIPTION: PropertyId = rw(C, DataType::Str, 11);
    /// Phonetic organization name
    pub const PHONETIC_NAME: PropertyId = rw(C, DataType::Str, 12);
}

/// Profile properties
pub mod profile {
    use super::*;
    const C: Category = Category::Profile;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Application-defined unique id
    pub const UID: PropertyId = rw(C, DataType::Str, 2);
    /// Display text
    pub const TEXT: PropertyId = rw(C, DataType::Str, 3);
    /// Display order
    pub const ORDER: PropertyId = rw(C, DataType::Int, 4);
    /// Service operation to launch
    pub const SERVICE_OPERATION: PropertyId = rw(C, DataType::Str, 5);
    /// Mime type
    pub const MIME: PropertyId = rw(C, DataType::Str, 6);
    /// Application id
    pub const APP_ID: PropertyId = rw(C, DataType::Str, 7);
    /// Resource uri
    pub const URI: PropertyId = rw(C, DataType::Str, 8);
    /// Category
    pub const CATEGORY: PropertyId = rw(C, DataType::Str, 9);
    /// Application-defined data
    pub const EXTRA_DATA: PropertyId = rw(C, DataType::Str, 10);
}

/// Relationship properties
pub mod relationship {
    use super::*;
    const C: Category = Category::Relationship;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Relationship type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Name of the related person
    pub const NAME: PropertyId = rw(C, DataType::Str, 4);
}

/// Image properties
pub mod image {
    use super::*;
    const C: Category = Category::Image;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Image type
    pub const TYPE: PropertyId = rw(C, DataType::Int, 2);
    /// Custom type label
    pub const LABEL: PropertyId = rw(C, DataType::Str, 3);
    /// Image file path
    pub const PATH: PropertyId = rw(C, DataType::Str, 4);
    /// Default image of the contact
    pub const IS_DEFAULT: PropertyId = rw(C, DataType::Bool, 5);
}

/// Nickname properties
pub mod nickname {
    use super::*;
    const C: Category = Category::Nickname;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// The nickname
    pub const NAME: PropertyId = rw(C, DataType::Str, 2);
}

/// Extension properties
pub mod extension {
    use super::*;
    const C: Category = Category::Extension;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Owning contact
    pub const CONTACT_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Integer slot
    pub const DATA1: PropertyId = rw(C, DataType::Int, 2);
    /// String slot 2
    pub const DATA2: PropertyId = rw(C, DataType::Str, 3);
    /// String slot 3
    pub const DATA3: PropertyId = rw(C, DataType::Str, 4);
    /// String slot 4
    pub const DATA4: PropertyId = rw(C, DataType::Str, 5);
    /// String slot 5
    pub const DATA5: PropertyId = rw(C, DataType::Str, 6);
    /// String slot 6
    pub const DATA6: PropertyId = rw(C, DataType::Str, 7);
    /// String slot 7
    pub const DATA7: PropertyId = rw(C, DataType::Str, 8);
    /// String slot 8
    pub const DATA8: PropertyId = rw(C, DataType::Str, 9);
    /// String slot 9
    pub const DATA9: PropertyId = rw(C, DataType::Str, 10);
    /// String slot 10
    pub const DATA10: PropertyId = rw(C, DataType::Str, 11);
    /// String slot 11
    pub const DATA11: PropertyId = rw(C, DataType::Str, 12);
    /// String slot 12
    pub const DATA12: PropertyId = rw(C, DataType::Str, 13);

    /// String slots in order, `DATA2` first
    pub const STRING_SLOTS: [PropertyId; 11] = [
        DATA2, DATA3, DATA4, DATA5, DATA6, DATA7, DATA8, DATA9, DATA10, DATA11, DATA12,
    ];
}

/// Phone log properties
pub mod phone_log {
    use super::*;
    const C: Category = Category::PhoneLog;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Person matched to the address
    pub const PERSON_ID: PropertyId = rw(C, DataType::Int, 1);
    /// Number or email address of the other party
    pub const ADDRESS: PropertyId = rw(C, DataType::Str, 2);
    /// Time of the log, seconds since the epoch
    pub const LOG_TIME: PropertyId = rw(C, DataType::Int, 3);
    /// Call or message kind
    pub const LOG_TYPE: PropertyId = rw(C, DataType::Int, 4);
    /// Call duration or message id
    pub const EXTRA_DATA1: PropertyId = rw(C, DataType::Int, 5);
    /// Message subject or short text
    pub const EXTRA_DATA2: PropertyId = rw(C, DataType::Str, 6);
    /// Normalized address used for matching
    pub const NORMALIZED_ADDRESS: PropertyId = filter_only(C, DataType::Str, 7);
    /// Digits-only address
    pub const CLEANED_ADDRESS: PropertyId = filter_only(C, DataType::Str, 8);
    /// Match against both normalized and cleaned forms
    pub const ADDRESS_FILTER: PropertyId = filter_only(C, DataType::Str, 9);
    /// SIM slot the call went through
    pub const SIM_SLOT_NO: PropertyId = rw(C, DataType::Int, 10);
}

/// Speed dial properties
pub mod speeddial {
    use super::*;
    const C: Category = Category::SpeedDial;

    /// Dial slot
    pub const SPEEDDIAL_NUMBER: PropertyId = rw(C, DataType::Int, 0);
    /// Number row the slot points at
    pub const NUMBER_ID: PropertyId = rw(C, DataType::Int, 1);
    /// The number, filled in by storage
    pub const NUMBER: PropertyId = ro(C, DataType::Str, 2);
    /// Label of the number
    pub const NUMBER_LABEL: PropertyId = ro(C, DataType::Str, 3);
    /// Type of the number
    pub const NUMBER_TYPE: PropertyId = ro(C, DataType::Int, 4);
    /// Person owning the number
    pub const PERSON_ID: PropertyId = ro(C, DataType::Int, 5);
    /// Display name of the person
    pub const DISPLAY_NAME: PropertyId = ro(C, DataType::Str, 6);
    /// Thumbnail of the person
    pub const IMAGE_THUMBNAIL_PATH: PropertyId = ro(C, DataType::Str, 7);
    /// Normalized number used for matching
    pub const NORMALIZED_NUMBER: PropertyId = filter_only(C, DataType::Str, 8);
    /// Digits-only number
    pub const CLEANED_NUMBER: PropertyId = filter_only(C, DataType::Str, 9);
    /// Match against both normalized and cleaned forms
    pub const NUMBER_FILTER: PropertyId = filter_only(C, DataType::Str, 10);
}

/// Service dialing number properties
pub mod sdn {
    use super::*;
    const C: Category = Category::Sdn;

    /// Row id
    pub const ID: PropertyId = ro(C, DataType::Int, 0);
    /// Service name
    pub const NAME: PropertyId = rw(C, DataType::Str, 1);
    /// Service number
    pub const NUMBER: PropertyId = rw(C, DataType::Str, 2);
    /// SIM slot the entry was read from
    pub const SIM_SLOT_NO: PropertyId = rw(C, DataType::Int, 3);
}

/// Change feed properties
///
/// All read-only: the feed is produced by storage.
pub mod updated_info {
    use super::*;
    const C: Category = Category::UpdatedInfo;

    /// Changed contact
    pub const CONTACT_ID: PropertyId = ro(C, DataType::Int, 0);
    /// Address book of the changed entity
    pub const ADDRESSBOOK_ID: PropertyId = ro(C, DataType::Int, 1);
    /// Inserted, updated or deleted
    pub const TYPE: PropertyId = ro(C, DataType::Int, 2);
    /// Version of the change
    pub const VERSION: PropertyId = ro(C, DataType::Int, 3);
    /// Whether the contact image changed
    pub const IMAGE_CHANGED: PropertyId = ro(C, DataType::Bool, 4);
    /// Changed group
    pub const GROUP_ID: PropertyId = ro(C, DataType::Int, 5);
    /// Kind of the last change to the profile
    pub const LAST_CHANGED_TYPE: PropertyId = ro(C, DataType::Int, 6);
}

/// Phone log statistics properties
pub mod phone_log_stat {
    use super::*;
    const C: Category = Category::PhoneLogStat;

    /// Number of logs of the type
    pub const LOG_COUNT: PropertyId = ro(C, DataType::Int, 0);
    /// Call or message kind
    pub const LOG_TYPE: PropertyId = ro(C, DataType::Int, 1);
    /// SIM slot
    pub const SIM_SLOT_NO: PropertyId = ro(C, DataType::Int, 2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_layout() {
        assert_eq!(contact::ID.raw(), 0x0051_2100);
        assert_eq!(contact::ID.category(), Some(Category::Contact));
        assert!(contact::ID.is_read_only());
    }

    #[test]
    fn test_child_properties_are_records() {
        for id in [contact::NAME, contact::NUMBER, my_profile::EXTENSION, activity::PHOTO] {
            assert_eq!(id.data_type(), Some(DataType::Record));
            assert_eq!(id.search_class(), Some(SearchClass::None));
            assert!(!id.is_read_only());
        }
    }

    #[test]
    fn test_filter_only_properties() {
        for id in [
            number::NORMALIZED_NUMBER,
            phone_log::ADDRESS_FILTER,
            person::FAVORITE_PRIORITY,
        ] {
            let class = id.search_class().unwrap();
            assert!(class.allows_filter());
            assert!(!class.allows_projection());
        }
    }

    #[test]
    fn test_extension_string_slots_are_consecutive() {
        for (i, id) in extension::STRING_SLOTS.iter().enumerate() {
            assert_eq!(id.sequence() as usize, i + 3);
            assert_eq!(id.data_type(), Some(DataType::Str));
        }
    }
}
