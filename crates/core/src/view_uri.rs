//! View URIs
//!
//! A view URI names a record shape: the record type and the ordered set of
//! properties a record created for that view carries. The strings are shared
//! with the storage and IPC collaborators and MUST NOT change.

/// Address book view
pub const ADDRESSBOOK: &str = "tizen.contacts_view.addressbook";
/// Group view
pub const GROUP: &str = "tizen.contacts_view.group";
/// Person view
pub const PERSON: &str = "tizen.contacts_view.person";
/// Simple contact view
pub const SIMPLE_CONTACT: &str = "tizen.contacts_view.simple_contact";
/// Contact view
pub const CONTACT: &str = "tizen.contacts_view.contact";
/// My profile view
pub const MY_PROFILE: &str = "tizen.contacts_view.my_profile";
/// Activity view
pub const ACTIVITY: &str = "tizen.contacts_view.activity";
/// Activity photo view
pub const ACTIVITY_PHOTO: &str = "tizen.contacts_view.activity_photo";
/// Name view
pub const NAME: &str = "tizen.contacts_view.name";
/// Number view
pub const NUMBER: &str = "tizen.contacts_view.number";
/// Email view
pub const EMAIL: &str = "tizen.contacts_view.email";
/// Address view
pub const ADDRESS: &str = "tizen.contacts_view.address";
/// Url view
pub const URL: &str = "tizen.contacts_view.url";
/// Event view
pub const EVENT: &str = "tizen.contacts_view.event";
/// Messenger view
pub const MESSENGER: &str = "tizen.contacts_view.messenger";
/// Group relation view
pub const GROUP_RELATION: &str = "tizen.contacts_view.group_relation";
/// Note view
pub const NOTE: &str = "tizen.contacts_view.note";
/// Company view
pub const COMPANY: &str = "tizen.contacts_view.company";
/// Profile view
pub const PROFILE: &str = "tizen.contacts_view.profile";
/// Relationship view
pub const RELATIONSHIP: &str = "tizen.contacts_view.relationship";
/// Image view
pub const IMAGE: &str = "tizen.contacts_view.image";
/// Nickname view
pub const NICKNAME: &str = "tizen.contacts_view.nickname";
/// Extension view
pub const EXTENSION: &str = "tizen.contacts_view.extension";
/// Phone log view
pub const PHONE_LOG: &str = "tizen.contacts_view.phone_log";
/// Speed dial view
pub const SPEEDDIAL: &str = "tizen.contacts_view.speeddial";
/// Service dialing number view
pub const SDN: &str = "tizen.contacts_view.sdn";

// =============================================================================
// Change Feeds
// =============================================================================

/// Contact change feed
pub const CONTACTS_UPDATED_INFO: &str = "tizen.contacts_view.contacts_updated_info";
/// Group change feed
pub const GROUPS_UPDATED_INFO: &str = "tizen.contacts_view.groups_updated_info";
/// My profile change feed
pub const MY_PROFILE_UPDATED_INFO: &str = "tizen.contacts_view.my_profile_updated_info";

// =============================================================================
// Query-Result Views
// =============================================================================

/// Person joined with its contacts
pub const PERSON_CONTACT: &str = "tizen.contacts_view.person/simple_contact";
/// Person joined with numbers
pub const PERSON_NUMBER: &str = "tizen.contacts_view.person/simple_contact/number";
/// Person joined with emails
pub const PERSON_EMAIL: &str = "tizen.contacts_view.person/simple_contact/email";
/// Person joined with group memberships
pub const PERSON_GROUPREL: &str = "tizen.contacts_view.person/simple_contact/group";
/// Person joined with phone logs
pub const PERSON_PHONE_LOG: &str = "tizen.contacts_view.person/simple_contact/phone_log";
/// Contact joined with numbers
pub const CONTACT_NUMBER: &str = "tizen.contacts_view.simple_contact/number";
/// Contact joined with emails
pub const CONTACT_EMAIL: &str = "tizen.contacts_view.simple_contact/email";
/// Contact joined with group memberships
pub const CONTACT_GROUPREL: &str = "tizen.contacts_view.simple_contact/group";
/// Contact joined with activities
pub const CONTACT_ACTIVITY: &str = "tizen.contacts_view.simple_contact/activity";
/// Phone log counts per type
pub const PHONE_LOG_STAT: &str = "tizen.contacts_view.phone_log/stat";
