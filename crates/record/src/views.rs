//! View descriptor tables
//!
//! One table per view. Table order is the flag-array order for records of
//! that view, so properties are listed in sequence order where the view has
//! a single category; this makes index lookup O(1) for those views.
//! Column hints are consumed only by the SQL collaborator.

use contacts_core::properties::{
    activity, activity_photo, address, addressbook, company, contact, email, event, extension,
    group, group_relation, image, messenger, my_profile, name, nickname, note, number, person,
    phone_log, phone_log_stat, profile, relationship, sdn, speeddial, updated_info, url,
};
use contacts_core::{view_uri, RecordType};

use crate::registry::{PropertyDescriptor as P, ViewDescriptor};

// =============================================================================
// Entity Views
// =============================================================================

const ADDRESSBOOK: &[P] = &[
    P::column(addressbook::ID, "addressbook_id"),
    P::column(addressbook::ACCOUNT_ID, "account_id"),
    P::column(addressbook::NAME, "addressbook_name"),
    P::column(addressbook::MODE, "mode"),
];

const GROUP: &[P] = &[
    P::column(group::ID, "group_id"),
    P::column(group::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(group::NAME, "group_name"),
    P::column(group::RINGTONE_PATH, "ringtone_path"),
    P::column(group::IMAGE_PATH, "image_thumbnail_path"),
    P::column(group::VIBRATION, "vibration"),
    P::column(group::MESSAGE_ALERT, "message_alert"),
    P::column(group::EXTRA_DATA, "extra_data"),
    P::column(group::IS_READ_ONLY, "is_read_only"),
];

const PERSON: &[P] = &[
    P::column(person::ID, "person_id"),
    P::column(person::DISPLAY_NAME, "display_name"),
    P::column(person::DISPLAY_NAME_INDEX, "sortkey"),
    P::column(person::DISPLAY_CONTACT_ID, "name_contact_id"),
    P::column(person::RINGTONE_PATH, "ringtone_path"),
    P::column(person::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(person::VIBRATION, "vibration"),
    P::column(person::MESSAGE_ALERT, "message_alert"),
    P::column(person::STATUS, "status"),
    P::column(person::IS_FAVORITE, "is_favorite"),
    P::column(person::FAVORITE_PRIORITY, "favorite_prio"),
    P::column(person::LINK_COUNT, "link_count"),
    P::column(person::ADDRESSBOOK_IDS, "addressbook_ids"),
    P::column(person::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(person::HAS_EMAIL, "has_email"),
];

const NAME: &[P] = &[
    P::column(name::ID, "id"),
    P::column(name::CONTACT_ID, "contact_id"),
    P::column(name::FIRST, "data2"),
    P::column(name::LAST, "data3"),
    P::column(name::ADDITION, "data4"),
    P::column(name::SUFFIX, "data5"),
    P::column(name::PREFIX, "data6"),
    P::column(name::PHONETIC_FIRST, "data7"),
    P::column(name::PHONETIC_MIDDLE, "data8"),
    P::column(name::PHONETIC_LAST, "data9"),
];

const NUMBER: &[P] = &[
    P::column(number::ID, "id"),
    P::column(number::CONTACT_ID, "contact_id"),
    P::column(number::TYPE, "data1"),
    P::column(number::LABEL, "data2"),
    P::column(number::IS_DEFAULT, "is_default"),
    P::column(number::NUMBER, "data3"),
    P::column(number::NORMALIZED_NUMBER, "data4"),
    P::column(number::CLEANED_NUMBER, "data5"),
    P::column(number::NUMBER_FILTER, "data6"),
];

const EMAIL: &[P] = &[
    P::column(email::ID, "id"),
    P::column(email::CONTACT_ID, "contact_id"),
    P::column(email::TYPE, "data1"),
    P::column(email::LABEL, "data2"),
    P::column(email::IS_DEFAULT, "is_default"),
    P::column(email::EMAIL, "data3"),
];

const ADDRESS: &[P] = &[
    P::column(address::ID, "id"),
    P::column(address::CONTACT_ID, "contact_id"),
    P::column(address::TYPE, "data1"),
    P::column(address::LABEL, "data2"),
    P::column(address::POSTBOX, "data3"),
    P::column(address::POSTAL_CODE, "data4"),
    P::column(address::REGION, "data5"),
    P::column(address::LOCALITY, "data6"),
    P::column(address::STREET, "data7"),
    P::column(address::COUNTRY, "data8"),
    P::column(address::EXTENDED, "data9"),
    P::column(address::IS_DEFAULT, "is_default"),
];

const URL: &[P] = &[
    P::column(url::ID, "id"),
    P::column(url::CONTACT_ID, "contact_id"),
    P::column(url::TYPE, "data1"),
    P::column(url::LABEL, "data2"),
    P::column(url::URL, "data3"),
];

const EVENT: &[P] = &[
    P::column(event::ID, "id"),
    P::column(event::CONTACT_ID, "contact_id"),
    P::column(event::TYPE, "data1"),
    P::column(event::LABEL, "data2"),
    P::column(event::DATE, "data3"),
    P::column(event::CALENDAR_TYPE, "data4"),
    P::column(event::IS_LEAP_MONTH, "data5"),
];

const MESSENGER: &[P] = &[
    P::column(messenger::ID, "id"),
    P::column(messenger::CONTACT_ID, "contact_id"),
    P::column(messenger::TYPE, "data1"),
    P::column(messenger::LABEL, "data2"),
    P::column(messenger::IM_ID, "data3"),
];

const GROUP_RELATION: &[P] = &[
    P::column(group_relation::ID, "id"),
    P::column(group_relation::GROUP_ID, "group_id"),
    P::column(group_relation::CONTACT_ID, "contact_id"),
    P::column(group_relation::NAME, "group_name"),
];

const NOTE: &[P] = &[
    P::column(note::ID, "id"),
    P::column(note::CONTACT_ID, "contact_id"),
    P::column(note::NOTE, "data3"),
];

const COMPANY: &[P] = &[
    P::column(company::ID, "id"),
    P::column(company::CONTACT_ID, "contact_id"),
    P::column(company::TYPE, "data1"),
    P::column(company::LABEL, "data2"),
    P::column(company::NAME, "data3"),
    P::column(company::DEPARTMENT, "data4"),
    P::column(company::JOB_TITLE, "data5"),
    P::column(company::ASSISTANT_NAME, "data6"),
    P::column(company::ROLE, "data7"),
    P::column(company::LOGO, "data8"),
    P::column(company::LOCATION, "data9"),
    P::column(company::DESCRIPTION, "data10"),
    P::column(company::PHONETIC_NAME, "data11"),
];

const PROFILE: &[P] = &[
    P::column(profile::ID, "id"),
    P::column(profile::CONTACT_ID, "contact_id"),
    P::column(profile::UID, "data3"),
    P::column(profile::TEXT, "data4"),
    P::column(profile::ORDER, "data5"),
    P::column(profile::SERVICE_OPERATION, "data6"),
    P::column(profile::MIME, "data7"),
    P::column(profile::APP_ID, "data8"),
    P::column(profile::URI, "data9"),
    P::column(profile::CATEGORY, "data10"),
    P::column(profile::EXTRA_DATA, "data11"),
];

const RELATIONSHIP: &[P] = &[
    P::column(relationship::ID, "id"),
    P::column(relationship::CONTACT_ID, "contact_id"),
    P::column(relationship::TYPE, "data1"),
    P::column(relationship::LABEL, "data2"),
    P::column(relationship::NAME, "data3"),
];

const IMAGE: &[P] = &[
    P::column(image::ID, "id"),
    P::column(image::CONTACT_ID, "contact_id"),
    P::column(image::TYPE, "data1"),
    P::column(image::LABEL, "data2"),
    P::column(image::PATH, "data3"),
    P::column(image::IS_DEFAULT, "is_default"),
];

const NICKNAME: &[P] = &[
    P::column(nickname::ID, "id"),
    P::column(nickname::CONTACT_ID, "contact_id"),
    P::column(nickname::NAME, "data3"),
];

const EXTENSION: &[P] = &[
    P::column(extension::ID, "id"),
    P::column(extension::CONTACT_ID, "contact_id"),
    P::column(extension::DATA1, "data1"),
    P::column(extension::DATA2, "data2"),
    P::column(extension::DATA3, "data3"),
    P::column(extension::DATA4, "data4"),
    P::column(extension::DATA5, "data5"),
    P::column(extension::DATA6, "data6"),
    P::column(extension::DATA7, "data7"),
    P::column(extension::DATA8, "data8"),
    P::column(extension::DATA9, "data9"),
    P::column(extension::DATA10, "data10"),
    P::column(extension::DATA11, "data11"),
    P::column(extension::DATA12, "data12"),
];

const CONTACT: &[P] = &[
    P::column(contact::ID, "contact_id"),
    P::column(contact::DISPLAY_NAME, "display_name"),
    P::column(contact::DISPLAY_SOURCE_TYPE, "display_name_source"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(contact::RINGTONE_PATH, "ringtone_path"),
    P::column(contact::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(contact::IS_FAVORITE, "is_favorite"),
    P::column(contact::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(contact::HAS_EMAIL, "has_email"),
    P::column(contact::PERSON_ID, "person_id"),
    P::column(contact::UID, "uid"),
    P::column(contact::VIBRATION, "vibration"),
    P::column(contact::MESSAGE_ALERT, "message_alert"),
    P::column(contact::CHANGED_TIME, "changed_ver"),
    P::column(contact::LINK_MODE, "link_mode"),
    P::child(contact::NAME, NAME),
    P::child(contact::COMPANY, COMPANY),
    P::child(contact::NOTE, NOTE),
    P::child(contact::NUMBER, NUMBER),
    P::child(contact::EMAIL, EMAIL),
    P::child(contact::EVENT, EVENT),
    P::child(contact::MESSENGER, MESSENGER),
    P::child(contact::ADDRESS, ADDRESS),
    P::child(contact::URL, URL),
    P::child(contact::NICKNAME, NICKNAME),
    P::child(contact::PROFILE, PROFILE),
    P::child(contact::RELATIONSHIP, RELATIONSHIP),
    P::child(contact::IMAGE, IMAGE),
    P::child(contact::GROUP_RELATION, GROUP_RELATION),
    P::child(contact::EXTENSION, EXTENSION),
];

const SIMPLE_CONTACT: &[P] = &[
    P::column(contact::ID, "contact_id"),
    P::column(contact::DISPLAY_NAME, "display_name"),
    P::column(contact::DISPLAY_SOURCE_TYPE, "display_name_source"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(contact::RINGTONE_PATH, "ringtone_path"),
    P::column(contact::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(contact::IS_FAVORITE, "is_favorite"),
    P::column(contact::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(contact::HAS_EMAIL, "has_email"),
    P::column(contact::PERSON_ID, "person_id"),
    P::column(contact::UID, "uid"),
    P::column(contact::VIBRATION, "vibration"),
    P::column(contact::MESSAGE_ALERT, "message_alert"),
    P::column(contact::CHANGED_TIME, "changed_ver"),
    P::column(contact::LINK_MODE, "link_mode"),
    P::child(contact::GROUP_RELATION, GROUP_RELATION),
];

const MY_PROFILE: &[P] = &[
    P::column(my_profile::ID, "my_profile_id"),
    P::column(my_profile::DISPLAY_NAME, "display_name"),
    P::column(my_profile::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(my_profile::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(my_profile::UID, "uid"),
    P::column(my_profile::CHANGED_TIME, "changed_ver"),
    P::child(my_profile::NAME, NAME),
    P::child(my_profile::COMPANY, COMPANY),
    P::child(my_profile::NOTE, NOTE),
    P::child(my_profile::NUMBER, NUMBER),
    P::child(my_profile::EMAIL, EMAIL),
    P::child(my_profile::EVENT, EVENT),
    P::child(my_profile::MESSENGER, MESSENGER),
    P::child(my_profile::ADDRESS, ADDRESS),
    P::child(my_profile::URL, URL),
    P::child(my_profile::NICKNAME, NICKNAME),
    P::child(my_profile::PROFILE, PROFILE),
    P::child(my_profile::RELATIONSHIP, RELATIONSHIP),
    P::child(my_profile::IMAGE, IMAGE),
    P::child(my_profile::EXTENSION, EXTENSION),
];

const ACTIVITY_PHOTO: &[P] = &[
    P::column(activity_photo::ID, "id"),
    P::column(activity_photo::ACTIVITY_ID, "activity_id"),
    P::column(activity_photo::PHOTO_URL, "photo_url"),
    P::column(activity_photo::SORT_INDEX, "sort_index"),
];

const ACTIVITY: &[P] = &[
    P::column(activity::ID, "id"),
    P::column(activity::CONTACT_ID, "contact_id"),
    P::column(activity::SOURCE_NAME, "source_name"),
    P::column(activity::STATUS, "status"),
    P::column(activity::TIMESTAMP, "timestamp"),
    P::column(activity::SERVICE_OPERATION, "service_operation"),
    P::column(activity::URI, "uri"),
    P::child(activity::PHOTO, ACTIVITY_PHOTO),
];

const PHONE_LOG: &[P] = &[
    P::column(phone_log::ID, "id"),
    P::column(phone_log::PERSON_ID, "person_id"),
    P::column(phone_log::ADDRESS, "number"),
    P::column(phone_log::LOG_TIME, "log_time"),
    P::column(phone_log::LOG_TYPE, "log_type"),
    P::column(phone_log::EXTRA_DATA1, "data1"),
    P::column(phone_log::EXTRA_DATA2, "data2"),
    P::column(phone_log::NORMALIZED_ADDRESS, "normal_num"),
    P::column(phone_log::CLEANED_ADDRESS, "clean_num"),
    P::column(phone_log::ADDRESS_FILTER, "address_filter"),
    P::column(phone_log::SIM_SLOT_NO, "sim_id"),
];

const SPEEDDIAL: &[P] = &[
    P::column(speeddial::SPEEDDIAL_NUMBER, "speed_number"),
    P::column(speeddial::NUMBER_ID, "number_id"),
    P::column(speeddial::NUMBER, "number"),
    P::column(speeddial::NUMBER_LABEL, "label"),
    P::column(speeddial::NUMBER_TYPE, "type"),
    P::column(speeddial::PERSON_ID, "person_id"),
    P::column(speeddial::DISPLAY_NAME, "display_name"),
    P::column(speeddial::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(speeddial::NORMALIZED_NUMBER, "normalized_number"),
    P::column(speeddial::CLEANED_NUMBER, "cleaned_number"),
    P::column(speeddial::NUMBER_FILTER, "number_filter"),
];

const SDN: &[P] = &[
    P::column(sdn::ID, "id"),
    P::column(sdn::NAME, "name"),
    P::column(sdn::NUMBER, "number"),
    P::column(sdn::SIM_SLOT_NO, "sim_id"),
];

// =============================================================================
// Change Feeds
// =============================================================================

const CONTACTS_UPDATED_INFO: &[P] = &[
    P::column(updated_info::CONTACT_ID, "contact_id"),
    P::column(updated_info::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(updated_info::TYPE, "type"),
    P::column(updated_info::VERSION, "version"),
    P::column(updated_info::IMAGE_CHANGED, "image_changed"),
];

const GROUPS_UPDATED_INFO: &[P] = &[
    P::column(updated_info::GROUP_ID, "group_id"),
    P::column(updated_info::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(updated_info::TYPE, "type"),
    P::column(updated_info::VERSION, "version"),
];

const MY_PROFILE_UPDATED_INFO: &[P] = &[
    P::column(updated_info::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(updated_info::LAST_CHANGED_TYPE, "last_changed_type"),
    P::column(updated_info::VERSION, "version"),
];

// =============================================================================
// Query-Result Views
// =============================================================================

const PERSON_CONTACT: &[P] = &[
    P::column(person::ID, "person_id"),
    P::column(person::DISPLAY_NAME, "display_name"),
    P::column(person::DISPLAY_NAME_INDEX, "sortkey"),
    P::column(person::DISPLAY_CONTACT_ID, "name_contact_id"),
    P::column(person::RINGTONE_PATH, "ringtone_path"),
    P::column(person::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(person::VIBRATION, "vibration"),
    P::column(person::MESSAGE_ALERT, "message_alert"),
    P::column(person::STATUS, "status"),
    P::column(person::IS_FAVORITE, "is_favorite"),
    P::column(person::LINK_COUNT, "link_count"),
    P::column(person::ADDRESSBOOK_IDS, "addressbook_ids"),
    P::column(person::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(person::HAS_EMAIL, "has_email"),
    P::column(contact::ID, "contact_id"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(addressbook::NAME, "addressbook_name"),
    P::column(addressbook::MODE, "addressbook_mode"),
];

const PERSON_NUMBER: &[P] = &[
    P::column(person::ID, "person_id"),
    P::column(person::DISPLAY_NAME, "display_name"),
    P::column(person::DISPLAY_NAME_INDEX, "sortkey"),
    P::column(person::DISPLAY_CONTACT_ID, "name_contact_id"),
    P::column(person::RINGTONE_PATH, "ringtone_path"),
    P::column(person::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(person::VIBRATION, "vibration"),
    P::column(person::MESSAGE_ALERT, "message_alert"),
    P::column(person::IS_FAVORITE, "is_favorite"),
    P::column(person::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(person::HAS_EMAIL, "has_email"),
    P::column(number::ID, "number_id"),
    P::column(number::TYPE, "type"),
    P::column(number::LABEL, "label"),
    P::column(number::IS_DEFAULT, "is_primary_default"),
    P::column(number::NUMBER, "number"),
    P::column(number::NORMALIZED_NUMBER, "normalized_number"),
    P::column(number::CLEANED_NUMBER, "cleaned_number"),
    P::column(number::NUMBER_FILTER, "number_filter"),
];

const PERSON_EMAIL: &[P] = &[
    P::column(person::ID, "person_id"),
    P::column(person::DISPLAY_NAME, "display_name"),
    P::column(person::DISPLAY_NAME_INDEX, "sortkey"),
    P::column(person::DISPLAY_CONTACT_ID, "name_contact_id"),
    P::column(person::RINGTONE_PATH, "ringtone_path"),
    P::column(person::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(person::VIBRATION, "vibration"),
    P::column(person::MESSAGE_ALERT, "message_alert"),
    P::column(person::IS_FAVORITE, "is_favorite"),
    P::column(person::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(person::HAS_EMAIL, "has_email"),
    P::column(email::ID, "email_id"),
    P::column(email::TYPE, "type"),
    P::column(email::LABEL, "label"),
    P::column(email::IS_DEFAULT, "is_primary_default"),
    P::column(email::EMAIL, "email"),
];

const PERSON_GROUPREL: &[P] = &[
    P::column(person::ID, "person_id"),
    P::column(person::DISPLAY_NAME, "display_name"),
    P::column(person::DISPLAY_NAME_INDEX, "sortkey"),
    P::column(person::DISPLAY_CONTACT_ID, "name_contact_id"),
    P::column(person::RINGTONE_PATH, "ringtone_path"),
    P::column(person::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(person::VIBRATION, "vibration"),
    P::column(person::MESSAGE_ALERT, "message_alert"),
    P::column(person::STATUS, "status"),
    P::column(person::IS_FAVORITE, "is_favorite"),
    P::column(person::LINK_COUNT, "link_count"),
    P::column(person::ADDRESSBOOK_IDS, "addressbook_ids"),
    P::column(person::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(person::HAS_EMAIL, "has_email"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(group_relation::GROUP_ID, "group_id"),
    P::column(group_relation::NAME, "group_name"),
];

const PERSON_PHONE_LOG: &[P] = &[
    P::column(person::ID, "person_id"),
    P::column(person::DISPLAY_NAME, "display_name"),
    P::column(person::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(phone_log::ID, "id"),
    P::column(phone_log::ADDRESS, "number"),
    P::column(phone_log::LOG_TIME, "log_time"),
    P::column(phone_log::LOG_TYPE, "log_type"),
    P::column(phone_log::EXTRA_DATA1, "data1"),
    P::column(phone_log::EXTRA_DATA2, "data2"),
    P::column(phone_log::NORMALIZED_ADDRESS, "normal_num"),
    P::column(phone_log::CLEANED_ADDRESS, "clean_num"),
    P::column(phone_log::ADDRESS_FILTER, "address_filter"),
    P::column(phone_log::SIM_SLOT_NO, "sim_id"),
];

const CONTACT_NUMBER: &[P] = &[
    P::column(contact::ID, "contact_id"),
    P::column(contact::DISPLAY_NAME, "display_name"),
    P::column(contact::DISPLAY_SOURCE_TYPE, "display_name_source"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(contact::PERSON_ID, "person_id"),
    P::column(contact::RINGTONE_PATH, "ringtone_path"),
    P::column(contact::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(contact::IS_FAVORITE, "is_favorite"),
    P::column(contact::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(contact::HAS_EMAIL, "has_email"),
    P::column(number::ID, "number_id"),
    P::column(number::TYPE, "type"),
    P::column(number::LABEL, "label"),
    P::column(number::IS_DEFAULT, "is_default"),
    P::column(number::NUMBER, "number"),
    P::column(number::NORMALIZED_NUMBER, "normalized_number"),
    P::column(number::CLEANED_NUMBER, "cleaned_number"),
    P::column(number::NUMBER_FILTER, "number_filter"),
];

const CONTACT_EMAIL: &[P] = &[
    P::column(contact::ID, "contact_id"),
    P::column(contact::DISPLAY_NAME, "display_name"),
    P::column(contact::DISPLAY_SOURCE_TYPE, "display_name_source"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(contact::PERSON_ID, "person_id"),
    P::column(contact::RINGTONE_PATH, "ringtone_path"),
    P::column(contact::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(contact::IS_FAVORITE, "is_favorite"),
    P::column(contact::HAS_PHONENUMBER, "has_phonenumber"),
    P::column(contact::HAS_EMAIL, "has_email"),
    P::column(email::ID, "email_id"),
    P::column(email::TYPE, "type"),
    P::column(email::LABEL, "label"),
    P::column(email::IS_DEFAULT, "is_default"),
    P::column(email::EMAIL, "email"),
];

const CONTACT_GROUPREL: &[P] = &[
    P::column(contact::ID, "contact_id"),
    P::column(contact::DISPLAY_NAME, "display_name"),
    P::column(contact::DISPLAY_SOURCE_TYPE, "display_name_source"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(contact::PERSON_ID, "person_id"),
    P::column(contact::RINGTONE_PATH, "ringtone_path"),
    P::column(contact::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(group_relation::GROUP_ID, "group_id"),
    P::column(group_relation::NAME, "group_name"),
];

const CONTACT_ACTIVITY: &[P] = &[
    P::column(contact::ID, "contact_id"),
    P::column(contact::DISPLAY_NAME, "display_name"),
    P::column(contact::DISPLAY_SOURCE_TYPE, "display_name_source"),
    P::column(contact::ADDRESSBOOK_ID, "addressbook_id"),
    P::column(contact::PERSON_ID, "person_id"),
    P::column(contact::RINGTONE_PATH, "ringtone_path"),
    P::column(contact::IMAGE_THUMBNAIL_PATH, "image_thumbnail_path"),
    P::column(activity::ID, "activity_id"),
    P::column(activity::SOURCE_NAME, "source_name"),
    P::column(activity::STATUS, "status"),
    P::column(activity::TIMESTAMP, "timestamp"),
    P::column(activity::SERVICE_OPERATION, "service_operation"),
    P::column(activity::URI, "uri"),
];

const PHONE_LOG_STAT: &[P] = &[
    P::column(phone_log_stat::LOG_COUNT, "log_count"),
    P::column(phone_log_stat::LOG_TYPE, "log_type"),
    P::column(phone_log_stat::SIM_SLOT_NO, "sim_id"),
];

// =============================================================================
// View Table
// =============================================================================

/// Every registered view
pub(crate) static VIEWS: &[ViewDescriptor] = &[
    ViewDescriptor::new(view_uri::ADDRESSBOOK, RecordType::Addressbook, ADDRESSBOOK),
    ViewDescriptor::new(view_uri::GROUP, RecordType::Group, GROUP),
    ViewDescriptor::new(view_uri::PERSON, RecordType::Person, PERSON),
    ViewDescriptor::new(view_uri::SIMPLE_CONTACT, RecordType::SimpleContact, SIMPLE_CONTACT),
    ViewDescriptor::new(view_uri::CONTACT, RecordType::Contact, CONTACT),
    ViewDescriptor::new(view_uri::MY_PROFILE, RecordType::MyProfile, MY_PROFILE),
    ViewDescriptor::new(view_uri::ACTIVITY, RecordType::Activity, ACTIVITY),
    ViewDescriptor::new(view_uri::ACTIVITY_PHOTO, RecordType::ActivityPhoto, ACTIVITY_PHOTO),
    ViewDescriptor::new(view_uri::NAME, RecordType::Name, NAME),
    ViewDescriptor::new(view_uri::NUMBER, RecordType::Number, NUMBER),
    ViewDescriptor::new(view_uri::EMAIL, RecordType::Email, EMAIL),
    ViewDescriptor::new(view_uri::ADDRESS, RecordType::Address, ADDRESS),
    ViewDescriptor::new(view_uri::URL, RecordType::Url, URL),
    ViewDescriptor::new(view_uri::EVENT, RecordType::Event, EVENT),
    ViewDescriptor::new(view_uri::MESSENGER, RecordType::Messenger, MESSENGER),
    ViewDescriptor::new(view_uri::GROUP_RELATION, RecordType::GroupRelation, GROUP_RELATION),
    ViewDescriptor::new(view_uri::NOTE, RecordType::Note, NOTE),
    ViewDescriptor::new(view_uri::COMPANY, RecordType::Company, COMPANY),
    ViewDescriptor::new(view_uri::PROFILE, RecordType::Profile, PROFILE),
    ViewDescriptor::new(view_uri::RELATIONSHIP, RecordType::Relationship, RELATIONSHIP),
    ViewDescriptor::new(view_uri::IMAGE, RecordType::Image, IMAGE),
    ViewDescriptor::new(view_uri::NICKNAME, RecordType::Nickname, NICKNAME),
    ViewDescriptor::new(view_uri::EXTENSION, RecordType::Extension, EXTENSION),
    ViewDescriptor::new(view_uri::PHONE_LOG, RecordType::PhoneLog, PHONE_LOG),
    ViewDescriptor::new(view_uri::SPEEDDIAL, RecordType::SpeedDial, SPEEDDIAL),
    ViewDescriptor::new(view_uri::SDN, RecordType::Sdn, SDN),
    ViewDescriptor::new(
        view_uri::CONTACTS_UPDATED_INFO,
        RecordType::UpdatedInfo,
        CONTACTS_UPDATED_INFO,
    ),
    ViewDescriptor::new(
        view_uri::GROUPS_UPDATED_INFO,
        RecordType::UpdatedInfo,
        GROUPS_UPDATED_INFO,
    ),
    ViewDescriptor::new(
        view_uri::MY_PROFILE_UPDATED_INFO,
        RecordType::UpdatedInfo,
        MY_PROFILE_UPDATED_INFO,
    ),
    ViewDescriptor::new(view_uri::PERSON_CONTACT, RecordType::Result, PERSON_CONTACT),
    ViewDescriptor::new(view_uri::PERSON_NUMBER, RecordType::Result, PERSON_NUMBER),
    ViewDescriptor::new(view_uri::PERSON_EMAIL, RecordType::Result, PERSON_EMAIL),
    ViewDescriptor::new(view_uri::PERSON_GROUPREL, RecordType::Result, PERSON_GROUPREL),
    ViewDescriptor::new(view_uri::PERSON_PHONE_LOG, RecordType::Result, PERSON_PHONE_LOG),
    ViewDescriptor::new(view_uri::CONTACT_NUMBER, RecordType::Result, CONTACT_NUMBER),
    ViewDescriptor::new(view_uri::CONTACT_EMAIL, RecordType::Result, CONTACT_EMAIL),
    ViewDescriptor::new(view_uri::CONTACT_GROUPREL, RecordType::Result, CONTACT_GROUPREL),
    ViewDescriptor::new(view_uri::CONTACT_ACTIVITY, RecordType::Result, CONTACT_ACTIVITY),
    ViewDescriptor::new(view_uri::PHONE_LOG_STAT, RecordType::Result, PHONE_LOG_STAT),
];
