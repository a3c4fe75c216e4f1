use contacts_core::properties::person;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Aggregate of linked contacts
///
/// The favorite priority exists only as a filter and is not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    id: i32,
    display_name: Option<String>,
    display_name_index: Option<String>,
    display_contact_id: i32,
    ringtone_path: Option<String>,
    image_thumbnail_path: Option<String>,
    vibration: Option<String>,
    message_alert: Option<String>,
    status: Option<String>,
    is_favorite: bool,
    link_count: i32,
    addressbook_ids: Option<String>,
    has_phonenumber: bool,
    has_email: bool,
}

impl RecordOps for Person {
    fn record_type(&self) -> RecordType {
        RecordType::Person
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            person::ID => Ok(self.id),
            person::DISPLAY_CONTACT_ID => Ok(self.display_contact_id),
            person::LINK_COUNT => Ok(self.link_count),
            _ => Err(unsupported(RecordType::Person, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            person::DISPLAY_NAME => Ok(self.display_name.as_deref()),
            person::DISPLAY_NAME_INDEX => Ok(self.display_name_index.as_deref()),
            person::RINGTONE_PATH => Ok(self.ringtone_path.as_deref()),
            person::IMAGE_THUMBNAIL_PATH => Ok(self.image_thumbnail_path.as_deref()),
            person::VIBRATION => Ok(self.vibration.as_deref()),
            person::MESSAGE_ALERT => Ok(self.message_alert.as_deref()),
            person::STATUS => Ok(self.status.as_deref()),
            person::ADDRESSBOOK_IDS => Ok(self.addressbook_ids.as_deref()),
            _ => Err(unsupported(RecordType::Person, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            person::IS_FAVORITE => Ok(self.is_favorite),
            person::HAS_PHONENUMBER => Ok(self.has_phonenumber),
            person::HAS_EMAIL => Ok(self.has_email),
            _ => Err(unsupported(RecordType::Person, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            person::ID => Ok(assign(&mut self.id, value)),
            person::DISPLAY_CONTACT_ID => Ok(assign(&mut self.display_contact_id, value)),
            person::LINK_COUNT => Ok(assign(&mut self.link_count, value)),
            _ => Err(unsupported(RecordType::Person, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            person::DISPLAY_NAME => assign_str(&mut self.display_name, value),
            person::DISPLAY_NAME_INDEX => assign_str(&mut self.display_name_index, value),
            person::RINGTONE_PATH => assign_str(&mut self.ringtone_path, value),
            person::IMAGE_THUMBNAIL_PATH => assign_str(&mut self.image_thumbnail_path, value),
            person::VIBRATION => assign_str(&mut self.vibration, value),
            person::MESSAGE_ALERT => assign_str(&mut self.message_alert, value),
            person::STATUS => assign_str(&mut self.status, value),
            person::ADDRESSBOOK_IDS => assign_str(&mut self.addressbook_ids, value),
            _ => Err(unsupported(RecordType::Person, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            person::IS_FAVORITE => Ok(assign(&mut self.is_favorite, value)),
            person::HAS_PHONENUMBER => Ok(assign(&mut self.has_phonenumber, value)),
            person::HAS_EMAIL => Ok(assign(&mut self.has_email, value)),
            _ => Err(unsupported(RecordType::Person, id)),
        }
    }
}
