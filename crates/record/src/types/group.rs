use contacts_core::properties::group;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Contact group within an address book
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    id: i32,
    addressbook_id: i32,
    name: Option<String>,
    ringtone_path: Option<String>,
    image_path: Option<String>,
    vibration: Option<String>,
    message_alert: Option<String>,
    extra_data: Option<String>,
    is_read_only: bool,
}

impl RecordOps for Group {
    fn record_type(&self) -> RecordType {
        RecordType::Group
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            group::ID => Ok(self.id),
            group::ADDRESSBOOK_ID => Ok(self.addressbook_id),
            _ => Err(unsupported(RecordType::Group, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            group::NAME => Ok(self.name.as_deref()),
            group::RINGTONE_PATH => Ok(self.ringtone_path.as_deref()),
            group::IMAGE_PATH => Ok(self.image_path.as_deref()),
            group::VIBRATION => Ok(self.vibration.as_deref()),
            group::MESSAGE_ALERT => Ok(self.message_alert.as_deref()),
            group::EXTRA_DATA => Ok(self.extra_data.as_deref()),
            _ => Err(unsupported(RecordType::Group, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            group::IS_READ_ONLY => Ok(self.is_read_only),
            _ => Err(unsupported(RecordType::Group, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            group::ID => Ok(assign(&mut self.id, value)),
            group::ADDRESSBOOK_ID => Ok(assign(&mut self.addressbook_id, value)),
            _ => Err(unsupported(RecordType::Group, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            group::NAME => assign_str(&mut self.name, value),
            group::RINGTONE_PATH => assign_str(&mut self.ringtone_path, value),
            group::IMAGE_PATH => assign_str(&mut self.image_path, value),
            group::VIBRATION => assign_str(&mut self.vibration, value),
            group::MESSAGE_ALERT => assign_str(&mut self.message_alert, value),
            group::EXTRA_DATA => assign_str(&mut self.extra_data, value),
            _ => Err(unsupported(RecordType::Group, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            group::IS_READ_ONLY => Ok(assign(&mut self.is_read_only, value)),
            _ => Err(unsupported(RecordType::Group, id)),
        }
    }
}
