use contacts_core::properties::updated_info;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, unsupported, RecordOps};

/// Change-feed entry
///
/// Shared by the contact, group and my-profile feeds; each feed's view
/// declares the subset it fills. Every field is read-only and written by
/// storage through the trusted path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatedInfo {
    contact_id: i32,
    addressbook_id: i32,
    changed_type: i32,
    version: i32,
    image_changed: bool,
    group_id: i32,
    last_changed_type: i32,
}

impl RecordOps for UpdatedInfo {
    fn record_type(&self) -> RecordType {
        RecordType::UpdatedInfo
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            updated_info::CONTACT_ID => Ok(self.contact_id),
            updated_info::ADDRESSBOOK_ID => Ok(self.addressbook_id),
            updated_info::TYPE => Ok(self.changed_type),
            updated_info::VERSION => Ok(self.version),
            updated_info::GROUP_ID => Ok(self.group_id),
            updated_info::LAST_CHANGED_TYPE => Ok(self.last_changed_type),
            _ => Err(unsupported(RecordType::UpdatedInfo, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            updated_info::IMAGE_CHANGED => Ok(self.image_changed),
            _ => Err(unsupported(RecordType::UpdatedInfo, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            updated_info::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            updated_info::ADDRESSBOOK_ID => Ok(assign(&mut self.addressbook_id, value)),
            updated_info::TYPE => Ok(assign(&mut self.changed_type, value)),
            updated_info::VERSION => Ok(assign(&mut self.version, value)),
            updated_info::GROUP_ID => Ok(assign(&mut self.group_id, value)),
            updated_info::LAST_CHANGED_TYPE => Ok(assign(&mut self.last_changed_type, value)),
            _ => Err(unsupported(RecordType::UpdatedInfo, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            updated_info::IMAGE_CHANGED => Ok(assign(&mut self.image_changed, value)),
            _ => Err(unsupported(RecordType::UpdatedInfo, id)),
        }
    }
}
