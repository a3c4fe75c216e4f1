use contacts_core::properties::messenger;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Instant messaging handle of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messenger {
    id: i32,
    contact_id: i32,
    messenger_type: i32,
    label: Option<String>,
    im_id: Option<String>,
}

impl RecordOps for Messenger {
    fn record_type(&self) -> RecordType {
        RecordType::Messenger
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            messenger::ID => Ok(self.id),
            messenger::CONTACT_ID => Ok(self.contact_id),
            messenger::TYPE => Ok(self.messenger_type),
            _ => Err(unsupported(RecordType::Messenger, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            messenger::LABEL => Ok(self.label.as_deref()),
            messenger::IM_ID => Ok(self.im_id.as_deref()),
            _ => Err(unsupported(RecordType::Messenger, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            messenger::ID => Ok(assign(&mut self.id, value)),
            messenger::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            messenger::TYPE => Ok(assign(&mut self.messenger_type, value)),
            _ => Err(unsupported(RecordType::Messenger, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            messenger::LABEL => assign_str(&mut self.label, value),
            messenger::IM_ID => assign_str(&mut self.im_id, value),
            _ => Err(unsupported(RecordType::Messenger, id)),
        }
    }
}
