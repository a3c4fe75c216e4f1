use contacts_core::properties::nickname;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Nickname of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nickname {
    id: i32,
    contact_id: i32,
    name: Option<String>,
}

impl RecordOps for Nickname {
    fn record_type(&self) -> RecordType {
        RecordType::Nickname
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            nickname::ID => Ok(self.id),
            nickname::CONTACT_ID => Ok(self.contact_id),
            _ => Err(unsupported(RecordType::Nickname, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            nickname::NAME => Ok(self.name.as_deref()),
            _ => Err(unsupported(RecordType::Nickname, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            nickname::ID => Ok(assign(&mut self.id, value)),
            nickname::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            _ => Err(unsupported(RecordType::Nickname, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            nickname::NAME => assign_str(&mut self.name, value),
            _ => Err(unsupported(RecordType::Nickname, id)),
        }
    }
}
