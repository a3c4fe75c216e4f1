use contacts_core::properties::email;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Email address of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Email {
    id: i32,
    contact_id: i32,
    email_type: i32,
    label: Option<String>,
    is_default: bool,
    email: Option<String>,
}

impl RecordOps for Email {
    fn record_type(&self) -> RecordType {
        RecordType::Email
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            email::ID => Ok(self.id),
            email::CONTACT_ID => Ok(self.contact_id),
            email::TYPE => Ok(self.email_type),
            _ => Err(unsupported(RecordType::Email, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            email::LABEL => Ok(self.label.as_deref()),
            email::EMAIL => Ok(self.email.as_deref()),
            _ => Err(unsupported(RecordType::Email, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            email::IS_DEFAULT => Ok(self.is_default),
            _ => Err(unsupported(RecordType::Email, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            email::ID => Ok(assign(&mut self.id, value)),
            email::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            email::TYPE => Ok(assign(&mut self.email_type, value)),
            _ => Err(unsupported(RecordType::Email, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            email::LABEL => assign_str(&mut self.label, value),
            email::EMAIL => assign_str(&mut self.email, value),
            _ => Err(unsupported(RecordType::Email, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            email::IS_DEFAULT => Ok(assign(&mut self.is_default, value)),
            _ => Err(unsupported(RecordType::Email, id)),
        }
    }
}
