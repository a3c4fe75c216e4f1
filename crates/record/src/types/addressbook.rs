use contacts_core::properties::addressbook;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Address book owned by an account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Addressbook {
    id: i32,
    account_id: i32,
    name: Option<String>,
    mode: i32,
}

impl RecordOps for Addressbook {
    fn record_type(&self) -> RecordType {
        RecordType::Addressbook
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            addressbook::ID => Ok(self.id),
            addressbook::ACCOUNT_ID => Ok(self.account_id),
            addressbook::MODE => Ok(self.mode),
            _ => Err(unsupported(RecordType::Addressbook, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            addressbook::NAME => Ok(self.name.as_deref()),
            _ => Err(unsupported(RecordType::Addressbook, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            addressbook::ID => Ok(assign(&mut self.id, value)),
            addressbook::ACCOUNT_ID => Ok(assign(&mut self.account_id, value)),
            addressbook::MODE => Ok(assign(&mut self.mode, value)),
            _ => Err(unsupported(RecordType::Addressbook, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            addressbook::NAME => assign_str(&mut self.name, value),
            _ => Err(unsupported(RecordType::Addressbook, id)),
        }
    }
}
