use contacts_core::properties::name;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Structured name of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Name {
    id: i32,
    contact_id: i32,
    first: Option<String>,
    last: Option<String>,
    addition: Option<String>,
    suffix: Option<String>,
    prefix: Option<String>,
    phonetic_first: Option<String>,
    phonetic_middle: Option<String>,
    phonetic_last: Option<String>,
}

impl RecordOps for Name {
    fn record_type(&self) -> RecordType {
        RecordType::Name
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            name::ID => Ok(self.id),
            name::CONTACT_ID => Ok(self.contact_id),
            _ => Err(unsupported(RecordType::Name, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            name::FIRST => Ok(self.first.as_deref()),
            name::LAST => Ok(self.last.as_deref()),
            name::ADDITION => Ok(self.addition.as_deref()),
            name::SUFFIX => Ok(self.suffix.as_deref()),
            name::PREFIX => Ok(self.prefix.as_deref()),
            name::PHONETIC_FIRST => Ok(self.phonetic_first.as_deref()),
            name::PHONETIC_MIDDLE => Ok(self.phonetic_middle.as_deref()),
            name::PHONETIC_LAST => Ok(self.phonetic_last.as_deref()),
            _ => Err(unsupported(RecordType::Name, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            name::ID => Ok(assign(&mut self.id, value)),
            name::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            _ => Err(unsupported(RecordType::Name, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            name::FIRST => assign_str(&mut self.first, value),
            name::LAST => assign_str(&mut self.last, value),
            name::ADDITION => assign_str(&mut self.addition, value),
            name::SUFFIX => assign_str(&mut self.suffix, value),
            name::PREFIX => assign_str(&mut self.prefix, value),
            name::PHONETIC_FIRST => assign_str(&mut self.phonetic_first, value),
            name::PHONETIC_MIDDLE => assign_str(&mut self.phonetic_middle, value),
            name::PHONETIC_LAST => assign_str(&mut self.phonetic_last, value),
            _ => Err(unsupported(RecordType::Name, id)),
        }
    }
}
