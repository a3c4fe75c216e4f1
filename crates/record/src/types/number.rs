use contacts_core::properties::number;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Phone number of a contact
///
/// Normalized and cleaned forms are computed by storage for filtering and
/// are not held by the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Number {
    id: i32,
    contact_id: i32,
    number_type: i32,
    label: Option<String>,
    is_default: bool,
    number: Option<String>,
}

impl RecordOps for Number {
    fn record_type(&self) -> RecordType {
        RecordType::Number
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            number::ID => Ok(self.id),
            number::CONTACT_ID => Ok(self.contact_id),
            number::TYPE => Ok(self.number_type),
            _ => Err(unsupported(RecordType::Number, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            number::LABEL => Ok(self.label.as_deref()),
            number::NUMBER => Ok(self.number.as_deref()),
            _ => Err(unsupported(RecordType::Number, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            number::IS_DEFAULT => Ok(self.is_default),
            _ => Err(unsupported(RecordType::Number, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            number::ID => Ok(assign(&mut self.id, value)),
            number::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            number::TYPE => Ok(assign(&mut self.number_type, value)),
            _ => Err(unsupported(RecordType::Number, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            number::LABEL => assign_str(&mut self.label, value),
            number::NUMBER => assign_str(&mut self.number, value),
            _ => Err(unsupported(RecordType::Number, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            number::IS_DEFAULT => Ok(assign(&mut self.is_default, value)),
            _ => Err(unsupported(RecordType::Number, id)),
        }
    }
}
