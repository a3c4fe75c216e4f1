use contacts_core::properties::note;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Free-text note on a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Note {
    id: i32,
    contact_id: i32,
    note: Option<String>,
}

impl RecordOps for Note {
    fn record_type(&self) -> RecordType {
        RecordType::Note
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            note::ID => Ok(self.id),
            note::CONTACT_ID => Ok(self.contact_id),
            _ => Err(unsupported(RecordType::Note, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            note::NOTE => Ok(self.note.as_deref()),
            _ => Err(unsupported(RecordType::Note, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            note::ID => Ok(assign(&mut self.id, value)),
            note::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            _ => Err(unsupported(RecordType::Note, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            note::NOTE => assign_str(&mut self.note, value),
            _ => Err(unsupported(RecordType::Note, id)),
        }
    }
}
