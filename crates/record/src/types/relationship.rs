use contacts_core::properties::relationship;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Named relation (spouse, manager, …) of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    id: i32,
    contact_id: i32,
    relationship_type: i32,
    label: Option<String>,
    name: Option<String>,
}

impl RecordOps for Relationship {
    fn record_type(&self) -> RecordType {
        RecordType::Relationship
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            relationship::ID => Ok(self.id),
            relationship::CONTACT_ID => Ok(self.contact_id),
            relationship::TYPE => Ok(self.relationship_type),
            _ => Err(unsupported(RecordType::Relationship, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            relationship::LABEL => Ok(self.label.as_deref()),
            relationship::NAME => Ok(self.name.as_deref()),
            _ => Err(unsupported(RecordType::Relationship, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            relationship::ID => Ok(assign(&mut self.id, value)),
            relationship::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            relationship::TYPE => Ok(assign(&mut self.relationship_type, value)),
            _ => Err(unsupported(RecordType::Relationship, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            relationship::LABEL => assign_str(&mut self.label, value),
            relationship::NAME => assign_str(&mut self.name, value),
            _ => Err(unsupported(RecordType::Relationship, id)),
        }
    }
}
