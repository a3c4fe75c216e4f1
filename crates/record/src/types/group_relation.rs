use contacts_core::properties::group_relation;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Membership of a contact in a group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupRelation {
    id: i32,
    group_id: i32,
    contact_id: i32,
    group_name: Option<String>,
}

impl RecordOps for GroupRelation {
    fn record_type(&self) -> RecordType {
        RecordType::GroupRelation
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            group_relation::ID => Ok(self.id),
            group_relation::GROUP_ID => Ok(self.group_id),
            group_relation::CONTACT_ID => Ok(self.contact_id),
            _ => Err(unsupported(RecordType::GroupRelation, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            group_relation::NAME => Ok(self.group_name.as_deref()),
            _ => Err(unsupported(RecordType::GroupRelation, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            group_relation::ID => Ok(assign(&mut self.id, value)),
            group_relation::GROUP_ID => Ok(assign(&mut self.group_id, value)),
            group_relation::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            _ => Err(unsupported(RecordType::GroupRelation, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            group_relation::NAME => assign_str(&mut self.group_name, value),
            _ => Err(unsupported(RecordType::GroupRelation, id)),
        }
    }
}
