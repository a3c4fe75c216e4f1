use contacts_core::properties::contact;
use contacts_core::{PropertyId, RecordType, Result};

use super::children::ChildLists;
use super::contact::ContactFields;
use crate::dispatch::RecordOps;
use crate::list::RecordList;

const CHILD_IDS: &[PropertyId] = &[contact::GROUP_RELATION];
const CHILD_TYPES: &[RecordType] = &[RecordType::GroupRelation];

/// Contact without its detail lists
///
/// Carries the contact scalars and group memberships only. Used for list
/// screens and group editing where loading every child would be wasted.
#[derive(Debug)]
pub struct SimpleContact {
    fields: ContactFields,
    children: ChildLists,
}

impl SimpleContact {
    pub(crate) fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            children: ChildLists::new(RecordType::SimpleContact, CHILD_IDS, CHILD_TYPES, None),
        }
    }

    pub(crate) fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            fields: self.fields.clone(),
            children: self.children.try_clone()?,
        })
    }
}

impl RecordOps for SimpleContact {
    fn record_type(&self) -> RecordType {
        RecordType::SimpleContact
    }

    fn identity(&self) -> i32 {
        self.fields.id()
    }

    fn reset_identity(&mut self) {
        self.fields.reset_id();
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        self.fields.get_int(RecordType::SimpleContact, id)
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        self.fields.get_str(RecordType::SimpleContact, id)
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        self.fields.get_bool(RecordType::SimpleContact, id)
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        self.fields.set_int(RecordType::SimpleContact, id, value)
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        self.fields.set_str(RecordType::SimpleContact, id, value)
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        self.fields.set_bool(RecordType::SimpleContact, id, value)
    }

    fn child_list(&self, id: PropertyId) -> Result<&RecordList> {
        self.children.get(id)
    }

    fn child_list_mut(&mut self, id: PropertyId) -> Result<&mut RecordList> {
        self.children.get_mut(id)
    }

    fn child_ids(&self) -> &'static [PropertyId] {
        self.children.ids()
    }
}
