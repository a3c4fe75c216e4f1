use contacts_core::properties::contact;
use contacts_core::{PropertyId, RecordType, Result};

use super::children::ChildLists;
use crate::dispatch::{assign, assign_str, unsupported, RecordOps};
use crate::list::RecordList;

const CHILD_IDS: &[PropertyId] = &[
    contact::NAME,
    contact::COMPANY,
    contact::NOTE,
    contact::NUMBER,
    contact::EMAIL,
    contact::EVENT,
    contact::MESSENGER,
    contact::ADDRESS,
    contact::URL,
    contact::NICKNAME,
    contact::PROFILE,
    contact::RELATIONSHIP,
    contact::IMAGE,
    contact::GROUP_RELATION,
    contact::EXTENSION,
];

const CHILD_TYPES: &[RecordType] = &[
    RecordType::Name,
    RecordType::Company,
    RecordType::Note,
    RecordType::Number,
    RecordType::Email,
    RecordType::Event,
    RecordType::Messenger,
    RecordType::Address,
    RecordType::Url,
    RecordType::Nickname,
    RecordType::Profile,
    RecordType::Relationship,
    RecordType::Image,
    RecordType::GroupRelation,
    RecordType::Extension,
];

// =============================================================================
// Scalar Fields
// =============================================================================

/// Scalar fields of the contact category
///
/// Shared by [`Contact`] and [`SimpleContact`](super::SimpleContact).
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ContactFields {
    id: i32,
    display_name: Option<String>,
    display_source_type: i32,
    addressbook_id: i32,
    ringtone_path: Option<String>,
    image_thumbnail_path: Option<String>,
    is_favorite: bool,
    has_phonenumber: bool,
    has_email: bool,
    person_id: i32,
    uid: Option<String>,
    vibration: Option<String>,
    message_alert: Option<String>,
    changed_time: i32,
    link_mode: i32,
}

impl ContactFields {
    pub(crate) fn id(&self) -> i32 {
        self.id
    }

    pub(crate) fn reset_id(&mut self) {
        self.id = 0;
    }

    pub(crate) fn get_int(&self, owner: RecordType, id: PropertyId) -> Result<i32> {
        match id {
            contact::ID => Ok(self.id),
            contact::DISPLAY_SOURCE_TYPE => Ok(self.display_source_type),
            contact::ADDRESSBOOK_ID => Ok(self.addressbook_id),
            contact::PERSON_ID => Ok(self.person_id),
            contact::CHANGED_TIME => Ok(self.changed_time),
            contact::LINK_MODE => Ok(self.link_mode),
            _ => Err(unsupported(owner, id)),
        }
    }

    pub(crate) fn get_str(&self, owner: RecordType, id: PropertyId) -> Result<Option<&str>> {
        match id {
            contact::DISPLAY_NAME => Ok(self.display_name.as_deref()),
            contact::RINGTONE_PATH => Ok(self.ringtone_path.as_deref()),
            contact::IMAGE_THUMBNAIL_PATH => Ok(self.image_thumbnail_path.as_deref()),
            contact::UID => Ok(self.uid.as_deref()),
            contact::VIBRATION => Ok(self.vibration.as_deref()),
            contact::MESSAGE_ALERT => Ok(self.message_alert.as_deref()),
            _ => Err(unsupported(owner, id)),
        }
    }

    pub(crate) fn get_bool(&self, owner: RecordType, id: PropertyId) -> Result<bool> {
        match id {
            contact::IS_FAVORITE => Ok(self.is_favorite),
            contact::HAS_PHONENUMBER => Ok(self.has_phonenumber),
            contact::HAS_EMAIL => Ok(self.has_email),
            _ => Err(unsupported(owner, id)),
        }
    }

    pub(crate) fn set_int(&mut self, owner: RecordType, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            contact::ID => Ok(assign(&mut self.id, value)),
            contact::DISPLAY_SOURCE_TYPE => Ok(assign(&mut self.display_source_type, value)),
            contact::ADDRESSBOOK_ID => Ok(assign(&mut self.addressbook_id, value)),
            contact::PERSON_ID => Ok(assign(&mut self.person_id, value)),
            contact::CHANGED_TIME => Ok(assign(&mut self.changed_time, value)),
            contact::LINK_MODE => Ok(assign(&mut self.link_mode, value)),
            _ => Err(unsupported(owner, id)),
        }
    }

    pub(crate) fn set_str(
        &mut self,
        owner: RecordType,
        id: PropertyId,
        value: Option<&str>,
    ) -> Result<bool> {
        match id {
            contact::DISPLAY_NAME => assign_str(&mut self.display_name, value),
            contact::RINGTONE_PATH => assign_str(&mut self.ringtone_path, value),
            contact::IMAGE_THUMBNAIL_PATH => assign_str(&mut self.image_thumbnail_path, value),
            contact::UID => assign_str(&mut self.uid, value),
            contact::VIBRATION => assign_str(&mut self.vibration, value),
            contact::MESSAGE_ALERT => assign_str(&mut self.message_alert, value),
            _ => Err(unsupported(owner, id)),
        }
    }

    pub(crate) fn set_bool(&mut self, owner: RecordType, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            contact::IS_FAVORITE => Ok(assign(&mut self.is_favorite, value)),
            contact::HAS_PHONENUMBER => Ok(assign(&mut self.has_phonenumber, value)),
            contact::HAS_EMAIL => Ok(assign(&mut self.has_email, value)),
            _ => Err(unsupported(owner, id)),
        }
    }
}

// =============================================================================
// Contact
// =============================================================================

/// Full contact with every child list
///
/// The name list holds at most one record.
#[derive(Debug)]
pub struct Contact {
    fields: ContactFields,
    children: ChildLists,
}

impl Contact {
    pub(crate) fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            children: ChildLists::new(
                RecordType::Contact,
                CHILD_IDS,
                CHILD_TYPES,
                Some(contact::NAME),
            ),
        }
    }

    pub(crate) fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            fields: self.fields.clone(),
            children: self.children.try_clone()?,
        })
    }
}

impl RecordOps for Contact {
    fn record_type(&self) -> RecordType {
        RecordType::Contact
    }

    fn identity(&self) -> i32 {
        self.fields.id()
    }

    fn reset_identity(&mut self) {
        self.fields.reset_id();
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        self.fields.get_int(RecordType::Contact, id)
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        self.fields.get_str(RecordType::Contact, id)
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        self.fields.get_bool(RecordType::Contact, id)
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        self.fields.set_int(RecordType::Contact, id, value)
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        self.fields.set_str(RecordType::Contact, id, value)
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        self.fields.set_bool(RecordType::Contact, id, value)
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
