use contacts_core::properties::my_profile;
use contacts_core::{PropertyId, RecordType, Result};

use super::children::ChildLists;
use crate::dispatch::{assign, assign_str, unsupported, RecordOps};
use crate::list::RecordList;

const CHILD_IDS: &[PropertyId] = &[
    my_profile::NAME,
    my_profile::COMPANY,
    my_profile::NOTE,
    my_profile::NUMBER,
    my_profile::EMAIL,
    my_profile::EVENT,
    my_profile::MESSENGER,
    my_profile::ADDRESS,
    my_profile::URL,
    my_profile::NICKNAME,
    my_profile::PROFILE,
    my_profile::RELATIONSHIP,
    my_profile::IMAGE,
    my_profile::EXTENSION,
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
    RecordType::Extension,
];

/// The device owner's own card
///
/// Same detail lists as a contact, without group membership.
#[derive(Debug)]
pub struct MyProfile {
    id: i32,
    display_name: Option<String>,
    addressbook_id: i32,
    image_thumbnail_path: Option<String>,
    uid: Option<String>,
    changed_time: i32,
    children: ChildLists,
}

impl MyProfile {
    pub(crate) fn new() -> Self {
        Self {
            id: 0,
            display_name: None,
            addressbook_id: 0,
            image_thumbnail_path: None,
            uid: None,
            changed_time: 0,
            children: ChildLists::new(
                RecordType::MyProfile,
                CHILD_IDS,
                CHILD_TYPES,
                Some(my_profile::NAME),
            ),
        }
    }

    pub(crate) fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            id: self.id,
            display_name: self.display_name.clone(),
            addressbook_id: self.addressbook_id,
            image_thumbnail_path: self.image_thumbnail_path.clone(),
            uid: self.uid.clone(),
            changed_time: self.changed_time,
            children: self.children.try_clone()?,
        })
    }
}

impl RecordOps for MyProfile {
    fn record_type(&self) -> RecordType {
        RecordType::MyProfile
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            my_profile::ID => Ok(self.id),
            my_profile::ADDRESSBOOK_ID => Ok(self.addressbook_id),
            my_profile::CHANGED_TIME => Ok(self.changed_time),
            _ => Err(unsupported(RecordType::MyProfile, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            my_profile::DISPLAY_NAME => Ok(self.display_name.as_deref()),
            my_profile::IMAGE_THUMBNAIL_PATH => Ok(self.image_thumbnail_path.as_deref()),
            my_profile::UID => Ok(self.uid.as_deref()),
            _ => Err(unsupported(RecordType::MyProfile, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            my_profile::ID => Ok(assign(&mut self.id, value)),
            my_profile::ADDRESSBOOK_ID => Ok(assign(&mut self.addressbook_id, value)),
            my_profile::CHANGED_TIME => Ok(assign(&mut self.changed_time, value)),
            _ => Err(unsupported(RecordType::MyProfile, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            my_profile::DISPLAY_NAME => assign_str(&mut self.display_name, value),
            my_profile::IMAGE_THUMBNAIL_PATH => assign_str(&mut self.image_thumbnail_path, value),
            my_profile::UID => assign_str(&mut self.uid, value),
            _ => Err(unsupported(RecordType::MyProfile, id)),
        }
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
