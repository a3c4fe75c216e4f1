use contacts_core::properties::{activity, activity_photo};
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};
use crate::list::RecordList;

const CHILD_IDS: &[PropertyId] = &[activity::PHOTO];

/// Social activity posted for a contact, with its photos
#[derive(Debug)]
pub struct Activity {
    id: i32,
    contact_id: i32,
    source_name: Option<String>,
    status: Option<String>,
    timestamp: i32,
    service_operation: Option<String>,
    uri: Option<String>,
    photos: RecordList,
}

impl Activity {
    pub(crate) fn new() -> Self {
        Self {
            id: 0,
            contact_id: 0,
            source_name: None,
            status: None,
            timestamp: 0,
            service_operation: None,
            uri: None,
            photos: RecordList::of_type(RecordType::ActivityPhoto),
        }
    }

    pub(crate) fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            id: self.id,
            contact_id: self.contact_id,
            source_name: self.source_name.clone(),
            status: self.status.clone(),
            timestamp: self.timestamp,
            service_operation: self.service_operation.clone(),
            uri: self.uri.clone(),
            photos: self.photos.duplicate()?,
        })
    }
}

impl RecordOps for Activity {
    fn record_type(&self) -> RecordType {
        RecordType::Activity
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            activity::ID => Ok(self.id),
            activity::CONTACT_ID => Ok(self.contact_id),
            activity::TIMESTAMP => Ok(self.timestamp),
            _ => Err(unsupported(RecordType::Activity, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            activity::SOURCE_NAME => Ok(self.source_name.as_deref()),
            activity::STATUS => Ok(self.status.as_deref()),
            activity::SERVICE_OPERATION => Ok(self.service_operation.as_deref()),
            activity::URI => Ok(self.uri.as_deref()),
            _ => Err(unsupported(RecordType::Activity, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            activity::ID => Ok(assign(&mut self.id, value)),
            activity::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            activity::TIMESTAMP => Ok(assign(&mut self.timestamp, value)),
            _ => Err(unsupported(RecordType::Activity, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            activity::SOURCE_NAME => assign_str(&mut self.source_name, value),
            activity::STATUS => assign_str(&mut self.status, value),
            activity::SERVICE_OPERATION => assign_str(&mut self.service_operation, value),
            activity::URI => assign_str(&mut self.uri, value),
            _ => Err(unsupported(RecordType::Activity, id)),
        }
    }

    fn child_list(&self, id: PropertyId) -> Result<&RecordList> {
        match id {
            activity::PHOTO => Ok(&self.photos),
            _ => Err(unsupported(RecordType::Activity, id)),
        }
    }

    fn child_list_mut(&mut self, id: PropertyId) -> Result<&mut RecordList> {
        match id {
            activity::PHOTO => Ok(&mut self.photos),
            _ => Err(unsupported(RecordType::Activity, id)),
        }
    }

    fn child_ids(&self) -> &'static [PropertyId] {
        CHILD_IDS
    }
}

/// Photo attached to an activity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityPhoto {
    id: i32,
    activity_id: i32,
    photo_url: Option<String>,
    sort_index: i32,
}

impl RecordOps for ActivityPhoto {
    fn record_type(&self) -> RecordType {
        RecordType::ActivityPhoto
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            activity_photo::ID => Ok(self.id),
            activity_photo::ACTIVITY_ID => Ok(self.activity_id),
            activity_photo::SORT_INDEX => Ok(self.sort_index),
            _ => Err(unsupported(RecordType::ActivityPhoto, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            activity_photo::PHOTO_URL => Ok(self.photo_url.as_deref()),
            _ => Err(unsupported(RecordType::ActivityPhoto, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            activity_photo::ID => Ok(assign(&mut self.id, value)),
            activity_photo::ACTIVITY_ID => Ok(assign(&mut self.activity_id, value)),
            activity_photo::SORT_INDEX => Ok(assign(&mut self.sort_index, value)),
            _ => Err(unsupported(RecordType::ActivityPhoto, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            activity_photo::PHOTO_URL => assign_str(&mut self.photo_url, value),
            _ => Err(unsupported(RecordType::ActivityPhoto, id)),
        }
    }
}
