use contacts_core::properties::profile;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Application-provided profile entry of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    id: i32,
    contact_id: i32,
    uid: Option<String>,
    text: Option<String>,
    order: i32,
    service_operation: Option<String>,
    mime: Option<String>,
    app_id: Option<String>,
    uri: Option<String>,
    category: Option<String>,
    extra_data: Option<String>,
}

impl RecordOps for Profile {
    fn record_type(&self) -> RecordType {
        RecordType::Profile
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            profile::ID => Ok(self.id),
            profile::CONTACT_ID => Ok(self.contact_id),
            profile::ORDER => Ok(self.order),
            _ => Err(unsupported(RecordType::Profile, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            profile::UID => Ok(self.uid.as_deref()),
            profile::TEXT => Ok(self.text.as_deref()),
            profile::SERVICE_OPERATION => Ok(self.service_operation.as_deref()),
            profile::MIME => Ok(self.mime.as_deref()),
            profile::APP_ID => Ok(self.app_id.as_deref()),
            profile::URI => Ok(self.uri.as_deref()),
            profile::CATEGORY => Ok(self.category.as_deref()),
            profile::EXTRA_DATA => Ok(self.extra_data.as_deref()),
            _ => Err(unsupported(RecordType::Profile, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            profile::ID => Ok(assign(&mut self.id, value)),
            profile::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            profile::ORDER => Ok(assign(&mut self.order, value)),
            _ => Err(unsupported(RecordType::Profile, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            profile::UID => assign_str(&mut self.uid, value),
            profile::TEXT => assign_str(&mut self.text, value),
            profile::SERVICE_OPERATION => assign_str(&mut self.service_operation, value),
            profile::MIME => assign_str(&mut self.mime, value),
            profile::APP_ID => assign_str(&mut self.app_id, value),
            profile::URI => assign_str(&mut self.uri, value),
            profile::CATEGORY => assign_str(&mut self.category, value),
            profile::EXTRA_DATA => assign_str(&mut self.extra_data, value),
            _ => Err(unsupported(RecordType::Profile, id)),
        }
    }
}
