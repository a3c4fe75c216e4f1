use contacts_core::properties::url;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Web address of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Url {
    id: i32,
    contact_id: i32,
    url_type: i32,
    label: Option<String>,
    url: Option<String>,
}

impl RecordOps for Url {
    fn record_type(&self) -> RecordType {
        RecordType::Url
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            url::ID => Ok(self.id),
            url::CONTACT_ID => Ok(self.contact_id),
            url::TYPE => Ok(self.url_type),
            _ => Err(unsupported(RecordType::Url, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            url::LABEL => Ok(self.label.as_deref()),
            url::URL => Ok(self.url.as_deref()),
            _ => Err(unsupported(RecordType::Url, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            url::ID => Ok(assign(&mut self.id, value)),
            url::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            url::TYPE => Ok(assign(&mut self.url_type, value)),
            _ => Err(unsupported(RecordType::Url, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            url::LABEL => assign_str(&mut self.label, value),
            url::URL => assign_str(&mut self.url, value),
            _ => Err(unsupported(RecordType::Url, id)),
        }
    }
}
