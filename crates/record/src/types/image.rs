use contacts_core::properties::image;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Photo of a contact
///
/// Only the path is held. Temporary files produced by the vCard decoder
/// are owned and cleaned up by the decoder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    id: i32,
    contact_id: i32,
    image_type: i32,
    label: Option<String>,
    path: Option<String>,
    is_default: bool,
}

impl RecordOps for Image {
    fn record_type(&self) -> RecordType {
        RecordType::Image
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            image::ID => Ok(self.id),
            image::CONTACT_ID => Ok(self.contact_id),
            image::TYPE => Ok(self.image_type),
            _ => Err(unsupported(RecordType::Image, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            image::LABEL => Ok(self.label.as_deref()),
            image::PATH => Ok(self.path.as_deref()),
            _ => Err(unsupported(RecordType::Image, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            image::IS_DEFAULT => Ok(self.is_default),
            _ => Err(unsupported(RecordType::Image, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            image::ID => Ok(assign(&mut self.id, value)),
            image::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            image::TYPE => Ok(assign(&mut self.image_type, value)),
            _ => Err(unsupported(RecordType::Image, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            image::LABEL => assign_str(&mut self.label, value),
            image::PATH => assign_str(&mut self.path, value),
            _ => Err(unsupported(RecordType::Image, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            image::IS_DEFAULT => Ok(assign(&mut self.is_default, value)),
            _ => Err(unsupported(RecordType::Image, id)),
        }
    }
}
