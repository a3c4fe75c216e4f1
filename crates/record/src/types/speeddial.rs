use contacts_core::properties::speeddial;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Speed-dial slot bound to a number
///
/// Keyed by the dial slot, so there is no row id. Everything but the slot
/// and the number id is joined in by storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedDial {
    speeddial_number: i32,
    number_id: i32,
    number: Option<String>,
    number_label: Option<String>,
    number_type: i32,
    person_id: i32,
    display_name: Option<String>,
    image_thumbnail_path: Option<String>,
}

impl RecordOps for SpeedDial {
    fn record_type(&self) -> RecordType {
        RecordType::SpeedDial
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            speeddial::SPEEDDIAL_NUMBER => Ok(self.speeddial_number),
            speeddial::NUMBER_ID => Ok(self.number_id),
            speeddial::NUMBER_TYPE => Ok(self.number_type),
            speeddial::PERSON_ID => Ok(self.person_id),
            _ => Err(unsupported(RecordType::SpeedDial, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            speeddial::NUMBER => Ok(self.number.as_deref()),
            speeddial::NUMBER_LABEL => Ok(self.number_label.as_deref()),
            speeddial::DISPLAY_NAME => Ok(self.display_name.as_deref()),
            speeddial::IMAGE_THUMBNAIL_PATH => Ok(self.image_thumbnail_path.as_deref()),
            _ => Err(unsupported(RecordType::SpeedDial, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            speeddial::SPEEDDIAL_NUMBER => Ok(assign(&mut self.speeddial_number, value)),
            speeddial::NUMBER_ID => Ok(assign(&mut self.number_id, value)),
            speeddial::NUMBER_TYPE => Ok(assign(&mut self.number_type, value)),
            speeddial::PERSON_ID => Ok(assign(&mut self.person_id, value)),
            _ => Err(unsupported(RecordType::SpeedDial, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            speeddial::NUMBER => assign_str(&mut self.number, value),
            speeddial::NUMBER_LABEL => assign_str(&mut self.number_label, value),
            speeddial::DISPLAY_NAME => assign_str(&mut self.display_name, value),
            speeddial::IMAGE_THUMBNAIL_PATH => assign_str(&mut self.image_thumbnail_path, value),
            _ => Err(unsupported(RecordType::SpeedDial, id)),
        }
    }
}
