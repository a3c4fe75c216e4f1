use contacts_core::properties::event;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Dated event (birthday, anniversary) of a contact
///
/// The date is packed as `yyyymmdd`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    id: i32,
    contact_id: i32,
    event_type: i32,
    label: Option<String>,
    date: i32,
    calendar_type: i32,
    is_leap_month: bool,
}

impl RecordOps for Event {
    fn record_type(&self) -> RecordType {
        RecordType::Event
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            event::ID => Ok(self.id),
            event::CONTACT_ID => Ok(self.contact_id),
            event::TYPE => Ok(self.event_type),
            event::DATE => Ok(self.date),
            event::CALENDAR_TYPE => Ok(self.calendar_type),
            _ => Err(unsupported(RecordType::Event, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            event::LABEL => Ok(self.label.as_deref()),
            _ => Err(unsupported(RecordType::Event, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            event::IS_LEAP_MONTH => Ok(self.is_leap_month),
            _ => Err(unsupported(RecordType::Event, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            event::ID => Ok(assign(&mut self.id, value)),
            event::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            event::TYPE => Ok(assign(&mut self.event_type, value)),
            event::DATE => Ok(assign(&mut self.date, value)),
            event::CALENDAR_TYPE => Ok(assign(&mut self.calendar_type, value)),
            _ => Err(unsupported(RecordType::Event, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            event::LABEL => assign_str(&mut self.label, value),
            _ => Err(unsupported(RecordType::Event, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            event::IS_LEAP_MONTH => Ok(assign(&mut self.is_leap_month, value)),
            _ => Err(unsupported(RecordType::Event, id)),
        }
    }
}
