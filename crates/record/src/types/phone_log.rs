use contacts_core::properties::phone_log;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Call or message log entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneLog {
    id: i32,
    person_id: i32,
    address: Option<String>,
    log_time: i32,
    log_type: i32,
    extra_data1: i32,
    extra_data2: Option<String>,
    sim_slot_no: i32,
}

impl RecordOps for PhoneLog {
    fn record_type(&self) -> RecordType {
        RecordType::PhoneLog
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            phone_log::ID => Ok(self.id),
            phone_log::PERSON_ID => Ok(self.person_id),
            phone_log::LOG_TIME => Ok(self.log_time),
            phone_log::LOG_TYPE => Ok(self.log_type),
            phone_log::EXTRA_DATA1 => Ok(self.extra_data1),
            phone_log::SIM_SLOT_NO => Ok(self.sim_slot_no),
            _ => Err(unsupported(RecordType::PhoneLog, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            phone_log::ADDRESS => Ok(self.address.as_deref()),
            phone_log::EXTRA_DATA2 => Ok(self.extra_data2.as_deref()),
            _ => Err(unsupported(RecordType::PhoneLog, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            phone_log::ID => Ok(assign(&mut self.id, value)),
            phone_log::PERSON_ID => Ok(assign(&mut self.person_id, value)),
            phone_log::LOG_TIME => Ok(assign(&mut self.log_time, value)),
            phone_log::LOG_TYPE => Ok(assign(&mut self.log_type, value)),
            phone_log::EXTRA_DATA1 => Ok(assign(&mut self.extra_data1, value)),
            phone_log::SIM_SLOT_NO => Ok(assign(&mut self.sim_slot_no, value)),
            _ => Err(unsupported(RecordType::PhoneLog, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            phone_log::ADDRESS => assign_str(&mut self.address, value),
            phone_log::EXTRA_DATA2 => assign_str(&mut self.extra_data2, value),
            _ => Err(unsupported(RecordType::PhoneLog, id)),
        }
    }
}
