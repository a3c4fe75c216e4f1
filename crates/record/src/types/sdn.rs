use contacts_core::properties::sdn;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Service dialing number read from the SIM
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sdn {
    id: i32,
    name: Option<String>,
    number: Option<String>,
    sim_slot_no: i32,
}

impl RecordOps for Sdn {
    fn record_type(&self) -> RecordType {
        RecordType::Sdn
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            sdn::ID => Ok(self.id),
            sdn::SIM_SLOT_NO => Ok(self.sim_slot_no),
            _ => Err(unsupported(RecordType::Sdn, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            sdn::NAME => Ok(self.name.as_deref()),
            sdn::NUMBER => Ok(self.number.as_deref()),
            _ => Err(unsupported(RecordType::Sdn, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            sdn::ID => Ok(assign(&mut self.id, value)),
            sdn::SIM_SLOT_NO => Ok(assign(&mut self.sim_slot_no, value)),
            _ => Err(unsupported(RecordType::Sdn, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            sdn::NAME => assign_str(&mut self.name, value),
            sdn::NUMBER => assign_str(&mut self.number, value),
            _ => Err(unsupported(RecordType::Sdn, id)),
        }
    }
}
