use contacts_core::properties::address;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Postal address of a contact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    id: i32,
    contact_id: i32,
    address_type: i32,
    label: Option<String>,
    postbox: Option<String>,
    postal_code: Option<String>,
    region: Option<String>,
    locality: Option<String>,
    street: Option<String>,
    country: Option<String>,
    extended: Option<String>,
    is_default: bool,
}

impl RecordOps for Address {
    fn record_type(&self) -> RecordType {
        RecordType::Address
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            address::ID => Ok(self.id),
            address::CONTACT_ID => Ok(self.contact_id),
            address::TYPE => Ok(self.address_type),
            _ => Err(unsupported(RecordType::Address, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            address::LABEL => Ok(self.label.as_deref()),
            address::POSTBOX => Ok(self.postbox.as_deref()),
            address::POSTAL_CODE => Ok(self.postal_code.as_deref()),
            address::REGION => Ok(self.region.as_deref()),
            address::LOCALITY => Ok(self.locality.as_deref()),
            address::STREET => Ok(self.street.as_deref()),
            address::COUNTRY => Ok(self.country.as_deref()),
            address::EXTENDED => Ok(self.extended.as_deref()),
            _ => Err(unsupported(RecordType::Address, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match id {
            address::IS_DEFAULT => Ok(self.is_default),
            _ => Err(unsupported(RecordType::Address, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            address::ID => Ok(assign(&mut self.id, value)),
            address::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            address::TYPE => Ok(assign(&mut self.address_type, value)),
            _ => Err(unsupported(RecordType::Address, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            address::LABEL => assign_str(&mut self.label, value),
            address::POSTBOX => assign_str(&mut self.postbox, value),
            address::POSTAL_CODE => assign_str(&mut self.postal_code, value),
            address::REGION => assign_str(&mut self.region, value),
            address::LOCALITY => assign_str(&mut self.locality, value),
            address::STREET => assign_str(&mut self.street, value),
            address::COUNTRY => assign_str(&mut self.country, value),
            address::EXTENDED => assign_str(&mut self.extended, value),
            _ => Err(unsupported(RecordType::Address, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match id {
            address::IS_DEFAULT => Ok(assign(&mut self.is_default, value)),
            _ => Err(unsupported(RecordType::Address, id)),
        }
    }
}
