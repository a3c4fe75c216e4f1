use contacts_core::properties::extension;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Application-defined data attached to a contact
///
/// One int slot and eleven string slots with no fixed meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extension {
    id: i32,
    contact_id: i32,
    data1: i32,
    strings: [Option<String>; 11],
}

fn string_slot(id: PropertyId) -> Option<usize> {
    extension::STRING_SLOTS.iter().position(|&slot| slot == id)
}

impl RecordOps for Extension {
    fn record_type(&self) -> RecordType {
        RecordType::Extension
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            extension::ID => Ok(self.id),
            extension::CONTACT_ID => Ok(self.contact_id),
            extension::DATA1 => Ok(self.data1),
            _ => Err(unsupported(RecordType::Extension, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        string_slot(id)
            .map(|slot| self.strings[slot].as_deref())
            .ok_or_else(|| unsupported(RecordType::Extension, id))
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            extension::ID => Ok(assign(&mut self.id, value)),
            extension::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            extension::DATA1 => Ok(assign(&mut self.data1, value)),
            _ => Err(unsupported(RecordType::Extension, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        let slot = string_slot(id).ok_or_else(|| unsupported(RecordType::Extension, id))?;
        assign_str(&mut self.strings[slot], value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_slots_are_independent() {
        let mut ext = Extension::default();
        ext.set_str(extension::DATA2, Some("two")).unwrap();
        ext.set_str(extension::DATA12, Some("twelve")).unwrap();

        assert_eq!(ext.get_str(extension::DATA2).unwrap(), Some("two"));
        assert_eq!(ext.get_str(extension::DATA7).unwrap(), None);
        assert_eq!(ext.get_str(extension::DATA12).unwrap(), Some("twelve"));
    }

    #[test]
    fn test_data1_is_int_only() {
        let ext = Extension::default();
        assert!(ext.get_str(extension::DATA1).is_err());
        assert_eq!(ext.get_int(extension::DATA1).unwrap(), 0);
    }
}
