use contacts_core::properties::company;
use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// Employer details of a contact
///
/// `logo` is an image path. Copying the file into the service's image
/// directory is the storage layer's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Company {
    id: i32,
    contact_id: i32,
    company_type: i32,
    label: Option<String>,
    name: Option<String>,
    department: Option<String>,
    job_title: Option<String>,
    assistant_name: Option<String>,
    role: Option<String>,
    logo: Option<String>,
    location: Option<String>,
    description: Option<String>,
    phonetic_name: Option<String>,
}

impl RecordOps for Company {
    fn record_type(&self) -> RecordType {
        RecordType::Company
    }

    fn identity(&self) -> i32 {
        self.id
    }

    fn reset_identity(&mut self) {
        self.id = 0;
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match id {
            company::ID => Ok(self.id),
            company::CONTACT_ID => Ok(self.contact_id),
            company::TYPE => Ok(self.company_type),
            _ => Err(unsupported(RecordType::Company, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match id {
            company::LABEL => Ok(self.label.as_deref()),
            company::NAME => Ok(self.name.as_deref()),
            company::DEPARTMENT => Ok(self.department.as_deref()),
            company::JOB_TITLE => Ok(self.job_title.as_deref()),
            company::ASSISTANT_NAME => Ok(self.assistant_name.as_deref()),
            company::ROLE => Ok(self.role.as_deref()),
            company::LOGO => Ok(self.logo.as_deref()),
            company::LOCATION => Ok(self.location.as_deref()),
            company::DESCRIPTION => Ok(self.description.as_deref()),
            company::PHONETIC_NAME => Ok(self.phonetic_name.as_deref()),
            _ => Err(unsupported(RecordType::Company, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match id {
            company::ID => Ok(assign(&mut self.id, value)),
            company::CONTACT_ID => Ok(assign(&mut self.contact_id, value)),
            company::TYPE => Ok(assign(&mut self.company_type, value)),
            _ => Err(unsupported(RecordType::Company, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match id {
            company::LABEL => assign_str(&mut self.label, value),
            company::NAME => assign_str(&mut self.name, value),
            company::DEPARTMENT => assign_str(&mut self.department, value),
            company::JOB_TITLE => assign_str(&mut self.job_title, value),
            company::ASSISTANT_NAME => assign_str(&mut self.assistant_name, value),
            company::ROLE => assign_str(&mut self.role, value),
            company::LOGO => assign_str(&mut self.logo, value),
            company::LOCATION => assign_str(&mut self.location, value),
            company::DESCRIPTION => assign_str(&mut self.description, value),
            company::PHONETIC_NAME => assign_str(&mut self.phonetic_name, value),
            _ => Err(unsupported(RecordType::Company, id)),
        }
    }
}
