//! Trusted write path
//!
//! Storage loaders and the vCard decoder populate read-only properties
//! (row ids, derived display names, change-feed fields) and rebuild child
//! lists with their persisted identities. They import [`TrustedAccess`];
//! application code does not. After a load they call
//! [`TrustedAccess::mark_clean`] so the record starts unmodified.
//!
//! The trusted setters skip the read-only check and nothing else: datatype,
//! view membership, string limits and dirty tracking still apply.

use contacts_core::{PropertyId, Result};

use crate::record::Record;

/// Writes reserved for storage and codec collaborators
pub trait TrustedAccess {
    /// Set an int property, read-only or not
    fn set_int_trusted(&mut self, id: PropertyId, value: i32) -> Result<()>;

    /// Set or clear a string property, read-only or not
    fn set_str_trusted(&mut self, id: PropertyId, value: Option<&str>) -> Result<()>;

    /// Set a bool property, read-only or not
    fn set_bool_trusted(&mut self, id: PropertyId, value: bool) -> Result<()>;

    /// Set a 64-bit int property, read-only or not
    fn set_lli_trusted(&mut self, id: PropertyId, value: i64) -> Result<()>;

    /// Set a double property, read-only or not
    fn set_double_trusted(&mut self, id: PropertyId, value: f64) -> Result<()>;

    /// Append a loaded child to list `id`, keeping its identity
    fn attach_child(&mut self, id: PropertyId, child: Record) -> Result<()>;

    /// Forget modifications, after a load or a successful save
    fn mark_clean(&mut self);
}

impl TrustedAccess for Record {
    fn set_int_trusted(&mut self, id: PropertyId, value: i32) -> Result<()> {
        self.store_int(id, value)
    }

    fn set_str_trusted(&mut self, id: PropertyId, value: Option<&str>) -> Result<()> {
        self.store_str(id, value)
    }

    fn set_bool_trusted(&mut self, id: PropertyId, value: bool) -> Result<()> {
        self.store_bool(id, value)
    }

    fn set_lli_trusted(&mut self, id: PropertyId, value: i64) -> Result<()> {
        self.store_lli(id, value)
    }

    fn set_double_trusted(&mut self, id: PropertyId, value: f64) -> Result<()> {
        self.store_double(id, value)
    }

    fn attach_child(&mut self, id: PropertyId, child: Record) -> Result<()> {
        self.attach_loaded_child(id, child)
    }

    fn mark_clean(&mut self) {
        self.clear_dirty();
    }
}
