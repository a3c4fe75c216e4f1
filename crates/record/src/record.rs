//! Record instance
//!
//! A [`Record`] pairs a registered view with a typed body and the
//! PROJECTED/DIRTY flags. All external access goes through the generic
//! entry points here, which run the checks in a fixed order:
//!
//! 1. the id's datatype matches the accessor family and the view declares it
//! 2. public setters reject read-only ids; the `store_*` writers behind
//!    [`TrustedAccess`](crate::TrustedAccess) skip only this step
//! 3. getters enforce projection
//! 4. setters mark the property dirty only when the value changed
//!
//! Any failure leaves the record untouched.

use contacts_core::{DataType, Error, PropertyId, RecordType, Result};
use tracing::{debug, warn};

use crate::dispatch::{RecordBody, RecordOps};
use crate::flags::{PropertyFlag, PropertyFlags, ProjectionState};
use crate::list::RecordList;
use crate::registry::{self, PropertyDescriptor, ViewDescriptor};

/// One entity instance
#[derive(Debug)]
pub struct Record {
    view: &'static ViewDescriptor,
    flags: PropertyFlags,
    body: RecordBody,
}

impl Record {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create an empty record for a registered view
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the URI is not registered.
    pub fn new(view_uri: &str) -> Result<Self> {
        let view = registry::lookup_view(view_uri)?;
        Ok(Self {
            view,
            flags: PropertyFlags::new(),
            body: RecordBody::create(view.record_type),
        })
    }

    /// Create an empty record for the canonical view of `record_type`
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for `RecordType::Result`, whose shape depends on
    /// the query.
    pub fn with_type(record_type: RecordType) -> Result<Self> {
        let uri = registry::default_view(record_type).ok_or_else(|| {
            Error::invalid_parameter(format!("{} records need an explicit view", record_type))
        })?;
        Self::new(uri)
    }

    /// Deep copy of scalars, strings, flags and live child records
    ///
    /// # Errors
    ///
    /// `OutOfMemory` if any allocation fails; nothing is leaked.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            view: self.view,
            flags: self.flags.try_clone()?,
            body: self.body.try_clone()?,
        })
    }

    /// Destroy the record together with its child records
    pub fn destroy(self) {
        drop(self);
    }

    /// Destroy the record but hand its child lists to the caller
    pub fn into_child_lists(mut self) -> Vec<(PropertyId, RecordList)> {
        self.body.take_child_lists()
    }

    // =========================================================================
    // Header
    // =========================================================================

    /// URI of the view the record was created for
    pub fn view_uri(&self) -> &'static str {
        self.view.uri
    }

    /// Registered view of the record
    pub fn view(&self) -> &'static ViewDescriptor {
        self.view
    }

    /// Type tag
    pub fn record_type(&self) -> RecordType {
        self.view.record_type
    }

    /// Number of properties the view declares
    pub fn property_count(&self) -> usize {
        self.view.properties.len()
    }

    /// Row id; 0 until persisted
    pub fn identity(&self) -> i32 {
        self.body.ops().identity()
    }

    pub(crate) fn reset_identity(&mut self) {
        self.body.ops_mut().reset_identity();
    }

    /// Property flags
    pub fn flags(&self) -> &PropertyFlags {
        &self.flags
    }

    /// Current projection state
    pub fn projection_state(&self) -> ProjectionState {
        self.flags.projection_state()
    }

    /// Typed body
    pub fn body(&self) -> &RecordBody {
        &self.body
    }

    // =========================================================================
    // Checks
    // =========================================================================

    fn index_of(&self, id: PropertyId, family: DataType) -> Result<usize> {
        if id.data_type() != Some(family) {
            debug!(
                view = self.view.uri,
                property = %id,
                family = %family,
                "Rejected accessor of wrong datatype"
            );
            return Err(Error::invalid_parameter(format!(
                "property {} is not a {} property",
                id, family
            )));
        }
        self.view.index_of(id).ok_or_else(|| {
            Error::invalid_parameter(format!(
                "property {} is not declared by '{}'",
                id, self.view.uri
            ))
        })
    }

    fn can_read(&self, index: usize) -> bool {
        if !self.flags.is_allocated() {
            return true;
        }
        if self.record_type().is_query_result() {
            return true;
        }
        if self.flags.get(index).contains(PropertyFlag::PROJECTED) {
            return true;
        }
        !self.flags.summary().contains(PropertyFlag::PROJECTED)
    }

    fn readable(&self, id: PropertyId, family: DataType) -> Result<usize> {
        let index = self.index_of(id, family)?;
        if !self.can_read(index) {
            debug!(view = self.view.uri, property = %id, "Rejected read of unprojected property");
            return Err(Error::invalid_parameter(format!(
                "property {} was not projected",
                id
            )));
        }
        Ok(index)
    }

    /// Gate of the public setters: a declared id of the right family that is
    /// not read-only
    fn check_public_write(&self, id: PropertyId, family: DataType) -> Result<()> {
        self.index_of(id, family)?;
        if id.is_read_only() {
            debug!(view = self.view.uri, property = %id, "Rejected write of read-only property");
            return Err(Error::invalid_parameter(format!(
                "property {} is read-only",
                id
            )));
        }
        Ok(())
    }

    /// Run a type setter under every write check but the read-only one
    ///
    /// The flag array is reserved before the setter runs, and installed only
    /// if the setter reports a change.
    fn write<F>(&mut self, id: PropertyId, family: DataType, apply: F) -> Result<()>
    where
        F: FnOnce(&mut dyn RecordOps) -> Result<bool>,
    {
        let index = self.index_of(id, family)?;
        let reserved = if self.flags.is_allocated() {
            None
        } else {
            Some(PropertyFlags::allocate(self.property_count())?)
        };
        if apply(self.body.ops_mut())? {
            self.flags.install(reserved);
            self.flags.insert(index, PropertyFlag::DIRTY);
        }
        Ok(())
    }

    fn check_string(value: Option<&str>) -> Result<()> {
        if let Some(v) = value {
            crate::limits().validate_string(v)?;
        }
        Ok(())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Int value of `id`
    pub fn get_int(&self, id: PropertyId) -> Result<i32> {
        self.readable(id, DataType::Int)?;
        self.body.ops().get_int(id)
    }

    /// Owned copy of the string value of `id`
    pub fn get_str(&self, id: PropertyId) -> Result<Option<String>> {
        Ok(self.get_str_p(id)?.map(str::to_owned))
    }

    /// String value of `id`, borrowed from the record
    pub fn get_str_p(&self, id: PropertyId) -> Result<Option<&str>> {
        self.readable(id, DataType::Str)?;
        self.body.ops().get_str(id)
    }

    /// Bool value of `id`
    pub fn get_bool(&self, id: PropertyId) -> Result<bool> {
        self.readable(id, DataType::Bool)?;
        self.body.ops().get_bool(id)
    }

    /// 64-bit int value of `id`
    pub fn get_lli(&self, id: PropertyId) -> Result<i64> {
        self.readable(id, DataType::Lli)?;
        self.body.ops().get_lli(id)
    }

    /// Double value of `id`
    pub fn get_double(&self, id: PropertyId) -> Result<f64> {
        self.readable(id, DataType::Double)?;
        self.body.ops().get_double(id)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Set an int property
    pub fn set_int(&mut self, id: PropertyId, value: i32) -> Result<()> {
        self.check_public_write(id, DataType::Int)?;
        self.store_int(id, value)
    }

    /// Set or clear a string property
    pub fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<()> {
        self.check_public_write(id, DataType::Str)?;
        self.store_str(id, value)
    }

    /// Set a bool property
    pub fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<()> {
        self.check_public_write(id, DataType::Bool)?;
        self.store_bool(id, value)
    }

    /// Set a 64-bit int property
    pub fn set_lli(&mut self, id: PropertyId, value: i64) -> Result<()> {
        self.check_public_write(id, DataType::Lli)?;
        self.store_lli(id, value)
    }

    /// Set a double property
    pub fn set_double(&mut self, id: PropertyId, value: f64) -> Result<()> {
        self.check_public_write(id, DataType::Double)?;
        self.store_double(id, value)
    }

    // Read-only ids pass through here; only `TrustedAccess` calls these
    // directly.

    pub(crate) fn store_int(&mut self, id: PropertyId, value: i32) -> Result<()> {
        self.write(id, DataType::Int, |ops| ops.set_int(id, value))
    }

    pub(crate) fn store_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<()> {
        Self::check_string(value)?;
        self.write(id, DataType::Str, |ops| ops.set_str(id, value))
    }

    pub(crate) fn store_bool(&mut self, id: PropertyId, value: bool) -> Result<()> {
        self.write(id, DataType::Bool, |ops| ops.set_bool(id, value))
    }

    pub(crate) fn store_lli(&mut self, id: PropertyId, value: i64) -> Result<()> {
        self.write(id, DataType::Lli, |ops| ops.set_lli(id, value))
    }

    pub(crate) fn store_double(&mut self, id: PropertyId, value: f64) -> Result<()> {
        self.write(id, DataType::Double, |ops| ops.set_double(id, value))
    }

    // =========================================================================
    // Dirty And Projection
    // =========================================================================

    /// Whether `id` was modified since load
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the view does not declare `id`.
    pub fn is_dirty(&self, id: PropertyId) -> Result<bool> {
        let index = self.view.index_of(id).ok_or_else(|| {
            Error::invalid_parameter(format!(
                "property {} is not declared by '{}'",
                id, self.view.uri
            ))
        })?;
        Ok(self.flags.get(index).contains(PropertyFlag::DIRTY))
    }

    /// Whether any scalar property of this record was modified
    ///
    /// Child records track their own changes.
    pub fn is_modified(&self) -> bool {
        self.flags.any_dirty()
    }

    /// Ids of modified properties, in view order
    pub fn dirty_properties(&self) -> Vec<PropertyId> {
        self.flags
            .dirty_indices()
            .filter_map(|idx| self.view.properties.get(idx).map(|d| d.id))
            .collect()
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.flags.clear_dirty();
    }

    /// Restrict reads to `ids`, as fetched by a projected query
    ///
    /// Replaces the flag array, dropping any dirty bits. Query-result
    /// records only remember that a projection happened.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `property_count` differs from the view's count,
    /// or an id is not declared by the view or cannot be projected.
    pub fn set_projection(&mut self, ids: &[PropertyId], property_count: usize) -> Result<()> {
        let count = self.property_count();
        if property_count != count {
            warn!(
                view = self.view.uri,
                expected = count,
                actual = property_count,
                "Projection property count mismatch"
            );
            return Err(Error::invalid_parameter(format!(
                "property count {} does not match {} declared by '{}'",
                property_count, count, self.view.uri
            )));
        }

        let mut buf = PropertyFlags::allocate(count)?;
        for &id in ids {
            let index = self.view.index_of(id).ok_or_else(|| {
                Error::invalid_parameter(format!(
                    "property {} is not declared by '{}'",
                    id, self.view.uri
                ))
            })?;
            if !self.view.properties[index].search_class.allows_projection() {
                return Err(Error::invalid_parameter(format!(
                    "property {} cannot be projected",
                    id
                )));
            }
            if !self.record_type().is_query_result() {
                buf[index].insert(PropertyFlag::PROJECTED);
            }
        }

        let summary = if self.record_type().is_query_result() || !ids.is_empty() {
            PropertyFlag::PROJECTED
        } else {
            PropertyFlag::empty()
        };
        self.flags.replace(buf, summary);
        debug!(view = self.view.uri, projected = ids.len(), "Applied projection");
        Ok(())
    }

    // =========================================================================
    // Child Lists
    // =========================================================================

    fn check_child_id(id: PropertyId) -> Result<()> {
        if id.data_type() != Some(DataType::Record) {
            return Err(Error::invalid_parameter(format!(
                "property {} is not a child list",
                id
            )));
        }
        Ok(())
    }

    /// Child list behind `id`
    pub fn child_list(&self, id: PropertyId) -> Result<&RecordList> {
        Self::check_child_id(id)?;
        self.body.ops().child_list(id)
    }

    /// Mutable child list behind `id`
    pub fn child_list_mut(&mut self, id: PropertyId) -> Result<&mut RecordList> {
        Self::check_child_id(id)?;
        self.body.ops_mut().child_list_mut(id)
    }

    /// Descriptor array of the elements of child list `id`
    pub fn child_properties(&self, id: PropertyId) -> Result<&'static [PropertyDescriptor]> {
        Self::check_child_id(id)?;
        self.body.ops().child_properties(id)
    }

    /// Check that list `id` would take `child`, without handing it over
    pub fn accepts_child(&self, id: PropertyId, child: &Record) -> Result<()> {
        self.child_list(id)?.accepts(child)
    }

    /// Append `child` to list `id` for insertion as new
    ///
    /// The child's identity is reset to 0 once accepted. On error the child
    /// is dropped; callers that want it back check
    /// [`accepts_child`](Self::accepts_child) first.
    pub fn add_child(&mut self, id: PropertyId, child: Record) -> Result<()> {
        self.child_list_mut(id)?.add_child(child)
    }

    pub(crate) fn attach_loaded_child(&mut self, id: PropertyId, child: Record) -> Result<()> {
        self.child_list_mut(id)?.add(child)
    }

    /// Remove the child at `index` of list `id`
    ///
    /// A persisted child is staged for deletion; an unsaved one is dropped.
    pub fn remove_child(&mut self, id: PropertyId, index: usize) -> Result<()> {
        self.child_list_mut(id)?.remove_child(index)
    }

    /// Number of live children in list `id`
    pub fn child_count(&self, id: PropertyId) -> Result<usize> {
        Ok(self.child_list(id)?.len())
    }

    /// Child at `index` of list `id`, borrowed from the parent
    pub fn child_at(&self, id: PropertyId, index: usize) -> Result<&Record> {
        self.child_list(id)?.at(index)
    }

    /// Mutable child at `index` of list `id`
    pub fn child_at_mut(&mut self, id: PropertyId, index: usize) -> Result<&mut Record> {
        self.child_list_mut(id)?.at_mut(index)
    }

    /// Deep copy of list `id`
    ///
    /// # Errors
    ///
    /// `NoData` if the list is empty.
    pub fn clone_child_list(&self, id: PropertyId) -> Result<RecordList> {
        self.child_list(id)?.try_clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trusted::TrustedAccess;
    use contacts_core::properties::{contact, name, number, person};
    use contacts_core::view_uri;

    #[test]
    fn test_new_unknown_view() {
        assert!(Record::new("tizen.contacts_view.bogus")
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_with_type_result_needs_view() {
        assert!(Record::with_type(RecordType::Result)
            .unwrap_err()
            .is_invalid_parameter());
        let record = Record::new(view_uri::PERSON_NUMBER).unwrap();
        assert_eq!(record.record_type(), RecordType::Result);
    }

    #[test]
    fn test_fresh_record_reads_defaults() {
        let record = Record::with_type(RecordType::Number).unwrap();
        assert_eq!(record.get_int(number::TYPE).unwrap(), 0);
        assert_eq!(record.get_str(number::NUMBER).unwrap(), None);
        assert!(!record.get_bool(number::IS_DEFAULT).unwrap());
        assert_eq!(record.projection_state(), ProjectionState::Unallocated);
    }

    #[test]
    fn test_datatype_mismatch() {
        let mut record = Record::with_type(RecordType::Number).unwrap();
        assert!(record.get_int(number::NUMBER).unwrap_err().is_invalid_parameter());
        assert!(record
            .set_str(number::TYPE, Some("1"))
            .unwrap_err()
            .is_invalid_parameter());
        assert!(!record.is_modified());
    }

    #[test]
    fn test_undeclared_property() {
        let mut record = Record::with_type(RecordType::Number).unwrap();
        assert!(record.get_str(name::FIRST).unwrap_err().is_invalid_parameter());
        assert!(record
            .set_str(name::FIRST, Some("x"))
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_set_marks_dirty_only_on_change() {
        let mut record = Record::with_type(RecordType::Number).unwrap();
        record.set_str(number::NUMBER, None).unwrap();
        assert!(!record.flags().is_allocated());

        record.set_str(number::NUMBER, Some("010")).unwrap();
        assert!(record.is_dirty(number::NUMBER).unwrap());
        assert!(!record.is_dirty(number::LABEL).unwrap());
        assert_eq!(record.dirty_properties(), vec![number::NUMBER]);
        assert_eq!(record.projection_state(), ProjectionState::Unrestricted);
    }

    #[test]
    fn test_read_only_rejected_before_setter() {
        let mut record = Record::with_type(RecordType::Contact).unwrap();
        let err = record.set_int(contact::ID, 5).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(record.identity(), 0);

        record.set_int_trusted(contact::ID, 5).unwrap();
        assert_eq!(record.identity(), 5);
        assert!(record.is_dirty(contact::ID).unwrap());
    }

    #[test]
    fn test_store_skips_only_the_read_only_gate() {
        let mut record = Record::with_type(RecordType::Contact).unwrap();
        assert!(record
            .set_str(contact::DISPLAY_NAME, Some("Kim"))
            .unwrap_err()
            .is_invalid_parameter());

        record.store_str(contact::DISPLAY_NAME, Some("Kim")).unwrap();
        assert!(record.is_dirty(contact::DISPLAY_NAME).unwrap());
        assert!(record
            .store_int(contact::DISPLAY_NAME, 1)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(record.store_int(number::TYPE, 1).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_filter_only_property_is_not_stored() {
        let mut record = Record::with_type(RecordType::Person).unwrap();
        assert!(record
            .get_double(person::FAVORITE_PRIORITY)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(record
            .set_double_trusted(person::FAVORITE_PRIORITY, 1.0)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_projection_restricts_reads() {
        let mut record = Record::with_type(RecordType::Contact).unwrap();
        let count = record.property_count();
        record
            .set_projection(&[contact::ID, contact::DISPLAY_NAME], count)
            .unwrap();
        assert_eq!(record.projection_state(), ProjectionState::Restricted);
        assert_eq!(record.get_int(contact::ID).unwrap(), 0);
        assert!(record
            .get_str(contact::RINGTONE_PATH)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_projection_count_mismatch() {
        let mut record = Record::with_type(RecordType::Contact).unwrap();
        let err = record.set_projection(&[contact::ID], 3).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(record.projection_state(), ProjectionState::Unallocated);
    }

    #[test]
    fn test_projection_rejects_filter_only_and_children() {
        let mut record = Record::with_type(RecordType::Number).unwrap();
        let count = record.property_count();
        assert!(record
            .set_projection(&[number::NORMALIZED_NUMBER], count)
            .unwrap_err()
            .is_invalid_parameter());

        let mut contact_record = Record::with_type(RecordType::Contact).unwrap();
        let count = contact_record.property_count();
        assert!(contact_record
            .set_projection(&[contact::NUMBER], count)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_empty_projection_is_unrestricted() {
        let mut record = Record::with_type(RecordType::Name).unwrap();
        let count = record.property_count();
        record.set_projection(&[], count).unwrap();
        assert_eq!(record.projection_state(), ProjectionState::Unrestricted);
        assert!(record.get_str(name::FIRST).is_ok());
    }

    #[test]
    fn test_query_result_ignores_per_property_projection() {
        let mut record = Record::new(view_uri::PERSON_NUMBER).unwrap();
        let count = record.property_count();
        record.set_projection(&[person::ID], count).unwrap();
        assert!(record.flags().summary().contains(PropertyFlag::PROJECTED));
        assert_eq!(record.get_str(number::NUMBER).unwrap(), None);
    }

    #[test]
    fn test_child_ops_require_record_datatype() {
        let mut record = Record::with_type(RecordType::Contact).unwrap();
        let child = Record::with_type(RecordType::Name).unwrap();
        assert!(record
            .add_child(contact::DISPLAY_NAME, child)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(record.child_count(contact::ID).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_leaf_has_no_children() {
        let record = Record::with_type(RecordType::Number).unwrap();
        assert!(record
            .child_count(contact::NUMBER)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_into_child_lists() {
        let mut record = Record::with_type(RecordType::Contact).unwrap();
        let mut num = Record::with_type(RecordType::Number).unwrap();
        num.set_str(number::NUMBER, Some("1")).unwrap();
        record.add_child(contact::NUMBER, num).unwrap();

        let lists = record.into_child_lists();
        let (_, numbers) = lists
            .into_iter()
            .find(|(id, _)| *id == contact::NUMBER)
            .unwrap();
        assert_eq!(numbers.len(), 1);
    }

    #[test]
    fn test_record_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Record>();
        assert_send::<RecordList>();
    }
}
