//! Record List
//!
//! Ordered collection of records of one type. Lists owned by a parent
//! record are its child lists; standalone lists carry query results.
//!
//! ## Staged deletions
//!
//! Removing a persisted child (identity > 0) moves it to the staged set so
//! storage can issue the delete on the next update. Records that were never
//! persisted are dropped immediately. Live and staged sets never overlap.

use contacts_core::{Error, RecordType, Result};
use tracing::debug;

use crate::record::Record;

/// Ordered list of records of one declared type
#[derive(Debug, Default)]
pub struct RecordList {
    record_type: Option<RecordType>,
    records: Vec<Record>,
    staged: Vec<Record>,
    cursor: usize,
    max_live: Option<usize>,
}

impl RecordList {
    /// Untyped list; the first inserted record fixes the type
    pub fn new() -> Self {
        Self::default()
    }

    /// List that only accepts records of `record_type`
    pub fn of_type(record_type: RecordType) -> Self {
        Self {
            record_type: Some(record_type),
            ..Self::default()
        }
    }

    /// List that holds at most one live record of `record_type`
    pub fn singleton(record_type: RecordType) -> Self {
        Self {
            record_type: Some(record_type),
            max_live: Some(1),
            ..Self::default()
        }
    }

    /// Empty list with the same declared type and cap
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            record_type: self.record_type,
            max_live: self.max_live,
            ..Self::default()
        }
    }

    /// Declared element type
    pub fn record_type(&self) -> Option<RecordType> {
        self.record_type
    }

    /// Live-element cap, if any
    pub fn max_live(&self) -> Option<usize> {
        self.max_live
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no live records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Check that `record` could be inserted without handing it over
    ///
    /// Insertion consumes the record and drops it on rejection; callers that
    /// need to keep a rejected record ask here first.
    pub fn accepts(&self, record: &Record) -> Result<()> {
        if let Some(expected) = self.record_type {
            if record.record_type() != expected {
                debug!(
                    expected = %expected,
                    actual = %record.record_type(),
                    "Rejected record of wrong type"
                );
                return Err(Error::invalid_parameter(format!(
                    "list holds {} records, got {}",
                    expected,
                    record.record_type()
                )));
            }
        }
        if let Some(cap) = self.max_live {
            if self.records.len() >= cap {
                return Err(Error::invalid_parameter(format!(
                    "list of {} already holds {} record(s)",
                    record.record_type(),
                    cap
                )));
            }
        }
        crate::limits().validate_child_count(self.records.len())?;
        Ok(())
    }

    /// Validate, reserve, then insert; the cursor stays on its record
    fn insert_at(&mut self, index: usize, mut record: Record, fresh: bool) -> Result<()> {
        self.accepts(&record)?;
        self.records.try_reserve(1)?;
        if fresh {
            record.reset_identity();
        }
        if self.record_type.is_none() {
            self.record_type = Some(record.record_type());
        }
        if !self.records.is_empty() && index <= self.cursor {
            self.cursor += 1;
        }
        self.records.insert(index, record);
        Ok(())
    }

    /// Append a child for insertion as new
    ///
    /// Once accepted, the record's identity is reset to 0 so storage inserts
    /// a fresh row. On error the record is dropped; see [`accepts`](Self::accepts).
    pub fn add_child(&mut self, record: Record) -> Result<()> {
        self.insert_at(self.records.len(), record, true)
    }

    /// Append a record, keeping its identity
    pub fn add(&mut self, record: Record) -> Result<()> {
        self.insert_at(self.records.len(), record, false)
    }

    /// Insert a record at the front, keeping its identity
    pub fn prepend(&mut self, record: Record) -> Result<()> {
        self.insert_at(0, record, false)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(Error::invalid_parameter(format!(
                "index {} out of range for list of {}",
                index,
                self.records.len()
            )));
        }
        Ok(())
    }

    fn after_remove(&mut self, index: usize) {
        if self.cursor > index {
            self.cursor -= 1;
        }
        if self.cursor >= self.records.len() {
            self.cursor = self.records.len().saturating_sub(1);
        }
    }

    /// Remove a child of the owning parent
    ///
    /// Persisted records move to the staged set; others are dropped.
    pub fn remove_child(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let persisted = self.records[index].identity() > 0;
        if persisted {
            self.staged.try_reserve(1)?;
        }
        let record = self.records.remove(index);
        self.after_remove(index);
        if persisted {
            debug!(identity = record.identity(), "Staged child for deletion");
            self.staged.push(record);
        }
        Ok(())
    }

    /// Remove a record and hand it back to the caller
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        self.check_index(index)?;
        let record = self.records.remove(index);
        self.after_remove(index);
        Ok(record)
    }

    /// Number of records staged for deletion
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Records staged for deletion
    pub fn staged(&self) -> &[Record] {
        &self.staged
    }

    /// Drain the staged set, as storage does after issuing the deletes
    pub fn take_staged(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.staged)
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Live record at `index`
    ///
    /// # Errors
    ///
    /// `NoData` if `index` is out of range.
    pub fn at(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or_else(|| Error::no_data(format!("no record at index {}", index)))
    }

    /// Mutable live record at `index`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Record> {
        self.records
            .get_mut(index)
            .ok_or_else(|| Error::no_data(format!("no record at index {}", index)))
    }

    /// Iterate over live records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterate mutably over live records
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }

    /// Reverse the order of live records
    pub fn reverse(&mut self) {
        self.records.reverse();
        if !self.records.is_empty() {
            self.cursor = self.records.len() - 1 - self.cursor;
        }
    }

    /// Consume the list, returning the live records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    fn require_non_empty(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(Error::no_data("list is empty"));
        }
        Ok(())
    }

    /// Move the cursor to the first record
    pub fn first(&mut self) -> Result<()> {
        self.require_non_empty()?;
        self.cursor = 0;
        Ok(())
    }

    /// Move the cursor to the last record
    pub fn last(&mut self) -> Result<()> {
        self.require_non_empty()?;
        self.cursor = self.records.len() - 1;
        Ok(())
    }

    /// Advance the cursor; `NoData` at the end
    pub fn next(&mut self) -> Result<()> {
        if self.cursor + 1 >= self.records.len() {
            return Err(Error::no_data("cursor at end of list"));
        }
        self.cursor += 1;
        Ok(())
    }

    /// Step the cursor back; `NoData` at the start
    pub fn prev(&mut self) -> Result<()> {
        self.require_non_empty()?;
        if self.cursor == 0 {
            return Err(Error::no_data("cursor at start of list"));
        }
        self.cursor -= 1;
        Ok(())
    }

    /// Record under the cursor
    pub fn current(&self) -> Result<&Record> {
        self.at(self.cursor)
    }

    // =========================================================================
    // Cloning
    // =========================================================================

    /// Deep copy of the live records
    ///
    /// # Errors
    ///
    /// `NoData` if the list is empty, `OutOfMemory` if an allocation fails.
    pub fn try_clone(&self) -> Result<Self> {
        self.require_non_empty()?;
        self.duplicate()
    }

    /// Deep copy of the live records, allowing an empty list
    ///
    /// Staged records stay behind.
    pub(crate) fn duplicate(&self) -> Result<Self> {
        let mut records = Vec::new();
        records.try_reserve_exact(self.records.len())?;
        for record in &self.records {
            records.push(record.try_clone()?);
        }
        Ok(Self {
            record_type: self.record_type,
            records,
            staged: Vec::new(),
            cursor: 0,
            max_live: self.max_live,
        })
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
