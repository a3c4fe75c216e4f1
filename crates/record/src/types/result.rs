//! Query-result row
//!
//! A result record has no fixed field set: its view is a join chosen by the
//! query. Values are kept as a small list of (id, value) pairs. A property
//! the view declares but the row never filled reads as the default value.

use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::{assign, assign_str, unsupported, RecordOps};

/// One stored value of a result row
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    /// Int value
    Int(i32),
    /// Nullable string value
    Str(Option<String>),
    /// Bool value
    Bool(bool),
    /// 64-bit int value
    Lli(i64),
    /// Double value
    Double(f64),
}

/// Row of a query-result view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    values: Vec<(PropertyId, ResultValue)>,
}

impl QueryResult {
    fn find(&self, id: PropertyId) -> Option<&ResultValue> {
        self.values.iter().find(|(k, _)| *k == id).map(|(_, v)| v)
    }

    fn find_mut(&mut self, id: PropertyId) -> Option<&mut ResultValue> {
        self.values
            .iter_mut()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v)
    }

    fn push(&mut self, id: PropertyId, value: ResultValue) -> Result<()> {
        self.values.try_reserve(1)?;
        self.values.push((id, value));
        Ok(())
    }

    /// Number of filled values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no value has been filled
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Filled values in insertion order
    pub fn values(&self) -> impl Iterator<Item = (PropertyId, &ResultValue)> {
        self.values.iter().map(|(id, v)| (*id, v))
    }
}

impl RecordOps for QueryResult {
    fn record_type(&self) -> RecordType {
        RecordType::Result
    }

    fn get_int(&self, id: PropertyId) -> Result<i32> {
        match self.find(id) {
            None => Ok(0),
            Some(ResultValue::Int(v)) => Ok(*v),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn get_str(&self, id: PropertyId) -> Result<Option<&str>> {
        match self.find(id) {
            None => Ok(None),
            Some(ResultValue::Str(v)) => Ok(v.as_deref()),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn get_bool(&self, id: PropertyId) -> Result<bool> {
        match self.find(id) {
            None => Ok(false),
            Some(ResultValue::Bool(v)) => Ok(*v),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn get_lli(&self, id: PropertyId) -> Result<i64> {
        match self.find(id) {
            None => Ok(0),
            Some(ResultValue::Lli(v)) => Ok(*v),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn get_double(&self, id: PropertyId) -> Result<f64> {
        match self.find(id) {
            None => Ok(0.0),
            Some(ResultValue::Double(v)) => Ok(*v),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn set_int(&mut self, id: PropertyId, value: i32) -> Result<bool> {
        match self.find_mut(id) {
            None => {
                self.push(id, ResultValue::Int(value))?;
                Ok(value != 0)
            }
            Some(ResultValue::Int(slot)) => Ok(assign(slot, value)),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn set_str(&mut self, id: PropertyId, value: Option<&str>) -> Result<bool> {
        match self.find_mut(id) {
            None => {
                let mut slot = None;
                let changed = assign_str(&mut slot, value)?;
                self.push(id, ResultValue::Str(slot))?;
                Ok(changed)
            }
            Some(ResultValue::Str(slot)) => assign_str(slot, value),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn set_bool(&mut self, id: PropertyId, value: bool) -> Result<bool> {
        match self.find_mut(id) {
            None => {
                self.push(id, ResultValue::Bool(value))?;
                Ok(value)
            }
            Some(ResultValue::Bool(slot)) => Ok(assign(slot, value)),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn set_lli(&mut self, id: PropertyId, value: i64) -> Result<bool> {
        match self.find_mut(id) {
            None => {
                self.push(id, ResultValue::Lli(value))?;
                Ok(value != 0)
            }
            Some(ResultValue::Lli(slot)) => Ok(assign(slot, value)),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }

    fn set_double(&mut self, id: PropertyId, value: f64) -> Result<bool> {
        match self.find_mut(id) {
            None => {
                self.push(id, ResultValue::Double(value))?;
                Ok(value != 0.0)
            }
            Some(ResultValue::Double(slot)) => Ok(assign(slot, value)),
            Some(_) => Err(unsupported(RecordType::Result, id)),
        }
    }
}
