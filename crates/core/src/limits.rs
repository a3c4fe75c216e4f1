//! Size limits for property values and child lists
//!
//! This module defines configurable size limits that are enforced by the
//! generic record accessors. Violations surface as `InvalidParameter`.
//!
//! ## Contract
//!
//! The defaults are generous enough that ordinary address book data never
//! reaches them. Custom limits are installed once per process from
//! [`RecordConfig`](crate::config::RecordConfig).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;

/// Size limits for string values and child lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum string property length in bytes (default: 1MB)
    pub max_string_bytes: usize,

    /// Maximum live records in one record list (default: 65536)
    pub max_children: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_string_bytes: 1024 * 1024, // 1MB
            max_children: 65_536,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// This is useful for unit tests that need to test limit enforcement
    /// without creating extremely large values.
    pub fn with_small_limits() -> Self {
        Limits {
            max_string_bytes: 64,
            max_children: 4,
        }
    }

    /// Validate a string value about to be stored
    pub fn validate_string(&self, value: &str) -> Result<(), LimitError> {
        let len = value.len();
        if len > self.max_string_bytes {
            return Err(LimitError::StringTooLong {
                actual: len,
                max: self.max_string_bytes,
            });
        }
        Ok(())
    }

    /// Validate that a list holding `current` live records can take one more
    pub fn validate_child_count(&self, current: usize) -> Result<(), LimitError> {
        if current >= self.max_children {
            return Err(LimitError::TooManyChildren {
                actual: current + 1,
                max: self.max_children,
            });
        }
        Ok(())
    }
}

/// Limit validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// String value exceeds maximum length
    #[error("String too long: {actual} bytes exceeds maximum {max}")]
    StringTooLong {
        /// Actual length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Record list would exceed maximum length
    #[error("Too many children: {actual} exceeds maximum {max}")]
    TooManyChildren {
        /// Length after the rejected insert
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl LimitError {
    /// Short reason code for logging
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::StringTooLong { .. } => "string_too_long",
            LimitError::TooManyChildren { .. } => "too_many_children",
        }
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        Error::InvalidParameter(e.to_string())
    }
}
