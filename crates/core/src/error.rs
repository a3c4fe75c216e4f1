//! Error types for the contacts record layer
//!
//! Every failure is surfaced to the direct caller. Nothing in this layer
//! retries or swallows errors, since callers run inline with their own
//! transaction and must be able to roll back.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Result type alias for record layer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the record layer
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown property, read-only or projection violation, type mismatch,
    /// singleton violation, out-of-range removal
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An allocation could not be satisfied; the operation was rolled back
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    /// A result was expected but the source collection is empty
    #[error("No data: {0}")]
    NoData(String),

    /// Configuration could not be parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Build an `InvalidParameter` error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }

    /// Build a `NoData` error
    pub fn no_data(msg: impl Into<String>) -> Self {
        Error::NoData(msg.into())
    }

    /// Build an `OutOfMemory` error
    pub fn out_of_memory(msg: impl Into<String>) -> Self {
        Error::OutOfMemory(msg.into())
    }

    /// True for `InvalidParameter`
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }

    /// True for `NoData`
    pub fn is_no_data(&self) -> bool {
        matches!(self, Error::NoData(_))
    }

    /// True for `OutOfMemory`
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Error::OutOfMemory(_))
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::OutOfMemory(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_parameter() {
        let err = Error::invalid_parameter("property 0x00502001 is read-only");
        let msg = err.to_string();
        assert!(msg.contains("Invalid parameter"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_error_display_no_data() {
        let err = Error::no_data("child list is empty");
        assert!(err.to_string().contains("No data"));
    }

    #[test]
    fn test_error_display_out_of_memory() {
        let err = Error::out_of_memory("flag array");
        assert!(err.to_string().contains("Out of memory"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_error_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let err: Error = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(err.is_out_of_memory());
    }

    #[test]
    fn test_error_from_toml() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("limits = [");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Error::invalid_parameter("x").is_invalid_parameter());
        assert!(!Error::invalid_parameter("x").is_no_data());
        assert!(Error::no_data("x").is_no_data());
        assert!(!Error::no_data("x").is_out_of_memory());
    }
}
