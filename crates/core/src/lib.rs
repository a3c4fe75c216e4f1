//! Core types for the contacts record layer
//!
//! This crate defines the foundational types shared by the record layer and
//! its collaborators (storage, vCard codec, IPC):
//! - PropertyId: packed property identifier and its typed decoding
//! - Category: entity kind encoded in a property identifier
//! - RecordType: discriminates between record kinds
//! - properties: identifier constants, one module per category
//! - view_uri: stable view URI strings
//! - Error: error type hierarchy
//! - Limits / RecordConfig: size limits and `contacts.toml` loading

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod config;
pub mod error;
pub mod limits;
pub mod properties;
pub mod property_id;
pub mod record_type;
pub mod view_uri;

pub use category::Category;
pub use config::{RecordConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use limits::{LimitError, Limits};
pub use property_id::{DataType, PropertyId, PropertyInfo, SearchClass};
pub use record_type::RecordType;
