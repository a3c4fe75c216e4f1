//! contacts-db - Record and property data-access layer for a contacts service
//!
//! Every entity the contacts service handles (contacts, persons, groups,
//! phone numbers, call logs, speed dials, query results) is a [`Record`]:
//! a typed container addressed by [`PropertyId`]s, bound to a view URI,
//! with per-property projection and dirty tracking.
//!
//! # Quick Start
//!
//! ```ignore
//! use contacts_db::{properties::{contact, number}, view_uri, Record};
//!
//! let mut person = Record::new(view_uri::CONTACT)?;
//! person.set_str(contact::RINGTONE_PATH, Some("/opt/ring.ogg"))?;
//!
//! let mut phone = Record::new(view_uri::NUMBER)?;
//! phone.set_str(number::NUMBER, Some("010-000-0000"))?;
//! person.add_child(contact::NUMBER, phone)?;
//!
//! assert_eq!(person.child_count(contact::NUMBER)?, 1);
//! ```
//!
//! # Architecture
//!
//! - `contacts-core`: identifiers, record types, errors, limits and config
//! - `contacts-record`: the registry, records, record lists and trusted access
//!
//! Storage, IPC and vCard live outside this crate and talk to it through
//! the public record API and [`TrustedAccess`].

pub use contacts_core::*;
pub use contacts_record::*;
