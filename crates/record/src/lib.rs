//! Record instances for the contacts record layer
//!
//! This crate holds everything that operates on live records:
//! - registry: view URI to record type and property table lookup
//! - Record: one typed entity with projection and dirty tracking
//! - RecordList: ordered child collections with staged deletions
//! - RecordOps / RecordBody: per-type storage and dispatch
//! - TrustedAccess: write path for the storage layer that skips read-only checks
//!
//! Size limits are process-wide. Install them once at startup with
//! [`install_config`] before any record is created; until then the defaults
//! from [`Limits::default`] apply.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod flags;
pub mod list;
pub mod record;
pub mod registry;
pub mod trusted;
pub mod types;
mod views;

pub use dispatch::{RecordBody, RecordOps};
pub use flags::{ProjectionState, PropertyFlag, PropertyFlags};
pub use list::RecordList;
pub use record::Record;
pub use registry::{PropertyDescriptor, ViewDescriptor};
pub use trusted::TrustedAccess;

use contacts_core::{Limits, RecordConfig, Result};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static LIMITS: OnceCell<Limits> = OnceCell::new();

/// Install process-wide size limits
///
/// Returns `false` and keeps the current limits if limits were already
/// installed or already read by a record operation.
pub fn install_limits(limits: Limits) -> bool {
    match LIMITS.set(limits) {
        Ok(()) => {
            info!(
                max_string_bytes = limits.max_string_bytes,
                max_children = limits.max_children,
                "Installed record limits"
            );
            true
        }
        Err(_) => {
            warn!("Record limits already installed, ignoring new values");
            false
        }
    }
}

/// Validate a loaded configuration and install its limits
///
/// # Errors
///
/// Returns `Error::Config` if the configuration fails validation.
pub fn install_config(config: &RecordConfig) -> Result<bool> {
    config.validate()?;
    Ok(install_limits(config.limits))
}

/// Limits currently in force
pub fn limits() -> &'static Limits {
    LIMITS.get_or_init(Limits::default)
}
