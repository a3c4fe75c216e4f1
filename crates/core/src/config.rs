//! Record layer configuration via `contacts.toml`
//!
//! The service reads this file once at startup and installs the limits
//! before any record is created. Missing fields take their defaults, so an
//! empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::limits::Limits;

/// Config file name placed in the service data directory.
pub const CONFIG_FILE_NAME: &str = "contacts.toml";

/// Record layer configuration loaded from `contacts.toml`.
///
/// # Example
///
/// ```toml
/// [limits]
/// max_string_bytes = 1048576
/// max_children = 65536
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Value and list size limits
    #[serde(default)]
    pub limits: Limits,
}

impl RecordConfig {
    /// Check that every limit is usable.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_string_bytes == 0 {
            return Err(Error::Config(
                "limits.max_string_bytes must be greater than zero".to_string(),
            ));
        }
        if self.limits.max_children == 0 {
            return Err(Error::Config(
                "limits.max_children must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Contacts record layer configuration

[limits]
# Longest string a property may hold, in bytes (default: 1048576)
max_string_bytes = 1048576

# Most live records one child list may hold (default: 65536)
max_children = 65536
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RecordConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
