//! Error types for inventory loading

use std::io;
use std::path::PathBuf;

use ciscogen_core::CiscoError;
use thiserror::Error;

/// Inventory loading errors
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Inventory file could not be read
    #[error("Failed to read inventory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Inventory is not valid TOML or has the wrong shape
    #[error("Failed to parse inventory: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two interfaces share a name
    #[error("Duplicate interface name '{0}'")]
    DuplicateInterface(String),

    /// A table lists an interface that was never declared
    #[error("Table '{table}' references unknown interface '{member}'")]
    UnknownMember { table: String, member: String },

    /// A field value was rejected by the record validators
    #[error("Invalid {entry}: {source}")]
    Field {
        /// Which interface or table the value belongs to
        entry: String,
        #[source]
        source: CiscoError,
    },
}

impl InventoryError {
    pub(crate) fn field(entry: impl Into<String>, source: CiscoError) -> Self {
        Self::Field {
            entry: entry.into(),
            source,
        }
    }
}

/// Result type for inventory operations
pub type InventoryResult<T> = std::result::Result<T, InventoryError>;
