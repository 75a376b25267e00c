//! ciscogen - Cisco IOS configuration generator
//!
//! Loads an inventory of interfaces and tables from TOML, builds validated
//! records from it and renders the resulting configuration text.

mod error;
mod inventory;

pub use error::{InventoryError, InventoryResult};
pub use inventory::{
    ConfigSet, InterfaceConfig, Inventory, NamedInterface, TableConfig,
};
