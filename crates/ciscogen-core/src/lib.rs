//! Interface and table records for Cisco IOS configuration generation.
//!
//! This crate holds the validated data model and the text compiler:
//!
//! - [`Interface`] / [`InterfaceChange`]: per-port records and the closed set
//!   of field changes that may be applied to them
//! - [`Table`]: VLAN and port-channel groups that claim their members
//! - [`validate`]: field rules checked before every write
//! - [`subnet_mask_octets`]: CIDR prefix length to dotted-decimal mask
//! - [`compile_interface`] / [`compile_table`]: record to command text
//! - [`error`]: error types for mutation and composition
//!
//! # Example
//!
//! ```
//! use ciscogen_core::{compile_interface, Interface};
//! use ciscogen_types::{InterfaceKind, PortRange};
//!
//! let mut intf = Interface::new(InterfaceKind::FastEthernet, PortRange::single(0));
//! intf.set_ip_address("192.168.1.1")?;
//! intf.set_subnet_mask_length(24)?;
//!
//! assert_eq!(
//!     compile_interface(&intf).to_string(),
//!     "interface f0/0\nswitchport mode access\nip address 192.168.1.1 255.255.255.0\nexit\n"
//! );
//! # Ok::<(), ciscogen_core::CiscoError>(())
//! ```

pub mod commands;
pub mod compiler;
pub mod error;
pub mod interface;
pub mod mask;
pub mod members;
pub mod table;
pub mod text;
pub mod validate;

// Re-export commonly used items at crate root
pub use compiler::{compile_interface, compile_table, print_interface, print_table};
pub use error::{CiscoError, CiscoResult};
pub use interface::{Interface, InterfaceChange, InterfaceRef};
pub use mask::{subnet_mask, subnet_mask_octets};
pub use members::ChildArray;
pub use table::Table;
pub use text::ConfigText;
