//! Value types shared by the Cisco configuration generator.
//!
//! This crate provides type-safe representations of the primitives an
//! interface or interface group is built from:
//!
//! - [`InterfaceKind`]: interface families and their CLI selector tokens
//! - [`InterfaceMode`]: switchport modes, including table assignment states
//! - [`TableKind`] / [`NegotiationMode`]: VLAN and port-channel groups
//! - [`PortRange`]: a single port or an inclusive port range
//! - [`VlanId`]: 802.1Q VLAN identifiers as accepted on allowed-VLAN lists
//! - [`AddressFamily`]: IPv4/IPv6 discrimination of textual addresses

mod ip;
mod kind;
mod port;
mod vlan;

pub use ip::{AddressFamily, IPV4_MAX_TEXT_LEN, IPV6_MAX_TEXT_LEN};
pub use kind::{InterfaceKind, InterfaceMode, NegotiationMode, TableKind};
pub use port::PortRange;
pub use vlan::VlanId;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid interface kind: {0}")]
    InvalidInterfaceKind(String),

    #[error("invalid interface mode: {0}")]
    InvalidMode(String),

    #[error("invalid table kind: {0}")]
    InvalidTableKind(String),

    #[error("invalid negotiation mode: {0}")]
    InvalidNegotiationMode(String),

    #[error("invalid VLAN ID: {0} (must be 0-4095)")]
    InvalidVlanId(u16),

    #[error("invalid port range {first}-{last} (first must not exceed last)")]
    InvalidPortRange { first: u16, last: u16 },

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}
