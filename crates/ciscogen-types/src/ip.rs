//! Address family discrimination for textual IP addresses.
//!
//! Addresses are carried as text all the way to the emitted configuration,
//! so the only structure recovered from them is the family: a colon marks
//! an IPv6 literal, anything else is treated as IPv4.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest IPv4 literal in dotted-quad form (`255.255.255.255`).
pub const IPV4_MAX_TEXT_LEN: usize = 15;

/// Longest IPv6 literal, including an embedded IPv4 tail
/// (`ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255`).
pub const IPV6_MAX_TEXT_LEN: usize = 45;

/// IP address family of a textual address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Classifies an address literal by the presence of a colon.
    ///
    /// ```
    /// use ciscogen_types::AddressFamily;
    ///
    /// assert_eq!(AddressFamily::of("10.0.0.1"), AddressFamily::V4);
    /// assert_eq!(AddressFamily::of("fe80::1"), AddressFamily::V6);
    /// ```
    pub fn of(addr: &str) -> Self {
        if addr.contains(':') {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        }
    }

    /// Maximum text length accepted for an address of this family.
    pub const fn max_text_len(&self) -> usize {
        match self {
            AddressFamily::V4 => IPV4_MAX_TEXT_LEN,
            AddressFamily::V6 => IPV6_MAX_TEXT_LEN,
        }
    }

    pub const fn is_ipv4(&self) -> bool {
        matches!(self, AddressFamily::V4)
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}
