//! Interface and table classifications.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface family of a port or logical interface.
///
/// Each kind maps to the fixed selector token used on `interface` lines.
/// Numeric codes follow declaration order and end at [`InterfaceKind::Vlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InterfaceKind {
    /// FastEthernet0 (`f0`).
    FastEthernet,
    /// GigabitEthernet0/0 (`g0/0`).
    GigabitEthernet0,
    /// GigabitEthernet0/1 (`g0/1`).
    GigabitEthernet1,
    /// Serial0/0 (`s0/0`).
    Serial0,
    /// Serial0/1 (`s0/1`).
    Serial1,
    /// Switched virtual interface (`vlan`).
    Vlan,
}

impl InterfaceKind {
    /// All kinds in code order.
    pub const ALL: [InterfaceKind; 6] = [
        InterfaceKind::FastEthernet,
        InterfaceKind::GigabitEthernet0,
        InterfaceKind::GigabitEthernet1,
        InterfaceKind::Serial0,
        InterfaceKind::Serial1,
        InterfaceKind::Vlan,
    ];

    /// Selector token emitted after `interface`.
    pub const fn token(&self) -> &'static str {
        match self {
            InterfaceKind::FastEthernet => "f0",
            InterfaceKind::GigabitEthernet0 => "g0/0",
            InterfaceKind::GigabitEthernet1 => "g0/1",
            InterfaceKind::Serial0 => "s0/0",
            InterfaceKind::Serial1 => "s0/1",
            InterfaceKind::Vlan => "vlan",
        }
    }

    /// Long, human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            InterfaceKind::FastEthernet => "fast-ethernet",
            InterfaceKind::GigabitEthernet0 => "gigabit-ethernet-0/0",
            InterfaceKind::GigabitEthernet1 => "gigabit-ethernet-0/1",
            InterfaceKind::Serial0 => "serial-0/0",
            InterfaceKind::Serial1 => "serial-0/1",
            InterfaceKind::Vlan => "vlan",
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterfaceKind {
    type Err = ParseError;

    /// Accepts either the long name or the selector token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        InterfaceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower || kind.token() == lower)
            .ok_or_else(|| ParseError::InvalidInterfaceKind(s.to_string()))
    }
}

impl TryFrom<u8> for InterfaceKind {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        InterfaceKind::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| ParseError::InvalidInterfaceKind(code.to_string()))
    }
}

impl TryFrom<String> for InterfaceKind {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InterfaceKind> for String {
    fn from(kind: InterfaceKind) -> String {
        kind.name().to_string()
    }
}

/// Switching mode of an interface.
///
/// `InVlan` and `InPortChannel` are assignment states: a table puts its
/// members into them, callers never choose them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InterfaceMode {
    #[default]
    Access,
    Trunk,
    Auto,
    InVlan,
    InPortChannel,
}

impl InterfaceMode {
    /// All modes in code order.
    pub const ALL: [InterfaceMode; 5] = [
        InterfaceMode::Access,
        InterfaceMode::Trunk,
        InterfaceMode::Auto,
        InterfaceMode::InVlan,
        InterfaceMode::InPortChannel,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            InterfaceMode::Access => "access",
            InterfaceMode::Trunk => "trunk",
            InterfaceMode::Auto => "auto",
            InterfaceMode::InVlan => "in-vlan",
            InterfaceMode::InPortChannel => "in-port-channel",
        }
    }

    /// Keyword for a `switchport mode` line, if this mode has one.
    pub const fn switchport_keyword(&self) -> Option<&'static str> {
        match self {
            InterfaceMode::Access => Some("access"),
            InterfaceMode::Trunk => Some("trunk"),
            InterfaceMode::Auto => Some("auto"),
            InterfaceMode::InVlan | InterfaceMode::InPortChannel => None,
        }
    }

    /// Returns true for the states only a table may assign.
    pub const fn is_assignment_state(&self) -> bool {
        matches!(self, InterfaceMode::InVlan | InterfaceMode::InPortChannel)
    }

    /// Returns true if no further mode change is permitted.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, InterfaceMode::InPortChannel)
    }
}

impl fmt::Display for InterfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "access" => Ok(InterfaceMode::Access),
            "trunk" => Ok(InterfaceMode::Trunk),
            "auto" | "dynamic" => Ok(InterfaceMode::Auto),
            "in-vlan" => Ok(InterfaceMode::InVlan),
            "in-port-channel" | "in-portch" => Ok(InterfaceMode::InPortChannel),
            _ => Err(ParseError::InvalidMode(s.to_string())),
        }
    }
}

impl TryFrom<u8> for InterfaceMode {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        InterfaceMode::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| ParseError::InvalidMode(code.to_string()))
    }
}

impl TryFrom<String> for InterfaceMode {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InterfaceMode> for String {
    fn from(mode: InterfaceMode) -> String {
        mode.as_str().to_string()
    }
}

/// Kind of interface group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    Vlan,
    PortChannel,
}

impl TableKind {
    /// Mode a member takes when this kind of table claims it.
    pub const fn default_member_mode(&self) -> InterfaceMode {
        match self {
            TableKind::Vlan => InterfaceMode::InVlan,
            TableKind::PortChannel => InterfaceMode::InPortChannel,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Vlan => write!(f, "vlan"),
            TableKind::PortChannel => write!(f, "port-channel"),
        }
    }
}

impl FromStr for TableKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "vlan" => Ok(TableKind::Vlan),
            "port-channel" | "portchannel" | "portch" => Ok(TableKind::PortChannel),
            _ => Err(ParseError::InvalidTableKind(s.to_string())),
        }
    }
}

/// Port-channel negotiation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegotiationMode {
    #[default]
    Active,
    Passive,
    Desirable,
    Auto,
}

impl fmt::Display for NegotiationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NegotiationMode::Active => "active",
            NegotiationMode::Passive => "passive",
            NegotiationMode::Desirable => "desirable",
            NegotiationMode::Auto => "auto",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NegotiationMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(NegotiationMode::Active),
            "passive" => Ok(NegotiationMode::Passive),
            "desirable" => Ok(NegotiationMode::Desirable),
            "auto" => Ok(NegotiationMode::Auto),
            _ => Err(ParseError::InvalidNegotiationMode(s.to_string())),
        }
    }
}
