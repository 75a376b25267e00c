//! Command line builders for IOS interface configuration

use ciscogen_types::{AddressFamily, InterfaceKind, InterfaceMode, NegotiationMode, PortRange};

use crate::mask;

/// Interface selector keyword
pub const INTERFACE_CMD: &str = "interface";

/// Range selector keyword
pub const RANGE_KEYWORD: &str = "range";

/// Switchport mode prefix
pub const SWITCHPORT_MODE_CMD: &str = "switchport mode";

/// Leaves interface configuration mode
pub const EXIT_CMD: &str = "exit";

/// Port-channel negotiation command.
///
/// Every negotiation mode currently renders to this same line.
pub const CHANNEL_NEGOTIATION_CMD: &str = "channel-protocol lacp";

/// Build interface selector command
///
/// A single port selects `interface <token>/<port>`, a range selects
/// `interface range <token>/<first>-<last>`.
pub fn build_selector_cmd(kind: InterfaceKind, ports: PortRange) -> String {
    if ports.is_single() {
        format!("{} {}/{}", INTERFACE_CMD, kind.token(), ports.first())
    } else {
        format!(
            "{} {} {}/{}-{}",
            INTERFACE_CMD,
            RANGE_KEYWORD,
            kind.token(),
            ports.first(),
            ports.last()
        )
    }
}

/// Build switchport mode command
///
/// Table assignment states have no standalone mode line.
pub fn build_mode_cmd(mode: InterfaceMode) -> Option<String> {
    mode.switchport_keyword()
        .map(|keyword| format!("{} {}", SWITCHPORT_MODE_CMD, keyword))
}

/// Build IP address command
///
/// IPv4 addresses carry a dotted-decimal mask, IPv6 addresses a prefix
/// length suffix.
pub fn build_ip_address_cmd(addr: &str, prefix_len: u8) -> String {
    match AddressFamily::of(addr) {
        AddressFamily::V4 => {
            let [a, b, c, d] = mask::mask_octets(prefix_len);
            format!("ip address {} {}.{}.{}.{}", addr, a, b, c, d)
        }
        AddressFamily::V6 => format!("ipv6 address {}/{}", addr, prefix_len),
    }
}

/// Build default gateway command
pub fn build_default_gateway_cmd(gateway: &str) -> String {
    format!("ip default-gateway {}", gateway)
}

/// Build port-channel negotiation command
pub fn build_negotiation_cmd(mode: NegotiationMode) -> String {
    match mode {
        NegotiationMode::Active
        | NegotiationMode::Passive
        | NegotiationMode::Desirable
        | NegotiationMode::Auto => CHANNEL_NEGOTIATION_CMD.to_string(),
    }
}
