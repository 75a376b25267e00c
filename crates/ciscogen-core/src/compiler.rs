//! Compiles interface and table records into configuration text.
//!
//! Compilation trusts that records were built through the validated
//! mutation API and never fails.

use std::io;

use ciscogen_types::TableKind;
use tracing::{debug, warn};

use crate::commands::{
    build_default_gateway_cmd, build_ip_address_cmd, build_mode_cmd, build_negotiation_cmd,
    build_selector_cmd, EXIT_CMD,
};
use crate::interface::Interface;
use crate::table::Table;
use crate::text::ConfigText;

/// Compiles one interface block.
///
/// Line order: selector, switchport mode, address, default gateway, `exit`.
/// The gateway line is only emitted for IPv4 interfaces.
pub fn compile_interface(interface: &Interface) -> ConfigText {
    let mut text = ConfigText::new();

    text.push_line(build_selector_cmd(interface.kind(), interface.ports()));

    if let Some(mode_cmd) = build_mode_cmd(interface.mode()) {
        text.push_line(mode_cmd);
    }

    if !interface.ip_address().is_empty() {
        text.push_line(build_ip_address_cmd(
            interface.ip_address(),
            interface.subnet_mask_length(),
        ));
    }

    if !interface.gateway().is_empty() && interface.address_family().is_some_and(|f| f.is_ipv4()) {
        text.push_line(build_default_gateway_cmd(interface.gateway()));
    }

    text.push_line(EXIT_CMD);
    text
}

/// Compiles every member block in insertion order, followed by the
/// negotiation command for port-channels.
///
/// A member that is mutably borrowed while the table compiles is left out
/// of the block.
pub fn compile_table(table: &Table) -> ConfigText {
    let mut text = ConfigText::new();

    for (index, member) in table.members().iter().enumerate() {
        match member.try_borrow() {
            Ok(intf) => text.append(compile_interface(&intf)),
            Err(_) => warn!(
                table = table.name(),
                index,
                "Skipping member borrowed for writing"
            ),
        }
    }

    if table.kind() == TableKind::PortChannel {
        text.push_line(build_negotiation_cmd(table.mode()));
    }

    debug!(
        table = table.name(),
        kind = %table.kind(),
        members = table.len(),
        lines = text.len(),
        "Compiled table"
    );
    text
}

/// Writes the compiled interface block to `out`.
pub fn print_interface<W: io::Write>(out: W, interface: &Interface) -> io::Result<()> {
    compile_interface(interface).write_to(out)
}

/// Writes the compiled table block to `out`.
pub fn print_table<W: io::Write>(out: W, table: &Table) -> io::Result<()> {
    compile_table(table).write_to(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciscogen_types::{InterfaceKind, InterfaceMode, NegotiationMode, PortRange};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_access_ipv4() {
        let mut intf = Interface::new(InterfaceKind::FastEthernet, PortRange::single(0));
        intf.set_mode(InterfaceMode::Access).unwrap();
        intf.set_ip_address("192.168.1.1").unwrap();
        intf.set_subnet_mask_length(24).unwrap();

        assert_eq!(
            compile_interface(&intf).to_string(),
            "interface f0/0\n\
             switchport mode access\n\
             ip address 192.168.1.1 255.255.255.0\n\
             exit\n"
        );
    }

    #[test]
    fn test_compile_ipv4_with_gateway() {
        let mut intf = Interface::new(InterfaceKind::Vlan, PortRange::single(10));
        intf.set_ip_address("10.0.10.2").unwrap();
        intf.set_subnet_mask_length(30).unwrap();
        intf.set_gateway("10.0.10.1").unwrap();

        assert_eq!(
            compile_interface(&intf).lines(),
            &[
                "interface vlan/10",
                "switchport mode access",
                "ip address 10.0.10.2 255.255.255.252",
                "ip default-gateway 10.0.10.1",
                "exit",
            ]
        );
    }

    #[test]
    fn test_compile_ipv6_skips_gateway() {
        let mut intf = Interface::new(
            InterfaceKind::GigabitEthernet1,
            PortRange::new(2, 5).unwrap(),
        );
        intf.set_mode(InterfaceMode::Trunk).unwrap();
        intf.set_ip_address("2001:db8::2").unwrap();
        intf.set_gateway("2001:db8::1").unwrap();
        intf.set_subnet_mask_length(32).unwrap();

        assert_eq!(
            compile_interface(&intf).lines(),
            &[
                "interface range g0/1/2-5",
                "switchport mode trunk",
                "ipv6 address 2001:db8::2/32",
                "exit",
            ]
        );
    }

    #[test]
    fn test_compile_gateway_only() {
        let mut intf = Interface::new(InterfaceKind::Serial0, PortRange::single(1));
        intf.set_gateway("172.16.0.1").unwrap();

        assert_eq!(
            compile_interface(&intf).lines(),
            &[
                "interface s0/0/1",
                "switchport mode access",
                "ip default-gateway 172.16.0.1",
                "exit",
            ]
        );
    }

    #[test]
    fn test_compile_empty_vlan_table() {
        let table = Table::new(TableKind::Vlan, NegotiationMode::Active, InterfaceMode::InVlan);
        assert!(compile_table(&table).is_empty());
    }

    #[test]
    fn test_compile_empty_port_channel() {
        let table = Table::new(
            TableKind::PortChannel,
            NegotiationMode::Desirable,
            InterfaceMode::InPortChannel,
        );
        assert_eq!(compile_table(&table).to_string(), "channel-protocol lacp\n");
    }

    #[test]
    fn test_compile_table_skips_member_borrowed_for_writing() {
        let mut table = Table::new(TableKind::Vlan, NegotiationMode::Active, InterfaceMode::InVlan);
        let first = Interface::new(InterfaceKind::FastEthernet, PortRange::single(1)).into_ref();
        let second = Interface::new(InterfaceKind::FastEthernet, PortRange::single(2)).into_ref();
        table.add_interface(&first).unwrap();
        table.add_interface(&second).unwrap();

        let guard = first.borrow_mut();
        assert_eq!(compile_table(&table).lines(), &["interface f0/2", "exit"]);
        drop(guard);

        assert_eq!(compile_table(&table).len(), 4);
    }

    #[test]
    fn test_print_interface() {
        let intf = Interface::new(InterfaceKind::FastEthernet, PortRange::single(3));
        let mut out = Vec::new();
        print_interface(&mut out, &intf).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "interface f0/3\nswitchport mode access\nexit\n"
        );
    }
}
