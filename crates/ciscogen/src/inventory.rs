//! Inventory file support
//!
//! An inventory declares interfaces and the tables that group them:
//!
//! ```toml
//! [[interfaces]]
//! name = "uplink"
//! kind = "g0/0"
//! ports = [1, 2]
//! mode = "trunk"
//!
//! [[tables]]
//! name = "Port-channel1"
//! kind = "port-channel"
//! mode = "active"
//! members = ["uplink"]
//! ```
//!
//! Every value goes through the record validators while the inventory is
//! built, so a loaded [`ConfigSet`] always compiles.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ciscogen_core::{
    compile_interface, compile_table, ConfigText, Interface, InterfaceChange, InterfaceRef, Table,
};
use ciscogen_types::{InterfaceKind, InterfaceMode, NegotiationMode, PortRange, TableKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{InventoryError, InventoryResult};

/// One interface entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Name tables use to refer to this interface
    pub name: String,

    /// Interface kind, by long name or selector token
    pub kind: InterfaceKind,

    /// First and last port; equal values select a single port
    pub ports: PortRange,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<InterfaceMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Allowed VLANs in the order they are appended
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_vlans: Vec<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_mask_length: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

/// One table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,

    pub kind: TableKind,

    /// Negotiation mode (port-channels only)
    #[serde(default)]
    pub mode: NegotiationMode,

    /// Mode forced onto members; defaults by table kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_mode: Option<InterfaceMode>,

    /// Interface names, in emission order
    #[serde(default)]
    pub members: Vec<String>,
}

/// Complete inventory document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub interfaces: Vec<InterfaceConfig>,

    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

/// A built interface with its inventory name
#[derive(Debug)]
pub struct NamedInterface {
    pub name: String,
    pub interface: InterfaceRef,
}

/// Records built from an inventory.
///
/// Tables are kept alive here so their members stay claimed until the set
/// is dropped.
#[derive(Debug)]
pub struct ConfigSet {
    interfaces: Vec<NamedInterface>,
    tables: Vec<Table>,
}

impl InterfaceConfig {
    /// Field changes in application order.
    ///
    /// The gateway goes last so a family mismatch is reported against it.
    fn changes(&self) -> Vec<InterfaceChange> {
        let mut changes = Vec::new();

        if let Some(mode) = self.mode {
            changes.push(InterfaceChange::Mode(mode));
        }
        if let Some(description) = &self.description {
            changes.push(InterfaceChange::Description(description.clone()));
        }
        changes.extend(self.allowed_vlans.iter().copied().map(InterfaceChange::AllowVlan));
        if let Some(addr) = &self.ip_address {
            changes.push(InterfaceChange::IpAddress(addr.clone()));
        }
        if let Some(len) = self.subnet_mask_length {
            changes.push(InterfaceChange::SubnetMaskLength(len));
        }
        if let Some(gateway) = &self.gateway {
            changes.push(InterfaceChange::Gateway(gateway.clone()));
        }

        changes
    }

    fn build(&self) -> InventoryResult<Interface> {
        let mut intf = Interface::new(self.kind, self.ports);
        for change in self.changes() {
            intf.apply(change)
                .map_err(|e| InventoryError::field(format!("interface '{}'", self.name), e))?;
        }
        Ok(intf)
    }
}

impl TableConfig {
    fn build(&self, interfaces: &HashMap<&str, InterfaceRef>) -> InventoryResult<Table> {
        let entry = || format!("table '{}'", self.name);
        let member_mode = self
            .member_mode
            .unwrap_or_else(|| self.kind.default_member_mode());

        let mut table = Table::new(self.kind, self.mode, member_mode);
        table
            .set_name(self.name.as_str())
            .map_err(|e| InventoryError::field(entry(), e))?;

        for member in &self.members {
            let intf = interfaces
                .get(member.as_str())
                .ok_or_else(|| InventoryError::UnknownMember {
                    table: self.name.clone(),
                    member: member.clone(),
                })?;
            table
                .add_interface(intf)
                .map_err(|e| InventoryError::field(entry(), e))?;
        }

        Ok(table)
    }
}

impl Inventory {
    /// Parse an inventory from TOML text
    pub fn from_toml_str(content: &str) -> InventoryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load an inventory file
    pub fn load(path: impl AsRef<Path>) -> InventoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let inventory = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            interfaces = inventory.interfaces.len(),
            tables = inventory.tables.len(),
            "Loaded inventory"
        );
        Ok(inventory)
    }

    /// Serialize the inventory back to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build validated records from the inventory.
    ///
    /// Interfaces are built first, in declaration order, then tables claim
    /// their members.
    pub fn build(&self) -> InventoryResult<ConfigSet> {
        let mut interfaces = Vec::with_capacity(self.interfaces.len());
        let mut by_name: HashMap<&str, InterfaceRef> = HashMap::new();

        for config in &self.interfaces {
            let interface = config.build()?.into_ref();
            if by_name
                .insert(config.name.as_str(), InterfaceRef::clone(&interface))
                .is_some()
            {
                return Err(InventoryError::DuplicateInterface(config.name.clone()));
            }
            debug!(name = %config.name, kind = %config.kind, ports = %config.ports, "Built interface");
            interfaces.push(NamedInterface {
                name: config.name.clone(),
                interface,
            });
        }

        let tables = self
            .tables
            .iter()
            .map(|config| config.build(&by_name))
            .collect::<InventoryResult<Vec<_>>>()?;

        Ok(ConfigSet { interfaces, tables })
    }
}

impl ConfigSet {
    pub fn interfaces(&self) -> &[NamedInterface] {
        &self.interfaces
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a built interface by inventory name
    pub fn interface(&self, name: &str) -> Option<&InterfaceRef> {
        self.interfaces
            .iter()
            .find(|named| named.name == name)
            .map(|named| &named.interface)
    }

    /// Render the whole configuration.
    ///
    /// Interfaces no table claimed come first, in declaration order,
    /// followed by each table block.
    pub fn render(&self) -> ConfigText {
        let mut text = ConfigText::new();

        for named in &self.interfaces {
            let intf = named.interface.borrow();
            if !intf.is_claimed() {
                text.append(compile_interface(&intf));
            }
        }

        for table in &self.tables {
            text.append(compile_table(table));
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciscogen_core::CiscoError;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
[[interfaces]]
name = "lan"
kind = "fast-ethernet"
ports = [0, 0]
ip_address = "192.168.1.1"
subnet_mask_length = 24

[[interfaces]]
name = "up1"
kind = "g0/0"
ports = [1, 1]
mode = "trunk"

[[interfaces]]
name = "up2"
kind = "g0/0"
ports = [2, 2]

[[tables]]
name = "Port-channel1"
kind = "port-channel"
mode = "passive"
members = ["up1", "up2"]
"#;

    #[test]
    fn test_toml_deserialization() {
        let inventory = Inventory::from_toml_str(SAMPLE).unwrap();
        assert_eq!(inventory.interfaces.len(), 3);
        assert_eq!(inventory.interfaces[0].kind, InterfaceKind::FastEthernet);
        assert_eq!(inventory.interfaces[1].mode, Some(InterfaceMode::Trunk));
        assert_eq!(inventory.interfaces[2].mode, None);

        let table = &inventory.tables[0];
        assert_eq!(table.kind, TableKind::PortChannel);
        assert_eq!(table.mode, NegotiationMode::Passive);
        // Unspecified values use defaults
        assert_eq!(table.member_mode, None);
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::from_toml_str("").unwrap();
        assert_eq!(inventory, Inventory::default());
        assert!(inventory.build().unwrap().render().is_empty());
    }

    #[test]
    fn test_reversed_ports_rejected_at_parse() {
        let doc = r#"
[[interfaces]]
name = "bad"
kind = "f0"
ports = [4, 1]
"#;
        assert!(matches!(
            Inventory::from_toml_str(doc).unwrap_err(),
            InventoryError::Parse(_)
        ));
    }

    #[test]
    fn test_build_claims_members() {
        let set = Inventory::from_toml_str(SAMPLE).unwrap().build().unwrap();

        let up1 = set.interface("up1").unwrap();
        assert!(up1.borrow().is_claimed());
        assert_eq!(up1.borrow().mode(), InterfaceMode::InPortChannel);
        assert!(!set.interface("lan").unwrap().borrow().is_claimed());
        assert_eq!(set.tables()[0].name(), "Port-channel1");
    }

    #[test]
    fn test_render_order() {
        let set = Inventory::from_toml_str(SAMPLE).unwrap().build().unwrap();
        assert_eq!(
            set.render().to_string(),
            "interface f0/0\n\
             switchport mode access\n\
             ip address 192.168.1.1 255.255.255.0\n\
             exit\n\
             interface g0/0/1\n\
             exit\n\
             interface g0/0/2\n\
             exit\n\
             channel-protocol lacp\n"
        );
    }

    #[test]
    fn test_duplicate_interface_name() {
        let doc = r#"
[[interfaces]]
name = "a"
kind = "f0"
ports = [0, 0]

[[interfaces]]
name = "a"
kind = "f0"
ports = [1, 1]
"#;
        let err = Inventory::from_toml_str(doc).unwrap().build().unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateInterface(name) if name == "a"));
    }

    #[test]
    fn test_unknown_member() {
        let doc = r#"
[[tables]]
name = "Vlan10"
kind = "vlan"
members = ["ghost"]
"#;
        let err = Inventory::from_toml_str(doc).unwrap().build().unwrap_err();
        assert!(matches!(err, InventoryError::UnknownMember { .. }));
    }

    #[test]
    fn test_member_in_two_tables() {
        let doc = r#"
[[interfaces]]
name = "p"
kind = "f0"
ports = [0, 0]

[[tables]]
name = "Vlan10"
kind = "vlan"
members = ["p"]

[[tables]]
name = "Vlan20"
kind = "vlan"
members = ["p"]
"#;
        let err = Inventory::from_toml_str(doc).unwrap().build().unwrap_err();
        match err {
            InventoryError::Field { entry, source } => {
                assert_eq!(entry, "table 'Vlan20'");
                assert!(matches!(source, CiscoError::InvalidAction { .. }));
            }
            other => panic!("Expected Field error, got {:?}", other),
        }
    }

    #[test]
    fn test_address_family_mismatch_names_interface() {
        let doc = r#"
[[interfaces]]
name = "wan"
kind = "s0/0"
ports = [0, 0]
ip_address = "10.0.0.1"
gateway = "fe80::1"
"#;
        let err = Inventory::from_toml_str(doc).unwrap().build().unwrap_err();
        assert!(err.to_string().starts_with("Invalid interface 'wan'"));
        assert!(matches!(
            err,
            InventoryError::Field {
                source: CiscoError::MismatchedAddressFamily { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let inventory = Inventory::from_toml_str(SAMPLE).unwrap();
        let text = inventory.to_toml_string().unwrap();
        assert!(text.contains("kind = \"fast-ethernet\""));
        assert_eq!(Inventory::from_toml_str(&text).unwrap(), inventory);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = Inventory::load("/nonexistent/inventory.toml").unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
    }
}
