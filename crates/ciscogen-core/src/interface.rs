//! Interface records and their validated mutation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ciscogen_types::{AddressFamily, InterfaceKind, InterfaceMode, PortRange, VlanId};
use tracing::{debug, warn};

use crate::error::{CiscoError, CiscoResult};
use crate::members::ChildArray;
use crate::validate;

/// Shared handle to an interface.
///
/// Tables hold these without owning the interface; the caller's handle may
/// outlive any table it was added to.
pub type InterfaceRef = Rc<RefCell<Interface>>;

/// Table claim on an interface.
///
/// Shared between the interface and the claiming table so the table can
/// release it without borrowing the interface.
#[derive(Debug, Clone, Default)]
pub(crate) struct Claim(Rc<Cell<bool>>);

impl Claim {
    fn is_held(&self) -> bool {
        self.0.get()
    }

    fn hold(&self) {
        self.0.set(true);
    }

    pub(crate) fn release(&self) {
        self.0.set(false);
    }
}

/// Field names accepted by [`InterfaceChange::parse`].
pub mod fields {
    pub const KIND: &str = "kind";
    pub const MODE: &str = "mode";
    pub const PORTS: &str = "ports";
    pub const DESCRIPTION: &str = "description";
    pub const ALLOWED_VLAN: &str = "allowed_vlan";
    pub const IP_ADDRESS: &str = "ip_address";
    pub const GATEWAY: &str = "gateway";
    pub const SUBNET_MASK_LENGTH: &str = "subnet_mask_length";
}

/// A single field change to apply to an [`Interface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceChange {
    Kind(InterfaceKind),
    Mode(InterfaceMode),
    Ports { first: u16, last: u16 },
    Description(String),
    /// Appends one VLAN to the allowed list.
    AllowVlan(u16),
    IpAddress(String),
    Gateway(String),
    SubnetMaskLength(u8),
}

impl InterfaceChange {
    /// Name of the field this change writes.
    pub fn field(&self) -> &'static str {
        match self {
            InterfaceChange::Kind(_) => fields::KIND,
            InterfaceChange::Mode(_) => fields::MODE,
            InterfaceChange::Ports { .. } => fields::PORTS,
            InterfaceChange::Description(_) => fields::DESCRIPTION,
            InterfaceChange::AllowVlan(_) => fields::ALLOWED_VLAN,
            InterfaceChange::IpAddress(_) => fields::IP_ADDRESS,
            InterfaceChange::Gateway(_) => fields::GATEWAY,
            InterfaceChange::SubnetMaskLength(_) => fields::SUBNET_MASK_LENGTH,
        }
    }

    /// Builds a change from a textual field name and value.
    ///
    /// Unknown field names are rejected with `InvalidAction`; values that do
    /// not parse are rejected with `InvalidValue` or `OutOfRange`. Range
    /// rules that depend on the record are left to [`Interface::apply`].
    pub fn parse(field: &str, value: &str) -> CiscoResult<Self> {
        let change = match field.trim().to_lowercase().replace('-', "_").as_str() {
            fields::KIND | "type" => InterfaceChange::Kind(value.parse()?),
            fields::MODE => InterfaceChange::Mode(value.parse()?),
            fields::PORTS => {
                let range: PortRange = value.parse()?;
                InterfaceChange::Ports {
                    first: range.first(),
                    last: range.last(),
                }
            }
            fields::DESCRIPTION | "desc" => InterfaceChange::Description(value.to_string()),
            fields::ALLOWED_VLAN | "allow_vlan" => {
                let id = parse_bounded(fields::ALLOWED_VLAN, value, u64::from(VlanId::MAX))?;
                InterfaceChange::AllowVlan(id as u16)
            }
            fields::IP_ADDRESS | "ip" => InterfaceChange::IpAddress(value.trim().to_string()),
            fields::GATEWAY => InterfaceChange::Gateway(value.trim().to_string()),
            fields::SUBNET_MASK_LENGTH | "submask" | "prefix_len" => {
                let len = parse_bounded(fields::SUBNET_MASK_LENGTH, value, 32)?;
                InterfaceChange::SubnetMaskLength(len as u8)
            }
            other => return Err(CiscoError::invalid_action(format!("set unknown field '{}'", other))),
        };
        Ok(change)
    }
}

fn parse_bounded(field: &'static str, value: &str, max: u64) -> CiscoResult<u64> {
    let number: u64 = value
        .trim()
        .parse()
        .map_err(|_| CiscoError::invalid_value(field, value))?;
    if number > max {
        return Err(CiscoError::out_of_range(field, number, max));
    }
    Ok(number)
}

/// Configuration of one port, port range or logical interface.
#[derive(Debug)]
pub struct Interface {
    kind: InterfaceKind,
    mode: InterfaceMode,
    ports: PortRange,
    description: String,
    allowed_vlans: ChildArray<VlanId>,
    ip_address: String,
    subnet_mask_length: u8,
    gateway: String,
    claim: Claim,
}

impl Interface {
    /// Creates an interface in access mode with every other field empty.
    pub fn new(kind: InterfaceKind, ports: PortRange) -> Self {
        Self {
            kind,
            mode: InterfaceMode::default(),
            ports,
            description: String::new(),
            allowed_vlans: ChildArray::new("allowed VLAN list"),
            ip_address: String::new(),
            subnet_mask_length: 0,
            gateway: String::new(),
            claim: Claim::default(),
        }
    }

    /// Wraps the interface in a shared handle for use with tables.
    pub fn into_ref(self) -> InterfaceRef {
        Rc::new(RefCell::new(self))
    }

    pub fn kind(&self) -> InterfaceKind {
        self.kind
    }

    pub fn mode(&self) -> InterfaceMode {
        self.mode
    }

    pub fn ports(&self) -> PortRange {
        self.ports
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn allowed_vlans(&self) -> &[VlanId] {
        &self.allowed_vlans
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn subnet_mask_length(&self) -> u8 {
        self.subnet_mask_length
    }

    /// Returns true while a live table holds this interface.
    pub fn is_claimed(&self) -> bool {
        self.claim.is_held()
    }

    /// Address family of the interface, taken from whichever of the IP
    /// address and gateway is set. Both agree when both are set.
    pub fn address_family(&self) -> Option<AddressFamily> {
        [&self.ip_address, &self.gateway]
            .into_iter()
            .find(|addr| !addr.is_empty())
            .map(|addr| AddressFamily::of(addr))
    }

    /// Validates and applies one field change.
    ///
    /// All checks run before the write, so a rejected change leaves the
    /// interface untouched.
    pub fn apply(&mut self, change: InterfaceChange) -> CiscoResult<()> {
        let field = change.field();
        match self.apply_inner(change) {
            Ok(()) => {
                debug!(kind = %self.kind, ports = %self.ports, field, "Applied interface change");
                Ok(())
            }
            Err(e) => {
                warn!(
                    kind = %self.kind,
                    ports = %self.ports,
                    field,
                    error = e.kind(),
                    "Rejected interface change: {}",
                    e
                );
                Err(e)
            }
        }
    }

    fn apply_inner(&mut self, change: InterfaceChange) -> CiscoResult<()> {
        match change {
            InterfaceChange::Kind(kind) => {
                self.kind = kind;
            }
            InterfaceChange::Mode(mode) => {
                validate::check_mode_change(self.mode, mode)?;
                self.mode = mode;
            }
            InterfaceChange::Ports { first, last } => {
                self.ports = validate::check_ports(first, last)?;
            }
            InterfaceChange::Description(description) => {
                validate::check_description(&description)?;
                self.description = description;
            }
            InterfaceChange::AllowVlan(id) => {
                let vlan = validate::check_vlan(id)?;
                self.allowed_vlans.push(vlan)?;
            }
            InterfaceChange::IpAddress(addr) => {
                validate::check_address(fields::IP_ADDRESS, &addr, fields::GATEWAY, &self.gateway)?;
                self.ip_address = addr;
            }
            InterfaceChange::Gateway(addr) => {
                validate::check_address(fields::GATEWAY, &addr, fields::IP_ADDRESS, &self.ip_address)?;
                self.gateway = addr;
            }
            InterfaceChange::SubnetMaskLength(len) => {
                self.subnet_mask_length = validate::check_prefix_len(len)?;
            }
        }
        Ok(())
    }

    pub fn set_kind(&mut self, kind: InterfaceKind) -> CiscoResult<()> {
        self.apply(InterfaceChange::Kind(kind))
    }

    pub fn set_mode(&mut self, mode: InterfaceMode) -> CiscoResult<()> {
        self.apply(InterfaceChange::Mode(mode))
    }

    pub fn set_ports(&mut self, first: u16, last: u16) -> CiscoResult<()> {
        self.apply(InterfaceChange::Ports { first, last })
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> CiscoResult<()> {
        self.apply(InterfaceChange::Description(description.into()))
    }

    pub fn allow_vlan(&mut self, id: u16) -> CiscoResult<()> {
        self.apply(InterfaceChange::AllowVlan(id))
    }

    pub fn set_ip_address(&mut self, addr: impl Into<String>) -> CiscoResult<()> {
        self.apply(InterfaceChange::IpAddress(addr.into()))
    }

    pub fn set_gateway(&mut self, addr: impl Into<String>) -> CiscoResult<()> {
        self.apply(InterfaceChange::Gateway(addr.into()))
    }

    pub fn set_subnet_mask_length(&mut self, len: u8) -> CiscoResult<()> {
        self.apply(InterfaceChange::SubnetMaskLength(len))
    }

    /// Checks that a table may claim this interface.
    pub(crate) fn ensure_assignable(&self) -> CiscoResult<()> {
        if self.claim.is_held() {
            return Err(CiscoError::invalid_action(format!(
                "add {} {} to a second table",
                self.kind, self.ports
            )));
        }
        if self.mode.is_terminal() {
            return Err(CiscoError::invalid_action(format!(
                "reassign port-channel member {} {}",
                self.kind, self.ports
            )));
        }
        Ok(())
    }

    /// Transfers the interface to a table.
    ///
    /// Side effect: the interface is marked claimed and its mode is
    /// overwritten with `member_mode`, bypassing the caller-facing mode
    /// rules. Returns the mode it had before and the claim the table must
    /// release. Releasing keeps the assigned mode in place.
    pub(crate) fn assign_to_table(
        &mut self,
        member_mode: InterfaceMode,
    ) -> CiscoResult<(InterfaceMode, Claim)> {
        self.ensure_assignable()?;
        let previous = self.mode;
        self.mode = member_mode;
        self.claim.hold();
        Ok((previous, self.claim.clone()))
    }
}
