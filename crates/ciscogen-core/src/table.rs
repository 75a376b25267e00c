//! Table records: VLANs and port-channels grouping interfaces.

use std::rc::Rc;

use ciscogen_types::{InterfaceMode, NegotiationMode, TableKind};
use tracing::{debug, instrument};

use crate::error::{CiscoError, CiscoResult};
use crate::interface::{Claim, InterfaceRef};
use crate::members::ChildArray;
use crate::validate;

/// A named VLAN or port-channel and its member interfaces.
///
/// Members are kept in insertion order, which is also emission order.
/// Dropping the table releases its claim on every member.
#[derive(Debug)]
pub struct Table {
    kind: TableKind,
    mode: NegotiationMode,
    member_mode: InterfaceMode,
    name: String,
    members: ChildArray<InterfaceRef>,
    claims: Vec<Claim>,
}

impl Table {
    /// Creates an unnamed, empty table.
    pub fn new(kind: TableKind, mode: NegotiationMode, member_mode: InterfaceMode) -> Self {
        Self {
            kind,
            mode,
            member_mode,
            name: String::new(),
            members: ChildArray::new("table members"),
            claims: Vec::new(),
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn mode(&self) -> NegotiationMode {
        self.mode
    }

    pub fn member_mode(&self) -> InterfaceMode {
        self.member_mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_mode(&mut self, mode: NegotiationMode) {
        self.mode = mode;
    }

    /// Sets the table label.
    ///
    /// # Errors
    ///
    /// `BufferOverflow` if the name does not fit in 128 bytes with its
    /// terminator.
    pub fn set_name(&mut self, name: impl Into<String>) -> CiscoResult<()> {
        let name = name.into();
        validate::check_table_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Adds an interface and claims it for this table.
    ///
    /// Side effect: the interface's mode is overwritten with this table's
    /// member mode. Nothing is modified if the insert fails.
    ///
    /// # Errors
    ///
    /// * `InvalidAction` if the interface already belongs to a live table, is
    ///   a port-channel member, or is currently borrowed elsewhere.
    /// * `ResourceExhausted` if the member list cannot grow.
    #[instrument(skip_all, fields(table = %self.name, kind = %self.kind))]
    pub fn add_interface(&mut self, interface: &InterfaceRef) -> CiscoResult<()> {
        let mut intf = interface
            .try_borrow_mut()
            .map_err(|_| CiscoError::invalid_action("add an interface that is borrowed elsewhere"))?;

        intf.ensure_assignable()?;
        self.members.push(Rc::clone(interface))?;
        let (previous, claim) = intf.assign_to_table(self.member_mode)?;
        self.claims.push(claim);

        debug!(
            interface = %intf.kind(),
            ports = %intf.ports(),
            from = %previous,
            to = %self.member_mode,
            members = self.members.len(),
            "Interface joined table"
        );
        Ok(())
    }

    /// Returns the member at `index`, or `None` when out of bounds.
    pub fn interface(&self, index: isize) -> Option<InterfaceRef> {
        self.members.get(index).cloned()
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[InterfaceRef] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        for claim in &self.claims {
            claim.release();
        }
    }
}
