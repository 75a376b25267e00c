//! Field validators.
//!
//! Each check inspects a candidate value (and, where the rule needs it, the
//! record's current state) without mutating anything. Callers run every
//! applicable check before writing.

use ciscogen_types::{AddressFamily, InterfaceMode, PortRange, VlanId};

use crate::error::{CiscoError, CiscoResult};
use crate::mask::MAX_PREFIX_LEN;

/// Description buffer size in bytes, terminator included.
pub const DESCRIPTION_CAPACITY: usize = 4096;

/// Table name buffer size in bytes, terminator included.
pub const TABLE_NAME_CAPACITY: usize = 128;

/// Checks that `value` plus a terminator fits in `capacity` bytes.
pub fn check_buffer(field: &'static str, value: &str, capacity: usize) -> CiscoResult<()> {
    if value.len() + 1 > capacity {
        return Err(CiscoError::BufferOverflow {
            field,
            len: value.len(),
            capacity,
        });
    }
    Ok(())
}

pub fn check_description(description: &str) -> CiscoResult<()> {
    check_buffer("description", description, DESCRIPTION_CAPACITY)
}

pub fn check_table_name(name: &str) -> CiscoResult<()> {
    check_buffer("table name", name, TABLE_NAME_CAPACITY)
}

/// Checks a requested mode against the interface's current mode.
///
/// A port-channel member cannot change mode at all. The table assignment
/// states are never accepted from a caller.
pub fn check_mode_change(current: InterfaceMode, requested: InterfaceMode) -> CiscoResult<()> {
    if current.is_terminal() {
        return Err(CiscoError::invalid_action(format!(
            "change mode of a port-channel member to {}",
            requested
        )));
    }
    if requested.is_assignment_state() {
        return Err(CiscoError::invalid_value("mode", requested));
    }
    Ok(())
}

pub fn check_ports(first: u16, last: u16) -> CiscoResult<PortRange> {
    PortRange::new(first, last).map_err(CiscoError::from)
}

pub fn check_vlan(id: u16) -> CiscoResult<VlanId> {
    VlanId::new(id).map_err(CiscoError::from)
}

pub fn check_prefix_len(prefix_len: u8) -> CiscoResult<u8> {
    if prefix_len > MAX_PREFIX_LEN {
        return Err(CiscoError::out_of_range(
            "subnet mask length",
            prefix_len,
            MAX_PREFIX_LEN,
        ));
    }
    Ok(prefix_len)
}

/// Checks an IP address or gateway against its counterpart field.
///
/// An empty value clears the field and always passes. Otherwise the family
/// must match a non-empty counterpart, and the text must fit the bound of
/// its own family.
pub fn check_address(
    field: &'static str,
    value: &str,
    counterpart_field: &'static str,
    counterpart: &str,
) -> CiscoResult<()> {
    if value.is_empty() {
        return Ok(());
    }

    let family = AddressFamily::of(value);
    if !counterpart.is_empty() {
        let existing = AddressFamily::of(counterpart);
        if existing != family {
            return Err(CiscoError::MismatchedAddressFamily {
                field,
                counterpart: counterpart_field,
                new: family,
                existing,
            });
        }
    }

    if value.len() > family.max_text_len() {
        return Err(CiscoError::BufferOverflow {
            field,
            len: value.len(),
            capacity: family.max_text_len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_description_bound() {
        assert!(check_description(&"x".repeat(4095)).is_ok());
        let err = check_description(&"x".repeat(4096)).unwrap_err();
        assert!(matches!(
            err,
            CiscoError::BufferOverflow {
                len: 4096,
                capacity: 4096,
                ..
            }
        ));
    }

    #[test]
    fn test_description_counts_bytes() {
        // 2048 two-byte characters are 4096 bytes
        assert!(check_description(&"é".repeat(2048)).is_err());
        assert!(check_description(&"é".repeat(2047)).is_ok());
    }

    #[test]
    fn test_table_name_bound() {
        assert!(check_table_name(&"p".repeat(127)).is_ok());
        assert!(check_table_name(&"p".repeat(128)).is_err());
    }

    #[test]
    fn test_mode_change_from_terminal() {
        for requested in InterfaceMode::ALL {
            let err = check_mode_change(InterfaceMode::InPortChannel, requested).unwrap_err();
            assert!(matches!(err, CiscoError::InvalidAction { .. }));
        }
    }

    #[test]
    fn test_mode_change_to_assignment_state() {
        let err = check_mode_change(InterfaceMode::Access, InterfaceMode::InVlan).unwrap_err();
        assert!(matches!(err, CiscoError::InvalidValue { field: "mode", .. }));
        assert!(check_mode_change(InterfaceMode::InVlan, InterfaceMode::Trunk).is_ok());
    }

    #[test]
    fn test_vlan_bound() {
        assert_eq!(check_vlan(4095).unwrap().as_u16(), 4095);
        assert!(check_vlan(0).is_ok());
        assert!(matches!(
            check_vlan(4096).unwrap_err(),
            CiscoError::OutOfRange { value: 4096, .. }
        ));
    }

    #[test]
    fn test_prefix_bound() {
        assert_eq!(check_prefix_len(32).unwrap(), 32);
        assert!(matches!(
            check_prefix_len(33).unwrap_err(),
            CiscoError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_ports_order() {
        assert!(check_ports(1, 1).is_ok());
        assert!(matches!(
            check_ports(3, 1).unwrap_err(),
            CiscoError::OutOfRange { field: "ports", .. }
        ));
    }

    #[test]
    fn test_address_family_mismatch() {
        let err = check_address("ip address", "fe80::1", "gateway", "10.0.0.1").unwrap_err();
        assert!(matches!(
            err,
            CiscoError::MismatchedAddressFamily {
                new: AddressFamily::V6,
                existing: AddressFamily::V4,
                ..
            }
        ));
        assert!(check_address("ip address", "10.0.0.2", "gateway", "10.0.0.1").is_ok());
        assert!(check_address("gateway", "fe80::ff", "ip address", "fe80::1").is_ok());
    }

    #[test]
    fn test_address_length_per_family() {
        assert!(check_address("ip address", "255.255.255.255", "gateway", "").is_ok());
        assert!(matches!(
            check_address("ip address", "255.255.255.2550", "gateway", "").unwrap_err(),
            CiscoError::BufferOverflow { capacity: 15, .. }
        ));

        let longest_v6 = "ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255";
        assert!(check_address("gateway", longest_v6, "ip address", "").is_ok());
        let too_long = format!("{}0", longest_v6);
        assert!(matches!(
            check_address("gateway", &too_long, "ip address", "").unwrap_err(),
            CiscoError::BufferOverflow { capacity: 45, .. }
        ));
    }

    #[test]
    fn test_empty_address_clears() {
        assert!(check_address("ip address", "", "gateway", "fe80::1").is_ok());
    }
}
