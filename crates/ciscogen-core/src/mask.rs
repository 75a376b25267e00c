//! CIDR prefix length to dotted-decimal subnet mask conversion.

use crate::error::{CiscoError, CiscoResult};
use std::net::Ipv4Addr;

/// Longest IPv4 prefix length.
pub const MAX_PREFIX_LEN: u8 = 32;

/// Converts a prefix length into the four octets of its subnet mask.
///
/// # Errors
///
/// Returns `OutOfRange` for lengths above 32.
///
/// # Example
///
/// ```
/// use ciscogen_core::subnet_mask_octets;
///
/// assert_eq!(subnet_mask_octets(24).unwrap(), [255, 255, 255, 0]);
/// assert_eq!(subnet_mask_octets(20).unwrap(), [255, 255, 240, 0]);
/// assert!(subnet_mask_octets(33).is_err());
/// ```
pub fn subnet_mask_octets(prefix_len: u8) -> CiscoResult<[u8; 4]> {
    if prefix_len > MAX_PREFIX_LEN {
        return Err(CiscoError::out_of_range(
            "subnet mask length",
            prefix_len,
            MAX_PREFIX_LEN,
        ));
    }
    Ok(mask_octets(prefix_len))
}

/// Converts a prefix length into a dotted-decimal mask address.
pub fn subnet_mask(prefix_len: u8) -> CiscoResult<Ipv4Addr> {
    subnet_mask_octets(prefix_len).map(Ipv4Addr::from)
}

/// Conversion for lengths already validated; anything past 32 saturates.
///
/// Each octet accumulates halving weights 128, 64, ... for every prefix
/// bit that falls inside it.
pub(crate) fn mask_octets(prefix_len: u8) -> [u8; 4] {
    let mut octets = [0u8; 4];
    let mut weights = [128u8; 4];

    for bit in 0..usize::from(prefix_len.min(MAX_PREFIX_LEN)) {
        let byte = bit / 8;
        octets[byte] += weights[byte];
        weights[byte] /= 2;
    }

    octets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_shifted_all_ones() {
        for len in 0..=MAX_PREFIX_LEN {
            let expected = if len == 0 {
                0
            } else {
                u32::MAX << (32 - u32::from(len))
            };
            let octets = subnet_mask_octets(len).unwrap();
            assert_eq!(u32::from_be_bytes(octets), expected, "prefix /{}", len);
        }
    }

    #[test]
    fn test_well_known_masks() {
        assert_eq!(subnet_mask(0).unwrap().to_string(), "0.0.0.0");
        assert_eq!(subnet_mask(8).unwrap().to_string(), "255.0.0.0");
        assert_eq!(subnet_mask(24).unwrap().to_string(), "255.255.255.0");
        assert_eq!(subnet_mask(30).unwrap().to_string(), "255.255.255.252");
        assert_eq!(subnet_mask(32).unwrap().to_string(), "255.255.255.255");
    }

    #[test]
    fn test_out_of_range() {
        let err = subnet_mask_octets(33).unwrap_err();
        assert!(matches!(
            err,
            CiscoError::OutOfRange {
                value: 33,
                max: 32,
                ..
            }
        ));
    }
}
