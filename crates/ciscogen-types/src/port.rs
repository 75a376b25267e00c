//! Port range type.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single port (`first == last`) or an inclusive port range.
///
/// # Examples
///
/// ```
/// use ciscogen_types::PortRange;
///
/// let range: PortRange = "1-4".parse().unwrap();
/// assert_eq!((range.first(), range.last()), (1, 4));
/// assert!(PortRange::single(3).is_single());
/// assert!(PortRange::new(4, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u16; 2]", into = "[u16; 2]")]
pub struct PortRange {
    first: u16,
    last: u16,
}

impl PortRange {
    /// Creates a port range.
    ///
    /// # Errors
    ///
    /// Returns an error if `first` is greater than `last`.
    pub const fn new(first: u16, last: u16) -> Result<Self, ParseError> {
        if first <= last {
            Ok(PortRange { first, last })
        } else {
            Err(ParseError::InvalidPortRange { first, last })
        }
    }

    /// Creates a range covering exactly one port.
    pub const fn single(port: u16) -> Self {
        PortRange {
            first: port,
            last: port,
        }
    }

    pub const fn first(&self) -> u16 {
        self.first
    }

    pub const fn last(&self) -> u16 {
        self.last
    }

    pub const fn is_single(&self) -> bool {
        self.first == self.last
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

impl FromStr for PortRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u16>()
                .map_err(|_| ParseError::InvalidNumber(s.to_string()))
        };

        match s.split_once('-') {
            Some((first, last)) => PortRange::new(parse(first)?, parse(last)?),
            None => Ok(PortRange::single(parse(s)?)),
        }
    }
}

impl TryFrom<[u16; 2]> for PortRange {
    type Error = ParseError;

    fn try_from([first, last]: [u16; 2]) -> Result<Self, Self::Error> {
        PortRange::new(first, last)
    }
}

impl From<PortRange> for [u16; 2] {
    fn from(range: PortRange) -> [u16; 2] {
        [range.first, range.last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_single_and_range() {
        assert_eq!("7".parse::<PortRange>().unwrap(), PortRange::single(7));
        assert_eq!(
            "0-23".parse::<PortRange>().unwrap(),
            PortRange::new(0, 23).unwrap()
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert_eq!(
            "5-2".parse::<PortRange>(),
            Err(ParseError::InvalidPortRange { first: 5, last: 2 })
        );
        assert!(PortRange::try_from([9, 8]).is_err());
    }

    #[test]
    fn test_parse_garbage() {
        assert!("a-b".parse::<PortRange>().is_err());
        assert!("".parse::<PortRange>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PortRange::single(0).to_string(), "0");
        assert_eq!(PortRange::new(1, 8).unwrap().to_string(), "1-8");
    }
}
