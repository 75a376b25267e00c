//! Error types for record mutation and composition.
//!
//! Every failure here is deterministic and data-dependent: retrying the same
//! call with the same input fails the same way.

use ciscogen_types::{AddressFamily, ParseError};
use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for ciscogen operations.
pub type CiscoResult<T> = Result<T, CiscoError>;

/// Errors that can occur while building interface and table records.
#[derive(Debug, Error)]
pub enum CiscoError {
    /// Unknown or forbidden operation.
    #[error("Invalid action: {action}")]
    InvalidAction {
        /// What was attempted.
        action: String,
    },

    /// Enumerated value outside its defined range.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// The field being set.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Numeric value outside its bound.
    #[error("Value {value} for {field} is out of range (maximum {max})")]
    OutOfRange {
        /// The field being set.
        field: &'static str,
        /// The rejected value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },

    /// String longer than the field's fixed capacity.
    #[error("Value for {field} overflows its buffer ({len} bytes, capacity {capacity})")]
    BufferOverflow {
        /// The field being set.
        field: &'static str,
        /// Length of the rejected value in bytes.
        len: usize,
        /// Capacity of the field in bytes.
        capacity: usize,
    },

    /// IP address and gateway disagree on address family.
    #[error("Address family mismatch on {field}: new value is {new}, existing {counterpart} is {existing}")]
    MismatchedAddressFamily {
        /// The field being set.
        field: &'static str,
        /// The field it was checked against.
        counterpart: &'static str,
        /// Family of the new value.
        new: AddressFamily,
        /// Family of the counterpart value.
        existing: AddressFamily,
    },

    /// Backing storage could not be grown.
    #[error("Failed to grow {what}: {source}")]
    ResourceExhausted {
        /// The collection being grown.
        what: &'static str,
        /// The allocator error.
        #[source]
        source: TryReserveError,
    },
}

impl CiscoError {
    /// Creates an invalid action error.
    pub fn invalid_action(action: impl Into<String>) -> Self {
        Self::InvalidAction {
            action: action.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }

    /// Creates an out of range error.
    pub fn out_of_range(field: &'static str, value: impl Into<u64>, max: impl Into<u64>) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            max: max.into(),
        }
    }

    /// Short name of the error class, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CiscoError::InvalidAction { .. } => "invalid_action",
            CiscoError::InvalidValue { .. } => "invalid_value",
            CiscoError::OutOfRange { .. } => "out_of_range",
            CiscoError::BufferOverflow { .. } => "buffer_overflow",
            CiscoError::MismatchedAddressFamily { .. } => "mismatched_address_family",
            CiscoError::ResourceExhausted { .. } => "resource_exhausted",
        }
    }
}

impl From<ParseError> for CiscoError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::InvalidInterfaceKind(value) => Self::InvalidValue {
                field: "kind",
                value,
            },
            ParseError::InvalidMode(value) => Self::InvalidValue {
                field: "mode",
                value,
            },
            ParseError::InvalidTableKind(value) => Self::InvalidValue {
                field: "table kind",
                value,
            },
            ParseError::InvalidNegotiationMode(value) => Self::InvalidValue {
                field: "table mode",
                value,
            },
            ParseError::InvalidNumber(value) => Self::InvalidValue {
                field: "number",
                value,
            },
            ParseError::InvalidVlanId(id) => {
                Self::out_of_range("allowed vlan", id, ciscogen_types::VlanId::MAX)
            }
            ParseError::InvalidPortRange { first, last } => Self::out_of_range("ports", first, last),
        }
    }
}
