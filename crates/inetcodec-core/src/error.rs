//! Codec errors.

use thiserror::Error;

use crate::family::AddressFamily;

/// Errors produced by the address codecs.
///
/// Formatting a typed value never fails; only parsing and the untyped
/// [`crate::InetCodec::format`] dispatcher can return an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The text is not a valid address of the given family.
    #[error("invalid {family} address: {input:?}")]
    InvalidAddress {
        family: AddressFamily,
        input: String,
    },
    /// The integer is wider than the family's address width.
    #[error("value {value:#x} does not fit in an {family} address")]
    ValueOutOfRange { family: AddressFamily, value: u128 },
}

impl CodecError {
    pub(crate) fn invalid(family: AddressFamily, input: &str) -> Self {
        Self::InvalidAddress {
            family,
            input: input.to_owned(),
        }
    }

    /// Family the failing call was made for.
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        match self {
            Self::InvalidAddress { family, .. } | Self::ValueOutOfRange { family, .. } => *family,
        }
    }
}

/// Result alias for codec operations.
pub type Result<T> = core::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_address_message_names_family_and_input() {
        let err = CodecError::invalid(AddressFamily::Ipv4, "999.1.1.1");
        assert_eq!(err.to_string(), "invalid IPv4 address: \"999.1.1.1\"");
        assert_eq!(err.family(), AddressFamily::Ipv4);
    }

    #[test]
    fn out_of_range_message_is_hex() {
        let err = CodecError::ValueOutOfRange {
            family: AddressFamily::Ipv4,
            value: 0x1_0000_0000,
        };
        assert_eq!(
            err.to_string(),
            "value 0x100000000 does not fit in an IPv4 address"
        );
    }
}
