//! # inetcodec-core
//!
//! Conversions between textual IPv4/IPv6 addresses and their fixed-width
//! integer forms.
//!
//! - IPv4: dotted-quad text <-> `u32`, first octet most significant.
//! - IPv6: colon-hex text <-> `u128`, first hextet most significant, with
//!   `::` expansion on parse and zero-run collapsing on format.
//!
//! Every function is pure and reentrant. Parsing asks an
//! [`AddressGrammar`] whether the text is well formed before decomposing
//! it and fails with [`CodecError::InvalidAddress`] otherwise; formatting
//! is total.
//!
//! ```
//! assert_eq!(inetcodec_core::from_ipv4("1.2.3.4"), Ok(0x0102_0304));
//! assert_eq!(inetcodec_core::to_ipv6(1), "::1");
//! ```

#![deny(unsafe_code)]

pub mod codec;
pub mod error;
pub mod family;
pub mod grammar;
pub mod ipv4;
pub mod ipv6;
pub mod policy;
pub mod width;

pub use codec::InetCodec;
pub use error::{CodecError, Result};
pub use family::AddressFamily;
pub use grammar::{AddressGrammar, StdGrammar};
pub use policy::ZeroRunPolicy;

/// Parses dotted-quad text with the default codec.
pub fn from_ipv4(text: &str) -> Result<u32> {
    InetCodec::new().from_ipv4(text)
}

/// Formats a `u32` as dotted-quad text.
#[must_use]
pub fn to_ipv4(value: u32) -> String {
    ipv4::format(value)
}

/// Parses colon-hex text with the default codec.
pub fn from_ipv6(text: &str) -> Result<u128> {
    InetCodec::new().from_ipv6(text)
}

/// Formats a `u128` as colon-hex text, collapsing the first zero run.
#[must_use]
pub fn to_ipv6(value: u128) -> String {
    ipv6::format(value)
}
