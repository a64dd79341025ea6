//! IPv4 codec: dotted-quad text <-> `u32`.

use crate::error::{CodecError, Result};
use crate::family::AddressFamily;
use crate::grammar::AddressGrammar;
use crate::width::IPV4_LAYOUT;

/// The wildcard address `0.0.0.0`.
pub const UNSPECIFIED: u32 = 0;

/// The broadcast address `255.255.255.255`.
pub const BROADCAST: u32 = u32::MAX;

/// Parses dotted-quad text into a `u32`, first octet most significant.
///
/// `text` must satisfy `grammar`'s IPv4 predicate. The result for
/// `"1.2.3.4"` is `0x01020304`.
pub fn parse_with<G: AddressGrammar + ?Sized>(grammar: &G, text: &str) -> Result<u32> {
    if !grammar.is_valid_ipv4(text) {
        return Err(CodecError::invalid(AddressFamily::Ipv4, text));
    }

    let mut octets = [0u8; 4];
    let mut parts = text.split('.');
    for octet in &mut octets {
        let part = parts
            .next()
            .ok_or_else(|| CodecError::invalid(AddressFamily::Ipv4, text))?;
        *octet = part
            .parse::<u8>()
            .map_err(|_| CodecError::invalid(AddressFamily::Ipv4, text))?;
    }
    if parts.next().is_some() {
        return Err(CodecError::invalid(AddressFamily::Ipv4, text));
    }

    // Four 8-bit segments span exactly 32 bits, so the narrowing is lossless.
    Ok(IPV4_LAYOUT.pack(octets) as u32)
}

/// Formats a `u32` as dotted-decimal text, most-significant octet first.
#[must_use]
pub fn format(value: u32) -> String {
    let octets = IPV4_LAYOUT.unpack(u128::from(value));
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}
