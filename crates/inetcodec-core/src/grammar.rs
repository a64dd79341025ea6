//! Textual address validity predicates.
//!
//! The codecs never decide on their own whether a string is a well-formed
//! address. They ask an [`AddressGrammar`] first and only decompose text the
//! grammar accepts. [`StdGrammar`] answers with the standard library's
//! `Ipv4Addr`/`Ipv6Addr` parsers; callers with a different notion of
//! validity can plug in their own implementation.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Boolean validity predicates for both address families.
pub trait AddressGrammar: Send + Sync {
    /// Returns true if `text` is a well-formed dotted-quad IPv4 address.
    fn is_valid_ipv4(&self, text: &str) -> bool;

    /// Returns true if `text` is a well-formed colon-hex IPv6 address.
    fn is_valid_ipv6(&self, text: &str) -> bool;
}

impl<G: AddressGrammar + ?Sized> AddressGrammar for &G {
    fn is_valid_ipv4(&self, text: &str) -> bool {
        (**self).is_valid_ipv4(text)
    }

    fn is_valid_ipv6(&self, text: &str) -> bool {
        (**self).is_valid_ipv6(text)
    }
}

/// Grammar backed by `std::net` address parsing.
///
/// IPv4: exactly four decimal octets 0-255 without leading zeros.
/// IPv6: eight hextets of 1-4 hex digits, or fewer with a single `::`.
/// Text with an embedded dotted-quad tail (`::ffff:1.2.3.4`) is rejected
/// because its last segment is not a hextet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdGrammar;

impl AddressGrammar for StdGrammar {
    fn is_valid_ipv4(&self, text: &str) -> bool {
        text.parse::<Ipv4Addr>().is_ok()
    }

    fn is_valid_ipv6(&self, text: &str) -> bool {
        !text.contains('.') && text.parse::<Ipv6Addr>().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_accepts_canonical_quads() {
        let g = StdGrammar;
        for s in ["0.0.0.0", "1.2.3.4", "127.0.0.1", "255.255.255.255"] {
            assert!(g.is_valid_ipv4(s), "{s}");
        }
    }

    #[test]
    fn ipv4_rejects_malformed() {
        let g = StdGrammar;
        for s in [
            "",
            "not-an-ip",
            "999.1.1.1",
            "256.0.0.1",
            "1.2.3",
            "1.2.3.4.5",
            "01.2.3.4",
            " 1.2.3.4",
            "1.2.3.4 ",
            "1..2.3",
            "1.2.3.",
            "::1",
        ] {
            assert!(!g.is_valid_ipv4(s), "{s:?}");
        }
    }

    #[test]
    fn ipv6_accepts_hextet_forms() {
        let g = StdGrammar;
        for s in [
            "::",
            "::1",
            "1::",
            "2001:db8::1",
            "2001:0db8:0000:0000:0000:0000:0000:0001",
            "FE80::1",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
        ] {
            assert!(g.is_valid_ipv6(s), "{s}");
        }
    }

    #[test]
    fn ipv6_rejects_malformed() {
        let g = StdGrammar;
        for s in [
            "",
            ":::",
            ":1",
            "1:",
            "1::2::3",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4:5:6:7",
            "12345::",
            "g::1",
            "fe80::1%eth0",
            "::ffff:1.2.3.4",
            "1.2.3.4",
        ] {
            assert!(!g.is_valid_ipv6(s), "{s:?}");
        }
    }
}
