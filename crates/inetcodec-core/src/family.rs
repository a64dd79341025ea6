//! Address families.

use core::fmt;

use crate::width::{IPV4_LAYOUT, IPV6_LAYOUT, Layout};

/// The two supported address families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// 32-bit dotted-decimal addresses.
    Ipv4,
    /// 128-bit colon-hex addresses.
    Ipv6,
}

impl AddressFamily {
    /// Segment layout of this family.
    #[must_use]
    pub const fn layout(self) -> Layout {
        match self {
            Self::Ipv4 => IPV4_LAYOUT,
            Self::Ipv6 => IPV6_LAYOUT,
        }
    }

    /// Parse from string (case-insensitive). Returns `None` for unknown names.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipv4" | "v4" | "inet" | "4" => Some(Self::Ipv4),
            "ipv6" | "v6" | "inet6" | "6" => Some(Self::Ipv6),
            _ => None,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(AddressFamily::Ipv4.to_string(), "IPv4");
        assert_eq!(AddressFamily::Ipv6.to_string(), "IPv6");
    }

    #[test]
    fn loose_parsing() {
        assert_eq!(AddressFamily::from_str_loose("IPv4"), Some(AddressFamily::Ipv4));
        assert_eq!(AddressFamily::from_str_loose("inet6"), Some(AddressFamily::Ipv6));
        assert_eq!(AddressFamily::from_str_loose(" 6 "), Some(AddressFamily::Ipv6));
        assert_eq!(AddressFamily::from_str_loose("ipx"), None);
    }

    #[test]
    fn layouts_match_family() {
        assert_eq!(AddressFamily::Ipv4.layout().total_bits(), 32);
        assert_eq!(AddressFamily::Ipv6.layout().total_bits(), 128);
    }
}
