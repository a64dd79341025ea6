//! IPv6 codec: colon-hex text <-> `u128`.
//!
//! Parsing expands the single `::` abbreviation into however many zero
//! hextets are needed to reach eight, then folds the hextets big-endian.
//! Formatting renders eight lowercase hextets without leading zeros and
//! collapses one zero run into `::` as chosen by a [`ZeroRunPolicy`].

use crate::error::{CodecError, Result};
use crate::family::AddressFamily;
use crate::grammar::AddressGrammar;
use crate::policy::ZeroRunPolicy;
use crate::width::IPV6_LAYOUT;

/// The unspecified address `::`.
pub const UNSPECIFIED: u128 = 0;

/// The loopback address `::1`.
pub const LOOPBACK: u128 = 1;

/// Parses colon-hex text into a `u128`, leftmost hextet most significant.
///
/// `text` must satisfy `grammar`'s IPv6 predicate.
pub fn parse_with<G: AddressGrammar + ?Sized>(grammar: &G, text: &str) -> Result<u128> {
    if !grammar.is_valid_ipv6(text) {
        return Err(CodecError::invalid(AddressFamily::Ipv6, text));
    }

    let segments =
        expand_segments(text).ok_or_else(|| CodecError::invalid(AddressFamily::Ipv6, text))?;

    let mut hextets = [0u16; 8];
    for (slot, segment) in hextets.iter_mut().zip(&segments) {
        *slot = parse_hextet(segment)
            .ok_or_else(|| CodecError::invalid(AddressFamily::Ipv6, text))?;
    }

    Ok(IPV6_LAYOUT.pack(hextets))
}

/// Formats a `u128` under the default [`ZeroRunPolicy::FirstRun`].
#[must_use]
pub fn format(value: u128) -> String {
    format_with(ZeroRunPolicy::FirstRun, value)
}

/// Formats a `u128` as colon-hex text, collapsing the zero run `policy` selects.
#[must_use]
pub fn format_with(policy: ZeroRunPolicy, value: u128) -> String {
    let groups = IPV6_LAYOUT.unpack(value);

    match policy.select(&groups) {
        Some((start, len)) => {
            let head = join_hextets(&groups[..start]);
            let tail = join_hextets(&groups[start + len..]);
            format!("{head}::{tail}")
        }
        None => join_hextets(&groups),
    }
}

/// Splits `text` into exactly eight hextet strings, expanding `::`.
///
/// Returns `None` when the text does not describe eight segments, e.g. a
/// second `::` or too many groups around the abbreviation.
fn expand_segments(text: &str) -> Option<Vec<&str>> {
    let segments = IPV6_LAYOUT.segments;

    let Some((head, tail)) = text.split_once("::") else {
        let groups: Vec<&str> = text.split(':').collect();
        return (groups.len() == segments).then_some(groups);
    };
    if tail.contains("::") {
        return None;
    }

    // Leading or trailing `::` leaves an empty head or tail: no groups there.
    let head: Vec<&str> = split_groups(head);
    let tail: Vec<&str> = split_groups(tail);
    let explicit = head.len() + tail.len();
    if explicit >= segments {
        return None;
    }

    let mut expanded = Vec::with_capacity(segments);
    expanded.extend(head);
    expanded.resize(segments - tail.len(), "0");
    expanded.extend(tail);
    Some(expanded)
}

fn split_groups(part: &str) -> Vec<&str> {
    if part.is_empty() {
        Vec::new()
    } else {
        part.split(':').collect()
    }
}

fn parse_hextet(segment: &str) -> Option<u16> {
    // An empty segment stands for zero.
    if segment.is_empty() {
        return Some(0);
    }
    if segment.len() > 4 || !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(segment, 16).ok()
}

fn join_hextets(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|g| format!("{g:x}"))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::StdGrammar;

    fn parse(text: &str) -> Result<u128> {
        parse_with(&StdGrammar, text)
    }

    #[test]
    fn parse_abbreviation_edges() {
        assert_eq!(parse("::"), Ok(UNSPECIFIED));
        assert_eq!(parse("::1"), Ok(LOOPBACK));
        assert_eq!(parse("1::"), Ok(1u128 << 112));
        assert_eq!(parse("1::2"), Ok((1u128 << 112) | 2));
    }

    #[test]
    fn parse_full_and_abbreviated_agree() {
        assert_eq!(
            parse("2001:db8::1"),
            parse("2001:0db8:0000:0000:0000:0000:0000:0001")
        );
        assert_eq!(
            parse("2001:db8::1"),
            Ok(0x2001_0db8_0000_0000_0000_0000_0000_0001)
        );
    }

    #[test]
    fn parse_middle_abbreviation() {
        assert_eq!(
            parse("1:2::7:8"),
            Ok(0x0001_0002_0000_0000_0000_0000_0007_0008)
        );
        assert_eq!(
            parse("fe80::1ff:fe23:4567:890a"),
            Ok(0xfe80_0000_0000_0000_01ff_fe23_4567_890a)
        );
    }

    #[test]
    fn parse_mixed_case_hex() {
        assert_eq!(parse("FE80::1"), parse("fe80::1"));
        assert_eq!(parse("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"), Ok(u128::MAX));
    }

    #[test]
    fn parse_rejects_invalid() {
        for s in [
            "",
            "not-an-ip",
            ":::",
            "1::2::3",
            "1:2:3:4:5:6:7:8:9",
            "12345::1",
            "::ffff:1.2.3.4",
            "fe80::1%eth0",
        ] {
            assert_eq!(
                parse(s),
                Err(CodecError::InvalidAddress {
                    family: AddressFamily::Ipv6,
                    input: s.to_string(),
                }),
                "{s:?}"
            );
        }
    }

    #[test]
    fn expand_always_yields_eight() {
        for s in ["::", "::1", "1::", "1::2", "1:2:3:4:5:6:7::", "::2:3:4:5:6:7:8"] {
            assert_eq!(expand_segments(s).map(|v| v.len()), Some(8), "{s}");
        }
        assert_eq!(expand_segments("1:2:3:4:5:6:7:8::"), None);
        assert_eq!(expand_segments("1:2:3"), None);
    }

    #[test]
    fn format_first_run() {
        assert_eq!(format(UNSPECIFIED), "::");
        assert_eq!(format(LOOPBACK), "::1");
        assert_eq!(format(1u128 << 112), "1::");
        assert_eq!(format(0x2001_0db8_0000_0000_0000_0000_0000_0001), "2001:db8::1");
        assert_eq!(
            format(u128::MAX),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn format_first_run_prefers_earliest_zero_even_if_shorter() {
        // 1:0:2:0:0:0:0:3 collapses the lone zero, not the run of four.
        let v = parse("1:0:2:0:0:0:0:3").unwrap();
        assert_eq!(format(v), "1::2:0:0:0:0:3");
        assert_eq!(format_with(ZeroRunPolicy::LongestRun, v), "1:0:2::3");
    }

    #[test]
    fn format_longest_run_matches_rfc5952() {
        let lr = |s: &str| format_with(ZeroRunPolicy::LongestRun, parse(s).unwrap());
        assert_eq!(lr("2001:db8:0:1:0:0:0:1"), "2001:db8:0:1::1");
        assert_eq!(lr("1:0:0:2:0:0:0:3"), "1:0:0:2::3");
        assert_eq!(lr("2001:db8:85a3:0:0:8a2e:370:7334"), "2001:db8:85a3::8a2e:370:7334");
        assert_eq!(lr("1:2:3:4:5:6:0:8"), "1:2:3:4:5:6:0:8");
        assert_eq!(lr("::"), "::");
    }

    #[test]
    fn format_drops_leading_zeros() {
        let v = parse("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(format(v), "2001:db8::1");
        assert_eq!(format(parse("0:0:0:0:0:ffff:102:304").unwrap()), "::ffff:102:304");
    }

    #[test]
    fn value_roundtrip_under_both_policies() {
        for s in [
            "::",
            "::1",
            "1::",
            "1:0:2:0:0:0:0:3",
            "1:0:0:2:0:0:3:4",
            "2001:db8::8a2e:370:7334",
            "0:1:0:1:0:1:0:1",
        ] {
            let v = parse(s).unwrap();
            for policy in [ZeroRunPolicy::FirstRun, ZeroRunPolicy::LongestRun] {
                assert_eq!(parse(&format_with(policy, v)), Ok(v), "{s} {policy:?}");
            }
        }
    }
}
