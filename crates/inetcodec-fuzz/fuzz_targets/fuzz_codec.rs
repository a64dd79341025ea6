#![no_main]
use inetcodec_core::{InetCodec, ZeroRunPolicy};
use libfuzzer_sys::fuzz_target;

const POLICIES: [ZeroRunPolicy; 2] = [ZeroRunPolicy::FirstRun, ZeroRunPolicy::LongestRun];

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must never panic; accepted text must round trip.
    let text = String::from_utf8_lossy(data);
    for policy in POLICIES {
        let codec = InetCodec::new().with_policy(policy);
        if let Ok(v) = codec.from_ipv4(&text) {
            assert_eq!(codec.from_ipv4(&codec.to_ipv4(v)), Ok(v));
        }
        if let Ok(v) = codec.from_ipv6(&text) {
            assert_eq!(codec.from_ipv6(&codec.to_ipv6(v)), Ok(v));
        }
    }

    if data.len() < 16 {
        return;
    }
    let mut raw = [0u8; 16];
    raw.copy_from_slice(&data[..16]);
    let value = u128::from_be_bytes(raw);

    // Every value formats to text that parses back to itself.
    for policy in POLICIES {
        let codec = InetCodec::new().with_policy(policy);
        assert_eq!(codec.from_ipv6(&codec.to_ipv6(value)), Ok(value));
    }
    let v4 = (value >> 96) as u32;
    let codec = InetCodec::new();
    assert_eq!(codec.from_ipv4(&codec.to_ipv4(v4)), Ok(v4));
});
