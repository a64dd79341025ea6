//! Host oracle fixture capture.
//!
//! Runs a built-in corpus through `std::net` and serializes the answers as
//! a fixture set for later verification. The oracle covers parsing for both
//! families, IPv4 formatting, and IPv6 formatting under the longest-run
//! policy. First-run IPv6 formatting has no host equivalent and is left to
//! hand-written fixtures.

use inetcodec_core::AddressFamily;
use serde::{Deserialize, Serialize};

use crate::exec::{host_from_ipv4, host_from_ipv6, host_to_ipv4, host_to_ipv6};
use crate::fixtures::{FIXTURE_VERSION, FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, StreamKind};

/// IPv4 texts parsed by the capture corpus, valid and invalid.
pub const IPV4_TEXTS: &[&str] = &[
    "0.0.0.0",
    "1.2.3.4",
    "10.0.0.1",
    "127.0.0.1",
    "172.16.254.3",
    "192.168.1.100",
    "255.255.255.255",
    "999.1.1.1",
    "256.0.0.1",
    "01.2.3.4",
    "1.2.3",
    "1.2.3.4.5",
    "not-an-ip",
    "",
];

/// IPv4 values formatted by the capture corpus.
pub const IPV4_VALUES: &[u32] = &[
    0,
    1,
    0x0102_0304,
    0x7F00_0001,
    0xC0A8_0101,
    0x8000_0000,
    u32::MAX,
];

/// IPv6 texts parsed by the capture corpus, valid and invalid.
pub const IPV6_TEXTS: &[&str] = &[
    "::",
    "::1",
    "1::",
    "1::2",
    "fe80::",
    "FE80::1",
    "2001:db8::1",
    "2001:0db8:0000:0000:0000:0000:0000:0001",
    "2001:db8:85a3:0:0:8a2e:370:7334",
    "fe80::1ff:fe23:4567:890a",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
    ":::",
    "1::2::3",
    "1:2:3:4:5:6:7:8:9",
    "12345::",
    "::ffff:1.2.3.4",
    "fe80::1%eth0",
    "not-an-ip",
];

/// IPv6 values formatted by the capture corpus.
pub const IPV6_VALUES: &[u128] = &[
    0,
    1,
    1 << 112,
    0x2001_0db8_0000_0000_0000_0000_0000_0001,
    0x2001_0db8_0000_0001_0000_0000_0000_0001,
    0x0001_0000_0000_0002_0000_0000_0000_0003,
    0x0001_0000_0002_0000_0000_0000_0000_0003,
    0x0001_0002_0003_0004_0005_0006_0000_0008,
    u128::MAX,
];

/// Both families, in capture order.
pub const ALL_FAMILIES: &[AddressFamily] = &[AddressFamily::Ipv4, AddressFamily::Ipv6];

/// A captured operation with its input and host output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedOperation {
    /// Function name (e.g., "from_ipv4").
    pub function: String,
    /// Input parameters as serialized values.
    pub inputs: serde_json::Value,
    /// Output of the host oracle.
    pub output: String,
    /// Policy the output is valid under.
    pub policy: String,
}

/// Runs the built-in corpus for `families` through the host oracle.
#[must_use]
pub fn capture_operations(families: &[AddressFamily]) -> Vec<CapturedOperation> {
    let mut ops = Vec::new();
    for &family in families {
        match family {
            AddressFamily::Ipv4 => capture_ipv4(&mut ops),
            AddressFamily::Ipv6 => capture_ipv6(&mut ops),
        }
    }
    ops
}

fn capture_ipv4(ops: &mut Vec<CapturedOperation>) {
    for &text in IPV4_TEXTS {
        let inputs = serde_json::json!({ "text": text });
        ops.push(op("from_ipv4", inputs, host_from_ipv4(text), "both"));
    }
    for &value in IPV4_VALUES {
        let inputs = serde_json::json!({ "value": value });
        ops.push(op("to_ipv4", inputs, host_to_ipv4(value), "both"));
    }
}

fn capture_ipv6(ops: &mut Vec<CapturedOperation>) {
    for &text in IPV6_TEXTS {
        let inputs = serde_json::json!({ "text": text });
        ops.push(op("from_ipv6", inputs, host_from_ipv6(text), "both"));
    }
    for &value in IPV6_VALUES {
        // std prints some values with a dotted tail; those have no oracle.
        if let Some(text) = host_to_ipv6(value) {
            let inputs = serde_json::json!({ "value": format!("{value:#x}") });
            ops.push(op("to_ipv6", inputs, text, "longest_run"));
        }
    }
}

fn op(
    function: &str,
    inputs: serde_json::Value,
    output: String,
    policy: &str,
) -> CapturedOperation {
    CapturedOperation {
        function: function.to_string(),
        inputs,
        output,
        policy: policy.to_string(),
    }
}

/// Builds a fixture set from the host capture of `families`.
#[must_use]
pub fn capture_fixture_set(
    captured_at: impl Into<String>,
    families: &[AddressFamily],
) -> FixtureSet {
    let cases = capture_operations(families)
        .into_iter()
        .enumerate()
        .map(|(i, op)| FixtureCase {
            name: format!("host_{}_{i:03}", op.function),
            reference: String::from("std::net host oracle"),
            function: op.function,
            inputs: op.inputs,
            expected_output: op.output,
            policy: op.policy,
        })
        .collect();

    FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: String::from("inet/host-capture"),
        captured_at: captured_at.into(),
        cases,
    }
}

/// Logs a captured set on the `capture` stream: one `case_captured` entry
/// per case between `capture_start` and `capture_end`.
pub fn log_capture(set: &FixtureSet, log: &mut LogEmitter) -> std::io::Result<()> {
    log.emit_entry(
        LogEntry::new("", LogLevel::Info, "capture_start")
            .with_stream(StreamKind::Capture)
            .with_details(serde_json::json!({ "family": set.family })),
    )?;
    for case in &set.cases {
        log.emit_entry(
            LogEntry::new("", LogLevel::Debug, "case_captured")
                .with_stream(StreamKind::Capture)
                .with_case(&case.name, &case.function)
                .with_details(serde_json::json!({
                    "inputs": case.inputs,
                    "output": case.expected_output,
                    "policy": case.policy,
                })),
        )?;
    }
    log.emit_entry(
        LogEntry::new("", LogLevel::Info, "capture_end")
            .with_stream(StreamKind::Capture)
            .with_details(serde_json::json!({ "cases": set.cases.len() })),
    )?;
    log.flush()
}
