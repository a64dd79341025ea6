//! Differential fixture execution.
//!
//! Runs one fixture case against `inetcodec-core` and, where the standard
//! library can answer the same question, against `std::net` as a host
//! oracle. Outputs are rendered as text so fixtures stay plain JSON:
//! - `from_ipv4` -> decimal integer
//! - `from_ipv6` -> `0x`-prefixed lowercase hex
//! - `to_ipv4` / `to_ipv6` -> address text
//! - codec errors -> `InvalidAddress` / `ValueOutOfRange`

use std::net::{Ipv4Addr, Ipv6Addr};

use inetcodec_core::{CodecError, InetCodec, ZeroRunPolicy};
use thiserror::Error;

/// Errors that prevent a fixture case from executing at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("missing input '{0}'")]
    MissingInput(&'static str),
    #[error("input '{field}' is not {expected}")]
    BadInput {
        field: &'static str,
        expected: &'static str,
    },
}

/// Outcome of running one case on both the codec and the host oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferentialExecution {
    /// Output of `inetcodec-core`.
    pub impl_output: String,
    /// Output of the `std::net` oracle, when it has an answer for this case.
    pub host_output: Option<String>,
    /// False only when the oracle answered and disagreed.
    pub host_parity: bool,
    /// Optional free-form note for the report.
    pub note: Option<String>,
}

/// Executes `function` with `inputs` under `policy`.
pub fn execute_fixture_case(
    function: &str,
    inputs: &serde_json::Value,
    policy: ZeroRunPolicy,
) -> Result<DifferentialExecution, ExecError> {
    let codec = InetCodec::new().with_policy(policy);

    let (impl_output, host_output) = match function {
        "from_ipv4" => {
            let text = text_input(inputs)?;
            (
                render(codec.from_ipv4(text).map(|v| v.to_string())),
                Some(host_from_ipv4(text)),
            )
        }
        "to_ipv4" => {
            let value = u32::try_from(value_input(inputs)?).map_err(|_| ExecError::BadInput {
                field: "value",
                expected: "a 32-bit unsigned integer",
            })?;
            (codec.to_ipv4(value), Some(host_to_ipv4(value)))
        }
        "from_ipv6" => {
            let text = text_input(inputs)?;
            (
                render(codec.from_ipv6(text).map(|v| format!("{v:#x}"))),
                Some(host_from_ipv6(text)),
            )
        }
        "to_ipv6" => {
            let value = value_input(inputs)?;
            let host = match policy {
                ZeroRunPolicy::LongestRun => host_to_ipv6(value),
                ZeroRunPolicy::FirstRun => None,
            };
            (codec.to_ipv6(value), host)
        }
        other => return Err(ExecError::UnknownFunction(other.to_string())),
    };

    let host_parity = host_output.as_ref().is_none_or(|h| *h == impl_output);
    let note = host_output
        .is_none()
        .then(|| format!("no host oracle for {function} under {}", policy.as_str()));

    Ok(DifferentialExecution {
        impl_output,
        host_output,
        host_parity,
        note,
    })
}

/// Renders a codec result the way fixtures spell it.
#[must_use]
pub fn render(result: Result<String, CodecError>) -> String {
    match result {
        Ok(text) => text,
        Err(CodecError::InvalidAddress { .. }) => String::from("InvalidAddress"),
        Err(CodecError::ValueOutOfRange { .. }) => String::from("ValueOutOfRange"),
    }
}

// ---------------------------------------------------------------------------
// Host oracle
// ---------------------------------------------------------------------------

/// `std::net` answer for `from_ipv4`.
#[must_use]
pub fn host_from_ipv4(text: &str) -> String {
    match text.parse::<Ipv4Addr>() {
        Ok(addr) => u32::from(addr).to_string(),
        Err(_) => String::from("InvalidAddress"),
    }
}

/// `std::net` answer for `to_ipv4`.
#[must_use]
pub fn host_to_ipv4(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// `std::net` answer for `from_ipv6`.
///
/// Dotted-quad tails are outside the codec's grammar, so the oracle rejects
/// them too.
#[must_use]
pub fn host_from_ipv6(text: &str) -> String {
    match text.parse::<Ipv6Addr>() {
        Ok(addr) if !text.contains('.') => format!("{:#x}", u128::from(addr)),
        _ => String::from("InvalidAddress"),
    }
}

/// `std::net` answer for `to_ipv6` under the longest-run policy.
///
/// Returns `None` when std prints an embedded IPv4 tail, which the codec
/// never produces.
#[must_use]
pub fn host_to_ipv6(value: u128) -> Option<String> {
    let text = Ipv6Addr::from(value).to_string();
    (!text.contains('.')).then_some(text)
}

// ---------------------------------------------------------------------------
// Input decoding
// ---------------------------------------------------------------------------

fn text_input(inputs: &serde_json::Value) -> Result<&str, ExecError> {
    inputs
        .get("text")
        .ok_or(ExecError::MissingInput("text"))?
        .as_str()
        .ok_or(ExecError::BadInput {
            field: "text",
            expected: "a string",
        })
}

/// Reads `value` as a JSON number or a decimal / `0x` hex string.
fn value_input(inputs: &serde_json::Value) -> Result<u128, ExecError> {
    let bad = ExecError::BadInput {
        field: "value",
        expected: "an unsigned integer",
    };
    match inputs.get("value").ok_or(ExecError::MissingInput("value"))? {
        serde_json::Value::Number(n) => n.as_u64().map(u128::from).ok_or(bad),
        serde_json::Value::String(s) => parse_u128(s).ok_or(bad),
        _ => Err(bad),
    }
}

/// Parses a decimal or `0x`-prefixed hex `u128`, ignoring `_` separators.
#[must_use]
pub fn parse_u128(raw: &str) -> Option<u128> {
    let cleaned: String = raw.trim().chars().filter(|&c| c != '_').collect();
    match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u128::from_str_radix(hex, 16).ok(),
        None => cleaned.parse().ok(),
    }
}
