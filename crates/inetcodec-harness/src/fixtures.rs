//! Fixture loading and management.

use serde::{Deserialize, Serialize};

/// Current fixture schema version.
pub const FIXTURE_VERSION: &str = "v1";

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Operation under test (`from_ipv4`, `to_ipv4`, `from_ipv6`, `to_ipv6`).
    pub function: String,
    /// Standards reference the case is drawn from (e.g. "RFC 4291 2.2").
    pub reference: String,
    /// Input parameters (serialized).
    pub inputs: serde_json::Value,
    /// Expected output, rendered as text for comparison.
    pub expected_output: String,
    /// Zero-run policy the case applies to: `first_run`, `longest_run` or `both`.
    #[serde(default = "default_policy")]
    pub policy: String,
}

fn default_policy() -> String {
    String::from("both")
}

/// A collection of fixture cases for one address family or campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family or campaign name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }

    /// Names of the functions exercised by this set, deduplicated in order.
    #[must_use]
    pub fn functions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for case in &self.cases {
            if !seen.contains(&case.function.as_str()) {
                seen.push(&case.function);
            }
        }
        seen
    }
}
