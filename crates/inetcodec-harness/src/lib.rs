//! Conformance testing harness for inetcodec.
//!
//! This crate provides:
//! - Fixture capture: record `std::net` behavior as JSON reference data
//! - Fixture verify: compare the codec against captured or hand-written fixtures
//! - Differential execution against the `std::net` host oracle
//! - Structured JSONL logging and artifact indexing for runs
//! - Report generation: human-readable + machine-readable conformance reports

#![forbid(unsafe_code)]

pub mod capture;
pub mod diff;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use exec::{DifferentialExecution, ExecError, execute_fixture_case};
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
