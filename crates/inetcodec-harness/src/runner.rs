//! Test execution engine.

use std::time::Instant;

use inetcodec_core::ZeroRunPolicy;

use crate::diff;
use crate::exec::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Zero-run policy cases are executed under.
    pub policy: ZeroRunPolicy,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, policy: ZeroRunPolicy) -> Self {
        Self {
            campaign: campaign.into(),
            policy,
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.selected(fixture_set)
            .map(|case| self.verify_case(case))
            .collect()
    }

    /// Like [`TestRunner::run`], additionally emitting one JSONL entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "run_start")
                .with_stream(StreamKind::Conformance)
                .with_policy(self.policy.as_str())
                .with_details(serde_json::json!({
                    "campaign": self.campaign,
                    "family": fixture_set.family,
                    "cases": fixture_set.cases.len(),
                })),
        )?;

        let mut results = Vec::new();
        for case in self.selected(fixture_set) {
            let started = Instant::now();
            let result = self.verify_case(case);
            let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

            let (level, outcome) = if result.passed {
                (LogLevel::Info, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            let mut entry = LogEntry::new("", level, "case_result")
                .with_stream(StreamKind::Conformance)
                .with_policy(self.policy.as_str())
                .with_case(&result.case_name, &case.function)
                .with_outcome(outcome)
                .with_latency_ns(latency_ns);
            if !result.passed {
                entry = entry.with_details(serde_json::json!({
                    "expected": result.expected,
                    "actual": result.actual,
                    "host": result.host,
                }));
            }
            log.emit_entry(entry)?;
            results.push(result);
        }

        let failed = results.iter().filter(|r| !r.passed).count();
        log.emit_entry(
            LogEntry::new(
                "",
                if failed == 0 { LogLevel::Info } else { LogLevel::Warn },
                "run_end",
            )
            .with_stream(StreamKind::Conformance)
            .with_policy(self.policy.as_str())
            .with_details(serde_json::json!({
                "total": results.len(),
                "failed": failed,
            })),
        )?;
        log.flush()?;
        Ok(results)
    }

    /// Cases tagged for the active policy. Cases whose tag names no policy
    /// are kept and fail in `verify_case`.
    fn selected<'a>(&self, fixture_set: &'a FixtureSet) -> impl Iterator<Item = &'a FixtureCase> {
        let policy = self.policy;
        fixture_set
            .cases
            .iter()
            .filter(move |case| policy_applies(policy, &case.policy) != Some(false))
    }

    fn verify_case(&self, case: &FixtureCase) -> VerificationResult {
        let applies = policy_applies(self.policy, &case.policy);
        let policy_specific = applies == Some(true) && !is_both(&case.policy);
        let case_name = if policy_specific {
            case.name.clone()
        } else {
            format!("{} [{}]", case.name, self.policy.as_str())
        };

        let (actual, host, diff_out) = match applies {
            Some(_) => execute_case(case, self.policy),
            None => {
                let actual = format!("unsupported:policy '{}'", case.policy);
                let d = diff::render_diff(&case.expected_output, &actual);
                (actual, None, Some(d))
            }
        };

        VerificationResult {
            case_name,
            function: case.function.clone(),
            reference: case.reference.clone(),
            passed: applies.is_some() && actual == case.expected_output,
            expected: case.expected_output.clone(),
            actual,
            host,
            diff: diff_out,
        }
    }
}

/// Whether a case tagged `case_policy` runs under `active`; `None` if the
/// tag names no known policy.
fn policy_applies(active: ZeroRunPolicy, case_policy: &str) -> Option<bool> {
    if is_both(case_policy) {
        return Some(true);
    }
    ZeroRunPolicy::from_str_loose(case_policy).map(|p| p == active)
}

fn is_both(case_policy: &str) -> bool {
    case_policy.trim().eq_ignore_ascii_case("both")
}

fn execute_case(
    case: &FixtureCase,
    policy: ZeroRunPolicy,
) -> (String, Option<String>, Option<String>) {
    match execute_fixture_case(&case.function, &case.inputs, policy) {
        Ok(run) => {
            let mut notes = Vec::new();
            if !run.host_parity
                && let Some(host) = &run.host_output
            {
                notes.push(format!(
                    "host parity mismatch: host={host}, impl={}",
                    run.impl_output
                ));
            }

            let diff_out = if run.impl_output != case.expected_output {
                let mut d = diff::render_diff(&case.expected_output, &run.impl_output);
                for note in &notes {
                    d.push('\n');
                    d.push_str(note);
                }
                Some(d)
            } else if !notes.is_empty() {
                Some(notes.join("\n"))
            } else {
                None
            };

            (run.impl_output, run.host_output, diff_out)
        }
        Err(err) => {
            let actual = format!("unsupported:{err}");
            let diff_out = Some(diff::render_diff(&case.expected_output, &actual));
            (actual, None, diff_out)
        }
    }
}
