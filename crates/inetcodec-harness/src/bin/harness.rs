//! CLI entrypoint for the inetcodec conformance harness.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use inetcodec_core::{AddressFamily, ZeroRunPolicy};
use inetcodec_harness::capture;
use inetcodec_harness::structured_log::{self, ArtifactIndex, LogEmitter};
use inetcodec_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for inetcodec.
#[derive(Debug, Parser)]
#[command(name = "inetcodec-harness")]
#[command(about = "Conformance testing harness for inetcodec")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture `std::net` behavior for the built-in corpus as a fixture file.
    Capture {
        /// Output fixture JSON path.
        #[arg(long)]
        output: PathBuf,
        /// Address family to capture: `ipv4`, `ipv6`, or `both`.
        #[arg(long, default_value = "both")]
        family: String,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Run identifier used in log trace ids.
        #[arg(long, default_value = "local")]
        run_id: String,
        /// Optional fixed capture timestamp for deterministic output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the codec against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Zero-run policy: `first_run`, `longest_run`, or `both`.
        #[arg(long, default_value = "both")]
        policy: String,
        /// Output report path (markdown). A `.json` sibling is written too.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Run identifier used in log trace ids.
        #[arg(long, default_value = "local")]
        run_id: String,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Render a diff between expected and actual text values.
    Diff {
        /// Expected text payload.
        #[arg(long)]
        expected: String,
        /// Actual text payload.
        #[arg(long)]
        actual: String,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        /// Log file path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Capture {
            output,
            family,
            log,
            run_id,
            timestamp,
        } => {
            let families = parse_families(&family)?;
            let captured_at = timestamp.unwrap_or_else(structured_log::now_utc);
            let set = capture::capture_fixture_set(captured_at, &families);
            if let Some(log_path) = &log {
                let mut emitter = LogEmitter::to_file(log_path, "capture", &run_id)?;
                capture::log_capture(&set, &mut emitter)?;
            }
            eprintln!(
                "Captured {} host cases to {}",
                set.cases.len(),
                output.display()
            );
            std::fs::write(&output, set.to_json()?)?;
        }
        Command::Verify {
            fixture,
            policy,
            report,
            log,
            run_id,
            timestamp,
        } => {
            let policies = parse_policies(&policy)?;
            let fixture_sets = load_fixture_sets(&fixture)?;

            let mut emitter = match &log {
                Some(path) => LogEmitter::to_file(path, "verify", &run_id)?,
                None => LogEmitter::to_buffer("verify", &run_id),
            };

            let mut results = Vec::new();
            for &p in &policies {
                let runner = TestRunner::new("fixture-verify", p);
                for set in &fixture_sets {
                    results.extend(runner.run_logged(set, &mut emitter)?);
                }
            }

            // Stable ordering so repeated runs hash identically.
            results.sort_by(|a, b| {
                a.function
                    .cmp(&b.function)
                    .then_with(|| a.case_name.cmp(&b.case_name))
                    .then_with(|| a.expected.cmp(&b.expected))
                    .then_with(|| a.actual.cmp(&b.actual))
            });

            let report_doc = ConformanceReport {
                title: String::from("inetcodec Conformance Report"),
                policy: policies
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("+"),
                timestamp: timestamp.unwrap_or_else(structured_log::now_utc),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                let markdown = report_doc.to_markdown();
                let json = report_doc.to_json();
                let json_path = report_path.with_extension("json");
                std::fs::write(&report_path, &markdown)?;
                std::fs::write(&json_path, &json)?;
                eprintln!("Wrote report to {}", report_path.display());

                if let Some(log_path) = &log {
                    let mut index = ArtifactIndex::new(&run_id);
                    index
                        .add_contents(
                            report_path.display().to_string(),
                            "report_md",
                            markdown.as_bytes(),
                        )
                        .add_contents(
                            json_path.display().to_string(),
                            "report_json",
                            json.as_bytes(),
                        );
                    let index_path = log_path.with_extension("index.json");
                    std::fs::write(&index_path, index.to_json()?)?;
                    eprintln!("Wrote artifact index to {}", index_path.display());
                }
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Diff { expected, actual } => {
            println!("{}", inetcodec_harness::diff::render_diff(&expected, &actual));
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = structured_log::validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!("Validated {lines} lines, {} errors", errors.len());
            if !errors.is_empty() {
                return Err(format!("{} has schema violations", log.display()).into());
            }
        }
    }

    Ok(())
}

fn parse_policies(raw: &str) -> Result<Vec<ZeroRunPolicy>, String> {
    if raw.eq_ignore_ascii_case("both") {
        return Ok(vec![ZeroRunPolicy::FirstRun, ZeroRunPolicy::LongestRun]);
    }
    ZeroRunPolicy::from_str_loose(raw)
        .map(|p| vec![p])
        .ok_or_else(|| format!("unknown policy '{raw}' (expected first_run, longest_run or both)"))
}

fn parse_families(raw: &str) -> Result<Vec<AddressFamily>, String> {
    if raw.eq_ignore_ascii_case("both") {
        return Ok(capture::ALL_FAMILIES.to_vec());
    }
    AddressFamily::from_str_loose(raw)
        .map(|f| vec![f])
        .ok_or_else(|| format!("unknown family '{raw}' (expected ipv4, ipv6 or both)"))
}

fn load_fixture_sets(path: &Path) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    if path.is_file() {
        return Ok(vec![FixtureSet::from_file(path)?]);
    }

    let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    fixture_paths.sort();

    let mut sets = Vec::new();
    for p in fixture_paths {
        match FixtureSet::from_file(&p) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", p.display(), err),
        }
    }
    if sets.is_empty() {
        return Err(format!("No fixture JSON files found in {}", path.display()).into());
    }
    Ok(sets)
}
