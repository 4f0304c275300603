//! CLI entrypoint for the brokenkeys harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use brokenkeys_core::count_typeable;
use brokenkeys_harness::report::{ConformanceReport, FixtureDigest, sha256_hex};
use brokenkeys_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use brokenkeys_harness::verify::VerificationSummary;
use brokenkeys_harness::{FixtureSet, TestRunner, scenarios};

/// Fixture tooling and demonstration driver for brokenkeys.
#[derive(Debug, Parser)]
#[command(name = "brokenkeys-harness")]
#[command(about = "Fixture harness and demo driver for brokenkeys")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the canned demonstration scenarios and print their counts.
    Demo,
    /// Write the built-in scenario tables as fixture JSON files.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the implementation against captured fixtures.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown); a `.json` sibling is written too.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
        /// Optional JSONL structured log output path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo => run_demo(),
        Command::Capture { output } => {
            eprintln!("Capturing built-in fixtures to {}", output.display());
            std::fs::create_dir_all(&output)?;
            for set in scenarios::builtin_sets() {
                let path = output.join(format!("{}.{}.json", set.suite, set.version));
                std::fs::write(&path, set.to_json()?)?;
                eprintln!("Wrote {} ({} cases)", path.display(), set.cases.len());
            }
        }
        Command::Verify {
            fixture,
            report,
            timestamp,
            log,
        } => {
            run_verify(&fixture, report.as_deref(), timestamp, log.as_deref())?;
        }
    }
    Ok(())
}

/// Prints the three demonstration scenarios in the fixed driver format.
fn run_demo() {
    for (i, case) in scenarios::canonical().cases.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "Input: \"{}\", broken: \"{}\"",
            case.text, case.broken_letters
        );
        println!("Output: {}", count_typeable(&case.text, &case.broken_letters));
    }
}

fn run_verify(
    fixture_dir: &std::path::Path,
    report_path: Option<&std::path::Path>,
    timestamp: Option<String>,
    log_path: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Verifying against fixtures in {}", fixture_dir.display());

    let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(fixture_dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    fixture_paths.sort();

    let mut fixture_sets = Vec::new();
    let mut digests = Vec::new();
    for path in fixture_paths {
        match FixtureSet::from_file(&path) {
            Ok(set) => {
                let bytes = std::fs::read(&path)?;
                digests.push(FixtureDigest {
                    path: path.display().to_string(),
                    sha256: sha256_hex(&bytes),
                });
                fixture_sets.push(set);
            }
            Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
        }
    }
    if fixture_sets.is_empty() {
        return Err(format!("No fixture JSON files found in {}", fixture_dir.display()).into());
    }

    let runner = TestRunner::new("fixture-verify");
    let mut results = Vec::new();
    for set in &fixture_sets {
        results.extend(runner.run(set));
    }

    // Stabilize report ordering for reproducible golden-output hashing.
    results.sort_by(|a, b| {
        a.suite
            .cmp(&b.suite)
            .then_with(|| a.case_name.cmp(&b.case_name))
    });

    let timestamp =
        timestamp.unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now()));

    if let Some(log_path) = log_path {
        let mut emitter = LogEmitter::to_file(log_path)?;
        for r in &results {
            let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
            let level = if r.passed {
                LogLevel::Info
            } else {
                LogLevel::Error
            };
            let mut entry = LogEntry::new(timestamp.clone(), level, "case_verified", &runner.campaign)
                .with_case(format!("{}/{}", r.suite, r.case_name))
                .with_outcome(outcome);
            if let Some(diff) = &r.diff {
                entry = entry.with_detail(diff.clone());
            }
            emitter.emit(&entry)?;
        }
        let summary_entry = LogEntry::new(
            timestamp.clone(),
            LogLevel::Info,
            "run_complete",
            &runner.campaign,
        )
        .with_detail(format!(
            "total={}, passed={}",
            results.len(),
            results.iter().filter(|r| r.passed).count()
        ));
        emitter.emit(&summary_entry)?;
        emitter.flush()?;
        eprintln!("Wrote structured log to {}", log_path.display());
    }

    let summary = VerificationSummary::from_results(results);
    let report_doc = ConformanceReport {
        title: String::from("brokenkeys Verification Report"),
        timestamp,
        fixtures: digests,
        summary,
    };

    eprintln!(
        "Verification complete: total={}, passed={}, failed={}",
        report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
    );

    if let Some(report_path) = report_path {
        eprintln!("Writing report to {}", report_path.display());
        std::fs::write(report_path, report_doc.to_markdown())?;
        let json_path = report_path.with_extension("json");
        std::fs::write(&json_path, report_doc.to_json())?;
    }

    if !report_doc.summary.all_passed() {
        return Err("Fixture verification failed".into());
    }
    Ok(())
}
