//! Accept-Language demo - match headers against a supported language list
//!
//! Usage:
//!   accept-language                              # Print the built-in example catalogue
//!   accept-language "fr-FR, fr, *"               # Match a header against SUPPORTED_LANGUAGES
//!   accept-language --scenarios cases.json       # Run scenarios from a JSON file
//!
//! Flags:
//!   --json    Print results as JSON (same as OUTPUT_FORMAT=json)
//!   --stats   Include per-call match statistics
//!
//! Optional environment variables:
//! - SUPPORTED_LANGUAGES (defaults to en-US,fr-CA,fr-FR)
//! - OUTPUT_FORMAT (text or json, defaults to text)

use std::path::PathBuf;

use accept_language::config::{Config, OutputFormat};
use accept_language::scenario::{load_scenarios, Scenario, ScenarioOutcome};
use accept_language::MatchStats;
use anyhow::{bail, Context, Result};
use tracing::info;

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    header: Option<String>,
    scenarios: Option<PathBuf>,
    json: bool,
    stats: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--stats" => parsed.stats = true,
                "--scenarios" => {
                    let path = args.next().context("--scenarios requires a file path")?;
                    parsed.scenarios = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
                _ if parsed.header.is_some() => {
                    bail!("Only one header may be given (quote it if it contains spaces)")
                }
                _ => parsed.header = Some(arg),
            }
        }

        if parsed.header.is_some() && parsed.scenarios.is_some() {
            bail!("Pass either a header or --scenarios, not both");
        }

        Ok(parsed)
    }
}

fn print_outcome(outcome: &ScenarioOutcome, note: Option<&str>, with_stats: bool) {
    println!("Header: {:?}", outcome.header);
    println!("Supported: {:?}", outcome.supported);
    print!("Result: {:?}", outcome.result);
    if let Some(note) = note {
        print!(" ({})", note);
    }
    match outcome.passed {
        Some(true) => println!(" ✓"),
        Some(false) => println!(" ✗ MISMATCH"),
        None => println!(),
    }
    if with_stats {
        println!("{}", stats_line(&outcome.stats));
    }
    println!();
}

fn stats_line(s: &MatchStats) -> String {
    format!(
        "Stats: tokens={} exact={} generic={} wildcard={} duplicates={} ignored={} hit_rate={:.1}%",
        s.tokens,
        s.exact_hits,
        s.generic_expansions,
        s.wildcard_expansions,
        s.duplicates_skipped,
        s.ignored,
        s.token_hit_rate()
    )
}

/// The group heading to print before a scenario, if its group starts here.
fn new_heading<'a>(group: Option<&'a str>, current: Option<&str>) -> Option<&'a str> {
    group.filter(|g| Some(*g) != current)
}

/// Run scenarios and print them. Returns the number of failed expectations.
fn run_scenarios(
    scenarios: &[Scenario],
    format: OutputFormat,
    with_stats: bool,
) -> Result<usize> {
    let outcomes: Vec<ScenarioOutcome> = scenarios.iter().map(Scenario::run).collect();
    let failures = outcomes
        .iter()
        .filter(|o| o.passed == Some(false))
        .count();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcomes)
                .context("Failed to serialize scenario outcomes")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("ACCEPT-LANGUAGE MATCHER");
            println!("-----------------------");
            println!();

            let mut current_group: Option<&str> = None;
            for (scenario, outcome) in scenarios.iter().zip(&outcomes) {
                let group = scenario.group.as_deref();
                if let Some(title) = new_heading(group, current_group) {
                    let title = title.to_uppercase();
                    println!("{}", title);
                    println!("{}", "-".repeat(title.chars().count()));
                    current_group = group;
                }
                println!("# {}", scenario.name);
                print_outcome(outcome, scenario.note.as_deref(), with_stats);
            }

            let checked = outcomes.iter().filter(|o| o.passed.is_some()).count();
            println!(
                "{} scenarios, {} checked, {} failed",
                outcomes.len(),
                checked,
                failures
            );
        }
    }

    Ok(failures)
}

fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("accept_language=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config = Config::from_env().context("Invalid configuration")?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output_format
    };

    if let Some(header) = args.header {
        info!(
            "Matching against {} supported languages",
            config.supported_languages.len()
        );
        let scenario = Scenario {
            name: "command line".to_string(),
            group: None,
            header,
            supported: config.supported_languages,
            expected: None,
            note: None,
        };
        let outcome = scenario.run();

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
            OutputFormat::Text => print_outcome(&outcome, None, args.stats),
        }
        return Ok(());
    }

    let scenarios = match &args.scenarios {
        Some(path) => load_scenarios(path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display()))?,
        None => Scenario::builtin(),
    };

    let failures = run_scenarios(&scenarios, format, args.stats)?;
    if failures > 0 {
        bail!("{} scenario(s) did not produce the expected result", failures);
    }

    Ok(())
}
