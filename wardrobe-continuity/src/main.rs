//! wardrobe-continuity - Continuity check for wardrobe timeline exports
//!
//! Reads a JSON array of hydrated timeline records, runs the continuity
//! engine and prints the report to stdout. Logs go to stderr.
//!
//! Exit status: 0 on success, 1 on input/config errors, 2 when `--fail-on`
//! is given and an issue at or above that severity was found.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wardrobe_common::config::{ConfigResolver, OutputFormat, TomlConfig};
use wardrobe_common::models::{load_timeline, read_timeline};
use wardrobe_common::{Error, RawTimelineEntry};
use wardrobe_continuity::{ContinuityEngine, ConsistencyReport, Severity};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeverityArg {
    High,
    Medium,
    Low,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::High => Severity::High,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::Low => Severity::Low,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wardrobe-continuity",
    version,
    about = "Detect wardrobe continuity conflicts in a story timeline"
)]
struct Args {
    /// Timeline export (JSON array of entries), or - for stdin
    input: PathBuf,

    /// Report format (overrides config)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Run detectors concurrently
    #[arg(long)]
    parallel: bool,

    /// Exit with status 2 if any issue at or above this severity exists
    #[arg(long, value_enum)]
    fail_on: Option<SeverityArg>,

    /// Config file (default: $WARDROBE_CONFIG, then platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let (config, config_path) = ConfigResolver::new()
        .load(args.config.as_deref())
        .context("Failed to load configuration")?;

    init_tracing(&config);
    info!("Starting wardrobe-continuity v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using compiled defaults"),
    }

    let entries = load_entries(&args.input)?;
    info!("Loaded {} timeline entries", entries.len());

    let engine = ContinuityEngine::new();
    let report = if args.parallel || config.output.parallel {
        engine.check_parallel(&entries).await?
    } else {
        engine.check(&entries)
    };

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    print_report(&report, format)?;

    if let Some(threshold) = args.fail_on.map(Severity::from) {
        if report.has_issues_at_or_above(threshold) {
            warn!("Issues at or above {} severity found", threshold);
            return Ok(ExitCode::from(2));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(config: &TomlConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_entries(input: &Path) -> Result<Vec<RawTimelineEntry>> {
    if input == Path::new("-") {
        return read_timeline(std::io::stdin().lock())
            .context("Failed to parse timeline from stdin");
    }

    load_timeline(input).map_err(|e| {
        let action = match e {
            Error::Io(_) => "open",
            _ => "parse",
        };
        let message = format!("Failed to {} timeline file {}", action, input.display());
        anyhow::Error::new(e).context(message)
    })
}

fn print_report(report: &ConsistencyReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", report.render_text()),
    }
    Ok(())
}
