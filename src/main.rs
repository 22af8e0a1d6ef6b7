//! threat-sentinel - content threat intelligence CLI
//!
//! Classifies content and triages alerts over the demonstration dataset.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use threat_sentinel::config::Config;
use threat_sentinel::monitoring::AlertStatusFilter;
use threat_sentinel::utils::logging::init_logging;
use threat_sentinel::{
    AlertFilter, AlertSeverity, ContentSubmission, DateRange, ReportFormat, ReportRequest,
    ReportType, Sentinel, ThreatCategory, highlight_keywords,
};

#[derive(Debug, Parser)]
#[command(name = "threat-sentinel", version, about = "Content threat intelligence")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "SENTINEL_CONFIG")]
    config: Option<PathBuf>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a piece of content
    Analyze(AnalyzeArgs),
    /// List and acknowledge alerts
    Alerts(AlertsArgs),
    /// Print dashboard statistics
    Stats,
    /// Generate and export a report
    Report(ReportArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Text to classify
    #[arg(required_unless_present = "image")]
    text: Option<String>,

    /// Treat the submission as an uploaded image with this file name
    #[arg(long, conflicts_with = "text")]
    image: Option<String>,

    /// Submitting user
    #[arg(short, long, default_value = "1")]
    user: String,

    /// Print the content with matched keywords marked
    #[arg(long)]
    highlight: bool,
}

#[derive(Debug, Args)]
struct AlertsArgs {
    /// all, acknowledged or unacknowledged
    #[arg(long, default_value = "all")]
    status: AlertStatusFilter,

    #[arg(long)]
    severity: Option<AlertSeverity>,

    #[arg(long = "type")]
    category: Option<ThreatCategory>,

    /// Case-insensitive message search
    #[arg(long)]
    search: Option<String>,

    /// Acknowledge this alert before listing
    #[arg(long)]
    ack: Option<String>,

    /// Acknowledge every alert before listing
    #[arg(long)]
    ack_all: bool,
}

#[derive(Debug, Args)]
struct ReportArgs {
    #[arg(long = "type", default_value = "threat-summary")]
    report_type: ReportType,

    #[arg(long)]
    title: Option<String>,

    #[arg(long, default_value = "json")]
    format: ReportFormat,

    /// Days covered, ending now
    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(i64).range(0..=36500)
    )]
    days: i64,

    /// Output directory, defaults to the configured reports directory
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())
        .await
        .context("loading configuration")?;
    if cli.json_logs {
        config.sentinel.logging.json = true;
    }
    init_logging(config.logging())?;

    let sentinel = Sentinel::with_seed_data(config).await?;

    match cli.command {
        Command::Analyze(args) => analyze(&sentinel, args).await,
        Command::Alerts(args) => alerts(&sentinel, args),
        Command::Stats => {
            let stats = sentinel.dashboard(chrono::Utc::now());
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Command::Report(args) => report(&sentinel, args).await,
    }
}

async fn analyze(sentinel: &Sentinel, args: AnalyzeArgs) -> anyhow::Result<()> {
    let submission = match (args.image, args.text) {
        (Some(file_name), _) => ContentSubmission::image(&file_name, args.user),
        (None, Some(text)) => ContentSubmission::text(text, args.user),
        (None, None) => anyhow::bail!("nothing to analyze"),
    };

    let outcome = sentinel.analysis().submit(submission).await?;
    println!("{}", serde_json::to_string_pretty(&outcome.assessment)?);
    if args.highlight {
        println!(
            "{}",
            highlight_keywords(&outcome.assessment.content, &outcome.assessment.keywords)
        );
    }
    for alert in &outcome.alerts {
        println!("[{}] {}", alert.severity, alert.message);
    }
    Ok(())
}

fn alerts(sentinel: &Sentinel, args: AlertsArgs) -> anyhow::Result<()> {
    let manager = sentinel.analysis().alerts();
    if let Some(id) = &args.ack {
        manager.acknowledge(id)?;
    }
    if args.ack_all {
        let changed = manager.acknowledge_all();
        println!("Acknowledged {} alert(s)", changed);
    }

    let mut filter = AlertFilter::default().with_status(args.status);
    if let Some(severity) = args.severity {
        filter = filter.with_severity(severity);
    }
    if let Some(category) = args.category {
        filter = filter.with_category(category);
    }
    if let Some(search) = args.search {
        filter = filter.with_search(search);
    }

    for alert in manager.filter(&filter) {
        let category = alert.category.map(|c| c.to_string()).unwrap_or_default();
        println!(
            "{:<38} {:<9} {:<10} {:<5} {}",
            alert.id,
            alert.severity,
            category,
            if alert.acknowledged { "ack" } else { "" },
            alert.message
        );
    }
    println!("{} unacknowledged", manager.unacknowledged_count());
    Ok(())
}

async fn report(sentinel: &Sentinel, args: ReportArgs) -> anyhow::Result<()> {
    let title = args
        .title
        .unwrap_or_else(|| args.report_type.label().to_string());
    let request = ReportRequest::new(
        title,
        "cli",
        DateRange::last_days(chrono::Utc::now(), args.days)?,
        args.format,
    );
    let report = sentinel.generate_report(args.report_type, request);

    let dir = args
        .out
        .unwrap_or_else(|| sentinel.config().reports().output_dir.clone());
    let path = report.export(&dir).await?;
    println!("Wrote {}", path.display());
    Ok(())
}
