use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sales_analytics::{
    analytics::BandBoundaryPolicy,
    config::{AnalyticsConfig, load_config_path},
    db::{connection::connect_sqlite, migrate},
    report,
    response::{Endpoint, Payload, failure_body, success_body},
    sales::SqliteSalesRepo,
};

#[derive(Parser)]
#[command(version, about = "Monthly sales analytics CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// SQLite path or `sqlite:` URL (overrides config and DATABASE_URL)
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Apply embedded schema migrations
    Migrate,
    /// Revenue and sold/unsold counts
    Monthly(MonthArgs),
    /// Price band histogram
    BarChart(RangeArgs),
    /// Record count per category
    Categories(MonthArgs),
    /// All three aggregates from one fetch
    Complete(RangeArgs),
}

#[derive(Args)]
struct MonthArgs {
    /// Canonical English month name, e.g. "March"
    #[arg(long)]
    month: String,
}

#[derive(Args)]
struct RangeArgs {
    #[command(flatten)]
    month: MonthArgs,

    /// Band boundary handling: exclusive | contiguous (defaults to config)
    #[arg(long)]
    boundary: Option<BandBoundaryPolicy>,
}

fn init_tracing() {
    // stdout carries the JSON envelope; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let cfg = match cli.config.as_deref() {
        Some(path) => load_config_path(path)?,
        None => AnalyticsConfig::default(),
    };
    let db_url = cfg
        .database_url(cli.database_url.as_deref())
        .context("no database configured")?;

    if matches!(cli.cmd, Cmd::Migrate) {
        return migrate::run_all(&db_url);
    }

    let mut conn = connect_sqlite(&db_url)?;
    let mut repo = SqliteSalesRepo::new(&mut conn);
    let policy = |arg: Option<BandBoundaryPolicy>| arg.unwrap_or(cfg.ranges.boundary);

    let (endpoint, outcome) = match cli.cmd {
        Cmd::Migrate => return Ok(()), // applied above without a query connection
        Cmd::Monthly(a) => (
            Endpoint::Monthly,
            report::monthly_analytics(&mut repo, &a.month).map(Payload::Monthly),
        ),
        Cmd::BarChart(a) => (
            Endpoint::BarChart,
            report::bar_chart_data(&mut repo, &a.month.month, policy(a.boundary))
                .map(Payload::BarChart),
        ),
        Cmd::Categories(a) => (
            Endpoint::Categories,
            report::category_wise_data(&mut repo, &a.month).map(Payload::Categories),
        ),
        Cmd::Complete(a) => (
            Endpoint::Complete,
            report::complete_analytics(&mut repo, &a.month.month, policy(a.boundary))
                .map(Payload::Complete),
        ),
    };

    match outcome {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&success_body(&payload)?)?);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "query failed");
            println!(
                "{}",
                serde_json::to_string_pretty(&failure_body(endpoint, &err))?
            );
            std::process::exit(1);
        }
    }
}
