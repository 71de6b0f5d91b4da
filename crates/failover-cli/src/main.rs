//! Binary that checks regional health and fails DNS over between the primary
//! and disaster-recovery regions.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

mod commands;
mod error;

use error::Result;

use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(cli.log_level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    match cli.command {
        Commands::Check(args) => commands::check(*args).await,
        Commands::Watch(args) => commands::watch(*args).await,
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Maximum level of log output
    #[arg(long, global = true, default_value_t = Level::INFO, env = "FAILOVER_LOG_LEVEL")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run a single failover check and print the report
    Check(Box<CheckArgs>),
    /// Run failover checks periodically until interrupted
    Watch(Box<WatchArgs>),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    failover: FailoverArgs,
}

#[derive(Parser, Debug)]
struct WatchArgs {
    #[command(flatten)]
    failover: FailoverArgs,

    /// Seconds between checks
    #[arg(long, default_value_t = 60, env = "FAILOVER_INTERVAL_SECS")]
    interval_secs: u64,
}

/// How the active alias target is mapped to a region.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum ClassifierKind {
    /// Match load balancer and region names inside the alias target
    Substring,
    /// Compare the alias target with the configured regional endpoints
    Exact,
}

#[derive(Clone, Debug, Parser)]
struct FailoverArgs {
    /// AWS region used for client configuration
    #[arg(long, default_value = "us-east-1", env = "AWS_REGION")]
    aws_region: String,

    /// Classification strategy for the active alias target
    #[arg(long, value_enum, default_value_t = ClassifierKind::Substring, env = "FAILOVER_CLASSIFIER")]
    classifier: ClassifierKind,

    /// Domain whose routing is managed
    #[arg(long, env = "DOMAIN_NAME")]
    domain_name: String,

    /// Alias DNS name of the DR endpoint
    #[arg(long, env = "DR_ALIAS_DNS_NAME")]
    dr_alias_dns_name: Option<String>,

    /// Hosted zone ID of the DR endpoint
    #[arg(long, env = "DR_ALIAS_ZONE_ID")]
    dr_alias_zone_id: Option<String>,

    /// Route 53 health check covering the DR region
    #[arg(long, env = "DR_HEALTH_CHECK_ID")]
    dr_health_check_id: String,

    /// Alias target marker identifying the DR region
    #[arg(long, default_value = "us-west-2", env = "FAILOVER_DR_REGION_MARKER")]
    dr_region_marker: String,

    /// Execute failovers instead of only reporting them ("true" to enable)
    #[arg(
        long,
        default_value = "false",
        env = "ENABLE_AUTO_FAILOVER",
        action = ArgAction::Set,
        value_parser = parse_enabled
    )]
    enable_auto_failover: bool,

    /// Hosted zone containing the domain
    #[arg(long, env = "ROUTE53_ZONE_ID")]
    hosted_zone_id: String,

    /// Alias target marker shared by all regional load balancers
    #[arg(long, default_value = "elb", env = "FAILOVER_LOAD_BALANCER_MARKER")]
    load_balancer_marker: String,

    /// Alias DNS name of the primary endpoint
    #[arg(long, env = "PRIMARY_ALIAS_DNS_NAME")]
    primary_alias_dns_name: Option<String>,

    /// Hosted zone ID of the primary endpoint
    #[arg(long, env = "PRIMARY_ALIAS_ZONE_ID")]
    primary_alias_zone_id: Option<String>,

    /// Route 53 health check covering the primary region
    #[arg(long, env = "PRIMARY_HEALTH_CHECK_ID")]
    primary_health_check_id: String,

    /// Alias target marker identifying the primary region
    #[arg(long, default_value = "us-east-1", env = "FAILOVER_PRIMARY_REGION_MARKER")]
    primary_region_marker: String,

    /// SNS topic for alerts (notifications are skipped when unset)
    #[arg(long, env = "SNS_TOPIC_ARN")]
    sns_topic_arn: Option<String>,
}

/// Anything other than a case-insensitive `true` leaves automation disabled.
#[allow(clippy::unnecessary_wraps)]
fn parse_enabled(value: &str) -> std::result::Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}
