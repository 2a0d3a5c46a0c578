//! WHOIS Check CLI Application
//!
//! A command-line interface for checking domain availability over the raw
//! WHOIS wire protocol. This CLI application provides a user-friendly
//! interface to the whois-check-lib library.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use futures::StreamExt;
use std::process;
use std::time::Duration;
use whois_check_lib::{AvailabilityResult, CheckConfig, DomainChecker};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for whois-check
#[derive(Parser, Debug)]
#[command(name = "whois-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check domain availability over the raw WHOIS protocol")]
#[command(
    long_about = "Check domain availability by querying the registry's WHOIS server directly over TCP port 43.\n\nThe WHOIS server is selected from a compiled-in TLD table; use --list-tlds to see coverage."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Domain names to check (e.g. example.com)
    #[arg(value_name = "DOMAINS", help_heading = "Domain Selection")]
    pub domains: Vec<String>,

    /// Query a specific WHOIS server (host or host:port) instead of the registry table
    #[arg(
        short = 's',
        long = "server",
        value_name = "HOST",
        help_heading = "Domain Selection"
    )]
    pub server: Option<String>,

    /// List all TLDs with a configured WHOIS server and exit
    #[arg(long = "list-tlds", help_heading = "Domain Selection")]
    pub list_tlds: bool,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Print the raw WHOIS response under each result
    #[arg(short = 'r', long = "show-response", help_heading = "Output Format")]
    pub show_response: bool,

    /// Session deadline per query, in seconds
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        default_value = "10",
        help_heading = "Performance"
    )]
    pub timeout: u64,

    /// Max concurrent checks (default: 10, max: 100)
    #[arg(
        short = 'c',
        long = "concurrency",
        default_value = "10",
        help_heading = "Performance"
    )]
    pub concurrency: usize,

    /// Show detailed debug logging
    #[arg(short = 'd', long = "debug", help_heading = "Configuration")]
    pub debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("whois_check_lib=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    if args.list_tlds {
        ui::print_tld_list();
        return;
    }

    if args.domains.is_empty() {
        eprintln!("error: no domains given (try 'whois-check example.com')");
        process::exit(2);
    }

    // with_concurrency clamps to 1-100; the stream bound below must use
    // the clamped value, never the raw flag.
    let config = CheckConfig::default()
        .with_timeout(Duration::from_secs(args.timeout))
        .with_concurrency(args.concurrency);
    let concurrency = config.concurrency;
    let checker = DomainChecker::with_config(config);

    let results = run_checks(&checker, &args, concurrency).await;

    if args.json {
        // One JSON array with the wire field names, pretty-printed.
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize results: {}", e);
                process::exit(1);
            }
        }
    } else {
        ui::print_summary(&results);
    }

    if results.iter().any(|r| !r.is_success()) {
        process::exit(1);
    }
}

/// Run all checks, streaming human-readable lines as results complete.
///
/// Results are paired with the queried domain so error lines stay
/// attributable even though the error result shape carries only a message.
async fn run_checks(
    checker: &DomainChecker,
    args: &Args,
    concurrency: usize,
) -> Vec<AvailabilityResult> {
    if !args.json {
        ui::print_header(args.domains.len(), concurrency);
    }

    let mut stream = futures::stream::iter(&args.domains)
        .map(|domain| async move {
            let result = match &args.server {
                // Targeted queries bypass the registry table.
                Some(server) => checker.check_domain_with_server(domain, server).await,
                None => checker.check_domain(domain).await,
            };
            (domain, result)
        })
        .buffer_unordered(concurrency);

    let mut results = Vec::with_capacity(args.domains.len());
    while let Some((domain, result)) = stream.next().await {
        if !args.json {
            ui::print_result(domain, &result, args.show_response);
        }
        results.push(result);
    }

    results
}
