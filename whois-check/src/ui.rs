//! Display logic for the whois-check CLI.
//!
//! This module handles human-readable output: colored result lines,
//! headers, summaries, and the TLD listing. Uses only the `console`
//! crate (already a dependency).

use console::{pad_str, style, Alignment};
use whois_check_lib::AvailabilityResult;

/// Print a styled header at the start of a run.
pub fn print_header(domain_count: usize, concurrency: usize) {
    println!(
        "{} {} {}",
        style("whois-check").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!(
            "— Checking {} domain{}",
            domain_count,
            if domain_count == 1 { "" } else { "s" }
        ))
        .dim(),
    );
    println!("{}", style(format!("Concurrency: {}", concurrency)).dim());
    println!();
}

/// Format and print a single result with colors and alignment.
///
/// The error arm of the result shape carries only a message, so the
/// queried domain is passed in separately to keep every line attributable.
pub fn print_result(domain: &str, result: &AvailabilityResult, show_response: bool) {
    let domain_width = 30;
    let padded = pad_str(domain, domain_width, Alignment::Left, Some(".."));

    match result {
        AvailabilityResult::Success {
            is_available,
            whois_response,
            ..
        } => {
            if *is_available {
                println!(
                    "  {}  {}",
                    style(&padded).white(),
                    style("AVAILABLE").green().bold(),
                );
            } else {
                println!(
                    "  {}  {}",
                    style(&padded).white(),
                    style("REGISTERED").red().bold(),
                );
            }
            if show_response {
                for line in whois_response.lines() {
                    println!("    {}", style(line).dim());
                }
            }
        }
        AvailabilityResult::Error { message } => {
            println!(
                "  {}  {}  {}",
                style(&padded).white(),
                style("ERROR").yellow().bold(),
                style(message).dim(),
            );
        }
    }
}

/// Print the closing summary line.
pub fn print_summary(results: &[AvailabilityResult]) {
    let available = results
        .iter()
        .filter(|r| r.is_available() == Some(true))
        .count();
    let registered = results
        .iter()
        .filter(|r| r.is_available() == Some(false))
        .count();
    let errors = results.iter().filter(|r| !r.is_success()).count();

    println!();
    println!(
        "{} {} available, {} registered, {} error{}",
        style("Summary:").bold(),
        style(available).green(),
        style(registered).red(),
        style(errors).yellow(),
        if errors == 1 { "" } else { "s" },
    );
}

/// Print all TLDs the registry directory knows about.
pub fn print_tld_list() {
    let tlds = whois_check_lib::known_tlds();
    println!(
        "{} {} {}",
        style("whois-check").bold(),
        style("knows WHOIS servers for").dim(),
        style(format!("{} TLDs:", tlds.len())).bold(),
    );
    println!();
    for chunk in tlds.chunks(10) {
        println!("  {}", chunk.join(", "));
    }
}
