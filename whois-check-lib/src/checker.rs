//! Main domain checker implementation.
//!
//! This module provides the primary `DomainChecker` struct that orchestrates
//! an availability check: validate the input, resolve the TLD through the
//! registry directory, run the WHOIS session, classify the response.

use crate::error::WhoisCheckError;
use crate::protocols::registry;
use crate::protocols::whois::{is_available_response, WhoisClient};
use crate::types::{AvailabilityResult, CheckConfig};
use crate::utils::validate_domain;
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;

/// Main domain checker that coordinates availability checking operations.
///
/// The `DomainChecker` handles all aspects of a check:
/// - Input validation (no I/O for bad input)
/// - Registry directory resolution (no I/O for unknown TLDs)
/// - The WHOIS session lifecycle (connect, query, stream, deadline)
/// - Response classification
///
/// Every failure path resolves to a normal [`AvailabilityResult::Error`]
/// value: transport errors never escape this boundary, and one failed
/// lookup never affects subsequent lookups. There is no cache, no
/// connection pool, and no retry: each call is one isolated session.
///
/// # Example
///
/// ```rust,no_run
/// use whois_check_lib::DomainChecker;
///
/// #[tokio::main]
/// async fn main() {
///     let checker = DomainChecker::new();
///     let result = checker.check_domain("example.com").await;
///     println!("Available: {:?}", result.is_available());
/// }
/// ```
pub struct DomainChecker {
    /// Configuration settings for this checker instance
    config: CheckConfig,
    /// WHOIS session client
    whois_client: WhoisClient,
}

impl DomainChecker {
    /// Create a new domain checker with default configuration.
    ///
    /// Default settings:
    /// - Session deadline: 10 seconds
    /// - WHOIS port: 43
    /// - Batch concurrency: 10
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a new domain checker with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use whois_check_lib::{CheckConfig, DomainChecker};
    /// use std::time::Duration;
    ///
    /// let config = CheckConfig::default()
    ///     .with_timeout(Duration::from_secs(5))
    ///     .with_concurrency(20);
    ///
    /// let checker = DomainChecker::with_config(config);
    /// ```
    pub fn with_config(config: CheckConfig) -> Self {
        let whois_client = WhoisClient::with_timeout(config.whois_timeout).port(config.whois_port);

        Self {
            config,
            whois_client,
        }
    }

    /// Check availability of a single domain.
    ///
    /// The checking process:
    /// 1. Validates the input (empty input fails without opening a connection)
    /// 2. Extracts the TLD (substring after the final dot, lowercased)
    /// 3. Resolves the WHOIS server through the registry directory
    /// 4. Runs one WHOIS session under a single deadline
    /// 5. Classifies the response via the availability marker table
    ///
    /// This method never returns `Err`: every failure is folded into the
    /// `{status: error, message}` result shape. The `is_available` flag on
    /// success is a best-effort heuristic, not authoritative.
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain name to check (e.g., "example.com")
    pub async fn check_domain(&self, domain: &str) -> AvailabilityResult {
        if let Err(e) = validate_domain(domain) {
            return AvailabilityResult::error(e.result_message());
        }

        let tld = registry::extract_tld(domain);
        let server = match registry::resolve_server(&tld) {
            Some(server) => server,
            None => {
                let e = WhoisCheckError::no_whois_server(&tld);
                tracing::debug!(domain = %domain, tld = %tld, "no WHOIS server configured");
                return AvailabilityResult::error(e.result_message());
            }
        };

        self.run_session(domain, server).await
    }

    /// Check a domain against an explicit WHOIS server.
    ///
    /// Bypasses the registry directory; the rest of the session contract is
    /// identical to [`check_domain`](Self::check_domain). `server` may be a
    /// bare hostname or a `host:port` pair, which also makes this the hook
    /// for pointing a check at a local test server.
    pub async fn check_domain_with_server(
        &self,
        domain: &str,
        server: &str,
    ) -> AvailabilityResult {
        if let Err(e) = validate_domain(domain) {
            return AvailabilityResult::error(e.result_message());
        }

        self.run_session(domain, server).await
    }

    /// One WHOIS session plus classification, folded into the result shape.
    async fn run_session(&self, domain: &str, server: &str) -> AvailabilityResult {
        match self.whois_client.query_server(server, domain).await {
            Ok(response) => {
                let is_available = is_available_response(&response);
                tracing::debug!(
                    domain = %domain,
                    server = %server,
                    is_available,
                    "domain check completed"
                );
                AvailabilityResult::success(domain, is_available, response)
            }
            Err(e) => {
                tracing::warn!(domain = %domain, server = %server, error = %e, "domain check failed");
                AvailabilityResult::error(e.result_message())
            }
        }
    }

    /// Check availability of multiple domains concurrently.
    ///
    /// Processes all domains in parallel bounded by the configured
    /// concurrency, then returns results in the same order as the input.
    /// Queries stay fully isolated: each owns its own socket and a failure
    /// in one never affects another.
    ///
    /// # Arguments
    ///
    /// * `domains` - Slice of domain names to check
    pub async fn check_domains(&self, domains: &[String]) -> Vec<AvailabilityResult> {
        futures::stream::iter(domains)
            .map(|domain| self.check_domain(domain))
            .buffered(self.config.concurrency)
            .collect()
            .await
    }

    /// Check domains and yield results as they complete.
    ///
    /// Unlike [`check_domains`](Self::check_domains) this yields in
    /// completion order, which is useful for interactive display over
    /// large inputs.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use futures::StreamExt;
    /// use whois_check_lib::DomainChecker;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let checker = DomainChecker::new();
    ///     let domains = vec!["example.com".to_string(), "example.org".to_string()];
    ///
    ///     let mut stream = checker.check_domains_stream(&domains);
    ///     while let Some(result) = stream.next().await {
    ///         println!("{:?}", result.is_available());
    ///     }
    /// }
    /// ```
    pub fn check_domains_stream(
        &self,
        domains: &[String],
    ) -> Pin<Box<dyn Stream<Item = AvailabilityResult> + Send + '_>> {
        let domains = domains.to_vec();
        let stream = futures::stream::iter(domains)
            .map(move |domain| async move { self.check_domain(&domain).await })
            .buffer_unordered(self.config.concurrency);

        Box::pin(stream)
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }
}

impl Default for DomainChecker {
    fn default() -> Self {
        Self::new()
    }
}
