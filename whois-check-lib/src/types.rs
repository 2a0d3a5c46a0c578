//! Core data types for WHOIS domain availability checking.
//!
//! This module defines all the main data structures used throughout the library,
//! including the availability result shape and configuration options.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a single domain availability check.
///
/// This is the wire shape handed to callers: the serialized JSON carries a
/// `status` discriminant and the same field names on both arms, so an HTTP
/// layer can pass it through verbatim.
///
/// ```json
/// {"status":"success","domain":"example.com","is_available":false,"whois_response":"..."}
/// {"status":"error","message":"no WHOIS server found for .zz"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AvailabilityResult {
    /// The WHOIS session completed and the response was classified.
    Success {
        /// The domain name that was checked, as supplied by the caller
        domain: String,

        /// Whether the registry response matched a "not registered" marker.
        /// Best-effort: registries with unrecognized "not found" phrasing
        /// classify as registered.
        is_available: bool,

        /// The full raw text received from the registry server
        whois_response: String,
    },

    /// The check failed before or during the WHOIS session.
    Error {
        /// Human-readable failure description
        message: String,
    },
}

impl AvailabilityResult {
    /// Create a success result.
    pub fn success<D: Into<String>, R: Into<String>>(
        domain: D,
        is_available: bool,
        whois_response: R,
    ) -> Self {
        Self::Success {
            domain: domain.into(),
            is_available,
            whois_response: whois_response.into(),
        }
    }

    /// Create an error result.
    pub fn error<M: Into<String>>(message: M) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Whether this result represents a completed check.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The availability flag, if the check completed.
    pub fn is_available(&self) -> Option<bool> {
        match self {
            Self::Success { is_available, .. } => Some(*is_available),
            Self::Error { .. } => None,
        }
    }

    /// The error message, if the check failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            Self::Success { .. } => None,
        }
    }
}

/// Configuration options for domain checking operations.
///
/// This struct allows fine-tuning of the checking behavior. The registry
/// table itself is compiled-in static data and is deliberately not
/// configurable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Deadline for one entire WHOIS session (connect + write + read)
    /// Default: 10 seconds
    #[serde(skip)] // Don't serialize Duration directly
    pub whois_timeout: Duration,

    /// TCP port of the WHOIS service
    /// Default: 43 (overridable mainly for tests against local fakes)
    pub whois_port: u16,

    /// Maximum number of concurrent checks in batch operations
    /// Default: 10, Range: 1-100
    pub concurrency: usize,
}

impl Default for CheckConfig {
    /// Create a sensible default configuration.
    ///
    /// The 10-second deadline matches what most public WHOIS servers need
    /// to stream a full response; port 43 is the RFC 3912 service port.
    fn default() -> Self {
        Self {
            whois_timeout: Duration::from_secs(10),
            whois_port: 43,
            concurrency: 10,
        }
    }
}

impl CheckConfig {
    /// Set a custom session deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.whois_timeout = timeout;
        self
    }

    /// Set a custom WHOIS port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.whois_port = port;
        self
    }

    /// Set a custom concurrency bound for batch checks.
    ///
    /// Automatically caps concurrency at 100 to prevent resource exhaustion.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, 100);
        self
    }
}
