//! Error handling for WHOIS domain checking operations.
//!
//! This module defines a comprehensive error type that covers all the different
//! ways a WHOIS lookup can fail, from network issues to invalid input.

use std::fmt;
use std::time::Duration;

/// Main error type for WHOIS domain checking operations.
///
/// This enum covers all possible failure modes in the checking process,
/// providing detailed context for debugging and user-friendly error messages.
///
/// These errors never escape the public `check_domain` API: the checker
/// catches every variant at the session boundary and folds it into the
/// uniform `{status: error, message}` result shape.
#[derive(Debug, Clone)]
pub enum WhoisCheckError {
    /// Invalid domain name input (empty or blank)
    InvalidDomain { domain: String, reason: String },

    /// No WHOIS server is configured for the domain's TLD
    NoWhoisServer { tld: String },

    /// TCP connect to the WHOIS server failed (refused, unreachable, DNS failure)
    Connect { server: String, message: String },

    /// Mid-session transport errors (write failure, remote reset)
    Network {
        message: String,
        source: Option<String>,
    },

    /// The session deadline elapsed before the server closed the stream
    Timeout {
        operation: String,
        duration: Duration,
    },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl WhoisCheckError {
    /// Create a new invalid domain error.
    pub fn invalid_domain<D: Into<String>, R: Into<String>>(domain: D, reason: R) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "no WHOIS server known" error.
    pub fn no_whois_server<T: Into<String>>(tld: T) -> Self {
        Self::NoWhoisServer { tld: tld.into() }
    }

    /// Create a new connection error.
    pub fn connect<S: Into<String>, M: Into<String>>(server: S, message: M) -> Self {
        Self::Connect {
            server: server.into(),
            message: message.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error occurred before any network I/O was attempted.
    ///
    /// Input and registry failures are reported synchronously; no socket
    /// is ever opened for them.
    pub fn is_pre_network(&self) -> bool {
        matches!(self, Self::InvalidDomain { .. } | Self::NoWhoisServer { .. })
    }

    /// Check if this error suggests the operation could be retried by the caller.
    ///
    /// The library itself never retries; each call is exactly one
    /// connection attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Connect { .. } | Self::Network { .. } | Self::Timeout { .. }
        )
    }

    /// The user-facing message carried by the `{status: error}` result shape.
    ///
    /// These strings are part of the output contract and stay stable even
    /// when the `Display` text changes.
    pub fn result_message(&self) -> String {
        match self {
            Self::InvalidDomain { .. } => "invalid domain name".to_string(),
            Self::NoWhoisServer { tld } => {
                format!("no WHOIS server found for .{}", tld)
            }
            Self::Connect { message, .. } => {
                format!("failed to connect to WHOIS server: {}", message)
            }
            Self::Network { message, source } => match source {
                Some(source) => format!("WHOIS session error: {}: {}", message, source),
                None => format!("WHOIS session error: {}", message),
            },
            Self::Timeout { .. } => "WHOIS connection timed out".to_string(),
            Self::Internal { message } => message.clone(),
        }
    }
}

impl fmt::Display for WhoisCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { domain, reason } => {
                write!(f, "Invalid domain '{}': {}", domain, reason)
            }
            Self::NoWhoisServer { tld } => {
                write!(f, "No WHOIS server known for TLD '{}'", tld)
            }
            Self::Connect { server, message } => {
                write!(f, "Failed to connect to '{}': {}", server, message)
            }
            Self::Network { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for WhoisCheckError {}

impl From<std::io::Error> for WhoisCheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Network {
            message: "I/O error".to_string(),
            source: Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_messages_match_output_contract() {
        let err = WhoisCheckError::invalid_domain("", "Domain name cannot be empty");
        assert_eq!(err.result_message(), "invalid domain name");

        let err = WhoisCheckError::no_whois_server("invalidtld");
        assert_eq!(
            err.result_message(),
            "no WHOIS server found for .invalidtld"
        );

        let err = WhoisCheckError::connect("whois.example:43", "connection refused");
        assert_eq!(
            err.result_message(),
            "failed to connect to WHOIS server: connection refused"
        );

        let err = WhoisCheckError::timeout("WHOIS session", Duration::from_secs(10));
        assert_eq!(err.result_message(), "WHOIS connection timed out");
    }

    #[test]
    fn test_pre_network_classification() {
        assert!(WhoisCheckError::invalid_domain("", "empty").is_pre_network());
        assert!(WhoisCheckError::no_whois_server("zz").is_pre_network());
        assert!(!WhoisCheckError::connect("host:43", "refused").is_pre_network());
        assert!(!WhoisCheckError::timeout("x", Duration::from_secs(1)).is_pre_network());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(WhoisCheckError::connect("host:43", "refused").is_retryable());
        assert!(WhoisCheckError::network("reset").is_retryable());
        assert!(WhoisCheckError::timeout("x", Duration::from_secs(1)).is_retryable());
        assert!(!WhoisCheckError::invalid_domain("", "empty").is_retryable());
        assert!(!WhoisCheckError::no_whois_server("zz").is_retryable());
    }
}
