//! Utility functions for domain input handling.
//!
//! This module contains helper functions for domain name validation
//! used throughout the library.

use crate::error::WhoisCheckError;

/// Validate a domain name before any I/O is attempted.
///
/// Only empty or blank input is rejected here. Anything else is passed
/// through to TLD extraction: a malformed domain simply fails the registry
/// lookup (or the remote query) with a descriptive error instead.
///
/// # Arguments
///
/// * `domain` - The domain name to validate
///
/// # Returns
///
/// `Ok(())` if acceptable, `Err(WhoisCheckError::InvalidDomain)` otherwise.
pub fn validate_domain(domain: &str) -> Result<(), WhoisCheckError> {
    if domain.trim().is_empty() {
        return Err(WhoisCheckError::invalid_domain(
            domain,
            "Domain name cannot be empty",
        ));
    }

    Ok(())
}
