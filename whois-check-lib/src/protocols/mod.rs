//! Protocol implementations for domain checking.
//!
//! This module contains the raw WHOIS wire protocol client and the
//! registry directory that maps TLDs to their WHOIS servers.

/// WHOIS protocol session client and response classification
pub mod whois;

/// Registry directory: TLD to WHOIS server mappings
pub mod registry;

// Re-export commonly used functions and types
pub use registry::{extract_tld, known_tlds, resolve_server};
pub use whois::{is_available_response, WhoisClient, AVAILABILITY_MARKERS};
