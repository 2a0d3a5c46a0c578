//! # WHOIS Check Library
//!
//! A library for checking domain availability over the raw WHOIS wire
//! protocol (RFC 3912).
//!
//! Given a domain name, the checker resolves the TLD through a compiled-in
//! registry directory, opens one TCP connection to port 43 on the resolved
//! server, transmits the query line, accumulates the streamed response
//! until the server closes the connection (bounded by a single deadline),
//! and classifies the text as available or registered.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use whois_check_lib::DomainChecker;
//!
//! #[tokio::main]
//! async fn main() {
//!     let checker = DomainChecker::new();
//!     let result = checker.check_domain("example.com").await;
//!
//!     println!("Available: {:?}", result.is_available());
//! }
//! ```
//!
//! ## Features
//!
//! - **Raw WHOIS protocol**: direct TCP sessions, no system `whois` binary
//! - **Static registry directory**: frozen TLD-to-server table, pure lookups
//! - **Uniform results**: failures fold into `{status: error, message}`,
//!   never a panic or an escaping transport error
//! - **Concurrent batches**: bounded parallel checking with isolated sessions
//!
//! ## Limitations
//!
//! Classification is a marker-substring heuristic. Registries whose
//! "not found" phrasing is outside the marker table classify as registered,
//! so `is_available` is best-effort, not authoritative.

// Re-export main public API types and functions
// This makes them available as whois_check_lib::TypeName
pub use checker::DomainChecker;
pub use error::WhoisCheckError;
pub use protocols::registry::{extract_tld, known_tlds, resolve_server};
pub use protocols::whois::{is_available_response, WhoisClient, AVAILABILITY_MARKERS};
pub use types::{AvailabilityResult, CheckConfig};
pub use utils::validate_domain;

// Internal modules - these are not part of the public API
mod checker;
mod error;
mod protocols;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, WhoisCheckError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
