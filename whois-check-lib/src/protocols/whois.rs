//! WHOIS wire protocol session client.
//!
//! This module speaks plain-text WHOIS (RFC 3912) directly over TCP: one
//! query line terminated by CRLF, then an unstructured text stream that the
//! server terminates by closing the connection. There is no length prefix
//! or delimiter in this protocol; end-of-connection is the only framing
//! signal.

use crate::error::WhoisCheckError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Default TCP port of the WHOIS service (RFC 3912).
pub const DEFAULT_WHOIS_PORT: u16 = 43;

/// Default deadline for one entire session (connect + write + read).
pub const DEFAULT_WHOIS_TIMEOUT: Duration = Duration::from_secs(10);

/// Marker substrings indicating the queried domain is *not* registered.
///
/// Registries format "not found" responses differently, so classification
/// is a best-effort scan over this table. Extending coverage for another
/// registry means adding a phrase here, without touching the connection
/// state machine.
pub const AVAILABILITY_MARKERS: &[&str] = &[
    "no match for",
    "not found",
    "domain not found",
    "no data found",
    "has not been registered",
    "is available for registration",
    "status: free",
    "no entries found",
];

/// Classify a raw WHOIS response as available or registered.
///
/// The text is lowercased and scanned for any availability marker. No hit
/// means registered, including registries whose "not found" phrasing is
/// not in the table, so the flag is best-effort rather than authoritative.
pub fn is_available_response(response: &str) -> bool {
    let lower = response.to_lowercase();
    AVAILABILITY_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// WHOIS client that runs one query session over a raw TCP connection.
///
/// Each call owns exactly one socket for its entire lifetime. The socket is
/// released on every exit path: success, transport error, or deadline
/// expiry (the session future is dropped, which tears the stream down).
#[derive(Debug, Clone)]
pub struct WhoisClient {
    /// Deadline for the whole connect + write + read sequence
    timeout: Duration,
    /// Port appended to bare server hostnames
    port: u16,
}

impl WhoisClient {
    /// Create a new WHOIS client with default settings.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_WHOIS_TIMEOUT,
            port: DEFAULT_WHOIS_PORT,
        }
    }

    /// Create a new WHOIS client with a custom session deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            port: DEFAULT_WHOIS_PORT,
        }
    }

    /// Set the port appended to bare server hostnames.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// The configured session deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one WHOIS query session and return the full raw response.
    ///
    /// The session is request-then-stream: connect to the server, transmit
    /// the domain followed by CRLF exactly once, then accumulate all bytes
    /// until the remote side closes the connection. A single deadline
    /// bounds the entire sequence from the moment the connection attempt
    /// begins; on expiry the socket is torn down and any partial data is
    /// discarded.
    ///
    /// `server` may be a bare hostname (the configured port is appended)
    /// or an explicit `host:port` pair.
    ///
    /// # Arguments
    ///
    /// * `server` - WHOIS server to query
    /// * `domain` - Domain name to send as the query line
    ///
    /// # Errors
    ///
    /// Returns `WhoisCheckError` if:
    /// - The TCP connect fails (refused, unreachable, DNS failure)
    /// - The query cannot be written or the stream read fails mid-session
    /// - The deadline elapses before end-of-stream
    pub async fn query_server(
        &self,
        server: &str,
        domain: &str,
    ) -> Result<String, WhoisCheckError> {
        let addr = if server.contains(':') {
            server.to_string()
        } else {
            format!("{}:{}", server, self.port)
        };

        tracing::debug!(server = %addr, domain = %domain, "opening WHOIS session");

        let session = async {
            let mut stream = TcpStream::connect(&addr)
                .await
                .map_err(|e| WhoisCheckError::connect(&addr, e.to_string()))?;

            stream
                .write_all(format!("{}\r\n", domain).as_bytes())
                .await
                .map_err(|e| {
                    WhoisCheckError::network_with_source("failed to send query", e.to_string())
                })?;

            // The server sends the full reply and closes the connection;
            // the client never sends more than one line.
            let mut buf = Vec::new();
            stream.read_to_end(&mut buf).await.map_err(|e| {
                WhoisCheckError::network_with_source("failed to read response", e.to_string())
            })?;

            Ok::<_, WhoisCheckError>(String::from_utf8_lossy(&buf).into_owned())
        };

        // One deadline over connect + write + read. Dropping the timed-out
        // session future drops the stream, which closes the socket.
        match tokio::time::timeout(self.timeout, session).await {
            Ok(Ok(response)) => {
                tracing::debug!(
                    server = %addr,
                    bytes = response.len(),
                    "WHOIS session complete"
                );
                Ok(response)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(WhoisCheckError::timeout("WHOIS session", self.timeout)),
        }
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_markers_match() {
        assert!(is_available_response("No match for DOMAIN.COM\r\n"));
        assert!(is_available_response("NOT FOUND"));
        assert!(is_available_response(
            "This domain name has not been registered."
        ));
        assert!(is_available_response("domain status: free"));
        assert!(is_available_response(
            "The domain example.id is available for registration"
        ));
        assert!(is_available_response("%ERROR:101: no entries found"));
    }

    #[test]
    fn test_registered_response_is_not_available() {
        let taken = "Domain Name: EXAMPLE.COM\r\nRegistrar: Example Inc.\r\n";
        assert!(!is_available_response(taken));
    }

    #[test]
    fn test_empty_response_is_not_available() {
        // A server that closes without sending anything classifies as
        // registered; the heuristic never guesses from silence.
        assert!(!is_available_response(""));
    }

    #[test]
    fn test_unrecognized_phrasing_is_not_available() {
        // Documented limitation: phrasing outside the marker table reads
        // as registered, even if the registry meant "not found".
        assert!(!is_available_response("el dominio no existe"));
    }

    #[test]
    fn test_markers_are_lowercase() {
        // The response is lowercased before the scan, so markers must be
        // lowercase to ever match.
        for marker in AVAILABILITY_MARKERS {
            assert_eq!(*marker, marker.to_lowercase());
        }
    }

    #[test]
    fn test_client_creation() {
        let client = WhoisClient::new();
        assert_eq!(client.timeout(), DEFAULT_WHOIS_TIMEOUT);

        let custom = WhoisClient::with_timeout(Duration::from_secs(3)).port(4343);
        assert_eq!(custom.timeout(), Duration::from_secs(3));
        assert_eq!(custom.port, 4343);
    }
}
