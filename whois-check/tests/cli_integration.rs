// whois-check/tests/cli_integration.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Spawn a one-shot fake WHOIS server on a loopback port using std networking
/// (the CLI under test runs in its own process, so no async runtime is needed
/// here). Returns the address to pass via --server.
fn spawn_fake_whois_server(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().unwrap().to_string();

    thread::spawn(move || {
        if let Ok((mut socket, _)) = listener.accept() {
            let mut query = Vec::new();
            let mut buf = [0u8; 256];
            while let Ok(n) = socket.read(&mut buf) {
                if n == 0 {
                    break;
                }
                query.extend_from_slice(&buf[..n]);
                if query.ends_with(b"\r\n") {
                    break;
                }
            }
            let _ = socket.write_all(response.as_bytes());
            // Dropping the socket closes the connection, which is the
            // WHOIS end-of-message signal.
        }
    });

    addr
}

#[test]
fn test_help_shows_flags() {
    let mut cmd = Command::cargo_bin("whois-check").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("--list-tlds"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_list_tlds() {
    let mut cmd = Command::cargo_bin("whois-check").unwrap();
    cmd.arg("--list-tlds");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("com"))
        .stdout(predicate::str::contains("TLDs:"));
}

#[test]
fn test_no_domains_is_usage_error() {
    let mut cmd = Command::cargo_bin("whois-check").unwrap();

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("no domains given"));
}

#[test]
fn test_unknown_tld_reports_error_without_network() {
    let mut cmd = Command::cargo_bin("whois-check").unwrap();
    cmd.args(["example.notatld123", "--json"]);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(
            "no WHOIS server found for .notatld123",
        ))
        .stdout(predicate::str::contains("\"status\": \"error\""));
}

#[test]
fn test_available_domain_against_fake_server_json() {
    let addr = spawn_fake_whois_server("No match for DOMAIN.COM\r\n");

    let mut cmd = Command::cargo_bin("whois-check").unwrap();
    cmd.args(["domain.com", "--server", &addr, "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""))
        .stdout(predicate::str::contains("\"is_available\": true"))
        .stdout(predicate::str::contains("\"domain\": \"domain.com\""));
}

#[test]
fn test_registered_domain_against_fake_server() {
    let addr = spawn_fake_whois_server("Domain Name: EXAMPLE.COM\r\nRegistrar: Example Inc.\r\n");

    let mut cmd = Command::cargo_bin("whois-check").unwrap();
    cmd.args(["example.com", "--server", &addr]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("REGISTERED"))
        .stdout(predicate::str::contains("Summary:"));
}
