//! Registry directory: TLD to WHOIS server mappings.
//!
//! This module provides the frozen mapping from top-level domain labels to
//! the authoritative WHOIS server for that registry, plus TLD extraction.

use std::collections::HashMap;

// Process-wide frozen table. Built once on first access, never mutated;
// safe for unlimited concurrent readers.
lazy_static::lazy_static! {
    static ref WHOIS_SERVERS: HashMap<&'static str, &'static str> = HashMap::from([
        // Generic TLDs (gTLD)
        ("com", "whois.verisign-grs.com"),
        ("net", "whois.verisign-grs.com"),
        ("org", "whois.pir.org"),
        ("info", "whois.afilias.net"),
        ("biz", "whois.biz"),
        ("mobi", "whois.dotmobi.mobi"),
        ("pro", "whois.afilias.net"),
        ("name", "whois.nic.name"),
        ("aero", "whois.aero"),
        ("asia", "whois.nic.asia"),
        ("cat", "whois.nic.cat"),
        ("coop", "whois.nic.coop"),
        ("jobs", "whois.nic.jobs"),
        ("museum", "whois.nic.museum"),
        ("tel", "whois.nic.tel"),
        ("travel", "whois.nic.travel"),
        ("xxx", "whois.nic.xxx"),

        // New generic TLDs
        ("xyz", "whois.nic.xyz"),
        ("app", "whois.nic.google"),
        ("dev", "whois.nic.google"),
        ("club", "whois.nic.club"),
        ("online", "whois.nic.online"),
        ("site", "whois.nic.site"),
        ("tech", "whois.nic.tech"),
        ("store", "whois.nic.store"),
        ("shop", "whois.nic.shop"),
        ("cloud", "whois.nic.cloud"),
        ("blog", "whois.nic.blog"),

        // Country-code TLDs (ccTLD)
        ("id", "whois.id"),           // Indonesia
        ("ac", "whois.nic.ac"),
        ("ag", "whois.nic.ag"),
        ("au", "whois.auda.org.au"),  // Australia
        ("be", "whois.dns.be"),
        ("br", "whois.registro.br"),  // Brazil
        ("ca", "whois.cira.ca"),      // Canada
        ("cc", "whois.nic.cc"),
        ("cn", "whois.cnnic.cn"),     // China
        ("co", "whois.nic.co"),
        ("de", "whois.denic.de"),     // Germany
        ("eu", "whois.eu"),
        ("fr", "whois.nic.fr"),       // France
        ("gg", "whois.gg"),
        ("hk", "whois.hkirc.hk"),     // Hong Kong
        ("ie", "whois.weare.ie"),
        ("in", "whois.registry.in"),  // India
        ("io", "whois.nic.io"),
        ("it", "whois.nic.it"),
        ("jp", "whois.jprs.jp"),      // Japan
        ("kr", "whois.kr"),           // South Korea
        ("me", "whois.nic.me"),
        ("my", "whois.mynic.my"),     // Malaysia
        ("nu", "whois.iis.nu"),
        ("nz", "whois.anyname.nz"),
        ("pl", "whois.dns.pl"),
        ("ru", "whois.tcinet.ru"),    // Russia
        ("sg", "whois.sgnic.sg"),     // Singapore
        ("sh", "whois.nic.sh"),
        ("th", "whois.thnic.co.th"),  // Thailand
        ("tk", "whois.dot.tk"),
        ("tv", "whois.nic.tv"),
        ("tw", "whois.twnic.net.tw"), // Taiwan
        ("uk", "whois.nic.uk"),       // United Kingdom
        ("us", "whois.nic.us"),       // United States
        ("vc", "whois.nic.vc"),
        ("ws", "whois.website.ws"),
    ]);
}

/// Look up the WHOIS server for a TLD.
///
/// Input is a bare TLD label without a leading dot; the lookup is
/// case-insensitive. Returns `None` for TLDs absent from the table; the
/// caller surfaces that as a typed failure, not an error of the directory
/// itself.
///
/// The table is data, not logic: adding a TLD is a table edit, never a
/// code change.
///
/// # Arguments
///
/// * `tld` - The top-level domain to look up (e.g., "com", "org")
///
/// # Returns
///
/// The WHOIS server hostname if configured.
pub fn resolve_server(tld: &str) -> Option<&'static str> {
    WHOIS_SERVERS.get(tld.to_lowercase().as_str()).copied()
}

/// Extract the TLD from a domain name.
///
/// The TLD is the substring after the final dot, lowercased. A dotless
/// input yields the whole (lowercased) string, which will then miss the
/// registry and surface as "no WHOIS server found" rather than crashing.
///
/// Multi-level registrations like "example.co.uk" resolve to "uk"; the
/// table keys are single labels only.
///
/// # Arguments
///
/// * `domain` - The domain name to extract the TLD from
///
/// # Returns
///
/// The lowercased TLD label.
pub fn extract_tld(domain: &str) -> String {
    domain
        .rsplit('.')
        .next()
        .unwrap_or(domain)
        .trim()
        .to_lowercase()
}

/// Get all TLDs present in the registry table, sorted alphabetically.
///
/// Useful for CLI help text and discoverability.
pub fn known_tlds() -> Vec<String> {
    let mut tlds: Vec<String> = WHOIS_SERVERS.keys().map(|k| k.to_string()).collect();
    tlds.sort(); // Consistent ordering for user experience
    tlds
}
