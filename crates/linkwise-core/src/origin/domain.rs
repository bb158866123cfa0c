//! Base-domain normalization for same-site comparison.

use url::{Host, Url};

const WWW_PREFIX: &str = "www.";

/// Reduces a URL to the domain used for same-site comparison.
///
/// Scheme and port are dropped, the host is lowercased, a leading `www.`
/// is removed and the remainder is cut down to its last two labels, so
/// `https://drive.google.com/x` and `http://www.google.com` both yield
/// `google.com`. IP hosts are returned whole.
///
/// Returns `None` if the URL does not parse or has no host.
pub fn base_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    match parsed.host()? {
        Host::Domain(domain) => {
            let host = normalize_host(domain);
            if host.is_empty() {
                return None;
            }
            Some(last_two_labels(&host).to_string())
        }
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}

/// Site identity of a URL: the lowercased host without a leading `www.`.
///
/// Unlike [`base_domain`], other subdomains are kept, so
/// `https://gist.github.com` and `https://github.com` are different sites.
pub fn site_identity(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = normalize_host(parsed.host_str()?);
    (!host.is_empty()).then_some(host)
}

/// True iff both URLs reduce to the same [`base_domain`].
///
/// Anything unparseable compares unequal, including two unparseable inputs.
pub fn has_same_domain(a: &str, b: &str) -> bool {
    match (base_domain(a), base_domain(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    match host.strip_prefix(WWW_PREFIX) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => host,
    }
}

fn last_two_labels(host: &str) -> &str {
    // Byte index of the dot that starts the second-to-last label, if any.
    match host.rmatch_indices('.').nth(1) {
        Some((idx, _)) => &host[idx + 1..],
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdomain_matches_parent() {
        assert!(has_same_domain("http://google.com", "http://drive.google.com"));
        assert!(has_same_domain(
            "https://sports.yahoo.com",
            "https://www.yahoo.com/"
        ));
    }

    #[test]
    fn scheme_is_ignored() {
        assert!(has_same_domain("https://a.com/", "http://a.com/"));
        assert!(has_same_domain(
            "https://www.russianmachineneverbreaks.com/",
            "http://www.russianmachineneverbreaks.com/"
        ));
    }

    #[test]
    fn different_domains_do_not_match() {
        assert!(!has_same_domain("http://drive.google.com", "https://www.yahoo.com/"));
        assert!(!has_same_domain("https://github.com", "https://gitlab.com"));
    }

    #[test]
    fn unparseable_never_matches() {
        assert!(!has_same_domain("", ""));
        assert!(!has_same_domain("not a url", "not a url"));
        assert!(!has_same_domain("https://a.com", "/relative/path"));
        assert!(!has_same_domain("mailto:me@a.com", "mailto:me@a.com"));
    }

    #[test]
    fn base_domain_shapes() {
        assert_eq!(base_domain("https://a.b.c.example.org/x?y#z").as_deref(), Some("example.org"));
        assert_eq!(base_domain("http://WWW.Example.COM:8080/").as_deref(), Some("example.com"));
        assert_eq!(base_domain("http://localhost:3000/").as_deref(), Some("localhost"));
        assert_eq!(base_domain("http://127.0.0.1/").as_deref(), Some("127.0.0.1"));
        assert_eq!(base_domain("http://[::1]/").as_deref(), Some("::1"));
        assert_eq!(base_domain("javascript:void(0)"), None);
    }

    #[test]
    fn ip_hosts_compare_whole() {
        assert!(has_same_domain("http://10.0.0.1/a", "https://10.0.0.1/b"));
        assert!(!has_same_domain("http://10.0.0.1/", "http://10.0.1.1/"));
    }

    #[test]
    fn site_identity_keeps_subdomains() {
        assert_eq!(site_identity("https://www.github.com/rust-lang").as_deref(), Some("github.com"));
        assert_eq!(site_identity("https://gist.github.com/").as_deref(), Some("gist.github.com"));
        assert_eq!(site_identity("nope"), None);
    }
}
