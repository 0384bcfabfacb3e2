use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// A hostname split at the public-registration boundary. Components are
/// empty strings where the input could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostParts {
    pub subdomain: String,
    pub domain: String,
    pub suffix: String,
}

impl HostParts {
    /// Non-empty components joined with `.`.
    pub fn host(&self) -> String {
        [
            self.subdomain.as_str(),
            self.domain.as_str(),
            self.suffix.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(".")
    }
}

/// Registrable-domain knowledge consumed by the URL engine. Implementations
/// must degrade to empty components on unparsable input, never error.
pub trait SuffixSplitter: Send + Sync {
    fn split(&self, url: &str) -> HostParts;
}

/// Whether a host is a four-part dotted-decimal literal. Deliberately looser
/// than IPv4 validation (999.1.1.1 still counts as an IP-shaped host).
pub fn is_dotted_decimal(host: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\d{1,3}(?:\.\d{1,3}){3}$").unwrap())
        .is_match(host)
}

/// Default splitter backed by the compiled public suffix list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslSplitter;

impl PslSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Pull the host out of a URL-ish string; scheme-less input is retried
    /// with an `http://` prefix so bare hostnames still parse.
    fn extract_host(&self, url: &str) -> Option<String> {
        let parse = |candidate: &str| {
            Url::parse(candidate)
                .ok()
                .and_then(|parsed| parsed.host_str().map(|h| h.to_lowercase()))
        };
        parse(url).or_else(|| parse(&format!("http://{}", url)))
    }
}

impl SuffixSplitter for PslSplitter {
    fn split(&self, url: &str) -> HostParts {
        let host = match self.extract_host(url.trim()) {
            Some(host) if !host.is_empty() => host,
            _ => return HostParts::default(),
        };

        // IP-shaped hosts have no registrable boundary to split at.
        if is_dotted_decimal(&host) {
            return HostParts {
                domain: host,
                ..HostParts::default()
            };
        }

        let suffix = psl::suffix_str(&host).unwrap_or("").to_string();
        match psl::domain_str(&host) {
            Some(registrable) => {
                let domain = registrable
                    .strip_suffix(suffix.as_str())
                    .map(|d| d.trim_end_matches('.'))
                    .unwrap_or(registrable)
                    .to_string();
                let subdomain = host
                    .strip_suffix(registrable)
                    .map(|s| s.trim_end_matches('.'))
                    .unwrap_or("")
                    .to_string();
                HostParts {
                    subdomain,
                    domain,
                    suffix,
                }
            }
            // Host is nothing but a suffix (or unknown single label).
            None => HostParts {
                subdomain: String::new(),
                domain: String::new(),
                suffix,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_domain() {
        let parts = PslSplitter::new().split("https://example.com");
        assert_eq!(parts.subdomain, "");
        assert_eq!(parts.domain, "example");
        assert_eq!(parts.suffix, "com");
        assert_eq!(parts.host(), "example.com");
    }

    #[test]
    fn test_split_subdomains() {
        let parts = PslSplitter::new().split("http://login.mail.example.co.uk/path");
        assert_eq!(parts.subdomain, "login.mail");
        assert_eq!(parts.domain, "example");
        assert_eq!(parts.suffix, "co.uk");
        assert_eq!(parts.host(), "login.mail.example.co.uk");
    }

    #[test]
    fn test_split_without_scheme() {
        let parts = PslSplitter::new().split("bank.example-login.com/verify");
        assert_eq!(parts.subdomain, "bank");
        assert_eq!(parts.domain, "example-login");
        assert_eq!(parts.suffix, "com");
    }

    #[test]
    fn test_split_ip_host() {
        let parts = PslSplitter::new().split("http://192.168.1.1/login");
        assert_eq!(parts.domain, "192.168.1.1");
        assert_eq!(parts.subdomain, "");
        assert_eq!(parts.suffix, "");
        assert_eq!(parts.host(), "192.168.1.1");
    }

    #[test]
    fn test_split_unparsable_input() {
        let parts = PslSplitter::new().split("");
        assert_eq!(parts, HostParts::default());
        assert_eq!(parts.host(), "");

        let parts = PslSplitter::new().split("not a url at all");
        assert_eq!(parts.host(), "");
    }

    #[test]
    fn test_split_strips_userinfo_and_port() {
        let parts = PslSplitter::new().split("http://user@evil.com:8080/login");
        assert_eq!(parts.host(), "evil.com");
    }

    #[test]
    fn test_dotted_decimal_shapes() {
        assert!(is_dotted_decimal("192.168.1.1"));
        assert!(is_dotted_decimal("999.999.999.999"));
        assert!(!is_dotted_decimal("192.168.1"));
        assert!(!is_dotted_decimal("example.com"));
    }
}
