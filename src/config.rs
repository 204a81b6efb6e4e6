use std::time::Duration;

pub static DEFAULT_RELAY_URL: &str = "https://formspree.io/f/xdkogqzj";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
const TIMEOUT_BOUNDS_SECS: (u64, u64) = (10, 30);

/// Where and how contact submissions are forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub redirect: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            redirect: None,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let endpoint = match lookup("CONTACT_RELAY_URL") {
            Some(url) if url.starts_with("https://") || url.starts_with("http://") => url,
            Some(url) => {
                tracing::warn!(%url, "CONTACT_RELAY_URL is not an http(s) url, using default");
                defaults.endpoint
            }
            None => defaults.endpoint,
        };

        let timeout = match lookup("CONTACT_RELAY_TIMEOUT_SECS").map(|s| s.parse::<u64>()) {
            Some(Ok(secs)) => {
                let (lo, hi) = TIMEOUT_BOUNDS_SECS;
                Duration::from_secs(secs.clamp(lo, hi))
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "CONTACT_RELAY_TIMEOUT_SECS is not a number, using default");
                defaults.timeout
            }
            None => defaults.timeout,
        };

        let redirect = lookup("CONTACT_REDIRECT_URL").filter(|s| !s.trim().is_empty());

        Self {
            endpoint,
            timeout,
            redirect,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(RelayConfig::from_lookup(|_| None), RelayConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("CONTACT_RELAY_URL", "https://forms.example.com/f/abc"),
            ("CONTACT_RELAY_TIMEOUT_SECS", "15"),
            ("CONTACT_REDIRECT_URL", "https://example.com/thanks"),
        ]));
        assert_eq!(config.endpoint, "https://forms.example.com/f/abc");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.redirect.as_deref(), Some("https://example.com/thanks"));
    }

    #[test]
    fn test_timeout_is_clamped() {
        let config =
            RelayConfig::from_lookup(lookup_from(&[("CONTACT_RELAY_TIMEOUT_SECS", "300")]));
        assert_eq!(config.timeout, Duration::from_secs(30));
        let config = RelayConfig::from_lookup(lookup_from(&[("CONTACT_RELAY_TIMEOUT_SECS", "1")]));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("CONTACT_RELAY_URL", "ftp://nope"),
            ("CONTACT_RELAY_TIMEOUT_SECS", "soon"),
            ("CONTACT_REDIRECT_URL", "  "),
        ]));
        assert_eq!(config, RelayConfig::default());
    }
}
