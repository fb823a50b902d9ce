//! Resolver configuration.

use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::{ResolveError, ResolveResult};
use crate::locator::ResourceLocator;

/// Account credentials sent with every request.
///
/// Immutable once built. The secret is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from an account identifier and secret.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either value is empty.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> ResolveResult<Self> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(ResolveError::Configuration(
                "account identifier must not be empty".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(ResolveError::Configuration(
                "secret must not be empty".to_string(),
            ));
        }
        Ok(Self { username, password })
    }

    /// Returns the account identifier.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the secret.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for the directory resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Base URL of the CalDAV service. Locator paths are joined onto it.
    pub base_url: Url,

    /// Credentials for Basic authentication.
    pub credentials: Credentials,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl ResolverConfig {
    /// Default service URL (iCloud CalDAV).
    pub const DEFAULT_BASE_URL: &'static str = "https://caldav.icloud.com/";

    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Creates a configuration for the given service URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl AsRef<str>, credentials: Credentials) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(base_url.as_ref())?;
        Ok(Self {
            base_url: parsed,
            credentials,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("calfinder/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the full URL of a collection.
    pub fn url_for(&self, locator: &ResourceLocator) -> Result<Url, url::ParseError> {
        self.base_url.join(locator.as_str())
    }

    /// Returns the base URL as a string.
    pub fn url_str(&self) -> &str {
        self.base_url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("me@icloud.com", "secret").unwrap()
    }

    #[test]
    fn credentials_reject_empty_values() {
        assert!(Credentials::new("", "secret").is_err());
        assert!(Credentials::new("  ", "secret").is_err());
        assert!(Credentials::new("me@icloud.com", "").is_err());
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let debug = format!("{:?}", creds());
        assert!(debug.contains("me@icloud.com"));
        assert!(!debug.contains("\"secret\""));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn config_defaults() {
        let config = ResolverConfig::new(ResolverConfig::DEFAULT_BASE_URL, creds()).unwrap();
        assert_eq!(config.url_str(), "https://caldav.icloud.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("calfinder/"));
    }

    #[test]
    fn config_builder_methods() {
        let config = ResolverConfig::new("https://dav.example.com/", creds())
            .unwrap()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent");

        assert_eq!(config.url_str(), "https://dav.example.com/");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn url_for_joins_locator() {
        let config = ResolverConfig::new(ResolverConfig::DEFAULT_BASE_URL, creds()).unwrap();
        let url = config
            .url_for(&ResourceLocator::calendar_home("12345"))
            .unwrap();
        assert_eq!(url.as_str(), "https://caldav.icloud.com/12345/calendars/");
    }

    #[test]
    fn url_for_replaces_base_path() {
        let config = ResolverConfig::new("https://dav.example.com/some/prefix/", creds()).unwrap();
        let url = config.url_for(&ResourceLocator::root()).unwrap();
        assert_eq!(url.as_str(), "https://dav.example.com/");
    }

    #[test]
    fn invalid_url_returns_error() {
        let result = ResolverConfig::new("not a valid url", creds());
        assert!(result.is_err());
    }
}
