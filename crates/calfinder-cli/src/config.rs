//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/calfinder/config.toml` by default.
//!
//! Account values (`username`, `password`) support secret references:
//! - `pass::path/in/store` — resolved via `pass show`
//! - `env::VAR_NAME` — resolved from the environment
//! - plain text — used as-is
//!
//! Command-line flags and their environment variables take precedence over
//! the file; see [`ClientConfig::merge_cli`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use calfinder_core::{Credentials, ResolverConfig};

use crate::cli::Cli;
use crate::secret::{self, SecretRef};

/// Configuration for the calfinder client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Account settings.
    pub account: AccountSettings,

    /// Server/connection settings.
    pub server: ServerSettings,
}

/// Account settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// Account login (supports `pass::` and `env::` prefixes).
    pub username: Option<String>,

    /// App-specific password (supports `pass::` and `env::` prefixes).
    pub password: Option<String>,

    /// Numeric account identifier used in collection paths.
    pub user_id: Option<String>,

    /// Calendar identifier used by the `events` command.
    pub calendar_id: Option<String>,
}

/// Server/connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// CalDAV service URL.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: ResolverConfig::DEFAULT_BASE_URL.to_string(),
            timeout: ResolverConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calfinder")
    }

    /// Overlays values given on the command line (or via their environment
    /// variables) on top of the file values.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(ref username) = cli.username {
            self.account.username = Some(username.clone());
        }
        if let Some(ref password) = cli.password {
            self.account.password = Some(password.clone());
        }
        if let Some(ref base_url) = cli.base_url {
            self.server.base_url = base_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.server.timeout = timeout;
        }
        self
    }

    /// Resolves credentials, expanding `pass::` / `env::` references.
    pub fn resolve_credentials(&self) -> Result<Credentials, String> {
        let raw_username = self.account.username.as_deref().ok_or_else(|| {
            format!(
                "account username not set. Add to {}:\n  \
                 [account]\n  \
                 username = \"me@icloud.com\"\n  \
                 password = \"env::ICLOUD_APP_PASSWORD\"\n\n  \
                 Or pass --username / --password",
                Self::default_path().display()
            )
        })?;

        let raw_password = self.account.password.as_deref().ok_or_else(|| {
            "password is missing from [account] section (or --password)".to_string()
        })?;

        debug!(
            username_ref = SecretRef::parse(raw_username).is_reference(),
            password_ref = SecretRef::parse(raw_password).is_reference(),
            "Resolving account credentials"
        );

        let username = secret::resolve("username", raw_username)?;
        let password = secret::resolve("password", raw_password)?;

        Credentials::new(username, password).map_err(|e| e.to_string())
    }

    /// Builds the resolver configuration.
    pub fn to_resolver_config(&self) -> Result<ResolverConfig, String> {
        if self.server.timeout == 0 {
            return Err("server timeout must be greater than zero".to_string());
        }

        let credentials = self.resolve_credentials()?;
        let config = ResolverConfig::new(&self.server.base_url, credentials)
            .map_err(|e| format!("invalid base_url `{}`: {}", self.server.base_url, e))?;

        Ok(config.with_timeout(Duration::from_secs(self.server.timeout)))
    }
}

/// Picks the first value that is set: the command-line/environment value,
/// then the configuration file value.
pub fn pick<'a>(flag: Option<&'a str>, file: Option<&'a str>, name: &str) -> Result<&'a str, String> {
    flag.or(file)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            format!(
                "{} not set: pass --{} or add `{} = \"...\"` to the [account] section",
                name,
                name.replace('_', "-"),
                name
            )
        })
}
