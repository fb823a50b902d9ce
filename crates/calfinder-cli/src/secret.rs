//! Secret reference resolver.
//!
//! Account values (`username`, `password`) in `config.toml` or on the command
//! line can use special prefixes to reference secrets stored elsewhere:
//!
//! - `pass::path/in/store` — runs `pass show path/in/store`, returns first line
//! - `env::VAR_NAME` — reads `$VAR_NAME` from the environment
//! - anything else — returned as-is (plain text)

use std::process::Command;

/// Where a configured value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretRef<'a> {
    /// `pass::path` — an entry in the `pass` password store.
    Pass(&'a str),
    /// `env::VAR` — an environment variable.
    Env(&'a str),
    /// Anything else, used verbatim.
    Plain(&'a str),
}

impl<'a> SecretRef<'a> {
    /// Classifies a raw configuration value by its prefix.
    pub fn parse(value: &'a str) -> Self {
        if let Some(path) = value.strip_prefix("pass::") {
            Self::Pass(path)
        } else if let Some(var) = value.strip_prefix("env::") {
            Self::Env(var)
        } else {
            Self::Plain(value)
        }
    }

    /// Returns true if the value is stored outside the configuration.
    pub fn is_reference(&self) -> bool {
        !matches!(self, Self::Plain(_))
    }
}

/// Resolves an account value that may reference a secret.
///
/// `field` names the account setting (`username`, `password`) and is used
/// in error messages.
pub fn resolve(field: &str, value: &str) -> Result<String, String> {
    let resolved = match SecretRef::parse(value) {
        SecretRef::Pass(entry) => from_password_store(entry),
        SecretRef::Env(var) => from_environment(var),
        SecretRef::Plain(text) => return Ok(text.to_string()),
    };
    resolved.map_err(|reason| format!("account {}: {}", field, reason))
}

/// First line of `pass show <entry>`; the rest of a pass entry holds notes.
fn from_password_store(entry: &str) -> Result<String, String> {
    if entry.is_empty() {
        return Err("`pass::` needs a password store entry".to_string());
    }

    let output = Command::new("pass")
        .args(["show", entry])
        .output()
        .map_err(|e| format!("cannot run pass for `{}`: {}", entry, e))?;

    if !output.status.success() {
        return Err(format!(
            "pass entry `{}` unavailable ({}): {}",
            entry,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim_end)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| format!("pass entry `{}` is empty", entry))
}

fn from_environment(var: &str) -> Result<String, String> {
    if var.is_empty() {
        return Err("`env::` needs a variable name".to_string());
    }
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => Err(format!("${} is empty", var)),
        Err(_) => Err(format!("${} is not set", var)),
    }
}
