//! Error types for directory discovery.
//!
//! Every error is terminal for the caller: the resolver never retries.

use thiserror::Error;

/// Maximum number of characters of a rejected response body kept in an error.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// An error that occurred while resolving a directory listing.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The server answered with something other than 207 Multi-Status.
    ///
    /// Covers rejected credentials (401), missing collections (404) and any
    /// other unexpected status. `body` holds the start of the response text.
    #[error("{}", describe_status(.status, .body))]
    AuthenticationOrLookup {
        /// HTTP status code returned by the server.
        status: u16,
        /// Truncated response body, if one was readable and non-empty.
        body: Option<String>,
    },

    /// The 207 response body was not well-formed XML.
    #[error("failed to parse multistatus response: {0}")]
    Parse(String),

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {message}")]
    Transport {
        /// What failed.
        message: String,
        /// The underlying cause.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The resolver could not be set up (HTTP client, request URL).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ResolveError {
    /// Creates an error for a non-207 response, truncating the body.
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        Self::AuthenticationOrLookup {
            status,
            body: (!body.is_empty()).then(|| truncate_chars(body, MAX_ERROR_BODY_CHARS)),
        }
    }

    /// Creates a transport error from a reqwest failure.
    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            message: format!("{}: {}", message.into(), source),
            source: Some(source),
        }
    }

    /// Returns the HTTP status code, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::AuthenticationOrLookup { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401 | 403))
    }
}

/// A specialized Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

fn describe_status(status: &u16, body: &Option<String>) -> String {
    let what = match *status {
        401 => "authentication failed",
        403 => "access denied",
        404 => "collection not found",
        _ => "unexpected status",
    };
    match body {
        Some(body) => format!("{} (status {}): {}", what, status, body),
        None => format!("{} (status {})", what, status),
    }
}

/// Returns at most `max` characters of `s`, never splitting a character.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_code() {
        let err = ResolveError::status(401, "Unauthorized");
        assert_eq!(err.status_code(), Some(401));
        assert!(err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "authentication failed (status 401): Unauthorized"
        );
    }

    #[test]
    fn status_error_without_body() {
        let err = ResolveError::status(404, "   \n");
        match err {
            ResolveError::AuthenticationOrLookup { status, body } => {
                assert_eq!(status, 404);
                assert!(body.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_error_truncates_body() {
        let long = "x".repeat(500);
        let err = ResolveError::status(500, &long);
        match err {
            ResolveError::AuthenticationOrLookup { body, .. } => {
                assert_eq!(body.map(|b| b.len()), Some(MAX_ERROR_BODY_CHARS));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn parse_error_display() {
        let err = ResolveError::Parse("unexpected end of document".to_string());
        assert!(err.to_string().contains("unexpected end of document"));
        assert_eq!(err.status_code(), None);
        assert!(!err.is_unauthorized());
    }
}
