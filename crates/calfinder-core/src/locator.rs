//! Server-relative collection paths.

use std::fmt;

/// Path of a collection on the CalDAV server.
///
/// Always absolute (starts with `/`). Interpolated identifiers are
/// percent-encoded so they stay a single path segment.
///
/// Calendar identifiers are the brace-stripped form reported by
/// [`extract_identifier`](crate::extract_identifier); [`calendar`](Self::calendar)
/// puts the braces back so the path matches the href the server listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    /// The service root, used to check credentials.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// The calendar home of an account: `/<user_id>/calendars/`.
    pub fn calendar_home(user_id: &str) -> Self {
        Self(format!("/{}/calendars/", urlencoding::encode(user_id)))
    }

    /// A single calendar collection: `/<user_id>/calendars/{<calendar_id>}/`.
    ///
    /// Accepts the identifier with or without its braces.
    pub fn calendar(user_id: &str, calendar_id: &str) -> Self {
        let bare = calendar_id.trim_start_matches('{').trim_end_matches('}');
        Self(format!(
            "/{}/calendars/{{{}}}/",
            urlencoding::encode(user_id),
            urlencoding::encode(bare)
        ))
    }

    /// Uses a caller-supplied path as-is, adding the leading `/` if missing.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.starts_with('/') {
            Self(path)
        } else {
            Self(format!("/{}", path))
        }
    }

    /// Returns the path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceLocator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
