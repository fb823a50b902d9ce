//! Directory listings and resource identifier extraction.

use serde::Serialize;

/// Extracts a resource identifier from an href.
///
/// Best-effort heuristic: when the href contains both `{` and `}`, the
/// second-to-last `/`-separated segment is taken as the identifier, with a
/// surrounding pair of braces removed. `/12345/calendars/{AAAA-BBBB}/` gives
/// `AAAA-BBBB`. Returns `None` when the pattern does not apply or the
/// segment is empty.
pub fn extract_identifier(href: &str) -> Option<&str> {
    if !(href.contains('{') && href.contains('}')) {
        return None;
    }

    let mut segments = href.rsplit('/');
    segments.next()?;
    let segment = segments.next()?;

    let id = segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(segment);

    (!id.is_empty()).then_some(id)
}

/// The children of a collection, as returned by a depth-1 listing.
///
/// `references` keeps every href in server order; `identifiers` is the
/// subsequence of identifiers extracted from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    references: Vec<String>,
    identifiers: Vec<String>,
}

/// One href of a listing, with its position and extracted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingEntry<'a> {
    /// 1-based position in the listing.
    pub index: usize,
    /// The href as returned by the server.
    pub href: &'a str,
    /// The identifier extracted from the href, if any.
    pub identifier: Option<&'a str>,
}

impl DirectoryListing {
    /// Builds a listing from hrefs in server order.
    pub fn from_references(references: Vec<String>) -> Self {
        let identifiers = references
            .iter()
            .filter_map(|href| extract_identifier(href))
            .map(str::to_string)
            .collect();

        Self {
            references,
            identifiers,
        }
    }

    /// Returns every href in server order.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Returns the extracted identifiers in server order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Returns the first extracted identifier.
    pub fn first_identifier(&self) -> Option<&str> {
        self.identifiers.first().map(String::as_str)
    }

    /// Iterates over the hrefs together with their identifiers.
    pub fn entries(&self) -> impl Iterator<Item = ListingEntry<'_>> {
        self.references
            .iter()
            .enumerate()
            .map(|(i, href)| ListingEntry {
                index: i + 1,
                href,
                identifier: extract_identifier(href),
            })
    }

    /// Returns the number of hrefs.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Returns true if the server returned no hrefs.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

impl FromIterator<String> for DirectoryListing {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_references(iter.into_iter().collect())
    }
}
