//! XML handling for WebDAV multistatus responses.
//!
//! The only thing calfinder needs from a PROPFIND reply is the text of every
//! `DAV:href` element, wherever it sits in the tree. [`HrefReader`] streams
//! those out of the body one at a time without building a document tree.

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};

use crate::error::{ResolveError, ResolveResult as Result};

/// DAV namespace
pub const DAV_NS: &str = "DAV:";

/// Lazy iterator over the `DAV:href` values of a multistatus body.
///
/// Yields hrefs in document order. The first malformed construct yields a
/// single `Err(ResolveError::Parse)` and ends the iteration. The iterator
/// cannot be rewound; build a new one to read the body again.
pub struct HrefReader<'a> {
    reader: NsReader<&'a [u8]>,
    /// Current element nesting depth.
    depth: usize,
    /// Depth of the `href` element being read, if any.
    href_depth: Option<usize>,
    /// Text collected for the current `href`.
    current: String,
    seen_root: bool,
    finished: bool,
}

impl<'a> HrefReader<'a> {
    /// Creates a reader over an XML document.
    pub fn new(xml: &'a str) -> Self {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        Self {
            reader,
            depth: 0,
            href_depth: None,
            current: String::new(),
            seen_root: false,
            finished: false,
        }
    }

    fn fail(&mut self, message: impl Into<String>) -> Result<String> {
        self.finished = true;
        Err(ResolveError::Parse(message.into()))
    }

    fn open_element(&mut self, is_href: bool, is_empty: bool) -> Option<Result<String>> {
        if self.depth == 0 && self.seen_root {
            return Some(self.fail("junk after document element"));
        }
        self.seen_root = true;

        if is_empty {
            // <href/> carries no text
            return (is_href && self.href_depth.is_none()).then(|| Ok(String::new()));
        }

        self.depth += 1;
        if is_href && self.href_depth.is_none() {
            self.href_depth = Some(self.depth);
            self.current.clear();
        }
        None
    }

    fn close_element(&mut self) -> Option<Result<String>> {
        let closing_href = self.href_depth == Some(self.depth);
        self.depth = self.depth.saturating_sub(1);
        if closing_href {
            self.href_depth = None;
            return Some(Ok(std::mem::take(&mut self.current)));
        }
        None
    }

    fn push_text(&mut self, text: &str) -> Option<Result<String>> {
        if self.depth == 0 {
            return Some(self.fail("text outside of the document element"));
        }
        if self.href_depth.is_some() {
            self.current.push_str(text);
        }
        None
    }
}

impl Iterator for HrefReader<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (ns, event) = match self.reader.read_resolved_event() {
                Ok(resolved) => resolved,
                Err(err) => {
                    let message = format!("{} (at byte {})", err, self.reader.error_position());
                    return Some(self.fail(message));
                }
            };

            let opened = match &event {
                Event::Start(e) => Some((classify(&ns, e.local_name().as_ref()), false)),
                Event::Empty(e) => Some((classify(&ns, e.local_name().as_ref()), true)),
                _ => None,
            };

            let item = match (opened, event) {
                (Some((Element::Unbound, _)), _) => Some(self.fail("unbound namespace prefix")),
                (Some((kind, is_empty)), _) => self.open_element(kind == Element::Href, is_empty),
                (_, Event::End(_)) => self.close_element(),
                (_, Event::Text(e)) => match e.unescape() {
                    Ok(text) => self.push_text(&text),
                    Err(err) => Some(self.fail(err.to_string())),
                },
                (_, Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e).into_owned();
                    self.push_text(&text)
                }
                (_, Event::Eof) => {
                    if !self.seen_root {
                        Some(self.fail("no element found"))
                    } else if self.depth > 0 {
                        Some(self.fail("unexpected end of document"))
                    } else {
                        self.finished = true;
                        return None;
                    }
                }
                _ => None,
            };

            if item.is_some() {
                return item;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Href,
    Other,
    Unbound,
}

fn classify(ns: &ResolveResult<'_>, local: &[u8]) -> Element {
    match ns {
        ResolveResult::Bound(Namespace(uri)) if *uri == DAV_NS.as_bytes() && local == b"href" => {
            Element::Href
        }
        ResolveResult::Unknown(_) => Element::Unbound,
        _ => Element::Other,
    }
}

/// Parses a multistatus body and collects every `DAV:href` value.
///
/// # Errors
///
/// Returns [`ResolveError::Parse`] if the body is not well-formed XML.
pub fn parse_hrefs(xml: &str) -> Result<Vec<String>> {
    HrefReader::new(xml).collect()
}
