//! Console rendering of directory listings.
//!
//! Renderers only consume a [`DirectoryListing`]; they never talk to the
//! server. Text output mirrors what a person copies into automation code,
//! JSON output carries the same data for scripts.

use serde::Serialize;

use calfinder_core::{DirectoryListing, ResourceLocator};

const RULE_WIDTH: usize = 60;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Values needed to print a ready-to-paste snippet for a calendar listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetContext {
    /// Account identifier used in the request path.
    pub user_id: String,
    /// Service URL, with trailing slash.
    pub base_url: String,
}

#[derive(Serialize)]
struct CalendarsJson<'a> {
    user_id: &'a str,
    calendar_id: Option<&'a str>,
    calendar_url: Option<String>,
    #[serde(flatten)]
    listing: &'a DirectoryListing,
}

#[derive(Serialize)]
struct EventsJson<'a> {
    count: usize,
    events: &'a [String],
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Renders the result of a successful credential check.
pub fn render_auth(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => "✓ Authentication successful!\n".to_string(),
        OutputFormat::Json => {
            let value = serde_json::json!({ "authenticated": true });
            format!("{}\n", value)
        }
    }
}

/// Renders a calendar home listing.
///
/// Text output enumerates every href, shows the calendar ID under each href
/// that has one, then prints constants built from the first calendar ID.
pub fn render_calendars(
    listing: &DirectoryListing,
    context: &SnippetContext,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        let calendar_id = listing.first_identifier();
        let json = CalendarsJson {
            user_id: &context.user_id,
            calendar_id,
            calendar_url: calendar_id.map(|id| calendar_url(context, id)),
            listing,
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&json)?));
    }

    if listing.is_empty() {
        return Ok("✗ No calendars found in response\n".to_string());
    }

    let mut out = format!("✓ Found {} calendars:\n\n", listing.len());
    for entry in listing.entries() {
        out.push_str(&format!("  {}. {}\n", entry.index, entry.href));
        if let Some(id) = entry.identifier {
            out.push_str(&format!("     Calendar ID: {}\n\n", id));
        }
    }

    let Some(first) = listing.first_identifier() else {
        out.push_str("\n✗ No calendar IDs found in response\n");
        return Ok(out);
    };

    out.push('\n');
    out.push_str(&format!("{}\n", rule()));
    out.push_str("USE THESE VALUES IN YOUR AUTOMATION:\n");
    out.push_str(&format!("{}\n\n", rule()));
    out.push_str(&format!("const USER_ID = '{}';\n", context.user_id));
    out.push_str(&format!("const CALENDAR_ID = '{}'; // Main calendar\n", first));
    out.push_str(&format!(
        "const BASE_URL = `{}${{USER_ID}}/calendars/{{${{CALENDAR_ID}}}}/`;\n",
        context.base_url
    ));
    Ok(out)
}

/// Renders a calendar collection listing.
pub fn render_events(
    listing: &DirectoryListing,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        let json = EventsJson {
            count: listing.len(),
            events: listing.references(),
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&json)?));
    }

    let mut out = format!("Found {} events:\n\n", listing.len());
    for href in listing.references() {
        out.push_str(href);
        out.push('\n');
    }
    Ok(out)
}

/// Full URL of a calendar collection, braces included, as `events` requests it.
fn calendar_url(context: &SnippetContext, calendar_id: &str) -> String {
    let locator = ResourceLocator::calendar(&context.user_id, calendar_id);
    format!("{}{}", context.base_url.trim_end_matches('/'), locator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> DirectoryListing {
        DirectoryListing::from_references(vec![
            "/12345/calendars/".to_string(),
            "/12345/calendars/{AAAA-BBBB}/".to_string(),
            "/12345/calendars/inbox/".to_string(),
            "/12345/calendars/{CCCC-DDDD}/".to_string(),
        ])
    }

    fn context() -> SnippetContext {
        SnippetContext {
            user_id: "12345".to_string(),
            base_url: "https://caldav.icloud.com/".to_string(),
        }
    }

    #[test]
    fn auth_text() {
        assert_eq!(
            render_auth(OutputFormat::Text),
            "✓ Authentication successful!\n"
        );
    }

    #[test]
    fn auth_json() {
        let out = render_auth(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["authenticated"], true);
    }

    #[test]
    fn calendars_text() {
        let out = render_calendars(&listing(), &context(), OutputFormat::Text).unwrap();
        insta::assert_snapshot!(out.trim_end(), @r#"
        ✓ Found 4 calendars:

          1. /12345/calendars/
          2. /12345/calendars/{AAAA-BBBB}/
             Calendar ID: AAAA-BBBB

          3. /12345/calendars/inbox/
          4. /12345/calendars/{CCCC-DDDD}/
             Calendar ID: CCCC-DDDD


        ============================================================
        USE THESE VALUES IN YOUR AUTOMATION:
        ============================================================

        const USER_ID = '12345';
        const CALENDAR_ID = 'AAAA-BBBB'; // Main calendar
        const BASE_URL = `https://caldav.icloud.com/${USER_ID}/calendars/{${CALENDAR_ID}}/`;
        "#);
    }

    #[test]
    fn calendars_text_without_identifiers() {
        let listing = DirectoryListing::from_references(vec!["/12345/calendars/".to_string()]);
        let out = render_calendars(&listing, &context(), OutputFormat::Text).unwrap();
        assert!(out.contains("  1. /12345/calendars/"));
        assert!(out.contains("✗ No calendar IDs found in response"));
        assert!(!out.contains("CALENDAR_ID"));
    }

    #[test]
    fn calendars_text_empty() {
        let out =
            render_calendars(&DirectoryListing::default(), &context(), OutputFormat::Text).unwrap();
        assert_eq!(out, "✗ No calendars found in response\n");
    }

    #[test]
    fn calendars_json() {
        let out = render_calendars(&listing(), &context(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "user_id": "12345",
                "calendar_id": "AAAA-BBBB",
                "calendar_url": "https://caldav.icloud.com/12345/calendars/{AAAA-BBBB}/",
                "references": [
                    "/12345/calendars/",
                    "/12345/calendars/{AAAA-BBBB}/",
                    "/12345/calendars/inbox/",
                    "/12345/calendars/{CCCC-DDDD}/"
                ],
                "identifiers": ["AAAA-BBBB", "CCCC-DDDD"]
            })
        );
    }

    #[test]
    fn events_text() {
        let listing = DirectoryListing::from_references(vec![
            "/12345/calendars/work/".to_string(),
            "/12345/calendars/work/event-1.ics".to_string(),
        ]);
        let out = render_events(&listing, OutputFormat::Text).unwrap();
        insta::assert_snapshot!(out.trim_end(), @r"
        Found 2 events:

        /12345/calendars/work/
        /12345/calendars/work/event-1.ics
        ");
    }

    #[test]
    fn events_json() {
        let listing = DirectoryListing::from_references(vec!["/1/calendars/w/a.ics".to_string()]);
        let out = render_events(&listing, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["events"][0], "/1/calendars/w/a.ics");
    }
}
