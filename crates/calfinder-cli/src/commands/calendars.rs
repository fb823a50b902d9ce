//! Calendar discovery command.

use std::io::Write;

use tracing::debug;

use calfinder_core::{DirectoryResolver, ResourceLocator};

use crate::error::{CliError, CliResult};
use crate::render::{OutputFormat, SnippetContext, render_calendars};

/// Lists the calendar home of `user_id` and prints the calendar IDs.
///
/// Finding no calendar ID is reported as [`CliError::NotFound`] after the
/// listing has been printed.
pub async fn run(
    resolver: &DirectoryResolver,
    user_id: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    let locator = ResourceLocator::calendar_home(user_id);
    let listing = resolver.resolve(&locator).await?;
    debug!(count = listing.identifiers().len(), "Calendar IDs found");

    let context = SnippetContext {
        user_id: user_id.to_string(),
        base_url: resolver.config().url_str().to_string(),
    };
    out.write_all(render_calendars(&listing, &context, format)?.as_bytes())?;

    if listing.identifiers().is_empty() {
        return Err(CliError::NotFound(format!(
            "no calendar IDs under {}",
            locator
        )));
    }
    Ok(())
}
