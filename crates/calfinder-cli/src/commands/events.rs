//! Event listing command.

use std::io::Write;

use calfinder_core::{DirectoryResolver, ResourceLocator};

use crate::error::CliResult;
use crate::render::{OutputFormat, render_events};

/// Lists the references inside one calendar collection.
pub async fn run(
    resolver: &DirectoryResolver,
    user_id: &str,
    calendar_id: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    let locator = ResourceLocator::calendar(user_id, calendar_id);
    let listing = resolver.resolve(&locator).await?;
    out.write_all(render_events(&listing, format)?.as_bytes())?;
    Ok(())
}
