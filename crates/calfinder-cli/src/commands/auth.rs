//! Credential check command.

use std::io::Write;

use calfinder_core::DirectoryResolver;

use crate::error::CliResult;
use crate::render::{OutputFormat, render_auth};

/// Checks the configured credentials against the service root.
pub async fn run(
    resolver: &DirectoryResolver,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    resolver.verify_credentials().await?;
    out.write_all(render_auth(format).as_bytes())?;
    Ok(())
}
