//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::render::OutputFormat;

/// calfinder - Look up CalDAV account, calendar and event identifiers
#[derive(Debug, Parser)]
#[command(name = "calfinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CALFINDER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    // --- Account flags ---
    /// Account login (supports pass:: and env:: references)
    #[arg(long, short, env = "CALFINDER_USERNAME", global = true)]
    pub username: Option<String>,

    /// App-specific password (supports pass:: and env:: references)
    #[arg(long, short, env = "CALFINDER_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    // --- Connection flags ---
    /// CalDAV service URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the credentials are accepted by the server
    Auth,

    /// List the calendars of an account and print their IDs
    Calendars {
        /// Numeric account identifier (the first path segment on the server)
        #[arg(long, env = "CALFINDER_USER_ID")]
        user_id: Option<String>,
    },

    /// List the event references of a calendar
    Events {
        /// Numeric account identifier (the first path segment on the server)
        #[arg(long, env = "CALFINDER_USER_ID")]
        user_id: Option<String>,

        /// Calendar identifier as printed by `calfinder calendars` (braces optional)
        #[arg(long, env = "CALFINDER_CALENDAR_ID")]
        calendar_id: Option<String>,
    },
}
