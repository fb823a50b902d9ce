//! CLI, configuration and console rendering for calfinder
//!
//! This crate provides the `calfinder` command-line interface on top of
//! `calfinder-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod secret;

pub use cli::Cli;
pub use error::{CliError, CliResult};
