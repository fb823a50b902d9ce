//! Subcommand implementations.
//!
//! Each command performs a single resolver call and writes the rendered
//! result to the given writer.

pub mod auth;
pub mod calendars;
pub mod events;
