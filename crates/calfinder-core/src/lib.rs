//! CalDAV directory discovery.
//!
//! This crate provides the one reusable piece of calfinder: a resolver that
//! lists a CalDAV collection with a depth-1 `PROPFIND` and pulls calendar
//! identifiers out of the returned hrefs.
//!
//! - [`DirectoryResolver`] - Issues the listing request and parses the reply
//! - [`ResolverConfig`] - Service URL, credentials, timeout
//! - [`ResourceLocator`] - Path of the collection to list
//! - [`DirectoryListing`] - Ordered hrefs plus the derived identifiers
//! - [`ResolveError`] - Error types for resolver operations
//!
//! # Flow
//!
//! ```text
//! ┌────────────────┐   PROPFIND, Depth: 1   ┌─────────────────┐
//! │ ResolverConfig │ ─────────────────────▶ │  CalDAV Server  │
//! └────────────────┘                        └────────┬────────┘
//!                                                    │ 207 Multi-Status
//!                                                    ▼
//!                                           ┌─────────────────┐
//!                                           │  HrefReader     │
//!                                           └────────┬────────┘
//!                                                    │ extract_identifier()
//!                                                    ▼
//!                                           ┌──────────────────┐
//!                                           │ DirectoryListing │
//!                                           └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use calfinder_core::{Credentials, DirectoryResolver, ResolverConfig, ResourceLocator};
//!
//! let credentials = Credentials::new("me@icloud.com", "app-specific-password")?;
//! let config = ResolverConfig::new(ResolverConfig::DEFAULT_BASE_URL, credentials)?;
//! let resolver = DirectoryResolver::new(config)?;
//!
//! let listing = resolver.resolve(&ResourceLocator::calendar_home("1234567890")).await?;
//! for id in listing.identifiers() {
//!     println!("{id}");
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod listing;
pub mod locator;
pub mod resolver;
pub mod xml;

pub use config::{Credentials, ResolverConfig};
pub use error::{ResolveError, ResolveResult};
pub use listing::{DirectoryListing, ListingEntry, extract_identifier};
pub use locator::ResourceLocator;
pub use resolver::DirectoryResolver;
