//! Directory resolution over CalDAV.
//!
//! [`DirectoryResolver`] sends one `PROPFIND` per call:
//! - Basic authentication on every request
//! - `Depth: 1` for listings, no `Depth` for the credential check
//! - 207 Multi-Status is the only accepted answer

use reqwest::{Client, Method, StatusCode};
use tracing::{debug, info, trace, warn};

use crate::auth::basic_auth;
use crate::config::ResolverConfig;
use crate::error::{ResolveError, ResolveResult};
use crate::listing::DirectoryListing;
use crate::locator::ResourceLocator;
use crate::xml::HrefReader;

/// Resolves CalDAV collections into directory listings.
///
/// Holds no state between calls: the same resolver can be used repeatedly
/// or shared between tasks.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    /// The underlying HTTP client.
    client: Client,
    /// Configuration.
    config: ResolverConfig,
}

impl DirectoryResolver {
    /// Creates a new resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> ResolveResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ResolveError::Configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Lists the immediate children of a collection.
    ///
    /// Returns every `DAV:href` of the multistatus reply in document order,
    /// together with the identifiers extracted from them. An empty
    /// identifier list is not an error.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::AuthenticationOrLookup`] for any status other than 207
    /// - [`ResolveError::Parse`] if the 207 body is not well-formed XML
    /// - [`ResolveError::Transport`] on network failure or timeout
    pub async fn resolve(&self, locator: &ResourceLocator) -> ResolveResult<DirectoryListing> {
        debug!(locator = %locator, "Listing collection via PROPFIND");

        let body = self.propfind(locator, Some(1)).await?;

        let references = HrefReader::new(&body).collect::<ResolveResult<Vec<_>>>()?;
        let listing = DirectoryListing::from_references(references);

        info!(
            locator = %locator,
            references = listing.len(),
            identifiers = listing.identifiers().len(),
            "Resolved collection"
        );

        Ok(listing)
    }

    /// Checks the credentials against the service root.
    ///
    /// Sends a `PROPFIND` to `/` without a `Depth` header; the reply body is
    /// ignored.
    pub async fn verify_credentials(&self) -> ResolveResult<()> {
        debug!(username = %self.config.credentials.username(), "Verifying credentials");
        self.propfind(&ResourceLocator::root(), None).await?;
        info!("Authentication successful");
        Ok(())
    }

    /// Sends an authenticated PROPFIND and returns the 207 body.
    async fn propfind(&self, locator: &ResourceLocator, depth: Option<u8>) -> ResolveResult<String> {
        let url = self.config.url_for(locator).map_err(|e| {
            ResolveError::Configuration(format!("invalid locator {}: {}", locator, e))
        })?;

        let method = Method::from_bytes(b"PROPFIND")
            .map_err(|e| ResolveError::Configuration(format!("invalid HTTP method: {}", e)))?;

        let credentials = &self.config.credentials;
        let mut request = self
            .client
            .request(method, url.clone())
            .header("Authorization", basic_auth(credentials.username(), credentials.password()));

        if let Some(d) = depth {
            request = request.header("Depth", d.to_string());
        }

        trace!(url = %url, depth = ?depth, "Sending PROPFIND");

        let response = request
            .send()
            .await
            .map_err(|e| ResolveError::transport("request failed", e))?;

        let status = response.status();
        trace!(status = %status, "Received response");

        if status == StatusCode::MULTI_STATUS {
            return response
                .text()
                .await
                .map_err(|e| ResolveError::transport("failed to read response", e));
        }

        let body = response.text().await.unwrap_or_default();
        warn!(url = %url, status = %status, "Unexpected response status");
        Err(ResolveError::status(status.as_u16(), &body))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}
