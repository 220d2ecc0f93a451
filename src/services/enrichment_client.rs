//! Metadata Enrichment Client for LinkVault.
//!
//! Queries a Microlink-style metadata lookup service for a URL and maps
//! the response (or any failure) into partial bookmark fields. Lookup
//! failures are non-fatal: they yield a best-effort result marked
//! `degraded`, filled from the caller's draft values, the URL host, and
//! the favicon-by-domain convention. Only an unparseable URL is fatal.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::types::bookmark::{normalize_url, resolve_title, BookmarkDraft};
use crate::types::enrichment::EnrichedMetadata;
use crate::types::errors::EnrichError;

const DEFAULT_BASE_URL: &str = "https://api.microlink.io";
const USER_AGENT: &str = concat!("LinkVault/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Deterministic favicon URL for a host; requires no authentication.
pub fn favicon_for(host: &str) -> String {
    format!("https://www.google.com/s2/favicons?domain={}&sz=64", host)
}

/// Lookup service response envelope: a status discriminator plus a nested
/// data object on success.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Option<LookupData>,
}

#[derive(Debug, Default, Deserialize)]
struct LookupData {
    title: Option<String>,
    description: Option<String>,
    image: Option<LookupAsset>,
    logo: Option<LookupAsset>,
}

#[derive(Debug, Deserialize)]
struct LookupAsset {
    url: Option<String>,
}

/// Metadata lookup client backed by reqwest.
pub struct EnrichmentClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl EnrichmentClient {
    /// Creates a new client with the crate user-agent and request timeout.
    pub fn new() -> Result<Self, EnrichError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| EnrichError::ClientError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the lookup service endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Derives title/description/image/favicon for a URL.
    ///
    /// The raw URL is normalized first; draft values from the caller serve
    /// as fallbacks for any field the response lacks, with title falling
    /// back further to the URL host. An unparseable URL is the only error.
    pub async fn enrich(
        &self,
        raw_url: &str,
        draft: &BookmarkDraft,
    ) -> Result<EnrichedMetadata, EnrichError> {
        let url = normalize_url(raw_url);
        let host = Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .ok_or_else(|| EnrichError::InvalidUrl(raw_url.to_string()))?;

        tracing::debug!(url = %url, "Querying metadata lookup service");

        let response = match self
            .http_client
            .get(&self.base_url)
            .query(&[("url", url.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Metadata lookup request failed");
                return Ok(degraded_result(url, &host, draft));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Metadata lookup returned error status");
            return Ok(degraded_result(url, &host, draft));
        }

        let body: LookupResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Metadata lookup payload malformed");
                return Ok(degraded_result(url, &host, draft));
            }
        };

        if body.status.as_deref() != Some("success") {
            tracing::warn!(url = %url, status = ?body.status, "Metadata lookup reported failure");
            return Ok(degraded_result(url, &host, draft));
        }

        let data = body.data.unwrap_or_default();
        let title = data
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| resolve_title(&draft.title, &url));
        let description = data
            .description
            .filter(|d| !d.trim().is_empty())
            .or_else(|| draft.description.clone());
        let image = data
            .image
            .and_then(|asset| asset.url)
            .or_else(|| draft.image.clone());
        let favicon = data
            .logo
            .and_then(|asset| asset.url)
            .or_else(|| draft.favicon.clone())
            .or_else(|| Some(favicon_for(&host)));

        Ok(EnrichedMetadata {
            url,
            title,
            description,
            image,
            favicon,
            degraded: false,
        })
    }
}

/// Best-effort result when the lookup fails or reports failure: the
/// normalized URL, the title fallback chain, draft description/image, and
/// the favicon-by-domain convention.
fn degraded_result(url: String, host: &str, draft: &BookmarkDraft) -> EnrichedMetadata {
    EnrichedMetadata {
        title: resolve_title(&draft.title, &url),
        description: draft.description.clone(),
        image: draft.image.clone(),
        favicon: Some(favicon_for(host)),
        url,
        degraded: true,
    }
}
