//! Notion API client: page discovery and detail retrieval.
//!
//! Two endpoints are used, both called strictly sequentially:
//!
//! - `POST /v1/search` — cursor-paginated discovery of page-type objects,
//!   100 per batch ([`NotionClient::list_all_pages`]).
//! - `GET /v1/pages/{id}` — full metadata for one page
//!   ([`NotionClient::fetch_page`]).
//!
//! Every request carries the bearer token and the pinned `Notion-Version`
//! header. Failures are tolerated rather than propagated: a bad discovery
//! response halts pagination and keeps the batches already collected, and a
//! bad detail response drops that single page from the analyzed set.

use crate::config::Config;
use crate::error::AuditError;
use crate::pacing::{FixedDelay, PacingPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pinned Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Discovery batch size. 100 is the maximum the search endpoint accepts.
const PAGE_SIZE: u32 = 100;

/// Minimal handle returned by discovery; consumed immediately by the fetch
/// step.
#[derive(Debug, Clone, Deserialize)]
pub struct PageStub {
    pub id: String,
}

/// Full metadata for one page, as returned by the detail endpoint.
///
/// Fields the heuristics never look at (icon, cover, property values beyond
/// the title) are not modeled; `properties` is kept as raw JSON only for
/// title extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageDetails {
    pub id: String,
    pub url: String,
    /// Present and non-empty when the page has an explicit public link.
    pub public_url: Option<String>,
    pub created_time: String,
    pub last_edited_time: String,
    pub created_by: CreatedBy,
    pub parent: Parent,
    pub archived: bool,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatedBy {
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Parent {
    #[serde(rename = "type")]
    pub kind: String,
}

impl PageDetails {
    /// Extracts the page title from the first `title`-typed property.
    ///
    /// Notion stores the title as an array of rich-text fragments; the
    /// fragments' `plain_text` values are concatenated. Pages without a
    /// title property (or with an empty fragment array) yield `"Untitled"`.
    pub fn title(&self) -> String {
        for value in self.properties.values() {
            if value.get("type").and_then(|t| t.as_str()) != Some("title") {
                continue;
            }
            if let Some(fragments) = value.get("title").and_then(|t| t.as_array()) {
                if !fragments.is_empty() {
                    return fragments
                        .iter()
                        .filter_map(|f| f.get("plain_text").and_then(|p| p.as_str()))
                        .collect();
                }
            }
        }
        "Untitled".to_string()
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    filter: SearchFilter<'a>,
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
}

#[derive(Serialize)]
struct SearchFilter<'a> {
    property: &'a str,
    value: &'a str,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct SearchResponse {
    results: Vec<PageStub>,
    has_more: bool,
    next_cursor: Option<String>,
}

/// Result of a full discovery pass.
///
/// `truncated` is `true` when pagination halted on a bad response before the
/// service reported the end of the result set; `stubs` then holds the
/// batches collected up to that point.
#[derive(Debug)]
pub struct Discovery {
    pub stubs: Vec<PageStub>,
    pub truncated: bool,
}

/// Client for the Notion API.
///
/// Holds the integration token injected at construction and a
/// [`PacingPolicy`] that is consulted after every call.
pub struct NotionClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
    pacing: Box<dyn PacingPolicy>,
}

impl NotionClient {
    /// Builds a client from the configuration, using fixed-delay pacing with
    /// the configured interval.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Client`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &Config) -> Result<Self, AuditError> {
        let pacing = FixedDelay::new(Duration::from_millis(config.delay_ms));
        Self::with_pacing(config, Box::new(pacing))
    }

    /// Builds a client with a custom [`PacingPolicy`].
    pub fn with_pacing(
        config: &Config,
        pacing: Box<dyn PacingPolicy>,
    ) -> Result<Self, AuditError> {
        let http = reqwest::Client::builder().build()?;
        Ok(NotionClient {
            http,
            token: config.token.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            pacing,
        })
    }

    /// Discovers every page visible to the integration.
    ///
    /// Issues paged search requests filtered to page-type objects, carrying
    /// the continuation cursor between batches and pausing between requests.
    /// A non-success response, transport error, or undecodable body halts
    /// pagination; whatever has been accumulated so far is returned with
    /// `truncated` set. Partial results are a tolerated outcome, not an
    /// error.
    pub async fn list_all_pages(&self) -> Discovery {
        let url = format!("{}/v1/search", self.base_url);
        let mut stubs: Vec<PageStub> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = SearchRequest {
                filter: SearchFilter {
                    property: "object",
                    value: "page",
                },
                page_size: PAGE_SIZE,
                start_cursor: cursor.as_deref(),
            };

            let response = match self
                .http
                .post(&url)
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Warning: page search request failed: {e}");
                    return Discovery {
                        stubs,
                        truncated: true,
                    };
                }
            };

            if !response.status().is_success() {
                eprintln!(
                    "Warning: page search returned {}; keeping {} pages discovered so far",
                    response.status(),
                    stubs.len()
                );
                return Discovery {
                    stubs,
                    truncated: true,
                };
            }

            let data: SearchResponse = match response.json().await {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Warning: failed to decode search response: {e}");
                    return Discovery {
                        stubs,
                        truncated: true,
                    };
                }
            };

            stubs.extend(data.results);

            if !data.has_more {
                return Discovery {
                    stubs,
                    truncated: false,
                };
            }
            cursor = data.next_cursor;
            self.pacing.pause().await;
        }
    }

    /// Fetches full metadata for one page.
    ///
    /// Returns `None` on any non-success response or transport error; the
    /// caller skips the page. No retry is attempted. The pacing pause runs
    /// on both outcomes so a stretch of failing fetches still respects the
    /// rate limit.
    pub async fn fetch_page(&self, id: &str) -> Option<PageDetails> {
        let url = format!("{}/v1/pages/{}", self.base_url, id);

        let details = match self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                match response.json::<PageDetails>().await {
                    Ok(d) => Some(d),
                    Err(e) => {
                        eprintln!("Warning: failed to decode page {id}: {e}");
                        None
                    }
                }
            }
            Ok(response) => {
                eprintln!("Warning: fetching page {id} returned {}", response.status());
                None
            }
            Err(e) => {
                eprintln!("Warning: fetching page {id} failed: {e}");
                None
            }
        };

        self.pacing.pause().await;
        details
    }
}
