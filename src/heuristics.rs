//! Public-exposure heuristics.
//!
//! The Notion API does not expose a direct "is this page shared publicly"
//! flag, so exposure is inferred from weak, independent signals. Each signal
//! that fires contributes one [`Indicator`]; the union is the page's
//! indicator set, which [`crate::report::classify_risk`] later maps to a
//! risk level.
//!
//! None of the signals is authoritative. A page can carry both metadata
//! indicators and still be private, and a genuinely public page can carry
//! none.

use crate::client::PageDetails;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Substrings whose presence in a canonical URL marks it as
/// private/workspace-scoped.
const PRIVATE_URL_MARKERS: &[&str] = &["private", "workspace"];

/// Markers in a fetched page body that indicate an authentication wall.
const SIGN_IN_MARKERS: &[&str] = &["sign in", "login"];

/// One heuristic signal suggesting a page may be publicly reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indicator {
    /// The dedicated `public_url` field is present and non-empty.
    #[serde(rename = "explicit public URL present")]
    ExplicitPublicUrl,
    /// The canonical URL contains none of the substrings conventionally
    /// associated with private, workspace-scoped links.
    #[serde(rename = "URL pattern suggests public exposure")]
    UrlPatternPublic,
    /// The page answered an unauthenticated request without an
    /// authentication wall. Only produced by the opt-in probe.
    #[serde(rename = "page reachable without authentication")]
    ReachableWithoutAuth,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::ExplicitPublicUrl => write!(f, "explicit public URL present"),
            Indicator::UrlPatternPublic => write!(f, "URL pattern suggests public exposure"),
            Indicator::ReachableWithoutAuth => {
                write!(f, "page reachable without authentication")
            }
        }
    }
}

/// Derives the metadata-based indicator set for a page.
///
/// Both signals are checked independently and may fire together:
///
/// 1. **Explicit-URL signal** — `public_url` present and non-empty.
/// 2. **URL-pattern signal** — the canonical URL is non-empty and contains
///    no private/workspace marker substring.
///
/// The reachability probe is not part of this set; it is a separately
/// invokable extension (see [`probe_public_access`]).
pub fn derive_indicators(page: &PageDetails) -> Vec<Indicator> {
    let mut indicators = Vec::new();

    if page.public_url.as_deref().is_some_and(|u| !u.is_empty()) {
        indicators.push(Indicator::ExplicitPublicUrl);
    }

    if !page.url.is_empty() && !PRIVATE_URL_MARKERS.iter().any(|m| page.url.contains(m)) {
        indicators.push(Indicator::UrlPatternPublic);
    }

    indicators
}

/// Probes whether a page URL is reachable without credentials.
///
/// Fetches the URL with no authentication and reports `true` only for a 200
/// response whose body carries no sign-in marker. Every failure mode,
/// including the timeout, is treated as "not publicly reachable" and never
/// propagated.
///
/// `http` must be a client without default auth headers; the scan loop
/// builds a plain one, separate from the API client.
pub async fn probe_public_access(http: &reqwest::Client, url: &str, timeout: Duration) -> bool {
    let response = match http.get(url).timeout(timeout).send().await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Warning: public access probe for {url} failed: {e}");
            return false;
        }
    };

    if response.status() != reqwest::StatusCode::OK {
        return false;
    }

    match response.text().await {
        Ok(body) => {
            let body = body.to_lowercase();
            !SIGN_IN_MARKERS.iter().any(|m| body.contains(m))
        }
        Err(e) => {
            eprintln!("Warning: public access probe for {url} failed: {e}");
            false
        }
    }
}
