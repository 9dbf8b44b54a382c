//! Scan orchestration.
//!
//! [`run_scan`] is the main entry point: it drives the linear
//! DISCOVER → FETCH → ANALYZE → CLASSIFY → AGGREGATE pipeline over a
//! [`NotionClient`] and returns a [`ScanOutcome`]. Everything runs on a
//! single task; network calls are awaited one after another with pacing
//! handled inside the client.
//!
//! There is no retry and no resumption: a run is all-or-partial. Pages that
//! fail to fetch are dropped (and counted), and a discovery failure
//! truncates the page list rather than failing the run.

use crate::client::NotionClient;
use crate::heuristics::{self, Indicator};
use crate::report::{PageRecord, Report};
use std::time::Duration;

/// Knobs for a single scan run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// When `true`, every fetched page URL is additionally probed without
    /// credentials; a reachable page gains a third indicator. Off by
    /// default.
    pub probe: bool,
    /// Bounded timeout for each probe request.
    pub probe_timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            probe: false,
            probe_timeout: Duration::from_secs(10),
        }
    }
}

/// Result of a scan run.
///
/// The [`Report`] carries what gets exported; the remaining fields let the
/// caller distinguish a complete run from a partial one without parsing log
/// output.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: Report,
    /// Pages returned by discovery, before any fetch failures.
    pub discovered: usize,
    /// Pages dropped because their detail fetch failed.
    pub fetch_failures: usize,
    /// `true` when discovery halted early on a bad response.
    pub discovery_truncated: bool,
}

/// Runs a complete audit scan.
///
/// # Pipeline
///
/// 1. Discover all visible pages via paginated search.
/// 2. Fetch full metadata for each page in order; fetch failures skip the
///    page.
/// 3. Derive public-exposure indicators per page, optionally augmented by
///    the unauthenticated reachability probe.
/// 4. Aggregate classified records into the final [`Report`].
///
/// `total_scanned` in the report counts pages that were actually analyzed
/// (successfully fetched), not pages discovered.
pub async fn run_scan(client: &NotionClient, options: &ScanOptions) -> ScanOutcome {
    let discovery = client.list_all_pages().await;
    let discovered = discovery.stubs.len();
    eprintln!("Discovered {discovered} pages");

    // The probe must not reuse the API client: it has to look like an
    // anonymous visitor, with no bearer credential attached.
    let probe_http = if options.probe {
        Some(reqwest::Client::new())
    } else {
        None
    };

    let mut records: Vec<PageRecord> = Vec::with_capacity(discovered);
    let mut fetch_failures = 0usize;

    for (index, stub) in discovery.stubs.iter().enumerate() {
        eprint!("\rAnalyzing pages... ({}/{})", index + 1, discovered);

        let Some(details) = client.fetch_page(&stub.id).await else {
            fetch_failures += 1;
            continue;
        };

        let mut indicators = heuristics::derive_indicators(&details);
        if let Some(http) = &probe_http {
            if !details.url.is_empty()
                && heuristics::probe_public_access(http, &details.url, options.probe_timeout)
                    .await
            {
                indicators.push(Indicator::ReachableWithoutAuth);
            }
        }

        records.push(PageRecord::from_details(details, indicators));
    }
    if discovered > 0 {
        eprintln!();
    }

    let report = Report::from_records(records);

    ScanOutcome {
        report,
        discovered,
        fetch_failures,
        discovery_truncated: discovery.truncated,
    }
}
