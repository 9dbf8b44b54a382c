//! # notion-exposure-audit
//!
//! Security auditing for Notion workspaces.
//!
//! `notion-exposure-audit` walks every page an integration token can see and
//! flags pages that may be unintentionally exposed to the public. The Notion
//! API exposes no authoritative sharing flag, so the audit combines weak,
//! non-authoritative signals (an explicit `public_url` field, URL shape, and
//! an optional unauthenticated reachability probe) into a risk-ranked report
//! that can be exported as JSON and/or CSV.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use notion_exposure_audit::client::NotionClient;
//! use notion_exposure_audit::config::Config;
//! use notion_exposure_audit::scan::{self, ScanOptions};
//!
//! # async fn run() -> Result<(), notion_exposure_audit::error::AuditError> {
//! let config = Config::load(None)?;
//! config.validate_token()?;
//!
//! let client = NotionClient::new(&config)?;
//! let outcome = scan::run_scan(&client, &ScanOptions::default()).await;
//!
//! println!(
//!     "{} of {} pages flagged",
//!     outcome.report.entries.len(),
//!     outcome.report.total_scanned
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a strictly linear pipeline:
//!
//! 1. **[`config`]** — load and validate the TOML configuration (token,
//!    API base, pacing).
//! 2. **[`client`]** — paginated page discovery and per-page detail fetch
//!    against the Notion API, paced by a [`pacing::PacingPolicy`].
//! 3. **[`heuristics`]** — derive public-exposure indicators from page
//!    metadata, plus the opt-in unauthenticated reachability probe.
//! 4. **[`report`]** — classify indicator sets into risk levels and fold
//!    records into a final [`report::Report`].
//! 5. **[`scan`]** — orchestrate the pipeline end to end.
//! 6. **[`output`]** — serialize the report as JSON, CSV, or a colored
//!    terminal summary.
//!
//! Discovery and fetch failures are tolerated mid-run: pagination halts on
//! the first bad response and keeps what it has, and unfetchable pages are
//! dropped from the analyzed set. Only configuration, client-construction,
//! and export failures surface as [`error::AuditError`].

pub mod client;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod output;
pub mod pacing;
pub mod report;
pub mod scan;
