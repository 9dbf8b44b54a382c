//! Report types, risk classification, and aggregation.

use crate::client::PageDetails;
use crate::heuristics::Indicator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse risk classification derived from a page's indicator count.
///
/// `Low` is reserved in the summary schema for output compatibility but is
/// never assigned: pages with zero indicators are excluded from the report
/// entirely, so the classification rule only yields `Medium` and `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Durable unit of analysis for one page.
///
/// Created once per successfully fetched page and never mutated after it
/// enters the report.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_time: String,
    pub last_edited_time: String,
    pub created_by_id: String,
    pub parent_type: String,
    pub archived: bool,
    pub public_indicators: Vec<Indicator>,
}

impl PageRecord {
    /// Builds a record from fetched page metadata and its derived indicator
    /// set.
    pub fn from_details(details: PageDetails, indicators: Vec<Indicator>) -> Self {
        let title = details.title();
        PageRecord {
            id: details.id,
            title,
            url: details.url,
            created_time: details.created_time,
            last_edited_time: details.last_edited_time,
            created_by_id: details.created_by.id,
            parent_type: details.parent.kind,
            archived: details.archived,
            public_indicators: indicators,
        }
    }
}

/// A page that made it into the report, with its assigned risk level.
#[derive(Debug, Clone, Serialize)]
pub struct RiskEntry {
    #[serde(flatten)]
    pub page: PageRecord,
    pub risk_level: RiskLevel,
}

/// Per-level entry counts.
///
/// `low` is always `0` under the current classification rule; the field is
/// kept so consumers of the JSON report see a stable schema.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RiskSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// The final audit report handed to the exporter.
#[derive(Debug, Serialize)]
pub struct Report {
    pub scan_timestamp: String,
    /// Number of pages actually analyzed, i.e. successfully fetched. Pages
    /// lost to fetch failures are not counted here.
    pub total_scanned: usize,
    pub entries: Vec<RiskEntry>,
    pub risk_summary: RiskSummary,
    pub recommendations: Vec<String>,
}

/// Prepended when at least one high-risk page was found.
const HIGH_RISK_RECOMMENDATION: &str =
    "[TOP PRIORITY] Review the sharing settings of high-risk pages immediately.";

/// Prepended when at least one medium-risk page was found.
const MEDIUM_RISK_RECOMMENDATION: &str =
    "[MEDIUM PRIORITY] Review the access permissions of flagged pages.";

/// Standing recommendations, always appended in this order.
const BASELINE_RECOMMENDATIONS: &[&str] = &[
    "Audit page sharing settings on a regular schedule.",
    "Manage pages containing sensitive information with particular care.",
    "Educate team members about page sharing settings.",
    "Review the list of public pages regularly and unpublish any that are no longer needed.",
    "Apply appropriate access controls to important pages.",
];

/// Maps an indicator set to a risk level.
///
/// Deterministic: empty set means the page is excluded from the report
/// (`None`); exactly one indicator is `Medium`; two or more is `High`.
/// `Low` is never returned.
pub fn classify_risk(indicators: &[Indicator]) -> Option<RiskLevel> {
    match indicators.len() {
        0 => None,
        1 => Some(RiskLevel::Medium),
        _ => Some(RiskLevel::High),
    }
}

impl Report {
    /// Folds analyzed page records into a report.
    ///
    /// Records with a non-empty indicator set become [`RiskEntry`] values in
    /// input order and bump the matching summary counter; the rest only
    /// contribute to `total_scanned`.
    pub fn from_records(records: Vec<PageRecord>) -> Report {
        let total_scanned = records.len();
        let mut entries = Vec::new();
        let mut risk_summary = RiskSummary::default();

        for record in records {
            let Some(risk_level) = classify_risk(&record.public_indicators) else {
                continue;
            };
            match risk_level {
                RiskLevel::High => risk_summary.high += 1,
                RiskLevel::Medium => risk_summary.medium += 1,
                RiskLevel::Low => risk_summary.low += 1,
            }
            entries.push(RiskEntry {
                page: record,
                risk_level,
            });
        }

        let recommendations = build_recommendations(&risk_summary);

        Report {
            scan_timestamp: chrono::Utc::now().to_rfc3339(),
            total_scanned,
            entries,
            risk_summary,
            recommendations,
        }
    }
}

/// Builds the recommendation list: up to two conditional remediation
/// messages (high first, then medium) followed by the fixed baseline set.
fn build_recommendations(summary: &RiskSummary) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(BASELINE_RECOMMENDATIONS.len() + 2);

    if summary.high > 0 {
        recommendations.push(HIGH_RISK_RECOMMENDATION.to_string());
    }
    if summary.medium > 0 {
        recommendations.push(MEDIUM_RISK_RECOMMENDATION.to_string());
    }
    recommendations.extend(BASELINE_RECOMMENDATIONS.iter().map(|s| s.to_string()));

    recommendations
}
