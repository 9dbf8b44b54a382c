//! Human-readable colored text formatter.
//!
//! Produces the terminal summary printed after a scan: totals, risk
//! distribution, the most urgent flagged pages, recommendations, and an
//! urgent warning block when high-risk pages were found.

use crate::report::RiskLevel;
use crate::scan::ScanOutcome;
use colored::Colorize;

/// Flagged pages shown in the summary; the full list lives in the exports.
const TOP_ENTRIES: usize = 5;

/// Formats a [`ScanOutcome`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — title and scan timestamp.
/// 2. **Totals** — pages scanned/flagged, plus partial-run warnings.
/// 3. **Risk distribution** — per-level counts.
/// 4. **Flagged pages** — up to [`TOP_ENTRIES`] entries with URL and
///    indicators.
/// 5. **Recommendations** — numbered list.
/// 6. **Urgent warning** — only when high-risk pages exist.
pub fn format(outcome: &ScanOutcome) -> String {
    let report = &outcome.report;
    let separator = "─".repeat(60);
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        "  Notion Exposure Audit  ".bold().on_blue().white()
    ));
    out.push_str(&format!("  Timestamp: {}\n", report.scan_timestamp));
    out.push_str(&format!("{}\n", separator.dimmed()));

    out.push_str(&format!("  Pages scanned: {}\n", report.total_scanned));
    out.push_str(&format!("  Pages flagged: {}\n", report.entries.len()));
    if outcome.fetch_failures > 0 {
        out.push_str(&format!(
            "  {}\n",
            format!(
                "{} of {} discovered pages could not be fetched and were skipped",
                outcome.fetch_failures, outcome.discovered
            )
            .yellow()
        ));
    }
    if outcome.discovery_truncated {
        out.push_str(&format!(
            "  {}\n",
            "Discovery stopped early; results cover a partial page list".yellow()
        ));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "Risk distribution".bold().underline()));
    out.push_str(&format!(
        "  high: {}  medium: {}  low: {}\n\n",
        report.risk_summary.high.to_string().red().bold(),
        report.risk_summary.medium.to_string().yellow().bold(),
        report.risk_summary.low.to_string().green(),
    ));

    if !report.entries.is_empty() {
        out.push_str(&format!(
            "{} (top {})\n",
            "Flagged pages".bold().underline(),
            TOP_ENTRIES.min(report.entries.len())
        ));
        for entry in report.entries.iter().take(TOP_ENTRIES) {
            let level = match entry.risk_level {
                RiskLevel::High => "HIGH  ".red().bold().to_string(),
                RiskLevel::Medium => "MEDIUM".yellow().bold().to_string(),
                RiskLevel::Low => "LOW   ".green().to_string(),
            };
            out.push_str(&format!("  [{level}] {}\n", entry.page.title));
            out.push_str(&format!("           {}\n", entry.page.url.dimmed()));
            let indicators = entry
                .page
                .public_indicators
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("           {}\n", indicators.dimmed()));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", "Recommendations".bold().underline()));
    for (i, recommendation) in report.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {recommendation}\n", i + 1));
    }

    if report.risk_summary.high > 0 {
        out.push('\n');
        out.push_str(&format!("{}\n", "URGENT".red().bold().underline()));
        out.push_str("  High-risk pages were detected. They may contain sensitive\n");
        out.push_str("  information. Review their sharing settings now and unpublish\n");
        out.push_str("  anything that should not be public.\n");
    }

    out.push_str(&format!("{}\n", separator.dimmed()));
    out
}
