//! CSV output formatter.
//!
//! Produces a flattened table restricted to the fields a reviewer needs to
//! triage flagged pages, one row per [`RiskEntry`](crate::report::RiskEntry).
//! Pages with no indicators never appear (they are excluded from the report
//! upstream).

use crate::report::Report;

/// Header row of the tabular export.
pub const CSV_HEADER: [&str; 5] = [
    "Title",
    "URL",
    "Risk Level",
    "Public Indicators",
    "Last Edited Time",
];

/// Formats a [`Report`] as CSV.
///
/// Indicator labels are joined with `", "` inside a single quoted field.
///
/// # Panics
///
/// Panics if serialization into the in-memory buffer fails (should not
/// happen with valid data).
pub fn format(report: &Report) -> String {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record(CSV_HEADER)
        .expect("CSV header serialization failed");

    for entry in &report.entries {
        let indicators = entry
            .page
            .public_indicators
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let risk_level = entry.risk_level.to_string();

        writer
            .write_record([
                entry.page.title.as_str(),
                entry.page.url.as_str(),
                risk_level.as_str(),
                indicators.as_str(),
                entry.page.last_edited_time.as_str(),
            ])
            .expect("CSV row serialization failed");
    }

    let bytes = writer.into_inner().expect("CSV buffer flush failed");
    String::from_utf8(bytes).expect("CSV output was not valid UTF-8")
}
