use crate::Report;

/// Render just the summary text
pub fn render_text(report: &Report) -> String {
    report.summary.clone()
}

/// Render the full report (url, kind, summary) as pretty JSON
pub fn render_json(report: &Report) -> String {
    serde_json::to_string_pretty(report).unwrap_or_default()
}
