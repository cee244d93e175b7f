//! Merge summary extraction and release body rendering.

/// Commit summaries starting with this prefix are listed in the release.
pub const MERGE_PREFIX: &str = "Merge pull request";

/// Text of a commit message up to the first blank line.
pub fn summary(message: &str) -> &str {
    message
        .split_once("\n\n")
        .map(|(summary, _)| summary)
        .unwrap_or(message)
}

/// Summary of a merged pull request, if `message` belongs to one.
pub fn merge_summary(message: &str) -> Option<&str> {
    let summary = summary(message);
    summary.starts_with(MERGE_PREFIX).then_some(summary)
}

/// Renders summaries as a dashed list, one entry per line.
pub fn render_body(summaries: &[String]) -> String {
    summaries.iter().map(|s| format!("- {s}\n")).collect()
}
