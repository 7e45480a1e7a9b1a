use crate::processors::StationSummary;

/// Render the final report: stations in ascending name order, each as
/// `name=min/mean/max` with one decimal place, joined by `", "` and wrapped
/// in braces. An empty summary renders as `{}`.
pub fn render_report(summary: &StationSummary) -> String {
    let body = summary
        .iter()
        .map(|(name, stats)| format!("{name}={stats}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{{{body}}}")
}
