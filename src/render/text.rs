//! Textual report sections printed to stdout.

use crate::render::RenderedCharts;
use crate::report::AnalysisReport;

/// Format the insight list as a 1-indexed numbered sequence, original order.
pub fn numbered_summary(summary: &[String]) -> String {
    summary
        .iter()
        .enumerate()
        .map(|(idx, insight)| format!("{}. {}", idx + 1, insight))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the sentiment scores, chart locations, and key insights.
pub fn print_report(report: &AnalysisReport, charts: &RenderedCharts) {
    println!("Generated Sentiment Scores");
    // Two fixed integer fields; serialization cannot fail.
    println!(
        "{}",
        serde_json::to_string_pretty(&report.sentiment).unwrap_or_default()
    );

    println!();
    println!("Top 20 Concepts for Word Cloud");
    println!("  written to {}", charts.word_cloud.display());

    println!();
    println!("Top 10 Concepts by Sentiment");
    println!("  written to {}", charts.bar_chart.display());

    println!();
    println!("5 Key Insights Summary");
    println!("{}", numbered_summary(&report.summary));
}
