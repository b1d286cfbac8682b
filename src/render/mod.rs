//! Report rendering module
//!
//! Draws the word cloud and bar chart as SVG files and prints the
//! sentiment scores and key insights.

mod barchart;
mod text;
mod wordcloud;

pub use barchart::render_bar_chart;
pub use text::{numbered_summary, print_report};
pub use wordcloud::{joined_concepts, render_word_cloud};

use std::path::{Path, PathBuf};

use crate::config::RenderSettings;
use crate::report::AnalysisReport;
use crate::Result;

/// Chart files written for one report.
#[derive(Debug)]
pub struct RenderedCharts {
    pub word_cloud: PathBuf,
    pub bar_chart: PathBuf,
}

/// Render a full report: write both charts into `out_dir` and print the
/// textual sections to stdout. One pass over already-complete data.
pub fn render_report(
    report: &AnalysisReport,
    settings: &RenderSettings,
    out_dir: &Path,
) -> Result<RenderedCharts> {
    std::fs::create_dir_all(out_dir)?;

    let word_cloud = out_dir.join("wordcloud.svg");
    let joined = joined_concepts(&report.concepts);
    render_word_cloud(
        &joined,
        settings.cloud_width,
        settings.cloud_height,
        &word_cloud,
    )?;

    let bar_chart = out_dir.join("top_concepts.svg");
    render_bar_chart(
        &report.top_concepts,
        settings.chart_width,
        settings.chart_height,
        &bar_chart,
    )?;

    let charts = RenderedCharts {
        word_cloud,
        bar_chart,
    };
    print_report(report, &charts);

    Ok(charts)
}
