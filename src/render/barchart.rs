//! Horizontal bar chart for the top concepts.

use std::path::Path;

use plotters::prelude::*;

use crate::report::ConceptScore;
use crate::{CallsightError, Result};

const BAR_COLOR: RGBColor = RGBColor(44, 160, 44);

/// X-axis range covering all scores plus headroom, always including zero.
pub fn score_range(scores: &[f64]) -> (f64, f64) {
    let mut min = 0.0f64;
    let mut max = 0.0f64;
    for &score in scores {
        min = min.min(score);
        max = max.max(score);
    }
    if min == max {
        max = min + 1.0;
    }
    let pad = (max - min) * 0.05;
    (min - if min < 0.0 { pad } else { 0.0 }, max + pad)
}

/// Render the top concepts as a horizontal bar chart SVG.
///
/// Bars keep the order the concepts were received in; no re-sorting.
pub fn render_bar_chart(
    top_concepts: &[ConceptScore],
    width: u32,
    height: u32,
    path: &Path,
) -> Result<()> {
    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CallsightError::Render(e.to_string()))?;

    // Nothing to chart; leave the blank canvas rather than building
    // degenerate axes.
    if top_concepts.is_empty() {
        return root
            .present()
            .map_err(|e| CallsightError::Render(e.to_string()));
    }

    let scores: Vec<f64> = top_concepts.iter().map(|c| c.sentiment_score).collect();
    let (x_min, x_max) = score_range(&scores);

    let mut chart = ChartBuilder::on(&root)
        .caption("Top 10 Concepts by Sentiment", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(160)
        .build_cartesian_2d(x_min..x_max, (0..top_concepts.len()).into_segmented())
        .map_err(|e| CallsightError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Sentiment Score")
        .y_desc("Concepts")
        .y_labels(top_concepts.len())
        .y_label_formatter(&|segment| match segment {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => top_concepts
                .get(*i)
                .map(|c| c.concept.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| CallsightError::Render(e.to_string()))?;

    chart
        .draw_series(top_concepts.iter().enumerate().map(|(i, concept)| {
            let (x0, x1) = if concept.sentiment_score < 0.0 {
                (concept.sentiment_score, 0.0)
            } else {
                (0.0, concept.sentiment_score)
            };
            let mut bar = Rectangle::new(
                [
                    (x0, SegmentValue::Exact(i)),
                    (x1, SegmentValue::Exact(i + 1)),
                ],
                BAR_COLOR.filled(),
            );
            bar.set_margin(5, 5, 0, 0);
            bar
        }))
        .map_err(|e| CallsightError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| CallsightError::Render(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(name: &str, score: f64) -> ConceptScore {
        ConceptScore {
            concept: name.to_string(),
            sentiment_score: score,
        }
    }

    #[test]
    fn range_includes_zero_and_padding() {
        let (min, max) = score_range(&[0.2, 0.8, 0.5]);
        assert_eq!(min, 0.0);
        assert!(max > 0.8);

        let (min, max) = score_range(&[-0.4, 0.6]);
        assert!(min < -0.4);
        assert!(max > 0.6);
    }

    #[test]
    fn range_handles_all_zero_scores() {
        let (min, max) = score_range(&[0.0, 0.0]);
        assert!(max > min);
    }

    #[test]
    fn svg_contains_labels_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_concepts.svg");

        let concepts = vec![
            concept("revenue", 0.8),
            concept("margins", -0.2),
            concept("guidance", 0.5),
        ];
        render_bar_chart(&concepts, 1000, 500, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Top 10 Concepts by Sentiment"));
        assert!(svg.contains("Sentiment Score"));
        for c in &concepts {
            assert!(svg.contains(&c.concept), "svg missing {}", c.concept);
        }
    }

    #[test]
    fn bars_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ordered.svg");

        // Deliberately not alphabetical and not sorted by score, so any
        // re-sorting would reshuffle the label sequence.
        let concepts = vec![
            concept("zuluconcept", 0.9),
            concept("alphaconcept", 0.1),
            concept("midconcept", 0.5),
        ];
        render_bar_chart(&concepts, 1000, 500, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        let offsets: Vec<usize> = concepts
            .iter()
            .map(|c| svg.find(&c.concept).expect("label missing from svg"))
            .collect();
        assert!(
            offsets[0] < offsets[1] && offsets[1] < offsets[2],
            "labels should appear in input order, got offsets {:?}",
            offsets
        );
    }

    #[test]
    fn empty_top_list_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        render_bar_chart(&[], 1000, 500, &path).unwrap();
        assert!(path.exists());
    }
}
