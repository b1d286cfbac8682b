//! Word cloud generation.
//!
//! Sizes each term by its frequency within the supplied text blob and lays
//! the terms out on a fixed white canvas, written as SVG.

use std::path::Path;

use plotters::prelude::*;

use crate::{CallsightError, Result};

const MIN_FONT_SIZE: u32 = 16;
const MAX_FONT_SIZE: u32 = 56;
const PADDING: i32 = 8;

// Muted palette cycled across terms.
const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(255, 127, 14),
    RGBColor(23, 100, 107),
];

/// Join concept strings with single spaces, forming the text blob the word
/// cloud is generated from.
pub fn joined_concepts(concepts: &[String]) -> String {
    concepts.join(" ")
}

/// A term placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTerm {
    pub term: String,
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
}

/// Count word frequencies in a text blob, most frequent first.
///
/// Matching is case-insensitive the way a cloud generator infers weight
/// from textual repetition; ties break alphabetically for determinism.
pub fn term_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut counts: std::collections::BTreeMap<String, usize> = std::collections::BTreeMap::new();
    for word in text.split_whitespace() {
        let word = word.to_lowercase();
        if !word.is_empty() {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<(String, usize)> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms
}

/// Lay terms out in frequency order, left to right, wrapping into rows.
/// Terms that no longer fit on the canvas are dropped.
pub fn layout_terms(terms: &[(String, usize)], width: u32, height: u32) -> Vec<PlacedTerm> {
    let max_count = terms.iter().map(|(_, c)| *c).max().unwrap_or(1);

    let mut placed = Vec::new();
    let mut x = PADDING;
    let mut y = PADDING;
    let mut row_height = 0;

    for (term, count) in terms {
        let font_size = scaled_size(*count, max_count);
        let term_width = estimated_width(term, font_size);

        if x + term_width > width as i32 - PADDING && x > PADDING {
            x = PADDING;
            y += row_height + PADDING;
            row_height = 0;
        }

        if y + font_size as i32 > height as i32 - PADDING {
            break;
        }

        placed.push(PlacedTerm {
            term: term.clone(),
            font_size,
            x,
            y,
        });

        x += term_width + PADDING;
        row_height = row_height.max(font_size as i32);
    }

    placed
}

fn scaled_size(count: usize, max_count: usize) -> u32 {
    if max_count <= 1 {
        return MIN_FONT_SIZE + (MAX_FONT_SIZE - MIN_FONT_SIZE) / 2;
    }
    let ratio = (count - 1) as f64 / (max_count - 1) as f64;
    MIN_FONT_SIZE + (ratio * (MAX_FONT_SIZE - MIN_FONT_SIZE) as f64).round() as u32
}

// Rough glyph-width estimate; SVG text needs no font metrics.
fn estimated_width(term: &str, font_size: u32) -> i32 {
    (term.chars().count() as f64 * font_size as f64 * 0.6).ceil() as i32
}

/// Generate the word cloud SVG from a text blob at a fixed canvas size.
pub fn render_word_cloud(text: &str, width: u32, height: u32, path: &Path) -> Result<()> {
    let terms = term_frequencies(text);
    let placed = layout_terms(&terms, width, height);

    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CallsightError::Render(e.to_string()))?;

    for (i, term) in placed.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        root.draw(&Text::new(
            term.term.clone(),
            (term.x, term.y),
            ("sans-serif", term.font_size).into_font().color(&color),
        ))
        .map_err(|e| CallsightError::Render(e.to_string()))?;
    }

    root.present()
        .map_err(|e| CallsightError::Render(e.to_string()))?;

    Ok(())
}
