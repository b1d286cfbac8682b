//! Request and report data structures.

use serde::{Deserialize, Serialize};

/// One analysis request, built from user input and consumed once.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Full transcript text.
    pub transcript_text: String,

    /// Optional user question. Collected but not interpolated into the
    /// prompt; kept to match the observed behavior of the report flow.
    pub optional_question: Option<String>,

    /// Model identifier to request.
    pub model_name: String,
}

/// Structured analysis report decoded from the model reply.
///
/// Field names mirror the JSON keys the model is instructed to emit. The
/// expected lengths (20 concepts, 10 top concepts, 5 insights) are not
/// enforced; a missing or mistyped field surfaces as a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,

    #[serde(rename = "Concepts")]
    pub concepts: Vec<String>,

    #[serde(rename = "Top_10")]
    pub top_concepts: Vec<ConceptScore>,

    #[serde(rename = "Summary")]
    pub summary: Vec<String>,
}

/// Aggregate positive/negative sentiment scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: i64,
    pub negative: i64,
}

/// One ranked concept with its sentiment score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptScore {
    pub concept: String,
    pub sentiment_score: f64,
}
