//! Report module
//!
//! Data model for the analysis request and the structured report the model
//! returns, plus the reply parser.

mod model;
mod parser;

pub use model::{AnalysisReport, AnalysisRequest, ConceptScore, Sentiment};
pub use parser::parse_report;
