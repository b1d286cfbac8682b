//! Decodes the raw model reply into an [`AnalysisReport`].

use crate::report::AnalysisReport;
use crate::{CallsightError, Result};

/// Parse the model's reply text as a report.
///
/// The model is instructed to emit clean JSON with the four report keys,
/// but nothing guarantees it obeyed. Any syntax error or missing field is
/// reported as a malformed-reply failure, distinct from transport or API
/// failures raised by the completion client.
pub fn parse_report(reply: &str) -> Result<AnalysisReport> {
    serde_json::from_str(reply).map_err(|e| CallsightError::MalformedReply(e.to_string()))
}
