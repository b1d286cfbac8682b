//! Fixed prompts for the earnings call report.

/// System persona for the completion request. Mandates raw JSON output.
pub const SYSTEM_PROMPT: &str = "You are an expert financial analyst. \
Your task is to analyze the earnings call transcript and provide insights. \
Generate results in json template, Do not provide any other details or ```json words etc. Only clean json.";

/// Build the user prompt: the requested JSON shape followed by the literal
/// transcript. The transcript is appended unchanged and untruncated, so the
/// prompt always ends with exactly the transcript text.
pub fn build_report_prompt(transcript: &str) -> String {
    format!(
        "Generate a report based on the earnings call and generate the following information in a JSON format. \
Sentiment: {{'positive': sentiment_score in integer, 'negative': sentiment_score in integer}}, \
Concepts: provide a list of the top 20 concepts for a word cloud, \
Top_10: list the top 10 concepts with their sentiment scores, \
Summary: summarize 5 key insights in a list. \
Earnings call transcript:\n{transcript}"
    )
}
