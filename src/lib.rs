//! callsight - Earnings call transcript analysis powered by a hosted LLM
//!
//! Reads a transcript file, asks a chat-completion model for a structured
//! report, and renders sentiment, concept charts, and key insights.

pub mod cli;
pub mod config;
pub mod llm;
pub mod render;
pub mod report;
pub mod transcript;

use thiserror::Error;

/// Main error type for callsight
#[derive(Error, Debug)]
pub enum CallsightError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transcript is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse table file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Model request failed: {0}")]
    Transport(String),

    #[error("Model API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model reply was not a valid report: {0}")]
    MalformedReply(String),

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, CallsightError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "callsight";
