//! LLM module for callsight
//!
//! Chat-completion client and the fixed report prompts.

mod client;
mod openai;
pub mod prompts;

pub use client::{build_provider, LlmProvider};
pub use openai::OpenAiClient;
