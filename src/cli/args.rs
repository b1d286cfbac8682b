//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// callsight - LLM-powered earnings call analysis reports
#[derive(Parser, Debug)]
#[command(name = "callsight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an earnings call transcript and render the report
    Analyze(AnalyzeArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Transcript file to analyze (txt, csv, or docx)
    pub file: PathBuf,

    /// OpenAI API key (falls back to CALLSIGHT_OPENAI_API_KEY, then config)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Optional question about the call
    #[arg(short, long)]
    pub question: Option<String>,

    /// Model to use (defaults to llm.model from config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Directory to write chart files into
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Print the parsed report as raw JSON instead of rendering it
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., llm.model)
        key: String,

        /// Value to set
        value: String,
    },
}
