//! CLI command implementations

use anyhow::{Context, Result};

use crate::cli::args::{AnalyzeArgs, ConfigCommand};
use crate::config::Settings;
use crate::llm::{build_provider, LlmProvider};
use crate::render;
use crate::report::{parse_report, AnalysisReport, AnalysisRequest};
use crate::transcript;
use crate::CallsightError;

/// Analyze a transcript file and render the report.
pub async fn analyze(settings: &Settings, args: AnalyzeArgs) -> Result<()> {
    let api_key = args
        .api_key
        .clone()
        .unwrap_or_else(|| settings.llm.api_key.clone());

    // Missing input blocks the action before any network call is made.
    if api_key.trim().is_empty() || !args.file.exists() {
        println!(
            "Warning: provide your OpenAI API key and an existing transcript file to generate a report."
        );
        return Ok(());
    }

    if !transcript::accepted_extension(&args.file) {
        anyhow::bail!(
            "Unsupported transcript format: {} (accepted: txt, csv, docx)",
            args.file.display()
        );
    }

    let transcript_text = transcript::load(&args.file)?;
    tracing::info!(chars = transcript_text.len(), "loaded transcript");

    if args.question.is_some() {
        // Recorded on the request but the report prompt does not use it.
        tracing::debug!("question noted; the report prompt is fixed");
    }

    let request = AnalysisRequest {
        transcript_text,
        optional_question: args.question,
        model_name: args
            .model
            .unwrap_or_else(|| settings.llm.model.clone()),
    };

    let provider = build_provider(settings, &api_key)?;

    println!(
        "Analyzing {} with {}...",
        args.file.display(),
        request.model_name
    );

    let report = match run_analysis(provider.as_ref(), &request).await {
        Ok(report) => report,
        Err(err) => {
            let heading = match &err {
                CallsightError::Transport(_) | CallsightError::Api { .. } => {
                    "The model could not be reached"
                }
                CallsightError::MalformedReply(_) => "The model reply could not be parsed",
                _ => "Analysis failed",
            };
            anyhow::bail!("{heading}: {err}");
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
    println!();
    println!("Earnings Call Analysis Report ({generated})");
    println!();

    render::render_report(&report, &settings.render, &args.out)?;

    Ok(())
}

/// Request a completion and decode the reply as a report.
async fn run_analysis(
    provider: &dyn LlmProvider,
    request: &AnalysisRequest,
) -> crate::Result<AnalysisReport> {
    let reply = provider.complete(request).await?;
    parse_report(&reply)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
        ConfigCommand::Set { key, value } => {
            let path = Settings::config_path()?;

            // Edit what is on disk, not the env-overridden runtime view,
            // so a credential from the environment is never written out.
            let mut on_disk: Settings = if path.exists() {
                let content = std::fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read config file: {}", path.display())
                })?;
                toml::from_str(&content).with_context(|| {
                    format!("Failed to parse config file: {}", path.display())
                })?
            } else {
                Settings::default()
            };

            on_disk.set_value(&key, &value)?;
            on_disk.save(&path)?;
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}
