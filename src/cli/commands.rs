//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::build_provider;
use crate::summary::{build_mom_prompt, split_completion, word_budget};

/// Generate MOM and Action Items from meeting notes.
pub async fn generate(
    settings: &Settings,
    file: Option<PathBuf>,
    model: Option<String>,
    json: bool,
) -> Result<()> {
    let notes = read_notes(file)?;

    // Reject before any prompt is built or provider constructed.
    if notes.trim().is_empty() {
        anyhow::bail!("Please enter the meeting text before generating MOM and Action Items.");
    }

    let mut settings = settings.clone();
    if let Some(model) = model {
        settings.llm.model = model;
    }

    let provider = build_provider(&settings)?;
    let prompt = build_mom_prompt(&notes);

    tracing::info!(
        provider = %settings.llm.provider,
        budget = word_budget(&notes),
        "Requesting completion"
    );

    let output = match provider.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => anyhow::bail!("An error occurred: {}", e),
    };

    let summary = split_completion(&output);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Minutes of the Meeting (MOM)");
    println!();
    println!("{}", summary.minutes);
    println!();
    println!("Action Items");
    println!();
    println!("{}", summary.action_items);

    Ok(())
}

/// Read notes from a file argument, or stdin when absent or "-".
fn read_notes(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read notes file: {}", path.display())),
        _ => {
            let mut notes = String::new();
            std::io::stdin()
                .read_to_string(&mut notes)
                .context("Failed to read notes from stdin")?;
            Ok(notes)
        }
    }
}

/// Configuration management commands.
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
    }

    Ok(())
}
