use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use life_wheel::adapters::repository_for;
use life_wheel::application::{AnswerSheet, AssessmentSession};
use life_wheel::config::{init_tracing, AppConfig};
use life_wheel::domain::foundation::UserId;

/// Run one life-wheel assessment from an answer sheet and print the results as JSON.
#[derive(Debug, Parser)]
#[command(name = "life-wheel", version)]
struct Cli {
    /// YAML answer sheet with per-area ratings and optional focus areas
    answers: PathBuf,

    /// User to load history for and save as (overrides the sheet's user_id)
    #[arg(long)]
    user: Option<String>,

    /// Compute results without saving them
    #[arg(long)]
    no_save: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let yaml = tokio::fs::read_to_string(&cli.answers)
        .await
        .with_context(|| format!("reading {}", cli.answers.display()))?;
    let sheet = AnswerSheet::from_yaml(&yaml)?;

    let user_id = cli
        .user
        .or_else(|| sheet.user_id.clone())
        .map(UserId::new)
        .transpose()?;

    let repository = repository_for(&config.storage);
    let mut session = AssessmentSession::configured(repository, user_id, &config);
    session.begin_previous_load();

    sheet.apply(session.wizard_mut())?;

    if session.await_previous().await {
        tracing::info!("comparing against previous assessment");
    }

    if !cli.no_save {
        // A failed save is reported but the results are still printed.
        if let Err(error) = session.save().await {
            tracing::warn!(%error, "results were not saved");
        }
    }

    let results = session.results()?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
