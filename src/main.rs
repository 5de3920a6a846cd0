use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod config;
mod error;
mod history;
mod model;
mod predictor;
mod tiers;

use config::Config;
use history::MatchHistory;
use model::LogisticModel;
use predictor::Predictor;
use tiers::TierTable;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    // One-time setup: immutable handles held for the process lifetime.
    let history = Arc::new(MatchHistory::load_csv(&config.data_path)?);
    let model = LogisticModel::load_json(&config.model_path)?;
    let tiers = TierTable::liga_mx();
    info!("Tier table covers {} teams", tiers.teams().len());

    let predictor =
        Predictor::new(history, tiers, Box::new(model)).with_form_window(config.form_window);

    let prediction = predictor.predict(&config.home_team, &config.away_team)?;

    println!(
        "{} (tier {}) vs {} (tier {})",
        prediction.home_team, prediction.home_tier, prediction.away_team, prediction.away_tier
    );
    println!(
        "  form (pts/match)     {:>5.2}  vs  {:>5.2}",
        prediction.home_form.form_5, prediction.away_form.form_5
    );
    println!(
        "  goals for / against  {:.2}/{:.2}  vs  {:.2}/{:.2}",
        prediction.home_form.goals_for_5,
        prediction.home_form.goals_against_5,
        prediction.away_form.goals_for_5,
        prediction.away_form.goals_against_5
    );
    println!();
    println!("  Home win  {:>6.2}%", prediction.probabilities.home * 100.0);
    println!("  Draw      {:>6.2}%", prediction.probabilities.draw * 100.0);
    println!("  Away win  {:>6.2}%", prediction.probabilities.away * 100.0);
    println!();
    println!(
        "  Confidence: {} ({})",
        prediction.confidence, prediction.interpretation
    );

    Ok(())
}
