use clap::Parser;

/// Liga MX match outcome probability estimator
#[derive(Parser, Debug, Clone)]
#[command(name = "ligamx-predictor", version, about)]
pub struct Config {
    /// Home team name, as it appears in the match history
    pub home_team: String,

    /// Away team name
    pub away_team: String,

    /// Path to the historical matches CSV
    #[arg(long, env = "MATCH_DATA_PATH", default_value = "data/matches_model.csv")]
    pub data_path: String,

    /// Path to the trained logistic model JSON artifact
    #[arg(long, env = "MODEL_PATH", default_value = "model/logreg_model.json")]
    pub model_path: String,

    /// Number of recent matches the form window covers
    #[arg(long, env = "FORM_WINDOW", default_value = "5")]
    pub form_window: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.form_window == 0 {
            anyhow::bail!("form_window must be at least 1");
        }
        if self.home_team.trim().is_empty() || self.away_team.trim().is_empty() {
            anyhow::bail!("team names must not be empty");
        }
        Ok(())
    }
}
