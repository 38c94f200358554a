use anyhow::Context;
use clap::Parser;
use game_score_ranking::config::{CliArgs, Config};
use game_score_ranking::leaderboard::run;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "game_score_ranking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from(CliArgs::parse());
    let summary = run(&config)
        .with_context(|| format!("Could not rank {}", config.input_path.display()))?;

    info!(
        path = %summary.report_path.display(),
        events = summary.events,
        players = summary.players,
        selected = summary.selected.len(),
        "Ranking complete"
    );
    Ok(())
}
