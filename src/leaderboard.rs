use crate::aggregation::aggregate_mean_scores;
use crate::config::Config;
use crate::error::Result;
use crate::log_reader::read_score_log;
use crate::ranking::rank_mean_scores;
use crate::report::write_ranking_report;
use crate::score_types::RankedEntry;
use crate::selection::select_top_ranks;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub events: usize,
    pub players: usize,
    pub selected: Vec<RankedEntry>,
}

pub fn run(config: &Config) -> Result<RunSummary> {
    run_at(config, &Local::now())
}

/// Reads the score log, ranks every player and writes the top of the leaderboard.
/// Nothing is written unless every stage succeeds.
pub fn run_at<Tz>(config: &Config, timestamp: &DateTime<Tz>) -> Result<RunSummary>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let events = read_score_log(&config.input_path)?;
    info!(path = %config.input_path.display(), events = events.len(), "Loaded score log");

    let mean_scores = aggregate_mean_scores(&events);
    let players = mean_scores.len();
    info!(players, "Aggregated mean scores");

    let ranked = rank_mean_scores(mean_scores, config.max_score)?;
    let selected = select_top_ranks(ranked, config.top_limit)?;
    info!(selected = selected.len(), "Selected top ranks");

    let report_path = write_ranking_report(&selected, &config.output_dir, timestamp)?;

    Ok(RunSummary {
        report_path,
        events: events.len(),
        players,
        selected,
    })
}
