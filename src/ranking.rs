use crate::error::{Error, Result};
use crate::score_types::{PlayerMeanScore, RankedEntry};
use tracing::debug;

/// Largest score ceiling a counting table is built for. Above it every
/// strategy ranks by sort-and-scan.
pub const COUNTING_TABLE_LIMIT: i64 = (1 << 24) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankStrategy {
    /// Counting table when the ceiling is small enough, sort-and-scan otherwise.
    #[default]
    Auto,
    /// O(n + max_score) frequency table over every possible score. Ceilings
    /// above `COUNTING_TABLE_LIMIT` fall back to sort-and-scan.
    CountingTable,
    /// O(n log n) scan of the sorted entries, no table.
    SortScan,
}

impl RankStrategy {
    pub fn uses_counting_table(self, max_score: i64) -> bool {
        match self {
            RankStrategy::Auto | RankStrategy::CountingTable => max_score <= COUNTING_TABLE_LIMIT,
            RankStrategy::SortScan => false,
        }
    }
}

/// Ranks players by descending mean score. Tied players share a rank and the
/// following rank skips past them (1, 1, 1, 4, ...).
pub fn rank_mean_scores(scores: Vec<PlayerMeanScore>, max_score: i64) -> Result<Vec<RankedEntry>> {
    rank_mean_scores_with(scores, max_score, RankStrategy::Auto)
}

pub fn rank_mean_scores_with(
    mut scores: Vec<PlayerMeanScore>,
    max_score: i64,
    strategy: RankStrategy,
) -> Result<Vec<RankedEntry>> {
    if let Some(invalid) = scores
        .iter()
        .find(|s| s.mean_score < 0 || s.mean_score > max_score)
    {
        return Err(Error::OutOfRange {
            player_id: invalid.player_id.clone(),
            mean_score: invalid.mean_score,
            max_score,
        });
    }
    if scores.is_empty() {
        return Ok(Vec::new());
    }

    // Stable, so tied players keep their incoming order.
    scores.sort_by(|a, b| b.mean_score.cmp(&a.mean_score));

    let ranks = if strategy.uses_counting_table(max_score) {
        debug!(players = scores.len(), max_score, "Ranking with counting table");
        counting_table_ranks(&scores, max_score)
    } else {
        debug!(players = scores.len(), max_score, "Ranking with sort-and-scan");
        sort_scan_ranks(&scores)
    };

    Ok(scores
        .into_iter()
        .zip(ranks)
        .map(|(score, rank)| RankedEntry {
            rank,
            player_id: score.player_id,
            mean_score: score.mean_score,
        })
        .collect())
}

// Scores are already validated to lie in 0..=max_score.
fn counting_table_ranks(sorted: &[PlayerMeanScore], max_score: i64) -> Vec<usize> {
    let ceiling = max_score as usize;

    // at_or_above[s] ends up holding the number of players scoring >= s.
    // The slot at ceiling + 1 stays 0.
    let mut at_or_above = vec![0usize; ceiling + 2];
    for entry in sorted {
        at_or_above[entry.mean_score as usize] += 1;
    }
    for s in (0..=ceiling).rev() {
        at_or_above[s] += at_or_above[s + 1];
    }

    sorted
        .iter()
        .map(|entry| at_or_above[entry.mean_score as usize + 1] + 1)
        .collect()
}

fn sort_scan_ranks(sorted: &[PlayerMeanScore]) -> Vec<usize> {
    let mut ranks = Vec::with_capacity(sorted.len());
    let mut current_rank = 0;
    let mut previous_score = None;

    for (index, entry) in sorted.iter().enumerate() {
        if previous_score != Some(entry.mean_score) {
            current_rank = index + 1;
            previous_score = Some(entry.mean_score);
        }
        ranks.push(current_rank);
    }

    ranks
}
