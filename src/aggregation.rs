use crate::score_types::{PlayerMeanScore, ScoreEvent};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct ScoreTally {
    // Wide enough that no run of i64 scores can overflow it.
    sum: i128,
    count: i128,
}

/// Reduces score events to one mean score per player, in player id order.
pub fn aggregate_mean_scores(events: &[ScoreEvent]) -> Vec<PlayerMeanScore> {
    let mut tallies: BTreeMap<&str, ScoreTally> = BTreeMap::new();

    for event in events {
        let tally = tallies.entry(event.player_id.as_str()).or_default();
        tally.sum += i128::from(event.score);
        tally.count += 1;
    }

    tallies
        .into_iter()
        .map(|(player_id, tally)| PlayerMeanScore::new(player_id, rounded_mean(tally.sum, tally.count)))
        .collect()
}

/// `sum / count` rounded to the nearest integer, halves away from zero.
///
/// `count` must be positive. A mean of i64 scores always fits in an i64; the
/// clamp only matters for sums that did not come from one.
pub fn rounded_mean(sum: i128, count: i128) -> i64 {
    debug_assert!(count > 0);
    let magnitude = (2 * sum.abs() + count) / (2 * count);
    let mean = if sum < 0 { -magnitude } else { magnitude };
    mean.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
