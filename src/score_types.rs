use serde::Serialize;

/// One row of the game score log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEvent {
    pub timestamp: String,
    pub player_id: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMeanScore {
    pub player_id: String,
    pub mean_score: i64,
}

/// A player's place in the ranking. Field order is the report column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub player_id: String,
    pub mean_score: i64,
}

impl ScoreEvent {
    pub fn new(timestamp: impl Into<String>, player_id: impl Into<String>, score: i64) -> Self {
        Self {
            timestamp: timestamp.into(),
            player_id: player_id.into(),
            score,
        }
    }
}

impl PlayerMeanScore {
    pub fn new(player_id: impl Into<String>, mean_score: i64) -> Self {
        Self {
            player_id: player_id.into(),
            mean_score,
        }
    }
}

impl RankedEntry {
    pub fn new(rank: usize, player_id: impl Into<String>, mean_score: i64) -> Self {
        Self {
            rank,
            player_id: player_id.into(),
            mean_score,
        }
    }
}
