use crate::error::{Error, Result};
use crate::score_types::ScoreEvent;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns of a score log row, by position: `create_timestamp,player_id,score`.
#[derive(Deserialize, Debug)]
struct ScoreRow {
    create_timestamp: String,
    player_id: String,
    score: String,
}

pub fn read_score_log(path: impl AsRef<Path>) -> Result<Vec<ScoreEvent>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_score_log(file, path)
}

/// Parses a score log whose first row is a header. `source_path` only labels errors.
pub fn parse_score_log<R: Read>(input: R, source_path: &Path) -> Result<Vec<ScoreEvent>> {
    let csv_error = |source| Error::Csv {
        path: source_path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line());
        // Positional: the header row is skipped, never matched by name.
        let row: ScoreRow = record.deserialize(None).map_err(csv_error)?;
        let score = row.score.parse::<i64>().map_err(|source| Error::Parse {
            line,
            value: row.score.clone(),
            source,
        })?;
        events.push(ScoreEvent {
            timestamp: row.create_timestamp,
            player_id: row.player_id,
            score,
        });
    }

    Ok(events)
}
