use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not parse score {value:?} on line {line}")]
    Parse {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Mean score {mean_score} of player {player_id} is outside 0..={max_score}")]
    OutOfRange {
        player_id: String,
        mean_score: i64,
        max_score: i64,
    },

    #[error("No ranked entries to select from")]
    EmptyInput,

    #[error("Malformed CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
