pub mod aggregation;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod log_reader;
pub mod ranking;
pub mod report;
pub mod score_types;
pub mod selection;

pub use error::{Error, Result};
