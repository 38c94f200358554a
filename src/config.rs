use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "input_data/game_score.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "result";
pub const DEFAULT_MAX_SCORE: i64 = 99999;
pub const TOP_RANK_LIMIT: usize = 10;

/// Rank players of a game score log by their mean score.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Input file path
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub filepath: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Ceiling for mean scores; also sizes the ranking table.
    pub max_score: i64,
    pub top_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_score: DEFAULT_MAX_SCORE,
            top_limit: TOP_RANK_LIMIT,
        }
    }
}

impl From<CliArgs> for Config {
    fn from(args: CliArgs) -> Self {
        Self {
            input_path: args.filepath,
            ..Self::default()
        }
    }
}

pub fn parse_config<I, T>(args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::parse_from(args).into()
}
