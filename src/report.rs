use crate::error::{Error, Result};
use crate::score_types::RankedEntry;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const REPORT_FILE_PREFIX: &str = "get_ranking game_score_log_";
const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

pub fn report_file_name<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}{}.csv", REPORT_FILE_PREFIX, timestamp.format(REPORT_TIMESTAMP_FORMAT))
}

/// Renders the report as CSV: header `rank,player_id,mean_score`, then one row per entry.
pub fn render_ranking_csv(entries: &[RankedEntry], label: &Path) -> Result<Vec<u8>> {
    let csv_error = |source| Error::Csv {
        path: label.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer.serialize(entry).map_err(csv_error)?;
    }
    if entries.is_empty() {
        writer
            .write_record(["rank", "player_id", "mean_score"])
            .map_err(csv_error)?;
    }

    writer.into_inner().map_err(|e| Error::Io {
        path: label.to_path_buf(),
        source: e.into_error(),
    })
}

/// Writes the report into `output_dir` and returns its path.
///
/// The file only appears once its full contents are on disk.
pub fn write_ranking_report<Tz>(
    entries: &[RankedEntry],
    output_dir: &Path,
    timestamp: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let path = output_dir.join(report_file_name(timestamp));
    let contents = render_ranking_csv(entries, &path)?;

    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| Error::Io { path, source }
    };

    fs::create_dir_all(output_dir).map_err(io_error(output_dir))?;
    let staging = path.with_extension("csv.tmp");
    fs::write(&staging, contents).map_err(io_error(&staging))?;
    if let Err(source) = fs::rename(&staging, &path) {
        let _ = fs::remove_file(&staging);
        return Err(Error::Io { path, source });
    }

    info!(path = %path.display(), entries = entries.len(), "Wrote ranking report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn sample_entries() -> Vec<RankedEntry> {
        vec![
            RankedEntry::new(1, "player0001", 10000),
            RankedEntry::new(1, "player0004", 10000),
            RankedEntry::new(3, "player0003", 7000),
        ]
    }

    #[test]
    fn renders_header_and_rows() {
        let csv = render_ranking_csv(&sample_entries(), Path::new("report.csv")).unwrap();
        assert_eq!(
            String::from_utf8(csv).unwrap(),
            "rank,player_id,mean_score\n1,player0001,10000\n1,player0004,10000\n3,player0003,7000\n"
        );
    }

    #[test]
    fn empty_report_still_has_header() {
        let csv = render_ranking_csv(&[], Path::new("report.csv")).unwrap();
        assert_eq!(String::from_utf8(csv).unwrap(), "rank,player_id,mean_score\n");
    }

    #[test]
    fn file_name_carries_timestamp() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let timestamp = offset.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            report_file_name(&timestamp),
            "get_ranking game_score_log_2021-01-02T03:04:05+09:00.csv"
        );
    }

    #[test]
    fn writes_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("result");
        let timestamp = Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap();

        let path = write_ranking_report(&sample_entries(), &output_dir, &timestamp).unwrap();

        assert_eq!(path.parent(), Some(output_dir.as_path()));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("rank,player_id,mean_score\n1,player0001,10000\n"));

        let leftovers: Vec<_> = fs::read_dir(&output_dir).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }
}
