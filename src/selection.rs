use crate::config::TOP_RANK_LIMIT;
use crate::error::{Error, Result};
use crate::score_types::RankedEntry;

/// Keeps the first `limit` entries plus everyone tied with the last of them.
///
/// `entries` must already be ordered best rank first. `limit` must be positive.
pub fn select_top_ranks(mut entries: Vec<RankedEntry>, limit: usize) -> Result<Vec<RankedEntry>> {
    if entries.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug_assert!(limit > 0, "selection limit must be positive");
    if entries.len() <= limit {
        return Ok(entries);
    }

    let cutoff_rank = entries[limit.saturating_sub(1)].rank;
    let end = entries[limit..]
        .iter()
        .position(|entry| entry.rank != cutoff_rank)
        .map_or(entries.len(), |offset| limit + offset);
    entries.truncate(end);

    Ok(entries)
}

pub fn select_top_ten(entries: Vec<RankedEntry>) -> Result<Vec<RankedEntry>> {
    select_top_ranks(entries, TOP_RANK_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entries(ranks: &[usize]) -> Vec<RankedEntry> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| RankedEntry::new(rank, format!("player{:04}", i + 1), 10000 - rank as i64))
            .collect()
    }

    #[rstest]
    #[case::exactly_ten(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 10)]
    #[case::one_record(&[1], 1)]
    #[case::eleventh_cut(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], 10)]
    #[case::all_tied(&[1; 11], 11)]
    #[case::tie_at_tenth(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10], 11)]
    #[case::tie_run_then_cut(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 9, 9, 9, 13, 14], 12)]
    #[case::tie_before_tenth_only(&[1, 2, 3, 4, 5, 6, 6, 6, 6, 10, 11, 12, 13, 14, 15], 10)]
    fn selected_length(#[case] ranks: &[usize], #[case] expected_len: usize) {
        let input = entries(ranks);
        let selected = select_top_ten(input.clone()).unwrap();
        assert_eq!(selected.len(), expected_len);
        assert_eq!(selected[..], input[..expected_len]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(select_top_ten(Vec::new()), Err(Error::EmptyInput)));
    }

    #[test]
    fn excluded_entries_rank_below_cutoff() {
        let input = entries(&[1, 1, 3, 4, 4, 4, 7, 8, 8, 10, 10, 10, 13, 13, 15]);
        let selected = select_top_ten(input.clone()).unwrap();

        assert!(selected.len() >= 10);
        let cutoff = selected[9].rank;
        assert!(selected[10..].iter().all(|e| e.rank == cutoff));
        assert!(input[selected.len()..].iter().all(|e| e.rank > cutoff));
    }

    #[test]
    fn custom_limit() {
        let selected = select_top_ranks(entries(&[1, 2, 2, 4]), 2).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "selection limit must be positive")]
    fn zero_limit_breaks_contract() {
        let _ = select_top_ranks(entries(&[1, 2, 2, 4]), 0);
    }
}
