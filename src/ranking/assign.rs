use crate::core::ScoreRecord;
use crate::ranking::RankedRecord;

/// Sort records descending by score and assign positional ranks.
///
/// The sort is stable: records with equal scores keep their relative input
/// order, which makes rank assignment deterministic and lets the upstream
/// feed control tie presentation. Ranks are 1-based array positions;
/// tied records get distinct consecutive ranks (positional ranking, not
/// competition ranking with skipped positions).
pub fn assign_ranks(mut records: Vec<ScoreRecord>) -> Vec<RankedRecord> {
    // Higher score is better: put it first. Vec::sort_by is stable.
    records.sort_by(|a, b| b.score.cmp(&a.score));

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| RankedRecord::new(record, idx + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, score: u64) -> ScoreRecord {
        ScoreRecord::new(id, id.to_uppercase(), score)
    }

    #[test]
    fn test_empty_input() {
        assert!(assign_ranks(vec![]).is_empty());
    }

    #[test]
    fn test_descending_order_with_positional_ranks() {
        let ranked = assign_ranks(vec![record("a", 50), record("b", 100), record("c", 80)]);

        let ids: Vec<&str> = ranked.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_input_order_and_distinct_ranks() {
        let ranked = assign_ranks(vec![
            record("first", 80),
            record("second", 80),
            record("top", 100),
        ]);

        let ids: Vec<&str> = ranked.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, ["top", "first", "second"]);

        // No rank compression: the two tied records get ranks 2 and 3.
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_rank_bounds() {
        let ranked = assign_ranks((0..10u64).map(|i| record(&i.to_string(), i % 3)).collect());
        for (idx, r) in ranked.iter().enumerate() {
            assert_eq!(r.rank, idx + 1);
        }
        assert_eq!(ranked.last().unwrap().rank, 10);
    }
}
