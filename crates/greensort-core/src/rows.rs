use crate::RankedEntry;

/// Display-ready leaderboard row. Built 1:1 from a [`RankedEntry`] with no
/// reordering and no recomputed rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub key: String,
    pub rank_label: String,
    pub display_name: String,
    pub score_label: String,
    pub podium: bool,
}

impl LeaderboardRow {
    pub fn row_class(&self) -> &'static str {
        if self.podium {
            "leaderboard-row podium"
        } else {
            "leaderboard-row"
        }
    }
}

impl From<&RankedEntry> for LeaderboardRow {
    fn from(entry: &RankedEntry) -> Self {
        Self {
            key: entry.id.clone(),
            rank_label: format!("#{}", entry.rank),
            display_name: entry.display_name.clone(),
            score_label: format_score(entry.score),
            podium: entry.is_podium(),
        }
    }
}

pub fn leaderboard_rows(entries: &[RankedEntry]) -> Vec<LeaderboardRow> {
    entries.iter().map(LeaderboardRow::from).collect()
}

/// Whole scores print without a decimal point (`120`, not `120.0`).
fn format_score(score: f64) -> String {
    format!("{}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_entries;

    #[test]
    fn test_round_trip_rows() {
        let body = r#"[
            {"id":"a","displayName":"Alice","score":120,"rank":1},
            {"id":"b","displayName":"Bob","score":90,"rank":2}
        ]"#;
        let rows = leaderboard_rows(&decode_entries(body).unwrap());

        let rendered: Vec<_> = rows
            .iter()
            .map(|r| format!("{} / {} / {}", r.rank_label, r.display_name, r.score_label))
            .collect();
        assert_eq!(rendered, ["#1 / Alice / 120", "#2 / Bob / 90"]);
        assert!(rows.iter().all(|r| r.podium));
    }

    #[test]
    fn test_one_row_per_entry_rank_verbatim() {
        // Ranks deliberately out of order and with gaps: the client shows them as sent.
        let entries = vec![
            RankedEntry::new("x", "Xia", 50.0, 7),
            RankedEntry::new("y", "Yun", 55.0, 2),
            RankedEntry::new("z", "Zed", 10.0, 7),
            RankedEntry::new("w", "Wu", 99.0, 4),
        ];
        let rows = leaderboard_rows(&entries);

        assert_eq!(rows.len(), entries.len());
        for (row, entry) in rows.iter().zip(&entries) {
            assert_eq!(row.key, entry.id);
            assert_eq!(row.rank_label, format!("#{}", entry.rank));
        }
    }

    #[test]
    fn test_podium_treatment() {
        let entries: Vec<_> = (1..=6)
            .map(|rank| RankedEntry::new(format!("id{rank}"), "P", 1.0, rank))
            .collect();
        let rows = leaderboard_rows(&entries);

        let classes: Vec<_> = rows.iter().map(|r| r.row_class()).collect();
        assert_eq!(
            classes,
            [
                "leaderboard-row podium",
                "leaderboard-row podium",
                "leaderboard-row podium",
                "leaderboard-row",
                "leaderboard-row",
                "leaderboard-row",
            ]
        );
    }

    #[test]
    fn test_fractional_score() {
        let row = LeaderboardRow::from(&RankedEntry::new("f", "Frac", 12.5, 9));
        assert_eq!(row.score_label, "12.5");
    }

    #[test]
    fn test_no_entries_no_rows() {
        assert!(leaderboard_rows(&[]).is_empty());
    }
}
