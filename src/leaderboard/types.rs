//! High score entries and the top-10 merge.

use crate::core::constants::LEADERBOARD_SIZE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished quiz on a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HighScoreEntry {
    pub name: String,
    pub points: u32,
    /// Difficulty label, empty for size comparison
    #[serde(default)]
    pub difficulty: String,
    /// Unix timestamp; 0 for entries written without one
    #[serde(default)]
    pub recorded_at: i64,
}

impl HighScoreEntry {
    pub fn new(name: &str, points: u32, difficulty: &str) -> Self {
        Self {
            name: name.to_string(),
            points,
            difficulty: difficulty.to_string(),
            recorded_at: Utc::now().timestamp(),
        }
    }

    pub fn recorded_date(&self) -> Option<String> {
        if self.recorded_at == 0 {
            return None;
        }
        DateTime::<Utc>::from_timestamp(self.recorded_at, 0)
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// "points - DIFFICULTY", or just the points when there is no difficulty.
    pub fn score_line(&self) -> String {
        if self.difficulty.is_empty() {
            self.points.to_string()
        } else {
            format!("{} - {}", self.points, self.difficulty)
        }
    }
}

/// Add `entry`, sort by points descending and keep the top ten.
///
/// The sort is stable, so among equal points the earlier-recorded entry ranks higher.
pub fn merge_entry(mut entries: Vec<HighScoreEntry>, entry: HighScoreEntry) -> Vec<HighScoreEntry> {
    entries.push(entry);
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries.truncate(LEADERBOARD_SIZE);
    entries
}

/// 0-based rank `entry` would take when merged into `entries`, if it makes the cut.
pub fn rank_of(entries: &[HighScoreEntry], entry: &HighScoreEntry) -> Option<usize> {
    let rank = entries.iter().filter(|e| e.points >= entry.points).count();
    (rank < LEADERBOARD_SIZE).then_some(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: u32) -> HighScoreEntry {
        HighScoreEntry {
            name: name.to_string(),
            points,
            difficulty: "EASY".to_string(),
            recorded_at: 0,
        }
    }

    fn full_board() -> Vec<HighScoreEntry> {
        (0..10).map(|i| entry(&format!("P{}", i), 100 - i * 10)).collect()
    }

    #[test]
    fn test_merge_into_empty() {
        let merged = merge_entry(Vec::new(), entry("Ada", 40));
        assert_eq!(merged, vec![entry("Ada", 40)]);
    }

    #[test]
    fn test_merge_high_score_bumps_lowest() {
        let merged = merge_entry(full_board(), entry("New", 55));
        assert_eq!(merged.len(), LEADERBOARD_SIZE);
        assert!(merged.iter().any(|e| e.name == "New"));
        assert!(!merged.iter().any(|e| e.name == "P9"));
        assert!(merged.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn test_merge_low_score_is_dropped() {
        let merged = merge_entry(full_board(), entry("Low", 5));
        assert_eq!(merged, full_board());
    }

    #[test]
    fn test_ties_keep_earliest_first() {
        let board = vec![entry("First", 50), entry("Second", 30)];
        let merged = merge_entry(board, entry("Late", 50));
        let names: Vec<&str> = merged.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Late", "Second"]);
    }

    #[test]
    fn test_rank_of() {
        let board = full_board();
        assert_eq!(rank_of(&board, &entry("Top", 200)), Some(0));
        assert_eq!(rank_of(&board, &entry("Tie", 100)), Some(1));
        assert_eq!(rank_of(&board, &entry("Low", 5)), None);
        assert_eq!(rank_of(&[], &entry("Only", 0)), Some(0));
    }

    #[test]
    fn test_score_line() {
        assert_eq!(entry("A", 30).score_line(), "30 - EASY");
        let size = HighScoreEntry::new("B", 70, "");
        assert_eq!(size.score_line(), "70");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&entry("Ada", 40)).unwrap();
        assert!(json.contains("\"Name\":\"Ada\""));
        assert!(json.contains("\"Points\":40"));

        // Files without timestamps still load
        let old: HighScoreEntry =
            serde_json::from_str(r#"{"Name":"Bo","Points":20,"Difficulty":"HARD"}"#).unwrap();
        assert_eq!(old.recorded_at, 0);
        assert!(old.recorded_date().is_none());
    }

    #[test]
    fn test_recorded_date() {
        let mut e = entry("Ada", 10);
        e.recorded_at = 1_700_000_000;
        assert_eq!(e.recorded_date().as_deref(), Some("2023-11-14"));
    }
}
