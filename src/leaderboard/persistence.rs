//! Leaderboard persistence: one JSON file per quiz mode in the scores directory.

use super::types::{merge_entry, rank_of, HighScoreEntry};
use crate::catalog::Region;
use crate::core::constants::LEADERBOARD_FILE_PREFIX;
use crate::error::Result;
use crate::utils::persistence::{default_scores_dir, load_json_or_default, save_json};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of recording a finished quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// The merged top ten, whether or not it was written
    pub entries: Vec<HighScoreEntry>,
    /// 0-based position of the new entry, None if it missed the top ten
    pub rank: Option<usize>,
    /// False when the quiz was not over all regions
    pub persisted: bool,
}

/// Reads and overwrites the per-mode leaderboard files.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    dir: PathBuf,
}

impl LeaderboardStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in ~/.geogamr/.
    pub fn in_home() -> Result<Self> {
        Ok(Self::new(default_scores_dir()?))
    }

    /// Creates a store in a unique temporary directory
    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        Self::new(std::env::temp_dir().join(format!(
            "geogamr-test-{}-{}",
            std::process::id(),
            test_id
        )))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File for `mode_key`, e.g. `_HS_capToCountry.json`.
    pub fn path_for(&self, mode_key: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}.json", LEADERBOARD_FILE_PREFIX, mode_key))
    }

    /// Load a mode's leaderboard. Missing or corrupt files give an empty list.
    pub fn load(&self, mode_key: &str) -> Vec<HighScoreEntry> {
        let entries: Vec<HighScoreEntry> = load_json_or_default(&self.path_for(mode_key));
        debug!(mode = mode_key, entries = entries.len(), "loaded leaderboard");
        entries
    }

    /// Merge `entry` into the mode's top ten. Only quizzes over all regions are
    /// written back; other regions get the merged view without touching the file.
    pub fn record_score(
        &self,
        mode_key: &str,
        entry: HighScoreEntry,
        region: Region,
    ) -> Result<RecordOutcome> {
        let existing = self.load(mode_key);
        let rank = rank_of(&existing, &entry);
        let entries = merge_entry(existing, entry);

        let persisted = region.saves_scores();
        if persisted {
            save_json(&self.path_for(mode_key), &entries)?;
            info!(mode = mode_key, rank = ?rank, "leaderboard saved");
        } else {
            debug!(
                mode = mode_key,
                region = region.name(),
                "practice region, leaderboard not saved"
            );
        }

        Ok(RecordOutcome {
            entries,
            rank,
            persisted,
        })
    }

    /// Remove the store directory. Test cleanup only.
    #[cfg(test)]
    pub(crate) fn remove(&self) {
        std::fs::remove_dir_all(&self.dir).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(name: &str, points: u32) -> HighScoreEntry {
        HighScoreEntry::new(name, points, "HARD")
    }

    #[test]
    fn test_path_per_mode() {
        let store = LeaderboardStore::new("/tmp/scores");
        assert_eq!(
            store.path_for("capToCountry"),
            PathBuf::from("/tmp/scores/_HS_capToCountry.json")
        );
        assert_ne!(store.path_for("countryToCap"), store.path_for("bigOrSmall"));
    }

    #[test]
    fn test_first_score_creates_file() {
        let store = LeaderboardStore::new_for_test();
        let outcome = store
            .record_score("capToCountry", entry("Ada", 90), Region::All)
            .unwrap();
        assert!(outcome.persisted);
        assert_eq!(outcome.rank, Some(0));
        assert!(store.path_for("capToCountry").exists());
        assert_eq!(store.load("capToCountry").len(), 1);
        store.remove();
    }

    #[test]
    fn test_practice_region_does_not_write() {
        let store = LeaderboardStore::new_for_test();
        store
            .record_score("bigOrSmall", entry("Ada", 40), Region::All)
            .unwrap();
        let before = fs::read_to_string(store.path_for("bigOrSmall")).unwrap();

        let outcome = store
            .record_score("bigOrSmall", entry("Bo", 100), Region::Europe)
            .unwrap();
        assert!(!outcome.persisted);
        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.entries[0].name, "Bo");

        let after = fs::read_to_string(store.path_for("bigOrSmall")).unwrap();
        assert_eq!(before, after);
        store.remove();
    }

    #[test]
    fn test_practice_region_with_no_file_stays_absent() {
        let store = LeaderboardStore::new_for_test();
        store
            .record_score("countryToCap", entry("Ada", 40), Region::Asia)
            .unwrap();
        assert!(!store.path_for("countryToCap").exists());
        store.remove();
    }

    #[test]
    fn test_modes_do_not_share_storage() {
        let store = LeaderboardStore::new_for_test();
        store
            .record_score("capToCountry", entry("Ada", 90), Region::All)
            .unwrap();
        assert!(store.load("countryToCap").is_empty());
        assert!(store.load("bigOrSmall").is_empty());
        store.remove();
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let store = LeaderboardStore::new_for_test();
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.path_for("capToCountry"), "not json at all").unwrap();

        let outcome = store
            .record_score("capToCountry", entry("Ada", 10), Region::All)
            .unwrap();
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(store.load("capToCountry")[0].name, "Ada");
        store.remove();
    }
}
