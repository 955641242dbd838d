//! JSON persistence helpers for the scores directory (~/.geogamr/ by default).

use crate::core::constants::SCORES_DIR_NAME;
use crate::error::{GeoError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Get the default ~/.geogamr/ directory path.
pub fn default_scores_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(GeoError::HomeDirUnavailable)?;
    Ok(home_dir.join(SCORES_DIR_NAME))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable save file");
            T::default()
        }
    }
}

/// Save a value as pretty-printed JSON, replacing any previous content.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data).map_err(GeoError::LeaderboardEncode)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("geogamr-persistence-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_default_scores_dir_format() {
        let dir = default_scores_dir().expect("home dir should resolve");
        assert!(dir.ends_with(".geogamr"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default(&test_dir("missing").join("none.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let dir = test_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("corrupt.json");
        fs::write(&path, "[{\"oops\"").unwrap();

        let val: Vec<String> = load_json_or_default(&path);
        assert!(val.is_empty());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = test_dir("roundtrip");
        let path = dir.join("nested").join("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&path);
        assert_eq!(loaded, data);

        fs::remove_dir_all(dir).ok();
    }
}
