//! Error types for geogamr.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GeoError.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that stop the game from starting or a score from being saved.
///
/// Wrong or unparseable answers are never errors; they score as wrong.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("game files missing: {}", .path.display())]
    DatasetMissing { path: PathBuf },

    #[error("malformed country dataset {}: {source}", .path.display())]
    DatasetMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("country dataset contains no countries")]
    EmptyCatalog,

    #[error("{0}")]
    Usage(String),

    #[error("could not determine home directory")]
    HomeDirUnavailable,

    #[error("could not encode leaderboard: {0}")]
    LeaderboardEncode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
