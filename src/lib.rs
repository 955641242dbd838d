//! GeoGamr - Terminal Geography Quiz Library
//!
//! Exposes the quiz engine (catalog, round generation, sessions, leaderboards)
//! for the binary and for testing.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod leaderboard;
pub mod logging;
pub mod quiz;
pub mod rounds;
pub mod text;
pub mod ui;
pub mod utils;

pub use catalog::{Catalog, Continent, Country, Region};
pub use error::{GeoError, Result};
pub use leaderboard::{HighScoreEntry, LeaderboardStore, RecordOutcome};
pub use quiz::{
    AnswerForm, Difficulty, Prompt, QuizMode, QuizPhase, QuizSession, Question, RoundOutcome,
};
