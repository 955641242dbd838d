// Quiz shape
pub const ROUNDS_PER_QUIZ: usize = 10;
pub const ALTERNATIVES_PER_QUESTION: usize = 4;
pub const CHOICE_LETTERS: [char; ALTERNATIVES_PER_QUESTION] = ['A', 'B', 'C', 'D'];

// Points per correct answer
pub const EASY_POINTS: u32 = 10;
pub const MEDIUM_POINTS: u32 = 15;
pub const HARD_POINTS: u32 = 30;
pub const SIZE_COMPARISON_POINTS: u32 = 10;

// Reveal patterns
pub const BLANK_MARKER: char = '_';

// Leaderboards
pub const LEADERBOARD_SIZE: usize = 10;
pub const LEADERBOARD_FILE_PREFIX: &str = "_HS_";

// Defaults for configuration
pub const DEFAULT_DATASET_FILE: &str = "countries.json";
pub const SCORES_DIR_NAME: &str = ".geogamr";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Search query that returns a random country instead of a name match.
pub const RANDOM_SEARCH_QUERY: &str = "random";
