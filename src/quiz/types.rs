//! Quiz session data structures.

use crate::catalog::{Catalog, Country, Region};
use crate::core::constants::{EASY_POINTS, HARD_POINTS, MEDIUM_POINTS, SIZE_COMPARISON_POINTS};

/// The three quiz types. Each owns its own leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizMode {
    /// "What is the capital of X?"
    CapitalToCountry,
    /// "Which country has the capital Y?"
    CountryToCapital,
    /// "Is X bigger than Y?"
    SizeComparison,
}

impl QuizMode {
    pub const ALL: [QuizMode; 3] = [
        QuizMode::CapitalToCountry,
        QuizMode::CountryToCapital,
        QuizMode::SizeComparison,
    ];

    /// Stable leaderboard key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::CapitalToCountry => "capToCountry",
            Self::CountryToCapital => "countryToCap",
            Self::SizeComparison => "bigOrSmall",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CapitalToCountry => "Match capital with country",
            Self::CountryToCapital => "Match country with capital",
            Self::SizeComparison => "Larger or smaller",
        }
    }

    pub fn has_difficulty(&self) -> bool {
        !matches!(self, Self::SizeComparison)
    }
}

/// How much of the answer is handed to the player in the matching modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Four multiple-choice alternatives
    Easy,
    /// Every other letter revealed
    Medium,
    /// Only non-letters revealed
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    /// Label stored with leaderboard entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Self::Easy => EASY_POINTS,
            Self::Medium => MEDIUM_POINTS,
            Self::Hard => HARD_POINTS,
        }
    }
}

/// Where a session is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingRoundStart,
    PresentingQuestion,
    AwaitingAnswer,
    ScoringRound,
    SessionComplete,
}

/// What the question asks about.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    CapitalOf { country: String },
    CountryWithCapital { capital: String },
    BiggerThan { country: String, other: String, other_area: f64 },
}

impl Prompt {
    pub fn text(&self) -> String {
        match self {
            Self::CapitalOf { country } => format!("What is the capital of {}?", country),
            Self::CountryWithCapital { capital } => {
                format!("Which country has the capital {}?", capital)
            }
            Self::BiggerThan {
                country,
                other,
                other_area,
            } => format!("Is {} bigger than {} ({} km2)?", country, other, other_area),
        }
    }
}

/// How the player is expected to answer.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerForm {
    /// Pick a letter; options are listed in letter order
    Choices(Vec<String>),
    /// Type the full answer; the pattern shows the revealed characters
    Reveal(String),
    /// Answer y or n
    YesNo,
}

/// A rendered question for the current round.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// 1-based round number
    pub round: usize,
    pub total_rounds: usize,
    pub prompt: Prompt,
    pub form: AnswerForm,
}

/// The scored result of one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub round: usize,
    /// The answer as recorded (chosen option or typed text)
    pub answer: String,
    pub correct: bool,
    pub points_awarded: u32,
    pub summary: String,
}

/// One quiz invocation: ten rounds (fewer if the region is small) for one player.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    pub mode: QuizMode,
    /// None for size comparison
    pub difficulty: Option<Difficulty>,
    pub region: Region,
    pub player_name: String,
    pub(crate) catalog: &'a Catalog,
    pub(crate) pool: Vec<&'a Country>,
    pub(crate) rounds: Vec<&'a Country>,
    /// 0-based index into `rounds`
    pub(crate) current_round: usize,
    pub(crate) alternatives: Vec<&'a Country>,
    pub(crate) comparison: Option<&'a Country>,
    pub phase: QuizPhase,
    pub question: Option<Question>,
    pub points: u32,
    pub correct_answers: usize,
    pub summaries: Vec<String>,
    pub last_outcome: Option<RoundOutcome>,
    pub reject_message: Option<String>,
}

impl<'a> QuizSession<'a> {
    pub fn points_per_correct(&self) -> u32 {
        match self.difficulty {
            Some(difficulty) => difficulty.points(),
            None => SIZE_COMPARISON_POINTS,
        }
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// 1-based number of the round in progress (or the next one to start).
    pub fn round_number(&self) -> usize {
        self.current_round + 1
    }

    pub fn rounds_played(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::SessionComplete
    }

    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.map(|d| d.label()).unwrap_or("")
    }

    pub fn current_country(&self) -> Option<&'a Country> {
        self.rounds.get(self.current_round).copied()
    }
}
