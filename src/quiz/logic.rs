//! Quiz session state machine.
//!
//! A session walks every round through
//! `AwaitingRoundStart -> PresentingQuestion -> AwaitingAnswer -> ScoringRound`
//! and ends in `SessionComplete`. Rendering and input live in the ui module.

use super::{
    AnswerForm, Difficulty, Prompt, QuizMode, QuizPhase, QuizSession, Question, RoundOutcome,
};
use crate::catalog::{Catalog, Country, Region};
use crate::core::constants::{BLANK_MARKER, CHOICE_LETTERS, ROUNDS_PER_QUIZ};
use crate::leaderboard::HighScoreEntry;
use crate::rounds::{build_alternatives, pick_comparison, sample_rounds};
use crate::text::answers_match;
use rand::Rng;
use tracing::{debug, info, warn};

/// Pattern shown for free-typed answers, or None for Easy (multiple choice).
///
/// Medium reveals the first character and every even-position letter; Hard reveals
/// no letters. Non-letters (spaces, hyphens, apostrophes) are always shown.
pub fn reveal_pattern(target: &str, difficulty: Difficulty) -> Option<String> {
    let pattern = match difficulty {
        Difficulty::Easy => return None,
        Difficulty::Medium => target
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 || !c.is_alphabetic() || i % 2 == 0 {
                    c
                } else {
                    BLANK_MARKER
                }
            })
            .collect(),
        Difficulty::Hard => target
            .chars()
            .map(|c| if c.is_alphabetic() { BLANK_MARKER } else { c })
            .collect(),
    };
    Some(pattern)
}

/// Map a letter answer (A-D, any case) to an option index.
pub fn parse_choice(input: &str, options: usize) -> Option<usize> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    CHOICE_LETTERS
        .iter()
        .take(options)
        .position(|&l| l == letter)
}

/// Parse a y/n answer.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

impl<'a> QuizSession<'a> {
    /// Start a session over `region`. Rounds are drawn up front.
    /// `difficulty` is ignored for size comparison.
    pub fn new<R: Rng>(
        catalog: &'a Catalog,
        player_name: &str,
        mode: QuizMode,
        difficulty: Difficulty,
        region: Region,
        rng: &mut R,
    ) -> Self {
        let pool = catalog.filter_by_region(region);
        let rounds = sample_rounds(&pool, ROUNDS_PER_QUIZ, rng);
        let phase = if rounds.is_empty() {
            warn!(region = region.name(), "region has no countries, nothing to play");
            QuizPhase::SessionComplete
        } else {
            QuizPhase::AwaitingRoundStart
        };
        info!(
            mode = mode.key(),
            region = region.name(),
            rounds = rounds.len(),
            "quiz session started"
        );

        Self {
            mode,
            difficulty: mode.has_difficulty().then_some(difficulty),
            region,
            player_name: player_name.to_string(),
            catalog,
            pool,
            rounds,
            current_round: 0,
            alternatives: Vec::new(),
            comparison: None,
            phase,
            question: None,
            points: 0,
            correct_answers: 0,
            summaries: Vec::new(),
            last_outcome: None,
            reject_message: None,
        }
    }

    /// Build the question for the current round.
    /// Returns false if no round is waiting to start.
    pub fn start_round<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.phase != QuizPhase::AwaitingRoundStart {
            return false;
        }
        let Some(target) = self.current_country() else {
            self.phase = QuizPhase::SessionComplete;
            return false;
        };

        let (prompt, form) = match self.mode {
            QuizMode::CapitalToCountry | QuizMode::CountryToCapital => {
                let prompt = match self.mode {
                    QuizMode::CapitalToCountry => Prompt::CapitalOf {
                        country: target.name.clone(),
                    },
                    _ => Prompt::CountryWithCapital {
                        capital: target.capital.clone(),
                    },
                };
                let difficulty = self.difficulty.unwrap_or(Difficulty::Easy);
                let form = match reveal_pattern(self.expected_answer(target), difficulty) {
                    Some(pattern) => AnswerForm::Reveal(pattern),
                    None => {
                        self.alternatives = build_alternatives(&self.pool, target, rng);
                        AnswerForm::Choices(
                            self.alternatives
                                .iter()
                                .map(|c| self.expected_answer(c).to_string())
                                .collect(),
                        )
                    }
                };
                (prompt, form)
            }
            QuizMode::SizeComparison => {
                let catalog = self.catalog;
                let Some(other) = pick_comparison(catalog.countries(), target, rng) else {
                    warn!(
                        country = %target.name,
                        "no other country to compare against, ending quiz"
                    );
                    self.phase = QuizPhase::SessionComplete;
                    return false;
                };
                self.comparison = Some(other);
                let prompt = Prompt::BiggerThan {
                    country: target.name.clone(),
                    other: other.name.clone(),
                    other_area: other.area,
                };
                (prompt, AnswerForm::YesNo)
            }
        };

        self.question = Some(Question {
            round: self.round_number(),
            total_rounds: self.total_rounds(),
            prompt,
            form,
        });
        self.phase = QuizPhase::PresentingQuestion;
        true
    }

    /// Hand the question to the presentation layer and start waiting for an answer.
    pub fn present(&mut self) -> Option<&Question> {
        if self.phase != QuizPhase::PresentingQuestion {
            return None;
        }
        self.phase = QuizPhase::AwaitingAnswer;
        self.question.as_ref()
    }

    /// Score the player's raw input for the current round.
    ///
    /// Returns None without consuming the round if the session is not waiting for an
    /// answer, or if a size comparison answer is not y/n (see `reject_message`).
    pub fn submit_answer(&mut self, input: &str) -> Option<RoundOutcome> {
        if self.phase != QuizPhase::AwaitingAnswer {
            return None;
        }
        let target = self.current_country()?;

        let (answer, correct) = match self.mode {
            QuizMode::SizeComparison => {
                let other = self.comparison?;
                let Some(says_bigger) = parse_yes_no(input) else {
                    self.reject_message = Some("Invalid answer!".to_string());
                    return None;
                };
                // Equal areas satisfy neither branch and score as wrong
                let correct = if says_bigger {
                    target.is_bigger_than(other)
                } else {
                    target.is_smaller_than(other)
                };
                (input.trim().to_lowercase(), correct)
            }
            _ => match self.difficulty.unwrap_or(Difficulty::Easy) {
                Difficulty::Easy => match parse_choice(input, self.alternatives.len()) {
                    Some(index) => {
                        let chosen = self.alternatives[index];
                        (
                            self.expected_answer(chosen).to_string(),
                            chosen.same_as(target),
                        )
                    }
                    None => (input.trim().to_string(), false),
                },
                Difficulty::Medium | Difficulty::Hard => (
                    input.to_string(),
                    answers_match(input, self.expected_answer(target)),
                ),
            },
        };

        self.reject_message = None;
        self.phase = QuizPhase::ScoringRound;
        let outcome = self.record_round(target, answer, correct);
        self.last_outcome = Some(outcome.clone());
        Some(outcome)
    }

    /// Leave the scoring phase: move to the next round or complete the session.
    pub fn next_round(&mut self) -> bool {
        if self.phase != QuizPhase::ScoringRound {
            return false;
        }
        self.current_round += 1;
        self.question = None;
        self.alternatives.clear();
        self.comparison = None;
        if self.current_round < self.rounds.len() {
            self.phase = QuizPhase::AwaitingRoundStart;
        } else {
            self.phase = QuizPhase::SessionComplete;
            info!(
                mode = self.mode.key(),
                points = self.points,
                correct = self.correct_answers,
                "quiz session complete"
            );
        }
        true
    }

    /// The leaderboard entry for a finished session.
    pub fn high_score_entry(&self) -> Option<HighScoreEntry> {
        if !self.is_complete() {
            return None;
        }
        Some(HighScoreEntry::new(
            &self.player_name,
            self.points,
            self.difficulty_label(),
        ))
    }

    fn expected_answer<'c>(&self, country: &'c Country) -> &'c str {
        match self.mode {
            QuizMode::CountryToCapital => &country.name,
            _ => &country.capital,
        }
    }

    fn record_round(&mut self, target: &Country, answer: String, correct: bool) -> RoundOutcome {
        let points_awarded = if correct { self.points_per_correct() } else { 0 };
        if correct {
            self.points += points_awarded;
            self.correct_answers += 1;
        }

        let verdict = if correct { "CORRECT!" } else { "WRONG!" };
        let summary = match (self.mode, self.comparison) {
            (QuizMode::SizeComparison, Some(other)) => format!(
                "Is {} ({} km2) bigger than {} ({} km2)? Your answer: {} | {} +{}",
                target.name, target.area, other.name, other.area, answer, verdict, points_awarded
            ),
            _ => format!(
                "Your answer: {} | {} +{} The capital of {} is {}",
                answer, verdict, points_awarded, target.name, target.capital
            ),
        };
        debug!(round = self.round_number(), correct, "round scored");
        self.summaries.push(summary.clone());

        RoundOutcome {
            round: self.round_number(),
            answer,
            correct,
            points_awarded,
            summary,
        }
    }
}
