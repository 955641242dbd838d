//! Drives a quiz session on the console and shows the game over screen.

use super::console::Console;
use crate::core::constants::CHOICE_LETTERS;
use crate::leaderboard::LeaderboardStore;
use crate::quiz::{AnswerForm, QuizSession};
use crossterm::style::Stylize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Play every round of `session` until it completes.
pub fn play_quiz<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    session: &mut QuizSession<'_>,
    rng: &mut G,
) -> io::Result<()> {
    let mut last_summary = String::new();

    while session.start_round(rng) {
        console.clear(&format!(
            "{}/{} - {} points\n|| {}",
            session.round_number(),
            session.total_rounds(),
            session.points,
            last_summary
        ))?;

        let Some(question) = session.present().cloned() else {
            break;
        };
        console.line(&format!("{}\n", question.prompt.text()))?;

        let label = match &question.form {
            AnswerForm::Choices(options) => {
                for (letter, option) in CHOICE_LETTERS.iter().zip(options) {
                    console.line(&format!("{}. {}", letter, option))?;
                }
                "Your answer: "
            }
            AnswerForm::Reveal(pattern) => {
                console.line(&format!("{}\n", pattern))?;
                "Your answer: "
            }
            AnswerForm::YesNo => "Your answer [y/n]: ",
        };

        loop {
            let input = console.prompt(label)?;
            if let Some(outcome) = session.submit_answer(&input) {
                last_summary = outcome.summary;
                break;
            }
            if let Some(message) = session.reject_message.clone() {
                console.line(&message)?;
            }
        }

        session.next_round();
    }

    Ok(())
}

/// Show the tally, record the score and print the merged leaderboard.
pub fn show_game_over<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &QuizSession<'_>,
    store: &LeaderboardStore,
) -> io::Result<()> {
    console.clear("GAME OVER!")?;
    for summary in &session.summaries {
        console.line(summary)?;
    }
    console.line("")?;
    console.line(&format!(
        "You got {} out of {} correct!",
        session.correct_answers,
        session.rounds_played()
    ))?;
    console.line(&format!("You scored {} points!\n", session.points))?;

    let Some(entry) = session.high_score_entry() else {
        return Ok(());
    };
    let outcome = match store.record_score(session.mode.key(), entry, session.region) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "could not save high score");
            console.line(&format!("Could not save the high score: {}", e))?;
            return Ok(());
        }
    };

    console.line(&format!("{}\n-----------------", "HIGHSCORES".bold()))?;
    for (i, entry) in outcome.entries.iter().enumerate() {
        let marker = if outcome.rank == Some(i) { " <-" } else { "" };
        console.line(&format!(
            "{}. {}{}\n{}\n-----------------",
            i + 1,
            entry.name,
            marker,
            entry.score_line()
        ))?;
    }

    if !outcome.persisted {
        console.line("Play all regions to save to the highscore!")?;
    }
    Ok(())
}
