//! Menu/session controller: owns the player name, catalog and score store and
//! runs the main menu loop.

use super::console::Console;
use super::country_card::country_card_lines;
use super::menu::{
    parse_difficulty_choice, parse_main_choice, parse_region_choice, validate_player_name,
    MainChoice, MenuSelection, DIFFICULTY_MENU, MAIN_MENU, REGION_MENU,
};
use super::quiz_screen::{play_quiz, show_game_over};
use crate::catalog::{Catalog, Region};
use crate::error::Result;
use crate::leaderboard::LeaderboardStore;
use crate::quiz::{Difficulty, QuizMode, QuizSession};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

pub struct App<'a, R: BufRead, W: Write, G: Rng> {
    console: Console<R, W>,
    catalog: &'a Catalog,
    store: &'a LeaderboardStore,
    rng: G,
    player_name: String,
}

impl<'a, R: BufRead, W: Write, G: Rng> App<'a, R, W, G> {
    pub fn new(
        console: Console<R, W>,
        catalog: &'a Catalog,
        store: &'a LeaderboardStore,
        rng: G,
    ) -> Self {
        Self {
            console,
            catalog,
            store,
            rng,
            player_name: String::new(),
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Ask for the player's name, then loop on the main menu until exit.
    /// Closed input ends the game like choosing exit.
    pub fn run(&mut self) -> Result<()> {
        match self.run_menus() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("input closed, leaving");
                Ok(())
            }
            other => other.map_err(Into::into),
        }
    }

    fn run_menus(&mut self) -> io::Result<()> {
        self.console.clear("")?;
        self.player_name = self.ask_name()?;
        self.console.line(&format!("Hello {}!", self.player_name))?;

        let mut header = self.player_name.clone();
        loop {
            self.console.clear(&header)?;
            header = self.player_name.clone();
            for line in MAIN_MENU {
                self.console.line(line)?;
            }
            let input = self.console.prompt("\nEnter your choice: ")?;

            match parse_main_choice(&input) {
                Some(MainChoice::Exit) => {
                    self.console.line("Goodbye!")?;
                    return Ok(());
                }
                Some(MainChoice::Search) => self.search()?,
                Some(MainChoice::Play(mode)) => self.play(mode)?,
                None => header = "Invalid choice...".to_string(),
            }
        }
    }

    fn ask_name(&mut self) -> io::Result<String> {
        self.console.line("What is your name?")?;
        loop {
            if let Some(name) = validate_player_name(&self.console.prompt("My name is: ")?) {
                return Ok(name);
            }
        }
    }

    fn play(&mut self, mode: QuizMode) -> io::Result<()> {
        let MenuSelection::Selected(region) = self.choose_region()? else {
            return Ok(());
        };
        let difficulty = if mode.has_difficulty() {
            match self.choose_difficulty()? {
                MenuSelection::Selected(difficulty) => difficulty,
                MenuSelection::Back => return Ok(()),
            }
        } else {
            Difficulty::Easy
        };

        let catalog = self.catalog;
        let mut session = QuizSession::new(
            catalog,
            &self.player_name,
            mode,
            difficulty,
            region,
            &mut self.rng,
        );
        play_quiz(&mut self.console, &mut session, &mut self.rng)?;
        show_game_over(&mut self.console, &session, self.store)?;

        self.console.line("\nGame ended.")?;
        self.console.wait_for_enter()
    }

    fn choose_region(&mut self) -> io::Result<MenuSelection<Region>> {
        self.console.clear(&self.player_name)?;
        loop {
            for line in REGION_MENU {
                self.console.line(line)?;
            }
            let input = self.console.prompt("\nChoose a region [1-5]: ")?;
            match parse_region_choice(&input) {
                Some(selection) => return Ok(selection),
                None => self.console.clear("INVALID CHOICE")?,
            }
        }
    }

    fn choose_difficulty(&mut self) -> io::Result<MenuSelection<Difficulty>> {
        self.console.clear(&self.player_name)?;
        loop {
            for line in DIFFICULTY_MENU {
                self.console.line(line)?;
            }
            let input = self.console.prompt("\nChoose a difficulty [1-3]: ")?;
            match parse_difficulty_choice(&input) {
                Some(selection) => return Ok(selection),
                None => self.console.clear("INVALID CHOICE")?,
            }
        }
    }

    fn search(&mut self) -> io::Result<()> {
        self.console
            .line("Which country?\nPs! Search for 'random', to get a random country!")?;
        let query = self.console.prompt("")?;

        match self.catalog.search(&query, &mut self.rng) {
            Some(country) => {
                self.console.clear(&country.name.to_uppercase())?;
                for line in country_card_lines(country) {
                    self.console.line(&line)?;
                }
            }
            None => {
                self.console.clear(&format!("Searched for {}", query))?;
                self.console
                    .line("Country not found! Did you spell it correctly?")?;
            }
        }

        self.console.line("")?;
        self.console.wait_for_enter()
    }
}
