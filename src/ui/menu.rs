//! Menus as pure parsers returning structured choices.

use crate::catalog::Region;
use crate::quiz::{Difficulty, QuizMode};

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Play(QuizMode),
    Search,
    Exit,
}

/// A sub-menu answer: a value, or back to the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection<T> {
    Selected(T),
    Back,
}

pub const MAIN_MENU: &[&str] = &[
    "1. Match capital with country",
    "2. Match country with capital",
    "3. Larger or smaller",
    "4. Search for a country",
    "x. Exit",
];

pub const REGION_MENU: &[&str] = &[
    "Which region?\n1 - 4 is practice mode\n5 is the challenge\n",
    "1. Europe",
    "2. Asia & Oceania",
    "3. Africa",
    "4. America (North & South)",
    "5. All",
    "x. Return to main menu",
];

pub const DIFFICULTY_MENU: &[&str] = &[
    "Which difficulty?",
    "1. Easy",
    "2. Medium",
    "3. Hard",
    "x. Return",
];

pub fn parse_main_choice(input: &str) -> Option<MainChoice> {
    match input.trim().to_lowercase().as_str() {
        "1" => Some(MainChoice::Play(QuizMode::CapitalToCountry)),
        "2" => Some(MainChoice::Play(QuizMode::CountryToCapital)),
        "3" => Some(MainChoice::Play(QuizMode::SizeComparison)),
        "4" => Some(MainChoice::Search),
        "x" => Some(MainChoice::Exit),
        _ => None,
    }
}

pub fn parse_region_choice(input: &str) -> Option<MenuSelection<Region>> {
    let region = match input.trim() {
        "1" => Region::Europe,
        "2" => Region::Asia,
        "3" => Region::Africa,
        "4" => Region::America,
        "5" => Region::All,
        "x" | "X" => return Some(MenuSelection::Back),
        _ => return None,
    };
    Some(MenuSelection::Selected(region))
}

pub fn parse_difficulty_choice(input: &str) -> Option<MenuSelection<Difficulty>> {
    match input.trim() {
        "x" | "X" => Some(MenuSelection::Back),
        choice => {
            let index: usize = choice.parse().ok()?;
            (1..=Difficulty::ALL.len())
                .contains(&index)
                .then(|| MenuSelection::Selected(Difficulty::from_index(index - 1)))
        }
    }
}

/// Trimmed player name, or None if blank.
pub fn validate_player_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_choice() {
        assert_eq!(
            parse_main_choice("1"),
            Some(MainChoice::Play(QuizMode::CapitalToCountry))
        );
        assert_eq!(
            parse_main_choice("3"),
            Some(MainChoice::Play(QuizMode::SizeComparison))
        );
        assert_eq!(parse_main_choice("4"), Some(MainChoice::Search));
        assert_eq!(parse_main_choice("X"), Some(MainChoice::Exit));
        assert_eq!(parse_main_choice("7"), None);
    }

    #[test]
    fn test_region_choice() {
        assert_eq!(
            parse_region_choice("2"),
            Some(MenuSelection::Selected(Region::Asia))
        );
        assert_eq!(
            parse_region_choice("5"),
            Some(MenuSelection::Selected(Region::All))
        );
        assert_eq!(parse_region_choice("x"), Some(MenuSelection::Back));
        assert_eq!(parse_region_choice("6"), None);
        assert_eq!(parse_region_choice(""), None);
    }

    #[test]
    fn test_difficulty_choice() {
        assert_eq!(
            parse_difficulty_choice("1"),
            Some(MenuSelection::Selected(Difficulty::Easy))
        );
        assert_eq!(
            parse_difficulty_choice("3"),
            Some(MenuSelection::Selected(Difficulty::Hard))
        );
        assert_eq!(parse_difficulty_choice("X"), Some(MenuSelection::Back));
        assert_eq!(parse_difficulty_choice("0"), None);
        assert_eq!(parse_difficulty_choice("4"), None);
        assert_eq!(parse_difficulty_choice("hard"), None);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(validate_player_name("  Ada "), Some("Ada".to_string()));
        assert_eq!(validate_player_name("   "), None);
        assert_eq!(validate_player_name(""), None);
    }
}
