//! Runtime configuration from command-line flags and environment.
//!
//! Precedence is flag, then environment variable, then default.

use crate::core::constants::DEFAULT_DATASET_FILE;
use crate::error::{GeoError, Result};
use std::path::PathBuf;

pub const DATA_ENV: &str = "GEOGAMR_DATA";
pub const SCORES_DIR_ENV: &str = "GEOGAMR_SCORES_DIR";

pub const HELP_TEXT: &str = "GeoGamr - Terminal Geography Quiz

Usage: geogamr [options]

Options:
  --data <path>         Country dataset (default: countries.json, env GEOGAMR_DATA)
  --scores-dir <path>   High score directory (default: ~/.geogamr, env GEOGAMR_SCORES_DIR)
  --version             Show version information
  --help                Show this help message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    /// None means ~/.geogamr
    pub scores_dir: Option<PathBuf>,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Config),
    Version,
    Help,
}

impl Command {
    /// Parse arguments (without the program name), reading defaults through `env`.
    pub fn parse<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut data_path: Option<PathBuf> = None;
        let mut scores_dir: Option<PathBuf> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--version" | "-v" => return Ok(Command::Version),
                "--help" | "-h" => return Ok(Command::Help),
                "--data" => data_path = Some(PathBuf::from(flag_value(&arg, args.next())?)),
                "--scores-dir" => scores_dir = Some(PathBuf::from(flag_value(&arg, args.next())?)),
                other => {
                    return Err(GeoError::Usage(format!(
                        "Unknown option: {}\nRun 'geogamr --help' for usage.",
                        other
                    )))
                }
            }
        }

        let data_path = data_path
            .or_else(|| env(DATA_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE));
        let scores_dir = scores_dir.or_else(|| env(SCORES_DIR_ENV).map(PathBuf::from));

        Ok(Command::Play(Config {
            data_path,
            scores_dir,
        }))
    }

    /// Parse the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| GeoError::Usage(format!("{} needs a value", flag)))
}
