//! Quiz sessions: capital matching, country matching and size comparison.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
