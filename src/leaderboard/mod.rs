//! Per-mode top-10 high score lists.

pub mod persistence;
pub mod types;

pub use persistence::*;
pub use types::*;
