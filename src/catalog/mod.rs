//! Country catalog: the immutable country list for a session and its region views.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
