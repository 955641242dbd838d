//! Console presentation: screens, menus and the app controller.
//! Kept apart from the quiz engine, which never touches the terminal.

pub mod app;
pub mod console;
pub mod country_card;
pub mod menu;
pub mod quiz_screen;

pub use app::App;
pub use console::Console;
