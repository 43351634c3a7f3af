//! Terminal output
//!
//! Screen abstraction, board rendering, and string formatting.

pub mod display;
pub mod formatters;

pub use display::{ConsoleScreen, Screen, render_board, show_intro};
pub use formatters::{guessed_line, reveal_line};
