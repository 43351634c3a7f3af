//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear transition rules.

mod state;
mod word;

pub use state::{GameState, GuessOutcome, PLACEHOLDER, RoundResult, RoundStatus};
pub use word::{MysteryWord, WordError};
