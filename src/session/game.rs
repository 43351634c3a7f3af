//! Game session
//!
//! Owns the resources that outlive any single round. The replay loop is the
//! caller's: each `play_round` call is one complete round.

use super::input::InputSource;
use super::round::run_round;
use crate::core::{GameState, RoundResult};
use crate::gallows::GallowsArt;
use crate::output::Screen;
use crate::wordlists::Dictionary;
use anyhow::Result;

/// Long-lived game resources: the dictionary and the illustration set
pub struct GameSession {
    dictionary: Dictionary,
    art: GallowsArt,
}

impl GameSession {
    #[must_use]
    pub fn new(dictionary: Dictionary, art: GallowsArt) -> Self {
        Self { dictionary, art }
    }

    /// Play one round: draw a word, then loop until won or lost
    ///
    /// The miss limit follows the illustration set.
    ///
    /// # Errors
    ///
    /// Fails if the dictionary yields no usable word, input cannot be read,
    /// or rendering fails.
    pub fn play_round(
        &self,
        input: &mut dyn InputSource,
        screen: &mut dyn Screen,
    ) -> Result<RoundResult> {
        let word = self.dictionary.pick()?;
        let state = GameState::new(word, self.art.max_misses());
        run_round(state, &self.art, input, screen)
    }
}
