//! Round controller
//!
//! Drives the input/evaluate/render loop for one round. Rejected guesses
//! (invalid or repeated) re-prompt without consuming a turn; the loop exits
//! only once the round is won or lost.

use super::input::InputSource;
use crate::core::{GameState, GuessOutcome, RoundResult, RoundStatus};
use crate::gallows::GallowsArt;
use crate::output::{Screen, render_board};
use anyhow::{Context, Result};
use colored::Colorize;

/// Play one round to completion
///
/// # Errors
///
/// Fails if input cannot be read, the screen rejects output, or the miss
/// count reaches a stage with no illustration.
pub fn run_round(
    mut state: GameState,
    art: &GallowsArt,
    input: &mut dyn InputSource,
    screen: &mut dyn Screen,
) -> Result<RoundResult> {
    screen.clear()?;
    render_board(screen, art, &state)?;

    loop {
        let raw = input
            .read_guess("Enter a guess")
            .context("failed to read guess")?;

        match state.apply_guess(&raw) {
            GuessOutcome::Invalid => {
                screen.show(
                    &"Illegal character. Please choose a letter from a to z."
                        .yellow()
                        .to_string(),
                )?;
            }
            GuessOutcome::Repeated => {
                screen.show(&"You already guessed that.".yellow().to_string())?;
            }
            GuessOutcome::Hit | GuessOutcome::Miss => {
                screen.clear()?;
                render_board(screen, art, &state)?;

                match state.status() {
                    RoundStatus::Won => {
                        screen.show(&format!("\n{}", "Congrats. You've won.".green().bold()))?;
                        break;
                    }
                    RoundStatus::Lost => {
                        let message =
                            format!("Game over. You lost.\nThe word was: {}", state.word());
                        screen.show(&format!("\n{}", message.red().bold()))?;
                        break;
                    }
                    RoundStatus::InProgress => {}
                }
            }
        }
    }

    state.into_result().context("round ended without a result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MysteryWord;
    use std::collections::VecDeque;
    use std::io;

    /// Input source that replays a fixed script
    struct ScriptedInput {
        guesses: VecDeque<String>,
    }

    impl ScriptedInput {
        fn new(guesses: &[&str]) -> Self {
            Self {
                guesses: guesses.iter().map(ToString::to_string).collect(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn read_guess(&mut self, _prompt: &str) -> io::Result<String> {
            self.guesses.pop_front().ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
            })
        }
    }

    /// Screen that records everything shown to it
    #[derive(Default)]
    struct RecordingScreen {
        lines: Vec<String>,
    }

    impl Screen for RecordingScreen {
        fn clear(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn show(&mut self, text: &str) -> io::Result<()> {
            self.lines.push(text.to_string());
            Ok(())
        }
    }

    fn play(word: &str, script: &[&str]) -> (Result<RoundResult>, RecordingScreen) {
        let art = GallowsArt::embedded();
        let state = GameState::new(MysteryWord::new(word).unwrap(), art.max_misses());
        let mut input = ScriptedInput::new(script);
        let mut screen = RecordingScreen::default();

        let result = run_round(state, &art, &mut input, &mut screen);
        (result, screen)
    }

    #[test]
    fn all_hits_win_the_round() {
        let (result, screen) = play("cat", &["c", "a", "t"]);

        assert_eq!(
            result.unwrap(),
            RoundResult::Won {
                word: MysteryWord::new("cat").unwrap()
            }
        );
        assert!(screen.lines.iter().any(|line| line.contains("won")));
    }

    #[test]
    fn eight_misses_lose_the_round() {
        let (result, screen) = play("cat", &["b", "d", "e", "f", "g", "h", "i", "j"]);

        assert_eq!(
            result.unwrap(),
            RoundResult::Lost {
                word: MysteryWord::new("cat").unwrap()
            }
        );
        assert!(
            screen
                .lines
                .iter()
                .any(|line| line.contains("The word was") && line.contains("cat"))
        );
    }

    #[test]
    fn rejected_guesses_do_not_consume_turns() {
        // A repeat, a digit, and a two-letter guess interleaved with the
        // winning letters must not end or advance the round
        let (result, screen) = play("cat", &["x", "x", "3", "ab", "c", "a", "t"]);

        assert!(matches!(result.unwrap(), RoundResult::Won { .. }));
        assert!(
            screen
                .lines
                .iter()
                .any(|line| line.contains("already guessed"))
        );
        assert!(
            screen
                .lines
                .iter()
                .any(|line| line.contains("Illegal character"))
        );
    }

    #[test]
    fn loss_renders_final_stage() {
        let art = GallowsArt::embedded();
        let (_, screen) = play("cat", &["b", "d", "e", "f", "g", "h", "i", "j"]);

        let final_stage = art.stage(8).unwrap();
        assert!(screen.lines.iter().any(|line| line == final_stage));
    }

    #[test]
    fn exhausted_input_surfaces_as_error() {
        let (result, _) = play("cat", &["c"]);
        assert!(result.is_err());
    }
}
