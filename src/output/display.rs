//! Screen abstraction and board rendering

use super::formatters::{guessed_line, reveal_line};
use crate::core::GameState;
use crate::gallows::GallowsArt;
use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// How long the intro screen stays up before the first round
const INTRO_PAUSE: Duration = Duration::from_secs(2);

/// Output capability: clearing the screen and showing text
///
/// Core logic talks to this trait only; the console implementation handles
/// the terminal, and tests substitute a recording fake.
pub trait Screen {
    /// Clear the screen and move the cursor home
    ///
    /// # Errors
    /// Returns an I/O error if the terminal rejects the commands.
    fn clear(&mut self) -> io::Result<()>;

    /// Show one block of text, followed by a newline
    ///
    /// # Errors
    /// Returns an I/O error if writing to the output fails.
    fn show(&mut self, text: &str) -> io::Result<()>;
}

/// Screen backed by the real terminal
pub struct ConsoleScreen;

impl Screen for ConsoleScreen {
    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

/// Render the full board: gallows stage, reveal pattern, guessed letters
///
/// # Errors
///
/// Fails if the current miss count has no illustration or the screen
/// rejects output.
pub fn render_board(screen: &mut dyn Screen, art: &GallowsArt, state: &GameState) -> Result<()> {
    let stage = art.stage(state.misses())?;
    screen.show(stage)?;
    screen.show(&format!("\n{}\n", reveal_line(state)))?;
    screen.show(&format!("Guessed letters: {}", guessed_line(state)))?;
    Ok(())
}

/// Show an intro screen, hold it briefly, then clear
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or the screen rejects
/// output.
pub fn show_intro<P: AsRef<Path>>(path: P, screen: &mut dyn Screen) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    screen.show(&text)?;
    thread::sleep(INTRO_PAUSE);
    screen.clear()
}
