//! Guess input sources
//!
//! One normalized guess per call, behind a trait so the controller never
//! cares whether input is line-buffered or a single raw keypress.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};

/// Source of player guesses
pub trait InputSource {
    /// Print a prompt and block until the player commits one guess
    ///
    /// # Errors
    /// Returns an I/O error if the input stream fails or closes.
    fn read_guess(&mut self, prompt: &str) -> io::Result<String>;
}

/// Which input source the session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// One trimmed line per guess (Enter commits)
    Line,
    /// One raw keypress per guess
    Key,
}

impl InputMode {
    /// Create input mode from name string
    ///
    /// Supported names: "line", "key", "raw". Defaults to line-buffered if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "key" | "raw" => Self::Key,
            _ => Self::Line,
        }
    }

    /// Construct the matching input source
    #[must_use]
    pub fn into_source(self) -> Box<dyn InputSource> {
        match self {
            Self::Line => Box::new(LineInput),
            Self::Key => Box::new(KeyInput),
        }
    }
}

/// Line-buffered input from stdin
pub struct LineInput;

impl InputSource for LineInput {
    fn read_guess(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        Ok(input.trim().to_string())
    }
}

/// Single-keypress input via the terminal's raw mode
pub struct KeyInput;

impl InputSource for KeyInput {
    fn read_guess(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        enable_raw_mode()?;
        let result = read_key();
        disable_raw_mode()?;

        let key = result?;
        // Raw mode swallowed the echo
        println!("{key}");
        Ok(key)
    }
}

/// Block until a character keypress, mapping Ctrl-C to an interrupt
fn read_key() -> io::Result<String> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        }
        if let KeyCode::Char(c) = key.code {
            return Ok(c.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_name() {
        assert_eq!(InputMode::from_name("line"), InputMode::Line);
        assert_eq!(InputMode::from_name("key"), InputMode::Key);
        assert_eq!(InputMode::from_name("raw"), InputMode::Key);
    }

    #[test]
    fn mode_from_name_defaults_to_line() {
        assert_eq!(InputMode::from_name(""), InputMode::Line);
        assert_eq!(InputMode::from_name("keyboard"), InputMode::Line);
    }
}
