//! Hangman - CLI
//!
//! Console hangman with staged gallows illustrations. The dictionary, the
//! art, and the input buffering are all swappable from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    gallows::{AssetError, GallowsArt},
    output::{ConsoleScreen, show_intro},
    session::{GameSession, InputMode, InputSource},
    wordlists::{Dictionary, DictionaryError},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Console hangman with staged gallows illustrations",
    version,
    author
)]
struct Cli {
    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, default_value = "embedded")]
    wordlist: String,

    /// Gallows art: 'embedded' (default) or a directory of state{N}.txt files
    #[arg(short = 'g', long, default_value = "embedded")]
    gallows: String,

    /// Input mode: 'line' (line-buffered, default) or 'key' (single keypress)
    #[arg(short, long, default_value = "line")]
    input: String,

    /// Intro screen shown once before the first round
    #[arg(long)]
    intro: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let art = load_gallows(&cli.gallows)?;

    let session = GameSession::new(dictionary, art);
    let mut input = InputMode::from_name(&cli.input).into_source();
    let mut screen = ConsoleScreen;

    if let Some(intro) = cli.intro.as_deref() {
        show_intro(intro, &mut screen)
            .with_context(|| format!("failed to show intro {}", intro.display()))?;
    }

    loop {
        session.play_round(input.as_mut(), &mut screen)?;
        if !play_again(input.as_mut())? {
            break;
        }
    }

    println!("\nThanks for playing!\n");
    Ok(())
}

/// Resolve the -w flag: the embedded default list or a file on disk
fn load_dictionary(mode: &str) -> Result<Dictionary> {
    match mode {
        "embedded" => Ok(Dictionary::embedded()),
        path => {
            Dictionary::load(path).with_context(|| format!("failed to read word list {path}"))
        }
    }
}

/// Resolve the -g flag: the embedded default art or a stage directory
fn load_gallows(mode: &str) -> Result<GallowsArt> {
    match mode {
        "embedded" => Ok(GallowsArt::embedded()),
        dir => Ok(GallowsArt::load_from_dir(dir)?),
    }
}

fn play_again(input: &mut dyn InputSource) -> Result<bool> {
    let answer = input
        .read_guess("\nPlay again? (y/n)")
        .context("failed to read answer")?;
    Ok(answer.trim().to_lowercase().starts_with('y'))
}

/// Map failure classes to exit codes
///
/// Unreadable resources exit 2, an unusable dictionary 3, an unusable
/// illustration set 4.
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<DictionaryError>().is_some() {
        3
    } else if matches!(
        err.downcast_ref::<AssetError>(),
        Some(AssetError::StageMissing(_) | AssetError::NotEnoughStages(_))
    ) {
        4
    } else {
        2
    }
}
