//! Round and session orchestration
//!
//! The per-round controller loop, the input abstraction, and the session
//! object owning long-lived game resources.

pub mod input;
mod game;
mod round;

pub use game::GameSession;
pub use input::{InputMode, InputSource, KeyInput, LineInput};
pub use round::run_round;
