//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`types::Command`] and exposes the terminal
//! as an engine [`engine::CommandSource`]. One event is consumed per poll, so
//! one command reaches the engine per tick.

pub mod map;
pub mod terminal;

pub use bitris_engine as engine;
pub use bitris_types as types;

pub use map::{map_key, should_quit};
pub use terminal::TerminalCommands;
