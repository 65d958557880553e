//! Non-blocking keyboard source backed by crossterm.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::engine::CommandSource;
use crate::map::map_key;
use crate::types::Command;

/// Reads at most one pending terminal event per poll.
///
/// Events that are not key presses (resize, mouse, focus) are consumed and
/// reported as [`Command::None`].
#[derive(Debug, Default)]
pub struct TerminalCommands;

impl TerminalCommands {
    pub fn new() -> Self {
        Self
    }
}

impl CommandSource for TerminalCommands {
    fn poll(&mut self) -> Result<Command> {
        if !event::poll(Duration::ZERO)? {
            return Ok(Command::None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(Command::None),
        }
    }
}
