//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the terminal front end,
//! and tests alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, floor upward)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 20 | External tick period (50 Hz) |
//! | `GRAVITY_TICKS` | 25 | Ticks per forced gravity step (~500ms) |
//! | `IDLE_POLL_MS` | 300 | Poll period while waiting for a start key |
//!
//! # Examples
//!
//! ```
//! use bitris_types::{Command, PieceKind, RotateDir, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Shape ids come from any non-negative integer, modulo 7
//! assert_eq!(PieceKind::from_index(7), PieceKind::I);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Rotation directions undo each other
//! assert_eq!(RotateDir::Cw.opposite(), RotateDir::Ccw);
//!
//! // Parse a command
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

pub mod config;

pub use config::{ConfigError, EngineConfig};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Widest board a row word can hold (the piece box may hang 3 columns past it).
pub const MAX_BOARD_WIDTH: u8 = 24;

/// Tallest supported board.
pub const MAX_BOARD_HEIGHT: u8 = 40;

/// Smallest board side; the 4x4 bounding box must fit.
pub const MIN_BOARD_SIDE: u8 = 4;

/// External tick period in milliseconds (20ms = 50 Hz)
pub const TICK_MS: u32 = 20;

/// Ticks per forced gravity step (25 * 20ms ≈ 500ms)
pub const GRAVITY_TICKS: u32 = 25;

/// Poll period while waiting for the first key of a round
pub const IDLE_POLL_MS: u32 = 300;

/// The seven tetromino shape ids, in catalog order
///
/// - **I**: horizontal bar (4x4 box)
/// - **J**: J-shaped (3x3 box)
/// - **L**: L-shaped, mirror of J (3x3 box)
/// - **O**: 2x2 square (2x2 box, rotation is the identity)
/// - **S**: S-shaped (3x3 box)
/// - **T**: T-shaped (3x3 box)
/// - **Z**: Z-shaped, mirror of S (3x3 box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All shape ids in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Map a random value onto a shape id (`n % 7`)
    ///
    /// # Examples
    ///
    /// ```
    /// use bitris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), PieceKind::I);
    /// assert_eq!(PieceKind::from_index(3), PieceKind::O);
    /// assert_eq!(PieceKind::from_index(13), PieceKind::Z);
    /// ```
    pub fn from_index(n: u32) -> Self {
        Self::ALL[(n % 7) as usize]
    }

    /// Position in the catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Quarter-turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    /// 90° clockwise
    Cw,
    /// 90° counter-clockwise
    Ccw,
}

impl RotateDir {
    /// The direction that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            RotateDir::Cw => RotateDir::Ccw,
            RotateDir::Ccw => RotateDir::Cw,
        }
    }
}

/// One discrete player command, consumed once per tick
///
/// `None` means no input was pending (or the key is not bound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// No input this tick
    #[default]
    None,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance the piece one row (may land it)
    SoftDrop,
    /// Advance until the piece lands
    HardDrop,
    /// Leave the session
    Quit,
}

impl Command {
    /// Every command, `None` first.
    pub const ALL: [Command; 8] = [
        Command::None,
        Command::RotateCw,
        Command::RotateCcw,
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::HardDrop,
        Command::Quit,
    ];

    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use bitris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateCcw"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Command::None),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::None => "none",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Quit => "quit",
        }
    }
}

/// Outcome of one play-loop iteration
///
/// Only `Quit` and `GameOver` end a round. `GameOver` is a normal outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    Continue,
    Quit,
    GameOver,
}

impl PlayResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PlayResult::Continue)
    }
}
