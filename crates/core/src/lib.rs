//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the engine state and every geometric rule of the game. It
//! has no dependencies on terminals, timing, or I/O:
//!
//! - **Deterministic**: the same seed and commands produce the same game
//! - **Allocation-free**: rows are packed bit words in fixed-capacity storage
//! - **Infallible**: bounds are static; invariants are debug assertions
//!
//! # Module Structure
//!
//! - [`board`]: packed rows of landed cells, row queries, and line collapsing
//! - [`pieces`]: the seven shapes as cells inside a 2×2, 3×3, or 4×4 box
//! - [`rotation`]: in-place quarter turns of a box bitmap
//! - [`active`]: the falling piece, collision testing, and merging
//! - [`rng`]: random source and the next-piece preview
//! - [`game_state`]: the explicit state object tying the above together
//! - [`snapshot`]: by-value board copy handed to renderers
//!
//! # Rules
//!
//! - No wall kicks: a move or rotation that collides is undone
//! - Landing is detected before the downward move that would cause it
//! - Full rows vanish as soon as a piece lands; rows above slide down
//! - The game ends when a freshly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use bitris_core::GameState;
//!
//! let mut game = GameState::new(12345);
//!
//! game.try_shift(1);
//! game.drop_to_floor();
//! let cleared = game.land();
//!
//! assert_eq!(cleared, 0);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod active;
pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod snapshot;

pub use bitris_types as types;

// Re-export commonly used types for convenience
pub use active::ActivePiece;
pub use board::{Board, Row, Rows};
pub use game_state::GameState;
pub use pieces::{get_shape, BoxBits, Shape, SHAPES};
pub use rng::{PieceQueue, RandomSource, SimpleRng};
pub use snapshot::BoardSnapshot;
