//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: board snapshots are drawn into a
//! plain framebuffer of styled cells, which is then flushed to the terminal as
//! a diff against the previous frame.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`game_view`]: snapshot → framebuffer (pure, unit-tested)
//! - [`renderer`]: crossterm output and the engine [`engine::Renderer`] impl

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use bitris_core as core;
pub use bitris_engine as engine;
pub use bitris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, Screen, TerminalRenderer};
