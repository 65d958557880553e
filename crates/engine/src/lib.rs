//! Engine - the tick-driven play loop
//!
//! Sequencing on top of the pure core state:
//!
//! - [`timer`]: fixed-cadence gravity trigger
//! - [`resolver`]: one command per tick, with rollback of blocked moves
//! - [`session`]: the WaitingForStart → Playing → GameOver/Exited state machine
//!   and the collaborator traits it is driven through
//!
//! Single-threaded: one [`Session`] exclusively owns its state, and the only
//! suspension point is the wait between ticks.

pub mod resolver;
pub mod session;
pub mod timer;

pub use bitris_core as core;
pub use bitris_types as types;

pub use resolver::{resolve, InputFlags};
pub use session::{CommandSource, Phase, Renderer, Session, SleepScheduler, TickScheduler};
pub use timer::GravityTimer;
