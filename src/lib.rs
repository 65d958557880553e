//! Bitris (workspace facade crate).
//!
//! Re-exports the workspace members under one roof as
//! `bitris::{core,engine,input,term,types}`; the implementation lives in the
//! dedicated crates under `crates/`.

pub use bitris_core as core;
pub use bitris_engine as engine;
pub use bitris_input as input;
pub use bitris_term as term;
pub use bitris_types as types;
