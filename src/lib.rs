//! TUI Snake (workspace facade crate).
//!
//! Re-exports the member crates as `tui_snake::{core,input,term,types}` and
//! adds the binary-level [`config`] (environment settings and logging) and
//! [`app`] (input/scheduler/engine glue used by the run loop).

pub mod app;
pub mod config;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
