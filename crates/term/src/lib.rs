//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep terminal ownership scoped ([`TerminalSession`] restores on drop)
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod ticker;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalSession};
pub use ticker::Ticker;
