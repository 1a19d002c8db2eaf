//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, state management, and simulation logic.
//! It has **no dependencies** on UI, timers, or I/O (only the `log` facade), making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Every rule is reachable through the public engine API
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game`]: [`GameEngine`] with `tick`, `set_direction`, `reset`
//! - [`config`]: grid size, tick interval, food placement policy
//! - [`rng`]: seeded LCG used for food placement
//! - [`snapshot`]: read-only state view for rendering
//!
//! # Game Rules
//!
//! - The snake starts as one segment at the grid center, heading right
//! - Each tick moves the head one cell; the tail follows unless food was eaten
//! - Leaving the grid or entering any snake cell ends the round
//! - A turn to the exact opposite heading is ignored
//! - Once the round is over only [`GameEngine::reset`] changes anything
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{EngineConfig, GameEngine, TickOutcome};
//! use tui_snake_types::{Direction, Position};
//!
//! let mut game = GameEngine::new(EngineConfig::default(), 12345);
//! assert_eq!(game.head(), Position::new(10, 10));
//!
//! // Reversing is rejected, turning is not.
//! assert!(!game.set_direction(Direction::Left));
//! assert!(game.set_direction(Direction::Down));
//!
//! assert_ne!(game.tick(), TickOutcome::Idle);
//! assert_eq!(game.head(), Position::new(10, 11));
//!
//! let snap = game.snapshot();
//! assert!(!snap.game_over);
//! ```
//!
//! # Timing
//!
//! The engine is step-based; the host calls [`GameEngine::tick`] every
//! [`EngineConfig::tick_interval_ms`] (200ms by default).

pub mod config;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{EngineConfig, FoodPlacement};
pub use game::{Collision, GameEngine, TickOutcome};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
