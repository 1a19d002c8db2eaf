//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a square lattice of `GRID_SIZE` x `GRID_SIZE` cells,
//! indexed from the top-left corner:
//!
//! - **x** grows to the right (columns `0..GRID_SIZE`)
//! - **y** grows downwards (rows `0..GRID_SIZE`)
//! - **Spawn position**: grid center, `(GRID_SIZE / 2, GRID_SIZE / 2)`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Interval between simulation steps |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Position, GRID_SIZE};
//!
//! let head = Position::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Position::new(11, 10));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(Direction::from_delta(0, -1), Some(Direction::Up));
//!
//! assert_ne!(GameAction::Turn(Direction::Up), GameAction::Restart);
//! assert_eq!(GRID_SIZE, 20);
//! ```

/// Grid cells per side (20 x 20)
pub const GRID_SIZE: u16 = 20;

/// Interval between simulation steps in milliseconds
pub const TICK_MS: u32 = 200;


/// A cell coordinate on the grid.
///
/// Coordinates are signed so that a step off the edge is representable and
/// can be detected with [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the position lies inside a `grid_size` x `grid_size` grid.
    pub fn in_bounds(self, grid_size: u16) -> bool {
        let n = grid_size as i32;
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }
}

/// Movement direction of the snake
///
/// Each direction is a unit vector on the grid:
/// - **Up**: `(0, -1)`
/// - **Down**: `(0, 1)`
/// - **Left**: `(-1, 0)`
/// - **Right**: `(1, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a unit vector back to a direction
    ///
    /// Returns `None` for anything other than the four unit vectors.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` points the exact other way
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Player intents produced by the input layer
///
/// `Turn` maps to `GameEngine::set_direction`, `Restart` to `GameEngine::reset`.
/// `Pause` is handled by the scheduler and never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next tick
    Turn(Direction),
    /// Start a fresh round
    Restart,
    /// Suspend or resume ticking
    Pause,
}
