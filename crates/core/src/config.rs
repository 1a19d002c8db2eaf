//! Engine configuration.

use crate::types::{GRID_SIZE, TICK_MS};

/// Where new food may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodPlacement {
    /// Uniform over the whole grid, including cells under the snake.
    #[default]
    Anywhere,
    /// Uniform over cells not covered by the snake.
    ///
    /// Falls back to [`FoodPlacement::Anywhere`] when the snake fills the grid.
    AvoidSnake,
}

impl FoodPlacement {
    /// Parse from `anywhere` / `avoid-snake` (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "anywhere" => Some(FoodPlacement::Anywhere),
            "avoid-snake" | "avoidsnake" => Some(FoodPlacement::AvoidSnake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodPlacement::Anywhere => "anywhere",
            FoodPlacement::AvoidSnake => "avoid-snake",
        }
    }
}

/// Fixed parameters of a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub grid_size: u16,
    /// Interval the host scheduler should tick at. The engine itself is step-based.
    pub tick_interval_ms: u32,
    pub food_placement: FoodPlacement,
}

impl EngineConfig {
    /// Build a config, clamping degenerate sizes to 1.
    pub fn new(grid_size: u16, tick_interval_ms: u32) -> Self {
        Self {
            grid_size: grid_size.max(1),
            tick_interval_ms: tick_interval_ms.max(1),
            food_placement: FoodPlacement::Anywhere,
        }
    }

    pub fn with_food_placement(mut self, food_placement: FoodPlacement) -> Self {
        self.food_placement = food_placement;
        self
    }

    /// Spawn cell for a fresh round.
    pub fn center(&self) -> crate::types::Position {
        let c = (self.grid_size / 2) as i32;
        crate::types::Position::new(c, c)
    }

    pub fn cell_count(&self) -> u32 {
        (self.grid_size as u32) * (self.grid_size as u32)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(GRID_SIZE, TICK_MS)
    }
}
