use crate::types::{Direction, Position, GRID_SIZE};

/// Read-only view of the engine, taken after each tick or input event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub game_over: bool,
    pub grid_size: u16,
    pub ticks: u32,
    pub round: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.food = Position::default();
        self.direction = Direction::Right;
        self.game_over = false;
        self.grid_size = GRID_SIZE;
        self.ticks = 0;
        self.round = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Whether any snake segment covers `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            food: Position::default(),
            direction: Direction::Right,
            game_over: false,
            grid_size: GRID_SIZE,
            ticks: 0,
            round: 0,
        }
    }
}
