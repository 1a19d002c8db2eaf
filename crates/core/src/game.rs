//! Game engine module - owns and advances the complete game state
//!
//! All interdependent fields (snake, food, direction, game-over flag) live in a
//! single struct that only [`GameEngine::tick`], [`GameEngine::set_direction`]
//! and [`GameEngine::reset`] mutate. Callers observe it through snapshots.

use std::collections::VecDeque;

use log::{debug, info, trace};

use crate::config::{EngineConfig, FoodPlacement};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, Position};

/// What ended a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head left the grid
    Wall,
    /// The head ran into a snake segment
    SelfBody,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::SelfBody => "self",
        }
    }
}

/// Result of a single [`GameEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed
    Idle,
    /// The snake advanced one cell
    Moved,
    /// The snake advanced onto the food and grew by one
    Ate,
    /// The move was illegal; the game is now over
    Collided(Collision),
}

/// Mutable state of the current round
#[derive(Debug, Clone)]
struct RoundState {
    /// Head first. Never empty.
    snake: VecDeque<Position>,
    food: Position,
    direction: Direction,
    game_over: bool,
    ticks: u32,
}

/// Single-screen snake simulation
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    rng: SimpleRng,
    state: RoundState,
    /// Monotonic round id (increments on reset).
    round: u32,
}

impl GameEngine {
    /// Create a new engine; `seed` drives food placement.
    pub fn new(config: EngineConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let state = fresh_round(&config, &mut rng);
        Self {
            config,
            rng,
            state,
            round: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn food(&self) -> Position {
        self.state.food
    }

    pub fn head(&self) -> Position {
        self.state.snake[0]
    }

    pub fn len(&self) -> usize {
        self.state.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.snake.is_empty()
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn ticks(&self) -> u32 {
        self.state.ticks
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Segments, head first.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.state.snake.iter().copied()
    }

    /// Advance the simulation by one step.
    ///
    /// Every check runs before anything is mutated, so a tick either moves the
    /// snake or only flips the game-over flag.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Idle;
        }

        let next = self.head().step(self.state.direction);

        if let Some(collision) = self.collision_at(next) {
            self.state.game_over = true;
            debug!(
                "round {} over: {} collision at ({}, {}), length {}, ticks {}",
                self.round,
                collision.as_str(),
                next.x,
                next.y,
                self.len(),
                self.state.ticks
            );
            return TickOutcome::Collided(collision);
        }

        self.state.ticks = self.state.ticks.wrapping_add(1);
        self.state.snake.push_front(next);

        if next == self.state.food {
            self.state.food = place_food(&self.config, &mut self.rng, &self.state.snake);
            trace!(
                "food eaten at ({}, {}), length {}, next food at ({}, {})",
                next.x,
                next.y,
                self.len(),
                self.state.food.x,
                self.state.food.y
            );
            TickOutcome::Ate
        } else {
            self.state.snake.pop_back();
            TickOutcome::Moved
        }
    }

    /// Request a new heading for the next tick.
    ///
    /// Ignored once the game is over, and when `dir` is the exact reverse of the
    /// stored direction. Returns whether the direction changed hands.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.state.game_over || dir.is_opposite(self.state.direction) {
            return false;
        }
        self.state.direction = dir;
        true
    }

    /// Start a fresh round. The RNG keeps running, so food differs between rounds.
    pub fn reset(&mut self) {
        self.state = fresh_round(&self.config, &mut self.rng);
        self.round = self.round.wrapping_add(1);
        info!(
            "round {} started on a {}x{} grid",
            self.round, self.config.grid_size, self.config.grid_size
        );
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.state.snake.iter().copied());
        out.food = self.state.food;
        out.direction = self.state.direction;
        out.game_over = self.state.game_over;
        out.grid_size = self.config.grid_size;
        out.ticks = self.state.ticks;
        out.round = self.round;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Check a prospective head cell against the walls and the current body.
    ///
    /// The current tail counts as occupied even though it would move away this tick.
    fn collision_at(&self, pos: Position) -> Option<Collision> {
        if !pos.in_bounds(self.config.grid_size) {
            return Some(Collision::Wall);
        }
        if self.state.snake.contains(&pos) {
            return Some(Collision::SelfBody);
        }
        None
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), 1)
    }
}

fn fresh_round(config: &EngineConfig, rng: &mut SimpleRng) -> RoundState {
    let mut snake = VecDeque::with_capacity(config.cell_count().min(1024) as usize);
    snake.push_back(config.center());
    let food = place_food(config, rng, &snake);
    RoundState {
        snake,
        food,
        direction: Direction::Right,
        game_over: false,
        ticks: 0,
    }
}

fn place_food(config: &EngineConfig, rng: &mut SimpleRng, snake: &VecDeque<Position>) -> Position {
    let n = config.grid_size as u32;

    if config.food_placement == FoodPlacement::AvoidSnake {
        let free = config.cell_count().saturating_sub(snake.len() as u32);
        if free > 0 {
            let mut k = rng.next_range(free);
            for y in 0..n as i32 {
                for x in 0..n as i32 {
                    let pos = Position::new(x, y);
                    if snake.contains(&pos) {
                        continue;
                    }
                    if k == 0 {
                        return pos;
                    }
                    k -= 1;
                }
            }
        }
    }

    let x = rng.next_range(n) as i32;
    let y = rng.next_range(n) as i32;
    Position::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(snake: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameEngine {
        let mut engine = GameEngine::new(EngineConfig::default(), 12345);
        engine.state.snake = snake.iter().map(|&(x, y)| Position::new(x, y)).collect();
        engine.state.direction = direction;
        engine.state.food = Position::new(food.0, food.1);
        engine
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new(EngineConfig::default(), 12345);

        assert!(!engine.game_over());
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.head(), Position::new(10, 10));
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.ticks(), 0);
        assert_eq!(engine.round(), 0);
        assert!(engine.food().in_bounds(20));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameEngine::new(EngineConfig::default(), 42);
        let b = GameEngine::new(EngineConfig::default(), 42);
        assert_eq!(a.food(), b.food());
    }

    #[test]
    fn test_tick_moves_without_growing() {
        let mut engine = engine_with(&[(10, 10)], Direction::Right, (0, 0));

        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(engine.head(), Position::new(11, 10));
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_body_follows_head() {
        let mut engine = engine_with(&[(5, 5), (4, 5), (3, 5)], Direction::Down, (0, 0));

        assert_eq!(engine.tick(), TickOutcome::Moved);
        let body: Vec<_> = engine.segments().collect();
        assert_eq!(
            body,
            vec![Position::new(5, 6), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn test_eat_food_after_five_ticks() {
        let mut engine = engine_with(&[(10, 10)], Direction::Right, (15, 10));

        for _ in 0..4 {
            assert_eq!(engine.tick(), TickOutcome::Moved);
            assert_eq!(engine.len(), 1);
        }
        assert_eq!(engine.tick(), TickOutcome::Ate);

        assert_eq!(engine.head(), Position::new(15, 10));
        assert_eq!(engine.len(), 2);
        assert!(!engine.game_over());
        assert!(engine.food().in_bounds(20));
    }

    #[test]
    fn test_growth_keeps_tail() {
        let mut engine = engine_with(&[(5, 5), (4, 5)], Direction::Right, (6, 5));

        assert_eq!(engine.tick(), TickOutcome::Ate);
        let body: Vec<_> = engine.segments().collect();
        assert_eq!(
            body,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn test_wall_collision_left_edge() {
        let mut engine = engine_with(&[(0, 5)], Direction::Left, (9, 9));

        assert_eq!(engine.tick(), TickOutcome::Collided(Collision::Wall));
        assert!(engine.game_over());
        // Nothing but the flag changed.
        assert_eq!(engine.head(), Position::new(0, 5));
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn test_wall_collision_every_edge() {
        let cases = [
            ((19, 3), Direction::Right),
            ((3, 0), Direction::Up),
            ((3, 19), Direction::Down),
            ((0, 3), Direction::Left),
        ];
        for ((x, y), dir) in cases {
            let mut engine = engine_with(&[(x, y)], dir, (9, 9));
            assert_eq!(
                engine.tick(),
                TickOutcome::Collided(Collision::Wall),
                "({}, {}) heading {:?}",
                x,
                y,
                dir
            );
        }
    }

    #[test]
    fn test_self_collision_sets_game_over() {
        // Head at (5,5) turning right into (6,5), which is part of the body.
        let snake = [(5, 5), (5, 6), (6, 6), (7, 6), (7, 5), (6, 5), (6, 4)];
        let mut engine = engine_with(&snake, Direction::Right, (0, 0));

        assert_eq!(engine.tick(), TickOutcome::Collided(Collision::SelfBody));
        assert!(engine.game_over());

        let body: Vec<_> = engine.segments().collect();
        assert_eq!(body.len(), snake.len());
        assert_eq!(body[0], Position::new(5, 5));
    }

    #[test]
    fn test_moving_into_current_tail_is_a_collision() {
        let mut engine = engine_with(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Right, (0, 0));

        assert_eq!(engine.tick(), TickOutcome::Collided(Collision::SelfBody));
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut engine = engine_with(&[(0, 5)], Direction::Left, (9, 9));
        engine.tick();
        let before = engine.snapshot();

        for _ in 0..10 {
            assert_eq!(engine.tick(), TickOutcome::Idle);
        }
        assert!(!engine.set_direction(Direction::Up));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_set_direction_rejects_reverse() {
        let mut engine = GameEngine::default();

        assert!(!engine.set_direction(Direction::Left));
        assert_eq!(engine.direction(), Direction::Right);

        assert!(engine.set_direction(Direction::Up));
        assert_eq!(engine.direction(), Direction::Up);
        assert!(!engine.set_direction(Direction::Down));
        assert_eq!(engine.direction(), Direction::Up);
    }

    #[test]
    fn test_set_direction_same_direction_is_accepted() {
        let mut engine = GameEngine::default();
        assert!(engine.set_direction(Direction::Right));
        assert_eq!(engine.direction(), Direction::Right);
    }

    #[test]
    fn test_set_direction_applies_on_next_tick() {
        let mut engine = engine_with(&[(10, 10)], Direction::Right, (0, 0));

        engine.set_direction(Direction::Down);
        assert_eq!(engine.head(), Position::new(10, 10));
        engine.tick();
        assert_eq!(engine.head(), Position::new(10, 11));
    }

    #[test]
    fn test_two_turns_within_one_tick_compare_against_stored_direction() {
        // Right -> Up -> Left is accepted because each step is checked against the
        // direction stored by the previous call.
        let mut engine = engine_with(&[(5, 5), (4, 5)], Direction::Right, (0, 0));

        assert!(engine.set_direction(Direction::Up));
        assert!(engine.set_direction(Direction::Left));
        assert_eq!(engine.tick(), TickOutcome::Collided(Collision::SelfBody));
    }

    #[test]
    fn test_reset_restores_start_configuration() {
        let mut engine = engine_with(&[(0, 5), (1, 5)], Direction::Left, (9, 9));
        engine.tick();
        assert!(engine.game_over());

        engine.reset();

        assert!(!engine.game_over());
        assert_eq!(engine.segments().collect::<Vec<_>>(), vec![Position::new(10, 10)]);
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.ticks(), 0);
        assert_eq!(engine.round(), 1);
    }

    #[test]
    fn test_reset_during_play() {
        let mut engine = GameEngine::default();
        engine.set_direction(Direction::Down);
        engine.tick();
        engine.tick();

        engine.reset();

        assert_eq!(engine.head(), Position::new(10, 10));
        assert_eq!(engine.direction(), Direction::Right);
    }

    #[test]
    fn test_food_may_land_on_snake_by_default() {
        // 1x1 grid: the only cell is the spawn cell.
        let engine = GameEngine::new(EngineConfig::new(1, 200), 3);
        assert_eq!(engine.food(), engine.head());
    }

    #[test]
    fn test_avoid_snake_placement_skips_body() {
        let config = EngineConfig::new(3, 200).with_food_placement(FoodPlacement::AvoidSnake);
        let mut rng = SimpleRng::new(5);
        let snake: VecDeque<Position> = [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 2),
            (1, 2),
        ]
        .iter()
        .map(|&(x, y)| Position::new(x, y))
        .collect();

        for _ in 0..20 {
            assert_eq!(place_food(&config, &mut rng, &snake), Position::new(2, 2));
        }
    }

    #[test]
    fn test_avoid_snake_placement_full_grid_falls_back() {
        let config = EngineConfig::new(1, 200).with_food_placement(FoodPlacement::AvoidSnake);
        let engine = GameEngine::new(config, 9);
        assert_eq!(engine.food(), Position::new(0, 0));
    }

    #[test]
    fn test_length_invariant_over_random_play() {
        let mut engine = GameEngine::new(EngineConfig::default(), 777);
        let mut rng = SimpleRng::new(31);

        for _ in 0..2_000 {
            if engine.game_over() {
                engine.reset();
                continue;
            }
            let dir = Direction::ALL[rng.next_range(4) as usize];
            engine.set_direction(dir);

            let before = engine.len();
            match engine.tick() {
                TickOutcome::Moved => assert_eq!(engine.len(), before),
                TickOutcome::Ate => assert_eq!(engine.len(), before + 1),
                TickOutcome::Collided(_) => assert_eq!(engine.len(), before),
                TickOutcome::Idle => unreachable!("checked game_over above"),
            }

            // No duplicate segments while active.
            if !engine.game_over() {
                let body: Vec<_> = engine.segments().collect();
                for (i, a) in body.iter().enumerate() {
                    assert!(!body[i + 1..].contains(a), "duplicate segment {:?}", a);
                }
            }
        }
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let engine = engine_with(&[(3, 3), (2, 3)], Direction::Right, (7, 7));
        let mut snap = GameSnapshot::default();
        snap.snake.extend([Position::new(0, 0); 5]);

        engine.snapshot_into(&mut snap);

        assert_eq!(snap.snake, vec![Position::new(3, 3), Position::new(2, 3)]);
        assert_eq!(snap.food, Position::new(7, 7));
        assert_eq!(snap.direction, Direction::Right);
        assert!(!snap.game_over);
        assert_eq!(snap.grid_size, 20);
        assert_eq!(snap.head(), Some(Position::new(3, 3)));
    }
}
