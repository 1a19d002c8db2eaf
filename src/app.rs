//! Terminal-independent glue between input, scheduler and engine.
//!
//! The binary feeds key actions and wall-clock instants in; everything here
//! is deterministic given those, so the run loop can be exercised in tests
//! without a terminal.

use std::time::{Duration, Instant};

use crate::core::{EngineConfig, GameEngine, GameSnapshot, TickOutcome};
use crate::term::Ticker;
use crate::types::GameAction;

pub struct App {
    game: GameEngine,
    ticker: Ticker,
}

impl App {
    pub fn new(config: EngineConfig, seed: u32, now: Instant) -> Self {
        let interval = Duration::from_millis(config.tick_interval_ms as u64);
        Self {
            game: GameEngine::new(config, seed),
            ticker: Ticker::start(interval, now),
        }
    }

    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    pub fn paused(&self) -> bool {
        self.ticker.is_paused()
    }

    /// How long the loop may wait for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.poll_timeout(now)
    }

    /// Apply a player action. Returns whether anything visible changed.
    pub fn handle(&mut self, action: GameAction, now: Instant) -> bool {
        match action {
            GameAction::Turn(dir) => !self.paused() && self.game.set_direction(dir),
            GameAction::Restart => {
                self.game.reset();
                if self.paused() {
                    self.ticker.toggle_pause(now);
                }
                self.ticker.rearm(now);
                true
            }
            GameAction::Pause => {
                if self.game.game_over() {
                    return false;
                }
                self.ticker.toggle_pause(now);
                true
            }
        }
    }

    /// Tick the engine if the scheduler says one is due.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.ticker.fire(now) {
            return None;
        }
        Some(self.game.tick())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }
}
