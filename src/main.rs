//! Terminal snake runner (default binary).
//!
//! It uses crossterm for input and the framebuffer-based renderer from
//! `tui_snake::term`. The terminal session and tick scheduler live exactly as
//! long as the run loop.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_snake::app::App;
use tui_snake::config::{init_logging, AppConfig};
use tui_snake::core::GameSnapshot;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalSession, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(config.log_path.as_deref())?;

    let seed = config.seed_or_random();
    info!(
        "starting: grid {}x{}, tick {}ms, food {}, seed {}",
        config.engine.grid_size,
        config.engine.grid_size,
        config.engine.tick_interval_ms,
        config.engine.food_placement.as_str(),
        seed
    );

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, &config, seed);

    // Always try to restore terminal state.
    let _ = session.restore();
    info!("exiting");
    result
}

fn run(session: &mut TerminalSession, config: &AppConfig, seed: u32) -> Result<()> {
    let mut app = App::new(config.engine, seed, Instant::now());
    let view = GameView::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            app.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, app.paused(), Viewport::new(w, h), &mut fb);
            session.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle(action, Instant::now());
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    session.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if app.update(Instant::now()).is_some() {
            dirty = true;
        }
    }
}
