//! Terminal 2048 runner (default binary).
//!
//! Fixed-rate frame loop: render, collect key presses until the next frame
//! deadline, apply at most one action, then advance animations by the measured
//! frame time.

use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, trace, warn};
use simplelog::{Config, WriteLogger};

use tui_2048::config::RunConfig;
use tui_2048::core::{Game, GameSnapshot};
use tui_2048::input::{should_quit, PendingInput};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; terminal output would corrupt the alternate screen.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    WriteLogger::init(config.log_level, Config::default(), file)?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = match Game::from_seed(config.game_config(), config.seed) {
        Ok(game) => game,
        Err(err) => {
            warn!("{err}; falling back to default rules");
            Game::with_seed(config.seed)
        }
    };
    info!(
        "running at {} fps, spawn cooldown {} ms",
        config.fps,
        game.config().spawn_cooldown_ms
    );

    let view = GameView::default();
    let mut input = PendingInput::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = config.frame_duration();
    let mut last_frame = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame deadline.
        let deadline = last_frame + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit after {} moves", game.moves());
                        return Ok(());
                    }
                    input.record_key(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if timeout.is_zero() {
                break;
            }
        }

        if let Some(action) = input.take() {
            trace!("action {}", action.as_str());
            game.apply_action(action);
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        game.tick(delta);
    }
}
