//! Terminal sliding-stones runner (default binary).
//!
//! Event loop: draw the board, wait for input until the next tick deadline,
//! dispatch actions into the board engine, and run the win evaluator once per
//! tick. An optional numeric argument seeds the board generator.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_stones::core::GameState;
use tui_stones::input::{handle_key_event, should_quit};
use tui_stones::term::{GameView, Screen};
use tui_stones::types::TICK_MS;

/// Generator seed when none is given on the command line.
const DEFAULT_SEED: u32 = 1;

fn main() -> Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("seed must be a number, got {arg:?}"))?,
        None => DEFAULT_SEED,
    };

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, seed);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed).context("could not generate a starting board")?;
    let view = GameView;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    game.tick(TICK_MS);

    loop {
        // Render.
        screen.draw(&view.render(&game))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action)
                            .context("board regeneration failed")?;
                    }
                }
            }
        }

        // Tick: resync stone lists and evaluate the win condition.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
