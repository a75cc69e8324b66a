//! Terminal runner (default binary).
//!
//! The driver owns everything the engine does not: the gravity timer,
//! keyboard events, and rendering. Commands are fed to the session in
//! arrival order; once the session reports game over, the gravity timer
//! stops and only quit keys are honored.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{standard_palette, GameSession};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, DEFAULT_COLS, DEFAULT_ROWS, DROP_INTERVAL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = GameSession::with_seed(DEFAULT_COLS, DEFAULT_ROWS, standard_palette(), seed)?;
    let mut snapshot = session.snapshot();

    let view = GameView::default();
    let drop_interval = Duration::from_millis(DROP_INTERVAL_MS);
    let mut last_drop = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&frame)?;

        // Input with timeout until the next gravity step. After game
        // over there is no next step; just wait for a key.
        let timeout = if snapshot.game_over {
            Duration::from_millis(250)
        } else {
            drop_interval
                .checked_sub(last_drop.elapsed())
                .unwrap_or(Duration::ZERO)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = map_key(key) {
                        snapshot = session.apply(cmd);
                    }
                }
            }
        }

        // Gravity.
        if !snapshot.game_over && last_drop.elapsed() >= drop_interval {
            last_drop = Instant::now();
            snapshot = session.apply(Command::Tick);
        }
    }
}
