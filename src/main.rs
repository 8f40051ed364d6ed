//! Terminal blockfall runner (default binary).
//!
//! Reads `BLOCKFALL_*` settings, runs one session with crossterm input and the
//! framebuffer renderer, and prints the final score on exit.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::GameConfig;
use blockfall::core::{GameSnapshot, Session};
use blockfall::event_log::{EventLog, LogRecord};
use blockfall::input::{action_for_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;

    let mut log = EventLog::from_config(&config);
    log.record(&LogRecord::session_start(&config));

    let mut session = config.build_session();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &mut log, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "Final score: {} ({} lines, {} pieces)",
        session.score(),
        session.lines(),
        session.pieces()
    );
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    log: &mut EventLog,
    config: &GameConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.fall_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        session.handle_input(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity. After game over the last frame stays up until quit.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }

        while let Some(ev) = session.take_lock_event() {
            log.record_lock(&ev);
        }
    }
}
