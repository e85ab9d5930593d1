//! Terminal cascade runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! that only redraws changed cells.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_cascade::core::{display_score, Board, GameSnapshot};
use tui_cascade::input::{handle_key_event, should_quit};
use tui_cascade::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_cascade::types::{GameAction, FRAME_MS};
use tui_cascade::{GameConfig, Session};

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let board = result?;
    println!(
        "[Config] seed={} board={}x{} base_tick={}ms",
        config.seed, config.width, config.height, config.base_tick_ms
    );
    if board.is_game_over() {
        println!("[Game] Game over");
    }
    println!(
        "[Game] Final score: {} ({} rows)",
        display_score(board.score()),
        board.score()
    );
    Ok(())
}

/// Play until the player quits or the game ends. Returns the final board.
///
/// On game over the final frame stays on screen until the next key press.
fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<Board> {
    let mut session = Session::new(config);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        draw(term, &view, &session, &mut snap, &mut fb)?;

        let tick_duration = Duration::from_millis(session.tick_interval_ms() as u64);

        // Input with timeout until the next tick, capped at one frame.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(frame_duration);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(session.into_board());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                        if action == GameAction::Restart {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !session.tick() {
                draw(term, &view, &session, &mut snap, &mut fb)?;
                wait_for_key()?;
                return Ok(session.into_board());
            }
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &Session,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    session.snapshot_into(snap);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}
