//! Terminal memory match (default binary).
//!
//! Fixed-rate frame loop: poll input until the next frame is due, then tick
//! the session and redraw. Uses crossterm for input and the framebuffer
//! renderer for output.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use memory_match::config::GameConfig;
use memory_match::core::{GameSnapshot, Session, TileRng};
use memory_match::input::{handle_key_event, handle_mouse_event, should_quit};
use memory_match::journal::Journal;
use memory_match::runner::Runner;
use memory_match::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = GameConfig::from_env();
    config.apply_args(&args)?;

    let journal = Journal::open(config.log_path.as_deref())?;
    let rng = match config.seed {
        Some(seed) => TileRng::new(seed),
        None => TileRng::from_entropy(),
    };
    let mut runner = Runner::new(Session::with_rng(rng)?, journal, config.tick_ms);

    let mut term = TerminalRenderer::new().with_mouse(config.mouse);
    term.enter()?;

    let result = run(&mut term, &mut runner, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    runner.flush();
    result
}

fn run<W: std::io::Write>(
    term: &mut TerminalRenderer,
    runner: &mut Runner<W>,
    config: &GameConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    let started = Instant::now();
    let frame = Duration::from_millis(config.tick_ms as u64);
    let mut next_frame = started;

    loop {
        let timeout = next_frame.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            let now = started.elapsed().as_secs_f64();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        runner.apply(action, now)?;
                    }
                }
                Event::Mouse(mouse) if config.mouse => {
                    let session = runner.session();
                    let layout = view.board_layout(viewport, session.board().grid_size());
                    if let Some(action) = handle_mouse_event(mouse, &layout, session.phase()) {
                        runner.apply(action, now)?;
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        let now_instant = Instant::now();
        if now_instant < next_frame {
            continue;
        }
        next_frame += frame;
        if next_frame < now_instant {
            next_frame = now_instant + frame;
        }

        let now = started.elapsed().as_secs_f64();
        runner.tick(now)?;

        runner.session().snapshot_into(now, &mut snap);
        let now_ms = (now * 1000.0) as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), snap.is_static()) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
