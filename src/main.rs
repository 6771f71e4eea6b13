//! Terminal city-builder runner (default binary).
//!
//! Uses crossterm for mouse/keyboard input and a framebuffer-based
//! renderer. All state mutation happens on this loop; pointer events are
//! dispatched in arrival order so the last move before a release decides
//! where a drag settles.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_isocity::input::from_mouse;
use tui_isocity::scene::Scene;
use tui_isocity::term::{SceneView, TerminalRenderer, ViewTransform, Viewport};
use tui_isocity::types::{COMPACT_WIDTH_COLS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((100, 30));
    let mut scene = Scene::new(w < COMPACT_WIDTH_COLS);
    let view = SceneView::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((w, h));
        let fb = view.render(&scene, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    let transform = ViewTransform::for_viewport(Viewport::new(w, h));
                    if let Some(pointer) = from_mouse(mouse, &transform) {
                        scene.handle_pointer(pointer, w);
                    }
                }
                Event::Resize(cols, _) => {
                    scene.set_tier(cols < COMPACT_WIDTH_COLS);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            scene.tick(TICK_MS);
        }
    }
}
