//! Terminal 2048 runner (default binary).
//!
//! Input comes from crossterm (keys and mouse); output goes through the
//! framebuffer renderer. The loop blocks on input since nothing moves on
//! its own.

use anyhow::Result;
use crossterm::event;
use tracing::info;

use tui_2048::core::GameSnapshot;
use tui_2048::engine::{init_logging, AppConfig, Outcome};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut controller = config.build_controller();
    info!(seed = ?config.seed, resumed = config.initial_board.is_some(), "session started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            controller.game().snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let ev = event::read()?;
        if let event::Event::Resize(..) = ev {
            term.invalidate();
        }

        match controller.handle_event(&ev, view.button_rect(viewport)) {
            Outcome::Quit => {
                info!(score = controller.game().score(), "session ended");
                return Ok(());
            }
            Outcome::Redraw => dirty = true,
            Outcome::Ignored => dirty = false,
        }
    }
}
