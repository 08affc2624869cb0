//! Frontend port: where frames go and where keys come from.
//!
//! The app loop only talks to [`Frontend`], so it runs the same against a real
//! terminal ([`TerminalFrontend`]) or a scripted fake in tests.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::view::Viewport;

pub trait Frontend {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;

    /// Wait up to `timeout` for a key press. `Ok(None)` on timeout or on
    /// non-key events.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;

    /// Show a finished frame. Implementations may swap buffers with `fb`;
    /// callers repaint it fully every frame.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        (**self).poll_key(timeout)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }
}

/// Crossterm-backed frontend on stdout.
pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    active: bool,
}

impl TerminalFrontend {
    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            active: true,
        })
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer.exit()
    }
}

impl Frontend for TerminalFrontend {
    fn viewport(&self) -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Terminal auto-repeat counts as presses; releases are ignored.
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            Event::Resize(_, _) => {
                self.renderer.invalidate();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.renderer.draw_swap(fb)
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.exit();
    }
}
