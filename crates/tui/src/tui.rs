//! Terminal initialization and event streaming.
//!
//! This module provides the `Tui` wrapper around ratatui's Terminal,
//! handling raw mode setup, mouse capture, and the crossterm event stream.
//! Mouse capture is always enabled: marker clicks are part of the stepper's
//! interaction contract.

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::pin::Pin;
use tokio_stream::{Stream, StreamExt};

/// Type alias for the terminal backend we're using.
pub type TerminalBackend = CrosstermBackend<Stdout>;

/// Terminal events surfaced to the application loop.
#[derive(Debug)]
pub enum TuiEvent {
    /// Keyboard event.
    Key(KeyEvent),
    /// Mouse event.
    Mouse(MouseEvent),
    /// The terminal was resized; the view should redraw.
    Resize,
}

/// Main terminal wrapper.
pub struct Tui {
    /// The underlying ratatui terminal.
    terminal: Terminal<TerminalBackend>,
}

impl Tui {
    /// Initialize the terminal in raw mode with mouse capture.
    pub fn init() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

        // Restore the terminal before surfacing any panic
        set_panic_hook();

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Restore the terminal to its original state.
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Create a stream of terminal events.
    pub fn event_stream(&self) -> Pin<Box<dyn Stream<Item = TuiEvent> + Send + 'static>> {
        let mut crossterm_events = crossterm::event::EventStream::new();

        let event_stream = async_stream::stream! {
            while let Some(Ok(event)) = crossterm_events.next().await {
                match event {
                    Event::Key(key_event) => {
                        yield TuiEvent::Key(key_event);
                    }
                    Event::Mouse(mouse_event) => {
                        yield TuiEvent::Mouse(mouse_event);
                    }
                    Event::Resize(_, _) => {
                        yield TuiEvent::Resize;
                    }
                    _ => {}
                }
            }
        };

        Box::pin(event_stream)
    }

    /// Draw the UI with the provided function.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Set a panic hook that restores the terminal before panicking.
fn set_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
