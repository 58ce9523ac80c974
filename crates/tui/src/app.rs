//! The demo application mounting the stepper widget.
//!
//! This module defines the `App` struct that holds the displayed step list
//! and the event loop using `tokio::select!`. The app owns no step
//! semantics: it renders whatever the host supplied last, reports
//! activations as `StepChanged` events, and applies `Op`s pushed back by
//! the host.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use sk_protocol::{Event, Op, Step};
use tokio::select;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_stream::StreamExt;

use crate::event_handler;
use crate::event_handler::InputOutcome;
use crate::tui::{Tui, TuiEvent};
use crate::widgets::Stepper;

/// Stepper view state.
pub struct App {
    /// The step list as last supplied by the host.
    pub steps: Vec<Step>,
    /// Whether the stepper renders vertically.
    pub vertical: bool,
    /// Index of the marker the UI cursor is on.
    pub selected: usize,
    /// The last event emitted to the host, shown in the status line.
    pub last_emitted: Option<Event>,
    /// Channel for reporting events to the host.
    pub event_tx: UnboundedSender<Event>,
    /// Channel for receiving operations from the host.
    pub op_rx: UnboundedReceiver<Op>,
    /// Flag to indicate if the application should exit.
    pub should_exit: bool,
    /// Area the stepper was last rendered into, for mouse hit testing.
    stepper_area: Rect,
}

impl App {
    /// Create a new App over an initial step list.
    pub fn new(
        steps: Vec<Step>,
        vertical: bool,
        event_tx: UnboundedSender<Event>,
        op_rx: UnboundedReceiver<Op>,
    ) -> Self {
        Self {
            steps,
            vertical,
            selected: 0,
            last_emitted: None,
            event_tx,
            op_rx,
            should_exit: false,
            stepper_area: Rect::default(),
        }
    }

    /// Main event loop.
    ///
    /// Uses `tokio::select!` to handle host operations and terminal events
    /// concurrently, redrawing after each handled event.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();

        tui.draw(|frame| self.render(frame))?;

        while !self.should_exit {
            select! {
                Some(op) = self.op_rx.recv() => {
                    self.handle_op(op);
                }
                Some(tui_event) = tui_events.next() => {
                    self.handle_tui_event(tui_event);
                }
                else => break,
            }
            tui.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    /// Apply an operation pushed by the host.
    pub fn handle_op(&mut self, op: Op) {
        self.should_exit |= event_handler::handle_op(
            op,
            &mut self.steps,
            &mut self.vertical,
            &mut self.selected,
        );
    }

    /// Handle a terminal event.
    fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) => self.handle_key_event(key_event),
            TuiEvent::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            TuiEvent::Resize => {}
        }
    }

    /// Handle a keyboard event.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let outcome = event_handler::handle_keyboard_event(
            key_event,
            &self.steps,
            &mut self.selected,
            &mut self.vertical,
            &self.event_tx,
        );
        self.apply_outcome(outcome);
    }

    /// Handle a mouse event.
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let outcome = event_handler::handle_mouse_event(
            mouse_event,
            &self.steps,
            self.vertical,
            self.stepper_area,
            &mut self.selected,
            &self.event_tx,
        );
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: InputOutcome) {
        self.should_exit |= outcome.should_exit;
        if outcome.emitted.is_some() {
            self.last_emitted = outcome.emitted;
        }
    }

    /// Render the view.
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Stepper
                Constraint::Length(3), // Status
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_stepper(frame, chunks[1]);
        self.render_status(frame, chunks[2]);
    }

    /// Render the header with key bindings.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Stepper");
        let help = "q quit | arrows select | enter/click activate | o orientation";
        frame.render_widget(Paragraph::new(help).block(block), area);
    }

    /// Render the stepper widget, recording its area for hit testing.
    fn render_stepper(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.vertical { "Steps (vertical)" } else { "Steps" };
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.stepper_area = inner;
        Stepper::new(&self.steps)
            .vertical(self.vertical)
            .selected(Some(self.selected))
            .render(frame, inner);
    }

    /// Render the status line with the last emitted event.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Last event");
        let text = match &self.last_emitted {
            Some(Event::StepChanged { index, step }) => {
                format!("stepChanged: index={} label={}", index, step.label)
            }
            None => "no step activated yet".to_string(),
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc::unbounded_channel;

    fn sample_steps() -> Vec<Step> {
        vec![
            Step::new("Checkout").completed(true),
            Step::new("Build").active(true),
            Step::new("Deploy"),
        ]
    }

    fn test_app() -> (App, tokio::sync::mpsc::UnboundedReceiver<Event>) {
        let (event_tx, event_rx) = unbounded_channel();
        let (_op_tx, op_rx) = unbounded_channel();
        (App::new(sample_steps(), false, event_tx, op_rx), event_rx)
    }

    #[tokio::test]
    async fn test_app_renders_all_panels() {
        let (mut app, _event_rx) = test_app();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| app.render(frame)).unwrap();

        let content = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();

        assert!(content.contains("Stepper"));
        assert!(content.contains("Steps"));
        assert!(content.contains("Last event"));
        assert!(content.contains("Checkout"));
        assert!(content.contains("no step activated yet"));
    }

    #[tokio::test]
    async fn test_app_quit_on_q() {
        let (mut app, _event_rx) = test_app();

        assert!(!app.should_exit);
        app.handle_key_event(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_exit);
    }

    #[tokio::test]
    async fn test_activation_emits_and_updates_status() {
        let (mut app, mut event_rx) = test_app();
        app.selected = 1;

        app.handle_key_event(KeyEvent::from(KeyCode::Enter));

        let expected = Event::StepChanged {
            index: 1,
            step: Step::new("Build").active(true),
        };
        assert_eq!(event_rx.try_recv().unwrap(), expected);
        assert_eq!(app.last_emitted, Some(expected));

        // The status line reflects the emission on the next render.
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let content = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(content.contains("stepChanged: index=1 label=Build"));
    }

    #[tokio::test]
    async fn test_mouse_click_activates_through_rendered_area() {
        let (mut app, mut event_rx) = test_app();

        // Render once so the app records where the stepper sits.
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        // Click the third marker through the recorded area.
        let marker = Stepper::new(&app.steps).marker_areas(app.stepper_area)[2];
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: marker.x,
            row: marker.y,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(app.selected, 2);
        assert_eq!(
            event_rx.try_recv().unwrap(),
            Event::StepChanged {
                index: 2,
                step: Step::new("Deploy"),
            }
        );
    }

    #[tokio::test]
    async fn test_set_steps_op_replaces_list() {
        let (mut app, _event_rx) = test_app();
        app.selected = 2;

        app.handle_op(Op::SetSteps {
            steps: vec![Step::new("Only").active(true)],
        });

        assert_eq!(app.steps.len(), 1);
        assert_eq!(app.selected, 0);
        assert!(!app.should_exit);
    }

    #[tokio::test]
    async fn test_shutdown_op_exits() {
        let (mut app, _event_rx) = test_app();

        app.handle_op(Op::Shutdown);

        assert!(app.should_exit);
    }

    #[tokio::test]
    async fn test_orientation_op_changes_layout() {
        let (mut app, _event_rx) = test_app();

        app.handle_op(Op::SetOrientation { vertical: true });
        assert!(app.vertical);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let content = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(content.contains("Steps (vertical)"));
    }
}
