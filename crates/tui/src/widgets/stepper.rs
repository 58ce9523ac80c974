//! The stepper widget.
//!
//! Renders an ordered step list as labeled markers joined by dividers whose
//! style is derived from the completion flags of the two steps each one
//! connects. The widget is a pure function of its inputs: it owns no state
//! and derives the same output for the same step list every render.
//!
//! Layout comes in two orientations. Horizontal mode draws a single strip
//! line plus a rule line beneath it; vertical mode draws one row per marker
//! with single-row connectors between them. Both orientations frame the
//! sequence with decorative edge elements that always render in the
//! default divider style: lead cap, tail cap, and (horizontal only) the
//! rule, so a horizontal stepper carries three bookends and a vertical one
//! carries two. The bookends are fixed layout constants, independent of
//! step state.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use sk_protocol::{divider_styles, DividerStyle, Step, StepState};

/// Width of a horizontal divider segment, excluding its surrounding spaces.
const DIVIDER_SEGMENT_WIDTH: usize = 4;

/// Cells occupied by the horizontal lead cap (`"╶─ "`).
const LEAD_CAP_WIDTH: u16 = 3;

/// Decorative bookend framing the step sequence.
///
/// Bookends always render in the default divider style; they are layout
/// constants, not derived from step pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDecoration {
    /// Cap before the first marker.
    Lead,
    /// Cap after the last marker.
    Tail,
    /// Rule line beneath the strip. Horizontal mode only.
    Rule,
}

/// One element of the widget's render plan, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperElement {
    /// The marker for the step at `index`.
    Marker { index: usize },
    /// The divider joining a pair of consecutive steps.
    Divider { style: DividerStyle },
    /// A decorative bookend.
    Edge(EdgeDecoration),
}

impl StepperElement {
    /// The divider style this element renders with, if it is a divider-like
    /// element. Markers report `None`; edges always report `Default`.
    pub fn divider_style(&self) -> Option<DividerStyle> {
        match self {
            Self::Marker { .. } => None,
            Self::Divider { style } => Some(*style),
            Self::Edge(_) => Some(DividerStyle::Default),
        }
    }
}

/// The stepper widget.
///
/// Borrows the step list for the duration of one render; the owning host
/// re-supplies the list to change what is displayed.
pub struct Stepper<'a> {
    steps: &'a [Step],
    vertical: bool,
    selected: Option<usize>,
}

impl<'a> Stepper<'a> {
    /// Create a horizontal stepper over the given steps.
    pub fn new(steps: &'a [Step]) -> Self {
        Self {
            steps,
            vertical: false,
            selected: None,
        }
    }

    /// Select vertical layout.
    #[must_use]
    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Highlight the marker at the given index as the UI cursor.
    ///
    /// Presentation only: the highlight never influences divider styles or
    /// event payloads.
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// The ordered render plan: markers, per-gap dividers, and the fixed
    /// edge decorations for the current orientation.
    ///
    /// An empty step list yields an empty plan (nothing is rendered, not
    /// even bookends).
    pub fn elements(&self) -> Vec<StepperElement> {
        if self.steps.is_empty() {
            return Vec::new();
        }

        let styles = divider_styles(self.steps);
        let mut plan = Vec::with_capacity(self.steps.len() * 2 + 2);

        plan.push(StepperElement::Edge(EdgeDecoration::Lead));
        for index in 0..self.steps.len() {
            plan.push(StepperElement::Marker { index });
            if let Some(style) = styles.get(index) {
                plan.push(StepperElement::Divider { style: *style });
            }
        }
        plan.push(StepperElement::Edge(EdgeDecoration::Tail));
        if !self.vertical {
            plan.push(StepperElement::Edge(EdgeDecoration::Rule));
        }

        plan
    }

    /// One rect per step marker, clipped to `area`.
    ///
    /// This is the widget's positional addressing: marker `i` of the step
    /// list is always entry `i` here, whatever its state.
    pub fn marker_areas(&self, area: Rect) -> Vec<Rect> {
        if self.vertical {
            self.steps
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    let row = u16::try_from(1 + 2 * i).unwrap_or(u16::MAX);
                    Rect {
                        x: area.x,
                        y: area.y.saturating_add(row),
                        width: marker_width(step),
                        height: 1,
                    }
                    .intersection(area)
                })
                .collect()
        } else {
            let mut x = area.x.saturating_add(LEAD_CAP_WIDTH);
            self.steps
                .iter()
                .map(|step| {
                    let width = marker_width(step);
                    let rect = Rect {
                        x,
                        y: area.y,
                        width,
                        height: 1,
                    }
                    .intersection(area);
                    // marker, then " ──── " between markers
                    x = x
                        .saturating_add(width)
                        .saturating_add(DIVIDER_SEGMENT_WIDTH as u16 + 2);
                    rect
                })
                .collect()
        }
    }

    /// Map a terminal coordinate to the index of the marker under it.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.marker_areas(area)
            .iter()
            .position(|marker| marker.contains(position))
    }

    /// Render the stepper into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.steps.is_empty() {
            return;
        }

        let lines = if self.vertical {
            self.vertical_lines()
        } else {
            self.horizontal_lines()
        };
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn horizontal_lines(&self) -> Vec<Line<'static>> {
        let styles = divider_styles(self.steps);
        let mut strip: Vec<Span> = Vec::new();

        strip.push(Span::styled("╶─ ", divider_paint(DividerStyle::Default)));
        for (i, step) in self.steps.iter().enumerate() {
            strip.push(self.marker_span(i, step));
            if let Some(style) = styles.get(i) {
                strip.push(Span::styled(
                    format!(" {} ", "─".repeat(DIVIDER_SEGMENT_WIDTH)),
                    divider_paint(*style),
                ));
            }
        }
        strip.push(Span::styled(" ─╴", divider_paint(DividerStyle::Default)));

        let strip_width: usize = strip.iter().map(Span::width).sum();
        let rule = Line::from(Span::styled(
            "─".repeat(strip_width),
            divider_paint(DividerStyle::Default),
        ));

        vec![Line::from(strip), rule]
    }

    fn vertical_lines(&self) -> Vec<Line<'static>> {
        let styles = divider_styles(self.steps);
        let mut lines = Vec::with_capacity(self.steps.len() * 2 + 1);

        lines.push(Line::from(Span::styled(
            "╷",
            divider_paint(DividerStyle::Default),
        )));
        for (i, step) in self.steps.iter().enumerate() {
            lines.push(Line::from(self.marker_span(i, step)));
            if let Some(style) = styles.get(i) {
                lines.push(Line::from(Span::styled("│", divider_paint(*style))));
            }
        }
        lines.push(Line::from(Span::styled(
            "╵",
            divider_paint(DividerStyle::Default),
        )));

        lines
    }

    fn marker_span(&self, index: usize, step: &Step) -> Span<'static> {
        let mut style = Style::default().fg(state_color(step.state()));
        if self.selected == Some(index) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Span::styled(format!("{} {}", state_glyph(step.state()), step.label), style)
    }
}

/// Cells a marker occupies: glyph, space, label.
fn marker_width(step: &Step) -> u16 {
    let text = format!("{} {}", state_glyph(step.state()), step.label);
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

fn state_glyph(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "✓",
        StepState::InProcessing => "◐",
        StepState::Error => "✗",
        StepState::Active => "●",
        StepState::Idle => "○",
    }
}

fn state_color(state: StepState) -> Color {
    match state {
        StepState::Completed => Color::Green,
        StepState::InProcessing => Color::Yellow,
        StepState::Error => Color::Red,
        StepState::Active => Color::Cyan,
        StepState::Idle => Color::DarkGray,
    }
}

fn divider_paint(style: DividerStyle) -> Style {
    let color = match style {
        DividerStyle::Default => Color::DarkGray,
        DividerStyle::InProgress => Color::Yellow,
        DividerStyle::Completed => Color::Green,
    };
    Style::default().fg(color)
}
