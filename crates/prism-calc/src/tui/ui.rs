//! Rendering: a pure function of the app state onto the frame.
//!
//! Layout is a centered calculator column (header with the theme dots,
//! display with the pending preview, keypad, footer) plus the optional
//! history panel to the right. The particle backdrop is painted first,
//! then widgets over it, then ripples on top.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Widget};
use ratatui::Frame;

use crate::engine::{stringify, Engine};

use super::app::App;
use super::keypad::KeypadWidget;
use super::theme::{Palette, Theme};

/// Application title shown in the header.
pub const TITLE: &str = "Prism Calc";

/// Placeholder shown in an empty history panel.
pub const EMPTY_HISTORY: &str = "No calculations yet";

/// History entries shown at once; storage is unbounded.
pub const HISTORY_SHOWN: usize = 10;

/// Display characters before switching to exponential notation.
const DISPLAY_WIDTH: usize = 10;

const CALC_WIDTH: u16 = 34;
const CALC_HEIGHT: u16 = 24;
const HISTORY_WIDTH: u16 = 26;

/// The rectangles every part of the interface is laid out into.
///
/// Shared between the renderer and the mouse hit-test path so a click
/// always lands on the same cells that were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// The centered calculator column.
    pub calculator: Rect,
    /// Title and theme dots.
    pub header: Rect,
    /// The display panel.
    pub display: Rect,
    /// The keypad grid.
    pub keypad: Rect,
    /// Branding and hints.
    pub footer: Rect,
    /// The history panel, when open and there is room for it.
    pub history: Option<Rect>,
}

/// Centers the calculator (and history panel, when open) in `area` and
/// splits the column into its sections.
#[must_use]
pub fn compute_layout(area: Rect, show_history: bool) -> Areas {
    let total = if show_history {
        CALC_WIDTH + 1 + HISTORY_WIDTH
    } else {
        CALC_WIDTH
    };
    let width = total.min(area.width);
    let height = CALC_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    let calculator = Rect::new(x, y, CALC_WIDTH.min(width), height);
    // The panel only appears when a readable slice of it fits.
    let history = (show_history && width >= CALC_WIDTH + 1 + HISTORY_WIDTH / 2).then(|| {
        Rect::new(
            x + CALC_WIDTH + 1,
            y,
            width - CALC_WIDTH - 1,
            height,
        )
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(calculator);

    Areas {
        calculator,
        header: chunks[0],
        display: chunks[1],
        keypad: chunks[2],
        footer: chunks[3],
        history,
    }
}

/// Renders the whole interface.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// The top-level widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a App,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the widget over the app state.
    #[must_use]
    pub const fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.app.theme().palette();

        buf.set_style(area, Style::default().bg(palette.background));
        if self.app.effects().enabled() {
            render_particles(self.app, area, buf, &palette);
        }

        let areas = compute_layout(area, self.app.show_history());
        render_header(self.app.theme(), areas.header, buf, &palette);
        render_display(self.app.engine(), areas.display, buf, &palette);
        KeypadWidget::new(self.app.keypad(), &palette).render(areas.keypad, buf);
        render_ripples(self.app, areas.keypad, buf, &palette);
        render_footer(self.app.theme(), areas.footer, buf, &palette);
        if let Some(history_area) = areas.history {
            render_history(self.app.engine(), history_area, buf, &palette);
        }
    }
}

fn render_particles(app: &App, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let style = Style::default().fg(palette.particle).bg(palette.background);
    for (x, y, bright) in app.effects().particles.cells(area) {
        let dot = if bright { "✦" } else { "·" };
        buf.set_string(x, y, dot, style);
    }
}

fn render_header(theme: Theme, area: Rect, buf: &mut Buffer, palette: &Palette) {
    Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .render(area, buf);

    let mut dots: Vec<Span> = Vec::new();
    for candidate in Theme::ALL {
        let glyph = if candidate == theme { "◉" } else { "○" };
        dots.push(Span::styled(glyph, Style::default().fg(candidate.swatch())));
        dots.push(Span::raw(" "));
    }
    dots.push(Span::styled("[t]", Style::default().fg(palette.hint)));
    Paragraph::new(Line::from(dots))
        .alignment(Alignment::Right)
        .render(area, buf);
}

/// Shortens the display string the way the interface does: anything
/// longer than ten characters switches to exponential notation.
#[must_use]
pub fn display_text(engine: &Engine) -> String {
    let display = engine.display();
    if display.len() > DISPLAY_WIDTH {
        format!("{:.5e}", engine.value())
    } else {
        display.to_string()
    }
}

fn render_display(engine: &Engine, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let preview = engine.pending_preview().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            preview,
            Style::default().fg(palette.preview),
        )),
        Line::from(Span::styled(
            display_text(engine),
            Style::default()
                .fg(palette.display)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.surface)),
        )
        .render(area, buf);
}

fn render_ripples(app: &App, keypad_area: Rect, buf: &mut Buffer, palette: &Palette) {
    let style = Style::default().fg(palette.accent);
    for ripple in app.effects().ripples() {
        let Some(rect) = app.keypad().button_rect(ripple.button, keypad_area) else {
            continue;
        };
        let grow = u16::from(ripple.age);
        let ring = Rect {
            x: rect.x.saturating_sub(grow),
            y: rect.y.saturating_sub(grow / 2),
            width: rect.width + 2 * grow,
            height: rect.height + grow,
        }
        .intersection(keypad_area);
        if ring.width == 0 || ring.height == 0 {
            continue;
        }

        let right = ring.x + ring.width - 1;
        let bottom = ring.y + ring.height - 1;
        for (x, y) in [
            (ring.x, ring.y),
            (right, ring.y),
            (ring.x, bottom),
            (right, bottom),
            (ring.x + ring.width / 2, ring.y),
            (ring.x + ring.width / 2, bottom),
        ] {
            buf.set_string(x, y, "∘", style);
        }
    }
}

fn render_footer(theme: Theme, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "✨ Prism Calculator ✨",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("Press keys for quick input • {} theme", theme.name()),
            Style::default().fg(palette.hint),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_history(engine: &Engine, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let history = engine.history();

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(Span::styled(
            EMPTY_HISTORY,
            Style::default().fg(palette.hint),
        ))]
    } else {
        history
            .last_n(HISTORY_SHOWN)
            .into_iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(
                            "{} {} {}",
                            stringify(entry.lhs),
                            entry.op.symbol(),
                            stringify(entry.rhs)
                        ),
                        Style::default().fg(palette.hint),
                    ),
                    Span::raw(" = "),
                    Span::styled(
                        stringify(entry.result),
                        Style::default().fg(palette.accent),
                    ),
                ]))
            })
            .collect()
    };

    List::new(items)
        .block(
            Block::default()
                .title(" History ")
                .title_bottom(" Ctrl-L clears ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.surface)),
        )
        .render(area, buf);
}
