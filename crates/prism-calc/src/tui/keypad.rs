//! The button grid.
//!
//! Reproduces the classic layout, including the double-width zero and
//! the double-height equals key:
//!
//! ```text
//! [AC] [⌫ ] [÷ ] [× ]
//! [7 ] [8 ] [9 ] [− ]
//! [4 ] [5 ] [6 ] [+ ]
//! [1 ] [2 ] [3 ] [= ]
//! [0       ] [. ] [= ]   the = key spans both bottom rows
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Widget;

use crate::engine::Op;

use super::input::Command;
use super::theme::Palette;

/// Grid columns.
pub const COLS: u16 = 4;
/// Grid rows.
pub const ROWS: u16 = 5;

/// Visual class of a button, deciding its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    /// Digits and the decimal point.
    Digit,
    /// The four arithmetic operators.
    Operator,
    /// The equals key.
    Equals,
    /// The clear key.
    Clear,
    /// Backspace.
    Function,
}

/// A single keypad button and its place in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// Text on the key.
    pub label: &'static str,
    /// The command the key triggers.
    command: Command,
    /// Grid row of the top-left cell.
    pub row: u16,
    /// Grid column of the top-left cell.
    pub col: u16,
    /// Rows covered.
    pub row_span: u16,
    /// Columns covered.
    pub col_span: u16,
    /// Whether the key is currently lit by a press.
    pub pressed: bool,
}

impl Button {
    const fn new(label: &'static str, command: Command, row: u16, col: u16) -> Self {
        Self {
            label,
            command,
            row,
            col,
            row_span: 1,
            col_span: 1,
            pressed: false,
        }
    }

    const fn spanning(
        label: &'static str,
        command: Command,
        row: u16,
        col: u16,
        row_span: u16,
        col_span: u16,
    ) -> Self {
        Self {
            label,
            command,
            row,
            col,
            row_span,
            col_span,
            pressed: false,
        }
    }

    /// The command this button triggers.
    #[must_use]
    pub const fn command(&self) -> Command {
        self.command
    }

    /// Whether the grid cell `(row, col)` falls inside this button.
    #[must_use]
    pub const fn covers(&self, row: u16, col: u16) -> bool {
        row >= self.row
            && row < self.row + self.row_span
            && col >= self.col
            && col < self.col + self.col_span
    }

    /// The button's visual class.
    #[must_use]
    pub const fn class(&self) -> ButtonClass {
        match self.command {
            Command::Digit(_) | Command::Decimal => ButtonClass::Digit,
            Command::Operator(_) => ButtonClass::Operator,
            Command::Equals => ButtonClass::Equals,
            Command::Clear => ButtonClass::Clear,
            _ => ButtonClass::Function,
        }
    }

    /// The class color under the given palette.
    #[must_use]
    pub const fn color(&self, palette: &Palette) -> Color {
        match self.class() {
            ButtonClass::Digit => palette.digit,
            ButtonClass::Operator => palette.operator,
            ButtonClass::Equals => palette.equals,
            ButtonClass::Clear => palette.clear,
            ButtonClass::Function => palette.function,
        }
    }
}

/// The full keypad.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<Button>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard 18-button keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            Button::new("AC", Command::Clear, 0, 0),
            Button::new("⌫", Command::Backspace, 0, 1),
            Button::new("÷", Command::Operator(Op::Divide), 0, 2),
            Button::new("×", Command::Operator(Op::Multiply), 0, 3),
            Button::new("7", Command::Digit(7), 1, 0),
            Button::new("8", Command::Digit(8), 1, 1),
            Button::new("9", Command::Digit(9), 1, 2),
            Button::new("−", Command::Operator(Op::Subtract), 1, 3),
            Button::new("4", Command::Digit(4), 2, 0),
            Button::new("5", Command::Digit(5), 2, 1),
            Button::new("6", Command::Digit(6), 2, 2),
            Button::new("+", Command::Operator(Op::Add), 2, 3),
            Button::new("1", Command::Digit(1), 3, 0),
            Button::new("2", Command::Digit(2), 3, 1),
            Button::new("3", Command::Digit(3), 3, 2),
            Button::spanning("=", Command::Equals, 3, 3, 2, 1),
            Button::spanning("0", Command::Digit(0), 4, 0, 1, 2),
            Button::new(".", Command::Decimal, 4, 2),
        ];
        Self { buttons }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the button at `index`.
    #[must_use]
    pub fn button(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    /// Finds the button that triggers `command`.
    #[must_use]
    pub fn find_by_command(&self, command: Command) -> Option<usize> {
        self.buttons.iter().position(|b| b.command == command)
    }

    /// Lights the button for `command`, releasing all others. Returns
    /// the button's index, or `None` for commands with no key.
    pub fn press_for(&mut self, command: Command) -> Option<usize> {
        self.release_all();
        let index = self.find_by_command(command)?;
        self.buttons[index].pressed = true;
        Some(index)
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// The pixel rectangle of the button at `index` inside the keypad
    /// area, with a one-cell gutter kept free on the right and bottom.
    #[must_use]
    pub fn button_rect(&self, index: usize, area: Rect) -> Option<Rect> {
        let button = self.buttons.get(index)?;
        let cell_w = area.width / COLS;
        let cell_h = area.height / ROWS;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        let x = area.x + button.col * cell_w;
        let y = area.y + button.row * cell_h;
        let width = (cell_w * button.col_span).saturating_sub(1).max(1);
        let height = (cell_h * button.row_span).saturating_sub(1).max(1);
        Some(Rect {
            x,
            y,
            width,
            height,
        })
    }

    /// Maps a screen position inside `area` to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }
        let cell_w = area.width / COLS;
        let cell_h = area.height / ROWS;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        let col = (x - area.x) / cell_w;
        let row = (y - area.y) / cell_h;
        if col >= COLS || row >= ROWS {
            return None;
        }
        self.buttons.iter().position(|b| b.covers(row, col))
    }
}

/// Renders the keypad under a palette.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: &'a Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates the widget.
    #[must_use]
    pub const fn new(keypad: &'a Keypad, palette: &'a Palette) -> Self {
        Self { keypad, palette }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for index in 0..self.keypad.button_count() {
            let (Some(button), Some(rect)) = (
                self.keypad.button(index),
                self.keypad.button_rect(index, area),
            ) else {
                continue;
            };

            let color = button.color(self.palette);
            let style = if button.pressed {
                Style::default()
                    .fg(self.palette.background)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color).bg(self.palette.surface)
            };
            buf.set_style(rect, style);

            let label_width = button.label.chars().count() as u16;
            let x = rect.x + rect.width.saturating_sub(label_width) / 2;
            let y = rect.y + rect.height / 2;
            buf.set_span(x, y, &Span::styled(button.label, style), rect.width);
        }
    }
}
