//! Keyboard and mouse input mapping.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::engine::Op;

use super::keypad::Keypad;

/// One discrete input event, already resolved to its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter a digit (0-9).
    Digit(u8),
    /// Enter the decimal point.
    Decimal,
    /// Choose an operator.
    Operator(Op),
    /// Resolve the pending operation.
    Equals,
    /// Reset display and pending state.
    Clear,
    /// Remove the last display character.
    Backspace,
    /// Show or hide the history panel.
    ToggleHistory,
    /// Empty the history log.
    ClearHistory,
    /// Switch to the next theme.
    CycleTheme,
    /// Leave the application.
    Quit,
    /// Ignored input.
    Noop,
}

/// Maps terminal events to [`Command`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to a command.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Command {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => Command::Quit,
                KeyCode::Char('l') => Command::ClearHistory,
                _ => Command::Noop,
            };
        }

        match code {
            KeyCode::Char(c) => Self::handle_char(c),
            KeyCode::Backspace => Command::Backspace,
            KeyCode::Enter => Command::Equals,
            KeyCode::Esc => Command::Clear,
            _ => Command::Noop,
        }
    }

    /// Maps a typed character to a command.
    #[must_use]
    pub fn handle_char(c: char) -> Command {
        if let Some(d) = c.to_digit(10) {
            return Command::Digit(d as u8);
        }
        match c {
            '.' => Command::Decimal,
            '=' => Command::Equals,
            'c' | 'C' => Command::Clear,
            'h' | 'H' => Command::ToggleHistory,
            't' | 'T' => Command::CycleTheme,
            'q' | 'Q' => Command::Quit,
            _ => Op::from_char(c).map_or(Command::Noop, Command::Operator),
        }
    }

    /// Maps a mouse event to a command via the keypad's hit test.
    ///
    /// `keypad_area` is the rectangle the keypad was laid out into;
    /// clicks elsewhere, and anything but a left press, are ignored.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad: &Keypad, keypad_area: Rect) -> Command {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            if let Some(index) = keypad.hit_test(keypad_area, event.column, event.row) {
                if let Some(button) = keypad.button(index) {
                    return button.command();
                }
            }
        }
        Command::Noop
    }
}
