//! The closed set of binary operators.

use serde::{Deserialize, Serialize};

/// A binary operator.
///
/// `Equals` is part of the set so that applying it passes the right-hand
/// operand through unchanged; the keypad never places it in the pending
/// slot, but the engine stays total if it ever gets there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
    /// Pass-through (`=`)
    Equals,
}

impl Op {
    /// Returns the symbol used in the pending preview and history lines.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
        }
    }

    /// Maps a typed character to an operator.
    ///
    /// Accepts the plain keyboard keys (`*`, `/`) as well as the keypad
    /// glyphs (`×`, `÷`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Total over all inputs: a zero divisor yields 0 rather than an
    /// error, so no keystroke can surface a failure state.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
            Self::Equals => b,
        }
    }
}
