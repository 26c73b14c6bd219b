//! Prism Calc: a decorative four-function calculator for the terminal.
//!
//! The crate splits into two halves:
//!
//! - [`engine`]: the input/evaluation state machine. Total over every
//!   input, no error states, no clock, no persistence.
//! - [`tui`]: presentation. Themed keypad, click ripples, a particle
//!   backdrop, keyboard/mouse mapping and rendering. It observes the
//!   engine's outputs and never feeds back into them.
//!
//! # Example
//!
//! ```rust
//! use prism_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.input_digit(2);
//! engine.input_operator(Op::Add);
//! engine.input_digit(3);
//! engine.equals();
//! assert_eq!(engine.display(), "5");
//! assert_eq!(engine.history().last().unwrap().display(), "2 + 3 = 5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod engine;
pub mod error;
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::engine::{stringify, Engine, History, HistoryEntry, Op};
    pub use crate::error::{AppError, AppResult};
    pub use crate::tui::{App, Command, InputHandler, Keypad, Theme};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_a_full_session() {
        let mut app = App::new(Theme::Dark, true);
        for command in [
            Command::Digit(6),
            Command::Operator(Op::Multiply),
            Command::Digit(7),
            Command::Equals,
        ] {
            app.dispatch(command);
        }
        assert_eq!(app.engine().display(), "42");
    }

    #[test]
    fn test_engine_direct() {
        let mut engine = Engine::new();
        engine.input_digit(9);
        engine.input_operator(Op::Subtract);
        engine.input_digit(4);
        engine.equals();
        assert_eq!(engine.display(), "5");
        assert_eq!(stringify(engine.value()), "5");
    }
}
