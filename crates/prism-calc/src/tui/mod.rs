//! Terminal presentation layer.
//!
//! Observes the engine's outputs (display, pending preview, history)
//! and feeds nothing back into it besides the user's input events.

pub mod app;
pub mod effects;
pub mod input;
pub mod keypad;
pub mod theme;
pub mod ui;

pub use app::App;
pub use input::{Command, InputHandler};
pub use keypad::{Button, ButtonClass, Keypad, KeypadWidget};
pub use theme::{Palette, Theme};
pub use ui::{compute_layout, render, Areas, CalculatorUI};
