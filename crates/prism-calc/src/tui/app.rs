//! Application state: the engine plus everything decorative.

use crate::engine::Engine;

use super::effects::Effects;
use super::input::Command;
use super::keypad::Keypad;
use super::theme::Theme;

/// Top-level state owned by the interface session.
///
/// One instance per session; mutated only through [`App::dispatch`]
/// (input events) and [`App::on_tick`] (cosmetic animation). The engine
/// never sees presentation state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    theme: Theme,
    show_history: bool,
    keypad: Keypad,
    effects: Effects,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::Dark, true)
    }
}

impl App {
    /// Creates an app with the given starting theme.
    #[must_use]
    pub fn new(theme: Theme, effects_enabled: bool) -> Self {
        Self {
            engine: Engine::new(),
            theme,
            show_history: false,
            keypad: Keypad::new(),
            effects: Effects::new(effects_enabled),
            should_quit: false,
        }
    }

    /// The calculator engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the history panel is open.
    #[must_use]
    pub const fn show_history(&self) -> bool {
        self.show_history
    }

    /// The keypad model.
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The cosmetic effect state.
    #[must_use]
    pub const fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Whether the session is over.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one input event to completion.
    pub fn dispatch(&mut self, command: Command) {
        tracing::debug!(?command, "dispatch");

        if let Some(index) = self.keypad.press_for(command) {
            self.effects.spawn_ripple(index);
        }

        match command {
            Command::Digit(d) => self.engine.input_digit(d),
            Command::Decimal => self.engine.input_decimal(),
            Command::Operator(op) => self.engine.input_operator(op),
            Command::Equals => self.engine.equals(),
            Command::Clear => self.engine.clear(),
            Command::Backspace => self.engine.backspace(),
            Command::ToggleHistory => self.show_history = !self.show_history,
            Command::ClearHistory => self.engine.clear_history(),
            Command::CycleTheme => self.theme = self.theme.cycle(),
            Command::Quit => self.should_quit = true,
            Command::Noop => {}
        }
    }

    /// Advances cosmetic animation by one tick. Engine state is never
    /// touched here.
    pub fn on_tick(&mut self) {
        tracing::trace!("tick");
        self.effects.tick();
        if self.effects.ripples().is_empty() {
            self.keypad.release_all();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::Op;
    use crate::tui::effects::RIPPLE_LIFE;

    #[test]
    fn test_new_app_state() {
        let app = App::new(Theme::Ocean, true);
        assert_eq!(app.theme(), Theme::Ocean);
        assert_eq!(app.engine().display(), "0");
        assert!(!app.show_history());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_dispatch_runs_a_chained_calculation() {
        let mut app = App::default();
        for command in [
            Command::Digit(2),
            Command::Operator(Op::Add),
            Command::Digit(3),
            Command::Operator(Op::Add),
            Command::Digit(4),
            Command::Equals,
        ] {
            app.dispatch(command);
        }
        assert_eq!(app.engine().display(), "9");
        assert_eq!(app.engine().history().len(), 2);
    }

    #[test]
    fn test_dispatch_lights_the_matching_key() {
        let mut app = App::default();
        app.dispatch(Command::Digit(7));
        let lit: Vec<&str> = app
            .keypad()
            .buttons()
            .filter(|b| b.pressed)
            .map(|b| b.label)
            .collect();
        assert_eq!(lit, vec!["7"]);
        assert_eq!(app.effects().ripples().len(), 1);
    }

    #[test]
    fn test_tick_eventually_releases_keys() {
        let mut app = App::default();
        app.dispatch(Command::Digit(7));
        for _ in 0..RIPPLE_LIFE {
            app.on_tick();
        }
        assert_eq!(app.keypad().buttons().filter(|b| b.pressed).count(), 0);
    }

    #[test]
    fn test_toggle_history() {
        let mut app = App::default();
        app.dispatch(Command::ToggleHistory);
        assert!(app.show_history());
        app.dispatch(Command::ToggleHistory);
        assert!(!app.show_history());
    }

    #[test]
    fn test_clear_history_via_command() {
        let mut app = App::default();
        for command in [
            Command::Digit(1),
            Command::Operator(Op::Add),
            Command::Digit(1),
            Command::Equals,
        ] {
            app.dispatch(command);
        }
        assert_eq!(app.engine().history().len(), 1);
        app.dispatch(Command::ClearHistory);
        assert!(app.engine().history().is_empty());
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = App::default();
        app.dispatch(Command::CycleTheme);
        assert_eq!(app.theme(), Theme::Neon);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        app.dispatch(Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_noop_changes_nothing() {
        let mut app = App::default();
        app.dispatch(Command::Noop);
        assert_eq!(app.engine().display(), "0");
        assert!(!app.should_quit());
        assert_eq!(app.effects().ripples().len(), 0);
    }

    #[test]
    fn test_tick_never_touches_the_engine() {
        let mut app = App::default();
        app.dispatch(Command::Digit(5));
        app.dispatch(Command::Operator(Op::Multiply));
        let before = app.engine().clone();
        for _ in 0..50 {
            app.on_tick();
        }
        assert_eq!(*app.engine(), before);
    }
}
