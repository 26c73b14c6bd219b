//! The calculator engine: an eager four-function state machine.
//!
//! Every input event is a total transition over a small state: the
//! display string, an optional pending `(operand, operator)` pair, a
//! fresh-entry flag and the history log. Nothing here can fail, block
//! or read a clock; the presentation layer observes the outputs and
//! never feeds back in.

mod history;
mod op;

pub use history::{History, HistoryEntry};
pub use op::Op;

/// Formats a computed value the way the display shows it.
///
/// Uses the shortest decimal that round-trips, so `5.0` renders as `5`
/// and `0.1 + 0.2` as `0.30000000000000004`. Negative zero renders as
/// `0`, and a non-finite value (reachable only by typing hundreds of
/// digits) falls back to `0` so the display always parses to a finite
/// number.
#[must_use]
pub fn stringify(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// The calculator state machine.
///
/// State starts at display `"0"` with nothing pending and an empty
/// history, and lives only for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// Current display string. Always parses to a finite number.
    display: String,
    /// Left operand and operator of an in-progress binary operation.
    /// The pairing makes "operator without operand" unrepresentable.
    pending: Option<(f64, Op)>,
    /// When set, the next digit starts a new number instead of
    /// extending the display.
    fresh_entry: bool,
    /// Completed calculations, oldest first.
    history: History,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            fresh_entry: false,
            history: History::new(),
        }
    }

    /// Returns the current display string.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the display parsed as a number.
    ///
    /// The transition rules keep the display parseable; the zero
    /// fallback covers the one stray shape `backspace` can leave
    /// behind (a lone `-` after erasing a negative result).
    #[must_use]
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Returns the pending-expression preview, e.g. `"2 +"`, or `None`
    /// when no operation is in progress.
    #[must_use]
    pub fn pending_preview(&self) -> Option<String> {
        self.pending
            .map(|(lhs, op)| format!("{} {}", stringify(lhs), op.symbol()))
    }

    /// True when the next digit starts a new number.
    #[must_use]
    pub const fn awaiting_entry(&self) -> bool {
        self.fresh_entry
    }

    /// Returns the history log.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Enters one digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.fresh_entry {
            self.display = ch.to_string();
            self.fresh_entry = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// Enters the decimal point. A second point without digits in
    /// between is a no-op.
    pub fn input_decimal(&mut self) {
        if self.fresh_entry {
            self.display = "0.".to_string();
            self.fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Chooses an operator, resolving any operation already pending.
    ///
    /// Successive operator presses chain: `2 + 3 +` computes the
    /// running total (5) before arming the next `+`.
    pub fn input_operator(&mut self, op: Op) {
        let value = self.value();
        self.pending = match self.pending.take() {
            None => Some((value, op)),
            Some((lhs, prev)) => {
                let result = prev.apply(lhs, value);
                self.display = stringify(result);
                self.history.record(lhs, prev, value, result);
                Some((result, op))
            }
        };
        self.fresh_entry = true;
    }

    /// Resolves the pending operation. A no-op when nothing is pending.
    pub fn equals(&mut self) {
        if let Some((lhs, op)) = self.pending.take() {
            let rhs = self.value();
            let result = op.apply(lhs, rhs);
            self.display = stringify(result);
            self.history.record(lhs, op, rhs, result);
            self.fresh_entry = true;
        }
    }

    /// Resets the display and pending state. History is untouched.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.fresh_entry = false;
    }

    /// Removes the last display character; an emptied display becomes
    /// `"0"`. Pending state and the fresh-entry flag are untouched.
    pub fn backspace(&mut self) {
        self.display.pop();
        if self.display.is_empty() {
            self.display = "0".to_string();
        }
    }

    /// Empties the history log. Engine state is otherwise untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.value(), 0.0);
        assert!(engine.pending_preview().is_none());
        assert!(!engine.awaiting_entry());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_digits_replace_leading_zero() {
        let mut engine = Engine::new();
        engine.input_digit(0);
        assert_eq!(engine.display(), "0");
        engine.input_digit(7);
        assert_eq!(engine.display(), "7");
        engine.input_digit(3);
        assert_eq!(engine.display(), "73");
    }

    #[test]
    fn test_digit_out_of_range_ignored() {
        let mut engine = Engine::new();
        engine.input_digit(10);
        engine.input_digit(255);
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_decimal_point_is_idempotent() {
        let mut engine = Engine::new();
        engine.input_decimal();
        assert_eq!(engine.display(), "0.");
        engine.input_decimal();
        assert_eq!(engine.display(), "0.");
        engine.input_digit(5);
        engine.input_decimal();
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn test_fresh_entry_starts_new_number() {
        let mut engine = Engine::new();
        engine.input_digit(9);
        engine.input_operator(Op::Add);
        assert!(engine.awaiting_entry());
        engine.input_digit(4);
        assert_eq!(engine.display(), "4");
        assert!(!engine.awaiting_entry());
    }

    #[test]
    fn test_fresh_entry_decimal_starts_zero_point() {
        let mut engine = Engine::new();
        engine.input_digit(9);
        engine.input_operator(Op::Add);
        engine.input_decimal();
        assert_eq!(engine.display(), "0.");
    }

    #[test]
    fn test_first_operator_arms_pending() {
        let mut engine = Engine::new();
        engine.input_digit(2);
        engine.input_operator(Op::Add);
        assert_eq!(engine.pending_preview().unwrap(), "2 +");
        assert_eq!(engine.display(), "2");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_operator_chaining_computes_running_total() {
        let mut engine = Engine::new();
        engine.input_digit(2);
        engine.input_operator(Op::Add);
        engine.input_digit(3);
        engine.input_operator(Op::Add);
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.pending_preview().unwrap(), "5 +");
        engine.input_digit(4);
        engine.equals();

        assert_eq!(engine.display(), "9");
        assert!(engine.pending_preview().is_none());
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.history().get(0).unwrap().display(), "2 + 3 = 5");
        assert_eq!(engine.history().get(1).unwrap().display(), "5 + 4 = 9");
    }

    #[test]
    fn test_equals_without_pending_is_identity() {
        let mut engine = Engine::new();
        engine.input_digit(4);
        engine.input_digit(2);
        let before = engine.clone();
        engine.equals();
        assert_eq!(engine, before);
    }

    #[test]
    fn test_equals_resolves_and_clears_pending() {
        let mut engine = Engine::new();
        engine.input_digit(6);
        engine.input_operator(Op::Multiply);
        engine.input_digit(7);
        engine.equals();

        assert_eq!(engine.display(), "42");
        assert!(engine.pending_preview().is_none());
        assert!(engine.awaiting_entry());
        assert_eq!(engine.history().last().unwrap().display(), "6 × 7 = 42");
    }

    #[test]
    fn test_divide_by_zero_displays_zero() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.input_operator(Op::Divide);
        engine.input_digit(0);
        engine.equals();

        assert_eq!(engine.display(), "0");
        assert_eq!(engine.history().last().unwrap().display(), "5 ÷ 0 = 0");
    }

    #[test]
    fn test_clear_resets_everything_but_history() {
        let mut engine = Engine::new();
        engine.input_digit(8);
        engine.input_operator(Op::Subtract);
        engine.input_digit(3);
        engine.equals();
        engine.input_operator(Op::Add);
        engine.clear();

        assert_eq!(engine.display(), "0");
        assert!(engine.pending_preview().is_none());
        assert!(!engine.awaiting_entry());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_backspace_trims_one_character() {
        let mut engine = Engine::new();
        engine.input_digit(1);
        engine.input_digit(2);
        engine.input_digit(3);
        engine.backspace();
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn test_backspace_on_zero_stays_zero() {
        let mut engine = Engine::new();
        engine.backspace();
        assert_eq!(engine.display(), "0");
        engine.input_digit(5);
        engine.backspace();
        engine.backspace();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_backspace_does_not_touch_pending() {
        let mut engine = Engine::new();
        engine.input_digit(7);
        engine.input_operator(Op::Add);
        engine.input_digit(1);
        engine.input_digit(2);
        engine.backspace();
        assert_eq!(engine.display(), "1");
        assert_eq!(engine.pending_preview().unwrap(), "7 +");
    }

    #[test]
    fn test_backspace_negative_result_keeps_value_total() {
        let mut engine = Engine::new();
        engine.input_digit(3);
        engine.input_operator(Op::Subtract);
        engine.input_digit(8);
        engine.equals();
        assert_eq!(engine.display(), "-5");
        engine.backspace();
        // Display is now "-", which still reads back as a number.
        assert_eq!(engine.value(), 0.0);
    }

    #[test]
    fn test_decimal_arithmetic_round_trips_like_the_display() {
        let mut engine = Engine::new();
        engine.input_decimal();
        engine.input_digit(1);
        engine.input_operator(Op::Add);
        engine.input_decimal();
        engine.input_digit(2);
        engine.equals();
        assert_eq!(engine.display(), "0.30000000000000004");
    }

    #[test]
    fn test_clear_history_only_touches_history() {
        let mut engine = Engine::new();
        engine.input_digit(2);
        engine.input_operator(Op::Add);
        engine.input_digit(2);
        engine.equals();
        engine.input_digit(9);
        engine.clear_history();

        assert!(engine.history().is_empty());
        assert_eq!(engine.display(), "9");
    }

    #[test]
    fn test_stringify_integers_and_decimals() {
        assert_eq!(stringify(5.0), "5");
        assert_eq!(stringify(-42.0), "-42");
        assert_eq!(stringify(3.14), "3.14");
        assert_eq!(stringify(1.5), "1.5");
    }

    #[test]
    fn test_stringify_normalizes_zero() {
        assert_eq!(stringify(0.0), "0");
        assert_eq!(stringify(-0.0), "0");
    }

    #[test]
    fn test_stringify_non_finite_falls_back_to_zero() {
        assert_eq!(stringify(f64::INFINITY), "0");
        assert_eq!(stringify(f64::NEG_INFINITY), "0");
        assert_eq!(stringify(f64::NAN), "0");
    }
}
