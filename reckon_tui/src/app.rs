//! Application state and keystroke handling.

use crate::keypad::{self, Button, Cursor};
use crossterm::event::KeyCode;
use reckon_core::{CalculatorState, format_operand, reduce};
use tracing::debug;

/// Main application state: the single live calculator state plus the
/// keypad cursor.
pub struct App {
    state: CalculatorState,
    cursor: Cursor,
}

impl App {
    /// Creates a new application with an empty calculator.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            cursor: Cursor::default(),
        }
    }

    /// Returns the current calculator state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the keypad cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Moves the cursor for arrow keys, presses the highlighted button
    /// on Enter.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.press(self.cursor.button()),
            code => self.cursor = keypad::move_cursor(self.cursor, code),
        }
    }

    /// Moves the cursor to a clicked button and presses it.
    pub fn click(&mut self, cursor: Cursor, button: Button) {
        self.cursor = cursor;
        self.press(button);
    }

    /// Dispatches a button press through the reducer, replacing the
    /// state wholesale.
    pub fn press(&mut self, button: Button) {
        let action = button.action();
        debug!(%action, "Dispatching keystroke");
        self.state = reduce(&self.state, action);
    }

    /// Top display line: the banked operand and the pending operator.
    pub fn previous_line(&self) -> String {
        let operand = format_operand(self.state.previous_operand()).unwrap_or_default();
        match self.state.operation() {
            Some(op) => format!("{operand} {op}"),
            None => operand,
        }
    }

    /// Bottom display line: the operand being entered.
    pub fn current_line(&self) -> String {
        format_operand(self.state.current_operand()).unwrap_or_default()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reckon_core::{Digit, Operation};

    #[test]
    fn pressing_buttons_drives_the_calculator() {
        let mut app = App::new();
        app.press(Button::Digit(Digit::Five));
        app.press(Button::Op(Operation::Add));
        app.press(Button::Digit(Digit::Three));
        app.press(Button::Equals);

        assert_eq!(app.current_line(), "8");
        assert_eq!(app.previous_line(), "");
    }

    #[test]
    fn display_lines_show_the_pending_expression() {
        let mut app = App::new();
        for digit in [Digit::One, Digit::Two, Digit::Three, Digit::Four] {
            app.press(Button::Digit(digit));
        }
        app.press(Button::Op(Operation::Divide));

        assert_eq!(app.previous_line(), "1,234 ÷");
        assert_eq!(app.current_line(), "");
    }
}
