//! The button grid: labels, dispatched actions, and cursor movement.

use crossterm::event::KeyCode;
use reckon_core::{Action, Digit, Operation};

/// A button on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// `AC` - reset the calculator.
    Clear,
    /// `DEL` - remove the last entered character.
    Delete,
    /// A digit or decimal point key.
    Digit(Digit),
    /// An operator key.
    Op(Operation),
    /// `=` - evaluate the pending expression.
    Equals,
}

impl Button {
    /// Returns the label painted on the button.
    pub fn label(self) -> String {
        match self {
            Button::Clear => "AC".to_owned(),
            Button::Delete => "DEL".to_owned(),
            Button::Digit(digit) => digit.to_string(),
            Button::Op(op) => op.to_string(),
            Button::Equals => "=".to_owned(),
        }
    }

    /// Returns the action this button dispatches when pressed.
    pub fn action(self) -> Action {
        match self {
            Button::Clear => Action::Clear,
            Button::Delete => Action::DeleteDigit,
            Button::Digit(digit) => Action::AddDigit(digit),
            Button::Op(op) => Action::ChooseOperation(op),
            Button::Equals => Action::Evaluate,
        }
    }
}

/// Grid width in column units.
pub const GRID_COLS: u16 = 4;

/// The keypad rows as (button, column span) cells.
///
/// Matches the classic layout: clear spans two columns top-left, equals
/// spans two columns bottom-right.
pub const LAYOUT: [&[(Button, u16)]; 5] = [
    &[
        (Button::Clear, 2),
        (Button::Delete, 1),
        (Button::Op(Operation::Divide), 1),
    ],
    &[
        (Button::Digit(Digit::Seven), 1),
        (Button::Digit(Digit::Eight), 1),
        (Button::Digit(Digit::Nine), 1),
        (Button::Op(Operation::Multiply), 1),
    ],
    &[
        (Button::Digit(Digit::Four), 1),
        (Button::Digit(Digit::Five), 1),
        (Button::Digit(Digit::Six), 1),
        (Button::Op(Operation::Add), 1),
    ],
    &[
        (Button::Digit(Digit::One), 1),
        (Button::Digit(Digit::Two), 1),
        (Button::Digit(Digit::Three), 1),
        (Button::Op(Operation::Subtract), 1),
    ],
    &[
        (Button::Digit(Digit::Point), 1),
        (Button::Digit(Digit::Zero), 1),
        (Button::Equals, 2),
    ],
];

/// Position of the highlighted button: row index and cell index within
/// that row's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Row in [`LAYOUT`].
    pub row: usize,
    /// Cell within the row.
    pub cell: usize,
}

impl Cursor {
    /// Returns the button under the cursor.
    pub fn button(self) -> Button {
        LAYOUT[self.row][self.cell].0
    }
}

impl Default for Cursor {
    fn default() -> Self {
        // Start on the `AC` button.
        Self { row: 0, cell: 0 }
    }
}

/// Moves the cursor based on arrow keys.
///
/// Other keys, and movement off the grid edge, leave the cursor alone.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let Cursor { row, cell } = cursor;

    match key {
        KeyCode::Left => Cursor {
            row,
            cell: cell.saturating_sub(1),
        },
        KeyCode::Right => Cursor {
            row,
            cell: (cell + 1).min(LAYOUT[row].len() - 1),
        },
        KeyCode::Up => {
            let row = row.saturating_sub(1);
            Cursor {
                row,
                cell: cell.min(LAYOUT[row].len() - 1),
            }
        }
        KeyCode::Down => {
            let row = (row + 1).min(LAYOUT.len() - 1);
            Cursor {
                row,
                cell: cell.min(LAYOUT[row].len() - 1),
            }
        }
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_spans_fill_every_row() {
        for row in LAYOUT {
            let total: u16 = row.iter().map(|(_, span)| span).sum();
            assert_eq!(total, GRID_COLS);
        }
    }

    #[test]
    fn cursor_stays_on_the_grid() {
        let mut cursor = Cursor::default();
        for key in [KeyCode::Up, KeyCode::Left] {
            cursor = move_cursor(cursor, key);
        }
        assert_eq!(cursor, Cursor::default());

        for _ in 0..10 {
            cursor = move_cursor(cursor, KeyCode::Down);
            cursor = move_cursor(cursor, KeyCode::Right);
        }
        assert_eq!(cursor.row, LAYOUT.len() - 1);
        assert_eq!(cursor.cell, LAYOUT[cursor.row].len() - 1);
        assert_eq!(cursor.button(), Button::Equals);
    }

    #[test]
    fn moving_between_rows_clamps_the_cell() {
        // Rightmost cell of a four-cell row, moving down into a
        // three-cell row.
        let cursor = Cursor { row: 3, cell: 3 };
        let moved = move_cursor(cursor, KeyCode::Down);
        assert_eq!(moved, Cursor { row: 4, cell: 2 });
    }

    #[test]
    fn buttons_dispatch_their_actions() {
        assert_eq!(Button::Clear.action(), Action::Clear);
        assert_eq!(Button::Equals.action(), Action::Evaluate);
        assert_eq!(
            Button::Digit(Digit::Seven).action(),
            Action::AddDigit(Digit::Seven)
        );
        assert_eq!(
            Button::Op(Operation::Divide).action(),
            Action::ChooseOperation(Operation::Divide)
        );
    }
}
