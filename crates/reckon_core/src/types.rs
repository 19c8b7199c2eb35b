//! Core domain types for the calculator.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A keypad digit: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Digit {
    /// Digit `0`.
    Zero,
    /// Digit `1`.
    One,
    /// Digit `2`.
    Two,
    /// Digit `3`.
    Three,
    /// Digit `4`.
    Four,
    /// Digit `5`.
    Five,
    /// Digit `6`.
    Six,
    /// Digit `7`.
    Seven,
    /// Digit `8`.
    Eight,
    /// Digit `9`.
    Nine,
    /// The decimal point.
    Point,
}

impl Digit {
    /// Returns the keypad character for this digit.
    pub fn as_char(self) -> char {
        match self {
            Digit::Zero => '0',
            Digit::One => '1',
            Digit::Two => '2',
            Digit::Three => '3',
            Digit::Four => '4',
            Digit::Five => '5',
            Digit::Six => '6',
            Digit::Seven => '7',
            Digit::Eight => '8',
            Digit::Nine => '9',
            Digit::Point => '.',
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Digit::Zero),
            '1' => Ok(Digit::One),
            '2' => Ok(Digit::Two),
            '3' => Ok(Digit::Three),
            '4' => Ok(Digit::Four),
            '5' => Ok(Digit::Five),
            '6' => Ok(Digit::Six),
            '7' => Ok(Digit::Seven),
            '8' => Ok(Digit::Eight),
            '9' => Ok(Digit::Nine),
            '.' => Ok(Digit::Point),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Operation {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`*`).
    Multiply,
    /// True division (`÷`).
    Divide,
}

impl Operation {
    /// Returns the display symbol for this operation.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '÷',
        }
    }

    /// Applies this operation to two operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operation::Add),
            '-' => Ok(Operation::Subtract),
            '*' => Ok(Operation::Multiply),
            '÷' => Ok(Operation::Divide),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Complete calculator state.
///
/// Operands are held as strings to preserve the exact user-typed digit
/// sequence until evaluation. An absent field means "nothing entered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The operand currently being entered, or the last computed result.
    current_operand: Option<String>,
    /// The operand banked when an operation was chosen.
    previous_operand: Option<String>,
    /// The pending operation awaiting a second operand.
    operation: Option<Operation>,
    /// Set after an evaluation: the next digit replaces the display
    /// instead of appending to it.
    overwrite: bool,
}

impl CalculatorState {
    /// Creates the empty startup state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the operand currently being entered.
    pub fn current_operand(&self) -> Option<&str> {
        self.current_operand.as_deref()
    }

    /// Returns the banked operand of the pending expression.
    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    /// Returns the pending operation.
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Returns true when the next digit entry should replace the display.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Builds a state directly from its parts.
    pub(crate) fn from_parts(
        current_operand: Option<String>,
        previous_operand: Option<String>,
        operation: Option<Operation>,
        overwrite: bool,
    ) -> Self {
        Self {
            current_operand,
            previous_operand,
            operation,
            overwrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_digit_round_trips_through_its_character() {
        for digit in Digit::iter() {
            assert_eq!(Digit::try_from(digit.as_char()), Ok(digit));
        }
        assert_eq!(Digit::try_from('x'), Err('x'));
    }

    #[test]
    fn every_operation_round_trips_through_its_symbol() {
        for op in Operation::iter() {
            assert_eq!(Operation::try_from(op.symbol()), Ok(op));
        }
        assert_eq!(Operation::try_from('%'), Err('%'));
    }
}
