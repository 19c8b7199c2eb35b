//! First-class action types for the calculator keypad.
//!
//! Keystrokes are domain events, not side effects. They can be serialized
//! for replay, logged for debugging, and dispatched against any state.

use super::{Digit, Operation};
use serde::{Deserialize, Serialize};

/// A single keystroke dispatched to the reducer.
///
/// The enum is closed: there is no "unrecognized action kind". Every
/// variant the presentation layer can dispatch is matched explicitly by
/// the reducer, so unmatched input cannot fall through undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Append a digit (or decimal point) to the current operand.
    #[display("digit {_0}")]
    AddDigit(Digit),
    /// Select or replace the pending binary operation.
    #[display("operation {_0}")]
    ChooseOperation(Operation),
    /// Reset the calculator to its empty startup state.
    #[display("clear")]
    Clear,
    /// Remove the last character of the current operand.
    #[display("delete")]
    DeleteDigit,
    /// Evaluate the pending expression.
    #[display("evaluate")]
    Evaluate,
}
