//! Reckon core - pure four-function calculator logic
//!
//! This crate holds the entire calculator brain: a typed action vocabulary,
//! an immutable state value, and a pure reducer that maps each keystroke to
//! the next state. Presentation layers own the single live state, dispatch
//! an [`Action`] per interaction, and replace their state with the reducer's
//! return value.
//!
//! # Example
//!
//! ```
//! use reckon_core::{reduce, Action, CalculatorState, Digit, Operation};
//!
//! let state = CalculatorState::new();
//! let state = reduce(&state, Action::AddDigit(Digit::Five));
//! let state = reduce(&state, Action::ChooseOperation(Operation::Add));
//! let state = reduce(&state, Action::AddDigit(Digit::Three));
//! let state = reduce(&state, Action::Evaluate);
//!
//! assert_eq!(state.current_operand(), Some("8"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod evaluate;
mod format;
mod reducer;
mod types;

// Crate-level exports - keystroke vocabulary
pub use action::Action;

// Crate-level exports - the reducer
pub use reducer::reduce;

// Crate-level exports - arithmetic and display formatting
pub use evaluate::evaluate;
pub use format::format_operand;

// Crate-level exports - domain types
pub use types::{CalculatorState, Digit, Operation};
