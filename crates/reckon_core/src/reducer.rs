//! The state-transition reducer.
//!
//! A pure function from (state, action) to the next state. Every guarded
//! precondition that fails is a silent no-op, never an error: the keypad
//! has no invalid keystrokes, only ignored ones.

use super::evaluate::evaluate;
use super::types::CalculatorState;
use super::{Action, Digit, Operation};
use tracing::instrument;

/// Applies one keystroke to the calculator state, returning the next state.
///
/// The input state is never mutated; each transition builds a wholly new
/// value. The presentation layer owns the single live instance and replaces
/// it with the return value on every dispatch.
#[instrument(level = "debug", skip(state), fields(action = %action))]
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => CalculatorState::new(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => do_evaluate(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    // A fresh digit after evaluation discards the displayed result.
    if state.overwrite() {
        return CalculatorState::from_parts(
            Some(digit.as_char().to_string()),
            state.previous_operand().map(str::to_owned),
            state.operation(),
            false,
        );
    }

    // Suppress a second leading zero.
    if digit == Digit::Zero && state.current_operand() == Some("0") {
        return state.clone();
    }

    // Suppress a second decimal point.
    if digit == Digit::Point
        && state
            .current_operand()
            .is_some_and(|operand| operand.contains('.'))
    {
        return state.clone();
    }

    let mut operand = state.current_operand().unwrap_or("").to_owned();
    operand.push(digit.as_char());

    CalculatorState::from_parts(
        Some(operand),
        state.previous_operand().map(str::to_owned),
        state.operation(),
        false,
    )
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    // Nothing entered yet: operator keys are inert.
    if state.current_operand().is_none() && state.previous_operand().is_none() {
        return state.clone();
    }

    // An operation is already pending with no new entry: swap the operator.
    if state.current_operand().is_none() {
        return CalculatorState::from_parts(
            None,
            state.previous_operand().map(str::to_owned),
            Some(op),
            state.overwrite(),
        );
    }

    // First operand just entered: bank it and wait for the second.
    if state.previous_operand().is_none() {
        return CalculatorState::from_parts(
            None,
            state.current_operand().map(str::to_owned),
            Some(op),
            state.overwrite(),
        );
    }

    // A full binary expression is pending: fold it into the banked operand
    // so chains like `5 + 3 + 2` evaluate left to right.
    let (Some(previous), Some(current), Some(pending)) = (
        state.previous_operand(),
        state.current_operand(),
        state.operation(),
    ) else {
        return state.clone();
    };

    CalculatorState::from_parts(
        None,
        Some(evaluate(previous, current, pending)),
        Some(op),
        state.overwrite(),
    )
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    // Deleting a just-evaluated result clears the display outright.
    if state.overwrite() {
        return CalculatorState::from_parts(
            None,
            state.previous_operand().map(str::to_owned),
            state.operation(),
            false,
        );
    }

    let Some(operand) = state.current_operand() else {
        return state.clone();
    };

    let mut operand = operand.to_owned();
    operand.pop();
    let current = if operand.is_empty() {
        None
    } else {
        Some(operand)
    };

    CalculatorState::from_parts(
        current,
        state.previous_operand().map(str::to_owned),
        state.operation(),
        false,
    )
}

fn do_evaluate(state: &CalculatorState) -> CalculatorState {
    // Incomplete expressions are left untouched.
    let (Some(previous), Some(current), Some(op)) = (
        state.previous_operand(),
        state.current_operand(),
        state.operation(),
    ) else {
        return state.clone();
    };

    CalculatorState::from_parts(Some(evaluate(previous, current, op)), None, None, true)
}
