//! Failure kinds raised by the arithmetic core.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when executing an operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero: cannot divide by zero")]
    DivisionByZero,

    /// The exact result does not fit in a 96-bit decimal
    #[error("Arithmetic overflow: result of {a} {token} {b} is out of range")]
    Overflow {
        a: Decimal,
        token: &'static str,
        b: Decimal,
    },
}

/// Errors that can occur when reading from a calculation history.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No calculations in history")]
    EmptyHistory,
}
