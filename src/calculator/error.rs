//! Errors reported for rejected calculation requests.

use crate::core::ArithmeticError;
use thiserror::Error;

/// Errors that can occur when turning user input into a recorded calculation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid input format. Expected: <number> <operation> <number>")]
    MalformedInput,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid number format: {0}")]
    InvalidNumberFormat(String),

    #[error("Number out of range: {0} cannot be represented without rounding")]
    OperandOutOfRange(String),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl CalculatorError {
    /// Whether the request itself was malformed, as opposed to well-formed
    /// input whose evaluation failed.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Arithmetic(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_operand_is_an_input_error() {
        let err = CalculatorError::OperandOutOfRange("1e-29".into());

        assert!(err.is_input_error());
        assert_ne!(
            err.to_string(),
            CalculatorError::InvalidNumberFormat("1e-29".into()).to_string()
        );
    }

    #[test]
    fn arithmetic_failures_are_not_input_errors() {
        let err = CalculatorError::from(ArithmeticError::DivisionByZero);

        assert!(!err.is_input_error());
        assert_eq!(err.to_string(), "Division by zero: cannot divide by zero");
    }
}
