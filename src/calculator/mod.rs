//! The driving layer: operation lookup, input evaluation and the REPL.
//!
//! [`Calculator`] turns a line such as `10.5 subtract 2.3` into a recorded
//! [`Calculation`]. [`Repl`] wraps it in an interactive session.

mod command;
mod error;
mod numeral;
mod repl;

pub use command::Command;
pub use error::CalculatorError;
pub use repl::{LineReader, ReadError, Repl};

use crate::core::{Calculation, CalculationFactory, CalculationHistory, Operation};
use rust_decimal::Decimal;
use numeral::parse_operand;
use std::collections::HashMap;
use tracing::debug;

/// Operation lookup table plus the session history.
///
/// # Example
///
/// ```rust
/// use calcline::calculator::{Calculator, CalculatorError};
///
/// let mut calculator = Calculator::new();
///
/// let calculation = calculator.evaluate("5 + 3").unwrap();
/// assert_eq!(calculation.to_string(), "5 + 3 = 8");
///
/// assert!(matches!(
///     calculator.evaluate("5 % 3"),
///     Err(CalculatorError::UnknownOperation(_))
/// ));
/// assert_eq!(calculator.history().len(), 1);
/// ```
#[derive(Debug)]
pub struct Calculator {
    operations: HashMap<&'static str, Operation>,
    history: CalculationHistory,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with an empty history.
    ///
    /// Every operation is registered under both its token and its alias.
    pub fn new() -> Self {
        let mut operations = HashMap::new();
        for operation in Operation::ALL {
            operations.insert(operation.token(), operation);
            operations.insert(operation.alias(), operation);
        }

        Self {
            operations,
            history: CalculationHistory::new(),
        }
    }

    /// Whether `token` names a known operation.
    pub fn supports(&self, token: &str) -> bool {
        self.lookup(token).is_ok()
    }

    /// Evaluate a `<number> <operation> <number>` line.
    ///
    /// On success the calculation is recorded in the history and a copy of
    /// it, with its result already computed, is returned. On failure the
    /// history is left untouched.
    pub fn evaluate(&mut self, line: &str) -> Result<Calculation, CalculatorError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [a, operation, b] = parts.as_slice() else {
            return Err(CalculatorError::MalformedInput);
        };

        let operation = self.lookup(operation)?;
        let a = parse_operand(a)?;
        let b = parse_operand(b)?;

        let calculation = CalculationFactory::create_calculation(a, b, operation);
        calculation.result()?;
        self.record(calculation.clone());
        Ok(calculation)
    }

    /// Perform a single calculation on already-parsed operands.
    ///
    /// Records the calculation and returns its result.
    pub fn calculate(
        &mut self,
        a: Decimal,
        operation: &str,
        b: Decimal,
    ) -> Result<Decimal, CalculatorError> {
        let operation = self.lookup(operation)?;
        let calculation = CalculationFactory::create_calculation(a, b, operation);
        let result = calculation.result()?;
        self.record(calculation);
        Ok(result)
    }

    /// The calculations recorded in this session.
    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// Discard every recorded calculation.
    pub fn clear_history(&mut self) {
        debug!(discarded = self.history.len(), "history cleared");
        self.history.clear_history();
    }

    fn lookup(&self, token: &str) -> Result<Operation, CalculatorError> {
        self.operations
            .get(token.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| CalculatorError::UnknownOperation(token.to_string()))
    }

    fn record(&mut self, calculation: Calculation) {
        debug!(%calculation, "calculation recorded");
        self.history.add_calculation(calculation);
    }
}
