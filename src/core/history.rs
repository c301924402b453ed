//! Session history of completed calculations.
//!
//! History is an append-only, ordered record. Entries are never reordered;
//! the only way to remove them is to clear the whole history.

use super::calculation::Calculation;
use super::error::HistoryError;
use serde::{Deserialize, Serialize};
use std::slice;

/// Ordered history of calculations.
///
/// Insertion order is chronological order. Duplicates are kept.
///
/// # Example
///
/// ```rust
/// use calcline::core::{Calculation, CalculationHistory, Operation};
/// use rust_decimal::Decimal;
///
/// let mut history = CalculationHistory::new();
/// history.add_calculation(Calculation::new(
///     Decimal::from(5),
///     Decimal::from(3),
///     Operation::Addition,
/// ));
/// history.add_calculation(Calculation::new(
///     Decimal::from(7),
///     Decimal::from(4),
///     Operation::Multiplication,
/// ));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(
///     history.get_last_calculation().unwrap().to_string(),
///     "7 * 4 = 28"
/// );
///
/// history.clear_history();
/// assert!(history.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    calculations: Vec<Calculation>,
}

impl CalculationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            calculations: Vec::new(),
        }
    }

    /// Append a calculation.
    pub fn add_calculation(&mut self, calculation: Calculation) {
        self.calculations.push(calculation);
    }

    /// Get a snapshot of all calculations in chronological order.
    ///
    /// The returned vector is a copy; changing it does not affect the history.
    pub fn get_history(&self) -> Vec<Calculation> {
        self.calculations.clone()
    }

    /// Get the most recent calculation.
    ///
    /// Fails with [`HistoryError::EmptyHistory`] if nothing has been recorded.
    pub fn get_last_calculation(&self) -> Result<&Calculation, HistoryError> {
        self.calculations.last().ok_or(HistoryError::EmptyHistory)
    }

    /// Remove every calculation.
    pub fn clear_history(&mut self) {
        self.calculations.clear();
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    /// Whether nothing has been recorded since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    /// Iterate from the earliest to the most recent calculation.
    pub fn iter(&self) -> slice::Iter<'_, Calculation> {
        self.calculations.iter()
    }
}

impl<'a> IntoIterator for &'a CalculationHistory {
    type Item = &'a Calculation;
    type IntoIter = slice::Iter<'a, Calculation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
