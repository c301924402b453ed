//! Core calculator types and logic.
//!
//! This module contains the arithmetic object model:
//! - Operations as a closed set of pure binary transforms
//! - Calculations with a lazily memoized result
//! - The session history of completed calculations
//!
//! Nothing here performs I/O or logging; failures are returned to the caller.

mod calculation;
mod error;
mod factory;
mod history;
mod operation;

pub use calculation::Calculation;
pub use error::{ArithmeticError, HistoryError};
pub use factory::CalculationFactory;
pub use history::CalculationHistory;
pub use operation::Operation;
