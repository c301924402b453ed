//! Calcline: an interactive decimal calculator
//!
//! The arithmetic lives in a small pure core: operations, calculations with
//! lazily memoized results, and a session history. The calculator layer
//! parses user input, dispatches to the core and drives the interactive loop.
//!
//! # Core Concepts
//!
//! - **Operation**: one of four pure binary transforms over decimals
//! - **Calculation**: two operands and an operation; the result is computed once
//! - **History**: the ordered record of a session's successful calculations
//!
//! # Example
//!
//! ```rust
//! use calcline::core::{CalculationFactory, CalculationHistory, Operation};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let mut history = CalculationHistory::new();
//!
//! let calculation = CalculationFactory::create_calculation(
//!     Decimal::from_str("10.5").unwrap(),
//!     Decimal::from_str("2.3").unwrap(),
//!     Operation::Subtraction,
//! );
//! assert_eq!(calculation.result(), Ok(Decimal::from_str("8.2").unwrap()));
//!
//! history.add_calculation(calculation);
//! assert_eq!(
//!     history.get_last_calculation().unwrap().to_string(),
//!     "10.5 - 2.3 = 8.2"
//! );
//! ```

pub mod calculator;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use calculator::{Calculator, CalculatorError, Repl};
pub use config::CalculatorConfig;
pub use core::{
    ArithmeticError, Calculation, CalculationFactory, CalculationHistory, HistoryError, Operation,
};
