//! A single calculation and its lazily computed result.

use super::error::ArithmeticError;
use super::operation::Operation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// Two operands bound to an operation.
///
/// The result is computed on first access and cached for the lifetime of
/// the calculation. Failed evaluations are not cached, so a calculation that
/// cannot be computed fails the same way on every access.
///
/// # Example
///
/// ```rust
/// use calcline::core::{Calculation, Operation};
/// use rust_decimal::Decimal;
///
/// let calculation = Calculation::new(Decimal::from(5), Decimal::from(3), Operation::Addition);
/// assert!(!calculation.is_evaluated());
///
/// assert_eq!(calculation.result(), Ok(Decimal::from(8)));
/// assert!(calculation.is_evaluated());
/// assert_eq!(calculation.to_string(), "5 + 3 = 8");
/// assert_eq!(format!("{:?}", calculation), "Calculation(5, 3, Addition)");
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct Calculation {
    a: Decimal,
    b: Decimal,
    operation: Operation,
    #[serde(skip)]
    result: Cell<Option<Decimal>>,
}

impl Calculation {
    /// Bind two operands to an operation. Nothing is computed yet.
    pub fn new(a: Decimal, b: Decimal, operation: Operation) -> Self {
        Self {
            a,
            b,
            operation,
            result: Cell::new(None),
        }
    }

    /// The first operand.
    pub fn a(&self) -> Decimal {
        self.a
    }

    /// The second operand.
    pub fn b(&self) -> Decimal {
        self.b
    }

    /// The operation applied to the operands.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Get the result, computing and caching it on first access.
    pub fn result(&self) -> Result<Decimal, ArithmeticError> {
        if let Some(cached) = self.result.get() {
            return Ok(cached);
        }

        let computed = self.operation.execute(self.a, self.b)?;
        self.result.set(Some(computed));
        Ok(computed)
    }

    /// Whether a result has been computed and cached.
    pub fn is_evaluated(&self) -> bool {
        self.result.get().is_some()
    }
}

// Operands and operation identify a calculation; cache state does not.
impl PartialEq for Calculation {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.operation == other.operation
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ", self.a, self.operation, self.b)?;
        match self.result() {
            Ok(result) => write!(f, "{}", result),
            Err(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Debug for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calculation({}, {}, {})",
            self.a,
            self.b,
            self.operation.name()
        )
    }
}
