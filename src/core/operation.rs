//! Binary arithmetic operations.
//!
//! Operations form a closed set of stateless variants. Each variant knows how
//! to compute its result and how to present itself to users.

use super::error::ArithmeticError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pure binary operation over two decimal operands.
///
/// Operations carry no state, so any two values of the same variant are
/// interchangeable and can be shared freely between calculations.
///
/// # Example
///
/// ```rust
/// use calcline::core::Operation;
/// use rust_decimal::Decimal;
///
/// let sum = Operation::Addition.execute(Decimal::from(5), Decimal::from(3));
/// assert_eq!(sum, Ok(Decimal::from(8)));
///
/// assert_eq!(Operation::from_token("divide"), Some(Operation::Division));
/// assert_eq!(Operation::Division.to_string(), "/");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Every supported operation, in display order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Apply the operation to `a` and `b`.
    ///
    /// Division fails with [`ArithmeticError::DivisionByZero`] when `b` is
    /// zero. Any variant fails with [`ArithmeticError::Overflow`] when the
    /// result leaves the representable decimal range.
    pub fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, ArithmeticError> {
        let result = match self {
            Self::Addition => a.checked_add(b),
            Self::Subtraction => a.checked_sub(b),
            Self::Multiplication => a.checked_mul(b),
            Self::Division => {
                if b.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };

        result.ok_or(ArithmeticError::Overflow {
            a,
            token: self.token(),
            b,
        })
    }

    /// Symbolic token used for display and lookup.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        }
    }

    /// Long-form lookup alias.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Addition => "add",
            Self::Subtraction => "subtract",
            Self::Multiplication => "multiply",
            Self::Division => "divide",
        }
    }

    /// Variant name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
            Self::Multiplication => "Multiplication",
            Self::Division => "Division",
        }
    }

    /// Resolve a token or alias, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|operation| {
            token == operation.token() || token.eq_ignore_ascii_case(operation.alias())
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
