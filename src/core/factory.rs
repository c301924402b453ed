//! Construction helper for calculations.

use super::calculation::Calculation;
use super::operation::Operation;
use rust_decimal::Decimal;

/// Stateless constructor for [`Calculation`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculationFactory;

impl CalculationFactory {
    /// Create a new, not yet evaluated calculation.
    ///
    /// No validation happens here; operands are already parsed and the
    /// operation already resolved by the caller.
    pub fn create_calculation(a: Decimal, b: Decimal, operation: Operation) -> Calculation {
        Calculation::new(a, b, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn creates_calculation_with_given_parts() {
        let calculation = CalculationFactory::create_calculation(dec!(5), dec!(3), Operation::Addition);

        assert_eq!(calculation.a(), dec!(5));
        assert_eq!(calculation.b(), dec!(3));
        assert_eq!(calculation.operation(), Operation::Addition);
        assert!(!calculation.is_evaluated());
    }

    #[test]
    fn creates_calculation_for_every_operation() {
        for operation in Operation::ALL {
            let calculation = CalculationFactory::create_calculation(dec!(8), dec!(2), operation);
            assert_eq!(calculation.operation(), operation);
            assert_eq!(calculation.result(), operation.execute(dec!(8), dec!(2)));
        }
    }
}
