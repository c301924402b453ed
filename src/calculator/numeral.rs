//! Operand parsing.
//!
//! Operands are accepted in plain (`-10.5`) or scientific (`2.5e-3`)
//! notation. Both forms are rewritten to positional notation and converted
//! exactly, so a numeral either becomes the decimal it denotes or is
//! rejected. It is never rounded.

use super::error::CalculatorError;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

/// Fractional digits a 96-bit decimal can hold.
const MAX_SCALE: usize = 28;

/// Any nonzero numeral shifted further than this is out of range.
const MAX_SHIFT: i64 = 64;

lazy_static! {
    /// Optional sign, digits with an optional point, optional exponent.
    static ref NUMERAL: Regex = Regex::new(
        r"^(?P<sign>[+-]?)(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?(?:[eE](?P<exp>[+-]?[0-9]+))?$"
    ).unwrap();
}

/// Parse an operand without losing digits.
///
/// Malformed numerals fail with [`CalculatorError::InvalidNumberFormat`];
/// well-formed numerals that a decimal cannot hold exactly fail with
/// [`CalculatorError::OperandOutOfRange`].
pub(super) fn parse_operand(token: &str) -> Result<Decimal, CalculatorError> {
    let plain = to_plain_notation(token)?;
    Decimal::from_str_exact(&plain)
        .map_err(|_| CalculatorError::OperandOutOfRange(token.to_string()))
}

/// Rewrite a numeral as `[-]int[.frac]` with no exponent.
fn to_plain_notation(token: &str) -> Result<String, CalculatorError> {
    let invalid = || CalculatorError::InvalidNumberFormat(token.to_string());
    let out_of_range = || CalculatorError::OperandOutOfRange(token.to_string());

    let captures = NUMERAL.captures(token).ok_or_else(invalid)?;
    let int = captures.name("int").map_or("", |m| m.as_str());
    let frac = captures.name("frac").map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    let negative = &captures["sign"] == "-";

    let (int, frac) = match captures.name("exp") {
        None => (int.to_string(), frac.to_string()),
        Some(exp) => {
            let digits = format!("{int}{frac}");
            let significant = digits.trim_start_matches('0');
            if significant.is_empty() {
                return Ok("0".to_string());
            }

            // Position of the decimal point counted from the first significant digit.
            let leading_zeros = (digits.len() - significant.len()) as i64;
            let point = exp
                .as_str()
                .parse::<i64>()
                .ok()
                .and_then(|exp| (int.len() as i64 - leading_zeros).checked_add(exp))
                .filter(|point| point.abs() <= MAX_SHIFT)
                .ok_or_else(out_of_range)?;

            if point <= 0 {
                let zeros = "0".repeat(point.unsigned_abs() as usize);
                (String::new(), format!("{zeros}{significant}"))
            } else {
                let point = point as usize;
                if point >= significant.len() {
                    let zeros = "0".repeat(point - significant.len());
                    (format!("{significant}{zeros}"), String::new())
                } else {
                    let (int, frac) = significant.split_at(point);
                    (int.to_string(), frac.to_string())
                }
            }
        }
    };

    // Zeros past the representable scale carry no value.
    let keep = frac
        .len()
        .min(MAX_SCALE)
        .max(frac.trim_end_matches('0').len());
    let frac = &frac[..keep];

    let mut plain = String::new();
    if negative {
        plain.push('-');
    }
    plain.push_str(if int.is_empty() { "0" } else { &int });
    if !frac.is_empty() {
        plain.push('.');
        plain.push_str(frac);
    }
    Ok(plain)
}
