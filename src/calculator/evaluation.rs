//! Evaluation of the pending binary operation.
//!
//! Provides the arithmetic for each [`Operator`], formatting of results for
//! the display, and the prefix number parser used to read the display back.

use super::key::Operator;
use thiserror::Error;

/// Text shown on the display when an evaluation fails.
pub const ERROR_TEXT: &str = "Error";

/// Error produced by evaluating an operation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

impl Operator {
    /// Apply the operator to the stored (left) and current (right) operands.
    pub fn apply(self, stored: f64, current: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(stored + current),
            Self::Subtract => Ok(stored - current),
            Self::Multiply => Ok(stored * current),
            Self::Divide => {
                if current == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(stored / current)
                }
            }
        }
    }
}

/// Format a result in C's `%g` style with `significant_digits` digits,
/// dropping trailing fractional zeroes and a bare trailing decimal point.
///
/// The exponent form is used when the decimal exponent is below -4 or at
/// least `significant_digits`. Re-parsing the output does not necessarily
/// reproduce `value` exactly.
pub fn format_result(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "inf" } else { "-inf" };
        return text.to_string();
    }

    let precision = significant_digits.max(1);

    // Rounding to the requested digits first tells us the final exponent.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Parse the longest leading floating-point literal of `text`.
///
/// Trailing content is ignored; text without a numeric prefix reads as 0.
pub fn parse_leading_float(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let is_digit = |i: usize| i < len && bytes[i].is_ascii_digit();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let sign_len = end;

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return parse_special(&text[sign_len..], sign_len == 1 && bytes[0] == b'-');
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

fn parse_special(rest: &str, negative: bool) -> f64 {
    let value = match rest.get(..3) {
        Some(p) if p.eq_ignore_ascii_case("inf") => f64::INFINITY,
        Some(p) if p.eq_ignore_ascii_case("nan") => f64::NAN,
        _ => return 0.0,
    };
    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(6.0, 3.0), Ok(18.0));
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Divide.apply(10.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_result(8.0, 10), "8");
        assert_eq!(format_result(-2.0, 10), "-2");
        assert_eq!(format_result(0.0, 10), "0");
        assert_eq!(format_result(1234567890.0, 10), "1234567890");
    }

    #[test]
    fn test_format_trims_trailing_zeroes() {
        assert_eq!(format_result(2.5, 10), "2.5");
        assert_eq!(format_result(0.1 + 0.2, 10), "0.3");
        assert_eq!(format_result(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(format_result(2.0 / 3.0, 10), "0.6666666667");
    }

    #[test]
    fn test_format_exponent_form() {
        assert_eq!(format_result(1e10, 10), "1e+10");
        assert_eq!(format_result(12345678901.0, 10), "1.23456789e+10");
        assert_eq!(format_result(1.5e20, 10), "1.5e+20");
        assert_eq!(format_result(0.00001, 10), "1e-05");
        assert_eq!(format_result(0.0001, 10), "0.0001");
        assert_eq!(format_result(9999999999.5, 10), "1e+10");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_result(f64::INFINITY, 10), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY, 10), "-inf");
        assert_eq!(format_result(f64::NAN, 10), "nan");
    }

    #[test]
    fn test_format_respects_precision() {
        assert_eq!(format_result(1.0 / 3.0, 4), "0.3333");
        assert_eq!(format_result(123456.0, 4), "1.235e+05");
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("12.5"), 12.5);
        assert_eq!(parse_leading_float("12."), 12.0);
        assert_eq!(parse_leading_float(".5"), 0.5);
        assert_eq!(parse_leading_float("-3"), -3.0);
        assert_eq!(parse_leading_float("1.5e+20"), 1.5e20);
        assert_eq!(parse_leading_float("1.5e+"), 1.5);
        assert_eq!(parse_leading_float("1e-05"), 0.00001);
    }

    #[test]
    fn test_parse_without_numeric_prefix() {
        assert_eq!(parse_leading_float(""), 0.0);
        assert_eq!(parse_leading_float("."), 0.0);
        assert_eq!(parse_leading_float("-"), 0.0);
        assert_eq!(parse_leading_float("Error"), 0.0);
        assert_eq!(parse_leading_float("Erro"), 0.0);
    }

    #[test]
    fn test_parse_special_values() {
        assert_eq!(parse_leading_float("inf"), f64::INFINITY);
        assert_eq!(parse_leading_float("-inf"), f64::NEG_INFINITY);
        assert!(parse_leading_float("nan").is_nan());
    }
}
