//! Checked integer arithmetic used by the productions.
//!
//! Results are 64-bit signed integers. Overflow is never wrapped or
//! saturated: every operation returns an [`ArithError`] instead.

use std::fmt;
use thiserror::Error;

/// The value type every production folds into.
pub type Value = i64;

/// The arithmetic operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Literal,
    Add,
    Subtract,
    Power,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Literal => "literal",
            Op::Add => "addition",
            Op::Subtract => "subtraction",
            Op::Power => "exponentiation",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("integer overflow in {0}")]
    Overflow(Op),
    #[error("negative exponent {0}")]
    NegativeExponent(Value),
}

/// Appends one decimal digit to a literal being accumulated.
#[inline]
pub fn push_digit(acc: Value, digit: u8) -> Result<Value, ArithError> {
    acc.checked_mul(10)
        .and_then(|v| v.checked_add(Value::from(digit)))
        .ok_or(ArithError::Overflow(Op::Literal))
}

#[inline]
pub fn add(a: Value, b: Value) -> Result<Value, ArithError> {
    a.checked_add(b).ok_or(ArithError::Overflow(Op::Add))
}

#[inline]
pub fn sub(a: Value, b: Value) -> Result<Value, ArithError> {
    a.checked_sub(b).ok_or(ArithError::Overflow(Op::Subtract))
}

/// Exact integer power by repeated squaring.
///
/// Bases `0`, `1` and `-1` are answered directly, so their exponents may be
/// arbitrarily large. A negative exponent is only exact for `1` and `-1`;
/// any other base fails with [`ArithError::NegativeExponent`].
pub fn pow(base: Value, exponent: Value) -> Result<Value, ArithError> {
    let odd = exponent % 2 != 0;
    match base {
        1 => return Ok(1),
        -1 => return Ok(if odd { -1 } else { 1 }),
        _ if exponent < 0 => return Err(ArithError::NegativeExponent(exponent)),
        0 => return Ok(if exponent == 0 { 1 } else { 0 }),
        _ => {}
    }
    let exponent = u32::try_from(exponent).map_err(|_| ArithError::Overflow(Op::Power))?;
    base.checked_pow(exponent)
        .ok_or(ArithError::Overflow(Op::Power))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_accumulates_and_overflows() {
        assert_eq!(push_digit(12, 3), Ok(123));
        assert_eq!(push_digit(0, 0), Ok(0));
        assert_eq!(
            push_digit(Value::MAX / 10, 9),
            Err(ArithError::Overflow(Op::Literal))
        );
    }

    #[test]
    fn add_and_sub_are_checked() {
        assert_eq!(add(2, 3), Ok(5));
        assert_eq!(sub(2, 3), Ok(-1));
        assert_eq!(add(Value::MAX, 1), Err(ArithError::Overflow(Op::Add)));
        assert_eq!(sub(Value::MIN, 1), Err(ArithError::Overflow(Op::Subtract)));
    }

    #[test]
    fn pow_is_exact() {
        assert_eq!(pow(2, 10), Ok(1024));
        assert_eq!(pow(3, 0), Ok(1));
        assert_eq!(pow(0, 0), Ok(1));
        assert_eq!(pow(0, 5), Ok(0));
        assert_eq!(pow(-2, 3), Ok(-8));
        assert_eq!(pow(-2, 4), Ok(16));
        // 3**39 does not fit in an f64 mantissa, it must still be exact.
        assert_eq!(pow(3, 39), Ok(4_052_555_153_018_976_267));
    }

    #[test]
    fn pow_overflow() {
        assert_eq!(pow(2, 63), Err(ArithError::Overflow(Op::Power)));
        assert_eq!(pow(10, 1 << 40), Err(ArithError::Overflow(Op::Power)));
        assert_eq!(pow(2, 62), Ok(1 << 62));
    }

    #[test]
    fn pow_trivial_bases_with_huge_exponents() {
        assert_eq!(pow(1, Value::MAX), Ok(1));
        assert_eq!(pow(-1, Value::MAX), Ok(-1));
        assert_eq!(pow(-1, 1 << 40), Ok(1));
        assert_eq!(pow(0, Value::MAX), Ok(0));
    }

    #[test]
    fn pow_negative_exponent() {
        assert_eq!(pow(1, -3), Ok(1));
        assert_eq!(pow(-1, -3), Ok(-1));
        assert_eq!(pow(-1, -2), Ok(1));
        assert_eq!(pow(2, -1), Err(ArithError::NegativeExponent(-1)));
        assert_eq!(pow(0, -1), Err(ArithError::NegativeExponent(-1)));
    }
}
