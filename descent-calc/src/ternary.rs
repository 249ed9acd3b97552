//! # Ternary grammar
//!
//! ```text
//! expr   -> factor (('+' | '-') factor | '*' expr)*
//! factor -> term
//! term   -> number | '(' expr ')'
//! ```
//!
//! A single `*` raises everything accumulated so far to the power of the
//! *whole* expression on its right. The exponent is not limited to a factor,
//! so `2*3+1` is `2**(3+1)` = 16 and `1+1*3` is `(1+1)**3` = 8. Parenthesize
//! the left side of `*` to get the usual reading: `(2*3)+1` = 9.
//!
//! This grammar is intentionally not interchangeable with
//! [`Standard`](crate::Standard): the same text can evaluate differently or
//! be rejected by one and accepted by the other.

use descent::{Cursor, EvalError, Evaluator, Grammar, Value, arith};
use std::io::Read;

/// The single-star exponent grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ternary;

/// Evaluator for the [`Ternary`] grammar.
///
/// # Example
/// ```rust
/// # use descent_calc::TernaryEvaluator;
/// let evaluator = TernaryEvaluator::try_new("2*3+1".as_bytes()).unwrap();
/// assert_eq!(evaluator.evaluate().unwrap(), 16);
/// ```
pub type TernaryEvaluator<R> = Evaluator<R, Ternary>;

impl Grammar for Ternary {
    const NAME: &'static str = "ternary";

    fn expr<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
        let mut acc = self.factor(cursor)?;
        loop {
            if let Some(next) = self.additive(cursor, acc)? {
                acc = next;
            } else if cursor.peek().is_star() {
                let at = cursor.position();
                cursor.bump()?;
                let exponent = cursor.nested(|cursor| self.expr(cursor))?;
                acc = arith::pow(acc, exponent).map_err(|e| EvalError::arith(e, at))?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn factor<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
        self.term(cursor)
    }
}
