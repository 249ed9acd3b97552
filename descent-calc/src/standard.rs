//! # Standard grammar
//!
//! ```text
//! expr   -> factor (('+' | '-') factor)*
//! factor -> term ('**' term)*
//! term   -> number | '(' expr ')'
//! ```
//!
//! `+` and `-` are left-associative. `**` binds tighter and is
//! right-associative, so `2**3**2` is `2**(3**2)` = 512. A lone `*` is a
//! syntax error.

use descent::{Cursor, EvalError, Evaluator, Grammar, Value, arith};
use std::io::Read;

/// The standard precedence grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standard;

/// Evaluator for the [`Standard`] grammar.
///
/// # Example
/// ```rust
/// # use descent_calc::StandardEvaluator;
/// let evaluator = StandardEvaluator::try_new("(1+2)**2-1".as_bytes()).unwrap();
/// assert_eq!(evaluator.evaluate().unwrap(), 8);
/// ```
pub type StandardEvaluator<R> = Evaluator<R, Standard>;

impl Grammar for Standard {
    const NAME: &'static str = "standard";

    fn expr<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
        let mut acc = self.factor(cursor)?;
        while let Some(next) = self.additive(cursor, acc)? {
            acc = next;
        }
        Ok(acc)
    }

    /// Collects the `**` chain, then folds it from the right.
    fn factor<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
        let mut bases = Vec::new();
        let mut acc = self.term(cursor)?;
        while cursor.peek().is_star() {
            let at = cursor.position();
            cursor.bump()?;
            cursor.consume(b'*')?;
            bases.push((acc, at));
            acc = self.term(cursor)?;
        }
        for (base, at) in bases.into_iter().rev() {
            acc = arith::pow(base, acc).map_err(|e| EvalError::arith(e, at))?;
        }
        Ok(acc)
    }
}
