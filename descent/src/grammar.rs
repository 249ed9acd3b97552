//! # Grammar strategies
//!
//! A [`Grammar`] supplies the expression productions of one language over
//! the shared [`Cursor`]. Productions evaluate as they recognize: each one
//! returns the integer value of the text it consumed, and no syntax tree is
//! ever built.
//!
//! The term production and the number literal are common to every grammar
//! in this workspace and are provided here. Implementations decide how
//! `expr` and `factor` combine terms, which is where operator precedence
//! and associativity live.

use crate::arith::{self, ArithError, Value};
use crate::cursor::Cursor;
use crate::error::{EvalError, Expected};
use std::io::Read;

/// The productions an [`Evaluator`](crate::Evaluator) drives.
///
/// Every production must leave the cursor positioned on the first symbol
/// after the text it recognized.
pub trait Grammar {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Parses and evaluates a complete expression.
    fn expr<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError>;

    /// Parses and evaluates an operand of `+`/`-`.
    fn factor<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError>;

    /// `term := number | '(' expr ')'`
    fn term<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
        let symbol = cursor.peek();
        if symbol.is_digit() {
            number(cursor)
        } else if symbol.is_open_paren() {
            cursor.bump()?;
            let value = cursor.nested(|cursor| self.expr(cursor))?;
            cursor.consume(b')')?;
            Ok(value)
        } else {
            Err(cursor.unexpected(Expected::Operand))
        }
    }

    /// Folds one `'+' factor` or `'-' factor` step into `acc`.
    ///
    /// Returns `None`, consuming nothing, when the lookahead is neither
    /// operator.
    fn additive<R: Read>(
        &self,
        cursor: &mut Cursor<R>,
        acc: Value,
    ) -> Result<Option<Value>, EvalError> {
        let symbol = cursor.peek();
        let op: fn(Value, Value) -> Result<Value, ArithError> = if symbol.is_plus() {
            arith::add
        } else if symbol.is_minus() {
            arith::sub
        } else {
            return Ok(None);
        };
        let at = cursor.position();
        cursor.bump()?;
        let rhs = self.factor(cursor)?;
        op(acc, rhs)
            .map(Some)
            .map_err(|e| EvalError::arith(e, at))
    }
}

/// Recognizes an unsigned decimal literal.
///
/// `0` on its own is a valid literal, but a `0` followed by more digits is
/// rejected, so `007` and `00` are syntax errors.
pub fn number<R: Read>(cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
    let start = cursor.position();
    let Some(first) = cursor.peek().digit() else {
        return Err(cursor.unexpected(Expected::Digit));
    };
    cursor.bump()?;
    if first == 0 {
        if cursor.peek().is_digit() {
            return Err(cursor.unexpected(Expected::LiteralEnd));
        }
        return Ok(0);
    }
    let mut value = Value::from(first);
    while let Some(digit) = cursor.peek().digit() {
        value = arith::push_digit(value, digit).map_err(|e| EvalError::arith(e, start))?;
        cursor.bump()?;
    }
    log::debug!("number {} at {}", value, start);
    Ok(value)
}
