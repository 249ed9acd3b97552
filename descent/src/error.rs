//! Source positions and the error types produced while evaluating.
//!
//! Every failure aborts the current evaluation. The variants of
//! [`EvalError`] separate grammar violations ([`SyntaxError`]) from
//! arithmetic faults, the nesting guard, and read errors on the source.
//!
//! # Examples
//!
//! ```rust
//! # use descent::{EvalError, Expected, Position, Symbol, SyntaxError};
//! let err: EvalError = SyntaxError {
//!     expected: Expected::Symbol(b')'),
//!     found: Symbol::End,
//!     position: Position::new(0, 4),
//! }
//! .into();
//! assert_eq!(err.to_string(), "syntax error: expected ')', found end of input at 0:4");
//! ```

use crate::arith::ArithError;
use crate::cursor::Symbol;
use std::fmt;
use thiserror::Error;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (byte offset in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What a production was prepared to accept when it met the lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One specific byte, as required by `consume`.
    Symbol(u8),
    /// The start of a term: a digit or `(`.
    Operand,
    /// A digit, at the start of a number literal.
    Digit,
    /// The end of a literal that started with `0`.
    LiteralEnd,
    /// End of input or newline after a complete expression.
    End,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Symbol(b) => write!(f, "{}", Symbol::Byte(*b)),
            Expected::Operand => f.write_str("a digit or '('"),
            Expected::Digit => f.write_str("a digit"),
            Expected::LiteralEnd => f.write_str("end of literal after leading zero"),
            Expected::End => f.write_str("end of input"),
        }
    }
}

/// A grammar or lexical violation at a known position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found} at {position}")]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: Symbol,
    pub position: Position,
}

/// Represents every way a single evaluation can fail.
///
/// Conversions from [`SyntaxError`] and [`std::io::Error`] are derived with
/// `#[from]`, so productions propagate both with `?`.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The input does not match the grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Checked integer arithmetic failed (overflow or a negative exponent).
    #[error("{source} at {position}")]
    Arith {
        source: ArithError,
        position: Position,
    },

    /// Parentheses or exponents nest deeper than the configured limit.
    #[error("nesting deeper than {limit} at {position}")]
    DepthExceeded { limit: usize, position: Position },

    /// Reading the source failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvalError {
    /// Attaches a position to an arithmetic failure.
    pub fn arith(source: ArithError, position: Position) -> Self {
        EvalError::Arith { source, position }
    }

    /// Returns the syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            EvalError::Syntax(e) => Some(e),
            _ => None,
        }
    }

    /// Source position of the failure. Read errors carry none.
    pub fn position(&self) -> Option<Position> {
        match self {
            EvalError::Syntax(e) => Some(e.position),
            EvalError::Arith { position, .. } | EvalError::DepthExceeded { position, .. } => {
                Some(*position)
            }
            EvalError::Io(_) => None,
        }
    }
}
