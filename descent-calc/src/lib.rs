//! # descent-calc
//!
//! Two integer expression evaluators built on **descent**. Both read a byte
//! stream up to the first newline (or end of input), accept non-negative
//! decimal literals, `+`, `-`, parentheses and exponentiation, and compute
//! the result while parsing.
//!
//! They differ only in how exponentiation is written and grouped:
//!
//! | grammar      | operator | right operand      | `2*3+1` | `2**3+1` |
//! |--------------|----------|--------------------|---------|----------|
//! | [`Standard`] | `**`     | a term             | error   | 9        |
//! | [`Ternary`]  | `*`      | the rest of `expr` | 16      | error    |
//!
//! ## Example
//!
//! ```rust
//! use descent_calc::{StandardEvaluator, TernaryEvaluator};
//!
//! let standard = StandardEvaluator::try_new("2**3**2".as_bytes()).unwrap();
//! assert_eq!(standard.evaluate().unwrap(), 512);
//!
//! let ternary = TernaryEvaluator::try_new("(2*3)+1".as_bytes()).unwrap();
//! assert_eq!(ternary.evaluate().unwrap(), 9);
//! ```
//!
//! Whitespace is not part of either language; `1 + 2` is a syntax error.
//!
//! ## Modules
//!
//! - [`standard`] — the `**` grammar
//! - [`ternary`] — the single-`*` grammar
//! - [`kind`] — [`GrammarKind`], choosing a grammar at runtime
//! - [`lines`] — [`evaluate_lines`], one expression per input line

pub mod kind;
pub mod lines;
pub mod standard;
pub mod ternary;

pub use descent::{EvalConfig, EvalError, Value};
pub use kind::{GrammarKind, ParseGrammarKindError};
pub use lines::evaluate_lines;
pub use standard::{Standard, StandardEvaluator};
pub use ternary::{Ternary, TernaryEvaluator};
