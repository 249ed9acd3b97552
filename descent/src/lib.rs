//! # descent
//!
//! Single-pass, syntax-directed expression evaluation over a byte stream.
//!
//! The crate provides the pieces every recursive-descent evaluator in this
//! workspace shares:
//!
//! - [`cursor`] — a [`Cursor`] holding exactly one lookahead [`Symbol`],
//!   the symbol predicates, and the nesting guard;
//! - [`grammar`] — the [`Grammar`] strategy trait with the shared `term`
//!   and number productions;
//! - [`evaluator`] — [`Evaluator`], which drives a grammar over a cursor
//!   once and checks that the whole input was used;
//! - [`arith`] — checked integer arithmetic, including exact powers;
//! - [`error`] — [`EvalError`], [`SyntaxError`] and source [`Position`]s.
//!
//! Concrete grammars live in `descent-calc`.

pub mod arith;
pub mod cursor;
pub mod error;
pub mod evaluator;
pub mod grammar;

pub use arith::{ArithError, Op, Value};
pub use cursor::{Cursor, CursorStats, Symbol};
pub use error::{EvalError, Expected, Position, SyntaxError};
pub use evaluator::{EvalConfig, Evaluator};
pub use grammar::{Grammar, number};
