use crate::arith::Value;
use crate::cursor::{Cursor, CursorStats};
use crate::error::EvalError;
use crate::grammar::Grammar;
use std::io::Read;

/// Tunables for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest permitted nesting of parentheses (and of exponents, for
    /// grammars that recurse on them).
    pub max_depth: usize,
}

impl EvalConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Couples a [`Cursor`] over one input with a [`Grammar`] strategy.
///
/// An evaluator is single-use: [`evaluate`](Self::evaluate) takes `self`,
/// so each expression gets a fresh instance.
///
/// # Example
///
/// ```rust
/// # use descent::{Cursor, EvalError, Evaluator, Grammar, Value};
/// # use std::io::Read;
/// // A grammar whose expressions are single terms.
/// #[derive(Default)]
/// struct Terms;
///
/// impl Grammar for Terms {
///     const NAME: &'static str = "terms";
///     fn expr<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
///         self.factor(cursor)
///     }
///     fn factor<R: Read>(&self, cursor: &mut Cursor<R>) -> Result<Value, EvalError> {
///         self.term(cursor)
///     }
/// }
///
/// let evaluator: Evaluator<_, Terms> = Evaluator::try_new("((42))\n".as_bytes()).unwrap();
/// assert_eq!(evaluator.evaluate().unwrap(), 42);
/// ```
#[derive(Debug)]
pub struct Evaluator<R, G> {
    cursor: Cursor<R>,
    grammar: G,
}

impl<R, G> Evaluator<R, G>
where
    R: Read,
    G: Grammar,
{
    /// Creates an evaluator with the default grammar instance and config.
    pub fn try_new(input: R) -> Result<Self, EvalError>
    where
        G: Default,
    {
        Self::with_config(input, G::default(), EvalConfig::default())
    }

    /// Creates an evaluator and primes the lookahead from `input`.
    pub fn with_config(input: R, grammar: G, config: EvalConfig) -> Result<Self, EvalError> {
        let cursor = Cursor::try_new(input, config.max_depth)?;
        Ok(Self { cursor, grammar })
    }

    pub fn stats(&self) -> CursorStats {
        self.cursor.stats()
    }

    /// Evaluates one expression, which must run to end of input or newline.
    pub fn evaluate(self) -> Result<Value, EvalError> {
        self.evaluate_with_stats().map(|(value, _)| value)
    }

    /// Like [`evaluate`](Self::evaluate), also returning cursor statistics.
    pub fn evaluate_with_stats(mut self) -> Result<(Value, CursorStats), EvalError> {
        let value = self.grammar.expr(&mut self.cursor)?;
        self.cursor.expect_end()?;
        let stats = self.cursor.stats();
        log::debug!("{}: value {}, {:?}", G::NAME, value, stats);
        Ok((value, stats))
    }
}
