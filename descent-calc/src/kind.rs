//! Runtime selection between the two grammars.

use crate::{Standard, Ternary};
use descent::{EvalConfig, EvalError, Evaluator, Value};
use smartstring::alias::String;
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

/// Names one of the grammars, for callers that choose at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrammarKind {
    #[default]
    Standard,
    Ternary,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grammar {0:?} (expected `standard` or `ternary`)")]
pub struct ParseGrammarKindError(pub String);

impl GrammarKind {
    /// Evaluates one expression from `input` with a fresh evaluator.
    pub fn evaluate<R: Read>(self, input: R, config: EvalConfig) -> Result<Value, EvalError> {
        match self {
            GrammarKind::Standard => Evaluator::with_config(input, Standard, config)?.evaluate(),
            GrammarKind::Ternary => Evaluator::with_config(input, Ternary, config)?.evaluate(),
        }
    }
}

impl FromStr for GrammarKind {
    type Err = ParseGrammarKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(GrammarKind::Standard),
            "ternary" => Ok(GrammarKind::Ternary),
            _ => Err(ParseGrammarKindError(String::from(s))),
        }
    }
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GrammarKind::Standard => "standard",
            GrammarKind::Ternary => "ternary",
        })
    }
}
