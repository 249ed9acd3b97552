//! Line-at-a-time evaluation of a whole input stream.

use crate::GrammarKind;
use descent::EvalConfig;
use std::io::{self, BufRead, Write};

/// Evaluates every non-empty line of `input` with a fresh evaluator.
///
/// Lines are split on `\n` only and passed on as raw bytes, so a `\r` or a
/// non-UTF-8 byte is reported as a syntax error on its line like any other
/// symbol outside the alphabet. Values go to `out`, failures to `err` as
/// `line N: <error>`. Returns the number of failed lines; only read or
/// write errors on the streams themselves abort the run.
pub fn evaluate_lines<B, O, E>(
    grammar: GrammarKind,
    config: EvalConfig,
    input: B,
    mut out: O,
    mut err: E,
) -> io::Result<usize>
where
    B: BufRead,
    O: Write,
    E: Write,
{
    let mut failed = 0;
    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match grammar.evaluate(line.as_slice(), config) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(e) => {
                failed += 1;
                log::debug!("line {} failed: {:?}", index + 1, e);
                writeln!(err, "line {}: {}", index + 1, e)?;
            }
        }
    }
    Ok(failed)
}
