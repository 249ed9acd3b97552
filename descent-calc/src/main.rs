//! Command-line interface for descent-calc.
//!
//! Evaluates one expression per input line with the selected grammar and
//! prints one result per line. Failures are reported on stderr with their
//! line number; the process exits non-zero if any line failed.
//!
//! ```text
//! $ printf '2**3**2\n1+2 3\n' | descent-calc
//! 512
//! line 2: syntax error: expected end of input, found ' ' at 0:3
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the productions.

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use descent_calc::{EvalConfig, GrammarKind, evaluate_lines};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grammar: `standard` (`**` exponents) or `ternary` (single `*`).
    #[arg(short, long, default_value_t = GrammarKind::Standard)]
    grammar: GrammarKind,

    /// Maximum nesting depth of parentheses and exponents.
    #[arg(short = 'd', long, default_value_t = EvalConfig::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Input file with one expression per line (stdin when omitted).
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("can't open {:?}", path))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };
    Ok(reader)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = EvalConfig {
        max_depth: args.max_depth,
    };
    log::debug!("grammar {}, {:?}", args.grammar, config);

    let failed = evaluate_lines(
        args.grammar,
        config,
        open_input(args.input.as_ref())?,
        std::io::stdout().lock(),
        std::io::stderr().lock(),
    )
    .context("can't process input")?;

    if failed > 0 {
        bail!("{failed} expression(s) failed");
    }
    Ok(())
}
