use crate::error::{EvalError, Expected, Position, SyntaxError};
use std::fmt;
use std::io::{Bytes, Read};

/// One input symbol: a byte, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Byte(u8),
    End,
}

impl Symbol {
    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, Symbol::Byte(b'0'..=b'9'))
    }

    /// End of stream and newline both terminate an expression.
    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Symbol::End | Symbol::Byte(b'\n'))
    }

    #[inline]
    pub fn is_open_paren(self) -> bool {
        self == Symbol::Byte(b'(')
    }

    #[inline]
    pub fn is_close_paren(self) -> bool {
        self == Symbol::Byte(b')')
    }

    #[inline]
    pub fn is_star(self) -> bool {
        self == Symbol::Byte(b'*')
    }

    #[inline]
    pub fn is_plus(self) -> bool {
        self == Symbol::Byte(b'+')
    }

    #[inline]
    pub fn is_minus(self) -> bool {
        self == Symbol::Byte(b'-')
    }

    /// Numeric value of a digit symbol.
    #[inline]
    pub fn digit(self) -> Option<u8> {
        match self {
            Symbol::Byte(b @ b'0'..=b'9') => Some(b - b'0'),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(b) => write!(f, "'{}'", std::ascii::escape_default(*b)),
            Symbol::End => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorStats {
    /// Symbols pulled from the source, including the end sentinel.
    pub reads: usize,
    /// Symbols consumed by productions.
    pub consumed: usize,
    /// Deepest nesting level reached.
    pub max_depth: usize,
}

/// Single-symbol lookahead over a byte source.
///
/// `Cursor` reads the first symbol when it is created and afterwards keeps
/// exactly one unconsumed symbol buffered in its lookahead. Productions
/// inspect it with [`peek`](Self::peek) and advance with
/// [`consume`](Self::consume) or [`bump`](Self::bump).
///
/// The source is read one byte at a time, so wrap unbuffered readers such as
/// files or stdin in a [`std::io::BufReader`].
///
/// The cursor also owns the nesting guard used by recursive productions, see
/// [`nested`](Self::nested).
#[derive(Debug)]
pub struct Cursor<R> {
    input: Bytes<R>,
    lookahead: Symbol,
    position: Position,
    depth: usize,
    max_depth: usize,
    stats: CursorStats,
}

impl<R> Cursor<R>
where
    R: Read,
{
    /// Creates a cursor and primes its lookahead with the first symbol.
    pub fn try_new(input: R, max_depth: usize) -> Result<Self, EvalError> {
        let mut cursor = Self {
            input: input.bytes(),
            lookahead: Symbol::End,
            position: Position::default(),
            depth: 0,
            max_depth,
            stats: CursorStats::default(),
        };
        cursor.lookahead = cursor.read()?;
        Ok(cursor)
    }

    fn read(&mut self) -> Result<Symbol, EvalError> {
        let symbol = match self.input.next() {
            Some(b) => Symbol::Byte(b?),
            None => Symbol::End,
        };
        self.stats.reads += 1;
        log::trace!("READ: {} at {}", symbol, self.position);
        Ok(symbol)
    }

    /// The next unconsumed symbol.
    #[inline]
    pub fn peek(&self) -> Symbol {
        self.lookahead
    }

    /// Position of the lookahead symbol.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stats(&self) -> CursorStats {
        self.stats
    }

    /// Current nesting level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the lookahead, whatever it is, and returns it.
    ///
    /// Call this only after a predicate has accepted the lookahead.
    pub fn bump(&mut self) -> Result<Symbol, EvalError> {
        let symbol = self.lookahead;
        if let Symbol::Byte(b) = symbol {
            if b == b'\n' {
                self.position.line += 1;
                self.position.column = 0;
            } else {
                self.position.column += 1;
            }
        }
        self.stats.consumed += 1;
        log::trace!("CONSUME: {}", symbol);
        self.lookahead = self.read()?;
        Ok(symbol)
    }

    /// Consumes `expected`, or fails without advancing.
    pub fn consume(&mut self, expected: u8) -> Result<(), EvalError> {
        if self.lookahead == Symbol::Byte(expected) {
            self.bump()?;
            Ok(())
        } else {
            Err(self.unexpected(Expected::Symbol(expected)))
        }
    }

    /// Fails unless the lookahead terminates the expression.
    pub fn expect_end(&self) -> Result<(), EvalError> {
        if self.lookahead.is_end() {
            Ok(())
        } else {
            Err(self.unexpected(Expected::End))
        }
    }

    /// Builds a syntax error for the current lookahead.
    pub fn unexpected(&self, expected: Expected) -> EvalError {
        SyntaxError {
            expected,
            found: self.lookahead,
            position: self.position,
        }
        .into()
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// Fails with [`EvalError::DepthExceeded`] instead of running `f` when
    /// the configured limit has been reached.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, EvalError>
    where
        F: FnOnce(&mut Self) -> Result<T, EvalError>,
    {
        if self.depth >= self.max_depth {
            log::warn!(
                "nesting limit {} reached at {}",
                self.max_depth,
                self.position
            );
            return Err(EvalError::DepthExceeded {
                limit: self.max_depth,
                position: self.position,
            });
        }
        self.depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        let result = f(self);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[derive(Debug)]
    struct FailingReader;

    /// Yields `ok` bytes of `'1'`, then fails.
    #[derive(Debug)]
    struct FlakyReader {
        ok: usize,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.ok == 0 || buf.is_empty() {
                return Err(std::io::Error::other("connection reset"));
            }
            self.ok -= 1;
            buf[0] = b'1';
            Ok(1)
        }
    }

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    #[test]
    fn predicates() {
        assert!(Symbol::Byte(b'7').is_digit());
        assert!(!Symbol::Byte(b'a').is_digit());
        assert!(!Symbol::End.is_digit());
        assert!(Symbol::End.is_end());
        assert!(Symbol::Byte(b'\n').is_end());
        assert!(!Symbol::Byte(b' ').is_end());
        assert!(Symbol::Byte(b'(').is_open_paren());
        assert!(Symbol::Byte(b')').is_close_paren());
        assert!(Symbol::Byte(b'*').is_star());
        assert!(Symbol::Byte(b'+').is_plus());
        assert!(Symbol::Byte(b'-').is_minus());
        assert_eq!(Symbol::Byte(b'9').digit(), Some(9));
        assert_eq!(Symbol::Byte(b'x').digit(), None);
    }

    #[test]
    fn symbol_display() {
        assert_eq!(Symbol::Byte(b'+').to_string(), "'+'");
        assert_eq!(Symbol::Byte(b'\n').to_string(), "'\\n'");
        assert_eq!(Symbol::Byte(0xff).to_string(), "'\\xff'");
        assert_eq!(Symbol::End.to_string(), "end of input");
    }

    #[test]
    fn primes_lookahead_on_creation() {
        init_logger();
        let cursor = Cursor::try_new("12".as_bytes(), 8).unwrap();
        assert_eq!(cursor.peek(), Symbol::Byte(b'1'));
        assert_eq!(cursor.stats().reads, 1);
        assert_eq!(cursor.stats().consumed, 0);

        let cursor = Cursor::try_new("".as_bytes(), 8).unwrap();
        assert_eq!(cursor.peek(), Symbol::End);
        assert!(cursor.expect_end().is_ok());
    }

    #[test]
    fn consume_advances_exactly_once() {
        init_logger();
        let mut cursor = Cursor::try_new("(1)".as_bytes(), 8).unwrap();
        cursor.consume(b'(').unwrap();
        assert_eq!(cursor.peek(), Symbol::Byte(b'1'));
        assert_eq!(cursor.position(), Position::new(0, 1));
        assert_eq!(cursor.bump().unwrap(), Symbol::Byte(b'1'));
        cursor.consume(b')').unwrap();
        assert_eq!(cursor.peek(), Symbol::End);
        assert_eq!(cursor.stats().consumed, 3);
    }

    #[test]
    fn consume_mismatch_does_not_advance() {
        init_logger();
        let mut cursor = Cursor::try_new("*3".as_bytes(), 8).unwrap();
        cursor.consume(b'*').unwrap();
        let err = cursor.consume(b'*').unwrap_err();
        let Some(syntax) = err.as_syntax() else {
            panic!("expected syntax error, got {err:?}");
        };
        assert_eq!(syntax.expected, Expected::Symbol(b'*'));
        assert_eq!(syntax.found, Symbol::Byte(b'3'));
        assert_eq!(syntax.position, Position::new(0, 1));
        assert_eq!(cursor.peek(), Symbol::Byte(b'3'));
    }

    #[test]
    fn newline_terminates_and_moves_line() {
        let mut cursor = Cursor::try_new("\n1".as_bytes(), 8).unwrap();
        assert!(cursor.expect_end().is_ok());
        cursor.bump().unwrap();
        assert_eq!(cursor.position(), Position::new(1, 0));
        assert!(cursor.expect_end().is_err());
    }

    #[test]
    fn nested_enforces_limit() {
        init_logger();
        let mut cursor = Cursor::try_new("".as_bytes(), 2).unwrap();
        let depth = cursor
            .nested(|c| c.nested(|c| Ok(c.depth())))
            .unwrap();
        assert_eq!(depth, 2);
        assert_eq!(cursor.depth(), 0);
        assert_eq!(cursor.stats().max_depth, 2);

        let err = cursor
            .nested(|c| c.nested(|c| c.nested(|_| Ok(()))))
            .unwrap_err();
        assert!(matches!(err, EvalError::DepthExceeded { limit: 2, .. }));
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn read_errors_propagate() {
        let err = Cursor::try_new(FailingReader, 8).unwrap_err();
        assert!(matches!(err, EvalError::Io(_)));
    }

    #[test]
    fn read_errors_propagate_mid_input() {
        init_logger();
        let mut cursor = Cursor::try_new(FlakyReader { ok: 2 }, 8).unwrap();
        assert_eq!(cursor.bump().unwrap(), Symbol::Byte(b'1'));
        assert_eq!(cursor.peek(), Symbol::Byte(b'1'));
        let err = cursor.bump().unwrap_err();
        assert!(matches!(err, EvalError::Io(_)));
        assert!(err.to_string().contains("connection reset"));
        assert_eq!(cursor.position(), Position::new(0, 2));
    }
}
