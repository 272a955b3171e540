//! Low-level cursor over the input bytes.
//!
//! The scanner owns the position; every decoding routine consumes from the
//! current position and reports failures with the offset at which they were
//! detected. Strings are copied out — nothing borrows from the input after
//! the parse returns.
use alloc::{string::String, vec::Vec};

use crate::{
    error::{ErrorKind, Malformed, ParseError},
    options::ParserOptions,
};

pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    options: ParserOptions,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8], options: ParserOptions) -> Self {
        Self {
            input,
            pos: 0,
            options,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub(crate) fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Advances past insignificant bytes and returns the first significant
    /// one, leaving the position on it.
    ///
    /// NUL counts as whitespace here: the original engine scanned
    /// NUL-terminated buffers and treated embedded NULs as insignificant, a
    /// permissive behavior that is kept.
    pub(crate) fn skip_whitespace(&mut self) -> Result<u8, ParseError> {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n' | 0) => self.bump(),
                Some(other) => return Ok(other),
                None => {
                    return Err(ParseError::malformed(Malformed::UnexpectedEnd, self.pos));
                }
            }
        }
    }

    /// Decodes one string literal, leading and trailing quotes included.
    ///
    /// Escapes `\b \f \n \r \t \\ \/` decode to their control characters, any
    /// other `\x` yields the literal `x`, and `\u` fails outright — the four
    /// hex digits are not decoded and dropping them would lose data. The
    /// decoded length must stay strictly below the configured ceiling.
    pub(crate) fn read_string(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        if self.peek() != Some(b'"') {
            return Err(ParseError::malformed(Malformed::ExpectedQuote, self.pos));
        }
        self.bump();

        let mut decoded: Vec<u8> = Vec::new();
        loop {
            let Some(byte) = self.peek() else {
                return Err(ParseError::malformed(Malformed::UnterminatedString, start));
            };
            match byte {
                b'"' => {
                    self.bump();
                    return String::from_utf8(decoded).map_err(|_| {
                        ParseError::malformed(Malformed::InvalidUtf8, start)
                    });
                }
                b'\\' => {
                    self.bump();
                    let Some(escape) = self.peek() else {
                        return Err(ParseError::malformed(
                            Malformed::UnterminatedString,
                            start,
                        ));
                    };
                    let unescaped = match escape {
                        b'b' => 0x08,
                        b'f' => 0x0c,
                        b'n' => b'\n',
                        b'r' => b'\r',
                        b't' => b'\t',
                        b'\\' => b'\\',
                        b'/' => b'/',
                        b'u' => {
                            return Err(ParseError::malformed(
                                Malformed::UnsupportedEscape,
                                self.pos - 1,
                            ));
                        }
                        other => other,
                    };
                    decoded.push(unescaped);
                    self.bump();
                }
                other => {
                    decoded.push(other);
                    self.bump();
                }
            }
            if decoded.len() >= self.options.max_string_len {
                return Err(ParseError::new(
                    ErrorKind::Capacity {
                        what: "string length",
                        limit: self.options.max_string_len,
                    },
                    start,
                ));
            }
        }
    }

    /// Decodes a maximal run of ASCII digits as a non-negative base-10
    /// integer. Overflow wraps at 64 bits, matching the original engine's
    /// unchecked accumulation; the caller guarantees a digit lookahead.
    pub(crate) fn read_integer(&mut self) -> i64 {
        let mut value: i64 = 0;
        while let Some(byte @ b'0'..=b'9') = self.peek() {
            value = value.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
            self.bump();
        }
        value
    }
}
