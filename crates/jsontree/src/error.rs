//! Error type for parsing and printing.
//!
//! Every failure is terminal for the call that produced it: there is no
//! partial-document recovery, and partially-built nodes are dropped before the
//! error reaches the caller. The diagnostic travels with the error value;
//! there is no side-channel message buffer.
use core::fmt;

use thiserror::Error;

/// A parse or print failure, carrying its kind and the byte offset at which
/// it occurred.
///
/// The offset is meaningful for scan-level failures; I/O failures display
/// without one.
#[derive(Debug)]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
}

/// The failure taxonomy.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The input does not scan: delimiter mismatch, unterminated string,
    /// truncation before the scan boundary, or an unrecognized value token.
    #[error("malformed input: {0}")]
    Malformed(#[from] Malformed),

    /// A fixed ceiling was reached: an overlong decoded string or nesting
    /// deeper than the configured maximum.
    #[error("{what} limit of {limit} reached")]
    Capacity {
        /// Which ceiling was hit.
        what: &'static str,
        /// The configured limit.
        limit: usize,
    },

    /// Entry storage could not be grown.
    #[error("could not grow entry storage")]
    Alloc,

    /// The file-reading collaborator or the output sink failed.
    #[cfg(feature = "std")]
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// The specific way input failed to scan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Malformed {
    /// The document is shorter than the two bytes a `{}`/`[]` pair needs.
    #[error("document shorter than two bytes")]
    TooShort,
    /// The first significant byte was not `{` or `[`.
    #[error("expected `{{` or `[` to open a container")]
    ExpectedContainer,
    /// An object key position did not hold a `\"`.
    #[error("expected `\"` to open a string")]
    ExpectedQuote,
    /// An object key was not followed by `:`.
    #[error("expected `:` after an object key")]
    ExpectedColon,
    /// A string ran to the end of the input without a closing `\"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// A `\u` escape was seen; these are not decoded, and dropping the four
    /// hex digits would silently lose data.
    #[error("unsupported `\\u` escape")]
    UnsupportedEscape,
    /// A decoded string was not valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8,
    /// The input ended where more of the document was required.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// The lookahead byte starts no known value. `null` lands here too: the
    /// value dispatcher has never accepted it.
    #[error("no value recognized at `{}`", .0.escape_ascii())]
    UnrecognizedValue(u8),
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub(crate) fn malformed(reason: Malformed, offset: usize) -> Self {
        Self::new(ErrorKind::Malformed(reason), offset)
    }

    #[cfg(feature = "std")]
    pub(crate) fn io(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(source), 0)
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the input at which the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            #[cfg(feature = "std")]
            ErrorKind::Io(_) => write!(f, "{}", self.kind),
            _ => write!(f, "{} at byte {}", self.kind, self.offset),
        }
    }
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}
