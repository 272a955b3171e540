//! Recursive-descent parser: value dispatch and the tree builder.
//!
//! One container level at a time: `{` selects object-mode (literal keys, `:`
//! separators), `[` selects array-mode (keys synthesized from the element
//! index). Values dispatch on a single lookahead byte; nested containers
//! recurse. Any scan failure aborts the whole parse — partially built levels
//! are dropped on the way out, never returned.
//!
//! Deliberately loose, inherited from the source behavior: trailing commas,
//! duplicate keys and other strict-grammar violations are not rejected, the
//! separating comma is optional, and a bare `null` or any scalar at the top
//! level is not a document.

mod scanner;

use alloc::{string::ToString, vec::Vec};

use bstr::ByteSlice;

use crate::{
    error::{ErrorKind, Malformed, ParseError},
    options::ParserOptions,
    value::{Entry, Node, NodeKind, Value},
};
use scanner::Scanner;

/// Parses one complete JSON document with default [`ParserOptions`].
///
/// The document must be at least two bytes long and its first significant
/// byte must open an object or an array; scalars are not valid top-level
/// documents. On success the returned [`Node`] owns the whole tree — nothing
/// borrows from `input`.
///
/// # Errors
///
/// Any scan failure aborts the whole parse; see [`ErrorKind`] for the
/// taxonomy.
///
/// [`ErrorKind`]: crate::ErrorKind
pub fn parse(input: &[u8]) -> Result<Node, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses one complete JSON document with explicit [`ParserOptions`].
///
/// # Errors
///
/// Any scan failure aborts the whole parse; see [`ErrorKind`] for the
/// taxonomy.
///
/// [`ErrorKind`]: crate::ErrorKind
pub fn parse_with_options(input: &[u8], options: ParserOptions) -> Result<Node, ParseError> {
    if input.len() < 2 {
        return Err(ParseError::malformed(Malformed::TooShort, 0));
    }
    let mut scanner = Scanner::new(input, options);
    let result = parse_container(&mut scanner, 0);
    if let Err(err) = &result {
        let at = err.offset().min(input.len());
        let vicinity = &input[at..(at + 16).min(input.len())];
        log::debug!("parse failed: {err}; input there: {:?}", vicinity.as_bstr());
    }
    result
}

/// Entry storage for one container level, growing on the original schedule:
/// capacity 1 up front, then fixed +10 increments tracked explicitly.
struct EntryVec {
    entries: Vec<Entry>,
    capacity: usize,
}

impl EntryVec {
    fn reserve(
        entries: &mut Vec<Entry>,
        additional: usize,
        offset: usize,
    ) -> Result<(), ParseError> {
        entries
            .try_reserve_exact(additional)
            .map_err(|_| ParseError::new(ErrorKind::Alloc, offset))
    }

    fn new(offset: usize) -> Result<Self, ParseError> {
        let mut entries = Vec::new();
        Self::reserve(&mut entries, 1, offset)?;
        Ok(Self {
            entries,
            capacity: 1,
        })
    }

    fn push(&mut self, entry: Entry, offset: usize) -> Result<(), ParseError> {
        if self.entries.len() == self.capacity {
            self.capacity += 10;
            let additional = self.capacity - self.entries.len();
            Self::reserve(&mut self.entries, additional, offset)?;
        }
        self.entries.push(entry);
        Ok(())
    }

    fn finish(mut self) -> Vec<Entry> {
        self.entries.shrink_to_fit();
        self.entries
    }
}

/// Builds one container level. The scanner may sit on leading whitespace;
/// the first significant byte must be `{` or `[`.
fn parse_container(scanner: &mut Scanner<'_>, depth: usize) -> Result<Node, ParseError> {
    if depth >= scanner.options().max_depth {
        return Err(ParseError::new(
            ErrorKind::Capacity {
                what: "nesting depth",
                limit: scanner.options().max_depth,
            },
            scanner.pos(),
        ));
    }

    let open = scanner.skip_whitespace()?;
    let kind = match open {
        b'{' => NodeKind::Object,
        b'[' => NodeKind::Array,
        _ => {
            return Err(ParseError::malformed(
                Malformed::ExpectedContainer,
                scanner.pos(),
            ));
        }
    };
    scanner.bump();

    let mut entries = EntryVec::new(scanner.pos())?;
    let close = if kind == NodeKind::Object { b'}' } else { b']' };
    let mut lookahead = scanner.skip_whitespace()?;
    while lookahead != close {
        let entry = match kind {
            NodeKind::Object => {
                let key = scanner.read_string()?;
                scanner.skip_whitespace()?;
                if scanner.peek() != Some(b':') {
                    return Err(ParseError::malformed(
                        Malformed::ExpectedColon,
                        scanner.pos(),
                    ));
                }
                scanner.bump();
                scanner.skip_whitespace()?;
                let value = parse_value(scanner, depth)?;
                Entry { key, value }
            }
            NodeKind::Array => {
                let key = entries.entries.len().to_string();
                let value = parse_value(scanner, depth)?;
                Entry { key, value }
            }
        };
        scanner.skip_whitespace()?;
        if scanner.peek() == Some(b',') {
            scanner.bump();
        }
        lookahead = scanner.skip_whitespace()?;
        entries.push(entry, scanner.pos())?;
    }
    scanner.bump();

    // Trailing whitespace may run to the end of the input; a document need
    // not carry anything after its closing delimiter.
    let _ = scanner.skip_whitespace();

    Ok(Node::from_entries(kind, entries.finish()))
}

/// Produces one typed value from the lookahead byte.
fn parse_value(scanner: &mut Scanner<'_>, depth: usize) -> Result<Value, ParseError> {
    match scanner.peek() {
        Some(b'{') => Ok(Value::Object(parse_container(scanner, depth + 1)?)),
        Some(b'[') => Ok(Value::Array(parse_container(scanner, depth + 1)?)),
        Some(b'"') => Ok(Value::String(scanner.read_string()?)),
        Some(b'0'..=b'9') => Ok(classify_integer(scanner.read_integer())),
        Some(byte @ (b't' | b'f')) => {
            if scanner.eat_literal(b"true") {
                Ok(Value::Bool(true))
            } else if scanner.eat_literal(b"false") {
                Ok(Value::Bool(false))
            } else {
                Err(ParseError::malformed(
                    Malformed::UnrecognizedValue(byte),
                    scanner.pos(),
                ))
            }
        }
        Some(byte) => Err(ParseError::malformed(
            Malformed::UnrecognizedValue(byte),
            scanner.pos(),
        )),
        None => Err(ParseError::malformed(
            Malformed::UnexpectedEnd,
            scanner.pos(),
        )),
    }
}

/// Classifies a decoded integer by magnitude alone: values from `i32::MAX`
/// upward are wide, everything below is narrow. Narrow storage truncates to
/// the low 32 bits, as the original union did.
#[allow(clippy::cast_possible_truncation)]
fn classify_integer(value: i64) -> Value {
    if value >= i64::from(i32::MAX) {
        Value::Int64(value)
    } else {
        Value::Int32(value as i32)
    }
}
