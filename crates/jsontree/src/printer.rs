//! Canonical indented rendering of a parsed tree.
//!
//! Output shape, kept byte-for-byte from the source behavior:
//!
//! - four spaces of indentation per nesting level,
//! - `"key": ` prefixes everywhere except directly inside an array,
//! - a comma after every entry but the last, a newline after every entry,
//! - the top level is always wrapped in `{` … `}` with a trailing newline —
//!   even when the document was parsed from an array, in which case the
//!   synthesized index keys are printed as ordinary keys,
//! - strings are emitted verbatim between quotes; the printer does not
//!   re-escape what the scanner decoded.
use core::fmt;

use crate::value::{Node, Value};

/// Renders a tree as indented JSON text to a [`fmt::Write`] sink.
///
/// The whole document is wrapped in `{` … `}` regardless of the root's kind
/// and the output ends with a newline.
///
/// # Errors
///
/// Propagates the sink's [`fmt::Error`]; the tree itself cannot fail to
/// render.
pub fn render<W: fmt::Write>(node: &Node, out: &mut W) -> fmt::Result {
    out.write_str("{\n")?;
    render_entries(node, out, 1, false)?;
    out.write_str("}\n")
}

fn render_indent<W: fmt::Write>(out: &mut W, level: usize) -> fmt::Result {
    for _ in 0..level {
        out.write_str("    ")?;
    }
    Ok(())
}

fn render_entries<W: fmt::Write>(
    node: &Node,
    out: &mut W,
    level: usize,
    parent_is_array: bool,
) -> fmt::Result {
    let count = node.entries().len();
    for (position, entry) in node.entries().iter().enumerate() {
        render_indent(out, level)?;
        if !parent_is_array {
            write!(out, "\"{}\": ", entry.key)?;
        }
        match &entry.value {
            Value::Object(child) => {
                out.write_str("{\n")?;
                render_entries(child, out, level + 1, false)?;
                render_indent(out, level)?;
                out.write_char('}')?;
            }
            Value::Array(child) => {
                out.write_str("[\n")?;
                render_entries(child, out, level + 1, true)?;
                render_indent(out, level)?;
                out.write_char(']')?;
            }
            Value::String(s) => write!(out, "\"{s}\"")?,
            Value::Int32(v) => write!(out, "{v}")?,
            Value::Int64(v) => write!(out, "{v}")?,
            Value::Bool(b) => out.write_str(if *b { "true" } else { "false" })?,
            Value::Null => out.write_str("null")?,
        }
        if position + 1 < count {
            out.write_char(',')?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

#[cfg(feature = "std")]
struct IoSink<'a, W: std::io::Write> {
    sink: &'a mut W,
    error: Option<std::io::Error>,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Renders a tree as indented JSON text to an [`std::io::Write`] sink.
///
/// Same output as [`render`]; the sink is not flushed, that stays with the
/// caller.
///
/// # Errors
///
/// A sink write failure surfaces as [`ErrorKind::Io`].
///
/// [`ErrorKind::Io`]: crate::ErrorKind::Io
#[cfg(feature = "std")]
pub fn print<W: std::io::Write>(node: &Node, sink: &mut W) -> Result<(), crate::ParseError> {
    let mut adapter = IoSink { sink, error: None };
    match render(node, &mut adapter) {
        Ok(()) => Ok(()),
        Err(_) => {
            let err = adapter.error.unwrap_or_else(|| {
                std::io::Error::other("output sink rejected a write")
            });
            Err(crate::ParseError::io(err))
        }
    }
}
