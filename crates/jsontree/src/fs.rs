//! File-reading collaborator: slurp a whole file, parse it, drop the buffer.
use std::path::Path;

use crate::{error::ParseError, options::ParserOptions, parser, value::Node};

/// Reads a whole file into memory and parses it as one JSON document with
/// default [`ParserOptions`].
///
/// The read buffer is released when this returns, whatever the outcome.
///
/// # Errors
///
/// Open/read failures surface as [`ErrorKind::Io`]; everything else is a
/// parse failure as for [`parse`].
///
/// [`ErrorKind::Io`]: crate::ErrorKind::Io
/// [`parse`]: crate::parse
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Node, ParseError> {
    parse_file_with_options(path, ParserOptions::default())
}

/// Reads a whole file into memory and parses it as one JSON document with
/// explicit [`ParserOptions`].
///
/// # Errors
///
/// As for [`parse_file`].
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParserOptions,
) -> Result<Node, ParseError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(ParseError::io)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    parser::parse_with_options(&bytes, options)
}
