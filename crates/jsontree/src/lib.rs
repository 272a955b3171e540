//! A tree-building JSON parser and indented pretty-printer.
//!
//! [`parse`] scans a complete JSON document from a byte buffer into an owned
//! tree of [`Node`]s — ordered key/value [`Entry`] sequences with an explicit
//! object/array discriminator — and [`render`]/[`print`] walk a tree back out
//! as 4-space-indented text. [`parse_file`] is the whole-file convenience
//! wrapper. There is no streaming, no mutation API, and no state outside the
//! tree the caller owns.
//!
//! The dialect is deliberately permissive and narrow, kept from the engine
//! this crate reimplements:
//!
//! - no floating-point numbers; integers are non-negative decimal runs,
//!   classified narrow/wide at the `i32::MAX` threshold,
//! - `null` literals are not accepted by the value dispatcher,
//! - `\uXXXX` escapes are rejected rather than decoded,
//! - trailing commas, duplicate keys and embedded NULs are tolerated,
//! - arrays are modeled as entry sequences keyed `"0"`, `"1"`, …, and the
//!   printer wraps every document in `{` … `}`, array roots included.
//!
//! # Examples
//!
//! ```rust
//! use jsontree::{Value, parse};
//!
//! let doc = parse(br#"{"name": "crate", "tags": ["json", "tree"]}"#)?;
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("crate"));
//!
//! let tags = doc.get("tags").and_then(Value::as_node).unwrap();
//! assert_eq!(tags.at(1).and_then(Value::as_str), Some("tree"));
//!
//! // Printing is canonical: 4-space indentation, trailing newline.
//! assert!(doc.to_string().starts_with("{\n    \"name\": \"crate\",\n"));
//! # Ok::<(), jsontree::ParseError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
#[cfg(feature = "std")]
mod fs;
mod options;
mod parser;
mod printer;
mod value;

pub use error::{ErrorKind, Malformed, ParseError};
#[cfg(feature = "std")]
pub use fs::{parse_file, parse_file_with_options};
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
#[cfg(feature = "std")]
pub use printer::print;
pub use printer::render;
pub use value::{Entry, Node, NodeKind, Value};
