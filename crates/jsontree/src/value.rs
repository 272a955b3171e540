//! The in-memory JSON tree.
//!
//! A [`Node`] is one object or array level: an insertion-ordered sequence of
//! [`Entry`] records. Array levels synthesize their entries' keys from the
//! element index ("0", "1", "2", …), so every entry has a key regardless of
//! where it came from; the [`NodeKind`] discriminator records which delimiter
//! opened the level.
use alloc::{string::String, vec::Vec};

/// Which delimiter opened a [`Node`]: `{` or `[`.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// The level was opened by `{` and its keys are literal JSON keys.
    #[default]
    Object,
    /// The level was opened by `[` and its keys are decimal element indices.
    Array,
}

/// One object or array level of a parsed document.
///
/// Entries keep their insertion order. A node is fully built by the parser
/// before it is handed out and carries no mutation API beyond construction;
/// dropping it tears down all nested levels.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    kind: NodeKind,
    entries: Vec<Entry>,
}

/// One key/value pair within a [`Node`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The literal JSON key for object members, or the decimal rendering of
    /// the element index for array members.
    pub key: String,
    /// The typed value.
    pub value: Value,
}

/// A typed JSON value.
///
/// Integers are split by magnitude: anything whose decoded value reaches
/// `i32::MAX` is [`Int64`], everything below is [`Int32`]. The classification
/// is a pure function of the value, not of how it was previously stored.
///
/// [`Int64`]: Value::Int64
/// [`Int32`]: Value::Int32
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` value. The parser never produces it (a `null` literal is
    /// rejected as an unrecognized token), but it prints as `null`.
    Null,
    /// A nested object level.
    Object(Node),
    /// A nested array level.
    Array(Node),
    /// A string value.
    String(String),
    /// An integer below the `i32::MAX` threshold.
    Int32(i32),
    /// An integer at or above the `i32::MAX` threshold.
    Int64(i64),
    /// A boolean value.
    Bool(bool),
}

impl Node {
    /// Creates an empty node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Creates a node from an already-built entry sequence.
    #[must_use]
    pub fn from_entries(kind: NodeKind, entries: Vec<Entry>) -> Self {
        Self { kind, entries }
    }

    /// Which delimiter opened this level.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The entries of this level, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries in this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this level has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of the first entry with the given key, if any.
    ///
    /// Duplicate keys are not rejected by the parser; lookups see the first
    /// occurrence.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Returns the value of the entry at the given position, if any.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|entry| &entry.value)
    }
}

impl Value {
    /// Stable diagnostic name of the value's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::String(_) => "string",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is a nested object or array.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns `true` if the value is [`Int32`] or [`Int64`].
    ///
    /// [`Int32`]: Value::Int32
    /// [`Int64`]: Value::Int64
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int32(_) | Self::Int64(_))
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns the string slice if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer widened to `i64` if the value is [`Int32`] or
    /// [`Int64`].
    ///
    /// [`Int32`]: Value::Int32
    /// [`Int64`]: Value::Int64
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested node if the value is a container.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Object(node) | Self::Array(node) => Some(node),
            _ => None,
        }
    }
}

impl core::fmt::Display for Node {
    /// Renders the node through the pretty-printer, `{}`-wrapped top level
    /// and trailing newline included.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::printer::render(self, f)
    }
}
