//! Parser configuration.

/// Configuration knobs for [`parse_with_options`].
///
/// Both limits are resource ceilings; crossing either fails the parse with
/// [`ErrorKind::Capacity`].
///
/// # Examples
///
/// ```rust
/// use jsontree::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_string_len: 32,
///     ..Default::default()
/// };
/// assert!(parse_with_options(br#"{"k": "short"}"#, options).is_ok());
/// ```
///
/// [`parse_with_options`]: crate::parse_with_options
/// [`ErrorKind::Capacity`]: crate::ErrorKind::Capacity
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Ceiling on the decoded length of any key or string value, in bytes.
    /// A decoded string must stay strictly below this value.
    ///
    /// # Default
    ///
    /// `256`
    pub max_string_len: usize,

    /// Ceiling on container nesting depth. The top-level container sits at
    /// depth zero; opening a container at this depth fails the parse, which
    /// bounds recursion on pathologically deep input.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_string_len: 256,
            max_depth: 128,
        }
    }
}
