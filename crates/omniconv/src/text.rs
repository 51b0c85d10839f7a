//! Immutable text snapshots and the character offsets that index them.
//!
//! A "character" here is a UTF-16 code unit. Hosts that index their text
//! that way can use offsets, lengths and columns from this crate directly.

use std::{fmt, sync::Arc};

pub mod position;

pub use position::{LineIndex, Position, offset_to_position};

/// An immutable copy of a document's text, taken at one point in time.
///
/// Offsets and positions are only meaningful against the snapshot they
/// were computed from. Cloning is cheap.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct TextSnapshot {
    text: Arc<str>,
}

impl TextSnapshot {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        char_count(&self.text)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The characters of the snapshot.
    pub fn units(&self) -> impl Iterator<Item = u16> + '_ {
        self.text.encode_utf16()
    }
}

impl fmt::Debug for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextSnapshot").field(&self.text).finish()
    }
}

impl From<&str> for TextSnapshot {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextSnapshot {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Counts the characters (UTF-16 code units) in `text`.
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Converts increasing byte offsets into character offsets in one pass.
///
/// Each call continues from the previous one, so a whole list of match
/// boundaries costs a single walk over the text.
#[derive(Debug)]
pub(crate) struct OffsetCursor<'a> {
    text: &'a str,
    byte: usize,
    offset: usize,
}

impl<'a> OffsetCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            offset: 0,
        }
    }

    /// Returns the character offset of `byte`.
    ///
    /// `byte` must lie on a char boundary and must not be less than the
    /// value passed to the previous call.
    pub(crate) fn advance_to(&mut self, byte: usize) -> usize {
        assert!(byte >= self.byte, "byte offsets must not decrease");
        self.offset += char_count(&self.text[self.byte..byte]);
        self.byte = byte;
        self.offset
    }
}
