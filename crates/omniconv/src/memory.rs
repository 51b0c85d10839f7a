//! An in-memory document, for hosts without a text surface of their own.

use crate::{
    document::{
        CursorRangeCommand, DocumentCapability, SelectCommand, SelectionError, SelectionRange,
        SelectionShape,
    },
    text::{Position, TextSnapshot},
};

/// A plain text document that remembers its selection.
#[derive(Debug, Clone)]
pub struct MemDocument {
    text: TextSnapshot,
    line_lengths: Vec<usize>,
    selection: Option<SelectionRange>,
    cursor_range: bool,
    select_command: bool,
}

fn line_lengths(text: &TextSnapshot) -> Vec<usize> {
    text.as_str()
        .split('\n')
        .map(crate::text::char_count)
        .collect()
}

impl MemDocument {
    /// A document that accepts both selection shapes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_shapes(text, &[SelectionShape::CursorRange, SelectionShape::LineColumns])
    }

    /// A document that only accepts the given selection shapes.
    pub fn with_shapes(text: impl Into<String>, shapes: &[SelectionShape]) -> Self {
        let text = TextSnapshot::from(text.into());
        Self {
            line_lengths: line_lengths(&text),
            text,
            selection: None,
            cursor_range: shapes.contains(&SelectionShape::CursorRange),
            select_command: shapes.contains(&SelectionShape::LineColumns),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replaces the text, clearing the selection.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = TextSnapshot::from(text.into());
        self.line_lengths = line_lengths(&self.text);
        self.selection = None;
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    /// The text covered by the current selection.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        let range = self.selection?;
        let start = self.offset_of(range.start)?;
        let end = self.offset_of(range.end)?;
        let units: Vec<u16> = self.text.units().skip(start).take(end - start).collect();
        Some(String::from_utf16_lossy(&units))
    }

    fn offset_of(&self, position: Position) -> Option<usize> {
        let line_len = *self.line_lengths.get(position.line)?;
        if position.column > line_len {
            return None;
        }
        // Every earlier line is followed by one newline.
        let line_start: usize = self.line_lengths[..position.line]
            .iter()
            .map(|len| len + 1)
            .sum();
        Some(line_start + position.column)
    }

    fn select(&mut self, range: SelectionRange) -> Result<(), SelectionError> {
        let in_bounds = self.offset_of(range.start).is_some()
            && self.offset_of(range.end).is_some()
            && range.start <= range.end;
        if !in_bounds {
            return Err(SelectionError::OutOfBounds(range));
        }
        self.selection = Some(range);
        Ok(())
    }
}

impl CursorRangeCommand for MemDocument {
    fn set_range(&mut self, range: SelectionRange) -> Result<(), SelectionError> {
        self.select(range)
    }
}

impl SelectCommand for MemDocument {
    fn set_selection(
        &mut self,
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Result<(), SelectionError> {
        self.select(SelectionRange::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        ))
    }
}

impl DocumentCapability for MemDocument {
    fn read_text(&self) -> TextSnapshot {
        self.text.clone()
    }

    fn cursor_range(&mut self) -> Option<&mut dyn CursorRangeCommand> {
        if self.cursor_range {
            Some(self as &mut dyn CursorRangeCommand)
        } else {
            None
        }
    }

    fn select_command(&mut self) -> Option<&mut dyn SelectCommand> {
        if self.select_command {
            Some(self as &mut dyn SelectCommand)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: (usize, usize), end: (usize, usize)) -> SelectionRange {
        SelectionRange::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    #[test]
    fn selects_text_across_lines() {
        let mut doc = MemDocument::new("ab\ncd\n😀e");
        doc.set_range(range((0, 1), (1, 1))).unwrap();
        assert_eq!(doc.selected_text().as_deref(), Some("b\nc"));
        doc.set_selection(2, 0, 2, 3).unwrap();
        assert_eq!(doc.selected_text().as_deref(), Some("😀e"));
    }

    #[test]
    fn rejects_out_of_bounds_selection() {
        let mut doc = MemDocument::new("ab\ncd");
        assert!(doc.set_range(range((0, 3), (1, 0))).is_err());
        assert!(doc.set_range(range((2, 0), (2, 0))).is_err());
        assert!(doc.set_range(range((1, 1), (0, 0))).is_err());
        assert_eq!(doc.selection(), None);
    }

    #[test]
    fn reports_only_configured_shapes() {
        let mut both = MemDocument::new("");
        assert_eq!(
            both.selection_shapes(),
            [SelectionShape::CursorRange, SelectionShape::LineColumns]
        );
        let mut legacy = MemDocument::with_shapes("", &[SelectionShape::LineColumns]);
        assert!(legacy.cursor_range().is_none());
        assert_eq!(legacy.selection_shapes(), [SelectionShape::LineColumns]);
        let mut read_only = MemDocument::with_shapes("", &[]);
        assert!(read_only.selection_shapes().is_empty());
    }

    #[test]
    fn set_text_clears_selection() {
        let mut doc = MemDocument::new("abc");
        doc.set_range(range((0, 0), (0, 1))).unwrap();
        doc.set_text("xyz");
        assert_eq!(doc.selection(), None);
        assert_eq!(doc.read_text().as_str(), "xyz");
    }
}
