//! Moving a host document's selection onto a match.

use crate::{
    document::{DocumentCapability, SelectionError, SelectionRange, SelectionShape},
    scan::Match,
    text::{TextSnapshot, offset_to_position},
};

/// What happened when a selection was applied.
///
/// Applying a selection is best effort, so none of these are errors. They
/// exist for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The document accepted the selection through the given command.
    Selected(SelectionShape),
    /// The document has no selection command.
    Unsupported,
    /// Every selection command the document has refused the range.
    Failed,
    /// There was no document.
    Absent,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionApplier;

impl SelectionApplier {
    /// The line/column range covering `span` in `text`.
    #[must_use]
    pub fn range_of(span: Match, text: &TextSnapshot) -> SelectionRange {
        SelectionRange::new(
            offset_to_position(text, span.start()),
            offset_to_position(text, span.end()),
        )
    }

    /// Asks `document` to select `span`, which must come from `text`.
    ///
    /// Each shape from [`DocumentCapability::selection_shapes`] is tried in
    /// turn. The first one that succeeds wins.
    pub fn apply(
        &self,
        document: Option<&mut dyn DocumentCapability>,
        span: Match,
        text: &TextSnapshot,
    ) -> ApplyOutcome {
        let Some(document) = document else {
            log::debug!("no document to select {span} in");
            return ApplyOutcome::Absent;
        };
        let shapes = document.selection_shapes();
        if shapes.is_empty() {
            log::debug!("document has no selection command");
            return ApplyOutcome::Unsupported;
        }
        let range = Self::range_of(span, text);
        for shape in shapes {
            match Self::apply_shape(document, shape, range) {
                Some(Ok(())) => return ApplyOutcome::Selected(shape),
                Some(Err(err)) => log::debug!("{shape} {range} refused: {err}"),
                None => log::debug!("document listed {shape} but does not provide it"),
            }
        }
        ApplyOutcome::Failed
    }

    fn apply_shape(
        document: &mut dyn DocumentCapability,
        shape: SelectionShape,
        range: SelectionRange,
    ) -> Option<Result<(), SelectionError>> {
        match shape {
            SelectionShape::CursorRange => document
                .cursor_range()
                .map(|command| command.set_range(range)),
            SelectionShape::LineColumns => document.select_command().map(|command| {
                command.set_selection(
                    range.start.line,
                    range.start.column,
                    range.end.line,
                    range.end.column,
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        document::{CursorRangeCommand, SelectCommand},
        memory::MemDocument,
        text::Position,
    };

    /// A document whose cursor range command always fails.
    struct StubbornCursor {
        inner: MemDocument,
    }

    impl CursorRangeCommand for StubbornCursor {
        fn set_range(&mut self, _range: SelectionRange) -> Result<(), SelectionError> {
            Err(SelectionError::Rejected("read only cursor".to_string()))
        }
    }

    impl DocumentCapability for StubbornCursor {
        fn read_text(&self) -> TextSnapshot {
            self.inner.read_text()
        }

        fn cursor_range(&mut self) -> Option<&mut dyn CursorRangeCommand> {
            Some(self as &mut dyn CursorRangeCommand)
        }

        fn select_command(&mut self) -> Option<&mut dyn SelectCommand> {
            Some(&mut self.inner as &mut dyn SelectCommand)
        }
    }

    fn apply_to(document: &mut dyn DocumentCapability, span: Match) -> ApplyOutcome {
        let text = document.read_text();
        SelectionApplier.apply(Some(document), span, &text)
    }

    #[test]
    fn prefers_cursor_range() {
        let mut doc = MemDocument::new("ab\ncd");
        assert_eq!(
            apply_to(&mut doc, Match::new(1, 4)),
            ApplyOutcome::Selected(SelectionShape::CursorRange)
        );
        assert_eq!(
            doc.selection(),
            Some(SelectionRange::new(Position::new(0, 1), Position::new(1, 1)))
        );
    }

    #[test]
    fn falls_back_to_line_columns() {
        let mut doc = MemDocument::with_shapes("ab\ncd", &[SelectionShape::LineColumns]);
        assert_eq!(
            apply_to(&mut doc, Match::new(3, 5)),
            ApplyOutcome::Selected(SelectionShape::LineColumns)
        );
        assert_eq!(doc.selected_text().as_deref(), Some("cd"));
    }

    #[test]
    fn falls_back_when_cursor_range_fails() {
        let mut doc = StubbornCursor {
            inner: MemDocument::new("xyz"),
        };
        assert_eq!(
            apply_to(&mut doc, Match::new(0, 2)),
            ApplyOutcome::Selected(SelectionShape::LineColumns)
        );
        assert_eq!(doc.inner.selected_text().as_deref(), Some("xy"));
    }

    /// Prefers the line/column command over the cursor range.
    struct LineColumnsFirst {
        inner: MemDocument,
    }

    impl DocumentCapability for LineColumnsFirst {
        fn read_text(&self) -> TextSnapshot {
            self.inner.read_text()
        }

        fn cursor_range(&mut self) -> Option<&mut dyn CursorRangeCommand> {
            self.inner.cursor_range()
        }

        fn select_command(&mut self) -> Option<&mut dyn SelectCommand> {
            self.inner.select_command()
        }

        fn selection_shapes(&mut self) -> Vec<SelectionShape> {
            vec![SelectionShape::LineColumns, SelectionShape::CursorRange]
        }
    }

    #[test]
    fn follows_the_document_shape_order() {
        let mut doc = LineColumnsFirst {
            inner: MemDocument::new("xyz"),
        };
        assert_eq!(
            apply_to(&mut doc, Match::new(1, 3)),
            ApplyOutcome::Selected(SelectionShape::LineColumns)
        );
        assert_eq!(doc.inner.selected_text().as_deref(), Some("yz"));
    }

    #[test]
    fn document_without_commands_is_left_alone() {
        let mut doc = MemDocument::with_shapes("abc", &[]);
        assert_eq!(apply_to(&mut doc, Match::new(0, 1)), ApplyOutcome::Unsupported);
        assert_eq!(doc.selection(), None);
    }

    #[test]
    fn refused_selection_is_swallowed() {
        // The match is computed against a longer text than the document has.
        let text = TextSnapshot::from("line one\nline two");
        let mut doc = MemDocument::new("short");
        let document: &mut dyn DocumentCapability = &mut doc;
        let outcome = SelectionApplier.apply(Some(document), Match::new(9, 13), &text);
        assert_eq!(outcome, ApplyOutcome::Failed);
        assert_eq!(doc.selection(), None);
    }

    #[test]
    fn absent_document_is_a_no_op() {
        let text = TextSnapshot::from("abc");
        assert_eq!(
            SelectionApplier.apply(None, Match::new(0, 1), &text),
            ApplyOutcome::Absent
        );
    }
}
