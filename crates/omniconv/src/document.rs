//! The capabilities a host document offers to the navigation engine.
//!
//! A host surface always exposes its text, and may expose one or both of
//! the selection commands. Hosts report which commands they have through
//! the accessor methods on [`DocumentCapability`]; the defaults report
//! neither.

use std::fmt;

use crate::text::{Position, TextSnapshot};

pub mod locator;

pub use locator::{CapabilityLocator, FixedLocator, HostTree, TreeLocator};

/// A half-open `[start, end)` selection in line/column terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: Position,
    pub end: Position,
}

impl SelectionRange {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The two ways a host may accept a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionShape {
    /// [`CursorRangeCommand::set_range`].
    CursorRange,
    /// [`SelectCommand::set_selection`].
    LineColumns,
}

impl fmt::Display for SelectionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionShape::CursorRange => "cursor range",
            SelectionShape::LineColumns => "line/column selection",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("selection {0} is outside the document")]
    OutOfBounds(SelectionRange),
    #[error("host rejected selection: {0}")]
    Rejected(String),
}

/// Moves the cursor so that it spans a range.
pub trait CursorRangeCommand {
    fn set_range(&mut self, range: SelectionRange) -> Result<(), SelectionError>;
}

/// Selects text given as four integers.
pub trait SelectCommand {
    fn set_selection(
        &mut self,
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Result<(), SelectionError>;
}

/// A text surface owned by the host.
pub trait DocumentCapability {
    /// Takes a snapshot of the current text.
    fn read_text(&self) -> TextSnapshot;

    /// The cursor range command, if the host has one.
    fn cursor_range(&mut self) -> Option<&mut dyn CursorRangeCommand> {
        None
    }

    /// The four-integer selection command, if the host has one.
    fn select_command(&mut self) -> Option<&mut dyn SelectCommand> {
        None
    }

    /// The selection shapes this document accepts, in preference order.
    fn selection_shapes(&mut self) -> Vec<SelectionShape> {
        let mut shapes = Vec::new();
        if self.cursor_range().is_some() {
            shapes.push(SelectionShape::CursorRange);
        }
        if self.select_command().is_some() {
            shapes.push(SelectionShape::LineColumns);
        }
        shapes
    }
}
