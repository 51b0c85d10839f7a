use std::fmt;

use super::TextSnapshot;

const NEWLINE: u16 = 0x0A;

/// A zero-based line and column in a text snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps a character offset to its line and column.
///
/// Offsets past the end of the text are clamped to the end.
#[must_use]
pub fn offset_to_position(text: &TextSnapshot, offset: usize) -> Position {
    text.units()
        .take(offset)
        .fold(Position::default(), |pos, unit| {
            if unit == NEWLINE {
                Position::new(pos.line + 1, 0)
            } else {
                Position::new(pos.line, pos.column + 1)
            }
        })
}

/// The start offset of every line in a snapshot.
///
/// Gives the same answers as [`offset_to_position`], without rescanning the
/// text for every query.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &TextSnapshot) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for unit in text.units() {
            len += 1;
            if unit == NEWLINE {
                line_starts.push(len);
            }
        }
        Self { line_starts, len }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        // The first line always starts at 0, so this is at least 1.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }
}
