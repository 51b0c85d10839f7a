//! Finding every match of a regular expression in a text snapshot.

use std::fmt;

use regex_automata::{
    meta::{BuildError, Regex},
    util::syntax,
};

use crate::text::{OffsetCursor, TextSnapshot};

/// A half-open `[start, end)` range of characters in a snapshot.
///
/// Matches only come out of [`TextScanner::scan`]; they cannot be built
/// from outside the crate.
///
/// ```compile_fail
/// let _ = omniconv::scan::Match::new(0, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    start: usize,
    end: usize,
}

impl Match {
    #[must_use]
    pub(crate) fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "match start {start} is after end {end}");
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Flags that change how patterns are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TextScanner {
    options: ScanOptions,
}

impl TextScanner {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Compiles `pattern` with this scanner's options.
    pub fn try_compile(&self, pattern: &str) -> Result<Regex, BuildError> {
        Regex::builder()
            .syntax(
                syntax::Config::new()
                    .case_insensitive(self.options.case_insensitive)
                    .multi_line(self.options.multi_line)
                    .dot_matches_new_line(self.options.dot_matches_new_line),
            )
            .build(pattern)
    }

    /// Returns every non-overlapping match of `pattern`, in order.
    ///
    /// A pattern that does not compile has no matches. Empty matches are
    /// included, and the search always moves forward past them.
    #[must_use]
    pub fn scan(&self, text: &TextSnapshot, pattern: &str) -> Vec<Match> {
        let regex = match self.try_compile(pattern) {
            Ok(regex) => regex,
            Err(err) => {
                log::debug!("pattern {pattern:?} does not compile, treating as no matches: {err}");
                return Vec::new();
            }
        };
        let haystack = text.as_str();
        let mut offsets = OffsetCursor::new(haystack);
        let matches: Vec<Match> = regex
            .find_iter(haystack)
            .map(|found| {
                let start = offsets.advance_to(found.start());
                let end = offsets.advance_to(found.end());
                Match::new(start, end)
            })
            .collect();
        log::trace!("pattern {pattern:?} matched {} times", matches.len());
        matches
    }
}
