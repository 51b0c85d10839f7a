//! Stepping through the matches of a search, one selection at a time.

use std::fmt;

use crate::{
    document::CapabilityLocator,
    scan::{Match, TextScanner},
    selection::{ApplyOutcome, SelectionApplier},
    text::TextSnapshot,
};

/// Where the navigator's cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchInfo {
    index: usize,
    total: usize,
    span: Match,
}

impl MatchInfo {
    /// Zero-based index of the current match.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn span(&self) -> Match {
        self.span
    }
}

impl fmt::Display for MatchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index + 1, self.total)
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Prev,
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Empty,
    Active {
        snapshot: TextSnapshot,
        matches: Vec<Match>,
        cursor: usize,
    },
}

/// Holds the result of the last search and a cursor that cycles through
/// it.
///
/// Every action that lands on a match asks the located document to select
/// it. That request is best effort: a missing document or one that refuses
/// the selection leaves the navigator's own state unaffected.
#[derive(Debug, Clone, Default)]
pub struct MatchNavigator {
    scanner: TextScanner,
    applier: SelectionApplier,
    state: State,
    last_outcome: Option<ApplyOutcome>,
}

impl MatchNavigator {
    #[must_use]
    pub fn new(scanner: TextScanner) -> Self {
        Self {
            scanner,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scanner(&self) -> &TextScanner {
        &self.scanner
    }

    /// Searches `text`, replacing any previous results, and selects the
    /// first match. Returns the number of matches.
    pub fn run_scan<L>(&mut self, text: TextSnapshot, pattern: &str, locator: &mut L) -> usize
    where
        L: CapabilityLocator + ?Sized,
    {
        let matches = self.scanner.scan(&text, pattern);
        let count = matches.len();
        self.state = if matches.is_empty() {
            State::Empty
        } else {
            State::Active {
                snapshot: text,
                matches,
                cursor: 0,
            }
        };
        self.last_outcome = None;
        self.select_current(locator);
        count
    }

    /// Searches the text of the located document.
    ///
    /// With no document, the previous results are discarded and nothing is
    /// found.
    pub fn search_document<L>(&mut self, pattern: &str, locator: &mut L) -> usize
    where
        L: CapabilityLocator + ?Sized,
    {
        let Some(text) = locator.locate_document().map(|doc| doc.read_text()) else {
            log::debug!("no document to search");
            self.clear();
            return 0;
        };
        self.run_scan(text, pattern, locator)
    }

    /// Moves to the following match, wrapping from the last to the first.
    pub fn next<L>(&mut self, locator: &mut L) -> Option<MatchInfo>
    where
        L: CapabilityLocator + ?Sized,
    {
        self.step(Step::Next, locator)
    }

    /// Moves to the preceding match, wrapping from the first to the last.
    pub fn prev<L>(&mut self, locator: &mut L) -> Option<MatchInfo>
    where
        L: CapabilityLocator + ?Sized,
    {
        self.step(Step::Prev, locator)
    }

    #[must_use]
    pub fn current_match_info(&self) -> Option<MatchInfo> {
        match &self.state {
            State::Empty => None,
            State::Active {
                matches, cursor, ..
            } => Some(MatchInfo {
                index: *cursor,
                total: matches.len(),
                span: matches[*cursor],
            }),
        }
    }

    #[must_use]
    pub fn matches(&self) -> &[Match] {
        match &self.state {
            State::Empty => &[],
            State::Active { matches, .. } => matches,
        }
    }

    /// The text the current matches refer to.
    #[must_use]
    pub fn snapshot(&self) -> Option<&TextSnapshot> {
        match &self.state {
            State::Empty => None,
            State::Active { snapshot, .. } => Some(snapshot),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    /// How the most recent selection request went, if one was made since
    /// the last search.
    #[must_use]
    pub fn last_outcome(&self) -> Option<ApplyOutcome> {
        self.last_outcome
    }

    pub fn clear(&mut self) {
        self.state = State::Empty;
        self.last_outcome = None;
    }

    fn step<L>(&mut self, step: Step, locator: &mut L) -> Option<MatchInfo>
    where
        L: CapabilityLocator + ?Sized,
    {
        let State::Active {
            matches, cursor, ..
        } = &mut self.state
        else {
            return None;
        };
        let len = matches.len();
        *cursor = match step {
            Step::Next => (*cursor + 1) % len,
            Step::Prev => (*cursor + len - 1) % len,
        };
        log::trace!("{step:?} to match {} of {len}", *cursor + 1);
        self.select_current(locator);
        self.current_match_info()
    }

    fn select_current<L>(&mut self, locator: &mut L)
    where
        L: CapabilityLocator + ?Sized,
    {
        let State::Active {
            snapshot,
            matches,
            cursor,
        } = &self.state
        else {
            return;
        };
        let outcome = self
            .applier
            .apply(locator.locate_document(), matches[*cursor], snapshot);
        self.last_outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests;
