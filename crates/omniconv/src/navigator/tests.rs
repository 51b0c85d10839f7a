use proptest::prelude::*;

use super::*;
use crate::{
    document::{DocumentCapability, FixedLocator, SelectionShape},
    memory::MemDocument,
    text::Position,
};

/// Counts how often the navigator asks for the document.
struct CountingLocator {
    inner: FixedLocator<MemDocument>,
    lookups: usize,
}

impl CountingLocator {
    fn new(text: &str) -> Self {
        Self {
            inner: FixedLocator::new(MemDocument::new(text)),
            lookups: 0,
        }
    }

    fn document(&self) -> &MemDocument {
        self.inner.document().unwrap()
    }
}

impl CapabilityLocator for CountingLocator {
    fn locate_document(&mut self) -> Option<&mut dyn DocumentCapability> {
        self.lookups += 1;
        self.inner.locate_document()
    }
}

fn scanned(text: &str, pattern: &str) -> (MatchNavigator, CountingLocator) {
    let mut locator = CountingLocator::new(text);
    let mut navigator = MatchNavigator::default();
    navigator.search_document(pattern, &mut locator);
    (navigator, locator)
}

#[test]
fn scan_selects_first_match() {
    let (navigator, locator) = scanned("aXbXcX", "X");
    let info = navigator.current_match_info().unwrap();
    assert_eq!((info.index(), info.total()), (0, 3));
    assert_eq!(info.span(), Match::new(1, 2));
    assert_eq!(locator.document().selected_text().as_deref(), Some("X"));
    assert_eq!(
        navigator.last_outcome(),
        Some(ApplyOutcome::Selected(SelectionShape::CursorRange))
    );
}

#[test]
fn next_and_prev_wrap_around() {
    let (mut navigator, mut locator) = scanned("aXbXcX", "X");
    assert_eq!(navigator.prev(&mut locator).unwrap().index(), 2);
    assert_eq!(navigator.next(&mut locator).unwrap().index(), 0);
    assert_eq!(navigator.next(&mut locator).unwrap().index(), 1);
    assert_eq!(navigator.next(&mut locator).unwrap().index(), 2);
    assert_eq!(navigator.next(&mut locator).unwrap().index(), 0);
}

#[test]
fn each_step_moves_the_selection() {
    let (mut navigator, mut locator) = scanned("one\ntwo one\none", "one");
    let starts: Vec<_> = (0..3)
        .map(|_| {
            navigator.next(&mut locator);
            locator.document().selection().unwrap().start
        })
        .collect();
    assert_eq!(
        starts,
        [Position::new(1, 4), Position::new(2, 0), Position::new(0, 0)]
    );
}

#[test]
fn empty_result_is_inert() {
    let (mut navigator, mut locator) = scanned("abc", "x");
    assert!(navigator.is_empty());
    let lookups = locator.lookups;
    assert_eq!(navigator.next(&mut locator), None);
    assert_eq!(navigator.prev(&mut locator), None);
    assert_eq!(locator.lookups, lookups);
    assert_eq!(locator.document().selection(), None);
    assert_eq!(navigator.current_match_info(), None);
    assert!(navigator.matches().is_empty());
}

#[test]
fn bad_pattern_leaves_navigator_empty() {
    let (navigator, _locator) = scanned("abc", "(");
    assert!(navigator.is_empty());
    assert_eq!(navigator.last_outcome(), None);
}

#[test]
fn rescan_replaces_previous_state() {
    let (mut navigator, mut locator) = scanned("aXbXcX", "X");
    navigator.next(&mut locator);
    navigator.next(&mut locator);
    assert_eq!(navigator.run_scan("XX".into(), "X", &mut locator), 2);
    assert_eq!(navigator.current_match_info().unwrap().index(), 0);
    assert_eq!(navigator.snapshot().unwrap().as_str(), "XX");

    assert_eq!(navigator.run_scan("none".into(), "X", &mut locator), 0);
    assert!(navigator.is_empty());
}

#[test]
fn missing_document_is_tolerated() {
    let mut absent = FixedLocator::<MemDocument>::absent();
    let mut navigator = MatchNavigator::default();
    assert_eq!(navigator.run_scan("aXbX".into(), "X", &mut absent), 2);
    assert_eq!(navigator.last_outcome(), Some(ApplyOutcome::Absent));
    assert_eq!(navigator.next(&mut absent).unwrap().index(), 1);

    assert_eq!(navigator.search_document("X", &mut absent), 0);
    assert!(navigator.is_empty());
}

#[test]
fn positions_come_from_the_scanned_snapshot() {
    let (mut navigator, mut locator) = scanned("a\nX", "X");
    locator
        .inner
        .document_mut()
        .unwrap()
        .set_text("X\nabc");
    navigator.next(&mut locator);
    // The match was at line 1, column 0 when the text was scanned.
    assert_eq!(locator.document().selected_text().as_deref(), Some("a"));
}

#[test]
fn navigator_honors_scanner_options() {
    let scanner = TextScanner::new(crate::scan::ScanOptions {
        case_insensitive: true,
        ..Default::default()
    });
    let mut navigator = MatchNavigator::new(scanner);
    let mut locator = CountingLocator::new("Foo foo FOO");
    assert_eq!(navigator.search_document("foo", &mut locator), 3);
}

#[test]
fn match_info_displays_one_based_counter() {
    let (mut navigator, mut locator) = scanned("xx", "x");
    let info = navigator.next(&mut locator).unwrap();
    assert_eq!(info.to_string(), "2/2");
}

proptest! {
    #[test]
    fn next_cycles_back_to_start(count in 1usize..24, start in 0usize..24) {
        let text = "x".repeat(count);
        let (mut navigator, mut locator) = scanned(&text, "x");
        for _ in 0..start % count {
            navigator.next(&mut locator);
        }
        let before = navigator.current_match_info().unwrap().index();
        for _ in 0..count {
            navigator.next(&mut locator);
        }
        prop_assert_eq!(navigator.current_match_info().unwrap().index(), before);
    }

    #[test]
    fn prev_then_next_is_identity(count in 1usize..24, start in 0usize..24) {
        let text = "x".repeat(count);
        let (mut navigator, mut locator) = scanned(&text, "x");
        for _ in 0..start % count {
            navigator.next(&mut locator);
        }
        let before = navigator.current_match_info().unwrap().index();
        navigator.prev(&mut locator);
        let after = navigator.next(&mut locator).unwrap().index();
        prop_assert_eq!(after, before);
    }
}
