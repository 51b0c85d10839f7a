#![no_main]

use libfuzzer_sys::fuzz_target;
use omniconv::{
    scan::{ScanOptions, TextScanner},
    text::{LineIndex, TextSnapshot, offset_to_position},
};

// The first line of the input is the pattern, the rest is the text.
fuzz_target!(|data: &str| {
    let Some((pattern, text)) = data.split_once('\n') else {
        return;
    };
    let snapshot = TextSnapshot::new(text);
    let scanner = TextScanner::new(ScanOptions {
        multi_line: true,
        ..ScanOptions::default()
    });
    let matches = scanner.scan(&snapshot, pattern);

    let index = LineIndex::new(&snapshot);
    let mut previous_end = 0;
    for span in matches {
        assert!(span.start() >= previous_end);
        assert!(span.end() <= snapshot.len());
        for offset in [span.start(), span.end()] {
            assert_eq!(index.position(offset), offset_to_position(&snapshot, offset));
        }
        previous_end = span.end();
    }
});
