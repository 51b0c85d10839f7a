#![no_main]

use std::fmt::Write as _;

use libfuzzer_sys::fuzz_target;
use omniconv::convert::{from_base58, to_base58};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let hex = data.iter().fold(String::new(), |mut acc, byte| {
        write!(acc, "{byte:02x}").unwrap();
        acc
    });

    let encoded = to_base58(&hex).unwrap();
    let decoded = from_base58(&encoded).unwrap();

    let trimmed = hex.trim_start_matches('0').to_ascii_uppercase();
    let expected = if trimmed.is_empty() { "0" } else { &trimmed };
    assert_eq!(decoded, expected);
});
