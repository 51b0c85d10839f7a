use itertools::Itertools as _;

/// Reverses the byte order of a hex string.
///
/// An optional `0x` prefix is dropped, and odd-length input is padded with
/// a leading `0`. The characters are never validated, so this works on any
/// text that is laid out as two-character groups.
#[must_use]
pub fn endian_swap(hex: &str) -> String {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    let padding = (digits.chars().count() % 2 == 1).then_some('0');
    let groups: Vec<String> = padding
        .into_iter()
        .chain(digits.chars())
        .chunks(2)
        .into_iter()
        .map(Iterator::collect)
        .collect();
    groups.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_byte_order() {
        assert_eq!(endian_swap("12345678"), "78563412");
        assert_eq!(endian_swap("0xdeadbeef"), "efbeadde");
        assert_eq!(endian_swap(""), "");
    }

    #[test]
    fn pads_odd_length() {
        assert_eq!(endian_swap("abc"), "bc0a");
        assert_eq!(endian_swap("0x1"), "01");
    }

    #[test]
    fn passes_non_hex_through() {
        assert_eq!(endian_swap("zzyyxx"), "xxyyzz");
        assert_eq!(endian_swap("héllo!"), "o!llhé");
    }

    #[test]
    fn only_strips_leading_prefix() {
        assert_eq!(endian_swap("aa0xbb"), "bb0xaa");
    }
}
