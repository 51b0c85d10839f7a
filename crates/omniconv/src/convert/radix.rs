use num::{BigInt, BigUint, Num as _};

use super::ConvertError;

/// Splits off an optional leading sign, returning whether it was negative.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Checks that `digits` is a non-empty run of ASCII digits in `radix`.
///
/// `num` is more lenient than we want (it skips `_` separators and accepts
/// a sign of its own), so the digits are validated before handing them
/// over.
fn all_digits(digits: &str, radix: u32) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii() && c.is_digit(radix))
}

fn parse_signed(text: &str, radix: u32) -> Option<BigInt> {
    let (negative, digits) = split_sign(text);
    if !all_digits(digits, radix) {
        return None;
    }
    let magnitude = BigInt::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub(super) fn parse_unsigned(text: &str, radix: u32) -> Option<BigUint> {
    let digits = text.strip_prefix('+').unwrap_or(text);
    if !all_digits(digits, radix) {
        return None;
    }
    BigUint::from_str_radix(digits, radix).ok()
}

fn format_hex_upper(value: &BigInt) -> String {
    value.to_str_radix(16).to_ascii_uppercase()
}

/// Converts a signed decimal integer to uppercase hexadecimal.
pub fn dec_to_hex(dec: &str) -> Result<String, ConvertError> {
    let value = parse_signed(dec, 10).ok_or(ConvertError::InvalidNumber)?;
    Ok(format_hex_upper(&value))
}

/// Converts a signed hexadecimal integer to decimal.
pub fn hex_to_dec(hex: &str) -> Result<String, ConvertError> {
    let value = parse_signed(hex, 16).ok_or(ConvertError::InvalidNumber)?;
    Ok(value.to_string())
}
