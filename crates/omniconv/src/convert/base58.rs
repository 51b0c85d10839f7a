//! Bitcoin-style Base58 over arbitrary precision integers.
//!
//! Unlike Base58Check, leading zero bytes are not preserved: the value is
//! treated as a single number.

use num::{BigUint, Zero as _};

use super::{ConvertError, radix::parse_unsigned};

/// The Base58 alphabet: no `0`, `O`, `I` or `l`.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 58;

/// Encodes a non-negative hexadecimal integer as Base58.
pub fn to_base58(hex: &str) -> Result<String, ConvertError> {
    let value = parse_unsigned(hex, 16).ok_or(ConvertError::InvalidHex)?;
    if value.is_zero() {
        return Ok("1".to_string());
    }
    let alphabet = ALPHABET.as_bytes();
    // Remainders come out least significant first.
    let encoded = value
        .to_radix_le(BASE)
        .into_iter()
        .rev()
        .map(|digit| char::from(alphabet[usize::from(digit)]))
        .collect();
    Ok(encoded)
}

/// Decodes a Base58 string to an uppercase hexadecimal integer.
pub fn from_base58(text: &str) -> Result<String, ConvertError> {
    let mut value = BigUint::zero();
    for (index, ch) in text.chars().enumerate() {
        let Some(digit) = ALPHABET.find(ch) else {
            log::debug!("rejecting base58 input: {ch:?} at {index} is not in the alphabet");
            return Err(ConvertError::InvalidBase58Char { ch, index });
        };
        value = value * BASE + BigUint::from(digit);
    }
    Ok(value.to_str_radix(16).to_ascii_uppercase())
}
