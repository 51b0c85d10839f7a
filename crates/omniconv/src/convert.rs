//! Conversions between text representations.
//!
//! Every conversion takes one string and produces one string. Failures are
//! reported as [`ConvertError`], whose display text is the short message a
//! user sees in place of a result (`"Error"`, `"Invalid Hex"`, ...).

use std::{fmt, str::FromStr};

mod b64;
mod base58;
mod endian;
mod error;
mod radix;

pub use b64::{from_base64, to_base64};
pub use base58::{ALPHABET as BASE58_ALPHABET, from_base58, to_base58};
pub use endian::endian_swap;
pub use error::ConvertError;
pub use radix::{dec_to_hex, hex_to_dec};

/// One of the named conversion actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    DecToHex,
    HexToDec,
    HexToBase58,
    Base58ToHex,
    StringToBase64,
    Base64ToString,
    EndianSwap,
}

impl Conversion {
    /// All conversions, in the order they are presented to users.
    pub const ALL: [Conversion; 7] = [
        Conversion::DecToHex,
        Conversion::HexToDec,
        Conversion::HexToBase58,
        Conversion::Base58ToHex,
        Conversion::StringToBase64,
        Conversion::Base64ToString,
        Conversion::EndianSwap,
    ];

    /// The human readable label for the action.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Conversion::DecToHex => "Dec -> Hex",
            Conversion::HexToDec => "Hex -> Dec",
            Conversion::HexToBase58 => "Hex -> Base58",
            Conversion::Base58ToHex => "Base58 -> Hex",
            Conversion::StringToBase64 => "String -> Base64",
            Conversion::Base64ToString => "Base64 -> String",
            Conversion::EndianSwap => "Endian Swap (Hex)",
        }
    }

    /// The machine readable name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Conversion::DecToHex => "dec-to-hex",
            Conversion::HexToDec => "hex-to-dec",
            Conversion::HexToBase58 => "hex-to-base58",
            Conversion::Base58ToHex => "base58-to-hex",
            Conversion::StringToBase64 => "string-to-base64",
            Conversion::Base64ToString => "base64-to-string",
            Conversion::EndianSwap => "endian-swap",
        }
    }

    pub fn run(self, input: &str) -> Result<String, ConvertError> {
        match self {
            Conversion::DecToHex => dec_to_hex(input),
            Conversion::HexToDec => hex_to_dec(input),
            Conversion::HexToBase58 => to_base58(input),
            Conversion::Base58ToHex => from_base58(input),
            Conversion::StringToBase64 => Ok(to_base64(input)),
            Conversion::Base64ToString => from_base64(input),
            Conversion::EndianSwap => Ok(endian_swap(input)),
        }
    }

    /// Runs the conversion, rendering failures as their display text.
    ///
    /// This never fails, so the output may be an error message rather than
    /// a converted value. Use [`Conversion::run`] when the distinction
    /// matters.
    #[must_use]
    pub fn run_display(self, input: &str) -> String {
        match self.run(input) {
            Ok(value) => value,
            Err(err) => err.to_string(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown conversion {0:?}")]
pub struct UnknownConversion(String);

impl FromStr for Conversion {
    type Err = UnknownConversion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Conversion::ALL
            .into_iter()
            .find(|conv| conv.name() == s)
            .ok_or_else(|| UnknownConversion(s.to_string()))
    }
}
