/// Why a conversion could not produce a value.
///
/// The display text of each variant is fixed: hosts show it verbatim in
/// place of a result, so it must not change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input was not an integer in the expected radix.
    #[error("Error")]
    InvalidNumber,
    /// The input was not a non-negative hexadecimal integer.
    #[error("Invalid Hex")]
    InvalidHex,
    /// The input was not Base64, or did not decode to UTF-8 text.
    #[error("Invalid Base64")]
    InvalidBase64,
    /// A character outside the Base58 alphabet.
    #[error("Invalid Base58 Char")]
    InvalidBase58Char { ch: char, index: usize },
}

impl ConvertError {
    /// Returns true if `text` is the display text of some [`ConvertError`].
    ///
    /// Only useful for callers that handle conversion output as plain
    /// strings.
    #[must_use]
    pub fn is_error_text(text: &str) -> bool {
        matches!(
            text,
            "Error" | "Invalid Hex" | "Invalid Base64" | "Invalid Base58 Char"
        )
    }
}
