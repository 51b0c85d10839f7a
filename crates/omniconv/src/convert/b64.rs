use base64::{
    Engine as _,
    alphabet,
    engine::{
        DecodePaddingMode,
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
    },
};

use super::ConvertError;

/// Standard alphabet for input that carries no padding at all.
const STANDARD_UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Encodes the UTF-8 bytes of `text` as padded standard Base64.
#[must_use]
pub fn to_base64(text: &str) -> String {
    STANDARD.encode(text)
}

/// Decodes standard Base64 back into UTF-8 text.
///
/// Input is either fully padded or not padded at all. Any other amount of
/// `=` is rejected.
pub fn from_base64(encoded: &str) -> Result<String, ConvertError> {
    let engine = if encoded.contains('=') {
        &STANDARD
    } else {
        &STANDARD_UNPADDED
    };
    let bytes = engine.decode(encoded).map_err(|err| {
        log::debug!("base64 decode failed: {err}");
        ConvertError::InvalidBase64
    })?;
    String::from_utf8(bytes).map_err(|err| {
        log::debug!("decoded base64 is not utf-8: {err}");
        ConvertError::InvalidBase64
    })
}
