//! Conversion facade
//!
//! Free functions over the decoder and encoder components. The composed
//! conversions route through the codepoint form internally so callers never
//! handle it; errors from either stage propagate unchanged, preserving the
//! offending index and sequence of whichever stage failed.

use crate::Result;
use crate::strings::{Codepoint, UnicodeString, Utf8String, Utf16String};
use crate::utf8::{Utf8Decoder, Utf8Encoder};
use crate::utf16::{Utf16Decoder, Utf16Encoder};

/// Decode a UTF-8 byte sequence into Unicode codepoints.
pub fn utf8_to_unicode(utf8: &[u8]) -> Result<UnicodeString> {
    Utf8Decoder::new().decode(utf8)
}

/// Encode a sequence of Unicode codepoints as UTF-8.
pub fn unicode_to_utf8(unicode: &[Codepoint]) -> Result<Utf8String> {
    Utf8Encoder::new().encode(unicode)
}

/// Decode a UTF-16 code-unit sequence into Unicode codepoints.
pub fn utf16_to_unicode(utf16: &[u16]) -> Result<UnicodeString> {
    Utf16Decoder::new().decode(utf16)
}

/// Encode a sequence of Unicode codepoints as UTF-16.
pub fn unicode_to_utf16(unicode: &[Codepoint]) -> Result<Utf16String> {
    Utf16Encoder::new().encode(unicode)
}

/// Convert a UTF-8 byte sequence directly to UTF-16 code units.
pub fn utf8_to_utf16(utf8: &[u8]) -> Result<Utf16String> {
    tracing::debug!("transcoding {} UTF-8 bytes to UTF-16", utf8.len());
    let unicode = Utf8Decoder::new().decode(utf8)?;
    let utf16 = Utf16Encoder::new().encode(&unicode)?;
    tracing::debug!("transcoded into {} UTF-16 units", utf16.len());
    Ok(utf16)
}

/// Convert a UTF-16 code-unit sequence directly to UTF-8 bytes.
pub fn utf16_to_utf8(utf16: &[u16]) -> Result<Utf8String> {
    tracing::debug!("transcoding {} UTF-16 units to UTF-8", utf16.len());
    let unicode = Utf16Decoder::new().decode(utf16)?;
    let utf8 = Utf8Encoder::new().encode(&unicode)?;
    tracing::debug!("transcoded into {} UTF-8 bytes", utf8.len());
    Ok(utf8)
}
