//! UTF-16 decoding and encoding
//!
//! Surrogate pairs combine into supplementary-plane codepoints on decode
//! and are emitted for codepoints beyond the BMP on encode. Lone low
//! surrogates pass through as raw codepoint values rather than being
//! rejected; see the decoder and encoder docs for the exact leniency.

use crate::Result;
use crate::code_pos;
use crate::error::{UnicodeEncodingError, Utf16EncodingError};
use crate::strings::{
    Codepoint, MAX_CODEPOINT, SUPPLEMENTARY_START, Utf16String, UnicodeString, is_high_surrogate,
    is_low_surrogate,
};

/// Decoder from UTF-16 code units to Unicode codepoints.
pub struct Utf16Decoder;

impl Utf16Decoder {
    /// Create a new UTF-16 decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode a UTF-16 code-unit sequence into codepoints.
    ///
    /// A high surrogate must be followed by a low surrogate; the pair
    /// combines as `((hi - 0xD800) << 10) + (lo - 0xDC00) + 0x10000`. A high
    /// surrogate at the end of input fails at its own index; a unit outside
    /// the low-surrogate range following a high surrogate fails at that
    /// unit's index. Every other unit, lone low surrogates included, passes
    /// through as its own codepoint value.
    pub fn decode(&self, utf16: &[u16]) -> Result<UnicodeString> {
        let mut unicode = UnicodeString::with_capacity(utf16.len());
        let mut i = 0;

        while i < utf16.len() {
            let unit = utf16[i];
            if !is_high_surrogate(unit) {
                unicode.push(unit as Codepoint);
                i += 1;
                continue;
            }

            if i + 1 >= utf16.len() {
                return Err(Utf16EncodingError::new(
                    format!(
                        "truncated UTF-16 sequence: high surrogate {unit:#06X} at index {i} \
                         has no low surrogate"
                    ),
                    code_pos!(),
                    utf16.to_vec(),
                    i,
                )
                .into());
            }

            let low = utf16[i + 1];
            if !is_low_surrogate(low) {
                return Err(Utf16EncodingError::new(
                    format!(
                        "invalid UTF-16 sequence: expected a low surrogate after \
                         {unit:#06X}, found {low:#06X} at index {}",
                        i + 1
                    ),
                    code_pos!(),
                    utf16.to_vec(),
                    i + 1,
                )
                .into());
            }

            let point = (((unit - 0xD800) as Codepoint) << 10)
                + (low - 0xDC00) as Codepoint
                + SUPPLEMENTARY_START;
            unicode.push(point);
            i += 2;
        }

        Ok(unicode)
    }
}

/// Encoder from Unicode codepoints to UTF-16 code units.
pub struct Utf16Encoder;

impl Utf16Encoder {
    /// Create a new UTF-16 encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode a codepoint sequence as UTF-16.
    ///
    /// BMP codepoints emit a single unit; codepoints in
    /// `[0x10000, 0x10FFFF]` emit a surrogate pair. Surrogate-range
    /// codepoints emit their value as a single unit, mirroring the
    /// decoder's pass-through. A codepoint beyond U+10FFFF fails at its own
    /// index.
    pub fn encode(&self, unicode: &[Codepoint]) -> Result<Utf16String> {
        let mut utf16 = Utf16String::with_capacity(unicode.len());

        for (index, &point) in unicode.iter().enumerate() {
            if point < SUPPLEMENTARY_START {
                utf16.push(point as u16);
            } else if point <= MAX_CODEPOINT {
                let offset = point - SUPPLEMENTARY_START;
                utf16.push(((offset >> 10) + 0xD800) as u16);
                utf16.push(((offset & 0x3FF) + 0xDC00) as u16);
            } else {
                return Err(UnicodeEncodingError::new(
                    format!("invalid codepoint {point:#X} at index {index}"),
                    code_pos!(),
                    unicode.to_vec(),
                    index,
                )
                .into());
            }
        }

        Ok(utf16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bmp_passthrough() {
        let unicode = Utf16Decoder::new().decode(&[0x0041, 0x00E9, 0xFFFD]).unwrap();
        assert_eq!(unicode, [0x0041, 0x00E9, 0xFFFD]);
    }

    #[test]
    fn test_decode_surrogate_pair() {
        let unicode = Utf16Decoder::new().decode(&[0xD83D, 0xDE00]).unwrap();
        assert_eq!(unicode, [0x1F600]);
    }

    #[test]
    fn test_decode_pair_range_extremes() {
        let unicode = Utf16Decoder::new()
            .decode(&[0xD800, 0xDC00, 0xDBFF, 0xDFFF])
            .unwrap();
        assert_eq!(unicode, [0x10000, 0x10FFFF]);
    }

    #[test]
    fn test_decode_lone_high_surrogate_fails_at_own_index() {
        let err = Utf16Decoder::new().decode(&[0xD83D]).unwrap_err();
        assert_eq!(err.offending_index(), 0);
    }

    #[test]
    fn test_decode_bad_low_surrogate_fails_at_low_index() {
        let err = Utf16Decoder::new().decode(&[0xD83D, 0x0041]).unwrap_err();
        assert_eq!(err.offending_index(), 1);
    }

    #[test]
    fn test_decode_lone_low_surrogate_passes_through() {
        let unicode = Utf16Decoder::new().decode(&[0xDC00, 0x0041]).unwrap();
        assert_eq!(unicode, [0xDC00, 0x0041]);
    }

    #[test]
    fn test_encode_bmp_single_unit() {
        let units = Utf16Encoder::new().encode(&[0x0041, 0xFFFF]).unwrap();
        assert_eq!(units, [0x0041, 0xFFFF]);
    }

    #[test]
    fn test_encode_surrogate_pair() {
        let units = Utf16Encoder::new().encode(&[0x1F600]).unwrap();
        assert_eq!(units, [0xD83D, 0xDE00]);
    }

    #[test]
    fn test_encode_supplementary_extremes() {
        let units = Utf16Encoder::new().encode(&[0x10000, 0x10FFFF]).unwrap();
        assert_eq!(units, [0xD800, 0xDC00, 0xDBFF, 0xDFFF]);
    }

    #[test]
    fn test_encode_surrogate_codepoint_single_unit() {
        let units = Utf16Encoder::new().encode(&[0xD800, 0xDFFF]).unwrap();
        assert_eq!(units, [0xD800, 0xDFFF]);
    }

    #[test]
    fn test_encode_out_of_range() {
        let err = Utf16Encoder::new().encode(&[0x110000]).unwrap_err();
        assert_eq!(err.offending_index(), 0);
        match err {
            crate::EncodingError::Unicode(err) => {
                assert_eq!(err.offending_codepoints(), &[0x110000]);
            }
            other => panic!("expected codepoint error, got {other:?}"),
        }
    }
}
