//! UTF-8 decoding and encoding
//!
//! Fail-fast: the first invalid unit aborts the conversion. The error
//! carries the offending index and an owned copy of the input, so callers
//! can report precise input-location diagnostics.

use crate::Result;
use crate::code_pos;
use crate::error::{UnicodeEncodingError, Utf8EncodingError};
use crate::strings::{Codepoint, MAX_CODEPOINT, UnicodeString, Utf8String, is_valid_codepoint};

/// Decoder from UTF-8 bytes to Unicode codepoints.
pub struct Utf8Decoder;

impl Utf8Decoder {
    /// Create a new UTF-8 decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode a UTF-8 byte sequence into codepoints.
    ///
    /// The lead byte selects the sequence length (1-4); continuation bytes
    /// must lie in `[0x80, 0xBF]`. A truncated sequence fails at the lead
    /// byte's index, a bad continuation byte at its own index, and a lead
    /// byte outside the four recognized ranges at its own index. Sequences
    /// decoding beyond U+10FFFF are rejected at the lead byte's index.
    pub fn decode(&self, utf8: &[u8]) -> Result<UnicodeString> {
        let mut unicode = UnicodeString::with_capacity(utf8.len());
        let mut i = 0;

        while i < utf8.len() {
            let lead = utf8[i];
            let (length, lead_bits) = match lead {
                0x00..=0x7F => (1, (lead & 0x7F) as Codepoint),
                0xC0..=0xDF => (2, (lead & 0x1F) as Codepoint),
                0xE0..=0xEF => (3, (lead & 0x0F) as Codepoint),
                0xF0..=0xF7 => (4, (lead & 0x07) as Codepoint),
                _ => {
                    return Err(Utf8EncodingError::new(
                        format!("invalid UTF-8 lead byte {lead:#04X} at index {i}"),
                        code_pos!(),
                        utf8.to_vec(),
                        i,
                    )
                    .into());
                }
            };

            if i + length > utf8.len() {
                return Err(Utf8EncodingError::new(
                    format!(
                        "truncated UTF-8 sequence: lead byte {lead:#04X} at index {i} \
                         expects {} continuation byte(s)",
                        length - 1
                    ),
                    code_pos!(),
                    utf8.to_vec(),
                    i,
                )
                .into());
            }

            let mut point = lead_bits;
            for offset in 1..length {
                let byte = utf8[i + offset];
                if !matches!(byte, 0x80..=0xBF) {
                    return Err(Utf8EncodingError::new(
                        format!(
                            "invalid UTF-8 continuation byte {byte:#04X} at index {}",
                            i + offset
                        ),
                        code_pos!(),
                        utf8.to_vec(),
                        i + offset,
                    )
                    .into());
                }
                point = (point << 6) | (byte & 0x3F) as Codepoint;
            }

            if !is_valid_codepoint(point) {
                return Err(Utf8EncodingError::new(
                    format!("UTF-8 sequence at index {i} decodes to {point:#X}, beyond U+10FFFF"),
                    code_pos!(),
                    utf8.to_vec(),
                    i,
                )
                .into());
            }

            unicode.push(point);
            i += length;
        }

        Ok(unicode)
    }
}

/// Encoder from Unicode codepoints to UTF-8 bytes.
pub struct Utf8Encoder;

impl Utf8Encoder {
    /// Create a new UTF-8 encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode a codepoint sequence as UTF-8.
    ///
    /// Byte count is selected by magnitude (1 byte up to U+007F, 2 up to
    /// U+07FF, 3 up to U+FFFF, 4 up to U+10FFFF). A codepoint beyond
    /// U+10FFFF fails at its own index. Surrogate-range codepoints are not
    /// rejected here; they encode in the 3-byte form.
    pub fn encode(&self, unicode: &[Codepoint]) -> Result<Utf8String> {
        let mut utf8 = Utf8String::with_capacity(unicode.len());

        for (index, &point) in unicode.iter().enumerate() {
            match point {
                0x0000..=0x007F => utf8.push(point as u8),
                0x0080..=0x07FF => {
                    utf8.push(0xC0 | (point >> 6) as u8);
                    utf8.push(0x80 | (point & 0x3F) as u8);
                }
                0x0800..=0xFFFF => {
                    utf8.push(0xE0 | (point >> 12) as u8);
                    utf8.push(0x80 | ((point >> 6) & 0x3F) as u8);
                    utf8.push(0x80 | (point & 0x3F) as u8);
                }
                0x10000..=MAX_CODEPOINT => {
                    utf8.push(0xF0 | (point >> 18) as u8);
                    utf8.push(0x80 | ((point >> 12) & 0x3F) as u8);
                    utf8.push(0x80 | ((point >> 6) & 0x3F) as u8);
                    utf8.push(0x80 | (point & 0x3F) as u8);
                }
                _ => {
                    return Err(UnicodeEncodingError::new(
                        format!("invalid codepoint {point:#X} at index {index}"),
                        code_pos!(),
                        unicode.to_vec(),
                        index,
                    )
                    .into());
                }
            }
        }

        Ok(utf8)
    }
}
