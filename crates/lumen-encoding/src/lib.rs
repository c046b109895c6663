//! Lumen Encoding - Strict Unicode Transcoding
//!
//! This crate is the text-encoding layer of the Lumen engine:
//! - UTF-8 decode/encode with fail-fast validation
//! - UTF-16 decode/encode with surrogate-pair handling
//! - Direct UTF-8 <-> UTF-16 conversion through the codepoint form
//! - Precise error reporting: offending index, an owned copy of the failing
//!   input, the source position the error was raised from, and a causal
//!   error chain
//!
//! Every operation is a pure function over borrowed input; nothing is
//! retained beyond the call except inside a returned error.
//!
//! # Example
//! ```
//! use lumen_encoding::convert;
//!
//! let utf16 = convert::utf8_to_utf16("A😀".as_bytes())?;
//! assert_eq!(utf16, [0x0041, 0xD83D, 0xDE00]);
//!
//! let err = convert::utf8_to_unicode(&[0xC2, 0x20]).unwrap_err();
//! assert_eq!(err.offending_index(), 1);
//! # Ok::<(), lumen_encoding::EncodingError>(())
//! ```

pub mod code_pos;
pub mod convert;
pub mod error;
pub mod strings;
pub mod utf8;
pub mod utf16;

pub use code_pos::CodePos;
pub use convert::{
    unicode_to_utf8, unicode_to_utf16, utf8_to_unicode, utf8_to_utf16, utf16_to_unicode,
    utf16_to_utf8,
};
pub use error::{EncodingError, UnicodeEncodingError, Utf8EncodingError, Utf16EncodingError};
pub use strings::{Codepoint, UnicodeString, Utf8String, Utf16String};
pub use utf8::{Utf8Decoder, Utf8Encoder};
pub use utf16::{Utf16Decoder, Utf16Encoder};

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, EncodingError>;
